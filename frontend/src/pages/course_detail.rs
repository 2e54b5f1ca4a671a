use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct CourseDetailProps {
    pub id: String,
}

#[function_component(CourseDetail)]
pub fn course_detail(props: &CourseDetailProps) -> Html {
    html! {
        <div class="container">
            <h2>{ "Course" }</h2>
            <p class="text-muted">{ format!("Course ID: {}", props.id) }</p>
            <Link<Route> to={Route::Courses}>
                <button class="btn">{ "Back to courses" }</button>
            </Link<Route>>
        </div>
    }
}
