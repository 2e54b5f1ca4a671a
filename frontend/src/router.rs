use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    course_detail::CourseDetail, courses::Courses, not_found::NotFound,
    schedule_webinar::ScheduleWebinar,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Courses,
    #[at("/view-courses/:id")]
    CourseDetail { id: String },
    #[at("/schedule-webinar")]
    ScheduleWebinar,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Courses => html! { <Courses /> },
        Route::CourseDetail { id } => html! { <CourseDetail {id} /> },
        Route::ScheduleWebinar => html! { <ScheduleWebinar /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
