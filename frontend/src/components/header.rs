use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{ "Course Admin" }</h1>
                <nav>
                    <Link<Route> to={Route::Courses}>{ "Courses" }</Link<Route>>
                    { " | " }
                    <Link<Route> to={Route::ScheduleWebinar}>{ "Schedule Webinar" }</Link<Route>>
                </nav>
            </div>
        </header>
    }
}
