use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container">
            <div class="empty-state">
                <h2>{ "404 - Page Not Found" }</h2>
                <p>{ "There is no course or webinar page at this address." }</p>
                <Link<Route> to={Route::Courses}>
                    <button class="btn btn-primary">{ "Back to courses" }</button>
                </Link<Route>>
            </div>
        </div>
    }
}
