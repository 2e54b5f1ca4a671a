use std::rc::Rc;

use shared::api::CreateCourseRequest;
use shared::screens::course_list::{load_courses, save_course};
use shared::screens::{CourseList, CourseListEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::course_card::CourseCardView;
use crate::components::course_modal::CourseModal;
use crate::components::notice::NoticeBanner;
use crate::router::Route;
use crate::services::api::ApiService;

#[derive(Default)]
struct CoursesState(CourseList);

impl Reducible for CoursesState {
    type Action = CourseListEvent;

    fn reduce(self: Rc<Self>, event: CourseListEvent) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(event);
        Rc::new(Self(next))
    }
}

#[function_component(Courses)]
pub fn courses() -> Html {
    let state = use_reducer(CoursesState::default);
    let navigator = use_navigator();

    {
        let dispatcher = state.dispatcher();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                load_courses(&ApiService::default(), move |event| dispatcher.dispatch(event)).await;
            });
            || ()
        });
    }

    let on_open = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CourseListEvent::ModalOpened))
    };

    let on_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(CourseListEvent::ModalClosed))
    };

    let on_save = {
        let dispatcher = state.dispatcher();
        Callback::from(move |request: CreateCourseRequest| {
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                save_course(&ApiService::default(), request, move |event| {
                    dispatcher.dispatch(event)
                })
                .await;
            });
        })
    };

    let screen = &state.0;

    html! {
        <div class="container p-4">
            <button class="btn btn-primary" onclick={on_open}>{ "Create Course" }</button>
            <NoticeBanner notice={screen.notice.clone()} />

            <div class="mt-8">
                <h2>{ "On Going Courses" }</h2>
                <div class="course-grid">
                    { for screen.cards().into_iter().map(|card| {
                        let navigator = navigator.clone();
                        let id = card.id.to_string();
                        let on_select = Callback::from(move |_: ()| {
                            if let Some(navigator) = &navigator {
                                navigator.push(&Route::CourseDetail { id: id.clone() });
                            }
                        });

                        let key = card.id.to_string();
                        html! {
                            <CourseCardView {key} {card} {on_select} />
                        }
                    })}
                </div>
            </div>

            if screen.modal_open {
                <CourseModal saving={screen.saving} {on_save} {on_close} />
            }
        </div>
    }
}
