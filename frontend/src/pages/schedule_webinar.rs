use std::rc::Rc;

use chrono::{NaiveDate, NaiveTime};
use shared::schedule::{PICKER_DATE_FORMAT, PICKER_TIME_FORMAT};
use shared::screens::webinar_scheduler::{load_webinars, submit_webinar, FormErrors};
use shared::screens::{FormEdit, WebinarEvent, WebinarScheduler};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notice::NoticeBanner;
use crate::components::webinar_table::WebinarTable;
use crate::services::api::ApiService;

fn event_value(e: &InputEvent) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return input.value();
    }
    e.target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, PICKER_DATE_FORMAT).ok()
}

// Time inputs report seconds only when a sub-minute step is set
fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, PICKER_TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

fn format_time(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format(PICKER_TIME_FORMAT).to_string())
        .unwrap_or_default()
}

fn field_error(errors: &FormErrors, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! { <div class="field-error">{ message }</div> },
        None => html! {},
    }
}

#[derive(Default)]
struct SchedulerState(WebinarScheduler);

impl Reducible for SchedulerState {
    type Action = WebinarEvent;

    fn reduce(self: Rc<Self>, event: WebinarEvent) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(event);
        Rc::new(Self(next))
    }
}

#[function_component(ScheduleWebinar)]
pub fn schedule_webinar() -> Html {
    let state = use_reducer(SchedulerState::default);

    {
        let dispatcher = state.dispatcher();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                load_webinars(&ApiService::default(), move |event| dispatcher.dispatch(event)).await;
            });
            || ()
        });
    }

    let update = |to_edit: fn(String) -> FormEdit| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            dispatcher.dispatch(WebinarEvent::Edited(to_edit(event_value(&e))));
        })
    };

    let onsubmit = {
        let dispatcher = state.dispatcher();
        let form = state.0.form.clone();
        let submitting = state.0.is_submitting();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submitting {
                return;
            }

            let dispatcher = dispatcher.clone();
            let form = form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                submit_webinar(&ApiService::default(), &form, move |event| {
                    dispatcher.dispatch(event)
                })
                .await;
            });
        })
    };

    let screen = &state.0;
    let form = &screen.form;
    let errors = &screen.field_errors;
    let date_value = form
        .date
        .map(|d| d.format(PICKER_DATE_FORMAT).to_string())
        .unwrap_or_default();

    html! {
        <div class="container mx-auto p-4">
            <h2 class="page-title">{ "Schedule Webinar" }</h2>
            <NoticeBanner notice={screen.notice.clone()} />

            <form class="webinar-form" {onsubmit}>
                <div class="form-heading">
                    <h1>{ "Add Details" }</h1>
                </div>

                <label>{ "Title" }
                    <input
                        type="text"
                        placeholder="Enter webinar title"
                        value={form.title.clone()}
                        oninput={update(FormEdit::Title)}
                    />
                </label>
                { field_error(errors, "title") }

                <label>{ "Meet Link" }
                    <input
                        type="text"
                        placeholder="www.example.com"
                        value={form.meet_link.clone()}
                        oninput={update(FormEdit::MeetLink)}
                    />
                </label>
                { field_error(errors, "meet_link") }

                <div class="form-row">
                    <div class="form-col">
                        <label>{ "Time" }
                            <input
                                type="time"
                                value={format_time(form.start_time)}
                                oninput={update(|v| FormEdit::StartTime(parse_time(&v)))}
                            />
                            { " - " }
                            <input
                                type="time"
                                value={format_time(form.end_time)}
                                oninput={update(|v| FormEdit::EndTime(parse_time(&v)))}
                            />
                        </label>
                        { field_error(errors, "time_range") }
                    </div>

                    <div class="form-col">
                        <label>{ "Date" }
                            <input
                                type="date"
                                value={date_value}
                                oninput={update(|v| FormEdit::Date(parse_date(&v)))}
                            />
                        </label>
                        if let Some(label) = form.date_label() {
                            <span class="date-label">{ label }</span>
                        }
                        { field_error(errors, "date") }
                    </div>
                </div>

                <label>{ "Description" }
                    <textarea
                        rows="4"
                        placeholder="What will attendees learn?"
                        value={form.description.clone()}
                        oninput={update(FormEdit::Description)}
                    />
                </label>
                { field_error(errors, "description") }

                <button type="submit" class="btn btn-block" disabled={screen.is_submitting()}>
                    { if screen.is_submitting() { "Scheduling..." } else { "Schedule Webinar" } }
                </button>
            </form>

            <h2 class="section-title">{ "Scheduled" }</h2>
            <WebinarTable rows={screen.rows()} />
        </div>
    }
}
