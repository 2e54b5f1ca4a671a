use shared::api::CreateCourseRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CourseModalProps {
    pub saving: bool,
    pub on_save: Callback<CreateCourseRequest>,
    pub on_close: Callback<()>,
}

/// Create-course dialog. Its input is dropped whenever the dialog unmounts.
#[function_component(CourseModal)]
pub fn course_modal(props: &CourseModalProps) -> Html {
    let draft = use_state(CreateCourseRequest::default);

    let update = |apply: fn(&mut CreateCourseRequest, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit((*draft).clone());
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog">
                <h3>{ "Enter Course Details" }</h3>
                <form {onsubmit}>
                    <label>{ "Course Name" }
                        <input
                            type="text"
                            value={draft.course_name.clone()}
                            oninput={update(|d, v| d.course_name = v)}
                        />
                    </label>
                    <label>{ "Sub Heading" }
                        <input
                            type="text"
                            value={draft.sub_heading.clone()}
                            oninput={update(|d, v| d.sub_heading = v)}
                        />
                    </label>
                    <label>{ "Price" }
                        <input
                            type="text"
                            inputmode="decimal"
                            value={draft.price.clone()}
                            oninput={update(|d, v| d.price = v)}
                        />
                    </label>
                    <div class="modal-actions">
                        <button type="button" class="btn" onclick={on_cancel}>{ "Cancel" }</button>
                        <button type="submit" class="btn btn-primary" disabled={props.saving}>
                            { if props.saving { "Saving..." } else { "Save" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
