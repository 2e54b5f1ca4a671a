use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::api::{CreateWebinarRequest, CreatedResponse, ListWebinarsResponse, WebinarResponse};
use crate::client::{ClientError, RecordApi};
use crate::display::WebinarRow;
use crate::schedule::{picker_date_label, wall_clock};
use crate::screens::Notice;

pub const SCHEDULED: &str = "Webinar scheduled successfully!";
pub const SCHEDULE_FAILED: &str = "Failed to schedule webinar. Please try again.";
pub const LOAD_FAILED: &str = "Failed to load webinars. Please refresh the page.";

const TIME_RANGE_FIELD: &str = "time_range";
const END_BEFORE_START: &str = "End time must not be before start time";

/// Raw scheduler form input.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct WebinarForm {
    #[validate(length(min = 1, message = "What is your title?"))]
    pub title: String,

    #[validate(length(min = 1, message = "Please enter the meet link"))]
    pub meet_link: String,

    #[validate(required(message = "Please select the date"))]
    pub date: Option<NaiveDate>,

    #[validate(required(message = "Please select the time range"))]
    pub start_time: Option<NaiveTime>,

    #[validate(required(message = "Please select the time range"))]
    pub end_time: Option<NaiveTime>,

    #[validate(length(min = 1, message = "Please enter a description"))]
    pub description: String,
}

/// Per-field validation messages, keyed by form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("form has invalid fields")]
pub struct FormErrors(pub BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            // The two time pickers are one widget on screen
            let key = match field {
                "start_time" | "end_time" => TIME_RANGE_FIELD,
                other => other,
            };
            if let Some(message) = errs.iter().find_map(|e| e.message.as_ref()) {
                fields.entry(key).or_insert_with(|| message.to_string());
            }
        }
        Self(fields)
    }
}

/// A single change made in one of the form inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    Title(String),
    MeetLink(String),
    Date(Option<NaiveDate>),
    StartTime(Option<NaiveTime>),
    EndTime(Option<NaiveTime>),
    Description(String),
}

impl WebinarForm {
    pub fn edit(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::Title(title) => self.title = title,
            FormEdit::MeetLink(link) => self.meet_link = link,
            FormEdit::Date(date) => self.date = date,
            FormEdit::StartTime(time) => self.start_time = time,
            FormEdit::EndTime(time) => self.end_time = time,
            FormEdit::Description(description) => self.description = description,
        }
    }

    /// Label for the chosen date, e.g. `5th Mar`.
    pub fn date_label(&self) -> Option<String> {
        self.date.map(picker_date_label)
    }

    /// Validate the form and build the creation request.
    pub fn to_request(&self) -> Result<CreateWebinarRequest, FormErrors> {
        self.validate()?;

        let (Some(date), Some(start_time), Some(end_time)) =
            (self.date, self.start_time, self.end_time)
        else {
            return Err(FormErrors::default());
        };

        if wall_clock(date, end_time) < wall_clock(date, start_time) {
            let mut fields = BTreeMap::new();
            fields.insert(TIME_RANGE_FIELD, END_BEFORE_START.to_string());
            return Err(FormErrors(fields));
        }

        Ok(CreateWebinarRequest {
            title: self.title.clone(),
            meet_link: self.meet_link.clone(),
            date,
            start_time,
            end_time,
            description: self.description.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Everything that can change the scheduler screen.
#[derive(Debug)]
pub enum WebinarEvent {
    Edited(FormEdit),
    Rejected(FormErrors),
    SubmitStarted,
    Submitted(Result<CreatedResponse, ClientError>),
    Loaded(Result<ListWebinarsResponse, ClientError>),
}

/// Webinar scheduler screen: the form, its validation state, and the list of
/// already scheduled webinars.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebinarScheduler {
    pub form: WebinarForm,
    pub field_errors: FormErrors,
    /// Webinars in the order the store returned them.
    pub webinars: Vec<WebinarResponse>,
    pub phase: SubmitPhase,
    pub notice: Option<Notice>,
}

impl WebinarScheduler {
    pub fn rows(&self) -> Vec<WebinarRow> {
        self.webinars.iter().map(WebinarRow::from).collect()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn apply(&mut self, event: WebinarEvent) {
        match event {
            WebinarEvent::Edited(edit) => self.form.edit(edit),
            WebinarEvent::Rejected(errors) => {
                tracing::debug!("Webinar form rejected: {:?}", errors.0);
                self.field_errors = errors;
            }
            WebinarEvent::SubmitStarted => {
                self.field_errors = FormErrors::default();
                self.phase = SubmitPhase::Submitting;
                self.notice = None;
            }
            WebinarEvent::Submitted(Ok(created)) => {
                tracing::info!("Webinar scheduled with ID: {}", created.id);
                self.phase = SubmitPhase::Idle;
                self.notice = Some(Notice::success(SCHEDULED));
                self.form = WebinarForm::default();
            }
            // The form keeps whatever it holds now, ready for resubmission.
            WebinarEvent::Submitted(Err(e)) => {
                tracing::error!("Error adding webinar: {}", e);
                self.phase = SubmitPhase::Idle;
                self.notice = Some(Notice::error(SCHEDULE_FAILED));
            }
            WebinarEvent::Loaded(Ok(response)) => {
                tracing::debug!("Loaded {} webinars", response.total);
                self.webinars = response.webinars;
            }
            // The previous list stays on screen.
            WebinarEvent::Loaded(Err(e)) => {
                tracing::error!("Failed to fetch webinars: {}", e);
                self.notice = Some(Notice::load_failed(self.notice.take(), LOAD_FAILED));
            }
        }
    }
}

/// Reload every webinar.
pub async fn load_webinars<A>(api: &A, dispatch: impl Fn(WebinarEvent))
where
    A: RecordApi + ?Sized,
{
    dispatch(WebinarEvent::Loaded(api.list_webinars().await));
}

/// Validate `form`, persist it, then reload the list if the write succeeded.
///
/// An invalid form only reports its field errors and never reaches the API.
pub async fn submit_webinar<A>(api: &A, form: &WebinarForm, dispatch: impl Fn(WebinarEvent))
where
    A: RecordApi + ?Sized,
{
    let request = match form.to_request() {
        Ok(request) => request,
        Err(errors) => {
            dispatch(WebinarEvent::Rejected(errors));
            return;
        }
    };

    dispatch(WebinarEvent::SubmitStarted);
    let created = api.create_webinar(request).await;
    let reload = created.is_ok();
    dispatch(WebinarEvent::Submitted(created));

    if reload {
        load_webinars(api, dispatch).await;
    }
}
