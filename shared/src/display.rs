use uuid::Uuid;

use crate::api::{CourseResponse, WebinarResponse};
use crate::schedule::schedule_label;

pub const DEFAULT_COURSE_NAME: &str = "Demo";
pub const DEFAULT_SUB_HEADING: &str = "Subheading";
pub const DEFAULT_PRICE: &str = "100";

const CURRENCY_SYMBOL: &str = "₹";

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

/// Values rendered on a course card. Defaults apply to display only; the
/// stored record keeps whatever was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCard {
    pub id: Uuid,
    pub title: String,
    pub sub_heading: String,
    pub price: String,
}

impl CourseCard {
    pub fn price_label(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.price)
    }
}

impl From<&CourseResponse> for CourseCard {
    fn from(course: &CourseResponse) -> Self {
        Self {
            id: course.id,
            title: or_default(&course.course_name, DEFAULT_COURSE_NAME).to_string(),
            sub_heading: or_default(&course.sub_heading, DEFAULT_SUB_HEADING).to_string(),
            price: or_default(&course.price, DEFAULT_PRICE).to_string(),
        }
    }
}

/// Values rendered in one row of the scheduled webinars table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebinarRow {
    pub id: Uuid,
    pub title: String,
    pub schedule: String,
    pub description: String,
    pub meet_link: String,
}

impl From<&WebinarResponse> for WebinarRow {
    fn from(webinar: &WebinarResponse) -> Self {
        Self {
            id: webinar.id,
            title: webinar.title.clone(),
            schedule: schedule_label(webinar.start_time.as_ref(), webinar.end_time.as_ref()),
            description: webinar.description.clone(),
            meet_link: webinar.meet_link.clone(),
        }
    }
}
