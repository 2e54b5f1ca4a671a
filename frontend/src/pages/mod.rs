pub mod course_detail;
pub mod courses;
pub mod not_found;
pub mod schedule_webinar;
