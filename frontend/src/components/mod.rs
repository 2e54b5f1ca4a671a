pub mod course_card;
pub mod course_modal;
pub mod header;
pub mod notice;
pub mod webinar_table;
