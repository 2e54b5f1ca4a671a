use crate::api::{CourseResponse, CreateCourseRequest, CreatedResponse, ListCoursesResponse};
use crate::client::{ClientError, RecordApi};
use crate::display::CourseCard;
use crate::screens::Notice;

pub const LOAD_FAILED: &str = "Failed to load courses. Please refresh the page.";
pub const SAVE_FAILED: &str = "Failed to create course. Please try again.";

/// Everything that can change the course list screen.
#[derive(Debug)]
pub enum CourseListEvent {
    ModalOpened,
    ModalClosed,
    SaveStarted,
    Saved(Result<CreatedResponse, ClientError>),
    Loaded(Result<ListCoursesResponse, ClientError>),
}

/// Course list screen: the fetched courses plus the create-course modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseList {
    /// Courses in the order the store returned them.
    pub courses: Vec<CourseResponse>,
    pub modal_open: bool,
    pub saving: bool,
    pub notice: Option<Notice>,
}

impl CourseList {
    pub fn cards(&self) -> Vec<CourseCard> {
        self.courses.iter().map(CourseCard::from).collect()
    }

    pub fn apply(&mut self, event: CourseListEvent) {
        match event {
            CourseListEvent::ModalOpened => {
                self.modal_open = true;
                self.notice = None;
            }
            CourseListEvent::ModalClosed => self.modal_open = false,
            CourseListEvent::SaveStarted => self.saving = true,
            // Success closes the modal; failure leaves it open for resubmission.
            CourseListEvent::Saved(Ok(created)) => {
                tracing::info!("Course created with ID: {}", created.id);
                self.saving = false;
                self.modal_open = false;
                self.notice = None;
            }
            CourseListEvent::Saved(Err(e)) => {
                tracing::error!("Error adding course: {}", e);
                self.saving = false;
                self.notice = Some(Notice::error(SAVE_FAILED));
            }
            CourseListEvent::Loaded(Ok(response)) => {
                tracing::debug!("Loaded {} courses", response.total);
                self.courses = response.courses;
            }
            // The previous list stays on screen.
            CourseListEvent::Loaded(Err(e)) => {
                tracing::error!("Failed to fetch courses: {}", e);
                self.notice = Some(Notice::load_failed(self.notice.take(), LOAD_FAILED));
            }
        }
    }
}

/// Reload every course.
pub async fn load_courses<A>(api: &A, dispatch: impl Fn(CourseListEvent))
where
    A: RecordApi + ?Sized,
{
    dispatch(CourseListEvent::Loaded(api.list_courses().await));
}

/// Create a course from the modal input, sent as entered, then reload the
/// list if the write succeeded.
pub async fn save_course<A>(api: &A, request: CreateCourseRequest, dispatch: impl Fn(CourseListEvent))
where
    A: RecordApi + ?Sized,
{
    dispatch(CourseListEvent::SaveStarted);
    let saved = api.create_course(request).await;
    let reload = saved.is_ok();
    dispatch(CourseListEvent::Saved(saved));

    if reload {
        load_courses(api, dispatch).await;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::screens::testing::FakeApi;

    fn apply_to(screen: &RefCell<CourseList>) -> impl Fn(CourseListEvent) + '_ {
        move |event| screen.borrow_mut().apply(event)
    }

    #[tokio::test]
    async fn test_load_keeps_store_order() {
        let api = FakeApi::default();
        for name in ["Zeta", "Alpha", "Mu"] {
            api.create_course(CreateCourseRequest {
                course_name: name.to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        }

        let screen = RefCell::new(CourseList::default());
        load_courses(&api, apply_to(&screen)).await;

        let screen = screen.into_inner();
        let names: Vec<_> = screen.courses.iter().map(|c| c.course_name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mu"]);
    }

    #[tokio::test]
    async fn test_save_closes_modal_and_reloads() {
        let api = FakeApi::default();
        let screen = RefCell::new(CourseList::default());
        screen.borrow_mut().apply(CourseListEvent::ModalOpened);

        save_course(&api, CreateCourseRequest::default(), apply_to(&screen)).await;

        let screen = screen.into_inner();
        assert!(!screen.modal_open);
        assert!(!screen.saving);
        assert!(screen.notice.is_none());
        assert_eq!(api.list_calls.get(), 1);
        assert_eq!(screen.courses.len(), 1);
        assert_eq!(screen.courses[0].id, api.courses.borrow()[0].id);
    }

    #[tokio::test]
    async fn test_empty_fields_persist_raw_and_render_defaults() {
        let api = FakeApi::default();
        let screen = RefCell::new(CourseList::default());
        save_course(&api, CreateCourseRequest::default(), apply_to(&screen)).await;

        let stored = api.courses.borrow()[0].clone();
        assert_eq!(stored.course_name, "");
        assert_eq!(stored.sub_heading, "");
        assert_eq!(stored.price, "");

        let card = screen.borrow().cards()[0].clone();
        assert_eq!(card.title, "Demo");
        assert_eq!(card.sub_heading, "Subheading");
        assert_eq!(card.price, "100");
    }

    #[tokio::test]
    async fn test_write_failure_keeps_modal_open() {
        let api = FakeApi::default();
        api.fail_writes.set(true);
        let screen = RefCell::new(CourseList::default());
        screen.borrow_mut().apply(CourseListEvent::ModalOpened);

        save_course(&api, CreateCourseRequest::default(), apply_to(&screen)).await;

        let screen = screen.into_inner();
        assert!(screen.modal_open);
        assert!(!screen.saving);
        let notice = screen.notice.as_ref().unwrap();
        assert!(notice.is_error());
        assert_eq!(notice.message, SAVE_FAILED);
        assert_eq!(api.list_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_read_failure_keeps_previous_list() {
        let api = FakeApi::default();
        let screen = RefCell::new(CourseList::default());
        save_course(&api, CreateCourseRequest::default(), apply_to(&screen)).await;
        assert_eq!(screen.borrow().courses.len(), 1);

        api.fail_reads.set(true);
        load_courses(&api, apply_to(&screen)).await;

        let screen = screen.into_inner();
        assert_eq!(screen.courses.len(), 1);
        assert_eq!(screen.notice.as_ref().unwrap().message, LOAD_FAILED);
    }

    #[tokio::test]
    async fn test_modal_opened_while_loading_stays_open() {
        let api = FakeApi::default();
        api.create_course(CreateCourseRequest::default()).await.unwrap();

        // The user opens the modal before the initial load resolves.
        let screen = RefCell::new(CourseList::default());
        let dispatch = |event: CourseListEvent| {
            let mut screen = screen.borrow_mut();
            screen.apply(CourseListEvent::ModalOpened);
            screen.apply(event);
        };
        load_courses(&api, dispatch).await;

        let screen = screen.into_inner();
        assert!(screen.modal_open);
        assert_eq!(screen.courses.len(), 1);
    }
}
