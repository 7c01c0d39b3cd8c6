pub mod course_request;
pub mod faculty;
