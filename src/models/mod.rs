pub mod lesson;
pub mod user;
pub mod filter;
pub mod demo;

pub use lesson::{Lesson, LessonStatus, LessonType};
pub use user::User;
pub use filter::{DateRange, LessonFilter};
