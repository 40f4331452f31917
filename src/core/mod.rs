pub mod arithmetic;
pub mod division;
pub mod lesson;
pub mod speaker;

pub use crate::domain::model::{Lesson, LessonReport, ReportValue};
pub use crate::domain::ports::Speaker;
pub use crate::utils::error::Result;
