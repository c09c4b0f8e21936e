pub mod article;
pub mod config;
pub mod exercise;
pub mod lesson;
pub mod telemetry;
pub mod vocab;

mod error;

pub use error::LessonError;
