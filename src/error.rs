use thiserror::Error;

use crate::lesson::Issue;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("failed to read lesson file: {0}")]
    Io(#[from] std::io::Error),

    #[error("lesson is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("lesson is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("unsupported lesson file extension: {0}")]
    UnsupportedFormat(String),

    #[error("unsupported reading level {0}, expected 1, 3 or 6")]
    UnsupportedLevel(u8),

    #[error("lesson '{lesson_id}' has {} issue(s)", .issues.len())]
    Invalid { lesson_id: String, issues: Vec<Issue> },
}
