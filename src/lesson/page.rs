use serde::{Deserialize, Serialize};

use super::ContentBlock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// lesson id, URL-safe and unique across the catalog
    pub lesson_id: String,

    /// lesson title
    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    /// content blocks in display order
    pub content: Vec<ContentBlock>,
}

impl Lesson {
    pub fn new(lesson_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            lesson_id: lesson_id.into(),
            title: title.into(),
            subtitle: String::new(),
            content: Vec::new(),
        }
    }

    pub fn block(&self, block_id: &str) -> Option<&ContentBlock> {
        self.content.iter().find(|b| b.block_id == block_id)
    }
}
