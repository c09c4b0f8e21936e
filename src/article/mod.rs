//! Leveled news articles: splitting homework out of article bodies and
//! collecting per-level files into article records.

mod news;
mod split;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::LessonError;

pub use news::{
    collect_articles, headline, load_article_dir, parse_article_content, parse_filename,
    ArticleFile, ArticleParts, NewsArticle, NewsFields,
};
pub use split::{
    parse_level_content, parse_level_content_with, LevelContent, SplitMarkers, HOMEWORK_MARKER,
    INSTRUCTION_MARKERS, WRITING_PROMPT_MARKERS,
};

/// Reading level of an article version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    One = 1,
    Three = 3,
    /// the only level that carries a free-writing prompt
    Six = 6,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::One, Level::Three, Level::Six];

    pub fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Level {
    type Error = LessonError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::One),
            3 => Ok(Level::Three),
            6 => Ok(Level::Six),
            other => Err(LessonError::UnsupportedLevel(other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.number()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}", self.number())
    }
}
