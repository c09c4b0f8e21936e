use std::{
    collections::HashMap,
    fs,
    path::Path,
    sync::LazyLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{parse_level_content, Level, LevelContent};
use crate::LessonError;

static LEVEL_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Lvl (\d+)").unwrap());
static PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Lvl \d+\s*").unwrap());
static SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*_\s*Breaking News English.*$").unwrap());
static NOT_SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s-]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());

/// Level and slug carried by an article file name such as
/// `Lvl 3 Dogs Learn Words _ Breaking News English.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFile {
    pub level: u8,
    pub slug: String,
}

pub fn parse_filename(filename: &str) -> Option<ArticleFile> {
    let level = LEVEL_PREFIX
        .captures(filename)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())?;

    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    let name = PREFIX.replace(stem, "");
    let name = SUFFIX.replace(&name, "");
    let name = NOT_SLUG.replace_all(&name, "").to_lowercase();
    let slug = WHITESPACE.replace_all(name.trim(), "-").to_string();

    Some(ArticleFile { level, slug })
}

/// First line of the article, trimmed.
pub fn headline(text: &str) -> String {
    text.split('\n').next().unwrap_or_default().trim().to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleParts {
    pub headline: String,
    pub body: String,
    pub questions: String,
}

/// Headline, body, and the numbered questions that start at the first `N.`
/// line.
pub fn parse_article_content(text: &str) -> ArticleParts {
    let lines: Vec<&str> = text.split('\n').collect();
    let headline = lines.first().map(|l| l.trim()).unwrap_or_default().to_string();
    let body_lines = lines.get(1..).unwrap_or_default();

    match lines.iter().position(|l| NUMBERED.is_match(l.trim())) {
        Some(start) => ArticleParts {
            headline,
            body: lines.get(1..start).unwrap_or_default().join("\n").trim().to_string(),
            questions: lines[start..].join("\n").trim().to_string(),
        },
        None => ArticleParts {
            headline,
            body: body_lines.join("\n"),
            questions: String::new(),
        },
    }
}

/// One level of an article after splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LevelVersion {
    headline: String,
    content: LevelContent,
}

/// Article record, one per slug, with every supported level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: String,
    pub fields: NewsFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsFields {
    #[serde(rename = "Headline")]
    pub headline: String,
    #[serde(rename = "Slug")]
    pub slug: String,
    #[serde(rename = "Image URL")]
    pub image_url: String,

    #[serde(rename = "Level 0 Text")]
    pub level_0_text: String,
    #[serde(rename = "Level 0 Questions")]
    pub level_0_questions: String,

    #[serde(rename = "Level 1 Text")]
    pub level_1_text: String,
    #[serde(rename = "Level 1 Questions")]
    pub level_1_questions: String,
    #[serde(rename = "Level 1 Instruction")]
    pub level_1_instruction: String,

    #[serde(rename = "Level 2 Text")]
    pub level_2_text: String,
    #[serde(rename = "Level 2 Questions")]
    pub level_2_questions: String,

    #[serde(rename = "Level 3 Text")]
    pub level_3_text: String,
    #[serde(rename = "Level 3 Questions")]
    pub level_3_questions: String,
    #[serde(rename = "Level 3 Instruction")]
    pub level_3_instruction: String,

    #[serde(rename = "Level 4 Text")]
    pub level_4_text: String,
    #[serde(rename = "Level 4 Questions")]
    pub level_4_questions: String,

    #[serde(rename = "Level 5 Text")]
    pub level_5_text: String,
    #[serde(rename = "Level 5 Questions")]
    pub level_5_questions: String,

    #[serde(rename = "Level 6 Text")]
    pub level_6_text: String,
    #[serde(rename = "Level 6 Questions")]
    pub level_6_questions: String,
    #[serde(rename = "Level 6 Instruction")]
    pub level_6_instruction: String,
    #[serde(rename = "Level 6 Writing Prompt")]
    pub level_6_writing_prompt: String,
}

impl NewsFields {
    /// Split content of one level, empty when the level is missing.
    pub fn level(&self, level: Level) -> LevelContent {
        let (article_text, questions, instruction, writing_prompt) = match level {
            Level::One => (
                &self.level_1_text,
                &self.level_1_questions,
                &self.level_1_instruction,
                None,
            ),
            Level::Three => (
                &self.level_3_text,
                &self.level_3_questions,
                &self.level_3_instruction,
                None,
            ),
            Level::Six => (
                &self.level_6_text,
                &self.level_6_questions,
                &self.level_6_instruction,
                Some(&self.level_6_writing_prompt),
            ),
        };

        LevelContent {
            article_text: article_text.clone(),
            questions: questions.clone(),
            instruction: instruction.clone(),
            writing_prompt: writing_prompt.cloned().unwrap_or_default(),
        }
    }

    fn set_level(&mut self, level: Level, content: LevelContent) {
        match level {
            Level::One => {
                self.level_1_text = content.article_text;
                self.level_1_questions = content.questions;
                self.level_1_instruction = content.instruction;
            }
            Level::Three => {
                self.level_3_text = content.article_text;
                self.level_3_questions = content.questions;
                self.level_3_instruction = content.instruction;
            }
            Level::Six => {
                self.level_6_text = content.article_text;
                self.level_6_questions = content.questions;
                self.level_6_instruction = content.instruction;
                self.level_6_writing_prompt = content.writing_prompt;
            }
        }
    }
}

/// Groups `(filename, text)` pairs by slug, in first-seen order. Files
/// without a level prefix or with an unsupported level are skipped.
pub fn collect_articles<I>(files: I) -> Vec<NewsArticle>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut order: Vec<String> = Vec::new();
    let mut versions: HashMap<String, HashMap<Level, LevelVersion>> = HashMap::new();

    for (filename, text) in files {
        let Some(file) = parse_filename(&filename) else {
            warn!(%filename, "skipping file without a level prefix");
            continue;
        };
        let level = match Level::try_from(file.level) {
            Ok(level) => level,
            Err(e) => {
                warn!(%filename, error = %e, "skipping article file");
                continue;
            }
        };
        if text.trim().is_empty() {
            debug!(%filename, "skipping empty article file");
            continue;
        }

        let version = LevelVersion {
            headline: headline(&text),
            content: parse_level_content(&text, level),
        };
        debug!(%filename, slug = %file.slug, %level, "parsed article file");

        if !versions.contains_key(&file.slug) {
            order.push(file.slug.clone());
        }
        versions
            .entry(file.slug)
            .or_default()
            .insert(level, version);
    }

    order
        .into_iter()
        .enumerate()
        .map(|(index, slug)| {
            let mut levels = versions.remove(&slug).unwrap_or_default();
            let headline = [Level::Three, Level::One, Level::Six]
                .iter()
                .find_map(|l| levels.get(l).map(|v| v.headline.clone()))
                .unwrap_or_default();

            let mut fields = NewsFields {
                headline,
                slug,
                ..NewsFields::default()
            };
            for level in Level::ALL {
                if let Some(version) = levels.remove(&level) {
                    fields.set_level(level, version.content);
                }
            }

            NewsArticle {
                id: format!("rec{:03}", index + 1),
                fields,
            }
        })
        .collect()
}

/// Reads every `.txt` article in `dir` (sorted by name) and collects them.
/// Lines are trimmed and blank lines dropped.
pub fn load_article_dir(dir: impl AsRef<Path>) -> Result<Vec<NewsArticle>, LessonError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("txt") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(filename) = path.file_name().and_then(|f| f.to_str()) else {
            continue;
        };
        let text = fs::read_to_string(&path)?
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        files.push((filename.to_string(), text));
    }

    Ok(collect_articles(files))
}
