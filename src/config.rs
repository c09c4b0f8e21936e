//! Settings shared by the binaries, read from the environment after loading
//! an optional `.env` file.

use std::env;

use anyhow::Context;
use tracing::debug;

use crate::exercise::{QuizOptions, DEFAULT_QUESTION_COUNT, DEFAULT_QUIZ_TITLE};

pub const DEFAULT_NEWS_OUTPUT: &str = "output/news.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub quiz_title: String,
    pub quiz_questions: usize,
    pub news_output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiz_title: DEFAULT_QUIZ_TITLE.to_string(),
            quiz_questions: DEFAULT_QUESTION_COUNT,
            news_output: DEFAULT_NEWS_OUTPUT.to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads `ESL_QUIZ_TITLE`,
    /// `ESL_QUIZ_QUESTIONS` and `ESL_NEWS_OUTPUT`.
    pub fn from_env() -> anyhow::Result<Self> {
        if let Ok(path) = dotenv::dotenv() {
            debug!(path = %path.display(), "loaded .env");
        }
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(title) = var("ESL_QUIZ_TITLE") {
            config.quiz_title = title;
        }
        if let Some(count) = var("ESL_QUIZ_QUESTIONS") {
            config.quiz_questions = count
                .trim()
                .parse()
                .context(format!("ESL_QUIZ_QUESTIONS must be a number, got '{}'", count))?;
        }
        if let Some(output) = var("ESL_NEWS_OUTPUT") {
            config.news_output = output;
        }

        Ok(config)
    }

    pub fn quiz_options(&self) -> QuizOptions {
        QuizOptions {
            title: self.quiz_title.clone(),
            question_count: self.quiz_questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        assert_eq!(Config::from_vars(vars(&[])).unwrap(), Config::default());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_vars(vars(&[
            ("ESL_QUIZ_TITLE", "Idiom Check"),
            ("ESL_QUIZ_QUESTIONS", " 5 "),
        ]))
        .unwrap();

        let options = config.quiz_options();
        assert_eq!(options.title, "Idiom Check");
        assert_eq!(options.question_count, 5);
        assert_eq!(config.news_output, DEFAULT_NEWS_OUTPUT);
    }

    #[test]
    fn rejects_bad_question_count() {
        assert!(Config::from_vars(vars(&[("ESL_QUIZ_QUESTIONS", "many")])).is_err());
    }
}
