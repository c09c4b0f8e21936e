use html_escape::encode_text;

use super::{BlockBody, ContentBlock, FlashcardData, Lesson, TextData};
use crate::article::{Level, LevelContent, NewsArticle};
use crate::exercise::{flashcards, quiz_from_entries, QuizOptions};
use crate::vocab::VocabularyEntry;

/// Glossary, flashcards and (when there is enough vocabulary) a quiz.
///
/// The glossary uses the `<strong>term</strong> – definition` convention, so
/// the lesson's own text blocks normalize back to the same entries.
pub fn vocabulary_lesson(
    lesson_id: &str,
    title: &str,
    subtitle: &str,
    entries: &[VocabularyEntry],
    options: &QuizOptions,
) -> Lesson {
    let mut lesson = Lesson::new(lesson_id, title);
    lesson.subtitle = subtitle.to_string();

    let glossary: String = entries
        .iter()
        .map(|e| {
            let mut item = format!("<p><strong>{}</strong> – {}", e.term, e.definition);
            if !e.example.is_empty() {
                item.push_str(&format!("<br><em>Example: \"{}\"</em>", e.example));
            }
            item.push_str("</p>");
            item
        })
        .collect::<Vec<_>>()
        .join("\n");

    lesson.content.push(text_block("glossary", glossary));
    lesson.content.push(ContentBlock::new(
        "flashcards",
        BlockBody::Flashcard(FlashcardData {
            title: title.to_string(),
            cards: flashcards(entries),
        }),
    ));

    if let Some(quiz) = quiz_from_entries(entries, options) {
        lesson.content.push(quiz.into_block("quiz"));
    }

    lesson
}

/// One level of a news article as a lesson, `None` when that level has no
/// text.
pub fn news_lesson(article: &NewsArticle, level: Level) -> Option<Lesson> {
    let content: LevelContent = article.fields.level(level);
    if content.article_text.is_empty() {
        return None;
    }

    let mut lesson = Lesson::new(
        format!("{}-level-{}", article.fields.slug, level.number()),
        article.fields.headline.as_str(),
    );
    lesson.subtitle = level.to_string();

    lesson
        .content
        .push(text_block("article", paragraphs(&content.article_text)));

    if !content.instruction.is_empty() || !content.questions.is_empty() {
        let mut homework = String::from("<h3>Homework</h3>");
        if !content.instruction.is_empty() {
            homework.push_str(&format!(
                "<p><strong>{}</strong></p>",
                encode_text(&content.instruction)
            ));
        }
        homework.push_str(&paragraphs(&content.questions));
        lesson.content.push(text_block("homework", homework));
    }

    if !content.writing_prompt.is_empty() {
        lesson
            .content
            .push(text_block("writing-prompt", paragraphs(&content.writing_prompt)));
    }

    Some(lesson)
}

fn text_block(block_id: &str, content: String) -> ContentBlock {
    ContentBlock::new(block_id, BlockBody::Text(TextData { content }))
}

// plain text lines to escaped paragraphs
fn paragraphs(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| format!("<p>{}</p>", encode_text(l)))
        .collect()
}
