use serde::{Deserialize, Serialize};

use super::Level;

/// Separates the article body from its homework.
pub const HOMEWORK_MARKER: &str = "Homework:";

/// Start of the free-writing prompt at level 6, in priority order.
pub const WRITING_PROMPT_MARKERS: [&str; 4] = [
    "Free Writing",
    "Academic Writing",
    "Writing Practice",
    "writing practice",
];

/// Instruction lines that precede the homework questions, in priority order.
pub const INSTRUCTION_MARKERS: [&str; 5] = [
    "Write a full sentence",
    "Write a full-sentence",
    "Answer each question",
    "Write full sentences",
    "In your Vocab Notebook",
];

/// Markers driving [`parse_level_content_with`]. Matching is ASCII
/// case-insensitive except for the homework marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMarkers {
    pub homework: String,
    pub writing_prompt: Vec<String>,
    pub instruction: Vec<String>,
}

impl Default for SplitMarkers {
    fn default() -> Self {
        Self {
            homework: HOMEWORK_MARKER.to_string(),
            writing_prompt: WRITING_PROMPT_MARKERS.map(String::from).to_vec(),
            instruction: INSTRUCTION_MARKERS.map(String::from).to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelContent {
    pub article_text: String,
    pub questions: String,
    pub instruction: String,
    pub writing_prompt: String,
}

pub fn parse_level_content(full_text: &str, level: Level) -> LevelContent {
    parse_level_content_with(full_text, level, &SplitMarkers::default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Article,
    Homework,
    WritingPrompt,
}

/// Splits `full_text` into article, instruction, questions and (level 6 only)
/// writing prompt. Missing markers leave the later fields empty.
pub fn parse_level_content_with(
    full_text: &str,
    level: Level,
    markers: &SplitMarkers,
) -> LevelContent {
    let mut content = LevelContent::default();
    let mut section = Section::Article;
    let mut rest = full_text;

    loop {
        match section {
            Section::Article => match rest.find(markers.homework.as_str()) {
                Some(at) if !markers.homework.is_empty() => {
                    content.article_text = rest[..at].trim().to_string();
                    rest = rest[at + markers.homework.len()..].trim();
                    section = Section::Homework;
                }
                _ => {
                    content.article_text = rest.trim().to_string();
                    break;
                }
            },
            Section::Homework => {
                let (homework, prompt) = match level {
                    Level::Six => split_writing_prompt(rest, &markers.writing_prompt),
                    Level::One | Level::Three => (rest, None),
                };

                let (instruction, questions) = instruction_and_questions(homework, markers);
                content.instruction = instruction;
                content.questions = questions;

                match prompt {
                    Some(prompt) => {
                        rest = prompt;
                        section = Section::WritingPrompt;
                    }
                    None => break,
                }
            }
            Section::WritingPrompt => {
                content.writing_prompt = rest.trim().to_string();
                break;
            }
        }
    }

    content
}

// the first marker in list order that occurs anywhere wins, not the earliest
// occurrence
fn split_writing_prompt<'a>(homework: &'a str, markers: &[String]) -> (&'a str, Option<&'a str>) {
    let lowered = homework.to_ascii_lowercase();
    let at = markers
        .iter()
        .filter(|m| !m.is_empty())
        .find_map(|m| lowered.find(&m.to_ascii_lowercase()));

    match at {
        Some(at) => (homework[..at].trim(), Some(homework[at..].trim())),
        None => (homework, None),
    }
}

/// Picks the instruction line: the highest-priority marker present on any
/// line, first line carrying it. Lines after it are the questions.
fn instruction_and_questions(homework: &str, markers: &SplitMarkers) -> (String, String) {
    let lowered: Vec<String> = markers
        .instruction
        .iter()
        .filter(|m| !m.is_empty())
        .map(|m| m.to_ascii_lowercase())
        .collect();
    let lines: Vec<&str> = homework.split('\n').collect();

    // (marker rank, line index)
    let mut best: Option<(usize, usize)> = None;
    for (index, line) in lines.iter().enumerate() {
        let line = line.to_ascii_lowercase();
        let Some(rank) = lowered.iter().position(|m| line.contains(m.as_str())) else {
            continue;
        };
        if best.map_or(true, |(best_rank, _)| rank < best_rank) {
            best = Some((rank, index));
        }
    }

    match best {
        Some((_, index)) => (
            lines[index].trim().to_string(),
            lines[index + 1..].join("\n").trim().to_string(),
        ),
        None => (String::new(), homework.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_homework_marker() {
        assert_eq!(
            parse_level_content("Just some text", Level::One),
            LevelContent {
                article_text: "Just some text".into(),
                ..LevelContent::default()
            }
        );
    }

    #[test]
    fn empty_text() {
        assert_eq!(
            parse_level_content("", Level::Six),
            LevelContent::default()
        );
    }

    #[test]
    fn basic_split() {
        let content = parse_level_content(
            "Body text.\nHomework:\nWrite a full sentence answer.\nQ1?\nQ2?",
            Level::One,
        );
        assert_eq!(content.article_text, "Body text.");
        assert_eq!(content.instruction, "Write a full sentence answer.");
        assert_eq!(content.questions, "Q1?\nQ2?");
        assert_eq!(content.writing_prompt, "");
    }

    #[test]
    fn level_six_writing_prompt() {
        let content = parse_level_content(
            "Story.\nHomework:\nAnswer each question.\nQ1?\nAcademic Writing\nDiscuss X.",
            Level::Six,
        );
        assert_eq!(content.article_text, "Story.");
        assert!(content.writing_prompt.starts_with("Academic Writing"));
        assert_eq!(content.writing_prompt, "Academic Writing\nDiscuss X.");
        assert_eq!(content.instruction, "Answer each question.");
        assert_eq!(content.questions, "Q1?");
    }

    #[test]
    fn writing_prompt_ignored_below_level_six() {
        let content = parse_level_content(
            "Story.\nHomework:\nAnswer each question.\nQ1?\nAcademic Writing\nDiscuss X.",
            Level::Three,
        );
        assert_eq!(content.writing_prompt, "");
        assert_eq!(content.questions, "Q1?\nAcademic Writing\nDiscuss X.");
    }

    #[test]
    fn level_six_without_prompt_marker() {
        let content =
            parse_level_content("Story.\nHomework:\nAnswer each question.\nQ1?", Level::Six);
        assert_eq!(content.instruction, "Answer each question.");
        assert_eq!(content.questions, "Q1?");
        assert_eq!(content.writing_prompt, "");
    }

    #[test]
    fn markers_are_case_insensitive() {
        let content = parse_level_content(
            "A.\nHomework:\nANSWER EACH QUESTION below.\nQ1?\nFREE WRITING: your weekend",
            Level::Six,
        );
        assert_eq!(content.instruction, "ANSWER EACH QUESTION below.");
        assert_eq!(content.writing_prompt, "FREE WRITING: your weekend");
    }

    #[test]
    fn missing_instruction_keeps_all_questions() {
        let content = parse_level_content("A.\nHomework:\n1. Why?\n2. How?", Level::One);
        assert_eq!(content.instruction, "");
        assert_eq!(content.questions, "1. Why?\n2. How?");
    }

    #[test]
    fn instruction_priority_follows_marker_list() {
        // "Write a full sentence" outranks "Answer each question" even on a later line
        let content = parse_level_content(
            "A.\nHomework:\nAnswer each question.\nQ1?\nWrite a full sentence for each.\nQ2?",
            Level::One,
        );
        assert_eq!(content.instruction, "Write a full sentence for each.");
        assert_eq!(content.questions, "Q2?");
    }

    #[test]
    fn writing_marker_priority_follows_list() {
        // "Free Writing" is chosen although "Academic Writing" appears first
        let content = parse_level_content(
            "A.\nHomework:\nQ1?\nAcademic Writing: essay\nFree Writing: diary",
            Level::Six,
        );
        assert_eq!(content.writing_prompt, "Free Writing: diary");
        assert_eq!(content.questions, "Q1?\nAcademic Writing: essay");
    }

    #[test]
    fn custom_markers() {
        let markers = SplitMarkers {
            homework: "Exercises:".into(),
            instruction: vec!["Circle".into()],
            ..SplitMarkers::default()
        };
        let content = parse_level_content_with(
            "Text.\nExercises:\nCircle the verbs.\nran, eat",
            Level::One,
            &markers,
        );
        assert_eq!(content.article_text, "Text.");
        assert_eq!(content.instruction, "Circle the verbs.");
        assert_eq!(content.questions, "ran, eat");
    }
}
