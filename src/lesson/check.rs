use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{BlockBody, ContentBlock, Lesson, BLANK};
use crate::LessonError;

#[derive(Debug, Serialize, Deserialize)]
pub struct LessonReport {
    pub lesson_id: String,
    pub total_blocks: usize,
    pub visualization_blocks: usize,
    pub issues: Vec<Issue>,
}

impl LessonReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// offending block, `None` for lesson-level problems
    pub block_id: Option<String>,
    pub problem: Problem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    LessonIdNotUrlSafe,
    DuplicateBlockId,
    MissingAccessibility,
    EmptyAltText,
    EmptyLongDescription,
    EmptyDataTable,
    RaggedDataTable { row: usize, expected: usize, found: usize },
    CorrectAnswerOutOfRange { question: usize },
    MissingBlank { item: usize },
    DatasetLengthMismatch { dataset: String, expected: usize, found: usize },
    UnknownNode { id: String },
}

/// Collects every schema problem in a lesson.
pub fn check_lesson(lesson: &Lesson) -> LessonReport {
    let mut issues = Vec::new();

    if !is_url_safe(&lesson.lesson_id) {
        issues.push(Issue {
            block_id: None,
            problem: Problem::LessonIdNotUrlSafe,
        });
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut visualization_blocks = 0;

    for block in &lesson.content {
        if !seen.insert(block.block_id.as_str()) {
            issues.push(Issue {
                block_id: Some(block.block_id.clone()),
                problem: Problem::DuplicateBlockId,
            });
        }

        if block.block_type().is_visualization() {
            visualization_blocks += 1;
        }

        for problem in block_problems(block) {
            issues.push(Issue {
                block_id: Some(block.block_id.clone()),
                problem,
            });
        }
    }

    LessonReport {
        lesson_id: lesson.lesson_id.clone(),
        total_blocks: lesson.content.len(),
        visualization_blocks,
        issues,
    }
}

/// Fails with every issue found, for callers that only accept clean lessons.
pub fn validate_lesson(lesson: &Lesson) -> Result<(), LessonError> {
    let report = check_lesson(lesson);
    if report.is_clean() {
        Ok(())
    } else {
        Err(LessonError::Invalid {
            lesson_id: report.lesson_id,
            issues: report.issues,
        })
    }
}

fn is_url_safe(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

fn block_problems(block: &ContentBlock) -> Vec<Problem> {
    let mut problems = Vec::new();

    if block.block_type().is_visualization() {
        match &block.accessibility {
            None => problems.push(Problem::MissingAccessibility),
            Some(a) => {
                if a.alt_text.trim().is_empty() {
                    problems.push(Problem::EmptyAltText);
                }
                if a.long_description.trim().is_empty() {
                    problems.push(Problem::EmptyLongDescription);
                }
                let table = &a.data_table;
                if table.headers.is_empty() || table.rows.is_empty() {
                    problems.push(Problem::EmptyDataTable);
                }
                for (row, cells) in table.rows.iter().enumerate() {
                    if !table.headers.is_empty() && cells.len() != table.headers.len() {
                        problems.push(Problem::RaggedDataTable {
                            row,
                            expected: table.headers.len(),
                            found: cells.len(),
                        });
                    }
                }
            }
        }
    }

    match &block.body {
        BlockBody::Quiz(quiz) => {
            for (question, q) in quiz.questions.iter().enumerate() {
                if q.correct().is_none() {
                    problems.push(Problem::CorrectAnswerOutOfRange { question });
                }
            }
        }
        BlockBody::FillInTheBlanks(fill) => {
            for (item, i) in fill.items.iter().enumerate() {
                if !i.sentence.contains(BLANK) {
                    problems.push(Problem::MissingBlank { item });
                }
            }
        }
        BlockBody::Chart(chart) => {
            for dataset in &chart.datasets {
                if dataset.values.len() != chart.labels.len() {
                    problems.push(Problem::DatasetLengthMismatch {
                        dataset: dataset.label.clone(),
                        expected: chart.labels.len(),
                        found: dataset.values.len(),
                    });
                }
            }
        }
        BlockBody::ConceptMap(map) => {
            let nodes: HashSet<&str> = map.nodes.iter().map(|n| n.id.as_str()).collect();
            for edge in &map.edges {
                for end in [&edge.from, &edge.to] {
                    if !nodes.contains(end.as_str()) {
                        problems.push(Problem::UnknownNode { id: end.clone() });
                    }
                }
            }
        }
        BlockBody::Flowchart(flow) => {
            let steps: HashSet<&str> = flow.steps.iter().map(|s| s.id.as_str()).collect();
            for next in flow.steps.iter().flat_map(|s| s.next.iter()) {
                if !steps.contains(next.as_str()) {
                    problems.push(Problem::UnknownNode { id: next.clone() });
                }
            }
        }
        BlockBody::Text(_)
        | BlockBody::Flashcard(_)
        | BlockBody::YoutubeEmbed(_)
        | BlockBody::Timeline(_) => {}
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::{
        Accessibility, ConceptEdge, ConceptMapData, ConceptNode, DataTable, TextData,
        TimelineData, TimelineEvent,
    };

    fn timeline() -> BlockBody {
        BlockBody::Timeline(TimelineData {
            title: "Tenses".into(),
            events: vec![TimelineEvent {
                date: "yesterday".into(),
                title: "I walked".into(),
                description: String::new(),
            }],
        })
    }

    fn accessibility() -> Accessibility {
        Accessibility {
            alt_text: "Timeline of tenses".into(),
            long_description: "Past simple happens yesterday.".into(),
            data_table: DataTable {
                headers: vec!["When".into(), "Example".into()],
                rows: vec![vec!["yesterday".into(), "I walked".into()]],
            },
        }
    }

    #[test]
    fn visualization_without_accessibility_is_flagged() {
        let mut lesson = Lesson::new("tenses", "Tenses");
        lesson.content.push(ContentBlock::new("timeline", timeline()));

        let report = check_lesson(&lesson);
        assert_eq!(report.visualization_blocks, 1);
        assert_eq!(
            report.issues,
            vec![Issue {
                block_id: Some("timeline".into()),
                problem: Problem::MissingAccessibility,
            }]
        );
        assert!(validate_lesson(&lesson).is_err());
    }

    #[test]
    fn accessible_visualization_is_clean() {
        let mut lesson = Lesson::new("tenses", "Tenses");
        lesson
            .content
            .push(ContentBlock::new("timeline", timeline()).with_accessibility(accessibility()));

        assert!(check_lesson(&lesson).is_clean());
        assert!(validate_lesson(&lesson).is_ok());
    }

    #[test]
    fn ragged_table_and_duplicate_ids() {
        let mut a11y = accessibility();
        a11y.data_table.rows.push(vec!["today".into()]);

        let mut lesson = Lesson::new("tenses", "Tenses");
        lesson
            .content
            .push(ContentBlock::new("t", timeline()).with_accessibility(a11y));
        lesson.content.push(ContentBlock::new(
            "t",
            BlockBody::Text(TextData {
                content: String::new(),
            }),
        ));

        let problems: Vec<Problem> = check_lesson(&lesson)
            .issues
            .into_iter()
            .map(|i| i.problem)
            .collect();
        assert!(problems.contains(&Problem::RaggedDataTable {
            row: 1,
            expected: 2,
            found: 1
        }));
        assert!(problems.contains(&Problem::DuplicateBlockId));
    }

    #[test]
    fn concept_map_edges_must_name_nodes() {
        let mut lesson = Lesson::new("prepositions of place", "Prepositions");
        lesson.content.push(
            ContentBlock::new(
                "map",
                BlockBody::ConceptMap(ConceptMapData {
                    title: String::new(),
                    nodes: vec![ConceptNode {
                        id: "in".into(),
                        label: "in".into(),
                    }],
                    edges: vec![ConceptEdge {
                        from: "in".into(),
                        to: "on".into(),
                        label: None,
                    }],
                }),
            )
            .with_accessibility(accessibility()),
        );

        let report = check_lesson(&lesson);
        let problems: Vec<&Problem> = report.issues.iter().map(|i| &i.problem).collect();
        assert_eq!(
            problems,
            vec![
                &Problem::LessonIdNotUrlSafe,
                &Problem::UnknownNode { id: "on".into() }
            ]
        );
    }
}
