mod block;
mod build;
mod check;
mod load;
mod page;

pub use block::{
    Accessibility, BlankItem, BlockBody, BlockType, Card, ChartData, ChartKind, ConceptEdge,
    ConceptMapData, ConceptNode, ContentBlock, DataTable, Dataset, Feedback, FillInTheBlanksData,
    FlashcardData, FlowStep, FlowchartData, QuizData, QuizQuestion, TextData, TimelineData,
    TimelineEvent, YoutubeEmbedData, BLANK,
};
pub use build::{news_lesson, vocabulary_lesson};
pub use check::{check_lesson, validate_lesson, Issue, LessonReport, Problem};
pub use load::{lesson_from_json, load_lesson};
pub use page::Lesson;
