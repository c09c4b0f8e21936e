use serde::{Deserialize, Serialize};

/// One renderable unit of lesson content.
///
/// Serialized as `{"blockId": .., "type": .., "data": {..}, "accessibility": {..}}`,
/// the `type` tag selects the shape of `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub block_id: String,

    #[serde(flatten)]
    pub body: BlockBody,

    /// textual equivalent of a visualization, required for chart, timeline,
    /// concept map and flowchart blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Accessibility>,
}

impl ContentBlock {
    pub fn new(block_id: impl Into<String>, body: BlockBody) -> Self {
        Self {
            block_id: block_id.into(),
            body,
            accessibility: None,
        }
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    pub fn block_type(&self) -> BlockType {
        self.body.block_type()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum BlockBody {
    Text(TextData),
    Quiz(QuizData),
    FillInTheBlanks(FillInTheBlanksData),
    Flashcard(FlashcardData),
    YoutubeEmbed(YoutubeEmbedData),
    Chart(ChartData),
    Timeline(TimelineData),
    ConceptMap(ConceptMapData),
    Flowchart(FlowchartData),
}

impl BlockBody {
    pub fn block_type(&self) -> BlockType {
        match self {
            BlockBody::Text(_) => BlockType::Text,
            BlockBody::Quiz(_) => BlockType::Quiz,
            BlockBody::FillInTheBlanks(_) => BlockType::FillInTheBlanks,
            BlockBody::Flashcard(_) => BlockType::Flashcard,
            BlockBody::YoutubeEmbed(_) => BlockType::YoutubeEmbed,
            BlockBody::Chart(_) => BlockType::Chart,
            BlockBody::Timeline(_) => BlockType::Timeline,
            BlockBody::ConceptMap(_) => BlockType::ConceptMap,
            BlockBody::Flowchart(_) => BlockType::Flowchart,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockType {
    Text,
    Quiz,
    FillInTheBlanks,
    Flashcard,
    YoutubeEmbed,
    Chart,
    Timeline,
    ConceptMap,
    Flowchart,
}

impl BlockType {
    /// the tag as it appears in lesson files
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Text => "text",
            BlockType::Quiz => "quiz",
            BlockType::FillInTheBlanks => "fillInTheBlanks",
            BlockType::Flashcard => "flashcard",
            BlockType::YoutubeEmbed => "youtubeEmbed",
            BlockType::Chart => "chart",
            BlockType::Timeline => "timeline",
            BlockType::ConceptMap => "conceptMap",
            BlockType::Flowchart => "flowchart",
        }
    }

    pub fn is_visualization(&self) -> bool {
        matches!(
            self,
            BlockType::Chart | BlockType::Timeline | BlockType::ConceptMap | BlockType::Flowchart
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextData {
    /// HTML fragment
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizData {
    pub title: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub answers: Vec<String>,

    /// 1-based position of the correct entry in `answers`, as a string
    pub correct_answer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}

impl QuizQuestion {
    /// Resolves `correct_answer` against `answers`.
    pub fn correct(&self) -> Option<&str> {
        let position: usize = self.correct_answer.trim().parse().ok()?;
        position
            .checked_sub(1)
            .and_then(|index| self.answers.get(index))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub correct: String,
    pub incorrect: String,
}

/// Marker a fill-in sentence uses for the gap.
pub const BLANK: &str = "___";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillInTheBlanksData {
    pub title: String,
    #[serde(default)]
    pub instructions: String,
    pub items: Vec<BlankItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlankItem {
    pub sentence: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashcardData {
    #[serde(default)]
    pub title: String,
    pub cards: Vec<Card>,
}

/// Front and back are HTML fragments for direct display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeEmbedData {
    pub video_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl YoutubeEmbedData {
    /// Builds an embed from a `watch?v=` URL, `None` if the URL has no video id.
    pub fn from_url(url: &str, title: &str, description: &str) -> Option<Self> {
        let video_id = url
            .split("v=")
            .nth(1)
            .and_then(|s| s.split('&').next())
            .filter(|id| !id.is_empty())?;

        Some(Self {
            video_id: video_id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub chart_type: ChartKind,
    #[serde(default)]
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineData {
    #[serde(default)]
    pub title: String,
    pub events: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptMapData {
    #[serde(default)]
    pub title: String,
    pub nodes: Vec<ConceptNode>,
    pub edges: Vec<ConceptEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptNode {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptEdge {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowchartData {
    #[serde(default)]
    pub title: String,
    pub steps: Vec<FlowStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowStep {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub next: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessibility {
    pub alt_text: String,
    pub long_description: String,
    pub data_table: DataTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
