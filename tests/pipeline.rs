use std::collections::HashSet;

use esl_lessons::{
    article::{collect_articles, Level},
    exercise::{generate_flashcards, generate_quiz, QuizOptions},
    lesson::{check_lesson, lesson_from_json, news_lesson, vocabulary_lesson, BlockBody},
    vocab::{detect_and_normalize, VocabSource},
};
use serde_json::json;

fn phrasal_verbs() -> serde_json::Value {
    json!([
        {"type": "text", "content": "<h2>Phrasal verbs at work</h2>"},
        {"type": "text", "content": "<p><strong>carry on</strong> – to continue.<br><em>Example: \"Carry on with your work.\"</em></p><p><strong>fill in</strong> – to complete a form.</p>"},
        {"type": "text", "content": "<p><strong>hand in</strong> – to submit.</p><p><strong>carry on</strong> – duplicate entry.</p>"},
        {"type": "text", "content": "<p><strong>look into</strong> – to investigate.<br><em>Example: \"We will look into it.\"</em></p>"}
    ])
}

#[test]
fn html_blocks_to_exercises() {
    let raw = phrasal_verbs();

    let entries = detect_and_normalize(&raw);
    let terms: Vec<&str> = entries.iter().map(|e| e.term.as_str()).collect();
    assert_eq!(terms, vec!["carry on", "fill in", "hand in", "look into"]);
    assert_eq!(entries[0].definition, "to continue.");

    let deck = generate_flashcards(&raw);
    assert_eq!(deck.len(), 4);
    assert!(deck[0].back.contains("Carry on with your work."));

    let quiz = generate_quiz(&raw, &QuizOptions::default()).unwrap();
    assert_eq!(quiz.questions.len(), 4);
    for question in &quiz.questions {
        assert_eq!(question.answers.len(), 4);
        let answers: HashSet<&String> = question.answers.iter().collect();
        assert_eq!(answers.len(), 4);

        let correct = question.correct().unwrap();
        let entry = entries
            .iter()
            .find(|e| question.question.contains(&format!("\"{}\"", e.term)))
            .unwrap();
        assert_eq!(correct, entry.definition);
    }
}

#[test]
fn vocabulary_lesson_survives_json_round_trip() {
    let raw = json!({"lessons": [{"words": [
        {"word": "apply", "definition": "to ask formally", "sampleSentence": "Apply for the job."},
        {"word": "hire", "definition": "to employ"},
        {"word": "resign", "definition": "to leave a job"},
        {"word": "promote", "definition": "to give a higher position"},
        {"word": "fire", "definition": "to dismiss"}
    ]}]});
    let source = VocabSource::detect(&raw).unwrap();
    let options = QuizOptions {
        title: "Jobs".into(),
        question_count: 3,
    };

    let lesson = vocabulary_lesson("jobs", "Jobs", "Work vocabulary", &source.normalize(), &options);
    let text = serde_json::to_string(&lesson).unwrap();
    let reloaded = lesson_from_json(&text).unwrap();

    assert_eq!(reloaded, lesson);
    assert!(check_lesson(&reloaded).is_clean());
    match &reloaded.block("quiz").unwrap().body {
        BlockBody::Quiz(quiz) => assert_eq!(quiz.questions.len(), 3),
        other => panic!("expected quiz, got {other:?}"),
    }
}

#[test]
fn authored_lesson_with_visualization_needs_accessibility() {
    let lesson = lesson_from_json(
        r#"{
            "lessonId": "past-tenses",
            "title": "Past Tenses",
            "content": [
                {"type": "text", "data": {"content": "<p>Two past tenses.</p>"}},
                {"type": "flowchart", "data": {"steps": [
                    {"id": "finished", "label": "Finished action?", "next": ["simple"]},
                    {"id": "simple", "label": "Past simple"}
                ]}},
                {"type": "chart", "data": {"chartType": "pie", "labels": ["simple", "continuous"],
                    "datasets": [{"label": "usage", "values": [70.0, 30.0]}]},
                 "accessibility": {"altText": "Pie chart", "longDescription": "Simple is used 70% of the time.",
                    "dataTable": {"headers": ["Tense", "Share"], "rows": [["simple", "70"], ["continuous", "30"]]}}}
            ]
        }"#,
    )
    .unwrap();

    let report = check_lesson(&lesson);
    assert_eq!(report.total_blocks, 3);
    assert_eq!(report.visualization_blocks, 2);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].block_id.as_deref(), Some("flowchart"));
}

#[test]
fn news_files_to_lessons() {
    let files = vec![(
        "Lvl 3 Trees Talk _ Breaking News English.txt".to_string(),
        "Trees talk\nTrees share food.\nHomework:\nWrite full sentences.\n1. What do trees share?"
            .to_string(),
    )];

    let articles = collect_articles(files);
    let lesson = news_lesson(&articles[0], Level::Three).unwrap();

    assert_eq!(lesson.lesson_id, "trees-talk-level-3");
    assert_eq!(lesson.title, "Trees talk");
    assert!(check_lesson(&lesson).is_clean());
    match &lesson.block("homework").unwrap().body {
        BlockBody::Text(text) => {
            assert!(text.content.contains("<strong>Write full sentences.</strong>"));
            assert!(text.content.contains("1. What do trees share?"));
        }
        other => panic!("expected text, got {other:?}"),
    }
}
