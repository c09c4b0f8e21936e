use std::{env, fs};

use anyhow::{Context, Result};
use esl_lessons::{
    config::Config,
    exercise::{flashcards, quiz_from_entries, QuizOptions},
    lesson::{check_lesson, load_lesson},
    telemetry,
    vocab::detect_and_normalize,
};
use serde_json::{json, Value};
use tracing::{info, warn};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const USAGE: &str = "Usage: esl check <lesson.json|yaml>... | esl practice <vocab.json> [quiz_title] [question_count]";

enum Command {
    Check(Vec<String>),
    Practice {
        data: String,
        title: Option<String>,
        count: Option<usize>,
    },
}

fn parse_command(mut args: impl Iterator<Item = String>) -> Result<Command> {
    match args.next().as_deref() {
        Some("check") => {
            let files: Vec<String> = args.collect();
            if files.is_empty() {
                anyhow::bail!("check needs at least one lesson file");
            }
            Ok(Command::Check(files))
        }
        Some("practice") => {
            let data = args.next().context("practice needs a vocabulary data file")?;
            let title = args.next();
            let count = args
                .next()
                .map(|c| c.parse::<usize>())
                .transpose()
                .context("question_count must be a number")?;
            Ok(Command::Practice { data, title, count })
        }
        Some(other) => Err(anyhow::anyhow!("unknown command '{}'", other)),
        None => Err(anyhow::anyhow!("missing command")),
    }
}

fn main() -> Result<()> {
    telemetry::init_tracing();
    let config = Config::from_env().context("failed to read configuration")?;

    let command = match parse_command(env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{USAGE}");
            return Err(e);
        }
    };

    match command {
        Command::Check(files) => check(&files),
        Command::Practice { data, title, count } => {
            let mut options = config.quiz_options();
            if let Some(title) = title {
                options.title = title;
            }
            if let Some(count) = count {
                options.question_count = count;
            }
            practice(&data, &options)
        }
    }
}

fn check(files: &[String]) -> Result<()> {
    let mut failing = 0;

    for file in files {
        let lesson = load_lesson(file).context(format!("failed to load lesson {}", file))?;
        let report = check_lesson(&lesson);

        if report.is_clean() {
            info!(%file, lesson_id = %report.lesson_id, blocks = report.total_blocks, "lesson ok");
        } else {
            failing += 1;
            for issue in &report.issues {
                warn!(
                    %file,
                    block_id = issue.block_id.as_deref().unwrap_or("-"),
                    problem = ?issue.problem,
                    "lesson issue"
                );
            }
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
    }

    println!(
        "checked {BOLD}{}{RESET} lesson(s), {BOLD}{}{RESET} with issues",
        files.len(),
        failing
    );

    if failing > 0 {
        anyhow::bail!("{} lesson(s) failed the schema check", failing);
    }
    Ok(())
}

fn practice(data: &str, options: &QuizOptions) -> Result<()> {
    let raw = fs::read_to_string(data).context(format!("failed to read {}", data))?;
    let raw: Value = serde_json::from_str(&raw).context(format!("{} is not valid JSON", data))?;

    let entries = detect_and_normalize(&raw);
    let quiz = quiz_from_entries(&entries, options);
    if quiz.is_none() {
        warn!(entries = entries.len(), "not enough vocabulary for a quiz");
    }

    let output = json!({
        "vocabulary": entries,
        "flashcards": flashcards(&entries),
        "quiz": quiz,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("failed to serialize exercises")?
    );

    info!(entries = entries.len(), "generated practice exercises");
    Ok(())
}
