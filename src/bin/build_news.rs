use std::io::Write;
use std::{env, fs, fs::OpenOptions, path::Path};

use anyhow::Context;
use esl_lessons::{
    article::{load_article_dir, Level, NewsArticle},
    config::Config,
    lesson::{check_lesson, news_lesson},
    telemetry,
};
use tracing::{info, warn};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

pub struct Args {
    pub articles_dir: String,
    pub output_file: String,
}

fn parse_args(mut args: impl Iterator<Item = String>, config: &Config) -> anyhow::Result<Args> {
    let articles_dir = args
        .next()
        .context("articles_dir is required, it holds files named 'Lvl N <Title> _ Breaking News English.txt'")?;
    let output_file = args.next().unwrap_or(config.news_output.clone());

    Ok(Args {
        articles_dir,
        output_file,
    })
}

fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();
    let config = Config::from_env().context("failed to read configuration")?;

    let args = match parse_args(env::args().skip(1), &config) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Usage: build_news <articles_dir> [output_file]");
            return Err(e);
        }
    };

    let articles = load_article_dir(&args.articles_dir)
        .context(format!("failed to read articles from {}", args.articles_dir))?;

    for article in &articles {
        check_levels(article);
    }

    write_articles(&articles, &args.output_file).context("failed to write news records")?;

    println!(
        "wrote {BOLD}{}{RESET} articles to {BOLD}{}{RESET}",
        articles.len(),
        &args.output_file
    );

    Ok(())
}

// every level that has text must also form a valid lesson
fn check_levels(article: &NewsArticle) {
    for level in Level::ALL {
        let Some(lesson) = news_lesson(article, level) else {
            continue;
        };
        let report = check_lesson(&lesson);
        if report.is_clean() {
            info!(id = %article.id, slug = %article.fields.slug, %level, blocks = report.total_blocks, "article level ok");
        } else {
            warn!(id = %article.id, %level, issues = report.issues.len(), "article level does not form a valid lesson");
        }
    }
}

fn write_articles(articles: &[NewsArticle], output_file: &str) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(output_file).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(output_file)
        .context(format!("failed to open {}", output_file))?;

    let content =
        serde_json::to_string_pretty(articles).context("failed to serialize news records")?;
    writeln!(file, "{}", content).context(format!("failed to write {}", output_file))?;

    Ok(())
}
