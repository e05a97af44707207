use anyhow::Context;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use folio::app::Reader;
use folio::article::Article;
use folio::config::Config;
use folio::logs;
use ratatui::DefaultTerminal;
use std::path::PathBuf;

/// A terminal article reader with live-adjustable typography.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Args {
    /// Article file to read (plain text). Falls back to the built-in sample.
    article: Option<PathBuf>,

    /// Configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logs::init(args.log_file.as_deref())?;

    let config = match &args.config {
        Some(path) => {
            let config = Config::load_from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            config.validate().context("invalid configuration")?;
            config
        }
        None => Config::default(),
    };

    let article = match args.article.as_ref().or(config.article.as_ref()) {
        Some(path) => Article::load(path)?,
        None => Article::sample(),
    };
    tracing::info!(title = %article.title, "opening article");

    let terminal = ratatui::init();
    let result = run(terminal, article, &config);
    ratatui::restore();
    result
}

/// Run the reader with mouse capture scoped to this call: it is acquired
/// at most once and released on every exit path.
fn run(terminal: DefaultTerminal, article: Article, config: &Config) -> anyhow::Result<()> {
    if config.mouse {
        crossterm::execute!(std::io::stdout(), EnableMouseCapture)
            .context("enabling mouse capture")?;
    }

    let mut reader = Reader::new(article, config.clone());
    let result = reader.run(terminal).context("event loop");

    if config.mouse {
        let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    }
    result
}
