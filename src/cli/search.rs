//! Search command

use colored::Colorize;
use std::sync::Arc;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::diagnostics::{ConsoleSink, DiagnosticSink, LogSink};
use crate::error::Result;
use crate::output::format_json;
use crate::search::{Category, Searcher};

/// Run one search from command-line words
pub async fn run(opts: &GlobalOptions, words: &[String], category: Option<Category>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let query = words.join(" ");

    // JSON output keeps stdout machine-readable
    let sink: Arc<dyn DiagnosticSink> = match ctx.format {
        OutputFormat::Pretty => Arc::new(ConsoleSink),
        OutputFormat::Json => Arc::new(LogSink),
    };

    let cache = ctx.search_cache(sink.clone())?;
    let mut searcher = Searcher::new(cache, ctx.browser()?, sink).with_open_delay(ctx.open_delay());
    let outcome = searcher.search(&query, category).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&outcome)?),
        OutputFormat::Pretty => {
            if ctx.is_dry_run() {
                println!("{}", "(dry run: browser not launched)".dimmed());
            }
        }
    }

    Ok(())
}
