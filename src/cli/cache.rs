//! Cache management commands

use colored::Colorize;
use std::sync::Arc;

use crate::cache::CacheStore;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::diagnostics::{ConsoleSink, DiagnosticSink, LogSink};
use crate::error::Result;
use crate::output::{CacheRow, format_json, format_size, format_table, format_timestamp};

fn open(ctx: &CommandContext) -> Result<CacheStore> {
    let sink: Arc<dyn DiagnosticSink> = match ctx.format {
        OutputFormat::Pretty => Arc::new(ConsoleSink),
        OutputFormat::Json => Arc::new(LogSink),
    };
    Ok(CacheStore::load(ctx.cache_path()?, sink))
}

/// Show cache status/statistics
pub fn status(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let store = open(&ctx)?;
    let path = store.path().map(|p| p.display().to_string()).unwrap_or_default();
    let stats = store.stats();

    match ctx.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "path": path,
                "entries": stats.entries,
                "sizeBytes": stats.size_bytes,
                "sizeHuman": format_size(stats.size_bytes),
                "oldestEntry": stats.oldest_entry,
                "newestEntry": stats.newest_entry,
            });
            println!("{}", format_json(&json)?);
        }
        OutputFormat::Pretty => {
            println!("{}", "Cache Status".bold());
            println!("────────────────────────────────────────");
            println!("Location:       {}", path);
            println!("Entries:        {}", stats.entries);
            println!("File size:      {}", format_size(stats.size_bytes));

            if let Some(oldest) = stats.oldest_entry {
                println!("Oldest entry:   {}", format_timestamp(oldest));
            }
            if let Some(newest) = stats.newest_entry {
                println!("Newest entry:   {}", format_timestamp(newest));
            }
        }
    }

    Ok(())
}

/// List cached searches that are still fresh
pub fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let store = open(&ctx)?;

    match ctx.format {
        OutputFormat::Json => {
            let entries: Vec<_> = store.entries().map(|(_, entry)| entry).collect();
            println!("{}", format_json(&entries)?);
        }
        OutputFormat::Pretty => {
            let rows: Vec<CacheRow> = store.entries().map(|(_, entry)| entry.into()).collect();
            println!("{}", format_table(&rows));
            if !store.is_empty() {
                println!("{}", format!("{} cached searches", store.len()).dimmed());
            }
        }
    }

    Ok(())
}

/// Remove every cached search
pub fn clear(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let removed = open(&ctx)?.clear()?;

    match ctx.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "entriesRemoved": removed,
                "success": true,
            });
            println!("{}", format_json(&json)?);
        }
        OutputFormat::Pretty => {
            if removed > 0 {
                println!("{} Cleared {} cache entries", "✓".green(), removed);
            } else {
                println!("Cache was already empty");
            }
        }
    }

    Ok(())
}

/// Show cache file path
pub fn path(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    println!("{}", ctx.cache_path()?.display());
    Ok(())
}
