//! Diagnostic sinks for search progress and cache warnings
//!
//! The cache store and the search orchestrator never write to the console
//! directly. They report through a [`DiagnosticSink`], so the CLI can render
//! coloured progress lines, the web server can log, and tests can capture.

use colored::Colorize;
use std::fmt;

use crate::search::Category;

/// Progress events emitted while a search runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent<'a> {
    /// A still-valid cache entry was found for the query
    CacheHit { query: &'a str },
    /// The query was classified (or overridden) and URLs are being built
    Searching { query: &'a str, category: Category },
    /// A URL is about to be handed to the browser
    Opening { url: &'a str },
}

impl fmt::Display for SearchEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchEvent::CacheHit { query } => {
                write!(f, "[Cache hit] Opening cached results for \"{}\"...", query)
            }
            SearchEvent::Searching { query, category } => {
                write!(f, "[{}] Searching for \"{}\"...", category.tag(), query)
            }
            SearchEvent::Opening { url } => write!(f, "Opening: {}", url),
        }
    }
}

/// Receiver for search events and best-effort warnings
pub trait DiagnosticSink: Send + Sync {
    fn event(&self, event: &SearchEvent<'_>);

    fn warn(&self, message: &str);
}

/// Console sink used by the CLI
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn event(&self, event: &SearchEvent<'_>) {
        match event {
            SearchEvent::CacheHit { query } => println!(
                "{} Opening cached results for \"{}\"...",
                "[Cache hit]".green(),
                query
            ),
            SearchEvent::Searching { query, category } => println!(
                "{} Searching for \"{}\"...",
                format!("[{}]", category.tag()).cyan().bold(),
                query
            ),
            SearchEvent::Opening { url } => println!("Opening: {}", url.underline()),
        }
    }

    fn warn(&self, message: &str) {
        log::warn!("{}", message);
    }
}

/// Sink that forwards everything to the `log` facade (web server)
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn event(&self, event: &SearchEvent<'_>) {
        log::info!("{}", event);
    }

    fn warn(&self, message: &str) {
        log::warn!("{}", message);
    }
}

/// Sink that records everything in memory
#[cfg(test)]
#[derive(Default)]
pub struct MemorySink {
    events: std::sync::Mutex<Vec<String>>,
    warnings: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MemorySink {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl DiagnosticSink for MemorySink {
    fn event(&self, event: &SearchEvent<'_>) {
        self.events.lock().unwrap().push(event.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}
