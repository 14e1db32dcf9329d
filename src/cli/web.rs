//! Web interface command

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::{Error, Result};
use crate::server::{self, AppState};

/// Start the local web interface and serve until interrupted.
///
/// `host` and `port` come from flags or environment and override the
/// `server` section of the config file.
pub async fn run(opts: &GlobalOptions, host: Option<&str>, port: Option<u16>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let host = host.unwrap_or(&ctx.config.server.host);
    let port = port.unwrap_or(ctx.config.server.port);

    let state = AppState {
        cache_path: ctx.search_cache_path()?,
        browser: ctx.browser()?,
        open_delay: ctx.open_delay(),
    };

    let listener = server::bind(host, port).await?;
    let addr = listener
        .local_addr()
        .map_err(|e| Error::Server(format!("failed to get local addr: {e}")))?;

    println!(
        "{} Tarkov Search server running at {}",
        "✓".green(),
        format!("http://{addr}").cyan().bold()
    );
    println!("{}", "Press Ctrl+C to stop".dimmed());

    server::serve(listener, state).await
}
