//! `reshack-server` -- MCP stdio server for Resource Hacker.
//!
//! Speaks the Model Context Protocol over stdin/stdout and translates tool
//! calls into Resource Hacker command-line invocations. Logging goes to
//! stderr; stdout carries only protocol traffic.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default              | Description                        |
//! |------------------------|----------|----------------------|------------------------------------|
//! | `RESOURCE_HACKER_PATH` | no       | `ResourceHacker.exe` | Path to the Resource Hacker binary |
//! | `RH_TIMEOUT_MS`        | no       | `30000`              | Timeout for editor invocations     |

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reshack_core::runner::EditorConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // stdout is the MCP transport, so the fmt layer writes to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reshack_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Arc::new(EditorConfig::from_env());
    tracing::info!(
        executable = %config.executable,
        timeout_ms = config.timeout.as_millis() as u64,
        "Resource Hacker MCP server running on stdio"
    );

    if let Err(e) = reshack_server::stdio::serve(config).await {
        tracing::error!(error = %e, "Server terminated with an I/O error");
        std::process::exit(1);
    }
}
