// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use typecast::config::consts::MANIFEST_PATH;
use typecast::pipeline;
use typecast::units::FaceWriterUnit;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout carries the event stream only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let shutdown = CancellationToken::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                shutdown.cancel();
            }
        });
    }

    let unit = FaceWriterUnit::new();
    let stdout = tokio::io::stdout();

    if let Err(error) = pipeline::run(MANIFEST_PATH, &unit, stdout, shutdown).await {
        tracing::error!("{:#}", error);
        std::process::exit(1);
    }
}
