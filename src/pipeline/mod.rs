// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The orchestration layer: load the manifest, initialize the unit,
//! subscribe, and forward until the stream ends.

use std::path::Path;
use tokio::io::AsyncWrite;
use tokio_util::sync::CancellationToken;

use crate::config::load_manifest;
use crate::forwarder::OutputForwarder;
use crate::observability::messages::unit::UnitInitializationFailed;
use crate::observability::messages::StructuredLog;
use crate::traits::ComputationUnit;


/// Run the full pipeline against one manifest file.
///
/// The sequence is fixed:
/// 1. read and parse the manifest; on failure the unit's initialization
///    entry point is never invoked;
/// 2. initialize the unit with the parsed value (synchronous);
/// 3. attach the single subscriber and forward every emitted event to the
///    sink, until the unit closes its port or `shutdown` is cancelled.
///
/// Returns the number of events forwarded.
pub async fn run<P, W>(
    manifest_path: P,
    unit: &dyn ComputationUnit,
    sink: W,
    shutdown: CancellationToken,
) -> anyhow::Result<usize>
where
    P: AsRef<Path>,
    W: AsyncWrite + Unpin,
{
    let manifest = load_manifest(manifest_path).await?;

    let mut instance = match unit.initialize(manifest) {
        Ok(instance) => instance,
        Err(error) => {
            UnitInitializationFailed {
                unit: unit.name(),
                error: &error,
            }
            .log();
            return Err(error.into());
        }
    };

    let subscription = instance
        .subscribe()
        .ok_or_else(|| anyhow::anyhow!("unit instance already subscribed"))?;

    let mut forwarder = OutputForwarder::new(sink);
    let forwarded = forwarder.forward(subscription, shutdown).await?;

    Ok(forwarded)
}
