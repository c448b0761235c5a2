// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

use crate::observability::messages::forwarder::{ForwardingCancelled, ForwardingCompleted};
use crate::observability::messages::StructuredLog;
use crate::traits::OutputSubscription;

/// Output forwarder - relays every event on a subscription to a sink.
///
/// The forwarder is the single subscriber of a unit's output port. Each
/// event's representation is written to the sink followed by a line
/// terminator, in receipt order, with a flush per event so nothing sits in
/// an intermediate buffer. It holds no state across events; forwarding one
/// event cannot affect a later identical one.
///
/// Forwarding ends when the port closes (the unit finished emitting) or when
/// the shutdown token is cancelled, whichever comes first.
pub struct OutputForwarder<W> {
    sink: W,
}

impl<W: AsyncWrite + Unpin> OutputForwarder<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Drain the subscription into the sink.
    ///
    /// Returns the number of events forwarded. A sink write failure is fatal
    /// and propagates to the caller.
    pub async fn forward(
        &mut self,
        mut subscription: OutputSubscription,
        shutdown: CancellationToken,
    ) -> std::io::Result<usize> {
        let mut forwarded = 0usize;

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    ForwardingCancelled { forwarded }.log();
                    return Ok(forwarded);
                }
                event = subscription.recv() => {
                    match event {
                        Some(event) => {
                            let line = format!("{}\n", event);
                            self.sink.write_all(line.as_bytes()).await?;
                            self.sink.flush().await?;
                            forwarded += 1;
                        }
                        None => break,
                    }
                }
            }
        }

        ForwardingCompleted { forwarded }.log();
        Ok(forwarded)
    }

    /// Consume the forwarder and hand the sink back
    pub fn into_sink(self) -> W {
        self.sink
    }
}
