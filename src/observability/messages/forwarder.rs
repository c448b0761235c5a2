// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for output forwarding lifecycle events.
//!
//! Forwarded event payloads are never logged here; they belong to standard
//! output. These messages cover the life of the subscription itself.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// The output port closed and the forwarder drained it completely.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use typecast::observability::messages::forwarder::ForwardingCompleted;
///
/// let msg = ForwardingCompleted { forwarded: 3 };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ForwardingCompleted {
    pub forwarded: usize,
}

impl Display for ForwardingCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Output port closed after {} forwarded events",
            self.forwarded
        )
    }
}

impl StructuredLog for ForwardingCompleted {
    fn log(&self) {
        tracing::info!(forwarded = self.forwarded, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "forwarding",
            span_name = name,
            forwarded = self.forwarded,
        )
    }
}

/// Forwarding stopped because shutdown was signalled.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ForwardingCancelled {
    pub forwarded: usize,
}

impl Display for ForwardingCancelled {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Forwarding cancelled after {} forwarded events",
            self.forwarded
        )
    }
}

impl StructuredLog for ForwardingCancelled {
    fn log(&self) {
        tracing::info!(forwarded = self.forwarded, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "forwarding",
            span_name = name,
            forwarded = self.forwarded,
        )
    }
}
