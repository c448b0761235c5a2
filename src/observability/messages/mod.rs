// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements the `Display` trait for human-readable
//! output and the [`StructuredLog`] trait to emit itself through `tracing`
//! with structured fields attached.
//!
//! # Usage Pattern
//!
//! ```rust
//! use typecast::observability::messages::unit::UnitInitialized;
//! use typecast::observability::messages::StructuredLog;
//!
//! let msg = UnitInitialized {
//!     unit: "face_writer",
//!     entries: 3,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod forwarder;
pub mod manifest;
pub mod unit;

/// Emit a message through `tracing` with structured fields.
pub trait StructuredLog {
    /// Log this message at its natural level with structured fields.
    fn log(&self);

    /// Create a span carrying this message's fields.
    fn span(&self, name: &str) -> Span;
}
