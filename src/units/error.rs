// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for computation unit initialization.
//!
//! Units own the schema of their initialization payload, so a payload the
//! unit does not recognize fails here, before any event is emitted. All
//! errors implement `std::error::Error` via the `thiserror` crate.

use thiserror::Error;

/// Errors a computation unit can raise while initializing.
#[derive(Error, Debug)]
pub enum UnitError {
    /// The manifest payload does not match the schema the unit owns.
    #[error("Unit '{unit}' rejected the manifest: {source}")]
    ManifestRejected {
        /// Name of the rejecting unit
        unit: &'static str,
        /// The underlying deserialization failure
        #[source]
        source: serde_json::Error,
    },

    /// The unit could not be brought up for a reason unrelated to the payload.
    #[error("Unit '{unit}' failed to initialize: {reason}")]
    InitializationFailed {
        /// Name of the failing unit
        unit: &'static str,
        /// Human-readable description of the failure
        reason: String,
    },
}
