// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for computation unit lifecycle events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Unit accepted the manifest and produced an instance.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use typecast::observability::messages::unit::UnitInitialized;
///
/// let msg = UnitInitialized {
///     unit: "face_writer",
///     entries: 5,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct UnitInitialized<'a> {
    pub unit: &'a str,
    pub entries: usize,
}

impl Display for UnitInitialized<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unit '{}' initialized with {} manifest entries",
            self.unit, self.entries
        )
    }
}

impl StructuredLog for UnitInitialized<'_> {
    fn log(&self) {
        tracing::info!(
            unit = self.unit,
            entries = self.entries,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "unit_lifecycle",
            span_name = name,
            unit = self.unit,
            entries = self.entries,
        )
    }
}

/// Unit rejected the manifest or failed to come up.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct UnitInitializationFailed<'a> {
    pub unit: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for UnitInitializationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Unit '{}' failed to initialize: {}", self.unit, self.error)
    }
}

impl StructuredLog for UnitInitializationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            unit = self.unit,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "unit_lifecycle",
            span_name = name,
            unit = self.unit,
            error = %self.error,
        )
    }
}

/// Unit started emitting onto its output port.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct UnitEmissionStarted<'a> {
    pub unit: &'a str,
    pub entries: usize,
}

impl Display for UnitEmissionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unit '{}' emitting for {} manifest entries",
            self.unit, self.entries
        )
    }
}

impl StructuredLog for UnitEmissionStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            unit = self.unit,
            entries = self.entries,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "unit_emission",
            span_name = name,
            unit = self.unit,
            entries = self.entries,
        )
    }
}

/// Unit finished emitting and closed its output port.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct UnitEmissionCompleted<'a> {
    pub unit: &'a str,
    pub events: usize,
}

impl Display for UnitEmissionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unit '{}' completed emission after {} events",
            self.unit, self.events
        )
    }
}

impl StructuredLog for UnitEmissionCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            unit = self.unit,
            events = self.events,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "unit_lifecycle",
            span_name = name,
            unit = self.unit,
            events = self.events,
        )
    }
}
