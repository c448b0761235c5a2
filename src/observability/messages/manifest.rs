// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for font manifest loading events.
//!
//! This module contains message types for logging events related to:
//! * Successful manifest reads and parses
//! * Read and parse failures

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Manifest read and parsed successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use typecast::observability::messages::manifest::ManifestLoaded;
/// use std::path::Path;
///
/// let msg = ManifestLoaded {
///     path: Path::new("dist/fonts.json"),
///     bytes: 256,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ManifestLoaded<'a> {
    pub path: &'a Path,
    pub bytes: usize,
}

impl Display for ManifestLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded font manifest '{}' ({} bytes)",
            self.path.display(),
            self.bytes
        )
    }
}

impl StructuredLog for ManifestLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            bytes = self.bytes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "manifest_load",
            span_name = name,
            path = %self.path.display(),
            bytes = self.bytes,
        )
    }
}

/// Manifest could not be read or parsed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use typecast::observability::messages::manifest::ManifestLoadFailed;
/// use std::path::Path;
///
/// let error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
/// let msg = ManifestLoadFailed {
///     path: Path::new("dist/fonts.json"),
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ManifestLoadFailed<'a> {
    pub path: &'a Path,
    pub error: &'a dyn std::error::Error,
}

impl Display for ManifestLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to load font manifest '{}': {}",
            self.path.display(),
            self.error
        )
    }
}

impl StructuredLog for ManifestLoadFailed<'_> {
    fn log(&self) {
        tracing::error!(
            path = %self.path.display(),
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "manifest_load",
            span_name = name,
            path = %self.path.display(),
            error = %self.error,
        )
    }
}
