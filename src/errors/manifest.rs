// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for font manifest loading and parsing.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while loading the font manifest
#[derive(Debug)]
pub enum ManifestError {
    /// The manifest file is missing, unreadable, or the read failed
    FileRead {
        /// The path that was being read
        path: PathBuf,
        /// The underlying I/O failure
        source: std::io::Error,
    },
    /// The manifest contents are not valid JSON
    Parse {
        /// The path whose contents failed to parse
        path: PathBuf,
        /// The underlying parser failure
        source: serde_json::Error,
    },
}

impl ManifestError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ManifestError::Parse {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::FileRead { path, source } => {
                write!(
                    f,
                    "Failed to read font manifest '{}': {}",
                    path.display(),
                    source
                )
            }
            ManifestError::Parse { path, source } => {
                write!(
                    f,
                    "Font manifest '{}' is not valid JSON: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManifestError::FileRead { source, .. } => Some(source),
            ManifestError::Parse { source, .. } => Some(source),
        }
    }
}
