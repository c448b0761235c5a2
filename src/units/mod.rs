// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Computation unit implementations behind the [`ComputationUnit`] boundary.
//!
//! The host treats a unit as opaque: it hands over the parsed manifest at
//! initialization and consumes whatever the unit emits on its output port.
//! Everything a unit knows about the manifest's shape lives on this side of
//! the boundary.
//!
//! # Available Units
//!
//! ## Face Writer
//! The production unit. Owns the `fonts` manifest schema and emits one
//! rendered `@font-face` declaration per entry, in manifest order.
//!
//! ## Stub Units (Test-Only)
//! Scripted units for exercising the host without real rendering:
//! - **ScriptedUnit**: emits a fixed event sequence, counts initializations
//! - **RejectingUnit**: fails initialization
//! - **Note**: NOT available in production builds
//!
//! [`ComputationUnit`]: crate::traits::ComputationUnit

mod error;

pub mod face_writer;
#[cfg(test)]
pub mod stub;

pub use error::UnitError;
pub use face_writer::FaceWriterUnit;
