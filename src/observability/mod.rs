// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in typecast. Message types follow a struct-based
//! pattern with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Provide consistent, structured logging output
//!
//! Event payloads themselves never go through this module; they belong to
//! standard output. The log stream carries lifecycle diagnostics only.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::manifest` - Font manifest loading events
//! * `messages::unit` - Computation unit lifecycle events
//! * `messages::forwarder` - Output forwarding lifecycle events

pub mod messages;
