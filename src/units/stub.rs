// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::traits::{ComputationUnit, OutputEvent, UnitInstance};
use crate::units::UnitError;

/// A unit that emits a scripted sequence of events for testing.
///
/// Events are pushed onto the port at initialize time and the port closes
/// immediately after, so a subscriber sees the full sequence followed by
/// completion. Initialization calls are counted so tests can assert the
/// entry point was (or was not) invoked.
pub struct ScriptedUnit {
    events: Vec<OutputEvent>,
    initializations: Arc<AtomicUsize>,
}

impl ScriptedUnit {
    pub fn new(events: Vec<OutputEvent>) -> Self {
        Self {
            events,
            initializations: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A unit that emits zero events and closes its port immediately
    pub fn silent() -> Self {
        Self::new(Vec::new())
    }

    /// Handle to the initialization counter
    pub fn initializations(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.initializations)
    }
}

impl ComputationUnit for ScriptedUnit {
    fn initialize(&self, _config: Value) -> Result<UnitInstance, UnitError> {
        self.initializations.fetch_add(1, Ordering::SeqCst);

        let (instance, port) = UnitInstance::new();
        for event in &self.events {
            let _ = port.send(event.clone());
        }
        Ok(instance)
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// A unit whose initialization always fails for testing failure scenarios
pub struct RejectingUnit;

impl ComputationUnit for RejectingUnit {
    fn initialize(&self, _config: Value) -> Result<UnitInstance, UnitError> {
        Err(UnitError::InitializationFailed {
            unit: self.name(),
            reason: "Simulated initialization failure".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "rejecting"
    }
}
