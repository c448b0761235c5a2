use serde_json::Value;
use std::fmt;
use tokio::sync::mpsc;

use crate::units::UnitError;

/// A single value emitted on a unit's output port.
///
/// Events are opaque to the host. Strings render verbatim; any other JSON
/// value renders in its serialized textual form.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputEvent(pub Value);

impl OutputEvent {
    /// Convenience constructor for the common case of a string event
    pub fn text(text: impl Into<String>) -> Self {
        Self(Value::String(text.into()))
    }
}

impl fmt::Display for OutputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(text) => f.write_str(text),
            other => write!(f, "{}", other),
        }
    }
}

impl From<Value> for OutputEvent {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Sending half of a unit's output port
pub type OutputPort = mpsc::UnboundedSender<OutputEvent>;

/// Receiving half of a unit's output port, held by the single subscriber
pub type OutputSubscription = mpsc::UnboundedReceiver<OutputEvent>;

/// An initialized computation unit.
///
/// The instance owns the receiving end of the unit's output port until the
/// subscriber claims it. The port is unbounded, so events the unit emits
/// between initialization and subscription are buffered rather than lost.
pub struct UnitInstance {
    subscription: Option<OutputSubscription>,
}

impl UnitInstance {
    /// Wire up an instance with a fresh output port.
    ///
    /// Returns the instance together with the sending half, which the unit
    /// keeps for the lifetime of its emission. Dropping every sender closes
    /// the port, which the subscriber observes as completion.
    pub fn new() -> (Self, OutputPort) {
        let (port, subscription) = mpsc::unbounded_channel();
        (
            Self {
                subscription: Some(subscription),
            },
            port,
        )
    }

    /// Attach the single subscriber to the output port.
    ///
    /// Exactly one subscriber exists per instance; a second call returns
    /// `None`.
    pub fn subscribe(&mut self) -> Option<OutputSubscription> {
        self.subscription.take()
    }
}

impl fmt::Debug for UnitInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitInstance")
            .field("subscribed", &self.subscription.is_none())
            .finish()
    }
}

/// The message-passing boundary to an embedded computation unit.
///
/// A unit accepts the parsed manifest as its initialization payload and,
/// once initialized, produces a stream of output events on its instance's
/// output port. Initialization is synchronous from the caller's perspective;
/// nothing is awaited before the subscriber attaches.
pub trait ComputationUnit: Send + Sync {
    /// Initialize the unit with the parsed manifest payload.
    ///
    /// The payload's schema is owned by the unit; a unit that does not
    /// recognize the shape fails here, before any event is emitted.
    fn initialize(&self, config: Value) -> Result<UnitInstance, UnitError>;

    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_events_render_verbatim() {
        let event = OutputEvent::text("hello");
        assert_eq!(event.to_string(), "hello");
    }

    #[test]
    fn non_string_events_render_serialized() {
        let event = OutputEvent::from(json!({"family": "Inter"}));
        assert_eq!(event.to_string(), r#"{"family":"Inter"}"#);

        let event = OutputEvent::from(json!(42));
        assert_eq!(event.to_string(), "42");
    }

    #[tokio::test]
    async fn events_buffered_until_subscription() {
        let (mut instance, port) = UnitInstance::new();
        port.send(OutputEvent::text("early")).unwrap();
        drop(port);

        let mut subscription = instance.subscribe().expect("first subscribe");
        assert_eq!(subscription.recv().await, Some(OutputEvent::text("early")));
        assert_eq!(subscription.recv().await, None);
    }

    #[tokio::test]
    async fn second_subscribe_returns_none() {
        let (mut instance, _port) = UnitInstance::new();
        assert!(instance.subscribe().is_some());
        assert!(instance.subscribe().is_none());
    }
}
