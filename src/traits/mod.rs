pub mod unit;

pub use unit::{ComputationUnit, OutputEvent, OutputPort, OutputSubscription, UnitInstance};
