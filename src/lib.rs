//! SMS Response Relay — republishes inbound SMS notifications as domain events.

pub mod bus;
pub mod config;
pub mod envelope;
pub mod error;
pub mod event;
pub mod relay;
