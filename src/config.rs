//! Configuration types.

/// Relay configuration, read from the environment at startup.
#[derive(Debug, Clone, Default)]
pub struct RelayConfig {
    /// Target event bus name. `None` publishes to the account default bus.
    pub event_bus_name: Option<String>,
}

impl RelayConfig {
    /// Read configuration from the environment.
    ///
    /// `EVENT_BUS_NAME` is optional; unset or empty means the default bus.
    pub fn from_env() -> Self {
        Self {
            event_bus_name: std::env::var("EVENT_BUS_NAME")
                .ok()
                .filter(|name| !name.is_empty()),
        }
    }
}
