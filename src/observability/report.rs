//! Audit trail emitted while a configuration is initialized.

use std::fmt;

/// Renders a toggle the way option lines print it.
pub fn enabled_label(enabled: bool) -> &'static str {
    if enabled {
        "Enabled"
    } else {
        "Disabled"
    }
}

/// One fact about the effective configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitEvent {
    MultiUserMode(bool),
    PoolUseTls(bool),
    AlwaysKeepDownconn(bool),
    DisconnectWhenLostAsicboost(bool),
    /// Every worker name will be replaced with this value.
    FixedWorkerName(String),
    /// A pool was registered. `sub_account` is `None` in multi-user mode.
    PoolAdded {
        host: String,
        port: u16,
        sub_account: Option<String>,
    },
}

impl fmt::Display for InitEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitEvent::MultiUserMode(true) => write!(
                f,
                "[OPTION] Multi user mode: Enabled. Sub-accounts in config file will be ignored."
            ),
            InitEvent::MultiUserMode(false) => write!(
                f,
                "[OPTION] Multi user mode: Disabled. Sub-accounts in config file will be used."
            ),
            InitEvent::PoolUseTls(on) => write!(
                f,
                "[OPTION] Connect to pool server with SSL/TLS encryption: {}",
                enabled_label(*on)
            ),
            InitEvent::AlwaysKeepDownconn(on) => write!(
                f,
                "[OPTION] Always keep miner connections even if pool disconnected: {}",
                enabled_label(*on)
            ),
            InitEvent::DisconnectWhenLostAsicboost(on) => write!(
                f,
                "[OPTION] Disconnect if a miner lost its AsicBoost mid-way: {}",
                enabled_label(*on)
            ),
            InitEvent::FixedWorkerName(name) => write!(
                f,
                "[OPTION] Fixed worker name enabled, all worker name will be replaced to {} on the server.",
                name
            ),
            InitEvent::PoolAdded {
                host,
                port,
                sub_account: Some(sub_account),
            } => write!(f, "add pool: {}:{}, sub-account: {}", host, port, sub_account),
            InitEvent::PoolAdded {
                host,
                port,
                sub_account: None,
            } => write!(f, "add pool: {}:{}, multi user mode", host, port),
        }
    }
}

/// Append-only destination for [`InitEvent`]s. Events arrive in emission order.
pub trait ReportSink {
    fn report(&mut self, event: InitEvent);
}

/// Forwards every event to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn report(&mut self, event: InitEvent) {
        match &event {
            InitEvent::PoolAdded {
                host,
                port,
                sub_account,
            } => tracing::info!(
                host = %host,
                port = *port,
                sub_account = sub_account.as_deref().unwrap_or(""),
                multi_user_mode = sub_account.is_none(),
                "{}",
                event
            ),
            _ => tracing::info!("{}", event),
        }
    }
}

/// Keeps events in memory. Useful for tests and for printing a summary later.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    events: Vec<InitEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[InitEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<InitEvent> {
        self.events
    }
}

impl ReportSink for MemorySink {
    fn report(&mut self, event: InitEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_label() {
        assert_eq!(enabled_label(true), "Enabled");
        assert_eq!(enabled_label(false), "Disabled");
    }

    #[test]
    fn test_option_lines() {
        assert_eq!(
            InitEvent::PoolUseTls(true).to_string(),
            "[OPTION] Connect to pool server with SSL/TLS encryption: Enabled"
        );
        assert!(InitEvent::MultiUserMode(true)
            .to_string()
            .contains("Sub-accounts in config file will be ignored"));
        assert!(InitEvent::FixedWorkerName("rig7".into())
            .to_string()
            .contains("replaced to rig7"));
    }

    #[test]
    fn test_pool_lines() {
        let with_sub = InitEvent::PoolAdded {
            host: "cn.ss.btc.com".into(),
            port: 1800,
            sub_account: Some("kevin".into()),
        };
        assert_eq!(
            with_sub.to_string(),
            "add pool: cn.ss.btc.com:1800, sub-account: kevin"
        );

        let multi_user = InitEvent::PoolAdded {
            host: "cn.ss.btc.com".into(),
            port: 1800,
            sub_account: None,
        };
        assert_eq!(
            multi_user.to_string(),
            "add pool: cn.ss.btc.com:1800, multi user mode"
        );
    }

    #[test]
    fn test_memory_sink_keeps_order() {
        let mut sink = MemorySink::new();
        sink.report(InitEvent::PoolUseTls(false));
        sink.report(InitEvent::MultiUserMode(true));

        assert_eq!(
            sink.into_events(),
            vec![InitEvent::PoolUseTls(false), InitEvent::MultiUserMode(true)]
        );
    }
}
