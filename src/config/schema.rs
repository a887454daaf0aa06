//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the agent.
//! All types derive Serde traits so they can be read from (and written back to)
//! configuration files. Keys absent from a file, or set to `null`, keep the
//! value from [`AgentConfig::default`].

use serde::{Deserialize, Serialize};

use crate::config::pool::PoolInfo;

/// Worker name format used when `use_ip_as_worker_name` is on and the file
/// does not say otherwise. `{1}`..`{4}` are the octets of the miner's IPv4 address.
pub const DEFAULT_IP_WORKER_NAME_FORMAT: &str = "{1}x{2}x{3}x{4}";

/// Root configuration for the mining agent.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(from = "AgentConfigOverlay")]
pub struct AgentConfig {
    /// Carry each miner's own identity upstream instead of a per-pool sub-account.
    pub multi_user_mode: bool,

    /// Free-form agent type tag reported to pools.
    pub agent_type: String,

    /// Keep miner connections open while every pool is unreachable.
    pub always_keep_downconn: bool,

    /// Disconnect a miner that stops using AsicBoost mid-session.
    pub disconnect_when_lost_asicboost: bool,

    /// Name workers after the miner's IP address.
    pub use_ip_as_worker_name: bool,

    /// Format for IP based worker names.
    pub ip_worker_name_format: String,

    /// Answer share submissions with the pool's response rather than locally.
    pub submit_response_from_server: bool,

    /// Address the agent accepts miners on.
    pub agent_listen_ip: String,

    /// Port the agent accepts miners on.
    pub agent_listen_port: u16,

    /// Connect to pools over SSL/TLS.
    pub pool_use_tls: bool,

    /// Use IOCP for socket I/O (Windows only).
    pub use_iocp: bool,

    /// When non-empty, every worker name is replaced with this value.
    pub fixed_worker_name: String,

    /// Upstream pools in failover order.
    pub pools: Vec<PoolInfo>,

    /// Debug HTTP endpoint.
    pub http_debug: HttpDebugConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            multi_user_mode: false,
            agent_type: String::new(),
            always_keep_downconn: false,
            disconnect_when_lost_asicboost: true,
            use_ip_as_worker_name: false,
            ip_worker_name_format: DEFAULT_IP_WORKER_NAME_FORMAT.to_string(),
            submit_response_from_server: false,
            agent_listen_ip: String::new(),
            agent_listen_port: 0,
            pool_use_tls: false,
            use_iocp: false,
            fixed_worker_name: String::new(),
            pools: Vec::new(),
            http_debug: HttpDebugConfig::default(),
        }
    }
}

impl AgentConfig {
    /// A configuration carrying only the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Debug HTTP endpoint settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(from = "HttpDebugOverlay")]
pub struct HttpDebugConfig {
    /// Serve the debug endpoint.
    pub enable: bool,

    /// Listen address (e.g., "127.0.0.1:8080").
    pub listen: String,
}

/// The keys as they appear in a file. `None` means absent or `null`, and the
/// default stays in place.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AgentConfigOverlay {
    multi_user_mode: Option<bool>,
    agent_type: Option<String>,
    always_keep_downconn: Option<bool>,
    disconnect_when_lost_asicboost: Option<bool>,
    use_ip_as_worker_name: Option<bool>,
    ip_worker_name_format: Option<String>,
    submit_response_from_server: Option<bool>,
    agent_listen_ip: Option<String>,
    agent_listen_port: Option<u16>,
    pool_use_tls: Option<bool>,
    use_iocp: Option<bool>,
    fixed_worker_name: Option<String>,
    pools: Option<Vec<PoolInfo>>,
    http_debug: Option<HttpDebugConfig>,
}

impl From<AgentConfigOverlay> for AgentConfig {
    fn from(file: AgentConfigOverlay) -> Self {
        let defaults = AgentConfig::default();
        Self {
            multi_user_mode: file.multi_user_mode.unwrap_or(defaults.multi_user_mode),
            agent_type: file.agent_type.unwrap_or(defaults.agent_type),
            always_keep_downconn: file
                .always_keep_downconn
                .unwrap_or(defaults.always_keep_downconn),
            disconnect_when_lost_asicboost: file
                .disconnect_when_lost_asicboost
                .unwrap_or(defaults.disconnect_when_lost_asicboost),
            use_ip_as_worker_name: file
                .use_ip_as_worker_name
                .unwrap_or(defaults.use_ip_as_worker_name),
            ip_worker_name_format: file
                .ip_worker_name_format
                .unwrap_or(defaults.ip_worker_name_format),
            submit_response_from_server: file
                .submit_response_from_server
                .unwrap_or(defaults.submit_response_from_server),
            agent_listen_ip: file.agent_listen_ip.unwrap_or(defaults.agent_listen_ip),
            agent_listen_port: file.agent_listen_port.unwrap_or(defaults.agent_listen_port),
            pool_use_tls: file.pool_use_tls.unwrap_or(defaults.pool_use_tls),
            use_iocp: file.use_iocp.unwrap_or(defaults.use_iocp),
            fixed_worker_name: file.fixed_worker_name.unwrap_or(defaults.fixed_worker_name),
            pools: file.pools.unwrap_or(defaults.pools),
            http_debug: file.http_debug.unwrap_or(defaults.http_debug),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HttpDebugOverlay {
    enable: Option<bool>,
    listen: Option<String>,
}

impl From<HttpDebugOverlay> for HttpDebugConfig {
    fn from(file: HttpDebugOverlay) -> Self {
        Self {
            enable: file.enable.unwrap_or_default(),
            listen: file.listen.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AgentConfig::new();

        assert!(config.disconnect_when_lost_asicboost);
        assert_eq!(config.ip_worker_name_format, DEFAULT_IP_WORKER_NAME_FORMAT);

        assert!(!config.multi_user_mode);
        assert!(!config.always_keep_downconn);
        assert!(!config.use_ip_as_worker_name);
        assert!(!config.submit_response_from_server);
        assert!(!config.pool_use_tls);
        assert!(!config.use_iocp);
        assert!(!config.http_debug.enable);

        assert!(config.agent_type.is_empty());
        assert!(config.agent_listen_ip.is_empty());
        assert!(config.fixed_worker_name.is_empty());
        assert!(config.http_debug.listen.is_empty());
        assert_eq!(config.agent_listen_port, 0);
        assert!(config.pools.is_empty());
    }

    #[test]
    fn test_null_keys_keep_defaults() {
        let raw = serde_json::json!({
            "agent_type": null,
            "disconnect_when_lost_asicboost": null,
            "ip_worker_name_format": null,
            "pools": null,
            "http_debug": {"enable": null, "listen": "127.0.0.1:2020"}
        });
        let config: AgentConfig = serde_json::from_value(raw).unwrap();

        assert!(config.agent_type.is_empty());
        assert!(config.disconnect_when_lost_asicboost);
        assert_eq!(config.ip_worker_name_format, DEFAULT_IP_WORKER_NAME_FORMAT);
        assert!(config.pools.is_empty());
        assert!(!config.http_debug.enable);
        assert_eq!(config.http_debug.listen, "127.0.0.1:2020");
    }

    #[test]
    fn test_null_http_debug_keeps_default() {
        let config: AgentConfig =
            serde_json::from_value(serde_json::json!({"http_debug": null})).unwrap();
        assert_eq!(config.http_debug, HttpDebugConfig::default());
    }

    #[test]
    fn test_serialize_uses_file_keys() {
        let mut config = AgentConfig::new();
        config.pools.push(PoolInfo::new("h", 1800, "s"));

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["disconnect_when_lost_asicboost"], true);
        assert_eq!(value["pools"], serde_json::json!([["h", 1800, "s"]]));
        assert_eq!(value["http_debug"]["enable"], false);
    }
}
