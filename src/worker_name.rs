//! Worker naming derived from the finalized configuration.
//!
//! Precedence: a fixed worker name beats everything, then the IP based
//! format, then whatever name the miner authorized with.

use std::net::IpAddr;

use crate::config::AgentConfig;

/// How the agent names the workers it forwards upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerNamePolicy {
    /// Every worker gets the same name.
    Fixed(String),
    /// Name built from the miner's address, `{1}`, `{2}`... are address parts.
    IpFormat(String),
    /// Keep the miner's own name.
    MinerProvided,
}

impl WorkerNamePolicy {
    pub fn from_config(config: &AgentConfig) -> Self {
        if !config.fixed_worker_name.is_empty() {
            WorkerNamePolicy::Fixed(config.fixed_worker_name.clone())
        } else if config.use_ip_as_worker_name {
            WorkerNamePolicy::IpFormat(config.ip_worker_name_format.clone())
        } else {
            WorkerNamePolicy::MinerProvided
        }
    }

    /// Name to use upstream for a miner that authorized as `miner_name` from `peer`.
    pub fn resolve(&self, miner_name: &str, peer: IpAddr) -> String {
        match self {
            WorkerNamePolicy::Fixed(name) => name.clone(),
            WorkerNamePolicy::IpFormat(format) => format_ip_worker_name(format, peer),
            WorkerNamePolicy::MinerProvided => miner_name.to_string(),
        }
    }
}

/// Expand `{N}` placeholders with the parts of `ip`.
///
/// IPv4 has parts `{1}`..`{4}` (decimal octets), IPv6 has `{1}`..`{8}`
/// (lowercase hex groups). Placeholders without a matching part stay as written.
pub fn format_ip_worker_name(format: &str, ip: IpAddr) -> String {
    let parts: Vec<String> = match ip {
        IpAddr::V4(v4) => v4.octets().iter().map(|o| o.to_string()).collect(),
        IpAddr::V6(v6) => v6.segments().iter().map(|s| format!("{:x}", s)).collect(),
    };

    let mut name = format.to_string();
    for (i, part) in parts.iter().enumerate() {
        name = name.replace(&format!("{{{}}}", i + 1), part);
    }
    name
}
