//! Upstream pool descriptor and its positional encoding.
//!
//! A pool is written in the configuration as a three element array
//! `[host, port, sub_account]` rather than as a keyed table:
//!
//! ```json
//! "pools": [
//!     ["stratum.example.com", 1800, "my-sub-account"],
//!     ["backup.example.com", 443]
//! ]
//! ```
//!
//! Trailing elements may be omitted and take their zero value, but every
//! element that is present must have the type of its position or be `null`.
//! A `null` element, or a `null` pool, leaves the zero value in place.
//! Elements past the third are ignored.

use std::fmt;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::error::{ConfigError, ConfigResult};

/// One upstream pool connection target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolInfo {
    pub host: String,
    pub port: u16,
    /// Per-pool account name. Cleared during initialization in multi-user mode.
    pub sub_account: String,
}

impl PoolInfo {
    pub fn new(host: impl Into<String>, port: u16, sub_account: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            sub_account: sub_account.into(),
        }
    }

    /// `host:port`, as used in log lines.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Decode a pool from an already parsed JSON value.
    pub fn decode(value: &serde_json::Value) -> ConfigResult<Self> {
        PoolInfo::deserialize(value).map_err(|e| ConfigError::Pool(e.to_string()))
    }

    /// Encode the pool as `[host, port, sub_account]`. Always three elements.
    pub fn encode(&self) -> serde_json::Value {
        serde_json::json!([self.host, self.port, self.sub_account])
    }
}

impl Serialize for PoolInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_tuple(3)?;
        seq.serialize_element(&self.host)?;
        seq.serialize_element(&self.port)?;
        seq.serialize_element(&self.sub_account)?;
        seq.end()
    }
}

struct PoolInfoVisitor;

impl<'de> Visitor<'de> for PoolInfoVisitor {
    type Value = PoolInfo;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a pool array [host, port, sub_account]")
    }

    /// A `null` entry is a pool with every field at its zero value.
    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(PoolInfo::default())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut pool = PoolInfo::default();

        // A `null` element keeps the zero value but still occupies its position.
        match seq.next_element::<Option<String>>()? {
            Some(host) => pool.host = host.unwrap_or_default(),
            None => return Ok(pool),
        }
        match seq.next_element::<Option<u16>>()? {
            Some(port) => pool.port = port.unwrap_or_default(),
            None => return Ok(pool),
        }
        match seq.next_element::<Option<String>>()? {
            Some(sub_account) => pool.sub_account = sub_account.unwrap_or_default(),
            None => return Ok(pool),
        }

        // Deserializers such as serde_json reject a sequence that is not fully
        // consumed, so skip whatever follows the third element.
        while seq.next_element::<IgnoredAny>()?.is_some() {}

        Ok(pool)
    }
}

impl<'de> Deserialize<'de> for PoolInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PoolInfoVisitor)
    }
}
