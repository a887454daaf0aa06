//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (JSON/TOML)
//!     → loader.rs (read & deserialize, defaults for absent keys)
//!     → pool.rs (positional [host, port, sub_account] entries)
//!     → init.rs (multi-user normalization, option report)
//!     → AgentConfig (read-only from here on)
//! ```
//!
//! # Design Decisions
//! - Config is loaded once; there is no reload
//! - All fields have defaults to allow minimal configs
//! - Only type-correctness is checked, values are not range-validated
//! - Initialization takes `&mut self`, so it finishes before the config can be shared

pub mod error;
pub mod init;
pub mod loader;
pub mod pool;
pub mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, ConfigFormat};
pub use pool::PoolInfo;
pub use schema::{AgentConfig, HttpDebugConfig, DEFAULT_IP_WORKER_NAME_FORMAT};
