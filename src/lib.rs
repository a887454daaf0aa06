//! Configuration model for a stratum mining agent.

pub mod config;
pub mod observability;
pub mod worker_name;

pub use config::schema::AgentConfig;
pub use config::{ConfigError, PoolInfo};
pub use observability::report::{InitEvent, ReportSink, TracingSink};
pub use worker_name::WorkerNamePolicy;
