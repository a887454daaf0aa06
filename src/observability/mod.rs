//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! AgentConfig::initialize
//!     → report.rs (ordered InitEvents into an injected ReportSink)
//!     → TracingSink forwards to tracing
//!     → logging.rs (subscriber: stdout, optional log file)
//! ```
//!
//! # Design Decisions
//! - Initialization never calls the global logger directly, tests swap in a MemorySink
//! - Log level comes from RUST_LOG, defaulting to info

pub mod logging;
pub mod report;
