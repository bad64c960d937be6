//! Uptime Edge Domain Layer
pub mod config;
pub mod errors;
pub mod monitor;
pub mod origin;

pub use config::{CliOverrides, Config};
pub use errors::StatusError;
pub use monitor::{MonitorStatus, UptimeMonitor};
pub use origin::resolve_origin;
