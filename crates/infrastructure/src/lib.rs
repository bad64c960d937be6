//! Uptime Edge Infrastructure Layer
pub mod cache;
pub mod upstream;

pub use cache::InMemoryStatusCache;
pub use upstream::HetrixUptimeClient;
