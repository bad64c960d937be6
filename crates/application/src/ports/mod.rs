mod status_cache;
mod uptime_provider;

pub use status_cache::StatusCache;
pub use uptime_provider::UptimeProvider;
