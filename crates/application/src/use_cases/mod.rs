mod get_monitor_status;

pub use get_monitor_status::{
    cache_key, CacheOutcome, GetMonitorStatusUseCase, StatusReport,
};
