pub mod health;
pub mod status;

pub use health::health_check;
pub use status::get_status;
