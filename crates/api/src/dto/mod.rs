pub mod status;

pub use status::{MessageResponse, StatusQuery};
