mod client;

pub use client::HetrixUptimeClient;
