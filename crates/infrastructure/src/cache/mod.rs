mod store;

pub use store::InMemoryStatusCache;
