pub mod backup;
pub mod filter;
pub mod log;
pub mod stats;
pub mod store;
