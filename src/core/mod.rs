pub mod loader;
pub mod stats;
