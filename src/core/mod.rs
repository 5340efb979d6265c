pub mod cache;
pub mod config;

pub use cache::SourceCache;
pub use config::Config;
