pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod impls;
pub mod model;

pub use cache::CacheService;
pub use client::GamificationApi;
pub use config::ApiConfig;
pub use error::ApiError;
