//! Asset dispatch and application configuration for Bullet Time.

pub mod config;
pub mod engine;
pub mod game;

pub use config::AppConfig;
