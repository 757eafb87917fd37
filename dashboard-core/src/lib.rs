//! Core library for the weather dashboard collector.
//!
//! This crate defines:
//! - Environment-sourced configuration
//! - The fetch/store/notify pipeline and its stage error taxonomy
//! - Abstractions over the weather provider, object storage, and the
//!   notification channel, with OpenWeather/S3/SNS implementations
//!
//! It is used by `dashboard-lambda`, but can also be reused by other
//! binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod pipeline;
pub mod provider;
pub mod storage;

pub use config::Config;
pub use error::DashboardError;
pub use model::{WeatherRecord, base_key, timestamp_now, timestamped_key};
pub use notify::Notifier;
pub use pipeline::Dashboard;
pub use provider::WeatherProvider;
pub use storage::ObjectStore;
