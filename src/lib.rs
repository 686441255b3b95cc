pub mod config;
pub mod dates;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, ProviderError, Result};
pub use routes::{create_router, AppState};
