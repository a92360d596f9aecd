//! Error types shared across crates

mod app_error;

pub use app_error::{AppError, AppResult};
