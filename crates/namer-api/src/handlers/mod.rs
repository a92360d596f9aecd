//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod favorites;
pub mod health;
pub mod notifications;
