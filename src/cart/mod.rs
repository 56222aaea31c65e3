//! Shopping Cart Domain Module
//!
//! This module contains the whole cart data model, including:
//! - Domain models ([`Cart`], [`CartItem`])
//! - The process-wide cart registry ([`CartRegistry`])
//! - Helpers (identifier generation, item summary formatting)

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{Cart, CartItem};
pub use state::CartRegistry;
