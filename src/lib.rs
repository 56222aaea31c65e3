//! Shopping Cart Library
//!
//! This library provides an in-memory shopping-cart data model: carts own an
//! ordered sequence of line items, compute running totals, and register
//! themselves in a process-wide registry that supports lookup by identifier.
//!
//! There is no persistence and no transport surface; every cart lives in
//! process memory for the lifetime of the program.
//!
//! # Example
//!
//! ```
//! use shopping_cart_core::{Cart, CartRegistry};
//!
//! let cart = Cart::new();
//! let book = cart.create_item("Book", 12.5);
//! cart.create_item("Pen", 1.5);
//! assert_eq!(cart.get_total(), 14.0);
//!
//! cart.remove_item(&book.id);
//! assert_eq!(cart.get_total(), 1.5);
//!
//! // Every cart is registered at construction.
//! assert!(CartRegistry::find_by(&cart.id()).is_some());
//! ```

// Domain modules
pub mod cart;

// Re-export the public surface at the crate root for convenience
pub use cart::{Cart, CartItem, CartRegistry};
