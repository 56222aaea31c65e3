//! Shopping Cart State Management
//!
//! This module manages the process-wide cart registry. Every [`Cart`]
//! registers itself here at construction time; the registry is append-only
//! and carts stay registered for the life of the process.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;

use super::models::Cart;

/// All carts ever constructed, in creation order.
static ALL_CARTS: Mutex<Vec<Cart>> = Mutex::new(Vec::new());

/// Process-wide registry of every cart ever constructed.
///
/// Exposes the two lookup operations over the cart collection: listing all
/// carts and finding one by identifier. Registration happens implicitly in
/// [`Cart::new`]; no removal operation exists.
pub struct CartRegistry;

impl CartRegistry {
    /// Returns a shallow copy of all registered carts, preserving creation
    /// order.
    ///
    /// The returned vector is the caller's own; pushing to or draining it
    /// leaves the registry untouched. The `Cart` handles inside it still
    /// alias the registered carts.
    pub fn list_all() -> Vec<Cart> {
        Self::carts().clone()
    }

    /// Finds a cart by identifier with a linear scan in creation order.
    ///
    /// Returns `None` when the identifier was never assigned to any cart.
    pub fn find_by(id: &str) -> Option<Cart> {
        Self::carts().iter().find(|cart| cart.id() == id).cloned()
    }

    /// Appends a freshly constructed cart. Called from [`Cart::new`] only,
    /// so construction and registration are a single step from the caller's
    /// perspective.
    pub(crate) fn register(cart: &Cart) {
        let mut carts = Self::carts();
        carts.push(cart.clone());
        debug!("registered cart {} ({} carts total)", cart.id(), carts.len());
    }

    // Poisoning is recovered: registry operations never panic.
    fn carts() -> MutexGuard<'static, Vec<Cart>> {
        ALL_CARTS.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
