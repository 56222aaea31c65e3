//! Shopping Cart Domain Models
//!
//! This module contains the data structures of the shopping cart domain:
//! the cart itself and the line items it owns.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;
use serde::{Deserialize, Serialize};

use super::helpers::{format_item_summary, next_id};
use super::state::CartRegistry;

// =============================================================================
// Cart Item
// =============================================================================

/// A line item owned by exactly one cart.
///
/// Items are immutable value objects: once created through
/// [`Cart::create_item`], their fields never change. Callers always receive
/// value copies, so nothing a caller does to an item reaches back into the
/// cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Process-unique identifier, assigned at construction
    pub id: String,

    /// Name of the product
    pub name: String,

    /// Price of the product. Any `f64` is accepted as-is; no validation.
    pub price: f64,
}

impl CartItem {
    /// Constructs an item with a fresh identifier. Items only come into
    /// existence through [`Cart::create_item`].
    pub(crate) fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: next_id(),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A shopping cart owning an ordered sequence of [`CartItem`]s.
///
/// `Cart` is a cheap handle: cloning it aliases the same underlying cart, so
/// the registry and every caller observe one shared state. Constructing a
/// cart registers it in the [`CartRegistry`] as a side effect; carts are
/// never deregistered.
#[derive(Clone)]
pub struct Cart {
    inner: Arc<Mutex<CartInner>>,
}

struct CartInner {
    id: String,
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart with a fresh identifier and registers it in the
    /// process-wide [`CartRegistry`]. Cannot fail.
    pub fn new() -> Self {
        let cart = Self {
            inner: Arc::new(Mutex::new(CartInner {
                id: next_id(),
                items: Vec::new(),
            })),
        };
        CartRegistry::register(&cart);
        cart
    }

    /// The cart's immutable identifier.
    pub fn id(&self) -> String {
        self.lock().id.clone()
    }

    /// Creates a new item from `name` and `price`, appends it to the end of
    /// the item sequence, and returns a copy of it.
    ///
    /// `name` and `price` are stored as given; no validation is performed.
    pub fn create_item(&self, name: impl Into<String>, price: f64) -> CartItem {
        let item = CartItem::new(name, price);
        let mut inner = self.lock();
        inner.items.push(item.clone());
        debug!(
            "cart {}: added item {} -> {}",
            inner.id,
            item.id,
            format_item_summary(&inner.items)
        );
        item
    }

    /// Returns a copy of the item sequence in insertion order.
    ///
    /// The returned vector is the caller's own; mutating it (or the value
    /// copies inside it) leaves the cart untouched.
    pub fn get_items(&self) -> Vec<CartItem> {
        self.lock().items.clone()
    }

    /// Rebuilds the item sequence without the item carrying `id`, preserving
    /// the relative order of everything else. Silent no-op when no item
    /// matches.
    pub fn remove_item(&self, id: &str) {
        let mut inner = self.lock();
        let before = inner.items.len();
        inner.items.retain(|item| item.id != id);
        if inner.items.len() < before {
            debug!("cart {}: removed item {}", inner.id, id);
        }
    }

    /// Sums the prices of all current items, left to right, starting from
    /// zero. An empty cart totals `0.0`.
    pub fn get_total(&self) -> f64 {
        self.lock()
            .items
            .iter()
            .fold(0.0, |total, item| total + item.price)
    }

    // Poisoning is recovered: cart operations never panic.
    fn lock(&self) -> MutexGuard<'_, CartInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Carts compare by identity: two handles are equal when they alias the same
/// cart (identifiers are process-unique).
impl PartialEq for Cart {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.id() == other.id()
    }
}

impl fmt::Debug for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("Cart")
            .field("id", &inner.id)
            .field("items", &inner.items)
            .finish()
    }
}

impl fmt::Display for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        write!(f, "cart {} [{}]", inner.id, format_item_summary(&inner.items))
    }
}
