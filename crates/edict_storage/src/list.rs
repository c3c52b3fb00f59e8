//! Ordered sequences of orders.
//!
//! A unit's orders for a turn live in an [`OrderList`], kept in the order
//! they were given.

use crate::order::Order;

/// An ordered sequence of orders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderList {
    orders: Vec<Order>,
}

impl OrderList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an order and returns it.
    pub fn push(&mut self, order: Order) -> &Order {
        let index = self.orders.len();
        self.orders.push(order);
        &self.orders[index]
    }

    /// Returns the number of orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns true if the list holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Returns the order at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Order> {
        self.orders.get(index)
    }

    /// Iterates over the orders in sequence.
    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }

    /// Removes and returns the order at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Order> {
        (index < self.orders.len()).then(|| self.orders.remove(index))
    }

    /// Overwrites every order equal to `original` with a copy of
    /// `replacement`, keeping positions. Returns how many were replaced.
    pub fn replace(&mut self, original: &Order, replacement: &Order) -> usize {
        let mut replaced = 0;
        for slot in &mut self.orders {
            if slot == original {
                *slot = replacement.clone();
                replaced += 1;
            }
        }
        replaced
    }

    /// Keeps only the orders for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(&Order) -> bool) {
        self.orders.retain(keep);
    }

    /// Drops every order, releasing their payload references.
    pub fn clear(&mut self) {
        self.orders.clear();
    }
}

impl Extend<Order> for OrderList {
    fn extend<I: IntoIterator<Item = Order>>(&mut self, iter: I) {
        self.orders.extend(iter);
    }
}

impl FromIterator<Order> for OrderList {
    fn from_iter<I: IntoIterator<Item = Order>>(iter: I) -> Self {
        Self {
            orders: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for OrderList {
    type Item = Order;
    type IntoIter = std::vec::IntoIter<Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.into_iter()
    }
}

impl<'a> IntoIterator for &'a OrderList {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}
