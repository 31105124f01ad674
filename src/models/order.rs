// Order model representing a customer's shopping request

use crate::models::{Cost, Pounds, Price};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single line of an order: a fruit and the number of pounds wanted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub fruit: String,
    pub pounds: Pounds,
}

/// Represents a customer's order as an ordered list of (fruit, pounds) items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    items: Vec<OrderItem>,
}

impl Order {
    /// Creates a new empty order
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds an order from (fruit, pounds) pairs
    pub fn from_pairs(pairs: &[(&str, Pounds)]) -> Self {
        let mut order = Self::new();
        for &(fruit, pounds) in pairs {
            order.add_item(fruit, pounds);
        }
        order
    }

    /// Appends an item to the order
    pub fn add_item<S: Into<String>>(&mut self, fruit: S, pounds: Pounds) {
        self.items.push(OrderItem {
            fruit: fruit.into(),
            pounds,
        });
    }

    /// Gets the items of the order in insertion order
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Checks whether the order contains no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Calculates the total cost of the order against a standalone price table.
    /// Returns None if any fruit in the order is missing from the table.
    pub fn total_cost(&self, price_list: &HashMap<String, Price>) -> Option<Cost> {
        let mut total = 0.0;
        for item in &self.items {
            total += price_list.get(&item.fruit)? * item.pounds;
        }
        Some(total)
    }
}
