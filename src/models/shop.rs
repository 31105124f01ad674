// Fruit shop model representing a shop with a per-pound price table

use crate::models::{Cost, Order, Price};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents a fruit shop selling a subset of fruits by the pound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FruitShop {
    /// Name of the shop, also used as its location key in the town
    name: String,

    /// Price per pound for each fruit the shop carries
    prices: HashMap<String, Price>,
}

impl FruitShop {
    /// Creates a new fruit shop with the given name and price table
    pub fn new<S: Into<String>>(name: S, prices: HashMap<String, Price>) -> Self {
        Self {
            name: name.into(),
            prices,
        }
    }

    /// Gets the name of the shop
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks if the shop carries a specific fruit
    pub fn carries(&self, fruit: &str) -> bool {
        self.prices.contains_key(fruit)
    }

    /// Gets the price per pound of a fruit, or None if the shop does not carry it
    pub fn cost_per_pound(&self, fruit: &str) -> Option<Price> {
        self.prices.get(fruit).copied()
    }

    /// Calculates the cost of an order at this shop alone.
    /// Fruits the shop does not carry contribute nothing to the total.
    pub fn price_of_order(&self, order: &Order) -> Cost {
        order
            .items()
            .iter()
            .filter_map(|item| {
                self.cost_per_pound(&item.fruit)
                    .map(|price| price * item.pounds)
            })
            .sum()
    }
}
