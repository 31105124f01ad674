// Route model for representing the result of a route search

use crate::models::Cost;
use serde::{Deserialize, Serialize};

/// Represents a shopping route together with its total cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Shop names in order of visit, starting and ending at home
    pub shops: Vec<String>,

    /// Total cost: fruit cost plus gas cost times round-trip distance
    pub cost: Cost,
}

impl RoutePlan {
    /// Creates a new route plan
    pub fn new(shops: Vec<String>, cost: Cost) -> Self {
        Self { shops, cost }
    }
}
