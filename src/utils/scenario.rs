// JSON scenario loading: a serializable town definition plus the order
// and gas prices to evaluate it with

use crate::models::{Distance, FruitShop, Order, OrderItem, Town, TownError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// One entry of the symmetric distance table.
/// Tuple keys cannot be JSON map keys, so the table is a list of entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceEntry {
    pub from: String,
    pub to: String,
    pub miles: Distance,
}

/// Serializable description of a town, an order, and the gas prices
/// at which to search for the best route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TownScenario {
    pub shops: Vec<FruitShop>,
    pub distances: Vec<DistanceEntry>,
    pub order: Vec<OrderItem>,
    pub gas_prices: Vec<f64>,
}

/// A parsed and validated scenario ready to hand to the search
#[derive(Debug, Clone)]
pub struct Scenario {
    pub town: Town,
    pub order: Order,
    pub gas_prices: Vec<f64>,
}

/// Error raised while loading a scenario
#[derive(Debug)]
pub enum ScenarioError {
    /// The JSON could not be parsed
    Parse(serde_json::Error),
    /// The town definition failed validation
    Town(TownError),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Parse(e) => write!(f, "failed to parse scenario: {}", e),
            ScenarioError::Town(e) => write!(f, "invalid town definition: {}", e),
        }
    }
}

impl Error for ScenarioError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScenarioError::Parse(e) => Some(e),
            ScenarioError::Town(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ScenarioError {
    fn from(e: serde_json::Error) -> Self {
        ScenarioError::Parse(e)
    }
}

impl From<TownError> for ScenarioError {
    fn from(e: TownError) -> Self {
        ScenarioError::Town(e)
    }
}

/// Parses a JSON scenario string and builds the town and order from it
pub fn load_scenario(json: &str) -> Result<Scenario, ScenarioError> {
    let scenario: TownScenario = serde_json::from_str(json)?;

    let distances: HashMap<(String, String), Distance> = scenario
        .distances
        .into_iter()
        .map(|entry| ((entry.from, entry.to), entry.miles))
        .collect();

    let town = Town::new(scenario.shops, distances)?;

    let mut order = Order::new();
    for item in scenario.order {
        order.add_item(item.fruit, item.pounds);
    }

    Ok(Scenario {
        town,
        order,
        gas_prices: scenario.gas_prices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{
        "shops": [
            { "name": "shop1", "prices": { "apples": 2.0, "oranges": 1.0 } },
            { "name": "shop2", "prices": { "limes": 3.0 } }
        ],
        "distances": [
            { "from": "home", "to": "shop1", "miles": 2.0 },
            { "from": "home", "to": "shop2", "miles": 1.0 },
            { "from": "shop1", "to": "shop2", "miles": 2.5 }
        ],
        "order": [
            { "fruit": "apples", "pounds": 1.0 },
            { "fruit": "limes", "pounds": 2.0 }
        ],
        "gas_prices": [1.0, 3.0]
    }"#;

    #[test]
    fn test_load_scenario() {
        let scenario = load_scenario(SCENARIO).unwrap();

        assert_eq!(scenario.town.shops().len(), 2);
        assert_eq!(scenario.town.distance_between("shop2", "shop1"), Some(2.5));
        assert_eq!(scenario.order.items().len(), 2);
        assert_eq!(scenario.gas_prices, vec![1.0, 3.0]);
    }

    #[test]
    fn test_parse_error() {
        let result = load_scenario("{ not json");
        assert!(matches!(result, Err(ScenarioError::Parse(_))));
    }

    #[test]
    fn test_town_error() {
        let json = r#"{
            "shops": [{ "name": "shop1", "prices": { "apples": 2.0 } }],
            "distances": [{ "from": "home", "to": "nowhere", "miles": 1.0 }],
            "order": [],
            "gas_prices": []
        }"#;
        let result = load_scenario(json);
        assert!(matches!(result, Err(ScenarioError::Town(_))));
    }
}
