// Town model managing fruit shops and the distances between locations

use crate::models::{Cost, Distance, FruitShop, Order, Price};
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt;

/// Location key for the shopper's starting point
pub const HOME: &str = "home";

/// Error raised when a town definition is inconsistent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TownError {
    /// A distance entry references a location that is neither home nor a shop
    UnknownLocation { from: String, to: String },
}

impl fmt::Display for TownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TownError::UnknownLocation { from, to } => {
                write!(f, "invalid location in distance pair: ({}, {})", from, to)
            }
        }
    }
}

impl Error for TownError {}

/// Represents a town with fruit shops and a symmetric distance table
/// over locations (home plus shop names)
#[derive(Debug, Clone, PartialEq)]
pub struct Town {
    shops: Vec<FruitShop>,
    distances: HashMap<(String, String), Distance>,
}

impl Town {
    /// Creates a new town, validating that every distance endpoint is
    /// either home or the name of one of the given shops
    pub fn new(
        shops: Vec<FruitShop>,
        distances: HashMap<(String, String), Distance>,
    ) -> Result<Self, TownError> {
        let mut locations: HashSet<&str> = shops.iter().map(|s| s.name()).collect();
        locations.insert(HOME);

        for (from, to) in distances.keys() {
            if !locations.contains(from.as_str()) || !locations.contains(to.as_str()) {
                return Err(TownError::UnknownLocation {
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        }

        Ok(Self { shops, distances })
    }

    /// Gets all shops in the town
    pub fn shops(&self) -> &[FruitShop] {
        &self.shops
    }

    /// Looks up a shop by name
    pub fn shop(&self, name: &str) -> Option<&FruitShop> {
        self.shops.iter().find(|s| s.name() == name)
    }

    /// Gets the distance between two locations.
    /// The table is symmetric: (a, b) and (b, a) are the same entry.
    pub fn distance_between(&self, from: &str, to: &str) -> Option<Distance> {
        self.distances
            .get(&(from.to_string(), to.to_string()))
            .or_else(|| self.distances.get(&(to.to_string(), from.to_string())))
            .copied()
    }

    /// Gets the best price for a fruit among the named shops,
    /// or None if no shop on the route carries it
    pub fn cheapest_price_on_route(&self, fruit: &str, route: &[&str]) -> Option<Price> {
        route
            .iter()
            .filter_map(|name| self.shop(name))
            .filter_map(|shop| shop.cost_per_pound(fruit))
            .fold(None, |best: Option<Price>, price| match best {
                Some(b) if b <= price => Some(b),
                _ => Some(price),
            })
    }

    /// Checks if every fruit in the order is carried by at least one
    /// of the named shops
    pub fn all_fruits_carried(&self, order: &Order, shops: &[&str]) -> bool {
        order
            .items()
            .iter()
            .all(|item| self.cheapest_price_on_route(&item.fruit, shops).is_some())
    }

    /// Calculates the round-trip distance for a route: home, each shop in
    /// order, then back home. Returns None if any leg is undefined.
    pub fn total_route_distance(&self, route: &[&str]) -> Option<Distance> {
        let first = match route.first() {
            Some(first) => first,
            None => return Some(0.0),
        };

        let mut total = self.distance_between(HOME, first)?;
        for leg in route.windows(2) {
            total += self.distance_between(leg[0], leg[1])?;
        }
        total += self.distance_between(route[route.len() - 1], HOME)?;

        Some(total)
    }

    /// Calculates the total cost of buying the order along a route:
    /// gas cost times round-trip distance, plus each item priced at the
    /// cheapest shop on the route. Returns None if a fruit is unavailable
    /// or a leg distance is missing.
    pub fn price_of_order_on_route(
        &self,
        order: &Order,
        route: &[&str],
        gas_cost: f64,
    ) -> Option<Cost> {
        let mut total = self.total_route_distance(route)? * gas_cost;

        for item in order.items() {
            let per_pound = self.cheapest_price_on_route(&item.fruit, route)?;
            total += item.pounds * per_pound;
        }

        Some(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop(name: &str, prices: &[(&str, Price)]) -> FruitShop {
        let prices = prices
            .iter()
            .map(|&(fruit, price)| (fruit.to_string(), price))
            .collect();
        FruitShop::new(name, prices)
    }

    fn distances(entries: &[(&str, &str, Distance)]) -> HashMap<(String, String), Distance> {
        entries
            .iter()
            .map(|&(a, b, d)| ((a.to_string(), b.to_string()), d))
            .collect()
    }

    fn create_test_town() -> Town {
        let shops = vec![
            shop("shop1", &[("apples", 2.0), ("oranges", 1.0)]),
            shop("shop2", &[("apples", 1.0), ("oranges", 5.0), ("limes", 3.0)]),
        ];
        let distances = distances(&[
            ("home", "shop1", 2.0),
            ("home", "shop2", 1.0),
            ("shop1", "shop2", 2.5),
        ]);
        Town::new(shops, distances).unwrap()
    }

    #[test]
    fn test_unknown_location_rejected() {
        let shops = vec![shop("shop1", &[("apples", 2.0)])];
        let distances = distances(&[("home", "shop9", 1.0)]);

        assert_eq!(
            Town::new(shops, distances),
            Err(TownError::UnknownLocation {
                from: "home".to_string(),
                to: "shop9".to_string(),
            })
        );
    }

    #[test]
    fn test_distance_is_symmetric() {
        let town = create_test_town();
        assert_eq!(town.distance_between("home", "shop1"), Some(2.0));
        assert_eq!(town.distance_between("shop1", "home"), Some(2.0));
        assert_eq!(town.distance_between("shop1", "shop1"), None);
    }

    #[test]
    fn test_cheapest_price_on_route() {
        let town = create_test_town();
        assert_eq!(
            town.cheapest_price_on_route("apples", &["shop1", "shop2"]),
            Some(1.0)
        );
        assert_eq!(
            town.cheapest_price_on_route("limes", &["shop1"]),
            None
        );
    }

    #[test]
    fn test_all_fruits_carried() {
        let town = create_test_town();
        let order = Order::from_pairs(&[("apples", 1.0), ("limes", 2.0)]);

        assert!(town.all_fruits_carried(&order, &["shop1", "shop2"]));
        assert!(!town.all_fruits_carried(&order, &["shop1"]));
    }

    #[test]
    fn test_total_route_distance() {
        let town = create_test_town();

        // home -> shop1 -> shop2 -> home
        assert_eq!(
            town.total_route_distance(&["shop1", "shop2"]),
            Some(2.0 + 2.5 + 1.0)
        );
        // Empty route never leaves home
        assert_eq!(town.total_route_distance(&[]), Some(0.0));
    }

    #[test]
    fn test_price_of_order_on_route() {
        let town = create_test_town();
        let order = Order::from_pairs(&[("apples", 1.0), ("oranges", 3.0)]);

        // Apples cheapest at shop2, oranges at shop1, plus 5.5 miles of gas
        assert_eq!(
            town.price_of_order_on_route(&order, &["shop1", "shop2"], 2.0),
            Some(1.0 + 3.0 + 5.5 * 2.0)
        );
        // Unavailable fruit makes the route unpriceable
        let order = Order::from_pairs(&[("limes", 1.0)]);
        assert_eq!(town.price_of_order_on_route(&order, &["shop1"], 1.0), None);
    }
}
