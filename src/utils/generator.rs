// Random town generation for benchmarks and analysis tests

use crate::models::{Distance, FruitShop, Order, Price, Town, HOME};
use rand::Rng;
use std::collections::HashMap;

/// Generates a town with `num_shops` shops selling random subsets of
/// `fruits` at random prices, with random symmetric distances between all
/// locations. Every fruit is guaranteed to be carried by at least one shop,
/// so an order over `fruits` is always fulfillable.
pub fn random_town<R: Rng>(rng: &mut R, num_shops: usize, fruits: &[&str]) -> Town {
    let mut shops = Vec::with_capacity(num_shops);

    for shop_idx in 0..num_shops {
        let mut prices: HashMap<String, Price> = HashMap::new();

        for (fruit_idx, fruit) in fruits.iter().enumerate() {
            // The modulo assignment guarantees full coverage of the fruit list
            if fruit_idx % num_shops == shop_idx || rng.gen_bool(0.6) {
                prices.insert(fruit.to_string(), rng.gen_range(0.5..5.0));
            }
        }

        shops.push(FruitShop::new(format!("shop{}", shop_idx + 1), prices));
    }

    let mut locations: Vec<String> = vec![HOME.to_string()];
    locations.extend(shops.iter().map(|s| s.name().to_string()));

    let mut distances: HashMap<(String, String), Distance> = HashMap::new();
    for i in 0..locations.len() {
        for j in (i + 1)..locations.len() {
            distances.insert(
                (locations[i].clone(), locations[j].clone()),
                rng.gen_range(1.0..10.0),
            );
        }
    }

    Town::new(shops, distances).expect("generated distance table only uses known locations")
}

/// Generates an order covering every fruit with a random number of pounds
pub fn random_order<R: Rng>(rng: &mut R, fruits: &[&str]) -> Order {
    let mut order = Order::new();
    for fruit in fruits {
        order.add_item(*fruit, rng.gen_range(1.0..4.0));
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_town_covers_all_fruits() {
        let fruits = ["apples", "oranges", "limes", "pears"];
        let mut rng = StdRng::seed_from_u64(7);

        let town = random_town(&mut rng, 3, &fruits);
        let order = random_order(&mut rng, &fruits);

        assert_eq!(town.shops().len(), 3);
        let names: Vec<&str> = town.shops().iter().map(|s| s.name()).collect();
        assert!(town.all_fruits_carried(&order, &names));
    }

    #[test]
    fn test_random_town_distances_complete() {
        let mut rng = StdRng::seed_from_u64(7);
        let town = random_town(&mut rng, 4, &["apples"]);

        for shop in town.shops() {
            assert!(town.distance_between("home", shop.name()).is_some());
        }
        assert!(town.distance_between("shop1", "shop4").is_some());
    }
}
