// Exhaustive shopping route search: enumerate every subset of shops that
// covers the order, every visiting order of each subset, and keep the
// cheapest priced route.
//
// Deliberately O(2^n * n!) over a handful of shops; there is no pruning.

use crate::models::{Order, RoutePlan, Town};
use crate::utils::combinatorics::{permutations, subsets};

/// Finds the cheapest route that buys the whole order: fruit cost at the
/// cheapest shop on the route per item, plus gas cost per mile over the
/// round trip from home.
///
/// Ties are broken by enumeration order: the first route to reach the
/// minimum cost wins. A negative gas cost is allowed and favors longer
/// routes. Returns None when no subset of shops covers the order.
pub fn shop_around_town(order: &Order, town: &Town, gas_cost: f64) -> Option<RoutePlan> {
    // With nothing to buy there is no reason to leave home
    if order.is_empty() {
        return Some(RoutePlan::new(Vec::new(), 0.0));
    }

    let shop_names: Vec<&str> = town.shops().iter().map(|s| s.name()).collect();

    let mut best: Option<RoutePlan> = None;

    for subset in subsets(&shop_names) {
        if !town.all_fruits_carried(order, &subset) {
            continue;
        }

        for route in permutations(&subset) {
            let cost = match town.price_of_order_on_route(order, &route, gas_cost) {
                Some(cost) => cost,
                None => continue,
            };

            let improved = match &best {
                Some(current) => cost < current.cost,
                None => true,
            };
            if improved {
                best = Some(RoutePlan::new(
                    route.iter().map(|name| name.to_string()).collect(),
                    cost,
                ));
            }
        }
    }

    best
}
