// Single-shop price comparison: which shop fills the whole order cheapest

use crate::models::{FruitShop, Order};

/// Finds the shop with the lowest total price for the order, pricing the
/// order only with the fruits each shop carries. The first shop wins on
/// ties; None only for an empty shop list.
pub fn cheapest_shop<'a>(order: &Order, shops: &'a [FruitShop]) -> Option<&'a FruitShop> {
    let mut best: Option<(&FruitShop, f64)> = None;

    for shop in shops {
        let total = shop.price_of_order(order);
        let improved = match best {
            Some((_, best_total)) => total < best_total,
            None => true,
        };
        if improved {
            best = Some((shop, total));
        }
    }

    best.map(|(shop, _)| shop)
}
