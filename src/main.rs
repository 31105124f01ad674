use shop_around_town::utils::scenario::load_scenario;
use shop_around_town::{cheapest_shop, shop_around_town};

// Three shops around town, the canonical order, and four gas prices to try
const DEMO_SCENARIO: &str = r#"{
    "shops": [
        { "name": "shop1", "prices": { "apples": 2.0, "oranges": 1.0 } },
        { "name": "shop2", "prices": { "apples": 1.0, "oranges": 5.0, "limes": 3.0 } },
        { "name": "shop3", "prices": { "apples": 2.0, "limes": 2.0 } }
    ],
    "distances": [
        { "from": "home", "to": "shop1", "miles": 2.0 },
        { "from": "home", "to": "shop2", "miles": 1.0 },
        { "from": "home", "to": "shop3", "miles": 1.0 },
        { "from": "shop1", "to": "shop2", "miles": 2.5 },
        { "from": "shop1", "to": "shop3", "miles": 2.5 },
        { "from": "shop2", "to": "shop3", "miles": 1.0 }
    ],
    "order": [
        { "fruit": "apples", "pounds": 1.0 },
        { "fruit": "oranges", "pounds": 3.0 },
        { "fruit": "limes", "pounds": 2.0 }
    ],
    "gas_prices": [1.0, 3.0, 5.0, -1.0]
}"#;

fn main() {
    let scenario = match load_scenario(DEMO_SCENARIO) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Error loading demo scenario: {}", e);
            return;
        }
    };

    println!("Shops in town:");
    for shop in scenario.town.shops() {
        println!("  {}", shop.name());
    }

    println!("\nOrder:");
    for item in scenario.order.items() {
        println!("  {} pounds of {}", item.pounds, item.fruit);
    }

    println!("\nBest routes:");
    for &gas_price in &scenario.gas_prices {
        match shop_around_town(&scenario.order, &scenario.town, gas_price) {
            Some(plan) => println!(
                "  At gas price {} the best route is {:?} (total ${:.2})",
                gas_price, plan.shops, plan.cost
            ),
            None => println!(
                "  At gas price {} no combination of shops covers the order",
                gas_price
            ),
        }
    }

    // For comparison: the cheapest single shop, ignoring travel
    match cheapest_shop(&scenario.order, scenario.town.shops()) {
        Some(shop) => println!(
            "\nIgnoring travel, the cheapest single shop is {} (${:.2})",
            shop.name(),
            shop.price_of_order(&scenario.order)
        ),
        None => println!("\nNo shops in town to compare"),
    }
}
