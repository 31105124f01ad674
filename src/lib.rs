// Public modules
pub mod algorithms;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::route_search::shop_around_town;
pub use algorithms::shop_smart::cheapest_shop;
pub use models::{FruitShop, Order, OrderItem, RoutePlan, Town, TownError};
