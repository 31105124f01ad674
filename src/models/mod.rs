// Models module - exports all model types

mod order;
mod route;
mod shop;
mod town;

// Re-export model types
pub use self::order::{Order, OrderItem};
pub use self::route::RoutePlan;
pub use self::shop::FruitShop;
pub use self::town::{Town, TownError, HOME};

// Common type aliases for improved code readability
pub type Price = f64;
pub type Pounds = f64;
pub type Cost = f64;
pub type Distance = f64;
