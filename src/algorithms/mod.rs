pub mod route_search;
pub mod shop_smart;
