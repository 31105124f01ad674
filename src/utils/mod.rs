pub mod combinatorics;
pub mod generator;
pub mod scenario;
