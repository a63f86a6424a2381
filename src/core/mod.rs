pub mod aggregator;
pub mod errors;
pub mod minimizer;
pub mod models;
pub mod money;
pub mod services;
