pub mod config;
pub mod games;
pub mod grid_units;
pub mod logger;
