pub mod config;
pub mod macros;
pub mod models;
pub mod utils;
