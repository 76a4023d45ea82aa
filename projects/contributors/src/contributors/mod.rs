pub mod fetch;
pub mod filter;
pub mod models;
