// src/types/mod.rs

pub mod company;
pub mod stock;

pub use company::Company;
pub use stock::{StockPoint, StockSeries};
