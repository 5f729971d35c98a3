// src/api/mod.rs

pub mod client;
pub mod error;

pub use client::{HttpStockApi, StockApi, Welcome};
pub use error::ApiError;
