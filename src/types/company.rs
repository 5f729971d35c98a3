// src/types/company.rs

use serde::{Deserialize, Serialize};

/// One entry of the company list served by `/api/companies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Human-readable company name.
    pub name: String,
    /// Exchange ticker (e.g. "MSFT"). Unique within the list.
    pub ticker: String,
}

impl Company {
    #[inline]
    pub fn new<T1: Into<String>, T2: Into<String>>(name: T1, ticker: T2) -> Self {
        Self {
            name: name.into(),
            ticker: ticker.into(),
        }
    }
}
