// src/types/stock.rs

use serde::{Deserialize, Serialize};

/// A single daily bar. Only `date` and `close` feed the chart; the backend
/// also sends OHLV fields which are kept when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPoint {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl StockPoint {
    #[inline]
    pub fn new<T: Into<String>>(date: T, close: f64) -> Self {
        Self {
            date: date.into(),
            close,
            open: None,
            high: None,
            low: None,
            volume: None,
        }
    }
}

/// Body of `/api/stock-data/{ticker}`. Points are kept in the order the
/// backend sent them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StockSeries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    pub data: Vec<StockPoint>,
}

impl StockSeries {
    pub fn new(data: Vec<StockPoint>) -> Self {
        Self { ticker: None, data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_parses_full_ohlcv_payload() {
        let body = r#"{
            "ticker": "MSFT",
            "data": [
                {"date": "2024-01-02", "open": 373.8, "high": 375.9, "low": 366.7, "close": 370.87, "volume": 25258600},
                {"date": "2024-01-03", "open": 369.0, "high": 373.2, "low": 368.5, "close": 370.6, "volume": 23083500}
            ]
        }"#;

        let series: StockSeries = serde_json::from_str(body).unwrap();

        assert_eq!(series.ticker.as_deref(), Some("MSFT"));
        assert_eq!(series.len(), 2);
        assert_eq!(series.data[0].date, "2024-01-02");
        assert_eq!(series.data[1].close, 370.6);
        assert_eq!(series.data[0].volume, Some(25_258_600.0));
    }

    #[test]
    fn test_series_accepts_date_close_only() {
        let body = r#"{"data": [{"date": "2024-05-01", "close": 12.5}]}"#;

        let series: StockSeries = serde_json::from_str(body).unwrap();

        assert_eq!(series.ticker, None);
        assert_eq!(series.data, vec![StockPoint::new("2024-05-01", 12.5)]);
    }

    #[test]
    fn test_series_without_data_field_is_rejected() {
        let body = r#"{"ticker": "MSFT"}"#;
        assert!(serde_json::from_str::<StockSeries>(body).is_err());
    }
}
