// src/api/client.rs

//! Blocking client for the stock dashboard backend.
//!
//! Requests run on worker threads owned by the dashboard, so a blocking
//! `reqwest` client is enough here.

use super::error::ApiError;
use crate::config::DashboardConfig;
use crate::types::{Company, StockSeries};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// The two calls the dashboard needs. This is the seam tests swap out.
pub trait StockApi: Send + Sync {
    /// `GET /api/companies`
    fn companies(&self) -> Result<Vec<Company>, ApiError>;
    /// `GET /api/stock-data/{ticker}`
    fn stock_data(&self, ticker: &str) -> Result<StockSeries, ApiError>;
}

/// Greeting served at the backend root.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Welcome {
    pub message: String,
}

pub struct HttpStockApi {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpStockApi {
    pub fn new(config: &DashboardConfig) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            base_url: config.api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Root endpoint; only used to check the backend is up.
    pub fn welcome(&self) -> Result<Welcome, ApiError> {
        self.get_json(&format!("{}/", self.base_url))
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.json().map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl StockApi for HttpStockApi {
    fn companies(&self) -> Result<Vec<Company>, ApiError> {
        self.get_json(&format!("{}/api/companies", self.base_url))
    }

    fn stock_data(&self, ticker: &str) -> Result<StockSeries, ApiError> {
        self.get_json(&format!("{}/api/stock-data/{}", self.base_url, ticker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    // One-shot HTTP server on loopback. Returns the base URL and a channel
    // carrying the request line it received.
    fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
            }
            tx.send(request_line.trim_end().to_string()).unwrap();

            let mut stream = stream;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        });

        (format!("http://{}", addr), rx)
    }

    fn client_for(base: &str) -> HttpStockApi {
        HttpStockApi::new(&DashboardConfig {
            api_base: base.to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_companies_hits_list_endpoint() {
        let (base, requests) =
            serve_once("200 OK", r#"[{"name":"Tesla, Inc.","ticker":"TSLA"}]"#);
        let api = client_for(&base);

        let companies = api.companies().unwrap();

        assert_eq!(companies, vec![Company::new("Tesla, Inc.", "TSLA")]);
        assert_eq!(requests.recv().unwrap(), "GET /api/companies HTTP/1.1");
    }

    #[test]
    fn test_stock_data_hits_ticker_endpoint() {
        let (base, requests) = serve_once(
            "200 OK",
            r#"{"ticker":"NVDA","data":[{"date":"2024-01-02","close":48.1}]}"#,
        );
        let api = client_for(&base);

        let series = api.stock_data("NVDA").unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(requests.recv().unwrap(), "GET /api/stock-data/NVDA HTTP/1.1");
    }

    #[test]
    fn test_non_success_status_is_an_error() {
        let (base, _requests) = serve_once(
            "404 Not Found",
            r#"{"detail":"Stock data not found for the given ticker."}"#,
        );
        let api = client_for(&base);

        match api.stock_data("NOPE") {
            Err(ApiError::Status { status, url }) => {
                assert_eq!(status, 404);
                assert!(url.ends_with("/api/stock-data/NOPE"));
            }
            other => panic!("expected a status error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_body_is_a_parse_error() {
        let (base, _requests) = serve_once("200 OK", r#"{"not":"a list"}"#);
        let api = client_for(&base);

        assert!(matches!(api.companies(), Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_unreachable_backend_is_a_network_error() {
        // Bind then drop so nothing is listening on the port.
        let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let api = client_for(&format!("http://127.0.0.1:{}", port));

        assert!(matches!(api.companies(), Err(ApiError::Network(_))));
    }

    #[test]
    fn test_welcome_reads_root_message() {
        let (base, requests) = serve_once(
            "200 OK",
            r#"{"message":"Welcome to the Stock Market Dashboard API!"}"#,
        );
        let api = client_for(&format!("{}/", base));

        assert_eq!(api.base_url(), base);
        let welcome = api.welcome().unwrap();
        assert_eq!(welcome.message, "Welcome to the Stock Market Dashboard API!");
        assert_eq!(requests.recv().unwrap(), "GET / HTTP/1.1");
    }
}
