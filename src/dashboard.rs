// src/dashboard.rs

//! The dashboard controller.
//!
//! Owns the company list, the title label and the one live chart. Network
//! calls run off the UI thread; their outcomes queue up in an inbox that the
//! UI drains with `pump()` once per frame, so all state changes happen on the
//! UI thread in the order the responses arrived.

use crate::api::{ApiError, StockApi};
use crate::chart::{ChartSurface, LineChart};
use crate::config;
use crate::types::{Company, StockSeries};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// What the company list area is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading,
    Loaded {
        companies: Vec<Company>,
        active: Option<usize>,
    },
    /// Replacement text shown instead of the list.
    Failed(String),
}

/// How requests are run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// One worker thread per request.
    Threaded,
    /// On the caller's thread; the outcome still waits for `pump()`.
    Inline,
}

enum Outcome {
    Companies(Result<Vec<Company>, ApiError>),
    Series {
        ticker: String,
        name: String,
        result: Result<StockSeries, ApiError>,
    },
}

type Inbox = Arc<Mutex<VecDeque<Outcome>>>;
type Waker = Arc<dyn Fn() + Send + Sync>;

pub struct Dashboard<S: ChartSurface> {
    api: Arc<dyn StockApi>,
    surface: S,
    chart: Option<S::Handle>,
    list: ListView,
    label: String,
    inbox: Inbox,
    in_flight: usize,
    dispatch: Dispatch,
    waker: Option<Waker>,
}

impl<S: ChartSurface> Dashboard<S> {
    pub fn new(api: Arc<dyn StockApi>, surface: S, dispatch: Dispatch) -> Self {
        Self {
            api,
            surface,
            chart: None,
            list: ListView::Loading,
            label: String::new(),
            inbox: Arc::new(Mutex::new(VecDeque::new())),
            in_flight: 0,
            dispatch,
            waker: None,
        }
    }

    /// Called from a worker thread whenever a response lands, so the UI can
    /// wake up and `pump()`.
    pub fn set_waker<F>(&mut self, waker: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.waker = Some(Arc::new(waker));
    }

    // === Operations ===

    /// Requests the company list. The first company is selected once it
    /// arrives.
    pub fn load_companies(&mut self) {
        self.list = ListView::Loading;
        self.dispatch_job(|api| Outcome::Companies(api.companies()));
    }

    /// Marks a company active and requests its series. Nothing in flight is
    /// cancelled; whichever response arrives last decides what is shown.
    pub fn select_company(&mut self, ticker: &str, name: &str) {
        self.label = format!("Loading data for {}...", name);
        if let ListView::Loaded { companies, active } = &mut self.list {
            if let Some(idx) = companies.iter().position(|c| c.ticker == ticker) {
                *active = Some(idx);
            }
        }

        let ticker = ticker.to_string();
        let name = name.to_string();
        self.dispatch_job(move |api| {
            let result = api.stock_data(&ticker);
            Outcome::Series {
                ticker,
                name,
                result,
            }
        });
    }

    /// Replaces whatever chart is live with one built from `series`.
    pub fn render_chart(&mut self, series: &StockSeries) {
        self.clear_chart();
        let chart = LineChart::from_series(series);
        self.chart = Some(self.surface.create(chart));
    }

    /// Disposes the live chart, if any.
    pub fn clear_chart(&mut self) {
        if let Some(handle) = self.chart.take() {
            self.surface.dispose(handle);
        }
    }

    /// Applies every response that has arrived. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        loop {
            // Lock only long enough to pop; applying may queue more work.
            let next = self.inbox.lock().pop_front();
            let Some(outcome) = next else { break };
            self.in_flight = self.in_flight.saturating_sub(1);
            self.apply(outcome);
            applied += 1;
        }
        applied
    }

    /// Pumps until nothing is in flight or `timeout` passes. Returns true if
    /// everything settled.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.pump();
            if self.in_flight == 0 {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(Duration::from_millis(2));
        }
    }

    // === Getters ===

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn companies(&self) -> &[Company] {
        match &self.list {
            ListView::Loaded { companies, .. } => companies,
            _ => &[],
        }
    }

    pub fn active(&self) -> Option<usize> {
        match &self.list {
            ListView::Loaded { active, .. } => *active,
            _ => None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    // === Internals ===

    fn dispatch_job<F>(&mut self, job: F)
    where
        F: FnOnce(&dyn StockApi) -> Outcome + Send + 'static,
    {
        self.in_flight += 1;
        match self.dispatch {
            Dispatch::Inline => {
                let outcome = job(self.api.as_ref());
                self.inbox.lock().push_back(outcome);
            }
            Dispatch::Threaded => {
                let api = Arc::clone(&self.api);
                let inbox = Arc::clone(&self.inbox);
                let waker = self.waker.clone();
                thread::spawn(move || {
                    let outcome = job(api.as_ref());
                    inbox.lock().push_back(outcome);
                    if let Some(wake) = waker {
                        wake();
                    }
                });
            }
        }
    }

    fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Companies(Ok(companies)) => {
                info!(count = companies.len(), "company list loaded");
                let first = companies.first().cloned();
                self.list = ListView::Loaded {
                    active: first.as_ref().map(|_| 0),
                    companies,
                };
                if let Some(first) = first {
                    self.select_company(&first.ticker, &first.name);
                }
            }
            Outcome::Companies(Err(e)) => {
                error!("Error fetching companies: {}", e);
                self.list = ListView::Failed(config::COMPANIES_ERROR_TEXT.to_string());
            }
            Outcome::Series {
                ticker,
                name,
                result: Ok(series),
            } => {
                info!(%ticker, points = series.len(), "stock data loaded");
                self.label = format!("{} ({}) Stock Price", name, ticker);
                self.render_chart(&series);
            }
            Outcome::Series {
                ticker,
                name,
                result: Err(e),
            } => {
                error!(%ticker, "Error fetching stock data: {}", e);
                self.label = format!("Error loading data for {}.", name);
                self.clear_chart();
            }
        }
    }
}
