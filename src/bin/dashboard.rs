// src/bin/dashboard.rs

use eframe::egui;
use egui::{Color32, RichText};
use std::sync::Arc;
use std::thread;
use stock_dashboard::{
    Dashboard, DashboardConfig, Dispatch, HttpStockApi, ListView, PlotSurface, StockApi, logging,
};
use tracing::{error, info, warn};

/// The window: company list on the left, title and chart in the middle.
struct DashboardApp {
    dashboard: Dashboard<PlotSurface>,
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply whatever responses arrived since the last frame.
        self.dashboard.pump();

        egui::SidePanel::left("company_list")
            .resizable(true)
            .min_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Companies");
                ui.separator();

                // Collect the click first; selecting needs `&mut self.dashboard`.
                let mut clicked = None;
                match self.dashboard.list() {
                    ListView::Loading => {
                        ui.spinner();
                    }
                    ListView::Failed(message) => {
                        ui.label(RichText::new(message).color(Color32::LIGHT_RED));
                    }
                    ListView::Loaded { companies, active } => {
                        egui::ScrollArea::vertical().show(ui, |ui| {
                            for (idx, company) in companies.iter().enumerate() {
                                let selected = *active == Some(idx);
                                if ui
                                    .selectable_label(selected, &company.name)
                                    .on_hover_text(&company.ticker)
                                    .clicked()
                                {
                                    clicked = Some(company.clone());
                                }
                            }
                        });
                    }
                }

                if let Some(company) = clicked {
                    self.dashboard.select_company(&company.ticker, &company.name);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.dashboard.label());
            ui.separator();
            self.dashboard.surface().show(ui);
        });
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = DashboardConfig::from_env();
    info!(api_base = %config.api_base, "starting stock dashboard");

    let http = Arc::new(HttpStockApi::new(&config)?);

    // Backend check only; the dashboard loads regardless.
    let probe = Arc::clone(&http);
    thread::spawn(move || match probe.welcome() {
        Ok(welcome) => info!("backend says: {}", welcome.message),
        Err(e) => warn!("backend at {} is not answering: {}", probe.base_url(), e),
    });

    let api: Arc<dyn StockApi> = http;
    let mut dashboard = Dashboard::new(api, PlotSurface::new(), Dispatch::Threaded);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_title("Stock Market Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Stock Market Dashboard",
        native_options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            dashboard.set_waker(move || ctx.request_repaint());
            dashboard.load_companies();
            Box::new(DashboardApp { dashboard })
        }),
    )
    .map_err(|e| {
        error!("window closed with error: {}", e);
        e.into()
    })
}
