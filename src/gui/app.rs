//! Dashboard Application
//! Single-window report: metric tiles, chart grid, table preview, conclusions.

use crate::gui::{Dashboard, DataTable};
use crate::stats::{DashboardViews, SummaryMetrics};
use egui::{Color32, RichText, ScrollArea};

/// Main application window. Everything it shows is computed before the window
/// opens; each frame is a plain re-draw of the same report.
pub struct DashboardApp {
    metrics: SummaryMetrics,
    views: DashboardViews,
}

impl DashboardApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        metrics: SummaryMetrics,
        views: DashboardViews,
    ) -> Self {
        Self { metrics, views }
    }

    fn show_header(ui: &mut egui::Ui) {
        ui.label(
            RichText::new("🏨 Hotel Booking Analysis Dashboard")
                .size(26.0)
                .strong(),
        );
        ui.label(
            RichText::new(
                "Booking behavior, cancellations, and guest demographics across the dataset.",
            )
            .size(13.0)
            .color(Color32::GRAY),
        );
    }

    fn section_title(ui: &mut egui::Ui, title: &str) {
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);
        ui.label(RichText::new(title).size(18.0).strong());
        ui.add_space(8.0);
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    Self::show_header(ui);

                    ui.add_space(10.0);
                    ui.separator();
                    ui.add_space(10.0);
                    Dashboard::show_metrics(ui, &self.metrics);

                    Self::section_title(ui, "📊 Visual Trend Analysis");
                    Dashboard::show_charts(ui, &self.views);

                    Self::section_title(ui, "📋 Recent Data Detail");
                    ui.label(
                        RichText::new("The columns most relevant to day-to-day operations.")
                            .size(12.0)
                            .color(Color32::GRAY),
                    );
                    ui.add_space(6.0);
                    DataTable::show(ui, &self.views.preview);

                    Self::section_title(ui, "💡 Key Takeaways");
                    Dashboard::show_conclusions(ui, self.metrics.cancellation_rate);
                    ui.add_space(15.0);
                });
        });
    }
}
