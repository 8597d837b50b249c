//! Dashboard Widgets
//! Metric tile row, chart grid, and conclusion blocks.

use crate::charts::ChartPlotter;
use crate::stats::{DashboardViews, SummaryMetrics};
use egui::{Color32, RichText};

const CARD_WIDTH: f32 = 640.0;
const CARD_SPACING: f32 = 15.0;

/// Static report sections above the data table.
pub struct Dashboard;

impl Dashboard {
    /// Draw the four metric tiles.
    pub fn show_metrics(ui: &mut egui::Ui, metrics: &SummaryMetrics) {
        let tiles = [
            ("Total Bookings", format_count(metrics.total_bookings)),
            (
                "Cancellation Rate",
                format!("{:.1}%", metrics.cancellation_rate),
            ),
            ("Average Rate (ADR)", format!("${:.2}", metrics.avg_adr)),
            (
                "Average Stay (Nights)",
                format!("{:.1}", metrics.avg_stay_nights),
            ),
        ];

        let tile_width = ((ui.available_width() - 3.0 * CARD_SPACING) / 4.0).max(150.0);
        ui.horizontal(|ui| {
            for (label, value) in tiles {
                egui::Frame::none()
                    .rounding(8.0)
                    .fill(ui.visuals().widgets.noninteractive.bg_fill)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_width(tile_width - 24.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(label).size(12.0).color(Color32::GRAY));
                            ui.label(RichText::new(value).size(24.0).strong());
                        });
                    });
                ui.add_space(CARD_SPACING);
            }
        });
    }

    /// Draw the six charts in two-column rows.
    pub fn show_charts(ui: &mut egui::Ui, views: &DashboardViews) {
        ui.horizontal(|ui| {
            Self::chart_card(ui, "Bookings by Hotel Type", |ui| {
                ChartPlotter::draw_pie_chart(ui, &views.hotel_mix);
            });
            ui.add_space(CARD_SPACING);
            Self::chart_card(ui, "Cancellations vs. Completed Stays", |ui| {
                ChartPlotter::draw_status_chart(ui, &views.status_counts);
            });
        });
        ui.add_space(CARD_SPACING);

        ui.horizontal(|ui| {
            Self::chart_card(ui, "Bookings per Month (Seasonality)", |ui| {
                ChartPlotter::draw_monthly_chart(ui, &views.monthly);
            });
            ui.add_space(CARD_SPACING);
            Self::chart_card(ui, "Bookings by Market Segment", |ui| {
                ChartPlotter::draw_segment_chart(ui, &views.segment_counts);
            });
        });
        ui.add_space(CARD_SPACING);

        ui.horizontal(|ui| {
            Self::chart_card(ui, "Top 10 Countries of Origin", |ui| {
                ChartPlotter::draw_country_chart(ui, &views.top_countries);
            });
            ui.add_space(CARD_SPACING);
            Self::chart_card(ui, "Price (ADR) by Assigned Room Type", |ui| {
                ChartPlotter::draw_adr_box_chart(ui, &views.adr_by_room);
            });
        });
    }

    /// Draw the three conclusion blocks.
    pub fn show_conclusions(ui: &mut egui::Ui, cancellation_rate: f64) {
        let blocks = [
            (
                "1. High Cancellation Rate",
                format!(
                    "With a cancellation rate of {cancellation_rate:.1}%, deposit policies \
                     deserve a review. A large share of inventory is blocked and later \
                     released, which hurts revenue efficiency."
                ),
            ),
            (
                "2. Strong Seasonality",
                "Bookings peak clearly in the summer months (July and August). That calls \
                 for more aggressive dynamic pricing in high season and promotions for \
                 valley months such as January."
                    .to_string(),
            ),
            (
                "3. Agency Dominance (TA/TO)",
                "The Travel Agents/Operators segment dominates bookings. It brings volume \
                 but usually at thinner margins; steering guests toward the Direct channel \
                 would improve net revenue per room."
                    .to_string(),
            ),
        ];

        ui.columns(3, |columns| {
            for (column, (title, body)) in columns.iter_mut().zip(blocks) {
                egui::Frame::none()
                    .rounding(8.0)
                    .fill(column.visuals().widgets.noninteractive.bg_fill)
                    .inner_margin(12.0)
                    .show(column, |ui| {
                        ui.label(
                            RichText::new(title)
                                .size(14.0)
                                .strong()
                                .color(Color32::from_rgb(100, 149, 237)),
                        );
                        ui.add_space(6.0);
                        ui.label(RichText::new(body).size(12.5));
                    });
            }
        });
    }

    /// Framed fixed-width card with a title and a chart body.
    fn chart_card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(
                1.0,
                ui.visuals().widgets.noninteractive.bg_stroke.color,
            ))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).size(15.0).strong());
                    ui.add_space(8.0);
                    add_contents(ui);
                });
            });
    }
}

/// Format a count with thousands separators.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(119390), "119,390");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
