//! Chart Plotter Module
//! Draws the dashboard charts with egui_plot, plus a painter-based pie.

use crate::data::STATUS_CANCELED;
use crate::stats::{CategoryCount, MonthlyCount, RoomTypeAdr};
use egui::{Align2, Color32, FontId, Pos2, Stroke, Vec2};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Line, Plot, PlotPoints, Points};

/// Chart body height inside a card.
pub const CHART_HEIGHT: f32 = 300.0;

/// Color palette for the categorical charts
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

/// Fixed colors for the cancellation status chart.
pub const CANCELED_COLOR: Color32 = Color32::from_rgb(239, 85, 59);
pub const CHECKED_OUT_COLOR: Color32 = Color32::from_rgb(99, 110, 250);

const MONTHLY_LINE_COLOR: Color32 = Color32::from_rgb(52, 152, 219);

/// Creates the dashboard visualizations.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Palette color for a category index.
    pub fn category_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    fn status_color(label: &str) -> Color32 {
        if label == STATUS_CANCELED {
            CANCELED_COLOR
        } else {
            CHECKED_OUT_COLOR
        }
    }

    /// Draw the hotel-mix pie with share labels and a side legend.
    pub fn draw_pie_chart(ui: &mut egui::Ui, slices: &[CategoryCount]) {
        let total: f64 = slices.iter().map(|s| s.count as f64).sum();
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), CHART_HEIGHT),
            egui::Sense::hover(),
        );

        if total <= 0.0 {
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No Data",
                FontId::proportional(16.0),
                Color32::GRAY,
            );
            return;
        }

        let painter = ui.painter_at(rect);
        let radius = (rect.height() / 2.0 - 10.0).min(rect.width() / 3.0);
        let center = Pos2::new(rect.left() + rect.width() * 0.35, rect.center().y);

        let mut start = -std::f32::consts::FRAC_PI_2;
        for (i, slice) in slices.iter().enumerate() {
            let fraction = (slice.count as f64 / total) as f32;
            let sweep = fraction * std::f32::consts::TAU;
            let color = Self::category_color(i);

            // Fan of small triangles; the tessellator only takes convex shapes
            let steps = ((sweep / 0.05).ceil() as usize).max(1);
            let mut prev = Self::arc_point(center, radius, start);
            for step in 1..=steps {
                let angle = start + sweep * step as f32 / steps as f32;
                let next = Self::arc_point(center, radius, angle);
                painter.add(egui::Shape::convex_polygon(
                    vec![center, prev, next],
                    color,
                    Stroke::NONE,
                ));
                prev = next;
            }

            // Share label inside the slice; skip slivers that cannot fit one
            if fraction > 0.04 {
                let mid = start + sweep / 2.0;
                painter.text(
                    Self::arc_point(center, radius * 0.6, mid),
                    Align2::CENTER_CENTER,
                    format!("{:.1}%", fraction * 100.0),
                    FontId::proportional(13.0),
                    Color32::WHITE,
                );
            }
            start += sweep;
        }

        // Legend to the right of the pie
        let legend_x = center.x + radius + 25.0;
        let mut y = rect.top() + 20.0;
        for (i, slice) in slices.iter().enumerate() {
            let square = egui::Rect::from_min_size(Pos2::new(legend_x, y), Vec2::splat(14.0));
            painter.rect_filled(square, 3.0, Self::category_color(i));
            painter.text(
                Pos2::new(legend_x + 22.0, y + 7.0),
                Align2::LEFT_CENTER,
                format!("{} ({})", slice.label, slice.count),
                FontId::proportional(13.0),
                ui.visuals().text_color(),
            );
            y += 24.0;
        }
    }

    fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
        Pos2::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }

    /// Draw the canceled vs. checked-out bar chart with the fixed color map.
    pub fn draw_status_chart(ui: &mut egui::Ui, counts: &[CategoryCount]) {
        Self::draw_category_bars(ui, "status_chart", counts, |_, label| {
            Self::status_color(label)
        });
    }

    /// Draw the market-segment bar chart with palette colors.
    pub fn draw_segment_chart(ui: &mut egui::Ui, counts: &[CategoryCount]) {
        Self::draw_category_bars(ui, "segment_chart", counts, |idx, _| {
            Self::category_color(idx)
        });
    }

    /// Vertical bar chart over category counts, labels on the x axis.
    fn draw_category_bars(
        ui: &mut egui::Ui,
        id: &str,
        counts: &[CategoryCount],
        color_for: impl Fn(usize, &str) -> Color32,
    ) {
        let labels: Vec<String> = counts.iter().map(|c| c.label.clone()).collect();
        let bars: Vec<Bar> = counts
            .iter()
            .enumerate()
            .map(|(i, c)| {
                Bar::new(i as f64, c.count as f64)
                    .width(0.6)
                    .fill(color_for(i, &c.label))
                    .name(&c.label)
            })
            .collect();

        Plot::new(id.to_owned())
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .y_axis_label("Bookings")
            .x_axis_formatter(move |mark, _range| Self::label_at(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }

    /// Draw the seasonality line chart, one marker per month.
    pub fn draw_monthly_chart(ui: &mut egui::Ui, monthly: &[MonthlyCount]) {
        // Short month labels keep twelve ticks readable
        let labels: Vec<String> = monthly
            .iter()
            .map(|m| m.month.chars().take(3).collect())
            .collect();
        let points_vec: Vec<[f64; 2]> = monthly
            .iter()
            .enumerate()
            .map(|(i, m)| [i as f64, m.bookings as f64])
            .collect();

        Plot::new("monthly_chart")
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .y_axis_label("Bookings")
            .x_axis_formatter(move |mark, _range| Self::label_at(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points_vec.iter().copied()))
                        .color(MONTHLY_LINE_COLOR)
                        .width(2.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points_vec.iter().copied()))
                        .radius(4.0)
                        .color(MONTHLY_LINE_COLOR),
                );
            });
    }

    /// Draw the top-countries ranking as horizontal bars, largest at the top.
    pub fn draw_country_chart(ui: &mut egui::Ui, counts: &[CategoryCount]) {
        let n = counts.len();
        let bars: Vec<Bar> = counts
            .iter()
            .enumerate()
            .map(|(i, c)| {
                Bar::new((n - 1 - i) as f64, c.count as f64)
                    .width(0.6)
                    .fill(Self::category_color(i))
                    .name(&c.label)
            })
            .collect();
        let labels: Vec<String> = counts.iter().rev().map(|c| c.label.clone()).collect();

        Plot::new("country_chart")
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Bookings")
            .y_axis_formatter(move |mark, _range| Self::label_at(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).horizontal());
            });
    }

    /// Draw the ADR box plot per assigned room type, split by hotel.
    pub fn draw_adr_box_chart(ui: &mut egui::Ui, buckets: &[RoomTypeAdr]) {
        // Buckets arrive sorted by room type, so dedup keeps the axis order
        let mut room_types: Vec<String> = buckets.iter().map(|b| b.room_type.clone()).collect();
        room_types.dedup();
        let mut hotels: Vec<String> = buckets.iter().map(|b| b.hotel.clone()).collect();
        hotels.sort();
        hotels.dedup();

        let group_width = 0.8;
        let box_width = group_width / hotels.len().max(1) as f64 * 0.8;
        let axis_labels = room_types.clone();

        Plot::new("adr_box_chart")
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .legend(Legend::default())
            .y_axis_label("ADR")
            .x_axis_formatter(move |mark, _range| Self::label_at(&axis_labels, mark.value))
            .show(ui, |plot_ui| {
                for (hotel_idx, hotel) in hotels.iter().enumerate() {
                    let color = Self::category_color(hotel_idx);
                    let offset = if hotels.len() > 1 {
                        (hotel_idx as f64 + 0.5) / hotels.len() as f64 * group_width
                            - group_width / 2.0
                    } else {
                        0.0
                    };

                    let elems: Vec<BoxElem> = buckets
                        .iter()
                        .filter(|b| &b.hotel == hotel)
                        .filter_map(|b| {
                            let room_idx =
                                room_types.iter().position(|r| *r == b.room_type)?;
                            Self::box_elem(room_idx as f64 + offset, &b.values, box_width, color)
                        })
                        .collect();

                    plot_ui.box_plot(BoxPlot::new(elems).name(hotel));
                }
            });
    }

    /// Five-number box summary with 1.5 IQR whiskers.
    fn box_elem(x: f64, values: &[f64], width: f64, color: Color32) -> Option<BoxElem> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = sorted.len();
        let q1 = sorted.get(n / 4).copied().unwrap_or(0.0);
        let median = sorted.get(n / 2).copied().unwrap_or(0.0);
        let q3 = sorted.get(3 * n / 4).copied().unwrap_or(0.0);
        let iqr = q3 - q1;
        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&v| v >= q1 - 1.5 * iqr)
            .unwrap_or(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= q3 + 1.5 * iqr)
            .unwrap_or(q3);

        Some(
            BoxElem::new(x, BoxSpread::new(whisker_low, q1, median, q3, whisker_high))
                .box_width(width)
                .fill(color.gamma_multiply(0.3))
                .stroke(Stroke::new(1.5, color)),
        )
    }

    /// Categorical axis label for a grid mark; off-category marks stay blank.
    fn label_at(labels: &[String], value: f64) -> String {
        let idx = value.round() as usize;
        if (value - idx as f64).abs() < 0.3 && idx < labels.len() {
            labels[idx].clone()
        } else {
            String::new()
        }
    }
}
