use eframe::egui::{self, Color32, Pos2, RichText, ScrollArea, Sense, Stroke, Ui, vec2};
use egui_plot::{Bar, BarChart, Plot};

use crate::color::ColorMap;
use crate::state::AppState;

const PLATFORM_BAR_COLOR: Color32 = Color32::from_rgb(0x80, 0xb1, 0xd3);
const INFLUENCER_BAR_COLOR: Color32 = Color32::from_rgb(0xb3, 0xde, 0x69);

// ---------------------------------------------------------------------------
// Central panel – KPIs, charts, insight stub
// ---------------------------------------------------------------------------

/// Render the main dashboard panel.
pub fn dashboard(ui: &mut Ui, state: &mut AppState) {
    if state.table.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            let msg = state
                .status_message
                .as_deref()
                .unwrap_or("Could not load SwizzleSip.csv");
            ui.heading(RichText::new(msg).color(Color32::RED));
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("📊 SwizzleSip AI-Powered Media Intelligence");
            ui.label(
                "This dashboard analyses social-media performance of the SwizzleSip brand. \
                 Use the sidebar filters to explore the data.",
            );
            ui.add_space(8.0);

            kpi_row(ui, state);
            ui.separator();

            ui.strong("Interactive Data Visualisation");
            ui.add_space(4.0);
            ui.columns(2, |cols: &mut [Ui]| {
                cols[0].label("Total Engagement per Platform");
                horizontal_bar_chart(
                    &mut cols[0],
                    "platform_chart",
                    &state.summary.engagement_by_platform,
                    PLATFORM_BAR_COLOR,
                );

                cols[1].label("Post Sentiment Distribution");
                donut_chart(&mut cols[1], &state.summary.sentiment_counts);
            });

            ui.add_space(8.0);
            ui.label("Top 10 Influencers by Engagement");
            horizontal_bar_chart(
                ui,
                "influencer_chart",
                &state.summary.top_influencers,
                INFLUENCER_BAR_COLOR,
            );

            ui.separator();
            insight_section(ui, state);
        });
}

// ---------------------------------------------------------------------------
// KPI row
// ---------------------------------------------------------------------------

fn kpi_row(ui: &mut Ui, state: &AppState) {
    ui.strong("Performance Summary (KPIs)");
    ui.add_space(4.0);
    ui.columns(3, |cols: &mut [Ui]| {
        kpi(&mut cols[0], "Total Posts", state.summary.total_posts.to_string());
        kpi(
            &mut cols[1],
            "Total Engagements",
            group_thousands(state.summary.total_engagements),
        );
        kpi(
            &mut cols[2],
            "Avg. Engagement / Post",
            group_thousands(state.summary.avg_engagement.round() as u64),
        );
    });
}

fn kpi(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(label);
        ui.heading(RichText::new(value).strong());
    });
}

/// Insert thousands separators: 1234567 → "1,234,567".
fn group_thousands(n: u64) -> String {
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

// ---------------------------------------------------------------------------
// Horizontal bar chart (egui_plot)
// ---------------------------------------------------------------------------

/// Draw `rows` (already sorted descending) as a horizontal bar chart with
/// the largest bar on top. Hovering a bar shows "category: value".
fn horizontal_bar_chart(ui: &mut Ui, id: &str, rows: &[(String, u64)], color: Color32) {
    if rows.is_empty() {
        ui.weak("No data for the current filters.");
        return;
    }

    let n = rows.len();
    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            // Row 0 (largest) gets the highest y position.
            Bar::new((n - 1 - i) as f64, *value as f64)
                .name(label)
                .fill(color)
                .width(0.6)
        })
        .collect();

    let chart = BarChart::new(bars)
        .horizontal()
        .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| {
            format!("{}: {}", bar.name, bar.value as u64)
        }));

    // Category labels on the y axis, bottom-up.
    let labels: Vec<String> = rows.iter().rev().map(|(label, _)| label.clone()).collect();

    Plot::new(id)
        .height(n as f32 * 28.0 + 48.0)
        .include_x(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label("Total Engagements")
        .y_axis_formatter(move |mark: egui_plot::GridMark, _range: &std::ops::RangeInclusive<f64>| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() < 1e-6 && rounded >= 0.0 {
                labels.get(rounded as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

// ---------------------------------------------------------------------------
// Donut chart (painter-drawn)
// ---------------------------------------------------------------------------

/// Draw `rows` as a donut chart with a legend. Hovering a segment shows
/// "category: value".
fn donut_chart(ui: &mut Ui, rows: &[(String, u64)]) {
    let total: u64 = rows.iter().map(|(_, count)| count).sum();
    if total == 0 {
        ui.weak("No data for the current filters.");
        return;
    }

    let colors = ColorMap::new(rows.iter().map(|(label, _)| label.as_str()));

    let size = ui.available_width().clamp(120.0, 240.0);
    let (rect, response) = ui.allocate_exact_size(vec2(size, size), Sense::hover());
    let painter = ui.painter_at(rect);

    let center = rect.center();
    let outer = rect.width().min(rect.height()) / 2.0 - 4.0;
    let inner = outer * 0.5;

    // Segments start at 12 o'clock and run clockwise.
    let mut angle = -std::f32::consts::FRAC_PI_2;
    let mut segment_spans = Vec::with_capacity(rows.len());

    for (label, count) in rows {
        let sweep = (*count as f32 / total as f32) * std::f32::consts::TAU;
        let color = colors.color_for(label);

        // Approximate the ring segment with thin convex quads.
        let steps = ((sweep / 0.05).ceil() as usize).max(1);
        for step in 0..steps {
            let a0 = angle + sweep * step as f32 / steps as f32;
            let a1 = angle + sweep * (step + 1) as f32 / steps as f32;
            let quad = vec![
                polar(center, outer, a0),
                polar(center, outer, a1),
                polar(center, inner, a1),
                polar(center, inner, a0),
            ];
            painter.add(egui::Shape::convex_polygon(quad, color, Stroke::NONE));
        }

        segment_spans.push((angle, angle + sweep, label.clone(), *count));
        angle += sweep;
    }

    // Pointer tooltip over the hovered segment.
    if let Some(pos) = response.hover_pos() {
        let offset = pos - center;
        let radius = offset.length();
        if radius >= inner && radius <= outer {
            let mut pointer_angle = offset.y.atan2(offset.x);
            if pointer_angle < -std::f32::consts::FRAC_PI_2 {
                pointer_angle += std::f32::consts::TAU;
            }
            if let Some((_, _, label, count)) = segment_spans
                .iter()
                .find(|(a0, a1, _, _)| pointer_angle >= *a0 && pointer_angle < *a1)
            {
                egui::show_tooltip_at_pointer(
                    ui.ctx(),
                    ui.layer_id(),
                    response.id.with("segment_tip"),
                    |ui: &mut Ui| {
                        ui.label(format!("{label}: {count}"));
                    },
                );
            }
        }
    }

    // Legend.
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (label, count) in rows {
            let (swatch, _) = ui.allocate_exact_size(vec2(10.0, 10.0), Sense::hover());
            ui.painter()
                .rect_filled(swatch, 2, colors.color_for(label));
            ui.label(format!("{label} ({count})"));
            ui.add_space(8.0);
        }
    });
}

fn polar(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + radius * vec2(angle.cos(), angle.sin())
}

// ---------------------------------------------------------------------------
// Insight stub
// ---------------------------------------------------------------------------

fn insight_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🤖 AI Analyst Assistant");
    ui.weak("Get an automatic analysis summary of the data you filtered above.");
    if ui.button("Generate Insight").clicked() {
        state.generate_insight();
    }
    if let Some(message) = &state.insight {
        ui.label(RichText::new(format!("📌 {message}")).color(Color32::LIGHT_BLUE));
    }
}
