use std::collections::BTreeSet;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use crate::state::{AppState, FilterColumn};

// ---------------------------------------------------------------------------
// Left side panel – API key + filter widgets
// ---------------------------------------------------------------------------

/// Render the left sidebar.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🔑 AI Assistant Setup");
    ui.add(
        egui::TextEdit::singleline(&mut state.api_key)
            .password(true)
            .hint_text("Google AI API Key"),
    );
    ui.hyperlink_to("📎 Get an API key here", "https://example.com");
    ui.add_space(4.0);
    ui.separator();

    ui.heading("🎛 Filter Data");

    let Some(table) = &state.table else {
        ui.label("No data loaded.");
        return;
    };

    // Clone the domains so we can mutate state inside the widget closures.
    let platforms = table.platforms.clone();
    let influencers = table.influencers.clone();
    let (min_date, max_date) = (table.min_date, table.max_date);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            checkbox_filter(
                ui,
                state,
                "Platform",
                FilterColumn::Platform,
                &platforms,
                true,
            );
            checkbox_filter(
                ui,
                state,
                "Influencer",
                FilterColumn::Influencer,
                &influencers,
                false,
            );

            ui.separator();
            ui.strong("Date range");
            ui.label(format!("Data covers {min_date} – {max_date}"));
            ui.horizontal(|ui: &mut Ui| {
                ui.add(DatePickerButton::new(&mut state.filters.start).id_salt("start_date"));
                ui.label("to");
                ui.add(DatePickerButton::new(&mut state.filters.end).id_salt("end_date"));
            });
        });

    // Recompute the view after any widget changes.
    state.refilter();
}

/// One collapsible checkbox list with All/None buttons and a selected/total
/// count in the header.
fn checkbox_filter(
    ui: &mut Ui,
    state: &mut AppState,
    title: &str,
    column: FilterColumn,
    all_values: &BTreeSet<String>,
    default_open: bool,
) {
    let selected_len = match column {
        FilterColumn::Platform => state.filters.platforms.len(),
        FilterColumn::Influencer => state.filters.influencers.len(),
    };
    let header_text = format!("{title}  ({selected_len}/{})", all_values.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(title)
        .default_open(default_open)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all(column);
                }
                if ui.small_button("None").clicked() {
                    state.select_none(column);
                }
            });

            let selected = match column {
                FilterColumn::Platform => &mut state.filters.platforms,
                FilterColumn::Influencer => &mut state.filters.influencers,
            };

            for value in all_values {
                let mut checked = selected.contains(value);
                if ui.checkbox(&mut checked, value.as_str()).changed() {
                    if checked {
                        selected.insert(value.clone());
                    } else {
                        selected.remove(value);
                    }
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("SwizzleSip Dashboard");
        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} posts loaded, {} matching filters",
                table.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
