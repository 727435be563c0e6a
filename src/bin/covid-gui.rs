/*!
 * Desktop dashboard for covid-dash
 *
 * Shows the worldwide summary cards and the per-country table, with a search
 * field (button or Enter) for looking up a single country. All network work
 * runs on background threads; the UI only reads the shared page state.
 *
 * Platform support: Windows, macOS, Linux
 */

use covid_dash::view::{CountryRow, Tone};
use covid_dash::{Client, Dashboard, DashboardConfig, Page, PageState};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("COVID-19 Dashboard - covid-dash"),
        ..Default::default()
    };

    eframe::run_native(
        "COVID-19 Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc.egui_ctx.clone())))),
    )
}

struct DashboardApp {
    dashboard: Dashboard<Client, Page>,
    search_text: String,
}

impl DashboardApp {
    fn new(ctx: egui::Context) -> Self {
        let page = Page::with_notifier(move || ctx.request_repaint());
        let dashboard = Dashboard::new(Client::default(), page, DashboardConfig::default());
        // Workers run detached; results reach the UI through the page.
        dashboard.bootstrap();
        Self {
            dashboard,
            search_text: String::new(),
        }
    }

    fn submit_search(&mut self) {
        let _ = self.dashboard.search(&self.search_text);
    }
}

fn tone_color(tone: Tone) -> egui::Color32 {
    match tone {
        Tone::Blue => egui::Color32::from_rgb(37, 99, 235),
        Tone::Red => egui::Color32::from_rgb(220, 38, 38),
        Tone::Green => egui::Color32::from_rgb(22, 163, 74),
        Tone::Yellow => egui::Color32::from_rgb(202, 138, 4),
    }
}

fn draw_cards(ui: &mut egui::Ui, state: &PageState) {
    let Some(global) = &state.global else {
        return;
    };
    ui.columns(global.cards.len(), |cols| {
        for (col, card) in cols.iter_mut().zip(global.cards.iter()) {
            col.group(|ui| {
                ui.label(egui::RichText::new(card.title).strong());
                ui.label(
                    egui::RichText::new(&card.value)
                        .size(24.0)
                        .color(tone_color(card.tone)),
                );
                ui.weak(&card.detail);
            });
        }
    });
}

fn draw_table(ui: &mut egui::Ui, rows: &[CountryRow]) {
    egui::Grid::new("country_table")
        .striped(true)
        .num_columns(6)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            for heading in ["", "Country", "Cases", "Deaths", "Recovered", "Active"] {
                ui.strong(heading);
            }
            ui.end_row();

            for row in rows {
                // No image loader is installed; show the alt text, linked when a URL exists.
                if row.flag.is_empty() {
                    ui.weak(row.flag_alt());
                } else {
                    ui.hyperlink_to(row.flag_alt(), &row.flag);
                }
                ui.label(&row.name);
                for cell in row.cells() {
                    ui.vertical(|ui| {
                        ui.label(&cell.value);
                        ui.weak(&cell.detail);
                    });
                }
                ui.end_row();
            }
        });
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = self.dashboard.surface().snapshot();

        // The banner hides itself from a timer thread; keep frames coming so it disappears.
        if state.loading || state.error.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("COVID-19 Dashboard");
            ui.label(format!(
                "Last updated: {}",
                state.last_updated.as_deref().unwrap_or("-")
            ));

            ui.horizontal(|ui| {
                let input = ui.add(
                    egui::TextEdit::singleline(&mut self.search_text)
                        .hint_text("Search country..."),
                );
                let enter = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let clicked = ui.button("Search").clicked();
                if enter || clicked {
                    self.submit_search();
                }

                if state.loading {
                    ui.spinner();
                    ui.label("Loading...");
                }
            });

            if let Some(message) = &state.error {
                ui.colored_label(egui::Color32::RED, message);
            }
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                draw_cards(ui, &state);
                ui.add_space(12.0);
                draw_table(ui, &state.rows);
            });
        });
    }
}
