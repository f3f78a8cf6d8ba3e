use super::{DealUploader, Phase};
use crate::upload::EXPORT_FILE_NAME;
use eframe::egui::{self, Color32, RichText};

impl DealUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(20.0);
                self.render_header(ui);
                ui.add_space(20.0);
                self.render_card(ui);
                ui.add_space(20.0);
                self.render_how_it_works(ui);
                ui.add_space(15.0);
                self.render_footer(ui);
                ui.add_space(10.0);
            });
        });
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("yuktamedia").color(Color32::from_rgb(247, 148, 29)));
            ui.add_space(3.0);
            ui.label(
                RichText::new("Deal Document Extractor")
                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
        });
    }

    fn render_card(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.set_width(ui.available_width());

            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("Upload Deal Document").size(18.0).strong());
                ui.label(
                    RichText::new("Extract deal & placement data from PDF documents automatically")
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
                ui.add_space(8.0);
            });

            let enabled = !self.submission.phase().in_flight();
            if let Some(event) = self
                .selector
                .ui(ui, self.submission.selected_file(), enabled)
            {
                self.apply_selection(event);
            }

            ui.add_space(10.0);

            if self.submission.selected_file().is_some() && self.submission.phase().is_idle() {
                ui.vertical_centered(|ui| {
                    let button = egui::Button::new(
                        RichText::new("Extract Data").color(Color32::WHITE).strong(),
                    )
                    .min_size(egui::vec2(200.0, 40.0))
                    .fill(Color32::from_rgb(102, 126, 234));
                    if ui.add(button).clicked() {
                        self.start_upload();
                    }
                });
                ui.add_space(8.0);
            }

            if !self.submission.phase().is_idle() {
                self.render_status(ui);
            }
        });
    }

    fn render_status(&mut self, ui: &mut egui::Ui) {
        match self.submission.phase().clone() {
            Phase::Idle => {}
            phase @ (Phase::Uploading { .. } | Phase::Processing { .. }) => {
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    ui.add(egui::Spinner::new().size(28.0));
                    ui.add_space(6.0);
                    let caption = match phase {
                        Phase::Uploading { .. } => "Uploading document...",
                        _ => "Extracting campaign data...",
                    };
                    ui.label(RichText::new(caption).strong());
                    ui.label(
                        RichText::new("This may take a moment")
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );
                });
                ui.add_space(8.0);

                let progress_bar = egui::ProgressBar::new(phase.progress_fraction())
                    .show_percentage()
                    .animate(true)
                    .fill(Color32::from_rgb(102, 126, 234));
                ui.add(progress_bar);
                ui.add_space(8.0);
            }
            Phase::Success => {
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("✅").size(28.0));
                    ui.label(RichText::new("Extraction Complete!").strong());
                    let destination = self.config.resolve_download_dir().join(EXPORT_FILE_NAME);
                    ui.label(
                        RichText::new(format!("Saved to {}", destination.display()))
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );
                    ui.add_space(8.0);
                    if ui.button("Upload Another Document").clicked() {
                        self.reset();
                    }
                    ui.add_space(8.0);
                });
            }
            Phase::Error { message, .. } => {
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("❌").size(28.0));
                    ui.label(RichText::new("Extraction Failed").strong());
                    ui.colored_label(Color32::from_rgb(220, 50, 50), &message);
                    ui.add_space(8.0);
                    if ui.button("Try Again").clicked() {
                        self.reset();
                    }
                    ui.add_space(8.0);
                });
            }
        }
    }

    fn render_how_it_works(&self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.add_space(4.0);
            ui.label(RichText::new("How it works").size(16.0).strong());
            ui.add_space(8.0);

            for (number, title, detail) in [
                ("1", "Upload PDF", "Deal letters, release orders, insertion orders"),
                ("2", "AI Extraction", "Automatic deal & placement data extraction"),
                ("3", "Download Excel", "Ready for YuktaOne import"),
            ] {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(number)
                            .strong()
                            .color(Color32::from_rgb(102, 126, 234)),
                    );
                    ui.add_space(4.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(title).strong());
                        ui.label(
                            RichText::new(detail)
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });
                });
                ui.add_space(6.0);
            }
        });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("Extraction service: {}", self.config.api_url))
                    .small()
                    .color(ui.visuals().text_color().gamma_multiply(0.5)),
            );
        });
    }
}
