use std::fs;
use std::path::Path;

use eframe::egui::{self, Align, Color32, RichText};
use rfd::FileDialog;
use tracing::{debug, warn};

use crate::upload::CandidateFile;
use crate::utils::file_size;

/// What the user did to the selection this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Selected(CandidateFile),
    Cleared,
}

/// Dropzone with a click-to-browse fallback. Dropped files must carry a
/// `.pdf` extension and anything else is ignored without feedback; the
/// file dialog is pre-filtered instead and its picks are taken as-is.
/// While disabled the whole component is inert.
#[derive(Default)]
pub struct FileSelector;

impl FileSelector {
    /// Draws the selector and reports at most one selection change.
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        file: Option<&CandidateFile>,
        enabled: bool,
    ) -> Option<SelectionEvent> {
        let mut event = Self::intake_dropped(ui.ctx(), enabled);
        let hovering = enabled && ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

        ui.add_enabled_ui(enabled, |ui| {
            let group = ui.group(|ui| {
                ui.set_width(ui.available_width());
                match file {
                    Some(file) => {
                        if Self::render_preview(ui, file, enabled) {
                            event = Some(SelectionEvent::Cleared);
                        }
                    }
                    None => Self::render_placeholder(ui, hovering),
                }
            });

            if file.is_none() && enabled && event.is_none() {
                let response = group
                    .response
                    .interact(egui::Sense::click())
                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                if response.clicked() {
                    if let Some(picked) = Self::open_picker() {
                        event = Some(SelectionEvent::Selected(picked));
                    }
                }
            }
        });

        event
    }

    fn intake_dropped(ctx: &egui::Context, enabled: bool) -> Option<SelectionEvent> {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let path = dropped.into_iter().next()?.path?;

        if !accept_drop(enabled, &path) {
            debug!(path = %path.display(), "ignoring dropped file");
            return None;
        }
        candidate_from_path(&path).map(SelectionEvent::Selected)
    }

    fn open_picker() -> Option<CandidateFile> {
        FileDialog::new()
            .add_filter("PDF documents", &["pdf"])
            .pick_file()
            .as_deref()
            .and_then(candidate_from_path)
    }

    fn render_placeholder(ui: &mut egui::Ui, hovering: bool) {
        ui.vertical_centered(|ui| {
            ui.add_space(18.0);
            ui.label(RichText::new("📁").size(32.0));
            ui.add_space(4.0);
            if hovering {
                ui.label(
                    RichText::new("Drop to select")
                        .strong()
                        .color(Color32::from_rgb(102, 126, 234)),
                );
            } else {
                ui.label(RichText::new("Drag & drop your PDF here").strong());
            }
            ui.label(
                RichText::new("or click to browse")
                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
            ui.add_space(6.0);
            ui.label(
                RichText::new("Supports: PDF files only")
                    .small()
                    .color(ui.visuals().text_color().gamma_multiply(0.5)),
            );
            ui.add_space(18.0);
        });
    }

    /// Returns true when the remove button was clicked.
    fn render_preview(ui: &mut egui::Ui, file: &CandidateFile, enabled: bool) -> bool {
        let mut cleared = false;
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("📄").size(28.0));
            ui.vertical(|ui| {
                ui.label(RichText::new(&file.name).strong());
                ui.label(
                    RichText::new(file_size::format_size(file.size_bytes))
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
            });
            if enabled {
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("✕").clicked() {
                        cleared = true;
                    }
                });
            }
        });
        ui.add_space(8.0);
        cleared
    }
}

fn accept_drop(enabled: bool, path: &Path) -> bool {
    enabled && is_pdf_path(path)
}

/// Native drops declare their type through the file name, so the check
/// is on the extension.
fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("pdf"))
}

fn candidate_from_path(path: &Path) -> Option<CandidateFile> {
    let name = path.file_name()?.to_string_lossy().to_string();
    let size_bytes = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            // Size is display-only; unreadable files fail later with a
            // proper message when the transfer reads them.
            warn!(path = %path.display(), error = %e, "could not stat selected file");
            0
        }
    };
    Some(CandidateFile {
        name,
        size_bytes,
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_only_pdf_extensions_are_accepted() {
        assert!(is_pdf_path(Path::new("/deals/letter.pdf")));
        assert!(is_pdf_path(Path::new("/deals/LETTER.PDF")));
        assert!(is_pdf_path(Path::new("/deals/letter.Pdf")));

        assert!(!is_pdf_path(Path::new("/deals/letter.docx")));
        assert!(!is_pdf_path(Path::new("/deals/letter.pdf.exe")));
        assert!(!is_pdf_path(Path::new("/deals/letter")));
    }

    #[test]
    fn test_drops_are_rejected_while_disabled() {
        assert!(!accept_drop(false, Path::new("/deals/letter.pdf")));
        assert!(accept_drop(true, Path::new("/deals/letter.pdf")));
        assert!(!accept_drop(true, Path::new("/deals/letter.docx")));
    }

    #[test]
    fn test_candidate_carries_name_and_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("letter.pdf");
        fs::write(&path, vec![0u8; 2048]).unwrap();

        let candidate = candidate_from_path(&path).unwrap();
        assert_eq!(candidate.name, "letter.pdf");
        assert_eq!(candidate.size_bytes, 2048);
        assert_eq!(candidate.path, path);
    }

    #[test]
    fn test_candidate_requires_a_file_name() {
        assert_eq!(candidate_from_path(Path::new("/")), None);
    }
}
