mod selector;
mod state;
mod ui;

use std::sync::mpsc as std_mpsc;
use std::time::Duration;

use eframe::{egui, App};
use tracing::{error, info};

use crate::config::Config;
use crate::upload::{ExtractionClient, TransferEvent};
pub use selector::{FileSelector, SelectionEvent};
pub use state::{Phase, Submission};

pub struct DealUploader {
    config: Config,
    submission: Submission,
    selector: FileSelector,
    transfer_events: Option<std_mpsc::Receiver<TransferEvent>>,
}

impl DealUploader {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        info!(api_url = %config.api_url, "initializing deal uploader");
        Self {
            config,
            submission: Submission::default(),
            selector: FileSelector::default(),
            transfer_events: None,
        }
    }

    fn apply_selection(&mut self, event: SelectionEvent) {
        match event {
            SelectionEvent::Selected(file) => {
                info!(name = %file.name, size_bytes = file.size_bytes, "file selected");
                self.submission.select_file(Some(file));
            }
            SelectionEvent::Cleared => self.submission.select_file(None),
        }
    }

    /// Hands the selected document to a worker thread and moves the
    /// submission to its first milestone. Does nothing unless the
    /// submission is idle with a file.
    fn start_upload(&mut self) {
        let Some(file) = self.submission.begin_upload() else {
            return;
        };
        info!(name = %file.name, api_url = %self.config.api_url, "starting upload");

        let (sender, receiver) = std_mpsc::channel();
        self.transfer_events = Some(receiver);

        let client = ExtractionClient::new(
            self.config.api_url.clone(),
            self.config.resolve_download_dir(),
        );

        std::thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    error!(error = %e, "could not start transfer runtime");
                    sender
                        .send(TransferEvent::Failed(format!(
                            "Failed to start transfer: {}",
                            e
                        )))
                        .unwrap_or_default();
                    return;
                }
            };
            rt.block_on(client.run(file, &sender));
        });
    }

    /// Back to the empty idle screen. A worker that is still running
    /// loses its receiver here; whatever it sends afterwards goes
    /// nowhere.
    fn reset(&mut self) {
        info!("resetting submission");
        self.submission.reset();
        self.transfer_events = None;
    }

    fn pump_transfer_events(&mut self, ctx: &egui::Context) {
        if let Some(receiver) = &self.transfer_events {
            while let Ok(event) = receiver.try_recv() {
                self.submission.apply(event);
            }
        }

        // Keep frames coming while the worker is busy; egui only
        // repaints on input otherwise.
        if self.submission.phase().in_flight() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl App for DealUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump_transfer_events(ctx);
        self.render(ctx);
    }
}
