use crate::upload::{CandidateFile, TransferEvent};

/// Milestone percentages shown while a submission runs. They mark
/// checkpoints of the exchange, not measured transfer progress.
pub const PROGRESS_STARTED: u8 = 10;
pub const PROGRESS_DISPATCHED: u8 = 30;
pub const PROGRESS_RESPONDED: u8 = 70;
pub const PROGRESS_DONE: u8 = 100;

/// Where the current submission stands. Progress only exists while a
/// phase carries it, and an error message only exists in `Error`, so
/// stale combinations cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Uploading { progress: u8 },
    Processing { progress: u8 },
    Success,
    Error { message: String, progress: u8 },
}

impl Default for Phase {
    fn default() -> Self {
        Self::Idle
    }
}

impl Phase {
    pub fn progress(&self) -> u8 {
        match self {
            Phase::Idle => 0,
            Phase::Uploading { progress } | Phase::Processing { progress } => *progress,
            Phase::Success => PROGRESS_DONE,
            Phase::Error { progress, .. } => *progress,
        }
    }

    /// Progress as the 0..=1 fraction the progress bar widget expects.
    pub fn progress_fraction(&self) -> f32 {
        f32::from(self.progress()) / 100.0
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Phase::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    /// True while the transfer worker is running. File selection stays
    /// disabled for as long as this holds.
    pub fn in_flight(&self) -> bool {
        matches!(self, Phase::Uploading { .. } | Phase::Processing { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }
}

/// One attempt to extract data from a single document: the selected
/// file plus the phase its transfer is in. All transitions go through
/// the methods here; the rendering layer only reads.
#[derive(Debug, Default)]
pub struct Submission {
    file: Option<CandidateFile>,
    phase: Phase,
}

impl Submission {
    pub fn selected_file(&self) -> Option<&CandidateFile> {
        self.file.as_ref()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Stores a new candidate (or clears it) and returns to `Idle`,
    /// wiping any previous error. Ignored while a transfer is in
    /// flight; the selector is disabled then and this is the backstop.
    pub fn select_file(&mut self, file: Option<CandidateFile>) {
        if self.phase.in_flight() {
            return;
        }
        self.file = file;
        self.phase = Phase::Idle;
    }

    /// Moves to the first milestone and hands out the candidate the
    /// worker should transfer. Without a file, or outside `Idle`, this
    /// is a no-op and returns `None`.
    pub fn begin_upload(&mut self) -> Option<CandidateFile> {
        if !self.phase.is_idle() {
            return None;
        }
        let file = self.file.clone()?;
        self.phase = Phase::Uploading {
            progress: PROGRESS_STARTED,
        };
        Some(file)
    }

    /// Applies one worker event. Events that do not fit the current
    /// phase, such as those from a worker that outlived a reset, are
    /// dropped.
    pub fn apply(&mut self, event: TransferEvent) {
        self.phase = match (std::mem::take(&mut self.phase), event) {
            (Phase::Uploading { .. }, TransferEvent::Dispatched) => Phase::Processing {
                progress: PROGRESS_DISPATCHED,
            },
            (Phase::Processing { .. }, TransferEvent::Received) => Phase::Processing {
                progress: PROGRESS_RESPONDED,
            },
            (Phase::Processing { .. }, TransferEvent::Completed) => Phase::Success,
            (
                phase @ (Phase::Uploading { .. } | Phase::Processing { .. }),
                TransferEvent::Failed(message),
            ) => Phase::Error {
                progress: phase.progress(),
                message,
            },
            (phase, _) => phase,
        };
    }

    /// Returns to the initial state from anywhere.
    pub fn reset(&mut self) {
        self.file = None;
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn candidate(name: &str) -> CandidateFile {
        CandidateFile {
            name: name.to_string(),
            size_bytes: 4096,
            path: PathBuf::from(format!("/tmp/{name}")),
        }
    }

    fn in_flight() -> Submission {
        let mut submission = Submission::default();
        submission.select_file(Some(candidate("deal.pdf")));
        submission.begin_upload();
        submission
    }

    #[test]
    fn test_selecting_a_file_lands_idle_with_candidate() {
        let mut submission = Submission::default();
        submission.select_file(Some(candidate("deal.pdf")));

        assert_eq!(submission.selected_file(), Some(&candidate("deal.pdf")));
        assert_eq!(*submission.phase(), Phase::Idle);
        assert_eq!(submission.phase().progress(), 0);
    }

    #[test]
    fn test_selecting_clears_previous_error() {
        let mut submission = in_flight();
        submission.apply(TransferEvent::Failed("bad scan".to_string()));
        assert!(submission.phase().error_message().is_some());

        submission.select_file(Some(candidate("retry.pdf")));

        assert_eq!(*submission.phase(), Phase::Idle);
        assert_eq!(submission.phase().error_message(), None);
        assert_eq!(submission.selected_file(), Some(&candidate("retry.pdf")));
    }

    #[test]
    fn test_clearing_selection_returns_to_empty_idle() {
        let mut submission = Submission::default();
        submission.select_file(Some(candidate("deal.pdf")));
        submission.select_file(None);

        assert_eq!(submission.selected_file(), None);
        assert_eq!(*submission.phase(), Phase::Idle);
    }

    #[test]
    fn test_selection_is_ignored_mid_transfer() {
        let mut submission = in_flight();
        submission.select_file(Some(candidate("other.pdf")));
        assert_eq!(submission.selected_file(), Some(&candidate("deal.pdf")));

        submission.apply(TransferEvent::Dispatched);
        submission.select_file(None);
        assert_eq!(submission.selected_file(), Some(&candidate("deal.pdf")));
        assert!(submission.phase().in_flight());
    }

    #[test]
    fn test_begin_upload_without_file_is_a_noop() {
        let mut submission = Submission::default();
        assert_eq!(submission.begin_upload(), None);
        assert_eq!(*submission.phase(), Phase::Idle);
    }

    #[test]
    fn test_begin_upload_only_starts_from_idle() {
        let mut submission = in_flight();
        assert_eq!(submission.begin_upload(), None);

        submission.apply(TransferEvent::Failed("bad scan".to_string()));
        assert_eq!(submission.begin_upload(), None);
        assert!(submission.phase().error_message().is_some());
    }

    #[test]
    fn test_begin_upload_sets_first_milestone() {
        let mut submission = Submission::default();
        submission.select_file(Some(candidate("deal.pdf")));

        let handed_out = submission.begin_upload();

        assert_eq!(handed_out, Some(candidate("deal.pdf")));
        assert_eq!(
            *submission.phase(),
            Phase::Uploading {
                progress: PROGRESS_STARTED
            }
        );
    }

    #[test]
    fn test_successful_run_walks_milestones_in_order() {
        let mut submission = Submission::default();
        submission.select_file(Some(candidate("deal.pdf")));
        submission.begin_upload();

        let mut seen = vec![submission.phase().progress()];
        for event in [
            TransferEvent::Dispatched,
            TransferEvent::Received,
            TransferEvent::Completed,
        ] {
            submission.apply(event);
            seen.push(submission.phase().progress());
        }

        assert_eq!(seen, vec![10, 30, 70, 100]);
        assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(*submission.phase(), Phase::Success);
    }

    #[test]
    fn test_failure_keeps_last_progress() {
        let mut submission = in_flight();
        submission.apply(TransferEvent::Failed("boom".to_string()));
        assert_eq!(submission.phase().progress(), 10);

        let mut submission = in_flight();
        submission.apply(TransferEvent::Dispatched);
        submission.apply(TransferEvent::Failed("boom".to_string()));
        assert_eq!(submission.phase().progress(), 30);

        let mut submission = in_flight();
        submission.apply(TransferEvent::Dispatched);
        submission.apply(TransferEvent::Received);
        submission.apply(TransferEvent::Failed("boom".to_string()));
        assert_eq!(submission.phase().progress(), 70);
    }

    #[test]
    fn test_failure_message_is_stored_verbatim() {
        let mut submission = in_flight();
        submission.apply(TransferEvent::Failed("bad scan".to_string()));

        assert_eq!(submission.phase().error_message(), Some("bad scan"));
        assert!(!submission.phase().in_flight());
    }

    #[test]
    fn test_reset_clears_everything_from_any_phase() {
        let runs: Vec<Box<dyn Fn(&mut Submission)>> = vec![
            Box::new(|_| {}),
            Box::new(|s| s.apply(TransferEvent::Dispatched)),
            Box::new(|s| {
                s.apply(TransferEvent::Dispatched);
                s.apply(TransferEvent::Received);
                s.apply(TransferEvent::Completed);
            }),
            Box::new(|s| s.apply(TransferEvent::Failed("boom".to_string()))),
        ];

        for advance in runs {
            let mut submission = in_flight();
            advance(&mut submission);
            submission.reset();

            assert_eq!(submission.selected_file(), None);
            assert_eq!(*submission.phase(), Phase::Idle);
            assert_eq!(submission.phase().progress(), 0);
            assert_eq!(submission.phase().error_message(), None);
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut submission = in_flight();
        submission.reset();
        submission.reset();

        assert_eq!(submission.selected_file(), None);
        assert_eq!(*submission.phase(), Phase::Idle);
    }

    #[test]
    fn test_stale_events_after_reset_are_dropped() {
        let mut submission = in_flight();
        submission.reset();

        for event in [
            TransferEvent::Dispatched,
            TransferEvent::Received,
            TransferEvent::Completed,
            TransferEvent::Failed("late".to_string()),
        ] {
            submission.apply(event);
            assert_eq!(*submission.phase(), Phase::Idle);
        }
    }

    #[test]
    fn test_out_of_order_events_never_regress_progress() {
        let mut submission = in_flight();
        submission.apply(TransferEvent::Dispatched);
        submission.apply(TransferEvent::Received);

        submission.apply(TransferEvent::Dispatched);
        assert_eq!(submission.phase().progress(), 70);

        submission.apply(TransferEvent::Completed);
        submission.apply(TransferEvent::Received);
        assert_eq!(*submission.phase(), Phase::Success);
        assert_eq!(submission.phase().progress(), 100);
    }

    #[test]
    fn test_progress_fraction_matches_percentage() {
        let mut submission = in_flight();
        assert!((submission.phase().progress_fraction() - 0.1).abs() < f32::EPSILON);

        submission.apply(TransferEvent::Dispatched);
        assert!((submission.phase().progress_fraction() - 0.3).abs() < f32::EPSILON);

        submission.apply(TransferEvent::Received);
        assert!((submission.phase().progress_fraction() - 0.7).abs() < f32::EPSILON);

        submission.apply(TransferEvent::Completed);
        assert!((submission.phase().progress_fraction() - 1.0).abs() < f32::EPSILON);
    }
}
