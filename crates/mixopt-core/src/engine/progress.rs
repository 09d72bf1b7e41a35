/// Events emitted while a batch of candidates is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    /// Scoring is about to start for `candidates` distinct evaluations.
    BatchStart { candidates: u64 },
    CandidateScored,
    BatchFinish { failed: usize },

    Message(String),
}

/// Must be callable from worker threads when the `parallel` feature is enabled.
pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    #[inline]
    pub fn is_silent(&self) -> bool {
        self.callback.is_none()
    }
}
