use std::sync::Mutex;

/// Run-scoped counters reported once at the end of a hunt.
pub struct RunRecorder {
    inner: Mutex<Counters>,
}

#[derive(Default)]
struct Counters {
    rings_loaded: usize,
    candidates: usize,
    artifacts_written: usize,
}

impl RunRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters::default()),
        }
    }

    pub fn record_loaded(&self, count: usize) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.rings_loaded = count;
        }
    }

    pub fn record_candidates(&self, count: usize) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.candidates = count;
        }
    }

    pub fn record_artifact(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.artifacts_written += 1;
        }
    }

    /// (rings loaded, candidates, artifacts written).
    pub fn snapshot(&self) -> (usize, usize, usize) {
        if let Ok(counters) = self.inner.lock() {
            (
                counters.rings_loaded,
                counters.candidates,
                counters.artifacts_written,
            )
        } else {
            (0, 0, 0)
        }
    }
}

impl Default for RunRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_recorded_events() {
        let recorder = RunRecorder::new();
        recorder.record_loaded(768);
        recorder.record_candidates(4);
        recorder.record_artifact();
        recorder.record_artifact();
        assert_eq!(recorder.snapshot(), (768, 4, 2));
    }
}
