//! src/decryptor/progress.rs
//! Whole-percent progress reporting

/// Turns consumed-byte counts into percentage callbacks (`0..=100`).
///
/// Reports only when the whole percentage changes, never goes backwards, stays
/// below 100 while streaming and reports 100 exactly once from [`finish`](Self::finish).
/// Without a known input length only the final 100 is reported.
pub struct ProgressReporter<'a> {
    callback: Option<&'a mut dyn FnMut(u8)>,
    total_len: Option<u64>,
    last: u8,
    finished: bool,
}

impl<'a> ProgressReporter<'a> {
    pub fn new(callback: Option<&'a mut dyn FnMut(u8)>, total_len: Option<u64>) -> Self {
        Self {
            callback,
            total_len: total_len.filter(|&len| len > 0),
            last: 0,
            finished: false,
        }
    }

    pub fn set_total_len(&mut self, total_len: Option<u64>) {
        self.total_len = total_len.filter(|&len| len > 0);
    }

    /// A reporter that never calls anything.
    pub fn disabled() -> Self {
        Self::new(None, None)
    }

    pub fn update(&mut self, consumed: u64) {
        let (Some(callback), Some(total)) = (self.callback.as_mut(), self.total_len) else {
            return;
        };
        let percent = (u128::from(consumed) * 100 / u128::from(total)).min(99) as u8;
        if percent > self.last {
            self.last = percent;
            callback(percent);
        }
    }

    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.last = 100;
        if let Some(callback) = self.callback.as_mut() {
            callback(100);
        }
    }
}
