use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// A shared on/off loading indicator addressed by token.
pub trait LoadingIndicator: Send + Sync {
    fn show(&self, token: &str);
    fn hide(&self, token: &str);
}

/// Shows the indicator on acquisition and hides it exactly once when dropped,
/// whichever way the holder exits.
pub struct LoadingGuard {
    indicator: Arc<dyn LoadingIndicator>,
    token: String,
}

impl LoadingGuard {
    pub fn acquire(indicator: Arc<dyn LoadingIndicator>, token: &str) -> Self {
        indicator.show(token);
        Self {
            indicator,
            token: token.to_string(),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.indicator.hide(&self.token);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpinnerCounters {
    pub shown: bool,
    pub show_count: usize,
    pub hide_count: usize,
}

/// In-process spinner registry. One instance is meant to be shared by every
/// view of the application.
#[derive(Debug, Default)]
pub struct SpinnerService {
    spinners: Mutex<HashMap<String, SpinnerCounters>>,
}

impl SpinnerService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shown(&self, token: &str) -> bool {
        self.counters(token).shown
    }

    pub fn show_count(&self, token: &str) -> usize {
        self.counters(token).show_count
    }

    pub fn hide_count(&self, token: &str) -> usize {
        self.counters(token).hide_count
    }

    pub fn counters(&self, token: &str) -> SpinnerCounters {
        self.spinners
            .lock()
            .map(|spinners| spinners.get(token).copied().unwrap_or_default())
            .unwrap_or_default()
    }

    fn update(&self, token: &str, f: impl FnOnce(&mut SpinnerCounters)) {
        match self.spinners.lock() {
            Ok(mut spinners) => f(spinners.entry(token.to_string()).or_default()),
            Err(_) => tracing::warn!(token, "spinner registry poisoned"),
        }
    }
}

impl LoadingIndicator for SpinnerService {
    fn show(&self, token: &str) {
        self.update(token, |counters| {
            counters.shown = true;
            counters.show_count += 1;
        });
    }

    fn hide(&self, token: &str) {
        self.update(token, |counters| {
            counters.shown = false;
            counters.hide_count += 1;
        });
    }
}
