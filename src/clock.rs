use chrono::{Local, NaiveDate};
use std::sync::Mutex;

/// Supplies "today" as a `YYYY-MM-DD` string.
pub trait Clock: Send + Sync {
    fn today(&self) -> String;
}

/// Calendar date in the machine's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> String {
        date_key(Local::now().date_naive())
    }
}

/// A clock pinned to a given day. `set` moves it, which is how tests cross midnight.
#[derive(Debug)]
pub struct FixedClock {
    date: Mutex<String>,
}

impl FixedClock {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: Mutex::new(date.into()),
        }
    }

    pub fn set(&self, date: impl Into<String>) {
        let mut guard = self.date.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = date.into();
    }
}

impl Clock for FixedClock {
    fn today(&self) -> String {
        self.date
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

/// Reports `first` on the first call and `then` on every call after.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct RollingClock {
    calls: std::sync::atomic::AtomicUsize,
    first: String,
    then: String,
}

#[cfg(test)]
impl RollingClock {
    pub(crate) fn new(first: &str, then: &str) -> Self {
        Self {
            calls: std::sync::atomic::AtomicUsize::new(0),
            first: first.to_string(),
            then: then.to_string(),
        }
    }
}

#[cfg(test)]
impl Clock for RollingClock {
    fn today(&self) -> String {
        let call = self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if call == 0 { self.first.clone() } else { self.then.clone() }
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// "Friday, October 16, 2026". Falls back to the raw key if it does not parse.
pub fn long_date(key: &str) -> String {
    match NaiveDate::parse_from_str(key, "%Y-%m-%d") {
        Ok(date) => date.format("%A, %B %-d, %Y").to_string(),
        Err(_) => key.to_string(),
    }
}
