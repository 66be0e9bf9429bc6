//! Per-user admission control for generation requests
//!
//! Windows live in memory. Short-lived callers such as the CLI carry them
//! across runs with [`RateLimiter::load_state`] and [`RateLimiter::save_state`].

use crate::config::RateLimitConfig;
use anyhow::{Context, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Returned when a user has used up their window
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "You have exceeded the maximum number of requests ({limit} per {}). Please try again later.",
    window_label(.window)
)]
pub struct RateLimitExceeded {
    pub limit: usize,
    pub window: Duration,
    /// Time until the oldest request in the window expires
    pub retry_after: Duration,
}

fn window_label(window: &Duration) -> String {
    match window.as_secs() {
        60 => "minute".to_string(),
        3600 => "hour".to_string(),
        secs => format!("{secs} seconds"),
    }
}

/// On-disk form of the recorded windows, in unix milliseconds
#[derive(Debug, Default, Serialize, Deserialize)]
struct RateLimitState {
    #[serde(default)]
    users: HashMap<String, Vec<u64>>,
}

/// Sliding-window limiter keyed by user id
#[derive(Debug)]
pub struct RateLimiter {
    /// Maximum requests per window
    requests_per_window: usize,
    window: Duration,
    /// Timestamps of recent requests per user; users with none are not kept
    request_times: Mutex<HashMap<String, Vec<SystemTime>>>,
}

/// Time since `then`; timestamps from the future count as brand new
fn age(now: SystemTime, then: SystemTime) -> Duration {
    now.duration_since(then).unwrap_or(Duration::ZERO)
}

fn prune_expired(
    request_times: &mut HashMap<String, Vec<SystemTime>>,
    now: SystemTime,
    window: Duration,
) {
    request_times.retain(|_, times| {
        times.retain(|&time| age(now, time) < window);
        !times.is_empty()
    });
}

impl RateLimiter {
    pub fn new(requests_per_window: usize, window: Duration) -> Self {
        Self {
            requests_per_window,
            window,
            request_times: Mutex::new(HashMap::new()),
        }
    }

    /// `None` when limiting is disabled in configuration
    pub fn from_config(config: &RateLimitConfig) -> Option<Self> {
        config.enabled.then(|| {
            Self::new(
                config.requests_per_window,
                Duration::from_secs(config.window_secs),
            )
        })
    }

    pub fn requests_per_window(&self) -> usize {
        self.requests_per_window
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a request for `user` if the window has room
    pub fn check(&self, user: &str) -> Result<(), RateLimitExceeded> {
        let now = SystemTime::now();
        let mut request_times = self.request_times.lock();
        prune_expired(&mut request_times, now, self.window);
        let times = request_times.entry(user.to_string()).or_default();

        if times.len() < self.requests_per_window {
            times.push(now);
            return Ok(());
        }

        let retry_after = times
            .iter()
            .map(|&time| self.window.saturating_sub(age(now, time)))
            .min()
            .unwrap_or(self.window);
        if times.is_empty() {
            request_times.remove(user);
        }
        Err(RateLimitExceeded {
            limit: self.requests_per_window,
            window: self.window,
            retry_after,
        })
    }

    /// Requests `user` may still make in the current window
    pub fn remaining(&self, user: &str) -> usize {
        let now = SystemTime::now();
        let request_times = self.request_times.lock();
        let used = request_times
            .get(user)
            .map(|times| {
                times
                    .iter()
                    .filter(|&&time| age(now, time) < self.window)
                    .count()
            })
            .unwrap_or(0);
        self.requests_per_window.saturating_sub(used)
    }

    /// Forget all recorded requests for `user`
    pub fn reset(&self, user: &str) {
        self.request_times.lock().remove(user);
    }

    /// Drop expired timestamps and users left with none
    pub fn prune(&self) {
        prune_expired(&mut self.request_times.lock(), SystemTime::now(), self.window);
    }

    /// Number of users with requests still on record
    pub fn tracked_users(&self) -> usize {
        self.request_times.lock().len()
    }

    /// Merge windows saved by [`RateLimiter::save_state`]; a missing file is
    /// an empty state
    pub fn load_state(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rate limit state: {}", path.display()))?;
        let state: RateLimitState = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse rate limit state: {}", path.display()))?;

        let mut request_times = self.request_times.lock();
        for (user, stamps) in state.users {
            let times = request_times.entry(user).or_default();
            times.extend(
                stamps
                    .into_iter()
                    .map(|millis| UNIX_EPOCH + Duration::from_millis(millis)),
            );
            times.sort();
        }
        drop(request_times);

        self.prune();
        Ok(())
    }

    /// Write the unexpired windows to `path`, creating its directory
    pub fn save_state(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.prune();

        let users = self
            .request_times
            .lock()
            .iter()
            .map(|(user, times)| {
                let stamps = times
                    .iter()
                    .map(|time| {
                        time.duration_since(UNIX_EPOCH)
                            .map(|since| since.as_millis() as u64)
                            .unwrap_or(0)
                    })
                    .collect();
                (user.clone(), stamps)
            })
            .collect();
        let content = serde_json::to_string_pretty(&RateLimitState { users })
            .context("Failed to serialize rate limit state")?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }
        fs::write(path, content)
            .with_context(|| format!("Failed to write rate limit state: {}", path.display()))
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        let config = RateLimitConfig::default();
        Self::new(
            config.requests_per_window,
            Duration::from_secs(config.window_secs),
        )
    }
}
