//! Notification auto-hide timer.
//!
//! The UI store holds the notification itself; the component displaying
//! it owns this timer. Showing a replacement notification or dismissing
//! the current one must cancel the running timer so a stale expiry never
//! hides the new message. Dropping the handle cancels too (unmount).

use std::time::Duration;
use tokio::task::JoinHandle;

/// Default time a notification stays visible.
pub const DEFAULT_AUTO_HIDE: Duration = Duration::from_millis(5000);

/// A cancellable auto-hide timer handle.
///
/// Runs `on_expire` once after the delay unless cancelled or dropped
/// first.
#[derive(Debug)]
pub struct AutoHideTimer {
    handle: JoinHandle<()>,
}

impl AutoHideTimer {
    /// Start a timer with the default 5000 ms delay.
    pub fn start<F>(on_expire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::start_after(DEFAULT_AUTO_HIDE, on_expire)
    }

    /// Start a timer with a custom delay.
    pub fn start_after<F>(delay: Duration, on_expire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_expire();
        });
        Self { handle }
    }

    /// Cancel the timer; `on_expire` will not run.
    pub fn cancel(self) {
        self.handle.abort();
    }

    /// Check if the timer already fired (or was cancelled).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for AutoHideTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{Severity, UiStore};
    use std::sync::{Arc, Mutex};

    #[tokio::test(start_paused = true)]
    async fn test_timer_hides_notification_after_delay() {
        let ui = Arc::new(Mutex::new(UiStore::new()));
        ui.lock()
            .unwrap()
            .show_notification("Order placed successfully!", Severity::Success);

        let ui_for_timer = Arc::clone(&ui);
        let timer = AutoHideTimer::start(move || {
            ui_for_timer.lock().unwrap().hide_notification();
        });

        tokio::time::sleep(Duration::from_millis(4999)).await;
        assert!(ui.lock().unwrap().notification().is_some());

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert!(ui.lock().unwrap().notification().is_none());
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_expiry() {
        let fired = Arc::new(Mutex::new(false));
        let fired_for_timer = Arc::clone(&fired);

        let timer = AutoHideTimer::start_after(Duration::from_millis(100), move || {
            *fired_for_timer.lock().unwrap() = true;
        });
        timer.cancel();

        tokio::time::sleep(Duration::from_millis(200)).await;
        tokio::task::yield_now().await;
        assert!(!*fired.lock().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_replacement_restarts_the_clock() {
        let ui = Arc::new(Mutex::new(UiStore::new()));
        ui.lock()
            .unwrap()
            .show_notification("first", Severity::Info);

        let ui_a = Arc::clone(&ui);
        let first = AutoHideTimer::start(move || {
            ui_a.lock().unwrap().hide_notification();
        });

        // A new notification arrives before the first timer fires: the
        // owner cancels the old timer and starts a fresh one.
        tokio::time::sleep(Duration::from_millis(3000)).await;
        ui.lock()
            .unwrap()
            .show_notification("second", Severity::Success);
        first.cancel();
        let ui_b = Arc::clone(&ui);
        let _second = AutoHideTimer::start(move || {
            ui_b.lock().unwrap().hide_notification();
        });

        // 3s + 4s is past the first deadline but not the second.
        tokio::time::sleep(Duration::from_millis(4000)).await;
        tokio::task::yield_now().await;
        let store = ui.lock().unwrap();
        assert_eq!(store.notification().unwrap().message, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let fired = Arc::new(Mutex::new(false));
        let fired_for_timer = Arc::clone(&fired);
        {
            let _timer = AutoHideTimer::start_after(Duration::from_millis(50), move || {
                *fired_for_timer.lock().unwrap() = true;
            });
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
        tokio::task::yield_now().await;
        assert!(!*fired.lock().unwrap());
    }
}
