//! Decorative progress spinner.
//!
//! # Invariants
//! - The spinner never touches the data of the operation it decorates.
//! - [`Spinner::stop`] (or drop) stops the ticker thread and waits for it
//!   before returning, then clears the line.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::borrow::Cow;
use std::time::Duration;

const TEMPLATE: &str = "{msg}... {spinner}";
// Last entry is the finished state; it is cleared right away.
const TICK_STRINGS: &[&str] = &["|", "/", "-", "\\", " "];
const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Steady-ticking `<message>... <frame>` spinner.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Starts ticking immediately on indicatif's ticker thread.
    pub fn start(message: impl Into<Cow<'static, str>>, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(None, target);
        bar.set_style(style());
        bar.set_message(message);
        bar.enable_steady_tick(FRAME_INTERVAL);
        Self { bar }
    }

    /// Stops the ticker, waits for it and clears the line.
    pub fn stop(self) {
        // Drop does the work.
    }

    fn shutdown(&self) {
        if self.bar.is_finished() {
            return;
        }
        // Dropping the ticker joins its thread.
        self.bar.disable_steady_tick();
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn style() -> ProgressStyle {
    ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICK_STRINGS)
}

/// Runs `op` on the calling thread while a spinner draws to `target`.
///
/// The spinner is stopped and joined before the result of `op` is returned.
/// With `target = None` the operation runs undecorated.
pub fn with_spinner<T, F>(message: &str, target: Option<ProgressDrawTarget>, op: F) -> T
where
    F: FnOnce() -> T,
{
    let spinner = target.map(|target| Spinner::start(message.to_string(), target));
    let result = op();
    if let Some(spinner) = spinner {
        spinner.stop();
    }
    result
}
