use std::sync::Mutex;

use crate::recorder::RecordingObserver;

// Type-erased handle to a recorder so one rule can track recorders of
// different item types.
trait LeftoverCheck: Send {
    fn assert_no_events(&self);
}

impl<T: Send> LeftoverCheck for RecordingObserver<T> {
    fn assert_no_events(&self) {
        RecordingObserver::assert_no_events(self);
    }
}

/// A per-test harness that guarantees every recorder created through it has
/// had all of its events asserted by the end of the test.
///
/// Create recorders with [`create`], run the test body, and the rule checks
/// each recorder for unconsumed events afterwards. The check runs when the
/// rule is dropped, so leftover events fail the test even without an explicit
/// [`verify`] call. [`run`] wraps the whole sequence:
///
/// ```
/// use rx_recorder::{Observer, RecordingRule};
///
/// RecordingRule::run(|rule| {
///     let mut recorder = rule.create::<i32>();
///
///     recorder.next(1);
///     recorder.complete();
///
///     recorder.assert_value(1);
///     recorder.assert_complete();
/// });
/// ```
///
/// [`create`]: RecordingRule::create
/// [`verify`]: RecordingRule::verify
/// [`run`]: RecordingRule::run
pub struct RecordingRule {
    recorders: Mutex<Vec<Box<dyn LeftoverCheck>>>,
}

impl RecordingRule {
    #[must_use]
    pub fn new() -> Self {
        RecordingRule {
            recorders: Mutex::new(Vec::new()),
        }
    }

    /// Creates a recorder tracked by this rule.
    #[must_use]
    pub fn create<T: Send + 'static>(&self) -> RecordingObserver<T> {
        let recorder = RecordingObserver::new();
        self.recorders.lock().unwrap().push(Box::new(recorder.clone()));
        recorder
    }

    /// Checks every tracked recorder for unconsumed events and stops tracking
    /// them.
    ///
    /// # Panics
    ///
    /// If any tracked recorder still holds recorded events.
    pub fn verify(&self) {
        let recorders = std::mem::take(&mut *self.recorders.lock().unwrap());
        for recorder in &recorders {
            recorder.assert_no_events();
        }
    }

    /// Runs `test` with a fresh rule and verifies its recorders afterwards.
    pub fn run(test: impl FnOnce(&RecordingRule)) {
        let rule = RecordingRule::new();
        test(&rule);
        rule.verify();
    }
}

impl Default for RecordingRule {
    fn default() -> Self {
        RecordingRule::new()
    }
}

impl Drop for RecordingRule {
    fn drop(&mut self) {
        // A second panic during an unwind would abort the process, and the
        // test in question has already failed anyway.
        if !std::thread::panicking() {
            self.verify();
        }
    }
}
