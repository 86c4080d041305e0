use std::{
    collections::VecDeque,
    error::Error,
    fmt::Debug,
    sync::{Arc, Mutex},
};

use crate::notification::Notification;
use crate::observer::Observer;

/// A test observer that records every notification it receives.
///
/// Notifications are appended to the tail of an internal queue in arrival
/// order and consumed from the head by the assertion methods, so a test
/// asserts events in exactly the order the stream delivered them. An
/// assertion that expects a different kind of event than the one at the head
/// panics instead of skipping it.
///
/// Clones share the same queue. Hand a clone to the emitting side and keep
/// the original for assertions:
///
/// ```
/// use rx_recorder::{Observer, RecordingObserver};
///
/// let recorder = RecordingObserver::new();
/// let mut remote = recorder.clone();
///
/// remote.next(1);
/// remote.next(2);
/// remote.complete();
///
/// recorder.assert_value(1).assert_value(2);
/// recorder.assert_complete();
/// ```
pub struct RecordingObserver<T> {
    events: Arc<Mutex<VecDeque<Notification<T>>>>,
}

impl<T> RecordingObserver<T> {
    #[must_use]
    pub fn new() -> Self {
        RecordingObserver {
            events: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Removes and returns the head notification, whatever its kind.
    ///
    /// # Panics
    ///
    /// If no event was recorded.
    pub fn take_notification(&self) -> Notification<T> {
        // Bind the popped head so the lock guard is released before any
        // panic, keeping the queue unpoisoned if the failure is caught.
        let head = self.events.lock().unwrap().pop_front();
        match head {
            Some(notification) => notification,
            None => panic!("No event found!"),
        }
    }

    /// Removes the head notification and returns its value.
    ///
    /// # Panics
    ///
    /// If no event was recorded, or the head event is not a `next`.
    pub fn take_value(&self) -> T {
        match self.take_notification() {
            Notification::Next(v) => v,
            other => panic!("expected next event, got {}", other),
        }
    }

    /// Removes the head notification and returns the error it carries.
    ///
    /// # Panics
    ///
    /// If no event was recorded, or the head event is not an `error`.
    pub fn take_error(&self) -> Arc<dyn Error + Send + Sync> {
        match self.take_notification() {
            Notification::Error(e) => e,
            other => panic!("expected error event, got {}", other),
        }
    }

    /// Consumes the head notification, requiring it to be a `next` with any value.
    pub fn assert_any_value(&self) -> &Self {
        self.take_value();
        self
    }

    /// Consumes the head notification, requiring it to be a `next` equal to `expected`.
    pub fn assert_value(&self, expected: T) -> &Self
    where
        T: PartialEq + Debug,
    {
        let value = self.take_value();
        assert_eq!(value, expected, "recorded value does not match expected");
        self
    }

    /// Consumes the head notification, requiring it to be a `complete`, then
    /// requires the queue to be empty.
    pub fn assert_complete(&self) {
        match self.take_notification() {
            Notification::Complete => (),
            other => panic!("expected complete event, got {}", other),
        }
        self.assert_no_events();
    }

    /// Consumes the head notification, requiring it to be an `error` whose
    /// concrete type is `E`, then requires the queue to be empty.
    pub fn assert_error<E: Error + 'static>(&self) {
        self.take_error_of_kind::<E>();
        self.assert_no_events();
    }

    /// Like [`assert_error`], additionally requiring the error to render
    /// `message` when displayed.
    ///
    /// [`assert_error`]: RecordingObserver::assert_error
    pub fn assert_error_message<E: Error + 'static>(&self, message: &str) {
        let error = self.take_error_of_kind::<E>();
        assert_eq!(
            error.to_string(),
            message,
            "recorded error message does not match expected"
        );
        self.assert_no_events();
    }

    /// Consumes the head notification, requiring it to be an `error` equal to
    /// `expected`, then requires the queue to be empty.
    pub fn assert_error_eq<E>(&self, expected: &E)
    where
        E: Error + PartialEq + Debug + 'static,
    {
        let error = self.take_error();
        match error.downcast_ref::<E>() {
            Some(actual) => {
                assert_eq!(actual, expected, "recorded error does not match expected");
            }
            None => panic!(
                "expected error of kind `{}`, got {}",
                std::any::type_name::<E>(),
                error
            ),
        }
        self.assert_no_events();
    }

    /// Requires that every recorded event has been consumed.
    pub fn assert_no_events(&self) {
        let events = self.events.lock().unwrap();
        if events.is_empty() {
            return;
        }
        let leftover = format!("{} event(s) left, first is {}", events.len(), events[0]);
        drop(events);
        panic!("Unconsumed events found! {}", leftover);
    }

    fn take_error_of_kind<E: Error + 'static>(&self) -> Arc<dyn Error + Send + Sync> {
        let error = self.take_error();
        if error.downcast_ref::<E>().is_none() {
            panic!(
                "expected error of kind `{}`, got {}",
                std::any::type_name::<E>(),
                error
            );
        }
        error
    }
}

impl<T> Default for RecordingObserver<T> {
    fn default() -> Self {
        RecordingObserver::new()
    }
}

// Manual impl so clones share the queue without requiring `T: Clone`.
impl<T> Clone for RecordingObserver<T> {
    fn clone(&self) -> Self {
        RecordingObserver {
            events: Arc::clone(&self.events),
        }
    }
}

impl<T> Observer for RecordingObserver<T> {
    type NextFnType = T;

    fn next(&mut self, v: Self::NextFnType) {
        self.events.lock().unwrap().push_back(Notification::Next(v));
    }

    fn complete(&mut self) {
        self.events.lock().unwrap().push_back(Notification::Complete);
    }

    fn error(&mut self, e: Arc<dyn Error + Send + Sync>) {
        self.events.lock().unwrap().push_back(Notification::Error(e));
    }
}
