//! Test support for observable streams.
//!
//! The crate provides a recording observer that captures every notification
//! delivered by an observable-style source, in arrival order, so tests can
//! assert on the emitted values, completion or error after the fact. A
//! companion rule tracks the recorders a test creates and fails the test if
//! any recorded event is left unasserted at its end.
//!
//! The recorder plugs into any source able to drive the [`Observer`]
//! capability set: a sequence of `next` values followed by either a
//! `complete` or an `error` signal.
//!
//! ```
//! use rx_recorder::{Observer, RecordingRule};
//!
//! RecordingRule::run(|rule| {
//!     let mut recorder = rule.create::<i32>();
//!
//!     recorder.next(1);
//!     recorder.next(2);
//!     recorder.complete();
//!
//!     recorder.assert_value(1).assert_value(2);
//!     recorder.assert_complete();
//! });
//! ```
//!
//! All failures are reported as panics carrying a message that names the
//! expected and the actual event; the helper has no recoverable error path
//! by design.

pub mod notification;
pub mod observer;
pub mod recorder;
pub mod rule;

pub use notification::Notification;
pub use observer::Observer;
pub use recorder::RecordingObserver;
pub use rule::RecordingRule;
