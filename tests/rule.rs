use std::panic::{catch_unwind, AssertUnwindSafe};

use rx_recorder::{Observer, RecordingRule};

#[test]
fn passes_when_all_events_are_consumed() {
    RecordingRule::run(|rule| {
        let mut recorder = rule.create::<i32>();

        recorder.next(1);
        recorder.complete();

        recorder.assert_value(1);
        recorder.assert_complete();
    });
}

#[test]
fn tracks_recorders_of_different_item_types() {
    RecordingRule::run(|rule| {
        let mut numbers = rule.create::<i32>();
        let mut strings = rule.create::<String>();

        numbers.next(1);
        strings.next("one".into());

        numbers.assert_value(1);
        strings.assert_value("one".into());
    });
}

#[test]
#[should_panic(expected = "Unconsumed events found!")]
fn fails_when_events_are_left_unasserted() {
    RecordingRule::run(|rule| {
        let mut recorder = rule.create::<i32>();

        recorder.next(1);
        recorder.next(2);

        // Only one of the two recorded events is asserted.
        recorder.assert_value(1);
    });
}

#[test]
#[should_panic(expected = "Unconsumed events found!")]
fn dropping_the_rule_checks_its_recorders() {
    let rule = RecordingRule::new();
    let mut recorder = rule.create::<i32>();

    recorder.next(1);

    // No assertions were made, the drop of `rule` must fail the test.
}

#[test]
fn verify_stops_tracking_recorders() {
    let rule = RecordingRule::new();
    let mut recorder = rule.create::<i32>();

    recorder.next(1);
    recorder.assert_value(1);

    rule.verify();

    // Events recorded after verification are not checked by the drop.
    recorder.next(2);
}

#[test]
fn body_panic_takes_precedence_over_leftover_check() {
    let result = catch_unwind(AssertUnwindSafe(|| {
        let rule = RecordingRule::new();
        let mut recorder = rule.create::<i32>();

        recorder.next(1);
        panic!("body failed");
    }));

    let error = result.unwrap_err();
    let message = error.downcast_ref::<&str>().unwrap();
    assert_eq!(*message, "body failed");
}
