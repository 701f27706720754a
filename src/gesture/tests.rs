use egui::{pos2, vec2};

use super::ball::Ball;
use super::drag::DragTrigger;
use super::log::GestureLog;
use super::swipe::{classify_swipe, SwipeDirection, SwipeTracker};

const THRESHOLD: f32 = 50.0;
const TRIGGER_DISTANCE: f32 = 100.0;

fn classify(dx: f32, dy: f32) -> Option<SwipeDirection> {
    classify_swipe(pos2(100.0, 100.0), pos2(100.0 + dx, 100.0 + dy), THRESHOLD)
        .map(|swipe| swipe.direction)
}

#[test]
fn movement_within_threshold_is_not_a_swipe() {
    assert_eq!(classify(0.0, 0.0), None);
    assert_eq!(classify(30.0, -40.0), None);
    assert_eq!(classify(50.0, 50.0), None);
    assert_eq!(classify(-50.0, 50.0), None);
}

#[test]
fn cardinal_swipes_classify_by_dominant_axis() {
    assert_eq!(classify(80.0, 0.0), Some(SwipeDirection::Right));
    assert_eq!(classify(-80.0, 0.0), Some(SwipeDirection::Left));
    assert_eq!(classify(0.0, 80.0), Some(SwipeDirection::Down));
    assert_eq!(classify(0.0, -80.0), Some(SwipeDirection::Up));
}

#[test]
fn diagonal_swipes_follow_the_larger_component() {
    assert_eq!(classify(90.0, 60.0), Some(SwipeDirection::Right));
    assert_eq!(classify(-90.0, -60.0), Some(SwipeDirection::Left));
    assert_eq!(classify(40.0, 80.0), Some(SwipeDirection::Down));
    assert_eq!(classify(40.0, -80.0), Some(SwipeDirection::Up));
}

#[test]
fn equal_components_fall_through_to_the_vertical_arm() {
    assert_eq!(classify(80.0, 80.0), Some(SwipeDirection::Down));
    assert_eq!(classify(80.0, -80.0), Some(SwipeDirection::Up));
}

#[test]
fn tracker_classifies_on_release_and_resets() {
    let mut tracker = SwipeTracker::default();

    tracker.press(pos2(10.0, 10.0));
    tracker.motion(pos2(50.0, 12.0));
    tracker.motion(pos2(120.0, 14.0));
    let swipe = tracker.release(THRESHOLD).expect("swipe expected");
    assert_eq!(swipe.direction, SwipeDirection::Right);

    // 状态已清空，再次抬起不产生手势
    assert!(tracker.release(THRESHOLD).is_none());
}

#[test]
fn tracker_ignores_motion_without_press() {
    let mut tracker = SwipeTracker::default();
    tracker.motion(pos2(300.0, 300.0));
    assert!(tracker.release(THRESHOLD).is_none());
}

#[test]
fn sub_threshold_release_leaves_log_and_ball_unchanged() {
    let mut tracker = SwipeTracker::default();
    let mut log = GestureLog::default();
    let mut ball = Ball::new(pos2(200.0, 200.0), 50.0);
    let start_position = ball.position;

    tracker.press(pos2(100.0, 100.0));
    tracker.motion(pos2(130.0, 120.0));
    if let Some(swipe) = tracker.release(THRESHOLD) {
        log.push(format!("Swiped {}", swipe.direction.as_str()));
        ball.apply_swipe(swipe.delta, vec2(400.0, 400.0));
    }

    assert!(log.is_empty());
    assert_eq!(ball.position, start_position);
}

#[test]
fn ball_translates_by_the_swipe_delta() {
    let mut ball = Ball::new(pos2(200.0, 200.0), 50.0);
    ball.apply_swipe(vec2(80.0, -60.0), vec2(400.0, 400.0));
    assert_eq!(ball.position, pos2(280.0, 140.0));
}

#[test]
fn ball_clamps_componentwise_to_container_bounds() {
    let mut ball = Ball::new(pos2(200.0, 200.0), 50.0);
    ball.apply_swipe(vec2(1000.0, -1000.0), vec2(400.0, 300.0));
    assert_eq!(ball.position, pos2(350.0, 50.0));
}

#[test]
fn ball_pins_to_radius_in_degenerate_containers() {
    let mut ball = Ball::new(pos2(10.0, 10.0), 50.0);
    ball.apply_swipe(vec2(500.0, 500.0), vec2(60.0, 60.0));
    assert_eq!(ball.position, pos2(50.0, 50.0));
}

#[test]
fn log_keeps_newest_entries_first() {
    let mut log = GestureLog::default();
    log.push("Swiped Right");
    log.push("Swiped Up");
    log.push("Swiped Left");

    assert_eq!(log.len(), 3);
    assert_eq!(log.entries()[0], "Swiped Left");
    assert_eq!(log.entries()[2], "Swiped Right");
}

#[test]
fn drag_trigger_fires_only_past_the_distance() {
    let mut trigger = DragTrigger::default();
    trigger.begin();

    assert!(!trigger.update(vec2(60.0, 0.0), TRIGGER_DISTANCE));
    assert!(!trigger.update(vec2(40.0, 0.0), TRIGGER_DISTANCE)); // 恰好 100 还不触发
    assert!(trigger.update(vec2(0.5, 0.0), TRIGGER_DISTANCE));
}

#[test]
fn drag_trigger_counts_either_axis() {
    let mut trigger = DragTrigger::default();
    trigger.begin();
    assert!(trigger.update(vec2(0.0, -120.0), TRIGGER_DISTANCE));
}

#[test]
fn drag_trigger_keeps_reporting_after_the_threshold() {
    let mut trigger = DragTrigger::default();
    trigger.begin();

    assert!(trigger.update(vec2(150.0, 0.0), TRIGGER_DISTANCE));
    assert!(trigger.update(vec2(5.0, 0.0), TRIGGER_DISTANCE));
}

#[test]
fn drag_trigger_resets_on_end() {
    let mut trigger = DragTrigger::default();
    trigger.begin();
    assert!(trigger.update(vec2(150.0, 0.0), TRIGGER_DISTANCE));

    trigger.end();
    assert_eq!(trigger.accumulated(), egui::Vec2::ZERO);

    trigger.begin();
    assert!(!trigger.update(vec2(10.0, 10.0), TRIGGER_DISTANCE));
}

#[test]
fn drag_updates_are_ignored_when_inactive() {
    let mut trigger = DragTrigger::default();
    assert!(!trigger.update(vec2(500.0, 500.0), TRIGGER_DISTANCE));
    assert_eq!(trigger.accumulated(), egui::Vec2::ZERO);
}
