use approx::assert_relative_eq;

use super::{absolute_root, phases, Recorder};
use crate::foundation::math::{Dimension, Point2};
use crate::input::PointerPhase;
use crate::ui::interface::Interface;
use crate::ui::layout::AbsoluteLayout;
use crate::ui::root::GestureState;
use crate::ui::widgets::{Button, Label};

#[test]
fn test_gesture_routed_to_start_target() {
    let mut interface = Interface::new();
    let root = absolute_root(&mut interface, 0.0, 0.0, 200.0, 100.0);
    let (recorder, log) = Recorder::new(30.0, 30.0);
    let target = interface.add_widget(root, recorder).unwrap();
    interface.set_position(target, 40.0, 40.0).unwrap();
    interface.validate().unwrap();

    interface.pointer_start(50.0, 50.0, 0.0);
    assert_eq!(interface.root(root).unwrap().gesture(), GestureState::Tracking(target));

    interface.pointer_drag(60.0, 55.0, 0.1);
    interface.pointer_end(60.0, 55.0, 0.2);
    assert_eq!(interface.root(root).unwrap().gesture(), GestureState::Idle);

    // Stray events after the gesture
    interface.pointer_drag(70.0, 70.0, 0.3);
    interface.pointer_end(70.0, 70.0, 0.4);

    let events = log.borrow();
    assert_eq!(
        phases(&log),
        vec![PointerPhase::Start, PointerPhase::Drag, PointerPhase::End]
    );
    assert_relative_eq!(events[0].1, Point2::new(10.0, 10.0));
    assert_relative_eq!(events[1].1, Point2::new(20.0, 15.0));
    assert_relative_eq!(events[2].1, Point2::new(20.0, 15.0));
}

#[test]
fn test_drags_outside_target_still_delivered() {
    let mut interface = Interface::new();
    let root = absolute_root(&mut interface, 0.0, 0.0, 200.0, 100.0);
    let (recorder, log) = Recorder::new(30.0, 30.0);
    interface.add_widget(root, recorder).unwrap();
    interface.validate().unwrap();

    interface.pointer_start(10.0, 10.0, 0.0);
    for step in 1..=5 {
        interface.pointer_drag(10.0 + 100.0 * step as f32, 10.0, f64::from(step) * 0.1);
    }
    interface.pointer_end(900.0, 900.0, 1.0);

    let recorded = phases(&log);
    assert_eq!(recorded.len(), 7);
    assert_eq!(recorded[0], PointerPhase::Start);
    assert!(recorded[1..6].iter().all(|phase| *phase == PointerPhase::Drag));
    assert_eq!(recorded[6], PointerPhase::End);
    assert_relative_eq!(log.borrow()[6].1, Point2::new(900.0, 900.0));
}

#[test]
fn test_start_on_empty_area_stays_idle() {
    let mut interface = Interface::new();
    let root = absolute_root(&mut interface, 0.0, 0.0, 200.0, 100.0);
    let (recorder, log) = Recorder::new(30.0, 30.0);
    interface.add_widget(root, recorder).unwrap();
    interface.validate().unwrap();

    interface.pointer_start(150.0, 80.0, 0.0);
    assert_eq!(interface.root(root).unwrap().gesture(), GestureState::Idle);

    // Moving onto the widget does not retarget the gesture
    interface.pointer_drag(10.0, 10.0, 0.1);
    interface.pointer_end(10.0, 10.0, 0.2);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_every_start_clears_focus() {
    let mut interface = Interface::new();
    let root = absolute_root(&mut interface, 0.0, 0.0, 200.0, 100.0);
    let button = interface
        .add_widget(root, Button::new("ok", Dimension::new(50.0, 20.0)).with_focus_on_press(true))
        .unwrap();
    let label = interface.add_widget(root, Label::new("title", Dimension::new(50.0, 20.0))).unwrap();
    interface.set_position(label, 100.0, 0.0).unwrap();
    interface.validate().unwrap();

    interface.request_focus(label).unwrap();
    interface.pointer_start(150.0, 90.0, 0.0);
    interface.pointer_end(150.0, 90.0, 0.1);
    assert_eq!(interface.focused(), None);

    interface.pointer_start(10.0, 10.0, 0.2);
    assert_eq!(interface.focused(), Some(button));
    interface.pointer_end(10.0, 10.0, 0.3);

    // A start that misses every root reaches no listener
    interface.pointer_start(500.0, 500.0, 0.4);
    assert_eq!(interface.focused(), Some(button));
    interface.pointer_end(500.0, 500.0, 0.5);
}

#[test]
fn test_moving_target_mid_gesture_changes_local_point() {
    let mut interface = Interface::new();
    let root = absolute_root(&mut interface, 0.0, 0.0, 200.0, 100.0);
    let (recorder, log) = Recorder::new(30.0, 30.0);
    let target = interface.add_widget(root, recorder).unwrap();
    interface.set_position(target, 40.0, 40.0).unwrap();
    interface.validate().unwrap();

    interface.pointer_start(50.0, 50.0, 0.0);
    interface.set_position(target, 0.0, 0.0).unwrap();
    interface.pointer_drag(50.0, 50.0, 0.1);
    interface.root_mut(root).unwrap().set_translation(20.0, 0.0);
    interface.pointer_end(50.0, 50.0, 0.2);

    let events = log.borrow();
    assert_relative_eq!(events[0].1, Point2::new(10.0, 10.0));
    assert_relative_eq!(events[1].1, Point2::new(50.0, 50.0));
    assert_relative_eq!(events[2].1, Point2::new(30.0, 50.0));
}

#[test]
fn test_nested_translation_composes() {
    let mut interface = Interface::new();
    let root = absolute_root(&mut interface, 100.0, 50.0, 200.0, 100.0);
    let group = interface.add_group(root, AbsoluteLayout).unwrap();
    interface.set_position(group, 10.0, 10.0).unwrap();
    let (recorder, log) = Recorder::new(40.0, 20.0);
    let target = interface.add_widget(group, recorder).unwrap();
    interface.set_position(target, 5.0, 5.0).unwrap();
    interface.validate().unwrap();

    interface.pointer_start(120.0, 70.0, 0.0);
    interface.pointer_drag(130.0, 72.0, 0.1);
    interface.pointer_end(130.0, 72.0, 0.2);

    let events = log.borrow();
    assert_eq!(events.len(), 3);
    assert_relative_eq!(events[0].1, Point2::new(5.0, 5.0));
    assert_relative_eq!(events[1].1, Point2::new(15.0, 7.0));
    assert_eq!(interface.root_of(target), Some(root));
}

#[test]
fn test_hidden_and_disabled_elements_are_transparent() {
    let mut interface = Interface::new();
    let root = absolute_root(&mut interface, 0.0, 0.0, 200.0, 100.0);
    let (back, back_log) = Recorder::new(50.0, 50.0);
    let (front, front_log) = Recorder::new(50.0, 50.0);
    interface.add_widget(root, back).unwrap();
    let front = interface.add_widget(root, front).unwrap();
    interface.validate().unwrap();

    interface.pointer_start(10.0, 10.0, 0.0);
    interface.pointer_end(10.0, 10.0, 0.1);
    assert_eq!(front_log.borrow().len(), 2);
    assert!(back_log.borrow().is_empty());

    interface.set_enabled(front, false).unwrap();
    interface.pointer_start(10.0, 10.0, 0.2);
    interface.pointer_end(10.0, 10.0, 0.3);
    assert_eq!(back_log.borrow().len(), 2);

    interface.set_enabled(front, true).unwrap();
    interface.set_visible(front, false).unwrap();
    interface.validate().unwrap();
    interface.pointer_start(10.0, 10.0, 0.4);
    interface.pointer_end(10.0, 10.0, 0.5);
    assert_eq!(back_log.borrow().len(), 4);
    assert_eq!(front_log.borrow().len(), 2);
}

#[test]
fn test_root_hit_predicate() {
    let mut interface = Interface::new();
    let root = absolute_root(&mut interface, 10.0, 10.0, 200.0, 100.0);
    let handle = interface.root(root).unwrap();

    assert!(handle.hits(interface.layers(), Point2::new(0.0, 0.0)));
    assert!(handle.hits(interface.layers(), Point2::new(200.0, 100.0)));
    assert!(!handle.hits(interface.layers(), Point2::new(200.1, 50.0)));
    assert!(!handle.hits(interface.layers(), Point2::new(-0.1, 50.0)));

    interface.root_mut(root).unwrap().set_visible(false);
    let handle = interface.root(root).unwrap();
    assert!(!handle.hits(interface.layers(), Point2::new(50.0, 50.0)));
}

#[test]
fn test_invisible_root_gets_no_gesture() {
    let mut interface = Interface::new();
    let root = absolute_root(&mut interface, 0.0, 0.0, 200.0, 100.0);
    let (recorder, log) = Recorder::new(30.0, 30.0);
    interface.add_widget(root, recorder).unwrap();
    interface.validate().unwrap();
    interface.root_mut(root).unwrap().set_visible(false);

    interface.pointer_start(10.0, 10.0, 0.0);
    interface.pointer_end(10.0, 10.0, 0.1);
    assert!(log.borrow().is_empty());
    assert!(!interface.pointer().is_capturing());
}

#[test]
fn test_front_root_wins() {
    let mut interface = Interface::new();
    let back = absolute_root(&mut interface, 0.0, 0.0, 200.0, 100.0);
    let front = absolute_root(&mut interface, 50.0, 0.0, 200.0, 100.0);
    let (back_widget, back_log) = Recorder::new(200.0, 100.0);
    let (front_widget, front_log) = Recorder::new(200.0, 100.0);
    interface.add_widget(back, back_widget).unwrap();
    interface.add_widget(front, front_widget).unwrap();
    interface.validate().unwrap();

    interface.pointer_start(100.0, 50.0, 0.0);
    interface.pointer_end(100.0, 50.0, 0.1);
    assert_eq!(front_log.borrow().len(), 2);
    assert_relative_eq!(front_log.borrow()[0].1, Point2::new(50.0, 50.0));

    // Left of the front root falls through to the back root
    interface.pointer_start(20.0, 50.0, 0.2);
    interface.pointer_end(20.0, 50.0, 0.3);
    assert_eq!(back_log.borrow().len(), 2);
    assert_eq!(interface.root(front).unwrap().active_target(), None);
}

#[test]
fn test_button_click_and_drag_out() {
    let mut interface = Interface::new();
    let root = absolute_root(&mut interface, 0.0, 0.0, 200.0, 100.0);
    let button = interface.add_widget(root, Button::new("fire", Dimension::new(60.0, 20.0))).unwrap();
    interface.validate().unwrap();

    interface.pointer_start(10.0, 10.0, 0.0);
    assert!(interface.widget::<Button>(button).unwrap().is_armed());
    interface.pointer_drag(100.0, 10.0, 0.1);
    assert!(!interface.widget::<Button>(button).unwrap().is_armed());
    interface.pointer_end(100.0, 10.0, 0.2);
    assert_eq!(interface.widget::<Button>(button).unwrap().clicks(), 0);

    interface.pointer_start(10.0, 10.0, 0.3);
    interface.pointer_drag(100.0, 10.0, 0.4);
    interface.pointer_drag(20.0, 10.0, 0.5);
    interface.pointer_end(20.0, 10.0, 0.6);
    let button = interface.widget::<Button>(button).unwrap();
    assert_eq!(button.clicks(), 1);
    assert!(!button.is_pressed());
    assert_relative_eq!(button.last_local().unwrap(), Point2::new(20.0, 10.0));
}

#[test]
fn test_new_start_cancels_unfinished_gesture() {
    let mut interface = Interface::new();
    let root = absolute_root(&mut interface, 0.0, 0.0, 200.0, 100.0);
    let (recorder, log) = Recorder::new(30.0, 30.0);
    interface.add_widget(root, recorder).unwrap();
    interface.validate().unwrap();

    interface.pointer_start(10.0, 10.0, 0.0);
    interface.pointer_start(20.0, 20.0, 0.1);
    interface.pointer_end(20.0, 20.0, 0.2);

    assert_eq!(
        phases(&log),
        vec![PointerPhase::Start, PointerPhase::Cancel, PointerPhase::Start, PointerPhase::End]
    );
}

#[test]
fn test_focus_host_is_shared_across_roots() {
    let mut interface = Interface::new();
    let left = absolute_root(&mut interface, 0.0, 0.0, 100.0, 100.0);
    let right = absolute_root(&mut interface, 100.0, 0.0, 100.0, 100.0);
    let first = interface
        .add_widget(left, Button::new("a", Dimension::new(20.0, 20.0)).with_focus_on_press(true))
        .unwrap();
    interface
        .add_widget(right, Button::new("b", Dimension::new(20.0, 20.0)))
        .unwrap();
    interface.validate().unwrap();

    interface.pointer_start(5.0, 5.0, 0.0);
    interface.pointer_end(5.0, 5.0, 0.1);
    assert_eq!(interface.focused(), Some(first));

    interface.pointer_start(105.0, 5.0, 0.2);
    assert_eq!(interface.focused(), None);
    interface.pointer_end(105.0, 5.0, 0.3);
}
