// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec::Vec;

use kurbo::{Point, Rect, Shape};
use tickbox_geometry::{BoxType, CheckState, MarkType, PathGeometry};

use crate::{
    Animation, AnimationStyle, BatchId, Checkbox, CheckboxConfig, CheckboxEvent, Compositor,
    ConfigWarning, Controller, LayerRole, LayerUpdate, LayerValues, PressPhase, Timeline,
    TransitionBatch,
};

fn geometry() -> PathGeometry {
    PathGeometry::new(40.0)
        .with_box_line_width(2.0)
        .with_checkmark_line_width(3.0)
        .with_corner_radius(4.0)
}

fn controller(animation: Animation, mark_type: MarkType, state: CheckState) -> Controller {
    let mut controller = Controller::new(animation);
    controller.set_geometry(geometry());
    controller.set_mark_type(mark_type, false);
    controller.reset_layers(Some(state));
    controller.take_updates();
    controller
}

fn begun(updates: Vec<LayerUpdate>) -> Vec<TransitionBatch> {
    updates
        .into_iter()
        .filter_map(|update| match update {
            LayerUpdate::Begin(batch) => Some(batch),
            _ => None,
        })
        .collect()
}

fn assert_close(a: LayerValues, b: LayerValues, context: &str) {
    let eps = 1e-9;
    assert!(
        (a.opacity - b.opacity).abs() < eps
            && (a.stroke_end - b.stroke_end).abs() < eps
            && (a.scale - b.scale).abs() < eps,
        "{context}: {a:?} vs {b:?}"
    );
}

#[test]
fn reset_is_idempotent() {
    for animation in Animation::ALL {
        let mut controller = controller(animation, MarkType::Checkmark, CheckState::Checked);
        let once = controller.layers().clone();
        controller.reset_layers(Some(CheckState::Checked));
        assert_eq!(controller.layers(), &once, "{animation}");
    }
}

/// How far a radio dot squashed for the mixed state may land from the real dash.
///
/// The squashed ellipse only approximates the dash; the reset at the end of the
/// batch swaps in the real dash.
const SQUASH_RESIDUE: f64 = 1.0;

fn assert_bounds_close(a: Rect, b: Rect, eps: f64, context: &str) {
    assert!(
        (a.x0 - b.x0).abs() < eps
            && (a.y0 - b.y0).abs() < eps
            && (a.x1 - b.x1).abs() < eps
            && (a.y1 - b.y1).abs() < eps,
        "{context}: {a:?} vs {b:?}"
    );
}

#[test]
fn batches_end_on_the_settled_look() {
    let states = [CheckState::Unchecked, CheckState::Checked, CheckState::Mixed];
    for animation in Animation::ALL {
        for mark_type in [
            MarkType::Checkmark,
            MarkType::Radio,
            MarkType::AddRemove,
            MarkType::Disclosure,
        ] {
            if animation == Animation::Spiral && mark_type == MarkType::Radio {
                continue;
            }
            for from in states {
                for to in states.into_iter().filter(|&to| to != from) {
                    let context = std::format!("{animation} {mark_type} {from} -> {to}");
                    let mut controller = controller(animation, mark_type, from);
                    controller.animate(Some(from), Some(to));
                    let batches = begun(controller.take_updates());
                    assert_eq!(batches.len(), 1, "{context}");
                    let batch = &batches[0];
                    let end = batch.sample(batch.end_time());

                    assert!(controller.complete(batch.id()), "{context}");
                    assert_eq!(controller.state(), to, "{context}");
                    let settled = controller.layers().clone();
                    for role in LayerRole::ALL {
                        let context = std::format!("{context} {role:?}");
                        let (end, settled) = (end.get(role), settled.get(role));
                        assert_close(LayerValues::of(end), LayerValues::of(settled), &context);
                        if !settled.is_visible() {
                            continue;
                        }
                        let (Some(end_path), Some(settled_path)) = (&end.path, &settled.path)
                        else {
                            panic!("{context}: visible layer without a path");
                        };
                        let squashed = mark_type == MarkType::Radio
                            && from == CheckState::Checked
                            && to == CheckState::Mixed
                            && role == LayerRole::Mark;
                        let eps = if squashed { SQUASH_RESIDUE } else { 1e-9 };
                        assert_bounds_close(
                            end_path.bounding_box(),
                            settled_path.bounding_box(),
                            eps,
                            &context,
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn stale_completions_are_ignored() {
    let mut controller =
        controller(Animation::Stroke, MarkType::Checkmark, CheckState::Unchecked);
    controller.animate(Some(CheckState::Unchecked), Some(CheckState::Checked));
    controller.animate(Some(CheckState::Checked), Some(CheckState::Unchecked));
    let batches = begun(controller.take_updates());
    assert_eq!(batches.len(), 2, "both transitions start");
    assert_ne!(batches[0].id(), batches[1].id(), "ids are unique");
    assert!(!controller.complete(batches[0].id()), "superseded batch");
    assert_eq!(controller.in_flight(), Some(batches[1].id()));
    assert!(controller.complete(batches[1].id()), "current batch");
    assert_eq!(controller.in_flight(), None);
}

#[test]
fn zero_duration_changes_are_immediate() {
    let mut animated =
        controller(Animation::Spiral, MarkType::Checkmark, CheckState::Unchecked);
    animated.set_animation_duration(0.0);
    animated.animate(Some(CheckState::Unchecked), Some(CheckState::Checked));
    assert!(begun(animated.take_updates()).is_empty(), "no batch");
    assert_eq!(animated.in_flight(), None);

    let snapped = controller(Animation::Spiral, MarkType::Checkmark, CheckState::Checked);
    assert_eq!(animated.layers(), snapped.layers());
}

#[test]
fn changes_without_marks_settle_at_once() {
    let mut controller = controller(
        Animation::Fade(AnimationStyle::Fill),
        MarkType::Checkmark,
        CheckState::Unchecked,
    );
    controller.animate(Some(CheckState::Unchecked), None);
    assert!(begun(controller.take_updates()).is_empty(), "nothing to animate");
    assert_eq!(controller.in_flight(), None);
    assert_eq!(controller.state(), CheckState::Unchecked);
}

#[test]
fn animated_mark_swap_plays_out_then_in() {
    let mut controller = controller(Animation::Stroke, MarkType::Checkmark, CheckState::Checked);
    controller.set_mark_type(MarkType::Radio, true);
    assert_eq!(controller.mark_type(), MarkType::Checkmark, "old mark plays out");
    assert_eq!(controller.settled_mark_type(), MarkType::Radio);

    let out = begun(controller.take_updates());
    assert_eq!(out.len(), 1, "exit batch");
    assert!(controller.complete(out[0].id()), "exit completes");
    assert_eq!(controller.mark_type(), MarkType::Radio);

    let enter = begun(controller.take_updates());
    assert_eq!(enter.len(), 1, "enter batch");
    assert!(controller.complete(enter[0].id()), "enter completes");

    let expected = self::controller(Animation::Stroke, MarkType::Radio, CheckState::Checked);
    assert_eq!(controller.layers(), expected.layers());
}

#[test]
fn superseded_mark_swap_still_applies() {
    let mut controller = controller(Animation::Stroke, MarkType::Checkmark, CheckState::Checked);
    controller.set_mark_type(MarkType::AddRemove, true);
    controller.animate(Some(CheckState::Checked), Some(CheckState::Unchecked));
    assert_eq!(controller.mark_type(), MarkType::AddRemove);
    assert_eq!(controller.state(), CheckState::Unchecked);
}

#[test]
fn reverting_a_mark_swap_keeps_the_current_mark() {
    let mut controller = controller(Animation::Stroke, MarkType::Checkmark, CheckState::Checked);
    controller.set_mark_type(MarkType::Radio, true);
    controller.set_mark_type(MarkType::Checkmark, true);
    assert_eq!(controller.settled_mark_type(), MarkType::Checkmark);

    while let Some(id) = controller.in_flight() {
        assert!(controller.complete(id), "batch {}", id.get());
    }
    assert_eq!(controller.mark_type(), MarkType::Checkmark);
    let expected = self::controller(Animation::Stroke, MarkType::Checkmark, CheckState::Checked);
    assert_eq!(controller.layers(), expected.layers());
}

#[test]
fn latest_mark_type_wins_over_a_pending_swap() {
    let mut reverted =
        controller(Animation::Stroke, MarkType::Checkmark, CheckState::Checked);
    reverted.set_mark_type(MarkType::Radio, true);
    reverted.set_mark_type(MarkType::Checkmark, false);
    assert_eq!(reverted.in_flight(), None, "snapped back");
    assert_eq!(reverted.mark_type(), MarkType::Checkmark);
    let expected = controller(Animation::Stroke, MarkType::Checkmark, CheckState::Checked);
    assert_eq!(reverted.layers(), expected.layers());

    let mut redirected =
        controller(Animation::Stroke, MarkType::Checkmark, CheckState::Checked);
    redirected.set_mark_type(MarkType::Radio, true);
    redirected.set_mark_type(MarkType::AddRemove, false);
    assert_eq!(redirected.in_flight(), None);
    assert_eq!(redirected.mark_type(), MarkType::AddRemove);
    assert_eq!(redirected.settled_mark_type(), MarkType::AddRemove);
}

#[test]
fn layout_keeps_a_running_batch() {
    let mut controller =
        controller(Animation::Stroke, MarkType::Checkmark, CheckState::Unchecked);
    controller.animate(Some(CheckState::Unchecked), Some(CheckState::Checked));
    let id = controller.in_flight();
    controller.set_geometry(geometry().with_size(60.0));
    controller.layout_layers();
    assert_eq!(controller.in_flight(), id, "layout does not cancel");
    assert!(controller.layers().mark.path.is_some(), "mark path kept");
    assert_eq!(controller.layers().selected_box.frame, Rect::new(0.0, 0.0, 60.0, 60.0));
}

fn checkbox(config: CheckboxConfig) -> Checkbox<&'static str> {
    let mut checkbox = Checkbox::with_config(config);
    checkbox.set_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));
    checkbox.take_updates();
    checkbox
}

#[test]
fn switching_animation_keeps_settings() {
    let config = CheckboxConfig::default()
        .with_mark_type(MarkType::AddRemove)
        .with_box_type(BoxType::Square)
        .with_check_state(CheckState::Mixed)
        .with_animation_duration(0.5)
        .with_box_line_width(2.5)
        .with_enable_morphing(false)
        .with_tint(peniko::color::palette::css::TOMATO);
    let mut checkbox = checkbox(config);
    checkbox.set_state_change_animation(Animation::Dot(AnimationStyle::Fill));
    let kept = checkbox.config();
    assert_eq!(
        kept,
        config.with_animation(Animation::Dot(AnimationStyle::Fill))
    );
    assert!(checkbox.take_events().is_empty(), "no warnings");
}

#[test]
fn spiral_with_radio_falls_back_once() {
    let mut checkbox = checkbox(CheckboxConfig::default().with_mark_type(MarkType::Radio));
    checkbox.set_state_change_animation(Animation::Spiral);
    assert_eq!(checkbox.state_change_animation(), Animation::Stroke);
    assert_eq!(
        checkbox.take_events(),
        [CheckboxEvent::Warning(ConfigWarning::SpiralWithRadio)]
    );

    checkbox.set_mark_type(MarkType::Checkmark, false);
    checkbox.set_state_change_animation(Animation::Spiral);
    checkbox.set_mark_type(MarkType::Radio, true);
    assert_eq!(checkbox.state_change_animation(), Animation::Stroke);
    assert_eq!(checkbox.mark_type(), MarkType::Radio);
    assert_eq!(checkbox.take_events().len(), 1, "one warning per adjustment");
}

#[test]
fn toggling_cycles_through_unchecked() {
    let mut checkbox = checkbox(CheckboxConfig::default());
    checkbox.toggle_check_state(false);
    assert_eq!(checkbox.check_state(), CheckState::Checked);
    checkbox.set_check_state(CheckState::Mixed, true);
    checkbox.toggle_check_state(true);
    assert_eq!(checkbox.check_state(), CheckState::Unchecked);
    checkbox.toggle_check_state(true);
    assert_eq!(checkbox.check_state(), CheckState::Checked);
}

#[test]
fn values_follow_the_state() {
    let mut checkbox = checkbox(CheckboxConfig::default());
    checkbox.set_checked_value(Some("yes"));
    checkbox.set_unchecked_value(Some("no"));
    assert_eq!(checkbox.value(), Some(&"no"));
    checkbox.set_check_state(CheckState::Checked, false);
    assert_eq!(checkbox.value(), Some(&"yes"));
    checkbox.set_check_state(CheckState::Mixed, false);
    assert_eq!(checkbox.value(), None, "no mixed payload");
}

#[test]
fn presses_toggle_only_inside() {
    let mut checkbox = checkbox(CheckboxConfig::default());
    checkbox.press(PressPhase::Began, Point::new(10.0, 10.0));
    assert!(checkbox.is_selected(), "pressed");
    checkbox.press(PressPhase::Ended, Point::new(150.0, 10.0));
    assert!(!checkbox.is_selected(), "released");
    assert_eq!(checkbox.check_state(), CheckState::Unchecked);
    assert!(checkbox.take_events().is_empty(), "no change outside");

    checkbox.press(PressPhase::Began, Point::new(10.0, 10.0));
    checkbox.press(PressPhase::Ended, Point::new(50.0, 50.0));
    assert_eq!(checkbox.check_state(), CheckState::Checked);
    assert_eq!(
        checkbox.take_events(),
        [CheckboxEvent::ValueChanged(CheckState::Checked)]
    );
}

#[test]
fn zero_duration_matches_unanimated() {
    let config = CheckboxConfig::default()
        .with_box_type(BoxType::Square)
        .with_box_line_width(2.0)
        .with_corner_radius(4.0)
        .with_animation_duration(0.0);
    let mut animated = checkbox(config);
    animated.set_check_state(CheckState::Checked, true);
    let mut plain = checkbox(config);
    plain.set_check_state(CheckState::Checked, false);
    assert_eq!(animated.layers(), plain.layers());
    assert!(begun(animated.take_updates()).is_empty(), "no batch");
}

#[test]
fn timeline_plays_a_transition_to_rest() {
    let mut checkbox = checkbox(CheckboxConfig::default().with_animation(Animation::Spiral));
    let mut timeline = Timeline::new();
    checkbox.flush(&mut timeline);
    checkbox.set_check_state(CheckState::Checked, true);
    checkbox.flush(&mut timeline);
    assert!(timeline.is_animating(), "batch started");

    let mut finished: Option<BatchId> = None;
    for _ in 0..100 {
        if let Some(id) = timeline.advance(1.0 / 60.0) {
            finished = Some(id);
            break;
        }
    }
    let id = finished.expect("batch finishes");
    let last_frame = timeline.present();
    assert!(checkbox.complete_transition(id), "current batch");
    checkbox.flush(&mut timeline);
    assert!(!timeline.is_animating(), "settled");
    let rest = timeline.present();
    for role in LayerRole::ALL {
        assert_close(
            LayerValues::of(last_frame.get(role)),
            LayerValues::of(rest.get(role)),
            &std::format!("{role:?}"),
        );
    }
    assert_eq!(&rest, checkbox.layers());
}

#[test]
fn restyle_reaches_a_running_batch() {
    let mut timeline = Timeline::new();
    let mut checkbox = checkbox(CheckboxConfig::default());
    checkbox.set_check_state(CheckState::Checked, true);
    checkbox.flush(&mut timeline);
    checkbox.set_tint_color(peniko::color::palette::css::TOMATO);
    checkbox.flush(&mut timeline);
    assert!(timeline.is_animating(), "batch survives");
    assert_eq!(
        timeline.present().selected_box.stroke,
        Some(peniko::color::palette::css::TOMATO)
    );
    timeline.snap(checkbox.layers());
    assert!(!timeline.is_animating(), "snap drops the batch");
}
