// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filmstrips of every tickbox animation.
mod html;
mod svg;

use kurbo::Rect;
use peniko::color::palette::css;
use tickbox::{
    Animation, BoxType, CheckState, Checkbox, CheckboxConfig, LayerSet, MarkType, Timeline,
};

/// Side length of one frame.
const CELL: f64 = 40.0;
/// Frames per second of the filmstrip.
const FPS: f64 = 30.0;
/// Upper bound on frames per strip, in case a batch never finishes.
const MAX_FRAMES: usize = 120;

fn main() {
    env_logger::init();

    let mut sections = Vec::new();
    for animation in Animation::ALL {
        let config = CheckboxConfig::default()
            .with_animation(animation)
            .with_box_line_width(2.0)
            .with_checkmark_line_width(3.0)
            .with_tint(css::ROYAL_BLUE);
        sections.push(strip(config, CheckState::Checked));
        sections.push(strip(
            config.with_check_state(CheckState::Checked),
            CheckState::Unchecked,
        ));
    }

    let extras = [
        CheckboxConfig::default()
            .with_animation(Animation::Fill)
            .with_mark_type(MarkType::Radio),
        CheckboxConfig::default()
            .with_box_type(BoxType::Square)
            .with_corner_radius(6.0)
            .with_check_state(CheckState::Checked),
        CheckboxConfig::default()
            .with_mark_type(MarkType::AddRemove)
            .with_box_type(BoxType::Square),
        CheckboxConfig::default().with_mark_type(MarkType::Disclosure),
    ];
    for config in extras {
        sections.push(strip(config, CheckState::Mixed));
    }

    let html = html::render_report("tickbox animations", &sections);
    std::fs::write("tickbox_demo.html", html).expect("write tickbox_demo.html");
    println!("wrote tickbox_demo.html");
}

/// Plays one state change to rest and renders every sampled frame.
fn strip(config: CheckboxConfig, to: CheckState) -> html::Section {
    let mut checkbox: Checkbox = Checkbox::with_config(config);
    checkbox.set_bounds(Rect::new(0.0, 0.0, CELL, CELL));
    let mut timeline = Timeline::new();
    checkbox.flush(&mut timeline);
    checkbox.set_check_state(to, true);
    checkbox.flush(&mut timeline);

    let frames = play(&mut checkbox, &mut timeline);
    html::Section {
        title: format!(
            "{} {} {}: {} -> {} ({} frames)",
            checkbox.state_change_animation(),
            checkbox.mark_type(),
            checkbox.box_type(),
            config.check_state,
            to,
            frames.len()
        ),
        svg: svg::filmstrip(&frames, CELL, 8.0),
    }
}

/// Samples the timeline until it rests, reporting finished batches as it goes.
fn play(checkbox: &mut Checkbox, timeline: &mut Timeline) -> Vec<LayerSet> {
    let mut frames = vec![timeline.present()];
    while timeline.is_animating() && frames.len() < MAX_FRAMES {
        if let Some(id) = timeline.advance(1.0 / FPS) {
            checkbox.complete_transition(id);
            checkbox.flush(timeline);
        }
        frames.push(timeline.present());
    }
    frames
}
