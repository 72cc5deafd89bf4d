// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use tickbox_geometry::{BoxType, CheckState, MarkType, PathGeometry};

use crate::{
    Animation, Appearance, BatchId, CheckboxConfig, CheckboxEvent, Compositor, ConfigWarning,
    Controller, LayerSet, LayerUpdate, PressPhase,
};

/// A checkbox or radio control.
///
/// `Checkbox` owns the logical state, the settings and an optional payload per
/// state. It does not draw: call [`flush`](Self::flush) after changes to hand the
/// resulting layer updates to a [`Compositor`], and report finished batches with
/// [`complete_transition`](Self::complete_transition).
#[derive(Clone, Debug)]
pub struct Checkbox<V = ()> {
    controller: Controller,
    bounds: Rect,
    checked_value: Option<V>,
    unchecked_value: Option<V>,
    mixed_value: Option<V>,
    is_selected: bool,
    events: Vec<CheckboxEvent>,
}

impl<V> Default for Checkbox<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Checkbox<V> {
    /// Creates an unchecked checkbox with default settings and empty bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CheckboxConfig::default())
    }

    /// Creates a checkbox from `config`.
    #[must_use]
    pub fn with_config(config: CheckboxConfig) -> Self {
        let mut controller = Controller::new(config.animation);
        controller.set_geometry(PathGeometry {
            size: 0.0,
            checkmark_line_width: config.checkmark_line_width,
            box_line_width: config.box_line_width,
            corner_radius: config.corner_radius,
            box_type: config.box_type,
        });
        controller.set_mark_type(config.mark_type, false);
        controller.set_animation_duration(config.animation_duration);
        controller.set_enable_morphing(config.enable_morphing);
        controller.set_appearance(config.appearance);
        controller.take_updates();
        controller.reset_layers(Some(config.check_state));

        let mut checkbox = Self {
            controller,
            bounds: Rect::ZERO,
            checked_value: None,
            unchecked_value: None,
            mixed_value: None,
            is_selected: false,
            events: Vec::new(),
        };
        checkbox.enforce_supported_animation();
        checkbox
    }

    /// A snapshot of every setting.
    #[must_use]
    pub fn config(&self) -> CheckboxConfig {
        let geometry = self.controller.geometry();
        CheckboxConfig {
            animation: self.controller.animation(),
            mark_type: self.controller.settled_mark_type(),
            box_type: geometry.box_type,
            check_state: self.controller.state(),
            animation_duration: self.controller.animation_duration(),
            checkmark_line_width: geometry.checkmark_line_width,
            box_line_width: geometry.box_line_width,
            corner_radius: geometry.corner_radius,
            appearance: *self.controller.appearance(),
            enable_morphing: self.controller.enable_morphing(),
        }
    }

    /// The logical state.
    #[must_use]
    pub fn check_state(&self) -> CheckState {
        self.controller.state()
    }

    /// Changes the state, animating when `animated` is set.
    ///
    /// Setting the current state again does nothing. With morphing disabled an
    /// animated change plays the current mark out and the new mark in.
    pub fn set_check_state(&mut self, state: CheckState, animated: bool) {
        let current = self.check_state();
        if state == current {
            return;
        }
        if !animated {
            self.controller.reset_layers(Some(state));
        } else if self.controller.enable_morphing() {
            self.controller.animate(Some(current), Some(state));
        } else {
            self.controller.exit_then_enter(state);
        }
    }

    /// Moves to the state a tap leads to: unchecked becomes checked, anything
    /// else becomes unchecked.
    pub fn toggle_check_state(&mut self, animated: bool) {
        self.set_check_state(self.check_state().toggled(), animated);
    }

    /// The payload for the current state.
    #[must_use]
    pub fn value(&self) -> Option<&V> {
        match self.check_state() {
            CheckState::Checked => self.checked_value.as_ref(),
            CheckState::Unchecked => self.unchecked_value.as_ref(),
            CheckState::Mixed => self.mixed_value.as_ref(),
        }
    }

    /// The payload reported while checked.
    #[must_use]
    pub fn checked_value(&self) -> Option<&V> {
        self.checked_value.as_ref()
    }

    /// Sets the payload reported while checked.
    pub fn set_checked_value(&mut self, value: Option<V>) {
        self.checked_value = value;
    }

    /// The payload reported while unchecked.
    #[must_use]
    pub fn unchecked_value(&self) -> Option<&V> {
        self.unchecked_value.as_ref()
    }

    /// Sets the payload reported while unchecked.
    pub fn set_unchecked_value(&mut self, value: Option<V>) {
        self.unchecked_value = value;
    }

    /// The payload reported while mixed.
    #[must_use]
    pub fn mixed_value(&self) -> Option<&V> {
        self.mixed_value.as_ref()
    }

    /// Sets the payload reported while mixed.
    pub fn set_mixed_value(&mut self, value: Option<V>) {
        self.mixed_value = value;
    }

    /// How state changes animate.
    #[must_use]
    pub fn state_change_animation(&self) -> Animation {
        self.controller.animation()
    }

    /// Switches the animation, carrying every other setting over.
    ///
    /// The spiral animation cannot draw radio marks; asking for it with a radio mark
    /// selects the stroke animation and queues a [`ConfigWarning`].
    pub fn set_state_change_animation(&mut self, animation: Animation) {
        self.controller = Controller::replacing(&self.controller, animation);
        self.enforce_supported_animation();
    }

    /// Base transition duration in seconds.
    #[must_use]
    pub fn animation_duration(&self) -> f64 {
        self.controller.animation_duration()
    }

    /// Sets the base transition duration. Zero makes every change instant.
    pub fn set_animation_duration(&mut self, duration: f64) {
        self.controller.set_animation_duration(duration);
    }

    /// Whether changes between two marks morph.
    #[must_use]
    pub fn enable_morphing(&self) -> bool {
        self.controller.enable_morphing()
    }

    /// Turns mark morphing on or off.
    pub fn set_enable_morphing(&mut self, enable: bool) {
        self.controller.set_enable_morphing(enable);
    }

    /// The tint colour.
    #[must_use]
    pub fn tint_color(&self) -> Color {
        self.controller.appearance().tint
    }

    /// Sets the tint colour.
    pub fn set_tint_color(&mut self, color: Color) {
        self.update_appearance(|appearance| appearance.tint = color);
    }

    /// The unselected box colour.
    #[must_use]
    pub fn secondary_tint_color(&self) -> Color {
        self.controller.appearance().secondary_tint
    }

    /// Sets the unselected box colour.
    pub fn set_secondary_tint_color(&mut self, color: Color) {
        self.update_appearance(|appearance| appearance.secondary_tint = color);
    }

    /// The fill-style mark colour.
    #[must_use]
    pub fn secondary_checkmark_tint_color(&self) -> Color {
        self.controller.appearance().secondary_mark_tint
    }

    /// Sets the fill-style mark colour.
    pub fn set_secondary_checkmark_tint_color(&mut self, color: Color) {
        self.update_appearance(|appearance| appearance.secondary_mark_tint = color);
    }

    /// Whether the box layers are hidden.
    #[must_use]
    pub fn hide_box(&self) -> bool {
        self.controller.appearance().hide_box
    }

    /// Hides or shows the box layers.
    pub fn set_hide_box(&mut self, hide_box: bool) {
        self.update_appearance(|appearance| appearance.hide_box = hide_box);
    }

    /// Stroke width of the mark.
    #[must_use]
    pub fn checkmark_line_width(&self) -> f64 {
        self.controller.geometry().checkmark_line_width
    }

    /// Sets the mark stroke width; the layers reset to the current state.
    pub fn set_checkmark_line_width(&mut self, width: f64) {
        self.update_geometry(|geometry| geometry.checkmark_line_width = width);
        self.controller.reset_layers(Some(self.check_state()));
    }

    /// Stroke width of the box.
    #[must_use]
    pub fn box_line_width(&self) -> f64 {
        self.controller.geometry().box_line_width
    }

    /// Sets the box stroke width; the layers reset to the current state.
    pub fn set_box_line_width(&mut self, width: f64) {
        self.update_geometry(|geometry| geometry.box_line_width = width);
        self.controller.reset_layers(Some(self.check_state()));
    }

    /// Corner radius of square boxes.
    #[must_use]
    pub fn corner_radius(&self) -> f64 {
        self.controller.geometry().corner_radius
    }

    /// Sets the corner radius.
    pub fn set_corner_radius(&mut self, radius: f64) {
        self.update_geometry(|geometry| geometry.corner_radius = radius);
        self.layout();
    }

    /// The outline shape.
    #[must_use]
    pub fn box_type(&self) -> BoxType {
        self.controller.geometry().box_type
    }

    /// Sets the outline shape.
    pub fn set_box_type(&mut self, box_type: BoxType) {
        self.update_geometry(|geometry| geometry.box_type = box_type);
        self.layout();
    }

    /// The glyph inside the box.
    #[must_use]
    pub fn mark_type(&self) -> MarkType {
        self.controller.settled_mark_type()
    }

    /// Sets the glyph, optionally animating the old one out and the new one in.
    ///
    /// Radio marks under the spiral animation switch the animation to stroke, as
    /// [`set_state_change_animation`](Self::set_state_change_animation) does.
    pub fn set_mark_type(&mut self, mark_type: MarkType, animated: bool) {
        self.controller.set_mark_type(mark_type, animated);
        self.enforce_supported_animation();
    }

    /// The control bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Sets the control bounds. Paths are laid out in a square whose side is the
    /// shorter bounds dimension.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.layout();
    }

    /// Whether a press is in progress over the control.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Feeds a press at `location`, in the same coordinates as the bounds.
    ///
    /// A press that ends inside the bounds toggles the state with animation and
    /// queues [`CheckboxEvent::ValueChanged`]. One that ends outside does nothing.
    pub fn press(&mut self, phase: PressPhase, location: Point) {
        match phase {
            PressPhase::Began | PressPhase::Moved => self.is_selected = true,
            PressPhase::Cancelled => self.is_selected = false,
            PressPhase::Ended => {
                self.is_selected = false;
                if self.bounds.abs().contains(location) {
                    self.toggle_check_state(true);
                    self.events
                        .push(CheckboxEvent::ValueChanged(self.check_state()));
                }
            }
        }
    }

    /// Reports that the host finished playing batch `id`.
    ///
    /// Returns whether the report was current; stale reports are ignored.
    pub fn complete_transition(&mut self, id: BatchId) -> bool {
        self.controller.complete(id)
    }

    /// Hands all pending layer updates to `compositor`, oldest first.
    pub fn flush<C: Compositor + ?Sized>(&mut self, compositor: &mut C) {
        for update in self.controller.take_updates() {
            compositor.apply(&update);
        }
    }

    /// Takes the pending layer updates without applying them.
    pub fn take_updates(&mut self) -> Vec<LayerUpdate> {
        self.controller.take_updates()
    }

    /// Takes the events queued since the last call.
    pub fn take_events(&mut self) -> Vec<CheckboxEvent> {
        core::mem::take(&mut self.events)
    }

    /// The model layers.
    #[must_use]
    pub fn layers(&self) -> &LayerSet {
        self.controller.layers()
    }

    /// The controller for the current animation.
    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    fn layout(&mut self) {
        let bounds = self.bounds.abs();
        let size = bounds.width().min(bounds.height());
        self.update_geometry(|geometry| geometry.size = size);
        self.controller.layout_layers();
    }

    fn update_geometry(&mut self, update: impl FnOnce(&mut PathGeometry)) {
        let mut geometry = *self.controller.geometry();
        update(&mut geometry);
        self.controller.set_geometry(geometry);
    }

    fn update_appearance(&mut self, update: impl FnOnce(&mut Appearance)) {
        let mut appearance = *self.controller.appearance();
        update(&mut appearance);
        self.controller.set_appearance(appearance);
    }

    fn enforce_supported_animation(&mut self) {
        if self.controller.animation() == Animation::Spiral
            && self.controller.settled_mark_type() == MarkType::Radio
        {
            log::warn!("spiral animation cannot draw radio marks, using stroke");
            self.events
                .push(CheckboxEvent::Warning(ConfigWarning::SpiralWithRadio));
            self.controller = Controller::replacing(&self.controller, Animation::Stroke);
        }
    }
}
