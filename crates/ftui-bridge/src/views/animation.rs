#![forbid(unsafe_code)]

//! Animation and drawing views the host cannot represent yet.
//!
//! [`PhaseAnimator`], [`KeyframeAnimator`] and [`Canvas`] are flagged
//! [`Capability::Unsupported`]: they know the node they would bridge to, but
//! capability fallback substitutes the empty node until the host catches up.
//! Symbol effects bridge their content unchanged.

use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::bridge::{Bridge, Capability};
use crate::fallback::bridge_or_fallback;
use crate::modifier::{BridgeExt, Modified};
use crate::node::OpaqueNode;
use crate::token::IdentityToken;

/// Cycles its content through a list of phases.
pub struct PhaseAnimator<P, V> {
    phases: Vec<P>,
    trigger: Option<IdentityToken>,
    content: Rc<dyn Fn(&P) -> V>,
}

impl<P, V> PhaseAnimator<P, V> {
    pub fn new(phases: Vec<P>, content: impl Fn(&P) -> V + 'static) -> Self {
        Self {
            phases,
            trigger: None,
            content: Rc::new(content),
        }
    }

    /// Run one cycle each time `value` changes.
    #[must_use]
    pub fn trigger<H: Eq + Hash + 'static>(mut self, value: H) -> Self {
        self.trigger = Some(IdentityToken::wrap(value));
        self
    }
}

impl<P, V> fmt::Debug for PhaseAnimator<P, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhaseAnimator")
            .field("phases", &self.phases.len())
            .field("trigger", &self.trigger)
            .finish_non_exhaustive()
    }
}

impl<P, V: Bridge> Bridge for PhaseAnimator<P, V> {
    const KIND: &'static str = "phase-animator";
    const CAPABILITY: Capability = Capability::Unsupported;

    fn bridge(&self) -> OpaqueNode {
        let phases = self
            .phases
            .iter()
            .map(|phase| bridge_or_fallback(&(self.content)(phase)));
        let node = OpaqueNode::new(Self::KIND).with_children(phases);
        match &self.trigger {
            Some(trigger) => node.with_id(trigger.clone()),
            None => node,
        }
    }
}

/// Drives its content through timed keyframes.
pub struct KeyframeAnimator<T, V> {
    initial: T,
    keyframes: Vec<(T, f64)>,
    trigger: Option<IdentityToken>,
    content: Rc<dyn Fn(&T) -> V>,
}

impl<T, V> KeyframeAnimator<T, V> {
    pub fn new(initial: T, content: impl Fn(&T) -> V + 'static) -> Self {
        Self {
            initial,
            keyframes: Vec::new(),
            trigger: None,
            content: Rc::new(content),
        }
    }

    /// Append a keyframe reaching `value` after `duration` seconds.
    #[must_use]
    pub fn keyframe(mut self, value: T, duration: f64) -> Self {
        self.keyframes.push((value, duration));
        self
    }

    #[must_use]
    pub fn trigger<H: Eq + Hash + 'static>(mut self, value: H) -> Self {
        self.trigger = Some(IdentityToken::wrap(value));
        self
    }
}

impl<T, V> fmt::Debug for KeyframeAnimator<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyframeAnimator")
            .field("keyframes", &self.keyframes.len())
            .field("trigger", &self.trigger)
            .finish_non_exhaustive()
    }
}

impl<T, V: Bridge> Bridge for KeyframeAnimator<T, V> {
    const KIND: &'static str = "keyframe-animator";
    const CAPABILITY: Capability = Capability::Unsupported;

    fn bridge(&self) -> OpaqueNode {
        let total: f64 = self.keyframes.iter().map(|(_, duration)| duration).sum();
        let node = OpaqueNode::new(Self::KIND)
            .with_prop("keyframes", self.keyframes.len() as i64)
            .with_prop("duration", total)
            .with_child(bridge_or_fallback(&(self.content)(&self.initial)));
        match &self.trigger {
            Some(trigger) => node.with_id(trigger.clone()),
            None => node,
        }
    }
}

/// Drawing commands recorded by a [`Canvas`].
#[derive(Debug, Default)]
pub struct GraphicsContext {
    commands: Vec<OpaqueNode>,
}

impl GraphicsContext {
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(
            OpaqueNode::new("fill-rect")
                .with_prop("x", x)
                .with_prop("y", y)
                .with_prop("width", width)
                .with_prop("height", height),
        );
    }

    pub fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64)) {
        self.commands.push(
            OpaqueNode::new("stroke-line")
                .with_prop("x1", from.0)
                .with_prop("y1", from.1)
                .with_prop("x2", to.0)
                .with_prop("y2", to.1),
        );
    }
}

/// Immediate-mode drawing surface.
#[derive(Clone)]
pub struct Canvas {
    draw: Rc<dyn Fn(&mut GraphicsContext)>,
}

impl Canvas {
    pub fn new(draw: impl Fn(&mut GraphicsContext) + 'static) -> Self {
        Self {
            draw: Rc::new(draw),
        }
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas").finish_non_exhaustive()
    }
}

impl Bridge for Canvas {
    const KIND: &'static str = "canvas";
    const CAPABILITY: Capability = Capability::Unsupported;

    fn bridge(&self) -> OpaqueNode {
        let mut context = GraphicsContext::default();
        (self.draw)(&mut context);
        OpaqueNode::new(Self::KIND).with_children(context.commands)
    }
}

/// Animated effects on symbol images.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolEffect {
    Appear,
    Disappear,
    Bounce,
    Pulse,
    Scale,
    VariableColor,
    Replace,
}

/// Symbol-effect modifiers, available on every view.
pub trait SymbolEffectModifiers: BridgeExt {
    /// Apply `effect` while `active`. The host has no symbol effects, so the
    /// content is bridged unchanged.
    fn symbol_effect(
        self,
        effect: SymbolEffect,
        active: bool,
    ) -> Modified<Self, impl Fn(OpaqueNode) -> OpaqueNode> {
        self.modifier(move |node| {
            tracing::trace!(
                target: "ftui_bridge::fallback",
                effect = ?effect,
                active,
                "symbol effect dropped"
            );
            node
        })
    }
}

impl<V: Bridge> SymbolEffectModifiers for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiagnosticsConfig;
    use crate::diagnostics::DiagnosticsScope;
    use crate::node::Prop;
    use crate::views::Text;

    fn phases() -> PhaseAnimator<u8, Text> {
        PhaseAnimator::new(vec![0, 1, 2], |p| Text::new(format!("phase {p}"))).trigger("tap")
    }

    #[test]
    fn phase_animator_is_substituted() {
        let scope = DiagnosticsScope::begin(DiagnosticsConfig::default());
        let animator = phases();
        assert!(bridge_or_fallback(&animator).is_empty());
        assert_eq!(scope.substituted_kinds(), ["phase-animator"]);
    }

    #[test]
    fn phase_animator_knows_its_representation() {
        let node = phases().bridge();
        assert_eq!(node.children().len(), 3);
        assert_eq!(node.id(), Some(&IdentityToken::wrap("tap")));
    }

    #[test]
    fn keyframe_animator_is_substituted_twice_equally() {
        let animator = KeyframeAnimator::new(1.0_f64, |scale| Text::new(format!("{scale}")))
            .keyframe(1.5, 0.2)
            .keyframe(1.0, 0.3);
        let first = bridge_or_fallback(&animator);
        let second = bridge_or_fallback(&animator);
        assert_eq!(first, second);
        assert!(first.is_empty());

        let direct = animator.bridge();
        assert_eq!(direct.prop("keyframes"), Some(&Prop::Int(2)));
        assert_eq!(direct.prop("duration"), Some(&Prop::Float(0.5)));
    }

    #[test]
    fn canvas_records_commands_but_falls_back() {
        let canvas = Canvas::new(|ctx| {
            ctx.fill_rect(0.0, 0.0, 10.0, 10.0);
            ctx.stroke_line((0.0, 0.0), (10.0, 10.0));
        });
        assert_eq!(canvas.bridge().children().len(), 2);
        assert!(bridge_or_fallback(&canvas).is_empty());
    }

    #[test]
    fn symbol_effect_passes_content_through() {
        let plain = Text::new("bell").bridge();
        let effected = Text::new("bell")
            .symbol_effect(SymbolEffect::Bounce, true)
            .bridge();
        assert_eq!(plain, effected);
    }
}
