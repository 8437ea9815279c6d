//! Curve dispatch table.
//!
//! Maps every `(CurveFamily, EasingPhase)` pair to a plain function pointer.
//! The table is built once on first use and shared by all callers.

use hashbrown::HashMap;
use once_cell::sync::Lazy;

use crate::curves::{back, bounce, circ, cubic, elastic, expo, linear, quad, quart, quint, sine};
use crate::error::EasingError;
use crate::params::{AnimationParameters, CurveExtras};
use crate::types::{CurveFamily, EasingPhase};

/// Resolved evaluator: `(t, b, c, d, extras) -> position`.
pub type Evaluator = fn(f64, f64, f64, f64, &CurveExtras) -> f64;

static TABLE: Lazy<CurveRegistry> = Lazy::new(CurveRegistry::builtin);

/// Registry of evaluators keyed by family and phase
#[derive(Debug, Clone)]
pub struct CurveRegistry {
    evaluators: HashMap<(CurveFamily, EasingPhase), Evaluator>,
}

impl CurveRegistry {
    /// Shared registry holding every built-in curve
    #[inline]
    pub fn global() -> &'static CurveRegistry {
        &TABLE
    }

    /// Build a registry populated with the eleven built-in families
    pub fn builtin() -> Self {
        let mut registry = Self {
            evaluators: HashMap::with_capacity(CurveFamily::ALL.len() * EasingPhase::ALL.len()),
        };
        registry.register_builtin_functions();
        registry
    }

    fn register_builtin_functions(&mut self) {
        use CurveFamily as F;
        use EasingPhase as P;

        self.register(F::Linear, P::EaseIn, |t, b, c, d, _| linear::ease_in(t, b, c, d));
        self.register(F::Linear, P::EaseOut, |t, b, c, d, _| linear::ease_out(t, b, c, d));
        self.register(F::Linear, P::EaseInOut, |t, b, c, d, _| linear::ease_in_out(t, b, c, d));

        self.register(F::Quad, P::EaseIn, |t, b, c, d, _| quad::ease_in(t, b, c, d));
        self.register(F::Quad, P::EaseOut, |t, b, c, d, _| quad::ease_out(t, b, c, d));
        self.register(F::Quad, P::EaseInOut, |t, b, c, d, x| {
            quad::ease_in_out(t, b, x.midpoint.in_out_delta(c), d)
        });

        self.register(F::Cubic, P::EaseIn, |t, b, c, d, _| cubic::ease_in(t, b, c, d));
        self.register(F::Cubic, P::EaseOut, |t, b, c, d, _| cubic::ease_out(t, b, c, d));
        self.register(F::Cubic, P::EaseInOut, |t, b, c, d, x| {
            cubic::ease_in_out(t, b, x.midpoint.in_out_delta(c), d)
        });

        self.register(F::Quart, P::EaseIn, |t, b, c, d, _| quart::ease_in(t, b, c, d));
        self.register(F::Quart, P::EaseOut, |t, b, c, d, _| quart::ease_out(t, b, c, d));
        self.register(F::Quart, P::EaseInOut, |t, b, c, d, x| {
            quart::ease_in_out(t, b, x.midpoint.in_out_delta(c), d)
        });

        self.register(F::Quint, P::EaseIn, |t, b, c, d, _| quint::ease_in(t, b, c, d));
        self.register(F::Quint, P::EaseOut, |t, b, c, d, _| quint::ease_out(t, b, c, d));
        self.register(F::Quint, P::EaseInOut, |t, b, c, d, x| {
            quint::ease_in_out(t, b, x.midpoint.in_out_delta(c), d)
        });

        self.register(F::Sine, P::EaseIn, |t, b, c, d, _| sine::ease_in(t, b, c, d));
        self.register(F::Sine, P::EaseOut, |t, b, c, d, _| sine::ease_out(t, b, c, d));
        self.register(F::Sine, P::EaseInOut, |t, b, c, d, x| {
            sine::ease_in_out(t, b, x.midpoint.in_out_delta(c), d)
        });

        self.register(F::Expo, P::EaseIn, |t, b, c, d, _| expo::ease_in(t, b, c, d));
        self.register(F::Expo, P::EaseOut, |t, b, c, d, _| expo::ease_out(t, b, c, d));
        self.register(F::Expo, P::EaseInOut, |t, b, c, d, x| {
            expo::ease_in_out_halved(t, b, c, d, x.midpoint.half(c))
        });

        self.register(F::Circ, P::EaseIn, |t, b, c, d, _| circ::ease_in(t, b, c, d));
        self.register(F::Circ, P::EaseOut, |t, b, c, d, _| circ::ease_out(t, b, c, d));
        self.register(F::Circ, P::EaseInOut, |t, b, c, d, x| {
            circ::ease_in_out(t, b, x.midpoint.in_out_delta(c), d)
        });

        self.register(F::Elastic, P::EaseIn, |t, b, c, d, x| {
            elastic::ease_in(t, b, c, d, x.amplitude, x.period, x.elastic_rule)
        });
        self.register(F::Elastic, P::EaseOut, |t, b, c, d, x| {
            elastic::ease_out(t, b, c, d, x.amplitude, x.period, x.elastic_rule)
        });
        self.register(F::Elastic, P::EaseInOut, |t, b, c, d, x| {
            elastic::ease_in_out(t, b, c, d, x.amplitude, x.period, x.elastic_rule)
        });

        self.register(F::Back, P::EaseIn, |t, b, c, d, x| back::ease_in(t, b, c, d, x.overshoot));
        self.register(F::Back, P::EaseOut, |t, b, c, d, x| back::ease_out(t, b, c, d, x.overshoot));
        self.register(F::Back, P::EaseInOut, |t, b, c, d, x| {
            back::ease_in_out(t, b, x.midpoint.in_out_delta(c), d, x.overshoot)
        });

        self.register(F::Bounce, P::EaseIn, |t, b, c, d, _| bounce::ease_in(t, b, c, d));
        self.register(F::Bounce, P::EaseOut, |t, b, c, d, _| bounce::ease_out(t, b, c, d));
        self.register(F::Bounce, P::EaseInOut, |t, b, c, d, _| bounce::ease_in_out(t, b, c, d));
    }

    /// Register or replace the evaluator for a selector pair
    #[inline]
    pub fn register(&mut self, family: CurveFamily, phase: EasingPhase, evaluator: Evaluator) {
        self.evaluators.insert((family, phase), evaluator);
    }

    /// Look up the evaluator for a selector pair
    #[inline]
    pub fn resolve(&self, family: CurveFamily, phase: EasingPhase) -> Result<Evaluator, EasingError> {
        self.evaluators
            .get(&(family, phase))
            .copied()
            .ok_or_else(|| EasingError::InvalidCurveSelector {
                selector: format!("{family}/{phase}"),
            })
    }

    /// Number of registered selector pairs
    #[inline]
    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }

    /// All registered selector pairs in family, then phase order
    pub fn list(&self) -> Vec<(CurveFamily, EasingPhase)> {
        let mut keys: Vec<_> = self.evaluators.keys().copied().collect();
        keys.sort();
        keys
    }
}

impl Default for CurveRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolve a selector pair against the shared table.
#[inline]
pub fn resolve(family: CurveFamily, phase: EasingPhase) -> Result<Evaluator, EasingError> {
    CurveRegistry::global().resolve(family, phase)
}

/// Resolve textual selectors such as `("bounce", "ease_out")`.
pub fn resolve_named(family: &str, phase: &str) -> Result<Evaluator, EasingError> {
    resolve(family.parse()?, phase.parse()?)
}

/// Evaluate one step of `params` at its `current_time`.
pub fn sample(
    family: CurveFamily,
    phase: EasingPhase,
    params: &AnimationParameters,
    extras: &CurveExtras,
) -> Result<f64, EasingError> {
    let evaluator = resolve(family, phase)?;
    Ok(evaluator(
        params.current_time,
        params.begin(),
        params.delta(),
        params.duration,
        extras,
    ))
}
