//! Easing curve library.
//!
//! Every family exposes three pure functions `ease_in`, `ease_out` and
//! `ease_in_out` taking `(t, b, c, d)`: elapsed steps, start value, delta and
//! duration. Elastic and Back take their extras as trailing arguments.
//!
//! The same functions are available behind the [`Curve`] trait, implemented by
//! one value per family, for callers that pick a family at runtime. Both halve
//! the delta exactly; the legacy integer halving ([`MidpointRule::Integer`])
//! is an evaluator option of the dispatch table.
//!
//! [`MidpointRule::Integer`]: crate::params::MidpointRule::Integer

pub mod back;
pub mod bounce;
pub mod circ;
pub mod cubic;
pub mod elastic;
pub mod expo;
pub mod linear;
pub mod quad;
pub mod quart;
pub mod quint;
pub mod sine;

use crate::params::{CurveExtras, ElasticRule, DEFAULT_OVERSHOOT};
use crate::types::{CurveFamily, EasingPhase};

/// Shared evaluator capability of a curve family.
pub trait Curve: Send + Sync {
    fn family(&self) -> CurveFamily;

    fn ease_in(&self, t: f64, b: f64, c: f64, d: f64) -> f64;

    fn ease_out(&self, t: f64, b: f64, c: f64, d: f64) -> f64;

    fn ease_in_out(&self, t: f64, b: f64, c: f64, d: f64) -> f64;

    /// Evaluate the selected phase.
    #[inline]
    fn evaluate(&self, phase: EasingPhase, t: f64, b: f64, c: f64, d: f64) -> f64 {
        match phase {
            EasingPhase::EaseIn => self.ease_in(t, b, c, d),
            EasingPhase::EaseOut => self.ease_out(t, b, c, d),
            EasingPhase::EaseInOut => self.ease_in_out(t, b, c, d),
        }
    }
}

macro_rules! plain_curve {
    ($name:ident, $module:ident) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl Curve for $name {
            #[inline]
            fn family(&self) -> CurveFamily {
                CurveFamily::$name
            }

            #[inline]
            fn ease_in(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
                $module::ease_in(t, b, c, d)
            }

            #[inline]
            fn ease_out(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
                $module::ease_out(t, b, c, d)
            }

            #[inline]
            fn ease_in_out(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
                $module::ease_in_out(t, b, c, d)
            }
        }
    };
}

plain_curve!(Linear, linear);
plain_curve!(Quad, quad);
plain_curve!(Cubic, cubic);
plain_curve!(Quart, quart);
plain_curve!(Quint, quint);
plain_curve!(Sine, sine);
plain_curve!(Expo, expo);
plain_curve!(Circ, circ);
plain_curve!(Bounce, bounce);

/// Elastic family with its oscillation parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Elastic {
    pub amplitude: f64,
    pub period: f64,
    pub rule: ElasticRule,
}

impl Curve for Elastic {
    fn family(&self) -> CurveFamily {
        CurveFamily::Elastic
    }

    fn ease_in(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        elastic::ease_in(t, b, c, d, self.amplitude, self.period, self.rule)
    }

    fn ease_out(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        elastic::ease_out(t, b, c, d, self.amplitude, self.period, self.rule)
    }

    fn ease_in_out(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        elastic::ease_in_out(t, b, c, d, self.amplitude, self.period, self.rule)
    }
}

/// Back family with its overshoot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Back {
    pub overshoot: f64,
}

impl Default for Back {
    fn default() -> Self {
        Self {
            overshoot: DEFAULT_OVERSHOOT,
        }
    }
}

impl Curve for Back {
    fn family(&self) -> CurveFamily {
        CurveFamily::Back
    }

    fn ease_in(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        back::ease_in(t, b, c, d, self.overshoot)
    }

    fn ease_out(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        back::ease_out(t, b, c, d, self.overshoot)
    }

    fn ease_in_out(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        back::ease_in_out(t, b, c, d, self.overshoot)
    }
}

/// Build the curve value for `family`, taking Elastic/Back settings from `extras`.
pub fn curve_for(family: CurveFamily, extras: &CurveExtras) -> Box<dyn Curve> {
    match family {
        CurveFamily::Linear => Box::new(Linear),
        CurveFamily::Quad => Box::new(Quad),
        CurveFamily::Cubic => Box::new(Cubic),
        CurveFamily::Quart => Box::new(Quart),
        CurveFamily::Quint => Box::new(Quint),
        CurveFamily::Sine => Box::new(Sine),
        CurveFamily::Expo => Box::new(Expo),
        CurveFamily::Circ => Box::new(Circ),
        CurveFamily::Elastic => Box::new(Elastic {
            amplitude: extras.amplitude,
            period: extras.period,
            rule: extras.elastic_rule,
        }),
        CurveFamily::Back => Box::new(Back {
            overshoot: extras.overshoot,
        }),
        CurveFamily::Bounce => Box::new(Bounce),
    }
}
