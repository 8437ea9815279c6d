use approx::assert_relative_eq;
use proptest::prelude::*;
use tweenstep_core::curves::{bounce, expo};
use tweenstep_core::{resolve, CurveExtras, CurveFamily, EasingPhase};

const B: f64 = 12.0;
const C: f64 = 340.0;
const D: f64 = 20.0;

fn eval(family: CurveFamily, phase: EasingPhase, t: f64) -> f64 {
    let f = resolve(family, phase).expect("built-in selector");
    f(t, B, C, D, &CurveExtras::default())
}

#[test]
fn ease_in_starts_at_begin_and_ends_at_target() {
    for family in CurveFamily::ALL {
        if family == CurveFamily::Expo {
            continue;
        }
        assert_relative_eq!(eval(family, EasingPhase::EaseIn, 0.0), B, max_relative = 1e-9);
        assert_relative_eq!(eval(family, EasingPhase::EaseIn, D), B + C, max_relative = 1e-9);
    }
}

#[test]
fn ease_out_and_in_out_hit_both_endpoints() {
    for family in CurveFamily::ALL {
        for phase in [EasingPhase::EaseOut, EasingPhase::EaseInOut] {
            let start = eval(family, phase, 0.0);
            let end = eval(family, phase, D);
            assert!((start - B).abs() <= 1e-9 * C, "{family}/{phase} start {start}");
            assert!((end - (B + C)).abs() <= 1e-9 * C, "{family}/{phase} end {end}");
        }
    }
}

#[test]
fn expo_endpoints_are_exact() {
    assert_eq!(expo::ease_in(0.0, B, C, D), B);
    assert_eq!(expo::ease_out(D, B, C, D), B + C);
}

#[test]
fn in_out_is_continuous_at_midpoint() {
    let eps = 1e-7;
    for family in CurveFamily::ALL {
        let below = eval(family, EasingPhase::EaseInOut, D / 2.0 - eps);
        let above = eval(family, EasingPhase::EaseInOut, D / 2.0 + eps);
        assert!(
            (below - above).abs() < 1.0,
            "{family} jumps from {below} to {above}"
        );
    }
}

#[test]
fn smooth_families_are_monotone_for_positive_delta() {
    let smooth = [
        CurveFamily::Quad,
        CurveFamily::Cubic,
        CurveFamily::Quart,
        CurveFamily::Quint,
        CurveFamily::Sine,
        CurveFamily::Circ,
    ];
    for family in smooth {
        assert!(family.is_monotone());
        for phase in [EasingPhase::EaseIn, EasingPhase::EaseOut] {
            let mut prev = f64::NEG_INFINITY;
            for i in 0..=200 {
                let t = D * f64::from(i) / 200.0;
                let value = eval(family, phase, t);
                assert!(value >= prev - 1e-9, "{family}/{phase} decreased at t={t}");
                prev = value;
            }
        }
    }
}

#[test]
fn zero_duration_is_non_finite() {
    for family in [
        CurveFamily::Linear,
        CurveFamily::Quad,
        CurveFamily::Cubic,
        CurveFamily::Quart,
        CurveFamily::Quint,
        CurveFamily::Circ,
        CurveFamily::Back,
    ] {
        let f = resolve(family, EasingPhase::EaseIn).unwrap();
        let value = f(0.0, 0.0, 100.0, 0.0, &CurveExtras::default());
        assert!(!value.is_finite(), "{family} gave {value}");
    }
}

proptest! {
    #[test]
    fn bounce_in_mirrors_bounce_out(
        t in 0.0f64..50.0,
        b in -1000i32..1000,
        c in -1000i32..1000,
        d in 1.0f64..50.0,
    ) {
        let (b, c) = (f64::from(b), f64::from(c));
        prop_assert_eq!(
            bounce::ease_in(t, b, c, d),
            c - bounce::ease_out(d - t, 0.0, c, d) + b
        );
    }

    #[test]
    fn evaluators_are_referentially_transparent(
        family_index in 0usize..11,
        phase_index in 0usize..3,
        t in 0.0f64..30.0,
    ) {
        let family = CurveFamily::ALL[family_index];
        let phase = EasingPhase::ALL[phase_index];
        let first = eval(family, phase, t);
        let second = eval(family, phase, t);
        prop_assert!(first == second || (first.is_nan() && second.is_nan()));
    }
}
