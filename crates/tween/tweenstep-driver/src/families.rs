//! Per-family entry points.
//!
//! Thin wrappers over [`AnimationDriver::start`] that fix the curve family and
//! take the family's extras as plain arguments. The elastic and midpoint rules
//! come from the driver's [`DriverConfig`](crate::DriverConfig).

use std::time::Duration;

use tweenstep_core::{AnimationParameters, CurveExtras, CurveFamily, EasingPhase};

use crate::channel::DeliveryChannel;
use crate::driver::AnimationDriver;
use crate::error::DriverError;
use crate::run::RunHandle;

impl AnimationDriver {
    fn start_plain<C: DeliveryChannel>(
        &self,
        family: CurveFamily,
        channel: C,
        params: AnimationParameters,
        step_delay: Duration,
        phase: EasingPhase,
    ) -> Result<RunHandle, DriverError> {
        self.start(params, family, phase, self.config().default_extras(), step_delay, channel)
    }

    pub fn start_linear<C: DeliveryChannel>(
        &self,
        channel: C,
        params: AnimationParameters,
        step_delay: Duration,
        phase: EasingPhase,
    ) -> Result<RunHandle, DriverError> {
        self.start_plain(CurveFamily::Linear, channel, params, step_delay, phase)
    }

    pub fn start_quad<C: DeliveryChannel>(
        &self,
        channel: C,
        params: AnimationParameters,
        step_delay: Duration,
        phase: EasingPhase,
    ) -> Result<RunHandle, DriverError> {
        self.start_plain(CurveFamily::Quad, channel, params, step_delay, phase)
    }

    pub fn start_cubic<C: DeliveryChannel>(
        &self,
        channel: C,
        params: AnimationParameters,
        step_delay: Duration,
        phase: EasingPhase,
    ) -> Result<RunHandle, DriverError> {
        self.start_plain(CurveFamily::Cubic, channel, params, step_delay, phase)
    }

    pub fn start_quart<C: DeliveryChannel>(
        &self,
        channel: C,
        params: AnimationParameters,
        step_delay: Duration,
        phase: EasingPhase,
    ) -> Result<RunHandle, DriverError> {
        self.start_plain(CurveFamily::Quart, channel, params, step_delay, phase)
    }

    pub fn start_quint<C: DeliveryChannel>(
        &self,
        channel: C,
        params: AnimationParameters,
        step_delay: Duration,
        phase: EasingPhase,
    ) -> Result<RunHandle, DriverError> {
        self.start_plain(CurveFamily::Quint, channel, params, step_delay, phase)
    }

    pub fn start_sine<C: DeliveryChannel>(
        &self,
        channel: C,
        params: AnimationParameters,
        step_delay: Duration,
        phase: EasingPhase,
    ) -> Result<RunHandle, DriverError> {
        self.start_plain(CurveFamily::Sine, channel, params, step_delay, phase)
    }

    pub fn start_expo<C: DeliveryChannel>(
        &self,
        channel: C,
        params: AnimationParameters,
        step_delay: Duration,
        phase: EasingPhase,
    ) -> Result<RunHandle, DriverError> {
        self.start_plain(CurveFamily::Expo, channel, params, step_delay, phase)
    }

    pub fn start_circ<C: DeliveryChannel>(
        &self,
        channel: C,
        params: AnimationParameters,
        step_delay: Duration,
        phase: EasingPhase,
    ) -> Result<RunHandle, DriverError> {
        self.start_plain(CurveFamily::Circ, channel, params, step_delay, phase)
    }

    /// Elastic run; `amplitude` and `period` of 0 select the defaults.
    pub fn start_elastic<C: DeliveryChannel>(
        &self,
        channel: C,
        params: AnimationParameters,
        step_delay: Duration,
        phase: EasingPhase,
        amplitude: f64,
        period: f64,
    ) -> Result<RunHandle, DriverError> {
        let extras = CurveExtras {
            amplitude,
            period,
            ..self.config().default_extras()
        };
        self.start(params, CurveFamily::Elastic, phase, extras, step_delay, channel)
    }

    /// Back run with an explicit overshoot (1.70158 is the classic value).
    pub fn start_back<C: DeliveryChannel>(
        &self,
        channel: C,
        params: AnimationParameters,
        step_delay: Duration,
        phase: EasingPhase,
        overshoot: f64,
    ) -> Result<RunHandle, DriverError> {
        let extras = CurveExtras {
            overshoot,
            ..self.config().default_extras()
        };
        self.start(params, CurveFamily::Back, phase, extras, step_delay, channel)
    }

    pub fn start_bounce<C: DeliveryChannel>(
        &self,
        channel: C,
        params: AnimationParameters,
        step_delay: Duration,
        phase: EasingPhase,
    ) -> Result<RunHandle, DriverError> {
        self.start_plain(CurveFamily::Bounce, channel, params, step_delay, phase)
    }
}
