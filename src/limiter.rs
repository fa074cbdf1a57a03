use crate::exponent::SmoothingExponent;

/// Default maximum per-call output step.
const DEFAULT_RATE_LIMIT: i32 = 5;
/// Default hysteresis band around the input.
const DEFAULT_HYSTERESIS_BAND: i32 = 2;

/// Bounded-step signal conditioner.
///
/// Tracks an integer input stream with an output whose per-call change
/// is limited. The allowance is either fixed (`rate_limit`) or grows
/// with the distance between input and output (adaptive slope). A
/// hysteresis band snaps small residual gaps to the input at once.
pub struct SlewRateLimiter {
    last_output: i32,
    ema: i32,
    initialized: bool,
    exponent: SmoothingExponent,
    rate_limit: i32,
    hysteresis_band: i32,
    /// Adaptive gain in Q7 (128 is a 1:1 slope); 0 selects fixed mode.
    slope_q7: i32,
}

impl SlewRateLimiter {
    /// New limiter with the default configuration:
    /// weight 4/1024, rate limit 5, hysteresis band 2, fixed mode.
    pub const fn new() -> Self {
        Self::with_params(
            SmoothingExponent::Weight4,
            DEFAULT_RATE_LIMIT,
            DEFAULT_HYSTERESIS_BAND,
            0,
        )
    }

    /// New limiter with explicit configuration.
    ///
    /// The adaptive slope is given in percent; 0 selects fixed mode
    /// and 100 adds the full input-to-output distance to the allowance.
    pub const fn with_params(
        exponent: SmoothingExponent,
        rate_limit: i32,
        hysteresis_band: i32,
        adaptive_slope_percent: i32,
    ) -> Self {
        Self {
            last_output: 0,
            ema: 0,
            initialized: false,
            exponent,
            rate_limit,
            hysteresis_band,
            slope_q7: scale_slope(adaptive_slope_percent),
        }
    }

    /// Process one input sample and return the bounded output.
    ///
    /// The first call after construction or [`reset`](Self::reset)
    /// seeds the history and returns `input` unchanged. Every further
    /// call steps the output toward `input` by at most the current
    /// allowance and then applies the hysteresis gate.
    pub fn process(&mut self, input: i32) -> i32 {
        if !self.initialized {
            // Seed the history from the first sample instead of
            // slewing up from an arbitrary zero baseline.
            self.initialized = true;
            self.last_output = input;
            self.ema = input;
            return input;
        }

        self.ema = update_ema(input, self.ema, self.exponent);

        let delta = input as i64 - self.last_output as i64;
        let allowed = self.allowance(delta);

        let last = self.last_output as i64;
        let stepped = if delta > allowed {
            last + allowed
        } else if delta < -allowed {
            last - allowed
        } else {
            // The remaining gap is within the allowance; close it fully.
            input as i64
        };
        let mut out = sat_i32(stepped);

        // Hysteresis gate: a small residual gap collapses immediately.
        if (input as i64 - out as i64).abs() <= self.hysteresis_band as i64 {
            out = input;
        }

        self.last_output = out;
        out
    }

    /// Per-call change allowance for the given input-to-output distance.
    fn allowance(&self, delta: i64) -> i64 {
        let mut allowed = self.rate_limit as i64;
        if self.slope_q7 != 0 {
            // The adaptive term follows the distance of the raw input
            // from the last output, not from the EMA.
            allowed += (delta.abs() * self.slope_q7 as i64) >> 7;
        }
        allowed
    }

    /// Replace the fixed per-call step limit.
    pub fn set_rate_limit(&mut self, limit: i32) {
        self.rate_limit = limit;
    }

    /// Replace the hysteresis band.
    pub fn set_hysteresis_band(&mut self, band: i32) {
        self.hysteresis_band = band;
    }

    /// Replace the EMA smoothing weight.
    pub fn set_smoothing_exponent(&mut self, exponent: SmoothingExponent) {
        self.exponent = exponent;
    }

    /// Set the adaptive slope in percent; 0 selects fixed mode.
    ///
    /// The percentage is converted once to the internal Q7 gain with
    /// `(percent * 128 + 50) / 100`, truncating division. For negative
    /// percentages this is the truncated biased quotient; the resulting
    /// negative gain shrinks the allowance.
    pub fn set_adaptive_slope(&mut self, percent: i32) {
        self.slope_q7 = scale_slope(percent);
    }

    /// Clear the history. Configuration is preserved and the next
    /// [`process`](Self::process) call behaves like the first.
    pub fn reset(&mut self) {
        self.initialized = false;
        self.last_output = 0;
        self.ema = 0;
    }

    /// Last returned output. `None` until a sample has been processed.
    pub fn output(&self) -> Option<i32> {
        if self.initialized {
            Some(self.last_output)
        } else {
            None
        }
    }

    /// Current EMA of the input. `None` until a sample has been processed.
    pub fn ema(&self) -> Option<i32> {
        if self.initialized {
            Some(self.ema)
        } else {
            None
        }
    }
}

impl Default for SlewRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// One step of the EMA recurrence `ema + (input - ema) * 2^shift / 1024`,
/// reordered to multiply-and-divide form.
///
/// The division truncates toward zero: `-400 / 1024` is 0, not -1.
const fn update_ema(input: i32, ema: i32, exponent: SmoothingExponent) -> i32 {
    let input = input as i64;
    let ema = ema as i64;
    let weight = exponent.weight() as i64;
    ((input * weight + ema * 1024 - ema * weight) / 1024) as i32
}

/// Convert a slope percentage to the internal Q7 gain,
/// rounding half up for non-negative percentages.
const fn scale_slope(percent: i32) -> i32 {
    sat_i32((percent as i64 * 128 + 50) / 100)
}

/// Saturating fold-back to `i32`.
const fn sat_i32(v: i64) -> i32 {
    if v < i32::MIN as i64 {
        i32::MIN
    } else if v > i32::MAX as i64 {
        i32::MAX
    } else {
        v as i32
    }
}


// vim: ts=4 sw=4 expandtab
