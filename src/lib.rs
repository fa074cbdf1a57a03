//! Integer slew-rate limiting for embedded control loops.
//!
//! [`SlewRateLimiter`] bounds the per-call change of an integer sample
//! stream. It runs an exponential moving average over the input, limits
//! the output step to a fixed or adaptive allowance and snaps small
//! residual gaps through a hysteresis band. All arithmetic is integer
//! only and every call completes in constant time without allocating.

#![no_std]

mod exponent;
mod limiter;

pub use crate::exponent::SmoothingExponent;
pub use crate::limiter::SlewRateLimiter;

// vim: ts=4 sw=4 expandtab
