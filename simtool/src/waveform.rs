// -*- coding: utf-8 -*-

use clap::ValueEnum;
use rand::{RngExt as _, SeedableRng as _, rngs::StdRng};

/// Input signal shape.
#[derive(ValueEnum, Copy, Clone, Debug)]
pub enum Wave {
    /// 0 for the first half of each period, the amplitude for the second.
    Step,
    /// Alternates between the amplitude and its negative every half period.
    Square,
    /// Linear ramp between the negative and positive amplitude.
    Triangle,
    /// Constant amplitude. Useful to watch pure noise rejection.
    Constant,
}

/// Synthetic input signal generator with optional uniform noise.
pub struct Waveform {
    wave: Wave,
    amplitude: i32,
    period: u32,
    noise: i32,
    rng: StdRng,
}

impl Waveform {
    pub fn new(wave: Wave, amplitude: i32, period: u32, noise: i32, seed: u64) -> Self {
        Self {
            wave,
            amplitude,
            period: period.max(2),
            noise,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Clean sample of the selected shape at tick `n`.
    fn shape(&self, n: u32) -> i32 {
        let phase = n % self.period;
        let half = self.period / 2;
        match self.wave {
            Wave::Step => {
                if phase < half {
                    0
                } else {
                    self.amplitude
                }
            }
            Wave::Square => {
                if phase < half {
                    self.amplitude
                } else {
                    self.amplitude.saturating_neg()
                }
            }
            Wave::Triangle => {
                let pos = if phase < half { phase } else { self.period - phase };
                let pos = pos.min(half) as i64;
                let amp = self.amplitude as i64;
                (-amp + 2 * amp * pos / half as i64) as i32
            }
            Wave::Constant => self.amplitude,
        }
    }

    /// Sample at tick `n`, with noise applied if configured.
    pub fn sample(&mut self, n: u32) -> i32 {
        let clean = self.shape(n);
        if self.noise > 0 {
            clean.saturating_add(self.rng.random_range(-self.noise..=self.noise))
        } else {
            clean
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_step_shape() {
        let mut wav = Waveform::new(Wave::Step, 100, 10, 0, 0);
        for n in 0..5 {
            assert_eq!(wav.sample(n), 0);
        }
        for n in 5..10 {
            assert_eq!(wav.sample(n), 100);
        }
        assert_eq!(wav.sample(10), 0);
    }

    #[test]
    fn test_square_shape() {
        let mut wav = Waveform::new(Wave::Square, 50, 4, 0, 0);
        assert_eq!(wav.sample(0), 50);
        assert_eq!(wav.sample(1), 50);
        assert_eq!(wav.sample(2), -50);
        assert_eq!(wav.sample(3), -50);
        assert_eq!(wav.sample(4), 50);
    }

    #[test]
    fn test_triangle_shape() {
        let mut wav = Waveform::new(Wave::Triangle, 100, 8, 0, 0);
        assert_eq!(wav.sample(0), -100);
        assert_eq!(wav.sample(2), 0);
        assert_eq!(wav.sample(4), 100);
        assert_eq!(wav.sample(6), 0);
        assert_eq!(wav.sample(8), -100);
    }

    #[test]
    fn test_constant_shape() {
        let mut wav = Waveform::new(Wave::Constant, 7, 10, 0, 0);
        for n in 0..20 {
            assert_eq!(wav.sample(n), 7);
        }
    }

    #[test]
    fn test_period_floor() {
        // A degenerate period is raised to 2.
        let mut wav = Waveform::new(Wave::Square, 5, 0, 0, 0);
        assert_eq!(wav.sample(0), 5);
        assert_eq!(wav.sample(1), -5);
    }

    #[test]
    fn test_noise_bounds_and_determinism() {
        let mut a = Waveform::new(Wave::Constant, 0, 10, 7, 123);
        let mut b = Waveform::new(Wave::Constant, 0, 10, 7, 123);
        for n in 0..100 {
            let x = a.sample(n);
            assert!((-7..=7).contains(&x));
            assert_eq!(x, b.sample(n));
        }
    }
}

// vim: ts=4 sw=4 expandtab
