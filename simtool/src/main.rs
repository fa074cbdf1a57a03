// -*- coding: utf-8 -*-

#![forbid(unsafe_code)]

mod plot;
mod waveform;

use crate::waveform::{Wave, Waveform};
use anyhow::{self as ah, Context as _};
use clap::Parser;
use slewlimit::{SlewRateLimiter, SmoothingExponent};
use std::path::PathBuf;

/// One tick of the limiter trace.
pub struct Record {
    pub input: i32,
    pub ema: i32,
    pub output: i32,
}

#[derive(Parser, Debug)]
struct Opts {
    /// Input signal shape.
    #[arg(long, value_enum, default_value = "step")]
    wave: Wave,

    /// Number of samples to run.
    #[arg(long, default_value_t = 200)]
    samples: u32,

    /// Peak value of the input signal.
    #[arg(long, default_value_t = 1000)]
    amplitude: i32,

    /// Waveform period, in samples.
    #[arg(long, default_value_t = 100)]
    period: u32,

    /// Uniform noise amplitude added to the input. 0 disables noise.
    #[arg(long, default_value_t = 0)]
    noise: i32,

    /// Noise RNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Smoothing exponent shift. The EMA weight is 2^shift/1024.
    #[arg(long, default_value_t = 2)]
    exponent: u8,

    /// Maximum per-sample output step.
    #[arg(long, default_value_t = 5)]
    rate_limit: i32,

    /// Hysteresis band around the input.
    #[arg(long, default_value_t = 2)]
    hysteresis: i32,

    /// Adaptive slope in percent. 0 selects fixed mode.
    #[arg(long, default_value_t = 0)]
    slope: i32,

    /// Render the traces to this SVG file.
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> ah::Result<()> {
    let opts = Opts::parse();

    let exponent = SmoothingExponent::from_shift(opts.exponent)
        .context("--exponent must be in the range 0..=9")?;
    let mut lim = SlewRateLimiter::with_params(
        exponent,
        opts.rate_limit,
        opts.hysteresis,
        opts.slope,
    );
    let mut wav = Waveform::new(
        opts.wave,
        opts.amplitude,
        opts.period,
        opts.noise,
        opts.seed,
    );

    let mut records = Vec::with_capacity(opts.samples as usize);
    println!("n,input,ema,output");
    for n in 0..opts.samples {
        let input = wav.sample(n);
        let output = lim.process(input);
        let ema = lim.ema().unwrap_or(input);
        println!("{n},{input},{ema},{output}");
        records.push(Record { input, ema, output });
    }

    if let Some(path) = &opts.svg {
        plot::render_svg(path, &records).context("Render SVG")?;
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

// vim: ts=4 sw=4 expandtab
