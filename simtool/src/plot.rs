// -*- coding: utf-8 -*-

use crate::Record;
use anyhow as ah;
use plotters::prelude::*;
use std::path::Path;

/// Value axis range covering all three traces, with a small margin.
fn value_range(records: &[Record]) -> (i64, i64) {
    let mut lo = i64::MAX;
    let mut hi = i64::MIN;
    for r in records {
        for v in [r.input as i64, r.ema as i64, r.output as i64] {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if lo > hi {
        return (-1, 1);
    }
    let pad = ((hi - lo) / 20).max(1);
    (lo - pad, hi + pad)
}

/// Render the input/EMA/output traces to an SVG file.
pub fn render_svg(path: &Path, records: &[Record]) -> ah::Result<()> {
    let area = SVGBackend::new(path, (800, 600)).into_drawing_area();
    area.fill(&WHITE)?;

    let n = (records.len() as i64).max(1);
    let (lo, hi) = value_range(records);

    let mut chart = ChartBuilder::on(&area)
        .caption("slewlimit", ("sans-serif", 12).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0..n, lo..hi)?;
    chart
        .configure_mesh()
        .x_desc("sample")
        .y_desc("value")
        .draw()?;
    chart
        .draw_series(LineSeries::new(
            records
                .iter()
                .enumerate()
                .map(|(i, r)| (i as i64, r.input as i64)),
            &RED,
        ))?
        .label("input")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
    chart
        .draw_series(LineSeries::new(
            records
                .iter()
                .enumerate()
                .map(|(i, r)| (i as i64, r.ema as i64)),
            &GREEN,
        ))?
        .label("ema")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));
    chart
        .draw_series(LineSeries::new(
            records
                .iter()
                .enumerate()
                .map(|(i, r)| (i as i64, r.output as i64)),
            &BLUE,
        ))?
        .label("output")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart
        .configure_series_labels()
        .background_style(&WHITE)
        .border_style(&BLACK)
        .draw()?;
    area.present()?;
    Ok(())
}

// vim: ts=4 sw=4 expandtab
