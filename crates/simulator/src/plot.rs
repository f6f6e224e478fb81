use crate::error::BenchError;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

fn plot_err<E: std::fmt::Display>(e: E) -> BenchError {
    BenchError::Plot(e.to_string())
}

/// SVG line chart of `history` with a dashed line at `exact`.
pub fn plot_convergence(path: &Path, history: &[f64], exact: f64) -> Result<(), BenchError> {
    let x_max = history.len().max(1) as f64;
    let (lo, hi) = history
        .iter()
        .fold((exact, exact), |(lo, hi), &e| (lo.min(e), hi.max(e)));
    let pad = ((hi - lo) * 0.05).max(1e-3);

    let root = SVGBackend::new(path, (900, 540)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("VQE convergence", ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..x_max, (lo - pad)..(hi + pad))
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Evaluation")
        .y_desc("Energy")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            history.iter().enumerate().map(|(i, &e)| ((i + 1) as f64, e)),
            BLUE.stroke_width(2),
        ))
        .map_err(plot_err)?
        .label("VQE energy")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(DashedLineSeries::new(
            vec![(0.0, exact), (x_max, exact)],
            8,
            6,
            RED.stroke_width(2),
        ))
        .map_err(plot_err)?
        .label(format!("Exact ({:.6})", exact))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)
}
