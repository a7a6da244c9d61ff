use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::core::trajectory::TrajectorySample;
use crate::core::window::AxisLimits;
use crate::error::OutputError;

pub const CHART_TITLE: &str = "Nerf Dart Trajectory";
pub const X_AXIS_LABEL: &str = "Horizontal Distance (m)";
pub const Y_AXIS_LABEL: &str = "Vertical Height (m)";
pub const CHART_SIZE_PX: (u32, u32) = (1024, 640);

const LAUNCH_COLOR: RGBColor = RGBColor(245, 89, 89);
const PATH_COLOR: RGBColor = RGBColor(54, 123, 245);
const IMPACT_COLOR: RGBColor = RGBColor(81, 201, 122);

/// Draws the trajectory to `path`. A `.svg` extension selects the SVG
/// backend, anything else is written as a bitmap.
pub fn render_chart(
    path: &Path,
    samples: &[TrajectorySample],
    limits: AxisLimits,
) -> Result<(), OutputError> {
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    let drawn = if is_svg {
        let root = SVGBackend::new(path, CHART_SIZE_PX).into_drawing_area();
        draw_trajectory(&root, samples, limits)
    } else {
        let root = BitMapBackend::new(path, CHART_SIZE_PX).into_drawing_area();
        draw_trajectory(&root, samples, limits)
    };

    drawn.map_err(|reason| OutputError::Chart {
        path: path.to_path_buf(),
        reason,
    })?;
    log::info!("chart written to {}", path.display());
    Ok(())
}

fn draw_trajectory<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    samples: &[TrajectorySample],
    limits: AxisLimits,
) -> Result<(), String> {
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let mut chart = ChartBuilder::on(root)
        .caption(CHART_TITLE, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(limits.x_min..limits.x_max, limits.y_min..limits.y_max)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.x_m, s.y_m)),
            PATH_COLOR.stroke_width(3),
        ))
        .map_err(|e| e.to_string())?;

    if let (Some(first), Some(last)) = (samples.first(), samples.last()) {
        chart
            .draw_series(std::iter::once(Circle::new(
                (first.x_m, first.y_m),
                6,
                LAUNCH_COLOR.filled(),
            )))
            .map_err(|e| e.to_string())?;
        chart
            .draw_series(std::iter::once(Circle::new(
                (last.x_m, last.y_m),
                6,
                IMPACT_COLOR.filled(),
            )))
            .map_err(|e| e.to_string())?;
    }

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}
