//! Inline-SVG area chart for the sample applications series.
//!
//! Geometry is computed up front from the static series; the only runtime
//! state is which point the cursor is over, held as an `Option<usize>`
//! signal and used to reveal the matching value marker.

use leptos::prelude::*;
use talenthub_content::ChartPoint;

/// Drawing surface in SVG user units.
const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 300.0;
/// Plot-box padding; leaves room for the axis labels.
const PAD_X: f64 = 40.0;
const PAD_Y: f64 = 28.0;
/// Headroom above the series maximum (recharts-style auto domain).
const Y_HEADROOM: f64 = 1.1;
/// Horizontal gridline count (plot box divisions).
const GRID_ROWS: usize = 4;

/// Scale the series into plot coordinates, index order preserved.
pub(crate) fn scale_points(data: &[ChartPoint]) -> Vec<(f64, f64)> {
    let top = data.iter().map(|p| p.apps).max().unwrap_or(0) as f64 * Y_HEADROOM;
    let span_x = WIDTH - 2.0 * PAD_X;
    let span_y = HEIGHT - 2.0 * PAD_Y;
    let step = if data.len() > 1 {
        span_x / (data.len() - 1) as f64
    } else {
        0.0
    };

    data.iter()
        .enumerate()
        .map(|(i, p)| {
            let x = PAD_X + step * i as f64;
            let y = if top > 0.0 {
                HEIGHT - PAD_Y - (p.apps as f64 / top) * span_y
            } else {
                HEIGHT - PAD_Y
            };
            (x, y)
        })
        .collect()
}

/// `M x y L x y ...` polyline through the scaled points.
pub(crate) fn line_path(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{cmd}{x:.1} {y:.1} "));
    }
    path.trim_end().to_string()
}

/// The polyline closed down to the baseline, for the gradient fill.
pub(crate) fn area_path(points: &[(f64, f64)]) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let base = HEIGHT - PAD_Y;
    format!(
        "{} L{:.1} {base:.1} L{:.1} {base:.1} Z",
        line_path(points),
        last.0,
        first.0
    )
}

/// Monochrome area chart with gridlines, axis labels, and hover markers.
#[component]
pub fn AreaChart(
    /// Static series to plot
    data: &'static [ChartPoint],
) -> impl IntoView {
    let points = scale_points(data);
    let top = data.iter().map(|p| p.apps).max().unwrap_or(0) as f64 * Y_HEADROOM;
    let (hovered, set_hovered) = signal(None::<usize>);

    let grid = (0..=GRID_ROWS)
        .map(|row| {
            let y = PAD_Y + (HEIGHT - 2.0 * PAD_Y) * row as f64 / GRID_ROWS as f64;
            let value = top * (GRID_ROWS - row) as f64 / GRID_ROWS as f64;
            view! {
                <g>
                    <line
                        x1=format!("{PAD_X:.1}")
                        y1=format!("{y:.1}")
                        x2=format!("{:.1}", WIDTH - PAD_X)
                        y2=format!("{y:.1}")
                        class="chart-grid"
                        stroke-dasharray="3 3"
                    />
                    <text
                        x=format!("{:.1}", PAD_X - 10.0)
                        y=format!("{:.1}", y + 4.0)
                        text-anchor="end"
                        class="chart-axis"
                    >
                        {format!("{value:.0}")}
                    </text>
                </g>
            }
        })
        .collect_view();

    let markers = points
        .iter()
        .copied()
        .enumerate()
        .map(|(i, (x, y))| {
            let label = data[i].name;
            let value = data[i].apps;
            view! {
                <g
                    on:mouseenter=move |_| set_hovered.set(Some(i))
                    on:mouseleave=move |_| set_hovered.set(None)
                >
                    // generous invisible hit area around the dot
                    <circle cx=format!("{x:.1}") cy=format!("{y:.1}") r="14" class="chart-hit" />
                    <circle
                        cx=format!("{x:.1}")
                        cy=format!("{y:.1}")
                        r="3.5"
                        class=move || {
                            if hovered.get() == Some(i) {
                                "chart-dot chart-dot-active"
                            } else {
                                "chart-dot"
                            }
                        }
                    />
                    <text
                        x=format!("{x:.1}")
                        y=format!("{:.1}", HEIGHT - 8.0)
                        text-anchor="middle"
                        class="chart-axis"
                    >
                        {label}
                    </text>
                    <g class=move || {
                        if hovered.get() == Some(i) { "chart-tip chart-tip-visible" } else { "chart-tip" }
                    }>
                        <rect
                            x=format!("{:.1}", x - 18.0)
                            y=format!("{:.1}", y - 36.0)
                            width="36"
                            height="24"
                            rx="6"
                            class="chart-tip-box"
                        />
                        <text
                            x=format!("{x:.1}")
                            y=format!("{:.1}", y - 20.0)
                            text-anchor="middle"
                            class="chart-tip-text"
                        >
                            {value}
                        </text>
                    </g>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg
            viewBox=format!("0 0 {WIDTH:.0} {HEIGHT:.0}")
            class="chart"
            role="img"
            aria-label="Applications per day"
        >
            <defs>
                <linearGradient id="chart-fill" x1="0" y1="0" x2="0" y2="1">
                    <stop offset="5%" stop-color="#ffffff" stop-opacity="0.3" />
                    <stop offset="95%" stop-color="#ffffff" stop-opacity="0" />
                </linearGradient>
            </defs>
            {grid}
            <path d=area_path(&points) fill="url(#chart-fill)" stroke="none" />
            <path d=line_path(&points) class="chart-line" fill="none" />
            {markers}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talenthub_content::page::WEEKLY_APPLICATIONS;

    #[test]
    fn one_plot_point_per_sample() {
        let points = scale_points(&WEEKLY_APPLICATIONS);
        assert_eq!(points.len(), 7);
    }

    #[test]
    fn x_positions_increase_across_the_plot_span() {
        let points = scale_points(&WEEKLY_APPLICATIONS);
        assert!((points[0].0 - PAD_X).abs() < 1e-9);
        assert!((points[points.len() - 1].0 - (WIDTH - PAD_X)).abs() < 1e-9);
        for pair in points.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn y_positions_stay_inside_the_plot_box() {
        let points = scale_points(&WEEKLY_APPLICATIONS);
        for (_, y) in &points {
            assert!(*y >= PAD_Y && *y <= HEIGHT - PAD_Y);
        }
    }

    #[test]
    fn peak_value_sits_highest() {
        let points = scale_points(&WEEKLY_APPLICATIONS);
        // Saturday (index 5, value 23) is the series maximum; smaller y is higher
        let peak_y = points[5].1;
        for (i, (_, y)) in points.iter().enumerate() {
            if i != 5 {
                assert!(peak_y < *y);
            }
        }
    }

    #[test]
    fn paths_are_well_formed() {
        let points = scale_points(&WEEKLY_APPLICATIONS);
        let line = line_path(&points);
        assert!(line.starts_with('M'));
        assert_eq!(line.matches('L').count(), 6);

        let area = area_path(&points);
        assert!(area.starts_with('M'));
        assert!(area.ends_with('Z'));
    }

    #[test]
    fn empty_series_yields_empty_paths() {
        assert_eq!(scale_points(&[]), vec![]);
        assert_eq!(line_path(&[]), "");
        assert_eq!(area_path(&[]), "");
    }
}
