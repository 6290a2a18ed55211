//! Dashboard fixtures and the SVG geometry behind its charts.
//!
//! The charts are hand-rolled SVG; the path math lives here so it can be
//! tested without a renderer. All coordinates are in SVG user space with
//! the y axis pointing down.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyVolume {
    pub month: &'static str,
    pub tons: f64,
}

/// Seven months of export volume for the trend chart.
pub static EXPORT_VOLUME: [MonthlyVolume; 7] = [
    MonthlyVolume { month: "Jan", tons: 420.0 },
    MonthlyVolume { month: "Feb", tons: 450.0 },
    MonthlyVolume { month: "Mar", tons: 410.0 },
    MonthlyVolume { month: "Apr", tons: 480.0 },
    MonthlyVolume { month: "May", tons: 520.0 },
    MonthlyVolume { month: "Jun", tons: 560.0 },
    MonthlyVolume { month: "Jul", tons: 590.0 },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductShare {
    pub name: &'static str,
    pub percent: f64,
    pub color: &'static str,
}

/// Export share by wood type for the distribution donut.
pub static PRODUCT_MIX: [ProductShare; 4] = [
    ProductShare { name: "Coffee Wood", percent: 35.0, color: "#10b981" },
    ProductShare { name: "Eucalyptus", percent: 25.0, color: "#3b82f6" },
    ProductShare { name: "Ko Nia", percent: 20.0, color: "#f59e0b" },
    ProductShare { name: "Sawdust", percent: 20.0, color: "#8b5cf6" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatFigure {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

pub static STAT_FIGURES: [StatFigure; 4] = [
    StatFigure { title: "Total Exports", value: "3,450 T", change: "+12.5%", trend: Trend::Up },
    StatFigure { title: "Active Shipments", value: "24", change: "+2", trend: Trend::Up },
    StatFigure { title: "Global Partners", value: "48", change: "+3", trend: Trend::Up },
    StatFigure { title: "Revenue (Est)", value: "$1.2M", change: "+8.2%", trend: Trend::Up },
];

/// Chart points for `values`, spread evenly across `width` and scaled
/// against the series maximum so the peak touches the top edge.
pub fn chart_points(values: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    let max = values.iter().cloned().fold(f64::NAN, f64::max);
    if values.len() < 2 || !(max > 0.0) {
        return Vec::new();
    }
    let step = width / (values.len() - 1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64 * step, height - (v / max) * height))
        .collect()
}

/// `points` attribute for an SVG polyline over the series.
pub fn polyline_points(values: &[f64], width: f64, height: f64) -> String {
    chart_points(values, width, height)
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed area path under the series: the polyline dropped to the
/// baseline at both ends.
pub fn area_path(values: &[f64], width: f64, height: f64) -> String {
    let points = chart_points(values, width, height);
    let Some(((first_x, first_y), (last_x, _))) = points.first().zip(points.last()).map(|(f, l)| (*f, *l))
    else {
        return String::new();
    };
    let mut path = format!("M {first_x:.1} {first_y:.1}");
    for (x, y) in points.iter().skip(1) {
        path.push_str(&format!(" L {x:.1} {y:.1}"));
    }
    path.push_str(&format!(
        " L {last_x:.1} {height:.1} L {first_x:.1} {height:.1} Z"
    ));
    path
}

/// Cumulative `(start, end)` fractions of a full turn for each share, in
/// fixture order, normalized by the total.
pub fn mix_fractions(shares: &[ProductShare]) -> Vec<(f64, f64)> {
    let total: f64 = shares.iter().map(|s| s.percent).sum();
    if !(total > 0.0) {
        return Vec::new();
    }
    let mut cursor = 0.0;
    shares
        .iter()
        .map(|share| {
            let start = cursor;
            cursor += share.percent / total;
            (start, cursor)
        })
        .collect()
}

fn polar(cx: f64, cy: f64, radius: f64, turn: f64) -> (f64, f64) {
    // Turn 0 points straight up.
    let angle = (turn - 0.25) * std::f64::consts::TAU;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// SVG path for one donut slice between `start` and `end` (fractions of a
/// full turn, clockwise from the top).
pub fn donut_slice_path(
    cx: f64,
    cy: f64,
    outer: f64,
    inner: f64,
    start: f64,
    end: f64,
) -> String {
    let large_arc = i32::from(end - start > 0.5);
    let (ox0, oy0) = polar(cx, cy, outer, start);
    let (ox1, oy1) = polar(cx, cy, outer, end);
    let (ix1, iy1) = polar(cx, cy, inner, end);
    let (ix0, iy0) = polar(cx, cy, inner, start);
    format!(
        "M {ox0:.2} {oy0:.2} A {outer:.2} {outer:.2} 0 {large_arc} 1 {ox1:.2} {oy1:.2} \
         L {ix1:.2} {iy1:.2} A {inner:.2} {inner:.2} 0 {large_arc} 0 {ix0:.2} {iy0:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volumes() -> Vec<f64> {
        EXPORT_VOLUME.iter().map(|m| m.tons).collect()
    }

    #[test]
    fn product_mix_sums_to_one_hundred_percent() {
        let total: f64 = PRODUCT_MIX.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn chart_points_span_the_width_and_peak_at_the_top() {
        let points = chart_points(&volumes(), 640.0, 200.0);
        assert_eq!(points.len(), EXPORT_VOLUME.len());
        assert_eq!(points.first().unwrap().0, 0.0);
        assert!((points.last().unwrap().0 - 640.0).abs() < 1e-9);
        // July is the series max, so its y is the top edge.
        assert!(points.last().unwrap().1.abs() < 1e-9);
        assert!(points.iter().all(|(_, y)| (0.0..=200.0).contains(y)));
    }

    #[test]
    fn area_path_closes_on_the_baseline() {
        let path = area_path(&volumes(), 640.0, 200.0);
        assert!(path.starts_with("M 0.0"));
        assert!(path.ends_with("Z"));
        assert!(path.contains("L 0.0 200.0"));
    }

    #[test]
    fn degenerate_series_produce_empty_geometry() {
        assert!(chart_points(&[], 640.0, 200.0).is_empty());
        assert!(chart_points(&[5.0], 640.0, 200.0).is_empty());
        assert_eq!(area_path(&[], 640.0, 200.0), "");
        assert!(mix_fractions(&[]).is_empty());
    }

    #[test]
    fn mix_fractions_are_contiguous_and_cover_the_turn() {
        let fractions = mix_fractions(&PRODUCT_MIX);
        assert_eq!(fractions.len(), PRODUCT_MIX.len());
        assert_eq!(fractions[0].0, 0.0);
        for pair in fractions.windows(2) {
            assert!((pair[0].1 - pair[1].0).abs() < 1e-12);
        }
        assert!((fractions.last().unwrap().1 - 1.0).abs() < 1e-12);
        // Largest share takes the widest slice.
        assert!((fractions[0].1 - fractions[0].0 - 0.35).abs() < 1e-12);
    }

    #[test]
    fn donut_slice_path_is_well_formed() {
        let path = donut_slice_path(144.0, 144.0, 90.0, 70.0, 0.0, 0.35);
        assert!(path.starts_with("M "));
        assert!(path.ends_with("Z"));
        // Slice under half a turn uses the small arc flag.
        assert!(path.contains(" 0 0 1 "));
        let over_half = donut_slice_path(144.0, 144.0, 90.0, 70.0, 0.0, 0.6);
        assert!(over_half.contains(" 0 1 1 "));
    }
}
