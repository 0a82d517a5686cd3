//! Pure SVG geometry for the spin wheel, shared so the layout math stays
//! testable off the browser. The wheel lives in a `-50 -50 100 100`
//! viewBox with sector 0 starting at the top pointer and sectors laid out
//! clockwise by catalog index.

use std::f64::consts::PI;

pub const WHEEL_RADIUS: f64 = 45.0;
pub const SLOT_PADDING: f64 = 6.0;

/// Path data for one pie slice. A single-entry catalog degenerates to a
/// full circle, which SVG arcs cannot express in one segment, so that
/// case is drawn as two half circles.
pub fn sector_path(index: usize, count: usize, radius: f64) -> String {
    if count <= 1 {
        return format!(
            "M 0 {:.4} A {r:.4} {r:.4} 0 1 1 0 {:.4} A {r:.4} {r:.4} 0 1 1 0 {:.4} Z",
            -radius,
            radius,
            -radius,
            r = radius
        );
    }

    let start = index as f64 / count as f64 * 2.0 * PI;
    let end = (index + 1) as f64 / count as f64 * 2.0 * PI;
    let x1 = start.sin() * radius;
    let y1 = -start.cos() * radius;
    let x2 = end.sin() * radius;
    let y2 = -end.cos() * radius;
    let large_arc = if end - start <= PI { 0 } else { 1 };

    format!(
        "M 0 0 L {x1:.4} {y1:.4} A {radius:.4} {radius:.4} 0 {large_arc} 1 {x2:.4} {y2:.4} Z"
    )
}

/// Radius of a gift image disc; shrinks as the wheel fills up.
pub fn slot_radius(count: usize) -> f64 {
    (15.0 - count as f64 * 0.5).max(4.0)
}

/// Center of the gift image disc for one sector.
pub fn slot_position(index: usize, count: usize, radius: f64, item_radius: f64) -> (f64, f64) {
    let angle = (index as f64 + 0.5) / count as f64 * 2.0 * PI;
    let distance = radius - item_radius - SLOT_PADDING;
    (distance * angle.sin(), -(distance * angle.cos()))
}

/// Evenly spaced hues so neighboring sectors stay distinguishable at any
/// catalog size.
pub fn segment_color(index: usize, count: usize) -> String {
    let hue = index as f64 * (360.0 / count.max(1) as f64);
    format!("hsl({hue:.0}, 75%, 65%)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_path_quarters() {
        // With four sectors, sector 0 spans from straight up to the right.
        let path = sector_path(0, 4, 40.0);
        assert!(path.starts_with("M 0 0 L 0.0000 -40.0000 A 40.0000 40.0000 0 0 1 40.0000"));
        assert!(path.ends_with("Z"));
    }

    #[test]
    fn test_single_sector_is_a_full_circle() {
        let path = sector_path(0, 1, 45.0);
        assert!(path.starts_with("M 0 -45.0000 A 45.0000 45.0000 0 1 1"));
    }

    #[test]
    fn test_wide_sector_uses_large_arc_flag() {
        // Two sectors of 180 degrees sit on the boundary; three entries
        // drop below it, a single "majority" slice above it needs the flag.
        let narrow = sector_path(0, 3, 40.0);
        assert!(narrow.contains(" 0 0 1 "));
    }

    #[test]
    fn test_slot_radius_clamps() {
        assert!((slot_radius(2) - 14.0).abs() < f64::EPSILON);
        assert!((slot_radius(40) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_slot_position_is_inside_the_wheel() {
        for count in 1..12usize {
            let item = slot_radius(count);
            for index in 0..count {
                let (x, y) = slot_position(index, count, WHEEL_RADIUS, item);
                let distance = (x * x + y * y).sqrt();
                assert!(distance + item <= WHEEL_RADIUS + 1e-9, "count={count} index={index}");
            }
        }
    }

    #[test]
    fn test_segment_colors_are_evenly_spaced() {
        assert_eq!(segment_color(0, 4), "hsl(0, 75%, 65%)");
        assert_eq!(segment_color(1, 4), "hsl(90, 75%, 65%)");
        assert_eq!(segment_color(3, 4), "hsl(270, 75%, 65%)");
    }
}
