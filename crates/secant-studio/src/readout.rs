use secant_geometry::{Circle, LineSegment, Point2};

use crate::tool::Construction;

pub fn circle_label(circle: &Circle) -> String {
    format!(
        "Circle: center ({:.2}, {:.2}) radius = {:.2}",
        circle.center.x, circle.center.y, circle.radius
    )
}

pub fn segment_label(segment: &LineSegment) -> String {
    format!(
        "Line segment: ({:.2}, {:.2}) ~ ({:.2}, {:.2})",
        segment.start.x, segment.start.y, segment.end.x, segment.end.y
    )
}

pub fn intersection_label(points: &[Point2]) -> String {
    if points.is_empty() {
        return "No Intersection".to_string();
    }

    let listed: String = points
        .iter()
        .enumerate()
        .map(|(i, p)| format!(" Point {}: ({:.2}, {:.2})", i + 1, p.x, p.y))
        .collect();
    format!("Intersection Points: {}{listed}", points.len())
}

/// Text describing the committed construction, one line per shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Readout {
    lines: Vec<String>,
}

impl Readout {
    pub fn from_construction(construction: &Construction) -> Self {
        let mut lines = Vec::with_capacity(3);

        if let Some(circle) = construction.circle.and_then(|s| s.circle()) {
            lines.push(circle_label(&circle));
        }
        if let Some(segment) = construction.segment.and_then(|s| s.segment()) {
            lines.push(segment_label(&segment));
        }
        if let Some(hits) = construction.intersections() {
            lines.push(intersection_label(&hits));
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `base` followed by every line, separated by `" | "`.
    pub fn title_line(&self, base: &str) -> String {
        std::iter::once(base)
            .chain(self.lines().iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secant_geometry::{ShapeKind, ShapeSpec};

    fn p(x: f32, y: f32) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn circle_label_uses_two_decimals() {
        let c = Circle::new(p(0.123, -0.456), 0.5);
        assert_eq!(circle_label(&c), "Circle: center (0.12, -0.46) radius = 0.50");
    }

    #[test]
    fn segment_label_format() {
        let s = LineSegment::new(p(-1.0, 0.25), p(1.0, -0.257));
        assert_eq!(segment_label(&s), "Line segment: (-1.00, 0.25) ~ (1.00, -0.26)");
    }

    #[test]
    fn intersection_label_variants() {
        assert_eq!(intersection_label(&[]), "No Intersection");
        assert_eq!(
            intersection_label(&[p(0.5, 0.0)]),
            "Intersection Points: 1 Point 1: (0.50, 0.00)"
        );
        assert_eq!(
            intersection_label(&[p(0.5, 0.0), p(-0.5, 0.0)]),
            "Intersection Points: 2 Point 1: (0.50, 0.00) Point 2: (-0.50, 0.00)"
        );
    }

    #[test]
    fn readout_grows_with_construction() {
        let mut construction = Construction::default();
        assert!(Readout::from_construction(&construction).lines().is_empty());

        construction.circle = Some(ShapeSpec::new(ShapeKind::Circle, p(0.0, 0.0), p(0.5, 0.0)));
        let r = Readout::from_construction(&construction);
        assert_eq!(r.lines().len(), 1);

        construction.segment = Some(ShapeSpec::new(ShapeKind::Segment, p(2.0, 2.0), p(3.0, 3.0)));
        let r = Readout::from_construction(&construction);
        assert_eq!(
            r.lines(),
            &[
                "Circle: center (0.00, 0.00) radius = 0.50".to_string(),
                "Line segment: (2.00, 2.00) ~ (3.00, 3.00)".to_string(),
                "No Intersection".to_string(),
            ]
        );
    }

    #[test]
    fn title_line_joins_base_and_lines() {
        let mut construction = Construction::default();
        assert_eq!(Readout::from_construction(&construction).title_line("secant"), "secant");

        construction.circle = Some(ShapeSpec::new(ShapeKind::Circle, p(0.0, 0.0), p(0.0, 1.0)));
        assert_eq!(
            Readout::from_construction(&construction).title_line("secant"),
            "secant | Circle: center (0.00, 0.00) radius = 1.00"
        );
    }
}
