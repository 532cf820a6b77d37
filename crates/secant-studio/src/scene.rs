//! Tool state → draw list.

use secant_engine::paint::Color;
use secant_engine::scene::{DrawList, ZIndex};
use secant_geometry::{Circle, Point2, ShapeSpec};

use crate::config::StudioConfig;
use crate::tool::ToolState;

/// Rebuilds `list` from scratch for the given state.
pub fn build(state: &ToolState, config: &StudioConfig, list: &mut DrawList) {
    list.clear();

    push_axes(config, list);

    let palette = &config.palette;
    let construction = &state.construction;

    if let Some(spec) = construction.circle {
        push_shape(list, ZIndex::CONTENT, spec, palette.circle, config);
    }
    if let Some(spec) = construction.segment {
        push_shape(list, ZIndex::CONTENT, spec, palette.segment, config);
    }
    if let Some(preview) = state.gesture.preview() {
        push_shape(list, ZIndex::CONTENT, preview, palette.preview, config);
    }

    if let Some(hits) = construction.intersections() {
        list.push_points(
            ZIndex::OVERLAY,
            hits.iter().copied(),
            config.point_size,
            palette.intersection,
        );
    }
}

fn push_axes(config: &StudioConfig, list: &mut DrawList) {
    let e = config.axis_extent;
    list.push_line(
        ZIndex::BACKGROUND,
        Point2::new(-e, 0.0),
        Point2::new(e, 0.0),
        config.palette.x_axis,
    );
    list.push_line(
        ZIndex::BACKGROUND,
        Point2::new(0.0, -e),
        Point2::new(0.0, e),
        config.palette.y_axis,
    );
}

fn push_shape(
    list: &mut DrawList,
    z: ZIndex,
    spec: ShapeSpec,
    color: Color,
    config: &StudioConfig,
) {
    match spec {
        ShapeSpec::Circle { center, rim } => {
            let circle = Circle::through(center, rim);
            list.push_line_loop(z, circle.points(config.circle_segments), color);
        }
        ShapeSpec::Segment(segment) => list.push_line(z, segment.start, segment.end, color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::ToolEvent;
    use secant_engine::scene::DrawCmd;

    fn p(x: f32, y: f32) -> Point2 {
        Point2::new(x, y)
    }

    fn built(state: &ToolState) -> (StudioConfig, DrawList) {
        let config = StudioConfig::default();
        let mut list = DrawList::new();
        build(state, &config, &mut list);
        (config, list)
    }

    #[test]
    fn empty_state_draws_axes_only() {
        let (config, list) = built(&ToolState::new());
        assert_eq!(list.items().len(), 2);

        for item in list.items() {
            assert_eq!(item.key.z, ZIndex::BACKGROUND);
            let DrawCmd::Line(line) = &item.cmd else { panic!("axis should be a line") };
            let len = line.from.distance(line.to);
            assert!((len - 2.0 * config.axis_extent).abs() < 1e-6);
        }
    }

    #[test]
    fn circle_preview_is_gray_loop() {
        let (state, _) = ToolState::new().apply_all([
            ToolEvent::PointerDown(p(0.0, 0.0)),
            ToolEvent::PointerMoved(p(0.3, 0.4)),
        ]);
        let (config, list) = built(&state);

        let loops: Vec<_> = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::LineLoop(l) => Some(l),
                _ => None,
            })
            .collect();
        assert_eq!(loops.len(), 1);
        assert_eq!(loops[0].color, config.palette.preview);
        assert_eq!(loops[0].points.len(), config.circle_segments);
        for pt in &loops[0].points {
            assert!((pt.distance(p(0.0, 0.0)) - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn complete_construction_draws_everything() {
        let (state, _) = ToolState::new().apply_all([
            ToolEvent::PointerDown(p(0.0, 0.0)),
            ToolEvent::PointerMoved(p(0.5, 0.0)),
            ToolEvent::PointerUp,
            ToolEvent::PointerDown(p(-1.0, 0.0)),
            ToolEvent::PointerMoved(p(1.0, 0.0)),
            ToolEvent::PointerUp,
        ]);
        let (config, mut list) = built(&state);

        // axes + circle + segment + markers
        assert_eq!(list.items().len(), 5);

        let last = list.iter_in_paint_order().last().unwrap();
        assert_eq!(last.key.z, ZIndex::OVERLAY);
        let DrawCmd::Points(points) = &last.cmd else { panic!("markers should paint last") };
        assert_eq!(points.points.len(), 2);
        assert_eq!(points.color, config.palette.intersection);

        let segment_colors: Vec<Color> = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Line(l) if item.key.z == ZIndex::CONTENT => Some(l.color),
                _ => None,
            })
            .collect();
        assert_eq!(segment_colors, vec![config.palette.segment]);
    }

    #[test]
    fn segment_preview_is_gray_line() {
        let (state, _) = ToolState::new().apply_all([
            ToolEvent::PointerDown(p(0.0, 0.0)),
            ToolEvent::PointerMoved(p(0.5, 0.0)),
            ToolEvent::PointerUp,
            ToolEvent::PointerDown(p(0.0, 0.9)),
            ToolEvent::PointerMoved(p(0.0, 0.8)),
        ]);
        let (config, list) = built(&state);

        let previews = list
            .items()
            .iter()
            .filter(|item| {
                matches!(&item.cmd, DrawCmd::Line(l) if l.color == config.palette.preview)
            })
            .count();
        assert_eq!(previews, 1);
    }

    #[test]
    fn disjoint_shapes_draw_no_markers() {
        let (state, _) = ToolState::new().apply_all([
            ToolEvent::PointerDown(p(0.0, 0.0)),
            ToolEvent::PointerMoved(p(0.1, 0.0)),
            ToolEvent::PointerUp,
            ToolEvent::PointerDown(p(0.5, 0.5)),
            ToolEvent::PointerMoved(p(0.9, 0.9)),
            ToolEvent::PointerUp,
        ]);
        let (_, list) = built(&state);
        assert!(!list.items().iter().any(|i| matches!(i.cmd, DrawCmd::Points(_))));
    }
}
