//! Drag-to-draw tool.
//!
//! The first drag defines a circle (press at the center, release on the rim),
//! the second a line segment. Once both exist further drags are ignored until
//! the construction is reset or undone.
//!
//! All transitions are pure: `ToolState::apply` consumes the state and an
//! event and returns the next state plus the shape committed by that event.

use secant_geometry::{Intersections, Point2, ShapeKind, ShapeSpec, intersect_circle_segment};

/// Tool input, already converted to NDC.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ToolEvent {
    PointerDown(Point2),
    PointerMoved(Point2),
    PointerUp,
    /// Abandons the current drag without committing it.
    Cancel,
    Reset,
    Undo,
}

/// Committed shapes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Construction {
    pub circle: Option<ShapeSpec>,
    pub segment: Option<ShapeSpec>,
}

impl Construction {
    /// Kind of the next shape to draw, or `None` when the construction is complete.
    pub fn next_kind(&self) -> Option<ShapeKind> {
        match (self.circle, self.segment) {
            (None, _) => Some(ShapeKind::Circle),
            (Some(_), None) => Some(ShapeKind::Segment),
            (Some(_), Some(_)) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.circle.is_none() && self.segment.is_none()
    }

    /// Circle/segment intersections, once both shapes exist.
    pub fn intersections(&self) -> Option<Intersections> {
        let circle = self.circle?.circle()?;
        let segment = self.segment?.segment()?;
        Some(intersect_circle_segment(circle.center, circle.radius, segment))
    }

    fn commit(&mut self, spec: ShapeSpec) {
        match spec.kind() {
            ShapeKind::Circle => self.circle = Some(spec),
            ShapeKind::Segment => self.segment = Some(spec),
        }
    }

    /// Removes the most recently committed shape.
    fn undo(&mut self) -> Option<ShapeSpec> {
        self.segment.take().or_else(|| self.circle.take())
    }
}

/// Pointer gesture in progress.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        kind: ShapeKind,
        start: Point2,
        /// Latest pointer position; `None` until the pointer moves.
        current: Option<Point2>,
    },
}

impl Gesture {
    /// The shape the current drag would commit if released now.
    pub fn preview(&self) -> Option<ShapeSpec> {
        match *self {
            Gesture::Idle => None,
            Gesture::Dragging { kind, start, current } => {
                current.map(|end| ShapeSpec::new(kind, start, end))
            }
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ToolState {
    pub construction: Construction,
    pub gesture: Gesture,
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(self, event: ToolEvent) -> (ToolState, Option<ShapeSpec>) {
        let ToolState {
            mut construction,
            gesture,
        } = self;

        match (gesture, event) {
            (Gesture::Idle, ToolEvent::PointerDown(start)) => match construction.next_kind() {
                Some(kind) => {
                    let gesture = Gesture::Dragging {
                        kind,
                        start,
                        current: None,
                    };
                    (ToolState { construction, gesture }, None)
                }
                None => {
                    log::debug!("construction complete; drag ignored");
                    (self, None)
                }
            },

            (Gesture::Dragging { kind, start, .. }, ToolEvent::PointerMoved(pos)) => {
                let gesture = Gesture::Dragging {
                    kind,
                    start,
                    current: Some(pos),
                };
                (ToolState { construction, gesture }, None)
            }

            (Gesture::Dragging { .. }, ToolEvent::PointerUp) => {
                let committed = gesture.preview();
                match committed {
                    Some(spec) => construction.commit(spec),
                    None => log::debug!("click without drag; nothing committed"),
                }
                (
                    ToolState {
                        construction,
                        gesture: Gesture::Idle,
                    },
                    committed,
                )
            }

            (Gesture::Dragging { .. }, ToolEvent::Cancel) => {
                log::debug!("drag cancelled");
                (
                    ToolState {
                        construction,
                        gesture: Gesture::Idle,
                    },
                    None,
                )
            }

            (_, ToolEvent::Reset) => (ToolState::default(), None),

            (_, ToolEvent::Undo) => {
                construction.undo();
                (
                    ToolState {
                        construction,
                        gesture: Gesture::Idle,
                    },
                    None,
                )
            }

            // Everything else, e.g. a second press mid-drag, leaves the state as is.
            _ => (self, None),
        }
    }
}
