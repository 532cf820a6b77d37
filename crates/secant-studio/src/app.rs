use secant_engine::core::{App, AppControl, FrameCtx};
use secant_engine::coords::Viewport;
use secant_engine::input::{
    InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent,
};
use secant_engine::render::PrimitiveRenderer;
use secant_engine::scene::DrawList;
use secant_geometry::{ShapeKind, ShapeSpec};

use crate::config::StudioConfig;
use crate::readout::{self, Readout};
use crate::scene;
use crate::tool::{Construction, Gesture, ToolEvent, ToolState};

/// What a single input event asks the studio to do.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Action {
    Tool(ToolEvent),
    Exit,
}

pub struct StudioApp {
    config: StudioConfig,
    state: ToolState,

    draw_list: DrawList,
    renderer: PrimitiveRenderer,

    /// Last title pushed to the window.
    title: String,
}

impl StudioApp {
    pub fn new(config: StudioConfig) -> Self {
        let title = config.title.clone();
        Self {
            config,
            state: ToolState::new(),
            draw_list: DrawList::new(),
            renderer: PrimitiveRenderer::new(),
            title,
        }
    }

    fn handle(&mut self, event: ToolEvent) {
        let had_shapes = !self.state.construction.is_empty();
        let (next, committed) = self.state.apply(event);
        self.state = next;

        match event {
            ToolEvent::Reset if had_shapes => log::info!("construction reset"),
            ToolEvent::Undo => {
                log::info!("undo; next shape: {:?}", self.state.construction.next_kind())
            }
            _ => {}
        }

        if let Some(spec) = committed {
            log_commit(spec, &self.state.construction);
        }
    }
}

impl App for StudioApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.window.viewport();

        for ev in &ctx.input_frame.events {
            match translate(ev, viewport) {
                Some(Action::Exit) => {
                    log::info!("escape pressed, exiting");
                    return AppControl::Exit;
                }
                Some(Action::Tool(tool_event)) => self.handle(tool_event),
                None => {}
            }
        }

        // A release lost to focus change must not leave the drag running.
        if matches!(self.state.gesture, Gesture::Dragging { .. })
            && !ctx.input.button_down(MouseButton::Left)
        {
            self.handle(ToolEvent::Cancel);
        }

        let title =
            Readout::from_construction(&self.state.construction).title_line(&self.config.title);
        if title != self.title {
            ctx.runtime.set_title(title.clone());
            self.title = title;
        }

        scene::build(&self.state, &self.config, &mut self.draw_list);
        log::trace!("frame: {} draw items", self.draw_list.items().len());

        let (renderer, draw_list) = (&mut self.renderer, &mut self.draw_list);
        ctx.render(self.config.clear, |rctx, target| {
            renderer.render(rctx, target, draw_list);
        })
    }
}

fn log_commit(spec: ShapeSpec, construction: &Construction) {
    match spec.kind() {
        ShapeKind::Circle => {
            if let Some(circle) = spec.circle() {
                log::info!("{}", readout::circle_label(&circle));
            }
        }
        ShapeKind::Segment => {
            if let Some(segment) = spec.segment() {
                log::info!("{}", readout::segment_label(&segment));
            }
            if let Some(hits) = construction.intersections() {
                log::info!("{}", readout::intersection_label(&hits));
            }
        }
    }
}

/// Maps an input event to a studio action. Pointer positions become NDC.
fn translate(ev: &InputEvent, viewport: Viewport) -> Option<Action> {
    match *ev {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            pos,
        }) => match (state, pos) {
            (MouseButtonState::Pressed, Some(pos)) if viewport.is_valid() => {
                Some(Action::Tool(ToolEvent::PointerDown(viewport.to_ndc(pos))))
            }
            (MouseButtonState::Pressed, _) => None,
            (MouseButtonState::Released, _) => Some(Action::Tool(ToolEvent::PointerUp)),
        },

        InputEvent::PointerMoved(pos) if viewport.is_valid() => {
            Some(Action::Tool(ToolEvent::PointerMoved(viewport.to_ndc(pos))))
        }

        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            repeat,
        } => match key {
            Key::Escape => Some(Action::Exit),
            Key::Char('r') if !repeat => Some(Action::Tool(ToolEvent::Reset)),
            Key::Backspace if !repeat => Some(Action::Tool(ToolEvent::Undo)),
            _ => None,
        },

        _ => None,
    }
}
