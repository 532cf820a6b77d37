use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::coords::{Point2, Viewport};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

/// Renderer for every `DrawCmd` variant.
///
/// Commands are expanded on the CPU into colored NDC vertices:
/// - `Line` → one line-list pair
/// - `LineLoop` → one pair per edge, closing back to the first point
/// - `Points` → two triangles per point, `size` logical px on each side
///
/// Consecutive commands of the same topology share a draw call. Paint order is
/// preserved across topology switches.
#[derive(Default)]
pub struct PrimitiveRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    line_pipeline: Option<wgpu::RenderPipeline>,
    triangle_pipeline: Option<wgpu::RenderPipeline>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,

    mesh: Mesh,
}

impl PrimitiveRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.mesh.clear();
        if draw_list.is_empty() {
            return;
        }

        tessellate(draw_list, ctx.viewport, &mut self.mesh);
        if self.mesh.is_empty() {
            return;
        }

        self.ensure_pipelines(ctx);
        self.ensure_vertex_capacity(ctx, self.mesh.vertices.len());

        let Some(vbo) = self.vbo.as_ref() else { return };
        ctx.queue
            .write_buffer(vbo, 0, bytemuck::cast_slice(&self.mesh.vertices));

        let Some(line_pipeline) = self.line_pipeline.as_ref() else { return };
        let Some(triangle_pipeline) = self.triangle_pipeline.as_ref() else { return };

        let mut rpass = target.load_pass("secant primitive pass");

        rpass.set_vertex_buffer(0, vbo.slice(..));

        for batch in &self.mesh.batches {
            let pipeline = match batch.topology {
                Topology::Lines => line_pipeline,
                Topology::Triangles => triangle_pipeline,
            };
            rpass.set_pipeline(pipeline);
            rpass.draw(batch.range.clone(), 0..1);
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format)
            && self.line_pipeline.is_some()
            && self.triangle_pipeline.is_some()
        {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("secant primitive shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/primitive.wgsl").into()),
        });

        let layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("secant primitive pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        self.line_pipeline = Some(create_pipeline(
            ctx,
            &shader,
            &layout,
            wgpu::PrimitiveTopology::LineList,
            "secant line pipeline",
        ));
        self.triangle_pipeline = Some(create_pipeline(
            ctx,
            &shader,
            &layout,
            wgpu::PrimitiveTopology::TriangleList,
            "secant triangle pipeline",
        ));
        self.pipeline_format = Some(ctx.surface_format);

        log::debug!("primitive pipelines built for {:?}", ctx.surface_format);
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vbo_capacity && self.vbo.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(256);
        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("secant primitive vbo"),
            size: (new_cap * std::mem::size_of::<Vertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }
}

fn create_pipeline(
    ctx: &RenderCtx<'_>,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    topology: wgpu::PrimitiveTopology,
    label: &str,
) -> wgpu::RenderPipeline {
    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[Vertex::layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(premul_alpha_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState {
        color: component,
        alpha: component,
    }
}

// ── CPU expansion ─────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Topology {
    Lines,
    Triangles,
}

#[derive(Debug, Clone, Eq, PartialEq)]
struct Batch {
    topology: Topology,
    range: Range<u32>,
}

/// Vertices for one frame plus the draw calls covering them.
#[derive(Debug, Default)]
struct Mesh {
    vertices: Vec<Vertex>,
    batches: Vec<Batch>,
}

impl Mesh {
    fn clear(&mut self) {
        self.vertices.clear();
        self.batches.clear();
    }

    fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends vertices, extending the last batch when the topology matches.
    fn extend<I>(&mut self, topology: Topology, vertices: I)
    where
        I: IntoIterator<Item = Vertex>,
    {
        let start = self.vertices.len() as u32;
        self.vertices.extend(vertices);
        let end = self.vertices.len() as u32;
        if start == end {
            return;
        }

        match self.batches.last_mut() {
            Some(last) if last.topology == topology => last.range.end = end,
            _ => self.batches.push(Batch {
                topology,
                range: start..end,
            }),
        }
    }
}

fn tessellate(draw_list: &mut DrawList, viewport: Viewport, mesh: &mut Mesh) {
    // NDC spans 2 units across the viewport, so `size` px is `2 * size / extent`.
    let half_w = 1.0 / viewport.width.max(1.0);
    let half_h = 1.0 / viewport.height.max(1.0);

    for item in draw_list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::Line(cmd) => {
                let color = cmd.color.to_array();
                mesh.extend(
                    Topology::Lines,
                    [Vertex::new(cmd.from, color), Vertex::new(cmd.to, color)],
                );
            }

            DrawCmd::LineLoop(cmd) => {
                let color = cmd.color.to_array();
                let pts = &cmd.points;
                let edges = pts
                    .iter()
                    .zip(pts.iter().cycle().skip(1))
                    .flat_map(|(&a, &b)| [Vertex::new(a, color), Vertex::new(b, color)]);
                mesh.extend(Topology::Lines, edges);
            }

            DrawCmd::Points(cmd) => {
                let color = cmd.color;
                let hx = cmd.size * half_w;
                let hy = cmd.size * half_h;
                let quads = cmd
                    .points
                    .iter()
                    .flat_map(|&p| point_quad(p, hx, hy, color));
                mesh.extend(Topology::Triangles, quads);
            }
        }
    }
}

/// Two CCW triangles centered on `p`.
fn point_quad(p: Point2, hx: f32, hy: f32, color: Color) -> [Vertex; 6] {
    let color = color.to_array();
    let bl = Vertex::new(Point2::new(p.x - hx, p.y - hy), color);
    let br = Vertex::new(Point2::new(p.x + hx, p.y - hy), color);
    let tr = Vertex::new(Point2::new(p.x + hx, p.y + hy), color);
    let tl = Vertex::new(Point2::new(p.x - hx, p.y + hy), color);
    [bl, br, tr, bl, tr, tl]
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Vertex layout (24 bytes):
///
///  offset  0  pos    [f32; 2]   loc 0  (NDC)
///  offset  8  color  [f32; 4]   loc 1  (premultiplied)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct Vertex {
    pos: [f32; 2],
    color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    #[inline]
    fn new(pos: Point2, color: [f32; 4]) -> Self {
        Self {
            pos: pos.into(),
            color,
        }
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ZIndex;

    const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    fn build(list: &mut DrawList, viewport: Viewport) -> Mesh {
        let mut mesh = Mesh::default();
        tessellate(list, viewport, &mut mesh);
        mesh
    }

    fn positions(mesh: &Mesh) -> Vec<[f32; 2]> {
        mesh.vertices.iter().map(|v| v.pos).collect()
    }

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }

    #[test]
    fn line_loop_closes_back_to_first_point() {
        let mut list = DrawList::new();
        let tri = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        list.push_line_loop(ZIndex::CONTENT, tri, WHITE);

        let mesh = build(&mut list, Viewport::new(100.0, 100.0));
        assert_eq!(
            positions(&mesh),
            vec![
                [0.0, 0.0],
                [1.0, 0.0],
                [1.0, 0.0],
                [0.0, 1.0],
                [0.0, 1.0],
                [0.0, 0.0],
            ]
        );
        assert_eq!(
            mesh.batches,
            vec![Batch {
                topology: Topology::Lines,
                range: 0..6
            }]
        );
    }

    #[test]
    fn point_becomes_pixel_sized_square() {
        let mut list = DrawList::new();
        list.push_points(ZIndex::OVERLAY, [Point2::new(0.5, -0.5)], 10.0, WHITE);

        let mesh = build(&mut list, Viewport::new(200.0, 400.0));
        assert_eq!(mesh.vertices.len(), 6);

        let xs: Vec<f32> = mesh.vertices.iter().map(|v| v.pos[0]).collect();
        let ys: Vec<f32> = mesh.vertices.iter().map(|v| v.pos[1]).collect();
        let span = |vals: &[f32]| {
            vals.iter()
                .fold((f32::MAX, f32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
        };
        let (min_x, max_x) = span(&xs);
        let (min_y, max_y) = span(&ys);

        // 10 px of 200 px is 0.1 NDC wide; 10 px of 400 px is 0.05 NDC tall.
        assert!((max_x - min_x - 0.1).abs() < 1e-6);
        assert!((max_y - min_y - 0.05).abs() < 1e-6);
        assert!(((min_x + max_x) * 0.5 - 0.5).abs() < 1e-6);
        assert!(((min_y + max_y) * 0.5 + 0.5).abs() < 1e-6);
        assert_eq!(mesh.batches[0].topology, Topology::Triangles);
    }

    #[test]
    fn batches_follow_paint_order_and_merge_neighbours() {
        let mut list = DrawList::new();
        let a = Point2::new(-1.0, 0.0);
        let b = Point2::new(1.0, 0.0);

        list.push_points(ZIndex::OVERLAY, [a], 4.0, WHITE);
        list.push_line(ZIndex::BACKGROUND, a, b, WHITE);
        list.push_line(ZIndex::CONTENT, a, b, WHITE);
        list.push_line(ZIndex::OVERLAY, a, b, WHITE);

        let mesh = build(&mut list, Viewport::new(100.0, 100.0));
        let summary: Vec<(Topology, Range<u32>)> = mesh
            .batches
            .iter()
            .map(|b| (b.topology, b.range.clone()))
            .collect();

        assert_eq!(
            summary,
            vec![
                (Topology::Lines, 0..4),
                (Topology::Triangles, 4..10),
                (Topology::Lines, 10..12),
            ]
        );
    }

    #[test]
    fn colors_are_passed_through_premultiplied() {
        let mut list = DrawList::new();
        let half_red = Color {
            r: 0.5,
            g: 0.0,
            b: 0.0,
            a: 0.5,
        };
        list.push_line(ZIndex::CONTENT, Point2::origin(), Point2::new(1.0, 1.0), half_red);

        let mesh = build(&mut list, Viewport::new(10.0, 10.0));
        assert_eq!(mesh.vertices[0].color, [0.5, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn empty_list_yields_no_draws() {
        let mut list = DrawList::new();
        let mesh = build(&mut list, Viewport::new(10.0, 10.0));
        assert!(mesh.is_empty());
        assert!(mesh.batches.is_empty());
    }
}
