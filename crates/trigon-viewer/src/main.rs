use anyhow::Result;
use winit::dpi::LogicalSize;

use trigon_engine::core::{App, AppControl, FrameCtx};
use trigon_engine::device::GpuInit;
use trigon_engine::geometry::TriangleGeometry;
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::render::TriangleRenderer;
use trigon_engine::window::{Runtime, RuntimeConfig};

/// Background behind the triangle.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.1,
    g: 0.1,
    b: 0.1,
    a: 1.0,
};

struct TriangleApp {
    geometry: TriangleGeometry,
    renderer: Option<TriangleRenderer>,
}

impl TriangleApp {
    fn new(geometry: TriangleGeometry) -> Self {
        Self {
            geometry,
            renderer: None,
        }
    }
}

impl App for TriangleApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // The device exists only once the runtime has opened the window, so
        // the renderer is built on the first frame.
        if self.renderer.is_none() {
            match TriangleRenderer::new(
                ctx.gpu.device(),
                ctx.gpu.surface_format(),
                &self.geometry,
            ) {
                Ok(renderer) => {
                    log::info!(
                        "triangle renderer ready (target format {:?})",
                        ctx.gpu.surface_format()
                    );
                    self.renderer = Some(renderer);
                }
                Err(e) => {
                    log::error!("failed to initialize triangle renderer: {e}");
                    return AppControl::Exit;
                }
            }
        }

        let Some(renderer) = self.renderer.as_ref() else {
            return AppControl::Continue;
        };

        if ctx.time.frame_index > 0 && ctx.time.frame_index % 300 == 0 {
            log::debug!(
                "frame {} ({:.1} fps)",
                ctx.time.frame_index,
                1.0 / ctx.time.dt.max(f32::EPSILON)
            );
        }

        ctx.render(CLEAR_COLOR, |_rctx, target| renderer.draw(target))
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "trigon".to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
    };

    let app = TriangleApp::new(TriangleGeometry::default());

    Runtime::run(config, GpuInit::default(), app)
}
