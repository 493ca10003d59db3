use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// Frame pacing policy applied after each submitted frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum FrameSync {
    /// Block the calling thread until the GPU finishes the submitted work.
    ///
    /// Frame-locked, non-pipelined execution: the next frame cannot start
    /// until the previous one has fully executed.
    #[default]
    BlockUntilIdle,
    /// Return immediately after submission and let frames overlap.
    Pipelined,
}

/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Output pixel format the surface is configured with.
    ///
    /// The surface is forced to this format regardless of what the adapter
    /// would otherwise prefer; a fallback is only taken (with a warning)
    /// when the adapter cannot present it at all.
    pub surface_format: wgpu::TextureFormat,

    /// Frame pacing applied after each submit.
    pub frame_sync: FrameSync,

    /// Present mode (swap behavior).
    ///
    /// FIFO is broadly supported and matches the one-frame-per-refresh
    /// contract of the draw callback.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode
    /// is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            surface_format: wgpu::TextureFormat::Bgra8UnormSrgb,
            frame_sync: FrameSync::BlockUntilIdle,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

/// Owns wgpu core objects and the surface configuration.
///
/// This type is the low-level rendering context:
/// - creates and stores Instance/Adapter/Device/Queue
/// - creates and configures the Surface (swapchain)
/// - acquires frames and provides an encoder + view for rendering
pub struct Gpu<'w> {
    /// wgpu instance used to create the adapter and surface.
    instance: wgpu::Instance,

    /// Surface bound to the window.
    ///
    /// Surface lifetime is tied to the window; the runtime must ensure the
    /// window outlives the `Gpu` instance.
    surface: wgpu::Surface<'w>,

    /// Selected adapter.
    adapter: wgpu::Adapter,

    /// Logical device.
    device: wgpu::Device,

    /// Command queue.
    queue: wgpu::Queue,

    /// Active surface configuration.
    config: wgpu::SurfaceConfiguration,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,

    /// Post-submit pacing policy.
    frame_sync: FrameSync,
}

/// Represents a single acquired frame.
///
/// This object is short-lived and must be finalized promptly. Holding the
/// surface texture prevents acquisition of subsequent frames.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

impl<'w> Gpu<'w> {
    /// Creates a GPU context bound to a window.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let GpuInit {
            surface_format,
            frame_sync,
            present_mode,
            alpha_mode,
            required_features,
            required_limits,
            desired_maximum_frame_latency,
        } = init;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("trigon-engine device"),
                required_features,
                required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = resolve_surface_format(&surface_caps.formats, surface_format)
            .context("no supported surface formats")?;
        if format != surface_format {
            log::warn!(
                "surface cannot present {surface_format:?}; falling back to {format:?}"
            );
        }

        let alpha_mode = alpha_mode
            .filter(|m| surface_caps.alpha_modes.contains(m))
            .unwrap_or_else(|| {
                surface_caps
                    .alpha_modes
                    .first()
                    .copied()
                    .unwrap_or(wgpu::CompositeAlphaMode::Auto)
            });

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency,
        };

        surface.configure(&device, &config);

        Ok(Self {
            instance,
            surface,
            adapter,
            device,
            queue,
            config,
            size,
            frame_sync,
        })
    }

    /// Returns the active surface format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns the current drawable size (physical pixels).
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Returns the configured frame pacing policy.
    pub fn frame_sync(&self) -> FrameSync {
        self.frame_sync
    }

    /// Reconfigures the surface after a resize.
    ///
    /// This keeps the swapchain presentable; renderers are not notified and
    /// do not adapt their output to the new size.
    ///
    /// wgpu does not support configuring a surface with a 0x0 size; in that
    /// case, only internal state is updated and configuration is deferred.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            self.size = new_size;
            return;
        }

        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Acquires the next surface texture and creates an encoder.
    ///
    /// The returned frame owns the surface texture. Releasing it (after
    /// submission) presents the frame.
    pub fn begin_frame(&self) -> std::result::Result<GpuFrame, SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("trigon frame encoder"),
            });

        Ok(GpuFrame {
            surface_texture,
            view,
            encoder,
        })
    }

    /// Submits the recorded commands for the given frame.
    ///
    /// Presentation occurs when `surface_texture` is dropped after submission.
    pub fn submit(&self, frame: GpuFrame) {
        self.queue.submit(std::iter::once(frame.encoder.finish()));
        drop(frame.view);
        drop(frame.surface_texture);
    }

    /// Blocks the calling thread until all submitted GPU work has completed.
    pub fn wait_idle(&self) {
        if let Err(e) = self.device.poll(wgpu::PollType::wait_indefinitely()) {
            log::warn!("device poll failed while waiting for frame completion: {e}");
        }
    }

    /// Converts a `SurfaceError` into a higher-level action.
    pub fn handle_surface_error(&mut self, err: SurfaceError) -> SurfaceErrorAction {
        match err {
            SurfaceError::Lost | SurfaceError::Outdated => {
                if self.size.width > 0 && self.size.height > 0 {
                    self.surface.configure(&self.device, &self.config);
                }
                SurfaceErrorAction::Reconfigured
            }
            SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
            SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
            SurfaceError::Other => SurfaceErrorAction::SkipFrame,
        }
    }
}

/// Picks the surface format to configure with.
///
/// The forced format always wins when the surface supports it; the first
/// supported format is the fallback. Returns `None` only when the surface
/// reports no formats at all.
fn resolve_surface_format(
    supported: &[wgpu::TextureFormat],
    forced: wgpu::TextureFormat,
) -> Option<wgpu::TextureFormat> {
    if supported.contains(&forced) {
        return Some(forced);
    }
    supported.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat;

    #[test]
    fn forced_format_wins_over_capability_order() {
        // Capability lists put the platform preference first; the forced
        // format must still be chosen even when listed last.
        let supported = [
            TextureFormat::Rgba8Unorm,
            TextureFormat::Rgba8UnormSrgb,
            TextureFormat::Bgra8UnormSrgb,
        ];
        assert_eq!(
            resolve_surface_format(&supported, TextureFormat::Bgra8UnormSrgb),
            Some(TextureFormat::Bgra8UnormSrgb)
        );
    }

    #[test]
    fn unsupported_forced_format_falls_back_to_first() {
        let supported = [TextureFormat::Rgba8Unorm, TextureFormat::Rgba8UnormSrgb];
        assert_eq!(
            resolve_surface_format(&supported, TextureFormat::Bgra8UnormSrgb),
            Some(TextureFormat::Rgba8Unorm)
        );
    }

    #[test]
    fn empty_capability_list_yields_none() {
        assert_eq!(
            resolve_surface_format(&[], TextureFormat::Bgra8UnormSrgb),
            None
        );
    }

    #[test]
    fn default_init_forces_srgb_bgra8_and_blocking_sync() {
        let init = GpuInit::default();
        assert_eq!(init.surface_format, TextureFormat::Bgra8UnormSrgb);
        assert_eq!(init.frame_sync, FrameSync::BlockUntilIdle);
    }
}
