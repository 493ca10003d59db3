//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain) with the forced output
//!   pixel format
//! - acquiring frames and providing encoders/views for rendering
//! - the post-submit frame pacing policy

mod gpu;

pub use gpu::{FrameSync, Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
