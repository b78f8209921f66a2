//! GPU device + surface management.
//!
//! Responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - configuring the window surface and reconfiguring it on resize
//! - acquiring frames and submitting the recorded clear pass

mod error;
mod gpu;

pub use error::SurfaceErrorAction;
pub use gpu::{Gpu, GpuFrame};
