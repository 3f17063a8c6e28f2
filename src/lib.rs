//! Lamella is a CPU-first sprite compositing and transform math library.
//!
//! It covers the numeric front half of a small rendering pipeline:
//!
//! 1. **Transform**: compose column-major 3x3/4x4 transforms from named
//!    primitives (`scale`, `rotate`, `translate`) into sprite placements and
//!    model-view-projection matrices.
//! 2. **Composite**: blend straight-alpha RGBA8 images with the "over"
//!    operator, at a signed pixel offset, sequentially or per-scanline in
//!    parallel.
//! 3. **Scene**: describe a stack of image layers as serializable data and
//!    flatten it to a single image.
//! 4. **Render**: drive an opaque backend (program compilation, buffer and
//!    texture upload, uniforms, draw calls) through mesh and curve drawers
//!    that consume the transform math.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **One transform convention**: column-major storage, right-handed axes,
//!   counter-clockwise positive rotations; composition goes through one
//!   well-tested multiply.
//! - **Straight alpha end-to-end**: images carry non-premultiplied RGBA8 and
//!   blending divides by the blended alpha.
//! - **Deterministic**: compositing output does not depend on iteration
//!   order or threading strategy.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod composite;
mod foundation;
mod scene;

/// Backend capability trait and the drawers built on it.
pub mod render;
/// Column-major matrices, named primitive transforms, and builders.
pub mod transform;

pub use assets::decode::decode_image;
pub use composite::blit::{composite_over, composite_over_par};
pub use composite::over::{StraightRgba8, over};
pub use foundation::core::{Canvas, ImageRgba, PixelOffset, Point, Vec2};
pub use foundation::error::{LamellaError, LamellaResult};
pub use render::backend::{
    AttributeBinding, BufferHandle, Primitive, ProgramHandle, RenderBackend, TextureHandle,
};
pub use render::curve::CurveDrawer;
pub use render::mesh::MeshDrawer;
pub use scene::model::{Layer, Scene};
pub use scene::render::render_scene;
pub use transform::build::{
    model_view, model_view_projection, rotate2, rotate_x, rotate_y, rotate_z, scale2, scale3,
    sprite_transform, translate2, translate3, viewport_transform,
};
pub use transform::matrix::{Mat3, Mat4, normal_matrix};
