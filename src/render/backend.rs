//! Opaque rendering-backend capability.
//!
//! The backend owns every API-specific concern: shader compilation and
//! linking, buffer and texture lifetime, attribute binding, draw submission.
//! Drawers hold the returned handles and never see what is behind them, so
//! the same drawer code runs against a GPU-backed implementation or the
//! recording test double.

use crate::{
    foundation::core::ImageRgba,
    foundation::error::LamellaResult,
    transform::matrix::{Mat3, Mat4},
};

/// Handle to a compiled and linked shader program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

/// Handle to an uploaded vertex buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u32);

/// Handle to an uploaded texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Primitive topology for draw calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    /// Isolated points.
    Points,
    /// Isolated line segments, two vertices each.
    Lines,
    /// A connected polyline.
    LineStrip,
    /// Isolated triangles, three vertices each.
    Triangles,
}

/// One vertex attribute binding for a draw call: shader attribute name,
/// source buffer, and float components per vertex.
#[derive(Clone, Copy, Debug)]
pub struct AttributeBinding<'a> {
    /// Attribute name as declared by the program's vertex stage.
    pub name: &'a str,
    /// Buffer supplying the attribute data.
    pub buffer: BufferHandle,
    /// Float components consumed per vertex.
    pub components: u32,
}

/// A rendering API consumed by the drawers.
///
/// Shader source is passed through opaquely; Lamella never interprets it.
pub trait RenderBackend {
    /// Compile and link a shader program from vertex and fragment source.
    fn compile_program(
        &mut self,
        vertex_src: &str,
        fragment_src: &str,
    ) -> LamellaResult<ProgramHandle>;

    /// Upload vertex data, returning a handle to the stored buffer.
    fn upload_vertices(&mut self, data: &[f32]) -> LamellaResult<BufferHandle>;

    /// Upload a straight-alpha RGBA8 image as a texture.
    fn upload_texture(&mut self, image: &ImageRgba) -> LamellaResult<TextureHandle>;

    /// Set a scalar uniform.
    fn set_uniform_f32(
        &mut self,
        program: ProgramHandle,
        name: &str,
        value: f32,
    ) -> LamellaResult<()>;

    /// Set a 2-component vector uniform.
    fn set_uniform_vec2(
        &mut self,
        program: ProgramHandle,
        name: &str,
        value: [f32; 2],
    ) -> LamellaResult<()>;

    /// Set a 3-component vector uniform.
    fn set_uniform_vec3(
        &mut self,
        program: ProgramHandle,
        name: &str,
        value: [f32; 3],
    ) -> LamellaResult<()>;

    /// Set a boolean flag uniform.
    fn set_uniform_flag(
        &mut self,
        program: ProgramHandle,
        name: &str,
        value: bool,
    ) -> LamellaResult<()>;

    /// Set a 3x3 matrix uniform, column-major.
    fn set_uniform_mat3(
        &mut self,
        program: ProgramHandle,
        name: &str,
        value: Mat3,
    ) -> LamellaResult<()>;

    /// Set a 4x4 matrix uniform, column-major.
    fn set_uniform_mat4(
        &mut self,
        program: ProgramHandle,
        name: &str,
        value: Mat4,
    ) -> LamellaResult<()>;

    /// Bind the given attributes (and optionally a texture) and draw
    /// `vertex_count` vertices with the requested topology.
    fn draw(
        &mut self,
        program: ProgramHandle,
        attributes: &[AttributeBinding<'_>],
        texture: Option<TextureHandle>,
        primitive: Primitive,
        vertex_count: u32,
    ) -> LamellaResult<()>;
}
