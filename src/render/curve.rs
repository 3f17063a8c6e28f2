//! Cubic Bezier curve drawer.
//!
//! The curve is evaluated on the backend: a static buffer of parameter
//! values in [0, 1] is uploaded once, the four control points travel as
//! uniforms, and each draw emits one line strip.

use crate::{
    foundation::core::Point,
    foundation::error::{LamellaError, LamellaResult},
    render::backend::{AttributeBinding, BufferHandle, Primitive, ProgramHandle, RenderBackend},
    transform::build::viewport_transform,
};

/// Uniform names for the four control points, in order.
const CONTROL_POINT_UNIFORMS: [&str; 4] = ["p0", "p1", "p2", "p3"];

/// Draws a cubic Bezier curve as a line strip of fixed resolution.
#[derive(Debug)]
pub struct CurveDrawer {
    program: ProgramHandle,
    param_buffer: BufferHandle,
    steps: u32,
}

impl CurveDrawer {
    /// Compile the program and upload `steps` evenly spaced parameter
    /// values. `steps` must be at least 2.
    pub fn new(
        backend: &mut dyn RenderBackend,
        vertex_src: &str,
        fragment_src: &str,
        steps: u32,
    ) -> LamellaResult<Self> {
        if steps < 2 {
            return Err(LamellaError::validation(
                "curve drawer needs at least 2 steps",
            ));
        }

        let program = backend.compile_program(vertex_src, fragment_src)?;
        let params: Vec<f32> = (0..steps)
            .map(|i| i as f32 / (steps - 1) as f32)
            .collect();
        let param_buffer = backend.upload_vertices(&params)?;

        Ok(Self {
            program,
            param_buffer,
            steps,
        })
    }

    /// Bind the pixel-to-clip transform for a canvas of the given size.
    pub fn set_viewport(
        &self,
        backend: &mut dyn RenderBackend,
        width: u32,
        height: u32,
    ) -> LamellaResult<()> {
        backend.set_uniform_mat4(self.program, "mvp", viewport_transform(width, height))
    }

    /// Bind the four control points, in pixel coordinates.
    pub fn set_control_points(
        &self,
        backend: &mut dyn RenderBackend,
        points: [Point; 4],
    ) -> LamellaResult<()> {
        for (name, p) in CONTROL_POINT_UNIFORMS.iter().zip(points) {
            backend.set_uniform_vec2(self.program, name, [p.x as f32, p.y as f32])?;
        }
        Ok(())
    }

    /// Draw the curve with the currently bound viewport and control points.
    pub fn draw(&self, backend: &mut dyn RenderBackend) -> LamellaResult<()> {
        backend.draw(
            self.program,
            &[AttributeBinding {
                name: "t",
                buffer: self.param_buffer,
                components: 1,
            }],
            None,
            Primitive::LineStrip,
            self.steps,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/curve.rs"]
mod tests;
