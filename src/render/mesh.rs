//! Triangle-mesh drawer: owns its program and buffers, wires transform and
//! shading uniforms, and submits draws through a [`RenderBackend`].

use crate::{
    foundation::core::ImageRgba,
    foundation::error::{LamellaError, LamellaResult},
    render::backend::{
        AttributeBinding, BufferHandle, Primitive, ProgramHandle, RenderBackend, TextureHandle,
    },
    transform::matrix::{Mat3, Mat4},
};

/// Draws a triangle mesh, flat-textured or Blinn-Phong-lit.
///
/// The mesh is supplied as flat float arrays: three consecutive values per
/// vertex position (and normal), two per texture coordinate, three
/// consecutive vertices per triangle. [`MeshDrawer::set_mesh`] may be called
/// any number of times to replace the mesh.
pub struct MeshDrawer {
    program: ProgramHandle,
    positions: Option<BufferHandle>,
    texcoords: Option<BufferHandle>,
    normals: Option<BufferHandle>,
    texture: Option<TextureHandle>,
    vertex_count: u32,
    swap_yz: bool,
    show_texture: bool,
    light_dir: [f32; 3],
    shininess: f32,
}

impl MeshDrawer {
    /// Compile the drawer's program up front. Shader source is opaque to
    /// Lamella and passed straight through to the backend.
    pub fn new(
        backend: &mut dyn RenderBackend,
        vertex_src: &str,
        fragment_src: &str,
    ) -> LamellaResult<Self> {
        let program = backend.compile_program(vertex_src, fragment_src)?;
        Ok(Self {
            program,
            positions: None,
            texcoords: None,
            normals: None,
            texture: None,
            vertex_count: 0,
            swap_yz: false,
            show_texture: false,
            light_dir: [0.0, 0.0, -1.0],
            shininess: 30.0,
        })
    }

    /// Upload mesh data, replacing any previous mesh.
    ///
    /// `positions` holds three floats per vertex; `texcoords` two and
    /// `normals` three, each covering the same vertex count when present.
    pub fn set_mesh(
        &mut self,
        backend: &mut dyn RenderBackend,
        positions: &[f32],
        texcoords: Option<&[f32]>,
        normals: Option<&[f32]>,
    ) -> LamellaResult<()> {
        if positions.is_empty() || positions.len() % 3 != 0 {
            return Err(LamellaError::validation(
                "mesh positions must hold three floats per vertex",
            ));
        }
        let vertex_count = positions.len() / 3;

        if let Some(tc) = texcoords
            && tc.len() != vertex_count * 2
        {
            return Err(LamellaError::validation(
                "mesh texcoords must hold two floats per vertex",
            ));
        }
        if let Some(n) = normals
            && n.len() != vertex_count * 3
        {
            return Err(LamellaError::validation(
                "mesh normals must hold three floats per vertex",
            ));
        }

        self.positions = Some(backend.upload_vertices(positions)?);
        self.texcoords = match texcoords {
            Some(tc) => Some(backend.upload_vertices(tc)?),
            None => None,
        };
        self.normals = match normals {
            Some(n) => Some(backend.upload_vertices(n)?),
            None => None,
        };
        self.vertex_count = vertex_count as u32;
        Ok(())
    }

    /// Exchange the mesh's Y and Z axes at draw time.
    pub fn set_swap_yz(&mut self, swap: bool) {
        self.swap_yz = swap;
    }

    /// Toggle texturing; has no visible effect until a texture is set.
    pub fn set_show_texture(&mut self, show: bool) {
        self.show_texture = show;
    }

    /// Upload and enable the mesh texture.
    pub fn set_texture(
        &mut self,
        backend: &mut dyn RenderBackend,
        image: &ImageRgba,
    ) -> LamellaResult<()> {
        self.texture = Some(backend.upload_texture(image)?);
        self.show_texture = true;
        Ok(())
    }

    /// Direction toward the light, in view space.
    pub fn set_light_dir(&mut self, dir: [f32; 3]) {
        self.light_dir = dir;
    }

    /// Blinn-Phong specular exponent.
    pub fn set_shininess(&mut self, shininess: f32) {
        self.shininess = shininess;
    }

    /// Draw flat-textured with the given model-view-projection transform.
    pub fn draw(&self, backend: &mut dyn RenderBackend, mvp: Mat4) -> LamellaResult<()> {
        self.draw_inner(backend, mvp, None)
    }

    /// Draw Blinn-Phong-lit. Requires normals from [`MeshDrawer::set_mesh`];
    /// `normal` is the inverse-transpose of `model_view`'s upper-left 3x3
    /// (see [`crate::transform::matrix::normal_matrix`]).
    pub fn draw_lit(
        &self,
        backend: &mut dyn RenderBackend,
        mvp: Mat4,
        model_view: Mat4,
        normal: Mat3,
    ) -> LamellaResult<()> {
        if self.normals.is_none() {
            return Err(LamellaError::render(
                "draw_lit requires a mesh with normals",
            ));
        }
        self.draw_inner(backend, mvp, Some((model_view, normal)))
    }

    fn draw_inner(
        &self,
        backend: &mut dyn RenderBackend,
        mvp: Mat4,
        lighting: Option<(Mat4, Mat3)>,
    ) -> LamellaResult<()> {
        let positions = self
            .positions
            .ok_or_else(|| LamellaError::render("draw called before set_mesh"))?;

        backend.set_uniform_mat4(self.program, "mvp", mvp)?;
        backend.set_uniform_flag(self.program, "swap_yz", self.swap_yz)?;

        let textured = self.show_texture && self.texture.is_some();
        backend.set_uniform_flag(self.program, "show_texture", textured)?;

        if let Some((model_view, normal)) = lighting {
            backend.set_uniform_mat4(self.program, "mv", model_view)?;
            backend.set_uniform_mat3(self.program, "normal_matrix", normal)?;
            backend.set_uniform_vec3(self.program, "light_dir", self.light_dir)?;
            backend.set_uniform_f32(self.program, "shininess", self.shininess)?;
        }

        let mut attributes = vec![AttributeBinding {
            name: "position",
            buffer: positions,
            components: 3,
        }];
        if let Some(tc) = self.texcoords {
            attributes.push(AttributeBinding {
                name: "texcoord",
                buffer: tc,
                components: 2,
            });
        }
        if let Some(n) = self.normals {
            attributes.push(AttributeBinding {
                name: "normal",
                buffer: n,
                components: 3,
            });
        }

        backend.draw(
            self.program,
            &attributes,
            if textured { self.texture } else { None },
            Primitive::Triangles,
            self.vertex_count,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/mesh.rs"]
mod tests;
