use super::*;
use crate::transform::build::{model_view, model_view_projection, scale3};
use crate::transform::matrix::normal_matrix;

#[derive(Default)]
struct RecordingBackend {
    calls: Vec<String>,
    uploads: Vec<Vec<f32>>,
    mat3s: Vec<(String, Mat3)>,
    mat4s: Vec<(String, Mat4)>,
    vec3s: Vec<(String, [f32; 3])>,
    f32s: Vec<(String, f32)>,
    flags: Vec<(String, bool)>,
    draws: Vec<RecordedDraw>,
}

struct RecordedDraw {
    attributes: Vec<(String, u32)>,
    texture: Option<TextureHandle>,
    primitive: Primitive,
    vertex_count: u32,
}

impl RenderBackend for RecordingBackend {
    fn compile_program(
        &mut self,
        _vertex_src: &str,
        _fragment_src: &str,
    ) -> LamellaResult<ProgramHandle> {
        self.calls.push("compile_program".to_string());
        Ok(ProgramHandle(1))
    }

    fn upload_vertices(&mut self, data: &[f32]) -> LamellaResult<BufferHandle> {
        self.calls.push(format!("upload_vertices:{}", data.len()));
        self.uploads.push(data.to_vec());
        Ok(BufferHandle(self.uploads.len() as u32))
    }

    fn upload_texture(&mut self, image: &ImageRgba) -> LamellaResult<TextureHandle> {
        self.calls
            .push(format!("upload_texture:{}x{}", image.width, image.height));
        Ok(TextureHandle(7))
    }

    fn set_uniform_f32(
        &mut self,
        _program: ProgramHandle,
        name: &str,
        value: f32,
    ) -> LamellaResult<()> {
        self.f32s.push((name.to_string(), value));
        Ok(())
    }

    fn set_uniform_vec2(
        &mut self,
        _program: ProgramHandle,
        _name: &str,
        _value: [f32; 2],
    ) -> LamellaResult<()> {
        Ok(())
    }

    fn set_uniform_vec3(
        &mut self,
        _program: ProgramHandle,
        name: &str,
        value: [f32; 3],
    ) -> LamellaResult<()> {
        self.vec3s.push((name.to_string(), value));
        Ok(())
    }

    fn set_uniform_flag(
        &mut self,
        _program: ProgramHandle,
        name: &str,
        value: bool,
    ) -> LamellaResult<()> {
        self.flags.push((name.to_string(), value));
        Ok(())
    }

    fn set_uniform_mat3(
        &mut self,
        _program: ProgramHandle,
        name: &str,
        value: Mat3,
    ) -> LamellaResult<()> {
        self.mat3s.push((name.to_string(), value));
        Ok(())
    }

    fn set_uniform_mat4(
        &mut self,
        _program: ProgramHandle,
        name: &str,
        value: Mat4,
    ) -> LamellaResult<()> {
        self.mat4s.push((name.to_string(), value));
        Ok(())
    }

    fn draw(
        &mut self,
        _program: ProgramHandle,
        attributes: &[AttributeBinding<'_>],
        texture: Option<TextureHandle>,
        primitive: Primitive,
        vertex_count: u32,
    ) -> LamellaResult<()> {
        self.calls.push("draw".to_string());
        self.draws.push(RecordedDraw {
            attributes: attributes
                .iter()
                .map(|a| (a.name.to_string(), a.components))
                .collect(),
            texture,
            primitive,
            vertex_count,
        });
        Ok(())
    }
}

const TRIANGLE: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
const TRIANGLE_UVS: [f32; 6] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
const TRIANGLE_NORMALS: [f32; 9] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];

#[test]
fn new_compiles_the_program_up_front() {
    let mut backend = RecordingBackend::default();
    MeshDrawer::new(&mut backend, "vs", "fs").unwrap();
    assert_eq!(backend.calls, vec!["compile_program"]);
}

#[test]
fn set_mesh_validates_attribute_arity() {
    let mut backend = RecordingBackend::default();
    let mut drawer = MeshDrawer::new(&mut backend, "vs", "fs").unwrap();

    let err = drawer.set_mesh(&mut backend, &[1.0, 2.0], None, None).unwrap_err();
    assert!(matches!(err, LamellaError::Validation(_)));

    let err = drawer
        .set_mesh(&mut backend, &TRIANGLE, Some(&[0.0; 5]), None)
        .unwrap_err();
    assert!(matches!(err, LamellaError::Validation(_)));

    let err = drawer
        .set_mesh(&mut backend, &TRIANGLE, None, Some(&[0.0; 8]))
        .unwrap_err();
    assert!(matches!(err, LamellaError::Validation(_)));
}

#[test]
fn draw_before_set_mesh_is_a_render_error() {
    let mut backend = RecordingBackend::default();
    let drawer = MeshDrawer::new(&mut backend, "vs", "fs").unwrap();
    let err = drawer.draw(&mut backend, Mat4::IDENTITY).unwrap_err();
    assert!(matches!(err, LamellaError::Render(_)));
}

#[test]
fn flat_draw_binds_transform_flags_and_attributes() {
    let mut backend = RecordingBackend::default();
    let mut drawer = MeshDrawer::new(&mut backend, "vs", "fs").unwrap();
    drawer
        .set_mesh(&mut backend, &TRIANGLE, Some(&TRIANGLE_UVS), None)
        .unwrap();

    assert_eq!(backend.uploads[0].len(), 9);
    assert_eq!(backend.uploads[1].len(), 6);

    let mvp = model_view_projection(scale3(2.0, 2.0, 2.0), [0.0, 0.0, -3.0], 0.2, 0.1);
    drawer.draw(&mut backend, mvp).unwrap();

    assert!(backend.mat4s.contains(&("mvp".to_string(), mvp)));
    assert!(backend.flags.contains(&("swap_yz".to_string(), false)));
    assert!(backend.flags.contains(&("show_texture".to_string(), false)));

    let draw = &backend.draws[0];
    assert_eq!(draw.primitive, Primitive::Triangles);
    assert_eq!(draw.vertex_count, 3);
    assert_eq!(
        draw.attributes,
        vec![("position".to_string(), 3), ("texcoord".to_string(), 2)]
    );
    assert_eq!(draw.texture, None);
}

#[test]
fn swap_yz_flag_reaches_the_backend() {
    let mut backend = RecordingBackend::default();
    let mut drawer = MeshDrawer::new(&mut backend, "vs", "fs").unwrap();
    drawer.set_mesh(&mut backend, &TRIANGLE, None, None).unwrap();
    drawer.set_swap_yz(true);
    drawer.draw(&mut backend, Mat4::IDENTITY).unwrap();
    assert!(backend.flags.contains(&("swap_yz".to_string(), true)));
}

#[test]
fn set_texture_enables_texturing() {
    let mut backend = RecordingBackend::default();
    let mut drawer = MeshDrawer::new(&mut backend, "vs", "fs").unwrap();
    drawer
        .set_mesh(&mut backend, &TRIANGLE, Some(&TRIANGLE_UVS), None)
        .unwrap();

    let checker = ImageRgba::new(2, 2).unwrap();
    drawer.set_texture(&mut backend, &checker).unwrap();
    drawer.draw(&mut backend, Mat4::IDENTITY).unwrap();

    assert!(backend.calls.iter().any(|c| c == "upload_texture:2x2"));
    assert!(backend.flags.contains(&("show_texture".to_string(), true)));
    assert_eq!(backend.draws[0].texture, Some(TextureHandle(7)));

    // Texturing can be toggled back off without discarding the texture.
    drawer.set_show_texture(false);
    drawer.draw(&mut backend, Mat4::IDENTITY).unwrap();
    assert_eq!(backend.draws[1].texture, None);
}

#[test]
fn draw_lit_requires_normals() {
    let mut backend = RecordingBackend::default();
    let mut drawer = MeshDrawer::new(&mut backend, "vs", "fs").unwrap();
    drawer.set_mesh(&mut backend, &TRIANGLE, None, None).unwrap();

    let mv = model_view([0.0, 0.0, -3.0], 0.2, 0.1);
    let err = drawer
        .draw_lit(&mut backend, mv, mv, Mat3::IDENTITY)
        .unwrap_err();
    assert!(matches!(err, LamellaError::Render(_)));
}

#[test]
fn lit_draw_binds_lighting_uniforms() {
    let mut backend = RecordingBackend::default();
    let mut drawer = MeshDrawer::new(&mut backend, "vs", "fs").unwrap();
    drawer
        .set_mesh(&mut backend, &TRIANGLE, None, Some(&TRIANGLE_NORMALS))
        .unwrap();
    drawer.set_light_dir([1.0, 0.0, 0.0]);
    drawer.set_shininess(64.0);

    let mv = model_view([0.0, 0.0, -3.0], 0.2, 0.1);
    let mvp = mv.then(scale3(2.0, 2.0, 2.0));
    let normal = normal_matrix(mv).unwrap();
    drawer.draw_lit(&mut backend, mvp, mv, normal).unwrap();

    assert!(backend.mat4s.contains(&("mvp".to_string(), mvp)));
    assert!(backend.mat4s.contains(&("mv".to_string(), mv)));
    assert!(backend.mat3s.contains(&("normal_matrix".to_string(), normal)));
    assert!(backend.vec3s.contains(&("light_dir".to_string(), [1.0, 0.0, 0.0])));
    assert!(backend.f32s.contains(&("shininess".to_string(), 64.0)));

    let draw = &backend.draws[0];
    assert_eq!(
        draw.attributes,
        vec![("position".to_string(), 3), ("normal".to_string(), 3)]
    );
}
