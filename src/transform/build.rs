//! Named primitive transforms and the builders composed from them.
//!
//! One convention is pinned for every primitive: right-handed axes,
//! counter-clockwise positive rotations, angles in radians. Entry points
//! that take degrees say so in their parameter names and convert before
//! touching a primitive.

use crate::foundation::core::Vec2;
use crate::transform::matrix::{Mat3, Mat4};

/// Non-uniform 2D scale about the origin.
pub fn scale2(sx: f32, sy: f32) -> Mat3 {
    Mat3([
        sx, 0.0, 0.0, //
        0.0, sy, 0.0, //
        0.0, 0.0, 1.0,
    ])
}

/// Counter-clockwise 2D rotation about the origin.
///
/// A rotation of `PI / 2` maps `(1, 0)` to `(0, 1)`.
pub fn rotate2(radians: f32) -> Mat3 {
    let (sin, cos) = radians.sin_cos();
    Mat3([
        cos, sin, 0.0, //
        -sin, cos, 0.0, //
        0.0, 0.0, 1.0,
    ])
}

/// 2D translation.
pub fn translate2(v: Vec2) -> Mat3 {
    Mat3([
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        v.x as f32, v.y as f32, 1.0,
    ])
}

/// Non-uniform 3D scale about the origin.
pub fn scale3(sx: f32, sy: f32, sz: f32) -> Mat4 {
    Mat4([
        sx, 0.0, 0.0, 0.0, //
        0.0, sy, 0.0, 0.0, //
        0.0, 0.0, sz, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Rotation about the X axis.
pub fn rotate_x(radians: f32) -> Mat4 {
    let (sin, cos) = radians.sin_cos();
    Mat4([
        1.0, 0.0, 0.0, 0.0, //
        0.0, cos, sin, 0.0, //
        0.0, -sin, cos, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Rotation about the Y axis.
pub fn rotate_y(radians: f32) -> Mat4 {
    let (sin, cos) = radians.sin_cos();
    Mat4([
        cos, 0.0, -sin, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        sin, 0.0, cos, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Rotation about the Z axis.
pub fn rotate_z(radians: f32) -> Mat4 {
    let (sin, cos) = radians.sin_cos();
    Mat4([
        cos, sin, 0.0, 0.0, //
        -sin, cos, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// 3D translation.
pub fn translate3(v: [f32; 3]) -> Mat4 {
    Mat4([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        v[0], v[1], v[2], 1.0,
    ])
}

/// Sprite placement transform: uniform scale, then counter-clockwise
/// rotation (degrees), then translation to `(pos_x, pos_y)`.
pub fn sprite_transform(pos_x: f32, pos_y: f32, rotation_deg: f32, scale: f32) -> Mat3 {
    scale2(scale, scale)
        .then(rotate2(rotation_deg.to_radians()))
        .then(translate2(Vec2::new(f64::from(pos_x), f64::from(pos_y))))
}

/// Model-view transform: rotation about X, then Y (radians), then
/// translation.
pub fn model_view(translation: [f32; 3], rotation_x: f32, rotation_y: f32) -> Mat4 {
    rotate_x(rotation_x)
        .then(rotate_y(rotation_y))
        .then(translate3(translation))
}

/// Full model-view-projection transform: [`model_view`] premultiplied by the
/// supplied projection.
pub fn model_view_projection(
    projection: Mat4,
    translation: [f32; 3],
    rotation_x: f32,
    rotation_y: f32,
) -> Mat4 {
    model_view(translation, rotation_x, rotation_y).then(projection)
}

/// Map pixel coordinates (origin top-left, y down) to clip space.
pub fn viewport_transform(width: u32, height: u32) -> Mat4 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    Mat4([
        2.0 / w, 0.0, 0.0, 0.0, //
        0.0, -2.0 / h, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        -1.0, 1.0, 0.0, 1.0,
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/transform/build.rs"]
mod tests;
