//! Flatten a [`Scene`] into a single image.

use std::collections::BTreeMap;

use crate::{
    composite::blit::composite_over,
    foundation::core::ImageRgba,
    foundation::error::{LamellaError, LamellaResult},
    scene::model::Scene,
};

/// Composite every layer of `scene` onto a freshly allocated canvas.
///
/// Layers are blended bottom to top in declaration order; each layer's
/// `image` key must resolve in `images`. The canvas starts cleared to
/// `scene.clear_rgba`, or fully transparent when unset.
#[tracing::instrument(skip(scene, images), fields(
    canvas_w = scene.canvas.width,
    canvas_h = scene.canvas.height,
    layers = scene.layers.len(),
))]
pub fn render_scene(
    scene: &Scene,
    images: &BTreeMap<String, ImageRgba>,
) -> LamellaResult<ImageRgba> {
    let mut out = ImageRgba::new(scene.canvas.width, scene.canvas.height)?;
    if let Some(clear) = scene.clear_rgba {
        out.fill(clear);
    }

    for layer in &scene.layers {
        let image = images.get(&layer.image).ok_or_else(|| {
            LamellaError::scene(format!(
                "layer references unknown image {:?}",
                layer.image
            ))
        })?;
        composite_over(&mut out, image, layer.opacity, layer.offset)?;
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/render.rs"]
mod tests;
