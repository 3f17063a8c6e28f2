//! Serializable scene description: a canvas plus an ordered stack of image
//! layers.

use crate::foundation::{
    core::{Canvas, PixelOffset},
    error::{LamellaError, LamellaResult},
};

/// One image placement in a scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layer {
    /// Key of the image this layer draws, resolved against the image map
    /// passed to [`crate::scene::render::render_scene`].
    pub image: String,
    /// Layer opacity in [0, 1].
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    /// Placement of the image's top-left pixel on the canvas.
    #[serde(default)]
    pub offset: PixelOffset,
}

/// A canvas and the layers composited onto it, bottom to top.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Output dimensions.
    pub canvas: Canvas,
    /// Straight RGBA8 color the canvas is cleared to before compositing;
    /// transparent when unset.
    #[serde(default)]
    pub clear_rgba: Option<[u8; 4]>,
    /// Layers in paint order.
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl Scene {
    /// Parse a scene from its JSON representation.
    pub fn from_json(json: &str) -> LamellaResult<Self> {
        serde_json::from_str(json).map_err(|e| LamellaError::serde(e.to_string()))
    }

    /// Serialize the scene to pretty-printed JSON.
    pub fn to_json(&self) -> LamellaResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| LamellaError::serde(e.to_string()))
    }
}

fn default_opacity() -> f32 {
    1.0
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
