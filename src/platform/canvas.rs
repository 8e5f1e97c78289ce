//! [`Renderer`] implemented on an SDL2 canvas.
//!
//! Shapes and text come from SDL2_gfx; text uses its built-in 8x8 bitmap font, scaled to the requested
//! size. Images are loaded lazily from `<root>/images/<id>.png` and cached, including misses.

use std::collections::HashMap;
use std::path::PathBuf;

use glam::Vec2;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::image::LoadTexture;
use sdl2::pixels;
use sdl2::rect;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use tracing::{trace, warn};

use crate::error::RenderError;
use crate::render::{Color, Rect, Renderer, TextAnchor};

/// Glyph edge length of the SDL2_gfx built-in font, in pixels.
const GLYPH_SIZE: f32 = 8.0;
/// Font sizes map to glyph heights at this ratio.
const FONT_SIZE_TO_GLYPH: f32 = 0.6;

fn to_sdl(color: Color) -> pixels::Color {
    pixels::Color::RGBA(color.r, color.g, color.b, color.a)
}

fn to_sdl_rect(rect: Rect) -> rect::Rect {
    rect::Rect::new(rect.x as i32, rect.y as i32, rect.w.max(0.0) as u32, rect.h.max(0.0) as u32)
}

pub struct SdlRenderer {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    image_root: PathBuf,
    images: HashMap<String, Option<Texture>>,
}

impl SdlRenderer {
    pub fn new(mut canvas: Canvas<Window>, image_root: PathBuf) -> Self {
        canvas.set_blend_mode(BlendMode::Blend);
        let texture_creator = canvas.texture_creator();
        Self {
            canvas,
            texture_creator,
            image_root,
            images: HashMap::new(),
        }
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    /// Loads `id` into the cache on first use.
    fn load_image(&mut self, id: &str) {
        if self.images.contains_key(id) {
            return;
        }

        let path = self.image_root.join(format!("{id}.png"));
        let texture = if path.exists() {
            self.texture_creator
                .load_texture(&path)
                .map_err(|e| warn!(path = %path.display(), error = %e, "Failed to load image"))
                .ok()
        } else {
            trace!(id, "No image file");
            None
        };
        self.images.insert(id.to_string(), texture);
    }
}

impl Renderer for SdlRenderer {
    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        self.canvas.set_draw_color(to_sdl(color));
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.canvas.set_draw_color(to_sdl(color));
        self.canvas.fill_rect(to_sdl_rect(rect)).map_err(RenderError::Failed)
    }

    fn outline_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.canvas.set_draw_color(to_sdl(color));
        self.canvas.draw_rect(to_sdl_rect(rect)).map_err(RenderError::Failed)
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), RenderError> {
        self.canvas
            .filled_circle(center.x as i16, center.y as i16, radius as i16, to_sdl(color))
            .map_err(RenderError::Failed)
    }

    fn draw_text(&mut self, text: &str, position: Vec2, anchor: TextAnchor, size: f32, color: Color) -> Result<(), RenderError> {
        let scale = (size * FONT_SIZE_TO_GLYPH / GLYPH_SIZE).max(1.0);
        let extent = Vec2::new(text.chars().count() as f32, 1.0) * GLYPH_SIZE * scale;
        let top_left = match anchor {
            TextAnchor::TopLeft => position,
            TextAnchor::Center => position - extent / 2.0,
        };

        self.canvas.set_scale(scale, scale).map_err(RenderError::Failed)?;
        let scaled = top_left / scale;
        let result = self.canvas.string(scaled.x as i16, scaled.y as i16, text, to_sdl(color));
        self.canvas.set_scale(1.0, 1.0).map_err(RenderError::Failed)?;
        result.map_err(RenderError::Failed)
    }

    fn draw_image(&mut self, id: &str, center: Vec2) -> Result<(), RenderError> {
        self.load_image(id);
        let texture = self
            .images
            .get(id)
            .and_then(Option::as_ref)
            .ok_or_else(|| RenderError::MissingImage(id.to_string()))?;

        let query = texture.query();
        let destination = rect::Rect::from_center((center.x as i32, center.y as i32), query.width, query.height);
        self.canvas.copy(texture, None, destination).map_err(RenderError::Failed)
    }
}
