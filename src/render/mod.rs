//! Presentation: turns a read-only [`Scene`] into calls on a host [`Renderer`].

use glam::Vec2;

use crate::error::RenderError;

pub mod draw;
pub mod scene;

pub use draw::draw_frame;
pub use scene::{CharacterView, HeroView, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// An axis-aligned rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Hit-test with an inclusive top-left edge and exclusive bottom-right edge.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.x + self.w && point.y >= self.y && point.y < self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Where a string is placed relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

/// Drawing primitives supplied by the host.
///
/// [`Renderer::draw_image`] reports [`RenderError::MissingImage`] for identifiers without a loaded
/// image; callers fall back to primitive shapes in that case.
pub trait Renderer {
    fn clear(&mut self, color: Color) -> Result<(), RenderError>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;

    fn outline_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), RenderError>;

    fn draw_text(&mut self, text: &str, position: Vec2, anchor: TextAnchor, size: f32, color: Color) -> Result<(), RenderError>;

    /// Draws the image named `id` centered on `center`.
    fn draw_image(&mut self, id: &str, center: Vec2) -> Result<(), RenderError>;
}
