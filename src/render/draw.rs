use glam::{IVec2, Vec2};
use tracing::trace;

use crate::{
    constants::{cell_center, ui, CELL_SIZE, WINDOW_SIZE},
    error::RenderError,
    render::{CharacterView, Color, Rect, Renderer, Scene, TextAnchor},
    systems::{audio::AudioSettings, input::MenuButton, stage::GameStage},
    texture::sprites,
};

pub const BACKGROUND: Color = Color::rgb(25, 30, 45);
const OBSTACLE: Color = Color::rgb(60, 60, 70);
const FREE_CELL: Color = Color::rgb(45, 45, 60);
const COIN: Color = Color::rgb(220, 200, 40);
const PLACEHOLDER: Color = Color::rgb(200, 200, 200);
const OVERLAY: Color = Color::rgba(0, 0, 0, 120);

const START_BUTTON: Color = Color::rgb(70, 130, 70);
const AUDIO_ON_BUTTON: Color = Color::rgb(120, 100, 60);
const AUDIO_OFF_BUTTON: Color = Color::rgb(80, 80, 80);
const EXIT_BUTTON: Color = Color::rgb(150, 50, 50);

const EYE_RADIUS: f32 = 3.0;

/// Draws a full frame for the current stage. The game-over screen overlays the final board.
pub fn draw_frame(renderer: &mut dyn Renderer, scene: &Scene) -> Result<(), RenderError> {
    renderer.clear(BACKGROUND)?;
    match scene.stage {
        GameStage::Menu => draw_menu(renderer, &scene.audio),
        GameStage::Playing => draw_game(renderer, scene),
        GameStage::GameOver => {
            draw_game(renderer, scene)?;
            draw_game_over(renderer)
        }
    }
}

pub fn draw_menu(renderer: &mut dyn Renderer, audio: &AudioSettings) -> Result<(), RenderError> {
    let center_x = WINDOW_SIZE.x as f32 / 2.0;
    renderer.draw_text(
        "SIMPLE ROGUELIKE",
        Vec2::new(center_x, ui::MENU_TITLE_Y),
        TextAnchor::Center,
        ui::TITLE_FONT_SIZE,
        Color::WHITE,
    )?;

    for button in MenuButton::ALL {
        let (label, color, size) = match button {
            MenuButton::Start => ("START GAME", START_BUTTON, ui::BUTTON_FONT_SIZE),
            MenuButton::Audio if audio.music_enabled => ("MUSIC/SOUNDS: ON", AUDIO_ON_BUTTON, ui::TOGGLE_FONT_SIZE),
            MenuButton::Audio => ("MUSIC/SOUNDS: OFF", AUDIO_OFF_BUTTON, ui::TOGGLE_FONT_SIZE),
            MenuButton::Exit => ("EXIT", EXIT_BUTTON, ui::BUTTON_FONT_SIZE),
        };
        let rect = button.rect();
        renderer.fill_rect(rect, color)?;
        renderer.draw_text(label, rect.center(), TextAnchor::Center, size, Color::WHITE)?;
    }
    Ok(())
}

pub fn draw_game(renderer: &mut dyn Renderer, scene: &Scene) -> Result<(), RenderError> {
    let cell = CELL_SIZE as f32;
    for position in scene.grid.cells() {
        let rect = Rect::new(position.x as f32 * cell, position.y as f32 * cell, cell, cell);
        if scene.grid.is_obstacle(position) {
            renderer.fill_rect(rect, OBSTACLE)?;
        } else {
            renderer.outline_rect(rect, FREE_CELL)?;
        }
    }

    if let Some(coin) = scene.coin {
        draw_coin(renderer, coin)?;
    }

    if let Some(hero) = &scene.hero {
        draw_character(renderer, &hero.character)?;
    }
    for enemy in &scene.enemies {
        draw_character(renderer, enemy)?;
    }

    if let Some(hero) = &scene.hero {
        renderer.draw_text(
            &format!("HEALTH: {}  COINS: {}", hero.health, hero.coins),
            ui::HUD_POSITION,
            TextAnchor::TopLeft,
            ui::HUD_FONT_SIZE,
            Color::WHITE,
        )?;
    }
    Ok(())
}

pub fn draw_game_over(renderer: &mut dyn Renderer) -> Result<(), RenderError> {
    let size = WINDOW_SIZE.as_vec2();
    renderer.fill_rect(Rect::new(0.0, 0.0, size.x, size.y), OVERLAY)?;
    renderer.draw_text(
        "GAME OVER",
        Vec2::new(size.x / 2.0, (WINDOW_SIZE.y / 2) as f32 - 30.0),
        TextAnchor::Center,
        ui::TITLE_FONT_SIZE,
        Color::RED,
    )?;
    renderer.draw_text(
        "Press SPACE to return to menu",
        Vec2::new(size.x / 2.0, (WINDOW_SIZE.y / 2) as f32 + 30.0),
        TextAnchor::Center,
        ui::HINT_FONT_SIZE,
        Color::WHITE,
    )
}

fn draw_coin(renderer: &mut dyn Renderer, cell: IVec2) -> Result<(), RenderError> {
    let center = cell_center(cell);
    match renderer.draw_image(sprites::COIN, center) {
        Err(RenderError::MissingImage(_)) => renderer.fill_circle(center, (CELL_SIZE / 4) as f32, COIN),
        result => result,
    }
}

/// Draws a character's current frame, or the placeholder when it has no image.
pub fn draw_character(renderer: &mut dyn Renderer, view: &CharacterView) -> Result<(), RenderError> {
    if let Some(frame) = view.frame {
        match renderer.draw_image(frame, view.position) {
            Err(RenderError::MissingImage(id)) => trace!(id = %id, "Missing frame, drawing placeholder"),
            result => return result,
        }
    }
    draw_placeholder(renderer, view.position, view.frame_index)
}

/// A circle whose radius and eye offset cycle with the animation frame index.
pub fn draw_placeholder(renderer: &mut dyn Renderer, position: Vec2, frame_index: usize) -> Result<(), RenderError> {
    let base_radius = (CELL_SIZE as f32 / 2.6).trunc();
    let radius = base_radius + ((frame_index % 3) * 2) as f32;
    renderer.fill_circle(position.trunc(), radius, PLACEHOLDER)?;

    let eye_offset = ((frame_index % 2) * 2) as f32 - 1.0;
    for side in [-6.0, 6.0] {
        let eye = Vec2::new(position.x + side + eye_offset, position.y - 6.0).trunc();
        renderer.fill_circle(eye, EYE_RADIUS, Color::WHITE)?;
    }
    Ok(())
}
