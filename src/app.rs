use std::path::PathBuf;
use std::time::{Duration, Instant};

use glam::Vec2;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::{AudioSubsystem, EventPump, Sdl};
use tracing::{debug, info, trace, warn};

use crate::audio::{AudioBackend, MixerAudio, NullAudio};
use crate::constants::{LOOP_TIME, WINDOW_SIZE};
use crate::error::{GameError, GameResult};
use crate::events::GameCommand;
use crate::game::Game;
use crate::platform::{self, canvas::SdlRenderer};
use crate::systems::components::GameConfig;

/// Main application wrapper that manages SDL initialization, window lifecycle, and the game loop.
pub struct App {
    pub game: Game,
    renderer: SdlRenderer,
    event_pump: EventPump,
    last_tick: Instant,
    focused: bool,
    // Keep SDL alive for the app lifetime so subsystems (audio) are not shut down
    _sdl_context: Sdl,
    _audio_subsystem: AudioSubsystem,
}

impl App {
    /// Initializes SDL subsystems, creates the game window, and sets up the game state.
    ///
    /// Images, sounds and music are looked up under `asset_root`; anything missing degrades to
    /// placeholder shapes or silence.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails.
    pub fn new(config: GameConfig, asset_root: PathBuf) -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let audio_subsystem = sdl_context.audio().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        trace!(width = WINDOW_SIZE.x, height = WINDOW_SIZE.y, "Creating game window");
        let window = video_subsystem
            .window("Simple Roguelike", WINDOW_SIZE.x, WINDOW_SIZE.y)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info().name, "Canvas renderer initialized");
        let renderer = SdlRenderer::new(canvas, asset_root.join("images"));

        let audio: Box<dyn AudioBackend> = match MixerAudio::try_new(&asset_root) {
            Ok(audio) => Box::new(audio),
            Err(e) => {
                warn!("Failed to initialize audio: {}. Audio will be disabled.", e);
                Box::new(NullAudio)
            }
        };

        let game = Game::new(config, audio);

        info!("Application initialization completed successfully");
        Ok(App {
            game,
            renderer,
            event_pump,
            last_tick: Instant::now(),
            focused: true,
            _sdl_context: sdl_context,
            _audio_subsystem: audio_subsystem,
        })
    }

    /// Executes a single frame: polls input, updates, draws, then sleeps out the rest of `LOOP_TIME`.
    ///
    /// # Returns
    ///
    /// `true` if the game should continue running, `false` if the game requested exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();
        let dt = self.last_tick.elapsed().as_secs_f32();
        self.last_tick = start;

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => self.game.command(GameCommand::Exit),
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => self.game.click(Vec2::new(x as f32, y as f32)),
                Event::Window { win_event, .. } => match win_event {
                    WindowEvent::FocusGained => self.focused = true,
                    WindowEvent::FocusLost => self.focused = false,
                    _ => {}
                },
                _ => {}
            }
        }
        self.game
            .set_controls(platform::input::controls(&self.event_pump.keyboard_state()));

        if self.game.tick(dt) {
            return false;
        }

        if let Err(e) = self.game.draw(&mut self.renderer) {
            warn!("Failed to draw frame: {}", e);
        }
        self.renderer.present();

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                platform::sleep(time, self.focused);
            }
        }

        true
    }
}
