use std::time::{Duration, Instant};

use sdl2::event::{Event, WindowEvent};
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::{EventPump, Sdl};
use tracing::{debug, error, info, trace, warn};

use crate::clock::SystemClock;
use crate::constants::{CANVAS_SIZE, LOOP_TIME};
use crate::error::{GameError, GameResult};
use crate::game::Game;
use crate::input::bindings::Bindings;
use crate::platform;

/// Owns the SDL window and event pump and drives [`Game::frame`] once per loop iteration.
pub struct App {
    pub game: Game,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    bindings: Bindings,
    focused: bool,
    // Dropping the context shuts the video subsystem down
    _sdl_context: Sdl,
}

impl App {
    /// Initializes SDL, opens the window and builds the game.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL step fails, or the map error from building the world.
    pub fn new(debug_mode: bool) -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(|e| GameError::Sdl(e.to_string()))?;
        let video_subsystem = sdl_context.video().map_err(|e| GameError::Sdl(e.to_string()))?;
        let event_pump = sdl_context.event_pump().map_err(|e| GameError::Sdl(e.to_string()))?;

        trace!(width = CANVAS_SIZE.x, height = CANVAS_SIZE.y, "Creating game window");
        let window = video_subsystem
            .window("Dragon's Lair", CANVAS_SIZE.x, CANVAS_SIZE.y)
            .resizable()
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        canvas
            .set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");

        let mut game = Game::new(SystemClock::shared())?;
        if debug_mode {
            game.toggle_debug();
        }

        info!("Application initialization completed successfully");
        Ok(App {
            game,
            canvas,
            event_pump,
            bindings: Bindings::default(),
            focused: true,
            _sdl_context: sdl_context,
        })
    }

    /// Runs a single iteration of the main loop, sleeping off whatever is left of [`LOOP_TIME`].
    ///
    /// Returns `false` once the window has been closed.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    info!("Exit requested. Exiting...");
                    return false;
                }
                Event::Window { win_event, .. } => {
                    let visible = match win_event {
                        WindowEvent::Hidden | WindowEvent::Minimized => Some(false),
                        WindowEvent::Shown | WindowEvent::Restored => Some(true),
                        WindowEvent::FocusLost => {
                            self.focused = false;
                            None
                        }
                        WindowEvent::FocusGained => {
                            self.focused = true;
                            None
                        }
                        _ => None,
                    };

                    if let Some(visible) = visible {
                        if let Err(e) = self.game.set_page_visible(visible, &mut self.canvas) {
                            error!("Failed to apply visibility change: {e}");
                        }
                    }
                }
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    if let Some(key) = self.bindings.get(keycode) {
                        self.game.input_mut().key_down(key);
                    }
                }
                Event::KeyUp {
                    keycode: Some(keycode), ..
                } => {
                    if let Some(key) = self.bindings.get(keycode) {
                        self.game.input_mut().key_up(key);
                    }
                }
                _ => {}
            }
        }

        if let Err(e) = self.game.frame(&mut self.canvas) {
            error!("Failed to run frame: {e}");
        }
        self.canvas.present();

        let elapsed = start.elapsed();
        if elapsed < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(elapsed);
            if time != Duration::ZERO {
                platform::sleep(time, self.focused);
            }
        } else {
            warn!(behind = ?(elapsed - LOOP_TIME), "Game loop behind schedule");
        }

        true
    }
}
