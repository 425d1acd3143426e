//! This module contains the main game controller.
//!
//! [`Game`] owns the world ([`GameState`]), the input state and every overlay. The host calls
//! [`Game::frame`] once per display frame and reports page visibility changes; everything
//! else (pausing, map transitions, game over, restart) is decided here.

use std::time::Duration;

use glam::UVec2;
use tracing::{debug, info};

use crate::clock::SharedClock;
use crate::constants::CANVAS_SIZE;
use crate::entity::{Combatant, Direction};
use crate::error::{GameResult, MapError};
use crate::events::{EventQueue, GameEvent};
use crate::input::{Input, Key};
use crate::map::MapId;
use crate::render::{Camera, Color, RenderContext};
use crate::ui::inventory::PlayerStats;
use crate::ui::{hud, Dialog, GameOver, IntroScene, MapChange, Menu, MenuAction, PauseFlags, Transition, TransitionStep};

pub mod state;
pub mod timing;

pub use state::GameState;
pub use timing::FrameTimer;

pub struct Game {
    pub state: GameState,
    input: Input,
    dialog: Dialog,
    menu: Menu,
    transition: Transition,
    intro: IntroScene,
    game_over: GameOver,
    events: EventQueue,
    clock: SharedClock,
    timer: FrameTimer,
    page_visible: bool,
    /// Last frame delta, for the debug HUD.
    last_frame_delta: Duration,
}

impl Game {
    pub fn new(clock: SharedClock) -> GameResult<Game> {
        Self::with_input(clock, Input::default())
    }

    /// Creates the game with a prepared input handler (e.g. one with touch controls).
    pub fn with_input(clock: SharedClock, input: Input) -> GameResult<Game> {
        let events = EventQueue::new();
        let state = GameState::new(&events, &clock)?;

        let mut game = Game {
            state,
            input,
            dialog: Dialog::default(),
            menu: Menu::default(),
            transition: Transition::default(),
            intro: IntroScene::default(),
            game_over: GameOver::default(),
            events,
            clock,
            timer: FrameTimer::default(),
            page_visible: true,
            last_frame_delta: Duration::ZERO,
        };
        game.show_intro();
        Ok(game)
    }

    /// Runs one display frame: overlay input, transition, world update, render.
    ///
    /// Nothing but the input edges is touched while the page is hidden.
    pub fn frame(&mut self, ctx: &mut dyn RenderContext) -> GameResult<()> {
        let dt = self.timer.frame_delta(self.clock.now());
        self.last_frame_delta = dt;

        if self.page_visible {
            self.handle_overlay_input()?;
            self.advance_transition(dt);
            self.update();
            self.render(ctx)?;
        }

        self.input.end_frame();
        crate::formatter::increment_tick();
        Ok(())
    }

    /// Records a page/window visibility change.
    ///
    /// Becoming visible restarts the frame and update clocks and renders immediately.
    pub fn set_page_visible(&mut self, visible: bool, ctx: &mut dyn RenderContext) -> GameResult<()> {
        if self.page_visible == visible {
            return Ok(());
        }

        debug!(visible, "Page visibility changed");
        self.page_visible = visible;
        if visible {
            self.timer.resync(self.clock.now());
            self.render(ctx)?;
        } else {
            self.input.release_all();
        }
        Ok(())
    }

    pub fn is_page_visible(&self) -> bool {
        self.page_visible
    }

    /// Every overlay currently pausing the world.
    pub fn pause_flags(&self) -> PauseFlags {
        let mut flags = PauseFlags::empty();
        flags.set(PauseFlags::DIALOG, self.dialog.is_active());
        flags.set(PauseFlags::MENU, self.menu.is_visible());
        flags.set(PauseFlags::INVENTORY, self.state.player.inventory.is_visible());
        flags.set(PauseFlags::TRANSITION, self.transition.is_active());
        flags.set(PauseFlags::GAME_OVER, self.game_over.is_visible());
        flags.set(PauseFlags::INTRO, self.intro.is_visible());
        flags
    }

    /// Advances the world by one tick unless an overlay pauses it.
    ///
    /// An open dialog still reads its own input (E or Space moves to the next message).
    fn update(&mut self) {
        let flags = self.pause_flags();

        if flags.contains(PauseFlags::DIALOG) {
            if self.input.is_pressed(Key::Interact) || self.input.is_pressed(Key::Attack) {
                if let Some(event) = self.dialog.advance() {
                    self.events.send(event);
                    self.process_events();
                }
            }
            return;
        }

        if !flags.is_live() {
            return;
        }

        let dt = self.timer.update_delta(self.clock.now());

        let GameState {
            maps, current, player, ..
        } = &mut self.state;
        let map = &mut maps[*current];

        map.update(player, dt);
        if let Some(interaction) = player.update(&self.input, map) {
            self.dialog.start_conversation(interaction.messages, interaction.on_complete);
        }
        self.state.sync_debug();

        self.process_events();
        self.check_transition_zone();
    }

    /// Starts a map change when the player stands, aligned, inside a transition zone.
    fn check_transition_zone(&mut self) {
        let player = &self.state.player;
        if !player.is_aligned() || player.is_transitioning || !player.is_alive() {
            return;
        }

        let map = self.state.current_map();
        let tile = player.body().tile(map.tile_size());
        if let Some(zone) = map.zone_at(tile) {
            let (destination, arrival) = (zone.destination, zone.arrival);
            debug!(zone = zone.name, "Entered transition zone");
            self.change_map(destination, arrival);
        }
    }

    /// Begins a transition to `map`, arriving on `destination` (a tile) or the map's initial position.
    ///
    /// Returns false, doing nothing, while a transition is active or the player is already locked.
    pub fn change_map(&mut self, map: MapId, destination: Option<UVec2>) -> bool {
        if self.transition.is_active() || self.state.player.is_transitioning {
            debug!(map = %map, "Map change rejected, transition in progress");
            return false;
        }

        if !self.transition.begin(MapChange { map, destination }) {
            return false;
        }
        self.state.player.is_transitioning = true;
        info!(from = %self.state.current, to = %map, "Map change started");
        true
    }

    /// Like [`Game::change_map`] but takes the map's serialized name.
    pub fn change_map_by_name(&mut self, name: &str, destination: Option<UVec2>) -> GameResult<bool> {
        let map = name.parse::<MapId>().map_err(|_| MapError::UnknownMap(name.to_string()))?;
        Ok(self.change_map(map, destination))
    }

    fn advance_transition(&mut self, dt: Duration) {
        match self.transition.advance(dt) {
            Some(TransitionStep::Swap(change)) => {
                self.state.apply_map_change(change);
                self.state.sync_debug();
            }
            Some(TransitionStep::Unlock) => {
                self.state.player.is_transitioning = false;
                debug!("Player unlocked");
            }
            None => {}
        }
    }

    /// Shows a conversation; `on_complete` is dispatched when it is dismissed.
    pub fn show_dialog<S: Into<String>>(&mut self, messages: impl IntoIterator<Item = S>, on_complete: Option<GameEvent>) {
        self.dialog.start_conversation(messages, on_complete);
    }

    fn process_events(&mut self) {
        for event in self.events.drain() {
            match event {
                GameEvent::PlayerDefeated => self.handle_game_over(),
                GameEvent::NpcDefeated { name, gold } => {
                    info!(npc = name, gold, "NPC defeated");
                    self.state.player.add_gold(gold);
                }
                GameEvent::HealPlayer(amount) => {
                    debug!(amount, "Healing player");
                    self.state.player.heal(amount);
                }
                GameEvent::ChangeMap { map, destination } => {
                    self.change_map(map, destination);
                }
            }
        }
    }

    /// Hides the controls and shows the game-over screen. Enter then restarts.
    pub fn handle_game_over(&mut self) {
        info!("Game over");
        self.input.hide_controls();
        self.dialog.hide();
        self.menu.hide();
        self.state.player.inventory.hide();
        self.game_over.show();
    }

    /// Rebuilds every map, restores the player in the home town and shows the intro again.
    pub fn restart_game(&mut self) -> GameResult<()> {
        info!("Restarting game");
        self.transition.cancel();
        self.game_over.hide();
        self.dialog.hide();
        self.menu.hide();

        // Events from the previous session must not leak into the new one
        self.events.drain();
        self.state.reset(&self.events, &self.clock)?;

        self.show_intro();
        Ok(())
    }

    pub fn toggle_debug(&mut self) {
        self.state.debug = !self.state.debug;
        info!(debug = self.state.debug, "Debug mode toggled");
        self.state.sync_debug();
    }

    fn show_intro(&mut self) {
        self.input.hide_controls();
        self.intro.show();
    }

    /// Input for the intro, game-over, menu and inventory screens.
    fn handle_overlay_input(&mut self) -> GameResult<()> {
        if self.intro.is_visible() {
            if self.input.is_pressed(Key::Confirm) {
                info!("Game started");
                self.intro.hide();
                self.input.show_controls();
            }
            return Ok(());
        }

        if self.game_over.is_visible() {
            if self.input.is_pressed(Key::Confirm) {
                self.restart_game()?;
            }
            return Ok(());
        }

        if self.dialog.is_active() {
            return Ok(());
        }

        let inventory = &mut self.state.player.inventory;
        if inventory.is_visible() {
            if self.input.is_pressed(Key::Inventory) || self.input.is_pressed(Key::Menu) {
                inventory.hide();
            } else {
                for (key, direction) in [
                    (Key::Up, Direction::Up),
                    (Key::Down, Direction::Down),
                    (Key::Left, Direction::Left),
                    (Key::Right, Direction::Right),
                ] {
                    if self.input.is_pressed(key) {
                        inventory.navigate(direction);
                    }
                }
            }
            return Ok(());
        }

        if self.menu.is_visible() {
            if self.input.is_pressed(Key::Menu) {
                self.menu.hide();
            } else if self.input.is_pressed(Key::Up) {
                self.menu.select_previous();
            } else if self.input.is_pressed(Key::Down) {
                self.menu.select_next();
            } else if self.input.is_pressed(Key::Confirm) || self.input.is_pressed(Key::Interact) {
                match self.menu.activate() {
                    Some(MenuAction::ToggleDebug) => self.toggle_debug(),
                    Some(MenuAction::Restart) => self.restart_game()?,
                    Some(MenuAction::Resume) | None => {}
                }
            }
            return Ok(());
        }

        if self.transition.is_active() {
            return Ok(());
        }

        if self.input.is_pressed(Key::Menu) {
            self.menu.show();
        } else if self.input.is_pressed(Key::Inventory) {
            self.state.player.inventory.show();
        }
        Ok(())
    }

    pub fn render(&self, ctx: &mut dyn RenderContext) -> GameResult<()> {
        ctx.clear(Color::BLACK)?;

        let map = self.state.current_map();
        let player = &self.state.player;
        let camera = Camera::follow(player.body().center(), map.pixel_size(), CANVAS_SIZE);

        map.render(ctx, &camera)?;
        player.render(ctx, &camera)?;

        let fps = (self.state.debug && !self.last_frame_delta.is_zero()).then(|| 1.0 / self.last_frame_delta.as_secs_f32());
        let combat = player.combat();
        let health = combat
            .health_bar_recently_changed()
            .then(|| (combat.current_health(), combat.max_health()));
        hud::render(ctx, map.name, health, fps)?;

        player.inventory.render(
            ctx,
            PlayerStats {
                health: combat.current_health(),
                max_health: combat.max_health(),
                gold: player.gold(),
            },
        )?;
        self.dialog.render(ctx)?;
        self.menu.render(ctx, self.state.debug)?;
        self.transition.render(ctx)?;
        self.game_over.render(ctx)?;
        self.intro.render(ctx)?;
        Ok(())
    }

    pub fn player(&self) -> &crate::entity::Player {
        &self.state.player
    }

    pub fn player_mut(&mut self) -> &mut crate::entity::Player {
        &mut self.state.player
    }

    pub fn current_map(&self) -> MapId {
        self.state.current
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn intro(&self) -> &IntroScene {
        &self.intro
    }

    pub fn game_over(&self) -> &GameOver {
        &self.game_over
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }
}
