#![allow(dead_code)]

use std::rc::Rc;
use std::time::Duration;

use dragonlair::clock::{ManualClock, SharedClock};
use dragonlair::combat::{Combat, CombatOptions};
use dragonlair::events::EventQueue;
use dragonlair::game::Game;
use dragonlair::input::Key;
use dragonlair::render::recording::RecordingContext;

/// One display frame at 60 Hz.
pub const FRAME: Duration = Duration::from_millis(16);

pub fn manual_clock() -> Rc<ManualClock> {
    Rc::new(ManualClock::default())
}

pub fn shared(clock: &Rc<ManualClock>) -> SharedClock {
    clock.clone()
}

pub fn combat(clock: &Rc<ManualClock>, options: CombatOptions) -> Combat {
    Combat::new(shared(clock), options)
}

/// A game driven by a manual clock and a recording context.
pub struct Harness {
    pub game: Game,
    pub clock: Rc<ManualClock>,
    pub ctx: RecordingContext,
}

impl Harness {
    /// Builds a game and dismisses the intro.
    pub fn started() -> Self {
        let mut harness = Self::at_intro();
        harness.tap(Key::Confirm);
        harness
    }

    pub fn at_intro() -> Self {
        let clock = manual_clock();
        let game = Game::new(shared(&clock)).expect("game should build");
        let mut harness = Self {
            game,
            clock,
            ctx: RecordingContext::new(),
        };
        // Establish the frame timer's baseline
        harness.frame();
        harness
    }

    pub fn frame(&mut self) {
        self.game.frame(&mut self.ctx).expect("frame should render");
    }

    /// Advances the clock by `step` and runs one frame, `count` times.
    pub fn run(&mut self, count: usize, step: Duration) {
        for _ in 0..count {
            self.clock.advance(step);
            self.frame();
        }
    }

    /// Presses and releases `key` around a single frame.
    pub fn tap(&mut self, key: Key) {
        self.game.input_mut().key_down(key);
        self.clock.advance(FRAME);
        self.frame();
        self.game.input_mut().key_up(key);
    }
}

pub fn events() -> EventQueue {
    EventQueue::new()
}
