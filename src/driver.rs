//! Fixed-rate tick driver
//!
//! Hosts report wall-clock frame deltas; the driver turns them into whole
//! simulation ticks. Input from any thread goes through one mpsc queue and
//! is applied right before each tick, so the simulation only ever sees a
//! single writer.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::config::{Config, ConfigError};
use crate::consts::MAX_FRAME_DT;
use crate::sim::{GameEvent, GameState, InputEvent, handle_input, update};

/// Owns the game state and paces it at the configured tick rate
pub struct Driver {
    state: GameState,
    accumulator: f32,
    input_tx: Sender<InputEvent>,
    input_rx: Receiver<InputEvent>,
}

impl Driver {
    /// Validate the config and start a new game with the block grid placed
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_state(GameState::start(config)))
    }

    /// Drive an existing state (e.g. a restored snapshot)
    pub fn from_state(state: GameState) -> Self {
        let (input_tx, input_rx) = mpsc::channel();
        log::info!(
            "Driver started at {} Hz ({} blocks)",
            state.config.tick_rate_hz,
            state.blocks.len()
        );
        Self {
            state,
            accumulator: 0.0,
            input_tx,
            input_rx,
        }
    }

    /// A handle other threads can use to queue input
    pub fn input_sender(&self) -> Sender<InputEvent> {
        self.input_tx.clone()
    }

    /// Queue input for the next tick
    pub fn push_input(&self, event: InputEvent) {
        // The receiver lives in self, so the channel is never closed here
        let _ = self.input_tx.send(event);
    }

    /// Feed a frame delta (seconds) and run the ticks it covers
    ///
    /// Returns the number of ticks run.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let tick_dt = self.state.config.tick_dt();
        let max_substeps = self.state.config.max_substeps;
        let mut substeps = 0;
        while self.accumulator >= tick_dt && substeps < max_substeps {
            self.apply_queued_input();
            update(&mut self.state, tick_dt);
            self.accumulator -= tick_dt;
            substeps += 1;
        }

        if substeps == max_substeps && self.accumulator >= tick_dt {
            log::trace!("Substep cap hit, {:.4}s carried over", self.accumulator);
        }
        substeps
    }

    fn apply_queued_input(&mut self) {
        while let Ok(event) = self.input_rx.try_recv() {
            handle_input(&mut self.state, &event);
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}
