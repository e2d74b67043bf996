// Animator: drives an animation onto a surface until cancelled
//
// Two states. RUNNING is initial; STOPPED is terminal and is entered either
// through cancellation or when a finite engine runs out of frames.

use ascii_cat_utils::consts::FAREWELL_MESSAGE;
use ascii_cat_utils::{AnimatorResult, CancellationToken};

use crate::animation::AnimationEngine;
use crate::display::Surface;

/// Playback state of an [`Animator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    Running,
    Stopped,
}

/// Configuration for the shutdown path
#[derive(Debug, Clone)]
pub struct AnimatorConfig {
    /// Printed once, on a freshly cleared screen, after playback stops
    pub farewell: String,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            farewell: FAREWELL_MESSAGE.to_string(),
        }
    }
}

pub struct Animator<E: AnimationEngine, S: Surface> {
    engine: E,
    surface: S,
    cancel: CancellationToken,
    config: AnimatorConfig,
    state: AnimatorState,
    frames_shown: u64,
    clear_failures: u64,
}

impl<E: AnimationEngine, S: Surface> Animator<E, S> {
    pub fn new(engine: E, surface: S, cancel: CancellationToken) -> Self {
        Self::with_config(engine, surface, cancel, AnimatorConfig::default())
    }

    pub fn with_config(
        engine: E,
        surface: S,
        cancel: CancellationToken,
        config: AnimatorConfig,
    ) -> Self {
        Self {
            engine,
            surface,
            cancel,
            config,
            state: AnimatorState::Running,
            frames_shown: 0,
            clear_failures: 0,
        }
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// Number of frames written so far
    pub fn frames_shown(&self) -> u64 {
        self.frames_shown
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Loop clear, draw, wait until cancelled, then run the stop path.
    ///
    /// Returns `Ok(())` on a cancellation-driven exit. Only surface write
    /// failures are reported as errors. Calling `run` on a stopped animator
    /// returns immediately.
    pub fn run(&mut self) -> AnimatorResult<()> {
        if self.state == AnimatorState::Stopped {
            log::debug!("Animator already stopped, not restarting");
            return Ok(());
        }

        log::info!(
            "Starting animation at {:.2} fps",
            self.engine.target_fps()
        );

        while !self.cancel.is_cancelled() {
            let frame = match self.engine.next_frame() {
                Some(frame) => frame,
                None => {
                    log::debug!("Animation ran out of frames");
                    break;
                }
            };

            self.clear_surface();
            self.surface.write_frame(&frame.content)?;
            self.frames_shown += 1;
            log::trace!("Drew frame {} ({} total)", frame.index, self.frames_shown);

            if self.cancel.wait_timeout(self.engine.frame_duration()) {
                break;
            }
        }

        self.stop()
    }

    /// Transition to STOPPED: clear once more and print the farewell.
    ///
    /// Idempotent; later calls have no observable effect.
    pub fn stop(&mut self) -> AnimatorResult<()> {
        if self.state == AnimatorState::Stopped {
            return Ok(());
        }
        self.state = AnimatorState::Stopped;
        log::info!("Stopping after {} frames", self.frames_shown);

        self.clear_surface();
        self.surface.write_farewell(&self.config.farewell)?;
        Ok(())
    }

    // Clear failures are non-fatal; the frame is still drawn.
    fn clear_surface(&mut self) {
        if let Err(err) = self.surface.clear() {
            self.clear_failures += 1;
            if self.clear_failures == 1 {
                log::warn!("Failed to clear display, continuing without clearing: {}", err);
            } else {
                log::debug!("Failed to clear display ({}): {}", self.clear_failures, err);
            }
        }
    }
}
