use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::info;

use crate::game::{Action, GameConfig, GameEngine, GameState, TickOutcome};
use crate::input::{InputBuffer, InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Renderer, Tui};

/// Timer firing `speed` times per second, first tick one period from now
fn tick_interval(speed: u32) -> Interval {
    let period = Duration::from_nanos(1_000_000_000 / u64::from(speed.max(1)));
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    input_buffer: InputBuffer,
    should_quit: bool,
    paused: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let input_buffer = InputBuffer::new(config.input_policy);
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            input_buffer,
            should_quit: false,
            paused: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play until the player quits. One tick moves the snake once and draws
    /// one frame; the tick rate follows the current speed.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut timer_speed = self.state.speed;
        let mut tick_timer = tick_interval(timer_speed);

        info!(
            width = self.state.grid.width(),
            height = self.state.grid.height(),
            speed = timer_speed,
            "game started"
        );
        self.draw(tui)?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.on_tick();
                    self.draw(tui)?;

                    if self.state.speed != timer_speed {
                        timer_speed = self.state.speed;
                        tick_timer = tick_interval(timer_speed);
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            ticks = self.state.ticks,
            best_length = self.state.best_length,
            apples = self.metrics.apples_eaten,
            games = self.metrics.games_played,
            "game closed"
        );
        Ok(())
    }

    fn draw(&mut self, tui: &mut Tui) -> Result<()> {
        self.metrics.update();
        tui.draw(|frame| {
            self.renderer
                .render(frame, &self.state, &self.metrics, self.paused);
        })
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::GameAction(Action::Move(dir)) => {
                    self.input_buffer.push(dir, self.state.snake.heading());
                }
                KeyAction::GameAction(Action::Continue) => {
                    // No action needed
                }
                KeyAction::Pause => {
                    self.paused = !self.paused;
                }
                KeyAction::Restart => {
                    self.reset_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn on_tick(&mut self) {
        if self.paused {
            return;
        }

        let action = self.input_buffer.take();
        let result = self.engine.step(&mut self.state, action);

        match result.outcome {
            TickOutcome::Ate => self.metrics.on_apple_eaten(),
            TickOutcome::Reset { .. } => {
                self.metrics.on_game_over();
                self.input_buffer.clear();
            }
            TickOutcome::Moved => {}
        }
    }

    fn reset_game(&mut self) {
        info!(length = self.state.snake.len(), "restart requested");
        self.engine.restart(&mut self.state);
        self.metrics.on_game_over();
        self.input_buffer.clear();
        self.paused = false;
    }
}
