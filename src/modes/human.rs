use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;
use tracing::{debug, info};

use crate::game::{GameConfig, GameState, Phase};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Interactive terminal session
///
/// Each frame hands the wall-clock time since the previous frame to
/// [`GameState::advance`]; the engine decides how many ticks that buys.
pub struct HumanMode {
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: &GameConfig) -> Result<Self> {
        let state = GameState::new(config).context("Invalid game configuration")?;

        Ok(Self {
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render (and feed the scheduler) at ~30 FPS
        let frame_interval = Duration::from_millis(33);
        let mut frame_timer = interval(frame_interval);
        let mut last_frame = Instant::now();

        info!(
            width = self.state.space.width(),
            height = self.state.space.height(),
            depth = self.state.space.depth(),
            tick_ms = self.state.tick_ms,
            "session started"
        );

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Advance simulation and render frame
                _ = frame_timer.tick() => {
                    let now = Instant::now();
                    self.update_game(now.duration_since(last_frame));
                    last_frame = now;

                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
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
            high_score = self.metrics.high_score,
            games_played = self.metrics.games_played,
            "session ended"
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => {
                    if !self.state.set_direction(direction) {
                        debug!(%direction, "direction change ignored");
                    }
                }
                KeyAction::TogglePause => self.state.toggle_pause(),
                KeyAction::Restart => self.reset_game(),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self, elapsed: Duration) {
        if self.state.phase() == Phase::Running {
            self.metrics.record_play(elapsed);
        }

        let was_over = self.state.game_over;
        self.state.advance(elapsed.as_micros() as f64 / 1000.0);

        // Track game over
        if !was_over && self.state.game_over {
            self.metrics.on_game_over(self.state.score);
        }
    }

    fn reset_game(&mut self) {
        self.state.restart();
        self.metrics.on_game_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
