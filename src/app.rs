use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::time::{Duration, Instant};
use tracing::info;

use crate::audio::AudioSink;
use crate::config::Config;
use crate::game::Game;
use crate::input::{InputAction, InputManager};
use crate::renderer::GameRenderer;
use crate::scene::RenderView;

/// Target length of one frame (60 Hz).
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// The main application: wires the simulation to the terminal, input and
/// sound, one tick per rendered frame.
pub struct App {
    running: bool,
    game: Game,
    /// Where the field was last drawn; mouse cells are mapped through it.
    field_area: Rect,
    input_manager: InputManager,
    renderer: GameRenderer,
    audio: Box<dyn AudioSink>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, seed: u64, audio: Box<dyn AudioSink>) -> Result<Self> {
        let game = Game::new(config, seed)?;
        let input_manager = InputManager::new(
            game.player().pos,
            game.config().field_width,
            game.config().field_height,
        );

        info!(seed, "game created");
        Ok(Self {
            running: true,
            game,
            field_area: Rect::default(),
            input_manager,
            renderer: GameRenderer::new(),
            audio,
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            let frame_start = Instant::now();

            self.input_manager.poll_events(self.field_area)?;
            let actions = self.input_manager.actions().to_vec();
            self.process_actions(&actions);

            self.game.tick(self.input_manager.pointer());
            for event in self.game.drain_events() {
                self.audio.play_event(&event);
            }

            terminal.draw(|frame| {
                self.field_area = frame.area();
                let view = RenderView::from_game(&self.game, self.input_manager.pointer());
                self.renderer.render(frame, &view);
            })?;

            // Hold the frame clock at 60 Hz without spinning
            if let Some(remaining) = FRAME_DURATION.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
        Ok(())
    }

    /// Process input actions and update game state accordingly
    fn process_actions(&mut self, actions: &[InputAction]) {
        for action in actions {
            match action {
                InputAction::Quit => {
                    info!(score = self.game.stats().score, "quit");
                    self.running = false;
                }
                InputAction::Confirm => self.game.confirm(),
                InputAction::Cancel => self.game.cancel(),
                InputAction::Fire => self.game.fire(),
            }
        }
    }
}
