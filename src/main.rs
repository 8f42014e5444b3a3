//! Terminal ZType runner (default binary).
//!
//! Words fall from the top of the screen; type a word's first letter to lock
//! onto it and finish typing it before it reaches the line near the bottom.
//!
//! # Usage
//!
//! ```bash
//! # Random seed, one word per second
//! tui-ztype
//!
//! # Reproducible game, faster ticks
//! tui-ztype --seed 42 --tick-ms 600
//!
//! # Debug log to a file (the terminal is busy with the game)
//! tui-ztype --log-file ztype.log --log-level debug
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tui_ztype::core::GameState;
use tui_ztype::input::{handle_key_event, should_quit};
use tui_ztype::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_ztype::types::{GameAction, GameConfig, MAX_WORD_LENGTH, MIN_WORD_LENGTH, TICK_INTERVAL_MS};

/// Falling-word typing game for the terminal
#[derive(Parser, Debug)]
#[command(name = "tui-ztype")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the word generator (random when omitted)
    #[arg(short = 's', long, env = "ZTYPE_SEED")]
    seed: Option<u32>,

    /// Milliseconds between ticks
    #[arg(short = 't', long, env = "ZTYPE_TICK_MS", default_value_t = TICK_INTERVAL_MS)]
    tick_ms: u32,

    /// Shortest word to spawn
    #[arg(long, default_value_t = MIN_WORD_LENGTH)]
    min_len: usize,

    /// Longest word to spawn
    #[arg(long, default_value_t = MAX_WORD_LENGTH)]
    max_len: usize,

    /// Write logs to this file
    #[arg(long, env = "ZTYPE_LOG_FILE", value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "ZTYPE_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            tick_interval_ms: self.tick_ms,
            min_word_length: self.min_len,
            max_word_length: self.max_len,
            ..GameConfig::default()
        }
    }
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log level")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    let state = new_game(args.seed, args.config())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, state);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn new_game(seed: Option<u32>, config: GameConfig) -> Result<GameState> {
    let state = GameState::start(seed, config).context("invalid game configuration")?;
    info!(seed = state.seed(), "starting game");
    Ok(state)
}

fn run(term: &mut TerminalRenderer, mut state: GameState) -> Result<()> {
    let config = *state.config();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(config.tick_interval_ms as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&state, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(GameAction::Type(letter)) => state = state.on_letter(letter),
                        Some(GameAction::Restart) if state.is_over() => {
                            // Continue the word stream rather than replaying it.
                            state = new_game(Some(state.seed()), config)?;
                            last_tick = Instant::now();
                        }
                        _ => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            state = state.on_tick();
        }
    }
}
