//! Terminal 2048 runner (default binary).
//!
//! Interactive by default: crossterm for input and the framebuffer renderer
//! for output. With `--moves` it plays a move script headless and prints the
//! board after every push.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tui_2048::core::config::ENV_SEED;
use tui_2048::core::{parse_moves, Game, GameConfig};
use tui_2048::input::{action_for_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, TileLayer, Viewport};
use tui_2048::types::{tile_value, GameAction};

#[derive(Parser, Debug)]
#[command(name = "tui-2048", about = "Slide and merge tiles in the terminal")]
struct Args {
    /// Grid side length, 2 to 8. Overrides TUI_2048_SIZE.
    #[arg(long)]
    size: Option<usize>,
    /// Seed for tile placement. Overrides TUI_2048_SEED.
    #[arg(long)]
    seed: Option<u32>,
    /// Play a move script without a terminal UI, e.g. "uldr" or "up,left,down".
    #[arg(long)]
    moves: Option<String>,
    /// Tracing filter, e.g. "info", "tui_2048_core=debug".
    #[arg(long, default_value = "info")]
    log: String,
    /// Write logs to this file. Interactive mode logs nowhere without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let headless = args.moves.is_some();
    init_logging(&args, headless)?;

    let config = resolve_config(&args, headless);
    config.validate()?;
    info!(size = config.grid_size, seed = config.seed, headless, "starting");

    if let Some(script) = &args.moves {
        return run_headless(config, script);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(args: &Args, headless: bool) -> Result<()> {
    let file_layer = match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };
    // stderr would scribble over the alternate screen, so only headless runs use it.
    let stderr_layer =
        (headless && args.log_file.is_none()).then(|| fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(EnvFilter::new(&args.log))
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}

/// Flags over environment over defaults.
///
/// An interactive game with no seed anywhere is seeded from the clock;
/// headless runs stay reproducible.
fn resolve_config(args: &Args, headless: bool) -> GameConfig {
    let mut config = GameConfig::from_env();
    if let Some(size) = args.size {
        config.grid_size = size;
    }
    match args.seed {
        Some(seed) => config.seed = seed,
        None if !headless && std::env::var(ENV_SEED).is_err() => {
            config.seed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(config.seed);
        }
        None => {}
    }
    config
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game = Game::new(config)?;
    game.start();

    let mut layer = TileLayer::new(config.grid_size);
    layer.apply(&game.take_events())?;

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), &layer, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            TermEvent::Key(key) => {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    info!(score = game.score(), moves = game.moves(), "quit");
                    return Ok(());
                }
                let Some(action) = action_for_event(key) else {
                    continue;
                };
                if action == GameAction::Restart {
                    layer.reset();
                }
                game.apply_action(action);
                layer
                    .apply(&game.take_events())
                    .context("tile layer rejected push events")?;
            }
            TermEvent::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn run_headless(config: GameConfig, script: &str) -> Result<()> {
    let moves = parse_moves(script)?;
    let mut game = Game::new(config)?;
    game.start();

    let mut layer = TileLayer::new(config.grid_size);
    layer.apply(&game.take_events())?;
    print!("{}", game.grid());

    for direction in moves {
        let result = game.push(direction);
        layer.apply(&game.take_events())?;
        ensure!(
            layer.levels() == game.grid().to_rows(),
            "tile layer diverged from grid after {direction}"
        );

        println!();
        println!("{direction}{}", if result.changed { "" } else { " (no change)" });
        for ev in result.events.iter().filter(|ev| !ev.is_noop()) {
            println!("  {ev}");
        }
        print!("{}", game.grid());

        if game.game_over() {
            println!("game over");
            break;
        }
    }

    println!();
    println!(
        "score {}  moves {}  highest tile {}",
        game.score(),
        game.moves(),
        tile_value(game.grid().highest_level())
    );
    Ok(())
}
