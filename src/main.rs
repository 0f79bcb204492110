use crossterm::event::{self, Event};
use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tictactoe::build_info;
use tictactoe::core::{
    game_tick, TickClock, TickEvent, TickResult, INPUT_POLL_MS, TICK_INTERVAL_MS,
};
use tictactoe::draw_ui;
use tictactoe::input::{map_key, process_input, Cursor, InputResult};
use tictactoe::utils::{init_logging, restore_terminal, Config, RestoreGuard};
use tictactoe::{GameSession, Mode};
use tracing::{debug, info, warn};

/// Command-line options. Flags override ~/.tictactoe/config.json.
struct Options {
    mode: Option<Mode>,
    seed: Option<u64>,
}

fn print_help() {
    println!("Tic Tac Toe - terminal game with a random computer opponent\n");
    println!("Usage: tictactoe [options] [command]\n");
    println!("Commands:");
    println!("  init-config          Write the default config to ~/.tictactoe/config.json");
    println!("\nOptions:");
    println!("  --mode <single|multi>  Start in single-player or two-player mode");
    println!("  --seed <N>             Seed the computer opponent's random choices");
    println!("  --version              Show version information");
    println!("  --help                 Show this help message");
}

fn exit_with_usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'tictactoe --help' for usage.");
    std::process::exit(1);
}

fn parse_args(args: &[String]) -> io::Result<Options> {
    let mut options = Options {
        mode: None,
        seed: None,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "init-config" => {
                let path = Config::path()?;
                Config::default().save_to(&path)?;
                println!("Wrote default config to {}", path.display());
                std::process::exit(0);
            }
            "--version" | "-v" => {
                println!("{}", build_info::version_string());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--mode" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| exit_with_usage_error("--mode needs a value"));
                match value.parse::<Mode>() {
                    Ok(mode) => options.mode = Some(mode),
                    Err(e) => exit_with_usage_error(&e),
                }
            }
            "--seed" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| exit_with_usage_error("--seed needs a value"));
                match value.parse::<u64>() {
                    Ok(seed) => options.seed = Some(seed),
                    Err(_) => exit_with_usage_error(&format!("Invalid seed: {}", value)),
                }
            }
            other => exit_with_usage_error(&format!("Unknown argument: {}", other)),
        }
    }

    Ok(options)
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args)?;

    let loaded = Config::try_load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    if let Err(e) = init_logging(&config.log_filter) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    if let Err(e) = &loaded {
        warn!(error = %e, "config unreadable, using defaults");
    }

    let mode = options.mode.unwrap_or(config.default_mode);
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = GameSession::new(mode);
    info!(%mode, seed = ?options.seed, "starting tictactoe");

    // Setup terminal; the guard restores it if any later step fails
    enable_raw_mode()?;
    let guard = RestoreGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, &mut session, &mut rng);
    guard.restore()?;

    if let Err(e) = &result {
        warn!(error = %e, "game loop exited with error");
    }
    info!(wins_recorded = session.history().len(), "exiting");
    result
}

/// Main loop: draw, poll input, tick the session.
fn run_game<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut GameSession,
    rng: &mut StdRng,
) -> io::Result<()> {
    let mut cursor = Cursor::new();
    let mut clock = TickClock::new(Instant::now(), Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        terminal.draw(|frame| draw_ui(frame, session, &cursor))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                // Hand over time up to the key press before the input can
                // schedule a computer move
                let elapsed = clock.settle(Instant::now());
                log_tick(&game_tick(session, elapsed, rng));

                let input = map_key(key_event);
                if process_input(session, &mut cursor, input) == InputResult::Quit {
                    break;
                }
            }
        }

        if let Some(elapsed) = clock.due(Instant::now()) {
            log_tick(&game_tick(session, elapsed, rng));
        }
    }

    Ok(())
}

fn log_tick(result: &TickResult) {
    for event in &result.events {
        match event {
            TickEvent::ComputerMoved { index, mark } => {
                debug!(index, %mark, "computer moved");
            }
            TickEvent::StaleMoveDiscarded => debug!("stale computer move dropped"),
            TickEvent::GameWon(mark) => info!(%mark, "computer game won"),
            TickEvent::GameDrawn => info!("computer game drawn"),
        }
    }
}
