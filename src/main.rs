use std::io;
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use snake_arcade::config::{GameRules, THEME_CLASSIC};
use snake_arcade::game::{GameState, GameStatus};
use snake_arcade::input::{GameInput, InputHandler};
use snake_arcade::renderer;
use snake_arcade::score::{FileHighScoreStore, HighScoreStore};
use snake_arcade::terminal_runtime::{restore_terminal, TerminalSession};

const FRAME_SLEEP: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Classic snake arcade game for the terminal")]
struct Cli {
    /// Seed the game RNG for a reproducible food sequence.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    install_panic_hook();

    let mut store = FileHighScoreStore::at_default_location();
    let high_score = store.load_or_default();

    let rules = GameRules::default();
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(rules, high_score, seed),
        None => GameState::new(rules, high_score),
    };

    run(state, &mut store)
}

fn run(mut state: GameState, store: &mut dyn HighScoreStore) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let theme = THEME_CLASSIC;

    // Record as it stood when the current game started; lets the game-over
    // screen distinguish a fresh record from an old one.
    let mut previous_high_score = state.high_score;
    let mut last_tick = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, previous_high_score, &theme))?;

        if let Some(intent) = input.poll_input()? {
            if intent == GameInput::Quit {
                break;
            }

            let was_playing = state.status == GameStatus::Playing;
            apply_intent(&mut state, intent, &mut previous_high_score);

            // Entering Playing re-arms the tick timer so time spent on a
            // menu does not count against the first tick.
            if !was_playing && state.status == GameStatus::Playing {
                last_tick = Instant::now();
            }
        }

        if state.status == GameStatus::Playing
            && last_tick.elapsed() >= Duration::from_millis(state.game_speed_ms)
        {
            state.tick(store);
            last_tick = Instant::now();
        }

        thread::sleep(FRAME_SLEEP);
    }

    Ok(())
}

/// Routes one intent into the core, remapping Space on the game-over
/// screen to a restart.
fn apply_intent(state: &mut GameState, intent: GameInput, previous_high_score: &mut u32) {
    let intent = if state.status == GameStatus::GameOver
        && intent == GameInput::TogglePauseOrStart
    {
        GameInput::Restart
    } else {
        intent
    };

    if intent == GameInput::Restart {
        *previous_high_score = state.high_score;
    }

    state.apply_input(intent);
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
