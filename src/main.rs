//! Othello GUI and headless self-play
//!
//! Plays Othello against the search agent in a window, or lets two agents
//! play each other in the terminal with `--headless`.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use othello::config::AgentConfig;
use othello::ui::{AppSettings, GameMode, OthelloApp};
use othello::{AIEngine, Board, Difficulty, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HumanSide {
    Dark,
    Light,
}

impl From<HumanSide> for Side {
    fn from(side: HumanSide) -> Self {
        match side {
            HumanSide::Dark => Side::Dark,
            HumanSide::Light => Side::Light,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "othello", version, about = "Othello against an alpha-beta search agent")]
struct Args {
    /// Agent strength (search depth 1, 3 or 5)
    #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Thinking time per move in seconds, checked between depths
    #[arg(long, value_name = "SECS", default_value_t = 3)]
    time_budget: u64,

    /// Side played by the human
    #[arg(long, value_enum, default_value_t = HumanSide::Dark)]
    human: HumanSide,

    /// Let the agent play both sides in the terminal
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let time_budget = Duration::from_secs(args.time_budget);

    if args.headless {
        let config = AgentConfig::from_difficulty(args.difficulty).with_time_budget(time_budget);
        self_play(config);
        return Ok(());
    }

    let settings = AppSettings {
        mode: GameMode::PvE {
            human: args.human.into(),
        },
        difficulty: args.difficulty,
        time_budget,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 600.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Othello"),
        ..Default::default()
    };

    eframe::run_native(
        "Othello",
        options,
        Box::new(move |cc| Ok(Box::new(OthelloApp::new(cc, settings)))),
    )
}

/// Agent vs agent, printing the board after every move.
fn self_play(config: AgentConfig) {
    let mut dark = AIEngine::with_config(config);
    let mut light = AIEngine::with_config(config);
    let mut board = Board::new();
    let limits = dark.config();
    info!(
        depth_limit = limits.depth_limit,
        time_budget_ms = limits.time_budget.as_millis() as u64,
        "headless self-play"
    );
    println!("{}\n", board);

    while !board.is_terminal() {
        let side = board.side_to_move();
        let engine = match side {
            Side::Dark => &mut dark,
            Side::Light => &mut light,
        };

        match engine.select_move(&board) {
            Some(pos) => {
                board.apply_move(pos);
                println!("{} plays {}\n{}\n", side, pos, board);
            }
            None => {
                info!(%side, "no legal move, passing");
                board.pass_turn();
            }
        }
    }

    if let Some(outcome) = board.outcome() {
        println!("{}", outcome);
    }
}
