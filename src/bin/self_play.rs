//! Terminal harness for the rules engine.
//!
//! Run with:
//! `cargo run --release --bin self_play -- play --seed 7`
//! `cargo run --release --bin self_play -- perft --depth 4`
//!
//! `RUST_LOG=debug` shows every move and engine choice.

use std::path::Path;

use clap::{arg, command, value_parser, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

use overlay_chess::engines::engine_trait::Engine;
use overlay_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use overlay_chess::game_state::chess_types::Color;
use overlay_chess::game_state::game_state::GameState;
use overlay_chess::move_generation::perft::perft_multi_threaded;
use overlay_chess::session::session_config::{OpponentPolicy, SessionConfig};
use overlay_chess::utils::pgn::write_pgn;
use overlay_chess::utils::render_game_state::render_game_state;

fn policy_from_name(name: &str) -> Result<OpponentPolicy, String> {
    match name {
        "random" => Ok(OpponentPolicy::Random { prefer_captures: false }),
        "captures" => Ok(OpponentPolicy::Random { prefer_captures: true }),
        "scored" => Ok(OpponentPolicy::Scored),
        other => Err(format!("unknown policy '{other}' (expected random, captures or scored)")),
    }
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let matches = command!()
        .propagate_version(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("play")
                .about("Play engine against engine and print the board and PGN")
                .arg(arg!(-c --config <PATH> "JSON session config supplying the default policy and seed"))
                .arg(arg!(-f --fen <FEN> "Starting position").default_value(STARTING_POSITION_FEN))
                .arg(arg!(-w --white <POLICY> "Policy for white: random, captures or scored"))
                .arg(arg!(-b --black <POLICY> "Policy for black: random, captures or scored"))
                .arg(arg!(-s --seed <SEED> "Seed for reproducible games").value_parser(value_parser!(u64)))
                .arg(
                    arg!(-p --"max-plies" <N> "Stop after this many plies")
                        .default_value("300")
                        .value_parser(value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("perft")
                .about("Count leaf nodes of the legal move tree")
                .arg(arg!(-f --fen <FEN> "Board position").default_value(STARTING_POSITION_FEN))
                .arg(
                    arg!(-x --depth <D> "Depth")
                        .default_value("3")
                        .value_parser(value_parser!(u8)),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("play", args)) => {
            let config = match args.get_one::<String>("config") {
                Some(path) => SessionConfig::load_from_path(Path::new(path)).map_err(|e| e.to_string())?,
                None => SessionConfig::default(),
            };
            let white = match args.get_one::<String>("white") {
                Some(name) => policy_from_name(name)?,
                None => config.opponent,
            };
            let black = match args.get_one::<String>("black") {
                Some(name) => policy_from_name(name)?,
                None => config.opponent,
            };
            let seed = args.get_one::<u64>("seed").copied().or(config.seed);
            let fen = args.get_one::<String>("fen").map_or(STARTING_POSITION_FEN, String::as_str);
            let max_plies = args.get_one::<usize>("max-plies").copied().unwrap_or(300);

            let game = GameState::from_fen(fen).map_err(|e| e.to_string())?;
            let engines = [
                white.build_engine(seed),
                black.build_engine(seed.map(|s| s.wrapping_add(1))),
            ];
            let finished = play_game(game, engines, max_plies)?;

            println!("{}\n", render_game_state(&finished));
            println!("{}", finished.game_result());
            println!("{}", write_pgn(&finished));
            Ok(())
        }
        Some(("perft", args)) => {
            let fen = args.get_one::<String>("fen").map_or(STARTING_POSITION_FEN, String::as_str);
            let depth = args.get_one::<u8>("depth").copied().unwrap_or(3);
            let game = GameState::from_fen(fen).map_err(|e| e.to_string())?;
            let counts = perft_multi_threaded(&game, depth).map_err(|e| e.to_string())?;
            println!("{counts:#?}");
            Ok(())
        }
        _ => Err("expected a subcommand: play or perft".to_owned()),
    }
}

fn play_game(mut game: GameState, mut engines: [Box<dyn Engine>; 2], max_plies: usize) -> Result<GameState, String> {
    for engine in engines.iter_mut() {
        engine.new_game();
    }
    info!(
        white = engines[Color::White.index()].name(),
        black = engines[Color::Black.index()].name(),
        max_plies,
        "self-play started"
    );

    for _ in 0..max_plies {
        if game.is_game_over() {
            break;
        }
        let color = game.current_player();
        let Some(mv) = engines[color.index()].choose_move(&game, color) else {
            break;
        };
        game.apply_move(mv.from, mv.to).map_err(|e| e.to_string())?;
    }

    info!(plies = game.history().len(), result = %game.game_result(), "self-play finished");
    Ok(game)
}
