use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use jungle::core::settings_persistence::{load_settings, save_settings};
use jungle::core::{ChooserChoice, GameSettings, ModeChoice, SideChoice};
use jungle::game::ai::{AiDifficulty, AiWorker};
use jungle::game::notation::{parse_move, parse_position};
use jungle::game::render::{describe_outcome, describe_status, render_board};
use jungle::game::Session;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// How long to wait between checks on the AI worker
const AI_POLL_INTERVAL: Duration = Duration::from_millis(250);

const HELP: &str = "\
Commands:
  <from> <to>   move a piece, e.g. `f8 f7`
  moves <pos>   show where the piece on <pos> can go
  undo          take back the last move (and the AI's reply)
  new           start a new game
  board         show the board
  quit          leave";

#[derive(Parser, Debug)]
#[command(name = "jungle", version, about = "Jungle (Dou Shou Qi) in the terminal")]
struct Args {
    /// Who plays: pvp, pvc or cvc
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,

    /// Side the computer plays in pvc mode
    #[arg(long, value_enum)]
    ai_side: Option<SideChoice>,

    #[arg(long, value_enum)]
    difficulty: Option<AiDifficulty>,

    /// Move chooser: minimax or mcts
    #[arg(long, value_enum)]
    chooser: Option<ChooserChoice>,

    #[arg(long)]
    mcts_iterations: Option<u32>,

    /// Ply limit for computer-vs-computer games
    #[arg(long)]
    max_plies: Option<u32>,

    /// Seed for reproducible AI play
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter, e.g. `info` or `jungle_engine=debug` (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// Store the effective settings as the new defaults
    #[arg(long)]
    save_settings: bool,
}

enum Flow {
    Continue,
    Quit,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref())?;

    let mut settings = load_settings();
    apply_overrides(&mut settings, &args);
    if args.save_settings {
        if let Err(e) = save_settings(&settings) {
            warn!("[SETTINGS] Could not save settings: {}", e);
        }
    }
    info!("[SESSION] Settings: {:?}", settings);

    let max_plies = usize::try_from(settings.max_plies).context("ply limit does not fit")?;
    let mut session = Session::new(settings.ai_config(), max_plies, args.seed);
    let worker = AiWorker::spawn(args.seed).context("starting the AI worker")?;

    session.start()?;
    println!("{}", HELP);
    print_position(&session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if session.state().is_running() && session.is_ai_turn() && !session.ply_limit_reached() {
            play_ai_turn(&mut session, &worker)?;
            print_position(&session);
            continue;
        }

        print!("> ");
        io::stdout().flush().context("flushing stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading a command")?;

        match handle_command(&mut session, line.trim()) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}

fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("parsing --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn apply_overrides(settings: &mut GameSettings, args: &Args) {
    if let Some(mode) = args.mode {
        settings.mode = mode;
    }
    if let Some(side) = args.ai_side {
        settings.ai_side = side;
    }
    if let Some(difficulty) = args.difficulty {
        settings.difficulty = difficulty;
    }
    if let Some(chooser) = args.chooser {
        settings.chooser = chooser;
    }
    if let Some(iterations) = args.mcts_iterations {
        settings.mcts_iterations = iterations;
    }
    if let Some(max_plies) = args.max_plies {
        settings.max_plies = max_plies;
    }
}

/// Hand the position to the worker and apply its answer
fn play_ai_turn(session: &mut Session, worker: &AiWorker) -> Result<()> {
    let side = session.board().side_to_move();
    worker.request(
        session.board(),
        side,
        *session.config(),
        session.revision(),
    )?;
    println!("{} is thinking...", side);

    let reply = loop {
        if let Some(reply) = worker.wait_reply(AI_POLL_INTERVAL)? {
            break reply;
        }
    };

    match session.apply_ai_reply(reply)? {
        Some(played) => {
            println!("{} ({:.2?})", played, reply.thinking_time);
            Ok(())
        }
        None => Err(anyhow!("the AI found no move for {}", side)),
    }
}

fn handle_command(session: &mut Session, line: &str) -> Result<Flow> {
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        [] => {}
        ["quit"] | ["exit"] | ["q"] => return Ok(Flow::Quit),
        ["help"] | ["?"] => println!("{}", HELP),
        ["board"] => print_position(session),
        ["new"] => {
            session.new_game()?;
            print_position(session);
        }
        ["undo"] => {
            let undone = session.undo_last()?;
            println!("Took back {} ply(s)", undone);
            print_position(session);
        }
        ["moves", square] => {
            let position = parse_position(square)?;
            let targets = session.select(position)?;
            print!("{}", render_board(session.board(), &targets));
            let names: Vec<String> = targets.iter().map(|p| p.to_string()).collect();
            println!("{}: {}", position, names.join(" "));
        }
        [from, to] => {
            let (from, to) = parse_move(from, to)?;
            session.play(from, to)?;
            print_position(session);
        }
        _ => println!("Unknown command '{}'. Type `help`.", line),
    }

    Ok(Flow::Continue)
}

fn print_position(session: &Session) {
    print!("{}", render_board(session.board(), &session.selected_moves()));

    if let Some(outcome) = session.state().outcome() {
        println!("{}. Type `new` or `undo`.", describe_outcome(&outcome));
    } else if session.ply_limit_reached() {
        println!("Ply limit reached. Type `new` or `quit`.");
    } else {
        println!("{}", describe_status(session.board(), session.status()));
    }
}
