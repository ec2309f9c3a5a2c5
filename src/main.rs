//! rps-vision CLI
//!
//! Usage:
//!   detector | rps-vision --realtime          # Live detector piped on stdin
//!   rps-vision < recorded_frames.jsonl        # Replay a recorded feed
//!   rps-vision --json --no-history < frames   # JSON overlay output, no CSV log

use clap::Parser;
use std::io::{self, IsTerminal};
use std::time::Duration;

use rps_vision::core::{
    open_history, Clock, FrameSource, GameSession, HistorySink, JsonFeed, ManualClock,
    OpponentPredictor, RoundStateMachine, SessionSummary, SystemClock, TerminalDisplay,
};
use rps_vision::{DEFAULT_FRAME_MS, DEFAULT_HISTORY_PATH, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "rps-vision",
    version = VERSION,
    about = "Rock-paper-scissors against an adaptive AI, driven by hand-pose frames",
    long_about = "Reads hand-pose detector output as JSON lines on stdin, one frame per line:\n\n  \
                  {\"t\": 0.033, \"hand\": {\"laterality\": \"Right\", \"landmarks\": [{\"x\": 0.5, \"y\": 0.4}, ...]}, \"key\": \"space\"}\n\n\
                  Keys:\n  \
                  space / start-round   Start a 3 second countdown\n  \
                  r / reset-score       Zero the score\n  \
                  q / esc / quit        Quit\n\n\
                  Rounds are appended to a CSV history log (timestamp,player,ai,result)."
)]
struct Args {
    /// History log path
    #[arg(long, default_value = DEFAULT_HISTORY_PATH)]
    history: String,

    /// Disable the history log
    #[arg(long)]
    no_history: bool,

    /// Seed the AI for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Use the system clock instead of feed timestamps
    #[arg(long)]
    realtime: bool,

    /// Frame period assumed for feed lines without a timestamp (replay mode)
    #[arg(long, default_value_t = DEFAULT_FRAME_MS)]
    frame_ms: u64,

    /// Output overlay views as JSON lines
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);
    if args.no_color {
        colored::control::set_override(false);
    }

    // The detector collaborator is whatever is piped into stdin
    if io::stdin().is_terminal() {
        log::error!("no detector feed: pipe hand-pose frames into stdin");
        std::process::exit(1);
    }

    let history: Option<Box<dyn HistorySink>> = if args.no_history {
        None
    } else {
        open_history(&args.history).map(|h| Box::new(h) as Box<dyn HistorySink>)
    };

    let stdin = io::stdin();
    let reader = stdin.lock();

    let summary = if args.realtime {
        let mut feed = JsonFeed::live(reader);
        run(SystemClock, &args, history, &mut feed)
    } else {
        let clock = ManualClock::new();
        let period = Duration::from_millis(args.frame_ms);
        let mut feed = JsonFeed::replay(reader, clock.clone(), period);
        run(clock, &args, history, &mut feed)
    };

    log::info!(
        "session ended: {} rounds, score {} ({} frames, {} missed)",
        summary.rounds,
        summary.score,
        summary.frames,
        summary.missed_frames
    );
}

/// Build the session around `clock` and play the feed to the end
fn run<C: Clock, F: FrameSource>(
    clock: C,
    args: &Args,
    history: Option<Box<dyn HistorySink>>,
    feed: &mut F,
) -> SessionSummary {
    let predictor = match args.seed {
        Some(seed) => OpponentPredictor::seeded(seed),
        None => OpponentPredictor::new(),
    };
    let machine = RoundStateMachine::new(clock, predictor);
    let display = TerminalDisplay::new(args.json);
    display.print_header(VERSION);

    let mut session = GameSession::new(machine, display, history);
    session.run(feed)
}

/// Terminal logger on stderr, keeping stdout for the overlay
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    if let Err(e) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("logger unavailable: {}", e);
    }
}
