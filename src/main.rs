//! Josephus Ring entry point
//!
//! Generates an elimination sequence and prints it, exports it as JSON,
//! or replays it in the terminal on a timer.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use josephus_ring::consts::SEAT_RING_RADIUS;
use josephus_ring::layout::{SeatStatus, seats};
use josephus_ring::sim::{EliminationSequence, Playback, PlaybackInput, tick};
use josephus_ring::{Result, Settings, generate};

#[derive(Parser, Debug)]
#[command(name = "josephus-ring")]
#[command(about = "Compute and replay the Josephus elimination order", long_about = None)]
struct Args {
    /// Number of participants in the circle (N)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    participants: Option<i64>,

    /// Passes before each elimination (M)
    #[arg(short = 'm', long, allow_negative_numbers = true)]
    passes: Option<i64>,

    /// Settings JSON file (participants, passes, step_interval_ms)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full sequence, snapshots included, as JSON
    #[arg(long)]
    json: bool,

    /// Replay the eliminations one at a time
    #[arg(long)]
    play: bool,

    /// Delay between eliminations during replay
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(n) = args.participants {
        settings.participants = n;
    }
    if let Some(m) = args.passes {
        settings.passes = m;
    }
    if let Some(interval) = args.interval_ms {
        settings.step_interval_ms = interval;
    }
    log::info!(
        "Josephus Ring starting: n={}, m={}",
        settings.participants,
        settings.passes
    );

    if let Err(e) = settings.validate() {
        log::warn!("Outside the interactive range ({}), continuing", e);
    }

    let sequence = generate(settings.participants, settings.passes)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sequence)?);
    } else if args.play {
        replay(sequence, settings.step_interval_ms);
    } else {
        print_summary(&sequence);
    }
    Ok(())
}

fn print_summary(sequence: &EliminationSequence) {
    println!(
        "N = {}, M = {}: {} eliminations",
        sequence.participants,
        sequence.passes,
        sequence.len()
    );
    for (i, event) in sequence.events.iter().enumerate() {
        println!(
            "  step {:>3}: #{} out (seat {})",
            i + 1,
            event.eliminated_id,
            event.eliminated_position
        );
    }
    if let Some(survivor) = sequence.survivor() {
        println!("Survivor: #{}", survivor.id);
    }
}

/// Drive playback from a wall clock, printing the circle after each step
fn replay(sequence: EliminationSequence, interval_ms: u64) {
    let mut playback = Playback::new(sequence).with_interval_ms(interval_ms);
    let play = PlaybackInput {
        toggle_play: true,
        ..Default::default()
    };
    let idle = PlaybackInput::default();

    print_circle(&playback);
    tick(&mut playback, &play, 0.0);

    let frame = Duration::from_millis(interval_ms.clamp(1, 50));
    let mut last = Instant::now();
    let mut shown = playback.current_step();
    while !playback.is_complete() {
        std::thread::sleep(frame);
        let now = Instant::now();
        tick(&mut playback, &idle, (now - last).as_secs_f32());
        last = now;

        if playback.current_step() != shown {
            shown = playback.current_step();
            print_circle(&playback);
        }
    }

    if let Some(survivor) = playback.survivor() {
        println!("Person #{} wins!", survivor.id);
    }
}

fn print_circle(playback: &Playback) {
    let marks: Vec<String> = seats(playback, SEAT_RING_RADIUS)
        .iter()
        .map(|seat| match seat.status {
            SeatStatus::Alive => format!("{}", seat.participant.id),
            SeatStatus::Eliminated => "x".to_string(),
            SeatStatus::Survivor => format!("[{}]", seat.participant.id),
        })
        .collect();

    let headline = match playback.last_eliminated() {
        Some(event) => format!("#{} eliminated", event.eliminated_id),
        None => "start".to_string(),
    };
    println!(
        "step {}/{} ({:>3.0}%) {:<16} alive {:>2} | {}",
        playback.current_step(),
        playback.total_steps(),
        playback.progress() * 100.0,
        headline,
        playback.alive_count(),
        marks.join(" ")
    );
}
