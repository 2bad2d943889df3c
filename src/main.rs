//! Hanoi Forge - Main Binary
//!
//! Console solver and text-mode player for the Tower of Hanoi

use clap::{Parser, Subcommand, ValueEnum};
use hanoi_forge_rs::{
    core::{PegTriple, PlanIter, PlannedMove},
    game::{
        parse_auto_command, parse_disc_count, parse_manual_move, parse_solver_disc_count,
        render::render_pegs,
        report::{report_manual_move, report_step, report_stopped, show_pegs},
        solver_disc_count, AutoCommand, AutoPlayer, DiscCountBounds, ManualCommand,
        OutputFormat, PlayMode, Session, SessionLogger, StepOutcome, TickInterval,
        VerbosityLevel,
    },
    Result,
};
use serde::Serialize;
use std::io::{self, BufRead, BufWriter, Write};
use std::time::Instant;
use tokio::sync::mpsc;

/// Play mode selected on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Apply one planned move each time Enter is pressed
    Step,
    /// Apply planned moves on a timer
    Auto,
    /// Move discs yourself
    Manual,
}

impl From<ModeArg> for PlayMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Step => PlayMode::Step,
            ModeArg::Auto => PlayMode::Auto,
            ModeArg::Manual => PlayMode::Manual,
        }
    }
}

/// Output format for moves and session messages
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Verbosity level for session output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "hanoi")]
#[command(about = "Hanoi Forge - Tower of Hanoi solver and player", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every move of the optimal solution
    Solve {
        /// Number of discs (prompted on stdin when omitted); zero or less prints nothing
        #[arg(long, allow_negative_numbers = true)]
        discs: Option<i64>,

        /// Output format for moves
        #[arg(long, value_enum, default_value = "text")]
        format: FormatArg,

        /// Exit straight away instead of waiting for Enter
        #[arg(long)]
        no_wait: bool,
    },

    /// Play a session in step, auto or manual mode
    Play {
        /// Number of discs, 3 to 10 (prompted on stdin when omitted or out of range)
        #[arg(long)]
        discs: Option<u32>,

        /// How the session advances
        #[arg(long, value_enum, default_value = "step")]
        mode: ModeArg,

        /// Delay between automatic moves in milliseconds (auto mode; adjust
        /// while running with +, - or a new value on stdin)
        #[arg(
            long,
            default_value_t = TickInterval::DEFAULT_MS,
            value_parser = clap::value_parser!(u64).range(100..=2000)
        )]
        interval_ms: u64,

        /// Stop auto mode after this many ticks
        #[arg(long)]
        max_ticks: Option<usize>,

        /// Verbosity level for session output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityArg,

        /// Output format for session messages
        #[arg(long, value_enum, default_value = "text")]
        format: FormatArg,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            discs,
            format,
            no_wait,
        } => run_solve(discs, format.into(), no_wait)?,
        Commands::Play {
            discs,
            mode,
            interval_ms,
            max_ticks,
            verbosity,
            format,
        } => {
            let mut logger = SessionLogger::with_verbosity(verbosity.into());
            logger.set_output_format(format.into());
            let interval = TickInterval::new(interval_ms)?;
            run_play(discs, mode.into(), interval, max_ticks, &logger).await?
        }
    }

    Ok(())
}

/// Read one line from `input`; `None` on end of input
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn prompt(text: &str) -> Result<()> {
    print!("{}", text);
    io::stdout().flush()?;
    Ok(())
}

/// Ask for a disc count until `parse` accepts one (or input ends)
fn prompt_disc_count(
    input: &mut impl BufRead,
    text: &str,
    parse: impl Fn(&str) -> Result<u32>,
) -> Result<Option<u32>> {
    loop {
        prompt(text)?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(n) => return Ok(Some(n)),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

/// One solve line in JSON form, with letter peg labels
#[derive(Serialize)]
struct SolveLine {
    disc: u32,
    from: char,
    to: char,
}

impl From<PlannedMove> for SolveLine {
    fn from(m: PlannedMove) -> Self {
        SolveLine {
            disc: m.disc.size(),
            from: m.from.letter(),
            to: m.to.letter(),
        }
    }
}

/// Console solver: stream the plan as `Move disc N from X to Y` lines
fn run_solve(discs: Option<i64>, format: OutputFormat, no_wait: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let n = match discs {
        Some(value) => solver_disc_count(value),
        None => {
            match prompt_disc_count(
                &mut input,
                "Enter the number of discs: ",
                parse_solver_disc_count,
            )? {
                Some(n) => n,
                None => return Ok(()),
            }
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for planned in PlanIter::new(n, PegTriple::STANDARD) {
        match format {
            OutputFormat::Text => writeln!(out, "{}", planned)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, &SolveLine::from(planned))?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    drop(out);

    if !no_wait {
        prompt("\nPress Enter to exit...")?;
        read_line(&mut input)?;
    }
    Ok(())
}

/// Interactive session: choose a disc count, then drive it in the chosen mode
async fn run_play(
    discs: Option<u32>,
    mode: PlayMode,
    interval: TickInterval,
    max_ticks: Option<usize>,
    logger: &SessionLogger,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let bounds = DiscCountBounds::INTERACTIVE;

    let checked = match discs {
        Some(n) => match bounds.check(n as i64) {
            Ok(n) => Some(n),
            Err(e) => {
                eprintln!("Error: {}", e);
                None
            }
        },
        None => None,
    };
    let n = match checked {
        Some(n) => n,
        None => {
            let text = format!("Number of discs ({}-{}): ", bounds.min, bounds.max);
            match prompt_disc_count(&mut input, &text, |line| parse_disc_count(line, bounds))? {
                Some(n) => n,
                None => return Ok(()),
            }
        }
    };

    let mut session = Session::new(n)?;
    logger.minimal(&format!("Tower of Hanoi: {} discs, {} mode", n, mode));
    if mode.follows_plan() {
        logger.normal(&format!("Plan has {} moves", session.plan().len()));
    }
    show_pegs(logger, &session);

    match mode {
        PlayMode::Step => run_step(&mut input, &mut session, logger)?,
        PlayMode::Auto => {
            // The speed-command reader takes stdin from here on
            drop(input);
            run_auto(&mut session, interval, max_ticks, logger).await?
        }
        PlayMode::Manual => run_manual(&mut input, &mut session, logger)?,
    }
    Ok(())
}

fn run_step(
    input: &mut impl BufRead,
    session: &mut Session,
    logger: &SessionLogger,
) -> Result<()> {
    if session.is_complete() {
        return report_step(logger, session, StepOutcome::PlanExhausted).map(|_| ());
    }

    loop {
        prompt("[Enter] next move, q to quit: ")?;
        let Some(line) = read_line(input)? else {
            break;
        };
        if matches!(line.trim(), "q" | "quit") {
            break;
        }

        let outcome = session.apply_next_planned_move();
        let done = report_step(logger, session, outcome)?;
        show_pegs(logger, session);
        if done {
            break;
        }
    }
    Ok(())
}

/// Forward stdin lines to the auto-play loop
///
/// A plain thread does the blocking reads so a pending read never holds up
/// process exit.
fn spawn_line_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Apply a speed command typed during auto-play
fn handle_auto_command(
    line: &str,
    player: &mut AutoPlayer,
    session: &Session,
    logger: &SessionLogger,
) {
    if line.trim().is_empty() {
        return;
    }

    let interval = match parse_auto_command(line) {
        Ok(AutoCommand::Faster) => player.interval().faster(),
        Ok(AutoCommand::Slower) => player.interval().slower(),
        Ok(AutoCommand::SetInterval(interval)) => interval,
        Ok(AutoCommand::Stop) => {
            player.stop();
            report_stopped(logger, session);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    player.set_interval(interval);
    logger.categorized(
        VerbosityLevel::Normal,
        "speed",
        &format!("Interval set to {} ms", interval.as_millis()),
    );
}

async fn run_auto(
    session: &mut Session,
    interval: TickInterval,
    max_ticks: Option<usize>,
    logger: &SessionLogger,
) -> Result<()> {
    let mut player = AutoPlayer::start(interval, Instant::now());
    let mut commands = spawn_line_reader();
    let mut reading = true;
    let mut ticks = 0usize;

    logger.normal("Type + or - to change speed, a delay in ms to set it, q to stop");

    while let Some(deadline) = player.next_deadline() {
        tokio::select! {
            _ = tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)) => {
                let Some(outcome) = player.poll(session, Instant::now()) else {
                    continue;
                };
                ticks += 1;
                if report_step(logger, session, outcome)? {
                    break;
                }
                if max_ticks.is_some_and(|max| ticks >= max) {
                    player.stop();
                    report_stopped(logger, session);
                }
            }
            line = commands.recv(), if reading => match line {
                Some(line) => handle_auto_command(&line, &mut player, session, logger),
                None => reading = false,
            },
        }
    }

    logger.verbose("Final position:");
    for line in render_pegs(session.pegs()).lines() {
        logger.verbose(line);
    }
    Ok(())
}

fn run_manual(
    input: &mut impl BufRead,
    session: &mut Session,
    logger: &SessionLogger,
) -> Result<()> {
    loop {
        prompt("Move (<disc> <from> <to>), ? for help, q to quit: ")?;
        let Some(line) = read_line(input)? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_manual_move(&line) {
            Ok(ManualCommand::Quit) => break,
            Ok(ManualCommand::Help) => {
                println!("Type the disc and two rods, e.g. '1 1 3' or '1 A C'.");
                println!("A disc may only go onto an empty rod or a larger disc.");
            }
            Ok(ManualCommand::Move { disc, from, to }) => {
                let result = session.apply_manual_move(disc, from, to);
                report_manual_move(logger, disc, from, to, &result);
                if result.is_err() {
                    continue;
                }

                if cfg!(debug_assertions) {
                    session.verify_invariants()?;
                }
                show_pegs(logger, session);
                if session.all_on_target() {
                    logger.normal("All discs are on Rod 3. Well done!");
                    break;
                }
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    Ok(())
}
