use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::{ArgAction, Parser};
use tracing::debug;
use workbreak_core::config::DEFAULT_RATIO;
use workbreak_core::{
    expand, handoff, parse_ratio, parse_stop_time, plan, prompt_choice, render_json,
    render_table, render_timeline, select, Chosen, DayWrap, ExternalTimer, LauncherConfig,
    PlanError, PlannerConfig, TimerLauncher,
};

mod logging;

/// Calculate possible work/break intervals, then optionally pass the
/// selection to a timer.
#[derive(Parser)]
#[command(name = "workbreak", version, about = "Plan work/break intervals until a stop time")]
struct Cli {
    /// When to finish working, 24-hour HH:MM (e.g. 18:00)
    stop_time: String,

    /// Minutes of work per minute of break [default: 5]
    ratio: Option<String>,

    /// Multiply the available minutes by this before planning (0 < F <= 1)
    #[arg(long, default_value_t = 1.0)]
    fudge: f64,

    /// Plan from this HH:MM today instead of the current time
    #[arg(long, value_name = "HH:MM")]
    from: Option<String>,

    /// Fail if the stop time already passed today instead of using tomorrow's
    #[arg(long)]
    same_day: bool,

    /// Print the candidates as JSON
    #[arg(long)]
    json: bool,

    /// Pick a candidate without prompting
    #[arg(long, value_name = "N")]
    choice: Option<usize>,

    /// Timer executable receiving `<work> <break> <count>`
    #[arg(long, env = "WORKBREAK_TIMER", value_name = "PATH")]
    timer: Option<PathBuf>,

    /// Never start the timer, even if it is installed
    #[arg(long)]
    no_launch: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let ratio = match cli.ratio.as_deref() {
        Some(raw) => parse_ratio(raw)?,
        None => DEFAULT_RATIO,
    };
    let config = PlannerConfig {
        fudge_factor: cli.fudge,
        day_wrap: if cli.same_day {
            DayWrap::SameDay
        } else {
            DayWrap::NextDay
        },
        ..PlannerConfig::with_ratio(ratio)
    };
    config.validate()?;

    let stop = parse_stop_time(&cli.stop_time)?;
    let now = match cli.from.as_deref() {
        Some(from) => Local::now().date_naive().and_time(parse_stop_time(from)?),
        None => Local::now().naive_local(),
    };

    let plan = plan(now, stop, &config)?;
    let stop_time = Some(cli.stop_time.as_str());
    let mut stdout = io::stdout().lock();
    if !cli.json {
        write!(stdout, "{}", render_table(&plan.candidates))?;
        stdout.flush()?;
    }

    if plan.is_empty() {
        if cli.json {
            writeln!(stdout, "{}", render_json(&plan, stop_time, None)?)?;
        }
        return Err(PlanError::NoValidSchedule {
            min_work: config.min_work_minutes,
        }
        .into());
    }

    let timer = ExternalTimer::from_config(&LauncherConfig::with_override(cli.timer));
    let timer_ready = !cli.no_launch && timer.probe();
    debug!(timer = %timer.path().display(), timer_ready, "timer probe");

    // JSON mode keeps stdout a single document, so the prompt goes to stderr.
    let choice = match cli.choice {
        Some(choice) => Some(choice),
        None if timer_ready && cli.json => Some(prompt_choice(io::stdin().lock(), io::stderr())?),
        None if timer_ready => Some(prompt_choice(io::stdin().lock(), &mut stdout)?),
        None => None,
    };

    let chosen = match choice {
        Some(choice) => {
            let candidate = select(&plan.candidates, choice, config.min_work_minutes)?;
            Some((choice, expand(candidate, now)))
        }
        None => None,
    };

    if cli.json {
        let view = chosen.as_ref().map(|(choice, periods)| Chosen {
            choice: *choice,
            timeline: periods,
        });
        writeln!(stdout, "{}", render_json(&plan, stop_time, view)?)?;
    } else if let Some((_, periods)) = &chosen {
        writeln!(stdout)?;
        write!(stdout, "{}", render_timeline(periods))?;
    }
    stdout.flush()?;

    if let Some((choice, _)) = chosen.filter(|_| timer_ready) {
        handoff(&timer, &plan.candidates, choice, config.min_work_minutes)?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init_tracing(cli.verbose) {
        eprintln!("warning: logging disabled: {e}");
    }

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
