// Poll Calendar
// Terminal front-end: renders the month grid and applies picker intents

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

use poll_calendar::services::clock::{Clock, SystemClock};
use poll_calendar::services::settings::SettingsService;
use poll_calendar::{
    DatePicker, DatePickerAction, DatePickerOptions, DateSelection, WeekStart,
};

const USAGE: &str =
    "usage: poll-calendar [--json] [--monday|--sunday] [YYYY-MM-DD] [select YYYY-MM-DD...]";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    json: bool,
    help: bool,
    week_start: Option<WeekStart>,
    anchor: Option<NaiveDate>,
    selected: Vec<NaiveDate>,
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}'\n{}", value, USAGE))
}

/// Everything after `select` is a date to pre-select; before it, a bare date
/// is the anchor.
fn parse_args<I>(argv: I) -> Result<Args>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut args = Args::default();
    let mut selecting = false;
    for arg in argv {
        match arg.as_ref() {
            "--json" => args.json = true,
            "--monday" => args.week_start = Some(WeekStart::Monday),
            "--sunday" => args.week_start = Some(WeekStart::Sunday),
            "-h" | "--help" => args.help = true,
            "select" => selecting = true,
            value if selecting => args.selected.push(parse_date(value)?),
            value => {
                if args.anchor.is_some() {
                    bail!("More than one anchor date given\n{}", USAGE);
                }
                args.anchor = Some(parse_date(value)?);
            }
        }
    }
    Ok(args)
}

/// Caller-side state: everything the picker reads, owned here.
struct PollDates {
    anchor: NaiveDate,
    week_start: WeekStart,
    selection: DateSelection,
}

impl PollDates {
    fn apply(&mut self, actions: Vec<DatePickerAction>) {
        for action in actions {
            match action {
                DatePickerAction::AddToSelection(date) => {
                    self.selection.insert(date);
                }
                DatePickerAction::RemoveFromSelection(date) => {
                    self.selection.remove(&date);
                }
                DatePickerAction::NavigationChange(date) => self.anchor = date,
            }
        }
    }
}

fn render(
    picker: &DatePicker<'_, Vec<DatePickerAction>>,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{:^28}", picker.label())?;
    for name in picker.days_of_week() {
        write!(out, " {:>2} ", &name[..2])?;
    }
    writeln!(out)?;
    for week in picker.weeks() {
        for day in week {
            let (open, close) = if day.selected {
                ('[', ']')
            } else if day.today {
                ('(', ')')
            } else {
                (' ', ' ')
            };
            if day.is_dimmed() {
                write!(out, "{} .{}", open, close)?;
            } else {
                write!(out, "{}{:>2}{}", open, day.day, close)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }
    let prefs = SettingsService::with_default_path().load_or_default();
    let clock = SystemClock;

    let mut state = PollDates {
        anchor: args
            .anchor
            .or_else(|| args.selected.first().copied())
            .unwrap_or_else(|| clock.today()),
        week_start: args.week_start.unwrap_or(prefs.week_starts_on),
        selection: args.selected.into_iter().collect(),
    };
    log::info!(
        "Starting poll calendar at {} (weeks start on {})",
        state.anchor,
        state.week_start
    );

    if args.json {
        let options = DatePickerOptions::new(
            state.anchor,
            state.week_start,
            &clock,
            state.selection.as_slice(),
        );
        let picker = DatePicker::new(options, ());
        println!("{}", serde_json::to_string_pretty(&picker.days())?);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        let actions = {
            let options = DatePickerOptions::new(
                state.anchor,
                state.week_start,
                &clock,
                state.selection.as_slice(),
            );
            let mut picker = DatePicker::new(options, Vec::new());
            render(&picker, &mut stdout)?;
            write!(stdout, "[n]ext [p]rev [t]oday <day> toggle [q]uit > ")?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            match line.trim() {
                "n" => picker.next(),
                "p" => picker.prev(),
                "t" => picker.today(),
                "q" => break,
                input => match input.parse::<u32>() {
                    Ok(day_of_month) => {
                        let cell = picker
                            .days()
                            .into_iter()
                            .find(|d| !d.out_of_month && d.day == day_of_month);
                        match cell {
                            Some(day) => picker.toggle(&day),
                            None => eprintln!("No day {} in {}", day_of_month, picker.label()),
                        }
                    }
                    Err(_) => eprintln!("Unknown command '{}'", input),
                },
            }
            picker.into_events()
        };
        state.apply(actions);
    }

    if state.selection.is_empty() {
        println!("No dates selected");
    }
    for date in state.selection.sorted() {
        println!("{}", date.format("%A, %B %-d %Y"));
    }
    Ok(())
}
