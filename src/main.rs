use anyhow::Context;
use datepick::app::{App, Outcome};
use datepick::field::DateField;
use datepick::options::PickerOptions;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        options: PickerOptions,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut options = PickerOptions::new();
        let mut date = None;
        let mut start = None;
        let mut end = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('n') | Arg::Long("no-future") => options = options.no_future(true),
                Arg::Short('s') | Arg::Long("start") => {
                    start = Some(parse_date(parser.value()?.string()?)?);
                }
                Arg::Short('e') | Arg::Long("end") => {
                    end = Some(parse_date(parser.value()?.string()?)?);
                }
                Arg::Short('f') | Arg::Long("format") => {
                    options = options.display_format(parser.value()?.string()?);
                }
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Value(value) if date.is_none() => {
                    date = Some(parse_date(value.string()?)?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        match (start, end) {
            (Some(start), Some(end)) => options = options.start_range(start).end_range(end),
            (Some(_), None) => return Err("--start requires --end".into()),
            (None, Some(_)) => return Err("--end requires --start".into()),
            (None, None) => (),
        }
        if let Some(date) = date {
            options = options.initial_date(date);
        }
        Ok(Command::Run { options, log_file })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { options, log_file } => {
                let _logger = log_file.map(init_logging).transpose()?;
                let config = options.build()?;
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let field =
                    DateField::new(&config, today).context("date cannot be displayed")?;
                let outcome = with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(field)
                        .open()
                        .run(&mut terminal)
                        .context("failed to run date picker")
                })?;
                match outcome {
                    Outcome::Accepted(value) => {
                        log::info!("Accepted {value:?}");
                        println!("{value}");
                    }
                    Outcome::Cancelled => log::info!("Cancelled"),
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: datepick [<options>] [YYYY-MM-DD]");
                println!();
                println!("Pick a date from a terminal calendar and print it");
                println!();
                println!("Options:");
                println!("  -n, --no-future       Forbid dates after today");
                println!("  -s, --start <DATE>    First pickable date (requires --end)");
                println!("  -e, --end <DATE>      Last pickable date (requires --start)");
                println!("  -f, --format <FMT>    Output format [default: [year]-[month]-[day]]");
                println!("      --log-file <PATH> Write log messages to the given file");
                println!("  -h, --help            Display this help message and exit");
                println!("  -V, --version         Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn parse_date(value: String) -> Result<Date, lexopt::Error> {
    Date::parse(&value, &YMD_FMT).map_err(|e| lexopt::Error::ParsingFailed {
        value,
        error: Box::new(e),
    })
}

fn init_logging(log_file: PathBuf) -> anyhow::Result<LoggerHandle> {
    Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)
        .context("invalid log specification")?
        .log_to_file(FileSpec::try_from(log_file).context("invalid log file path")?)
        .start()
        .context("failed to start logger")
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
