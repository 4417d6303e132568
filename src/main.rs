use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use nthday::{Mode, SpecError, Specification};

const DATE_DISPLAY_FORMAT: &str = "%a, %d %b %Y";

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Spec(#[from] SpecError),

    #[error("unparseable date: {0}")]
    Date(#[from] chrono::ParseError),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Spec(_) => 100,
            CliError::Date(_) => 101,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Checks a date against an occurrence specification.
    ///
    /// Exits 0 if the date matches the specification and 1 if it does not.
    /// Examples: the second Monday is "2#1"; the first and third Wednesdays
    /// are "1,3#3"; the second Tuesday and Thursday are "2#2,4"; the first
    /// and third Sunday and Friday are "1,3#0,5".
    Check {
        /// The occurrence specification to check
        specification: String,

        /// Enable year mode. When absent, month mode is active.
        #[arg(short, long)]
        year: bool,

        /// Date to check against, in YYYY-MM-DD format. If not specified, the
        /// current local date is used.
        #[arg(short, long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },

    /// Prints information about a date: which occurrence of its weekday it is
    /// within its month and within its year.
    Info {
        /// Date to describe, in YYYY-MM-DD format. If not specified, the
        /// current local date is used.
        #[arg(short, long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },
}

/// The payload kinds the verbose channel can print, dispatched exhaustively.
enum Diagnostic<'a> {
    Date(NaiveDate),
    DerivedSpec { spec: &'a Specification, mode: Mode },
    UserSpec { spec: &'a Specification, mode: Mode },
    Message(&'a str),
}

fn emit(verbose: bool, diagnostic: Diagnostic) {
    if !verbose {
        return;
    }

    match diagnostic {
        Diagnostic::Date(date) => {
            println!("Using date:");
            println!("  {}", date.format(DATE_DISPLAY_FORMAT));
        }
        Diagnostic::DerivedSpec { spec, mode } => {
            println!("  This date is:");
            for line in spec.friendly_strings(mode) {
                println!("    {line}");
            }
        }
        Diagnostic::UserSpec { spec, mode } => {
            println!("Matching against specification: \"{spec}\"");
            for line in spec.friendly_strings(mode) {
                println!("  {line}");
            }
        }
        Diagnostic::Message(message) => println!("{message}"),
    }
}

fn resolve_date(date: Option<&str>) -> Result<NaiveDate, CliError> {
    match date {
        Some(text) => Ok(NaiveDate::parse_from_str(text, "%Y-%m-%d")?),
        None => Ok(Local::now().date_naive()),
    }
}

fn run(cli: Cli) -> Result<i32, CliError> {
    match cli.command {
        Commands::Check {
            specification,
            year,
            date,
        } => {
            let mode = if year { Mode::Year } else { Mode::Month };

            // reject a bad specification before any date work begins
            Specification::validate(&specification, mode)?;

            let date = resolve_date(date.as_deref())?;
            let derived = Specification::from_date(date, mode);
            emit(cli.verbose, Diagnostic::Date(date));
            emit(cli.verbose, Diagnostic::DerivedSpec {
                spec: &derived,
                mode,
            });

            let spec = Specification::parse(&specification, mode)?;
            emit(cli.verbose, Diagnostic::UserSpec { spec: &spec, mode });

            if derived.intersects(&spec) {
                emit(
                    cli.verbose,
                    Diagnostic::Message("Date matched the specification. Exit code 0."),
                );
                Ok(0)
            } else {
                emit(
                    cli.verbose,
                    Diagnostic::Message("Date did not match the specification. Exit code 1."),
                );
                Ok(1)
            }
        }
        Commands::Info { date } => {
            let date = resolve_date(date.as_deref())?;
            println!("{}", date.format(DATE_DISPLAY_FORMAT));
            for mode in [Mode::Month, Mode::Year] {
                let derived = Specification::from_date(date, mode);
                for line in derived.friendly_strings(mode) {
                    println!("  {line}");
                }
            }
            Ok(0)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<i32, CliError> {
        run(Cli::try_parse_from(args).unwrap())
    }

    #[test]
    fn test_check_match() {
        // 2024-01-08 is the 2nd Monday of January
        let exit_code = run_args(&["nthday", "check", "2#1", "--date", "2024-01-08"]).unwrap();
        assert_eq!(0, exit_code);
    }

    #[test]
    fn test_check_no_match() {
        // 2024-01-01 is the 1st Monday, not the 2nd
        let exit_code = run_args(&["nthday", "check", "2#1", "--date", "2024-01-01"]).unwrap();
        assert_eq!(1, exit_code);
    }

    #[test]
    fn test_check_year_mode() {
        // 2024-10-18 is the 42nd Friday of 2024
        let exit_code =
            run_args(&["nthday", "check", "--year", "42#5", "--date", "2024-10-18"]).unwrap();
        assert_eq!(0, exit_code);

        let exit_code =
            run_args(&["nthday", "check", "--year", "42#5", "--date", "2024-10-11"]).unwrap();
        assert_eq!(1, exit_code);
    }

    #[test]
    fn test_check_rejects_bad_specification() {
        let err = run_args(&["nthday", "check", "6#1", "--date", "2024-01-08"]).unwrap_err();
        assert_eq!(100, err.exit_code());
        assert_eq!(
            "invalid occurrence ordinal value in month mode: 6 (allowed 1-5)",
            err.to_string(),
        );
    }

    #[test]
    fn test_check_rejects_bad_date() {
        let err = run_args(&["nthday", "check", "2#1", "--date", "not-a-date"]).unwrap_err();
        assert_eq!(101, err.exit_code());
    }

    #[test]
    fn test_bad_specification_beats_bad_date() {
        // specification validation is pre-flight: it runs before the date is
        // even looked at
        let err = run_args(&["nthday", "check", "2##1", "--date", "not-a-date"]).unwrap_err();
        assert_eq!(100, err.exit_code());
    }

    #[test]
    fn test_info() {
        let exit_code = run_args(&["nthday", "info", "--date", "2024-01-08"]).unwrap();
        assert_eq!(0, exit_code);
    }
}
