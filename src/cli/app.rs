//! Main CLI application

use crate::args::{validate, ArgumentValues, Field, ParsedArguments};
use crate::config::{load_config, Config};
use crate::error::VulnDbError;
use crate::ui::{Reporter, Verbosity};
use clap::{crate_version, value_parser, Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

/// Program name used in diagnostics and `--version`
pub const PROGRAM_NAME: &str = "vuln_db";

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
}

/// A validated invocation together with its ambient settings
#[derive(Debug, Clone)]
pub struct Invocation {
    pub arguments: ParsedArguments,
    pub config: Config,
    pub verbosity: Verbosity,
}

impl App {
    pub fn new() -> Self {
        App {
            command: build_command(),
        }
    }

    /// Parse and validate an argument vector (first item is the program name)
    ///
    /// The configuration is only loaded once the arguments are known to be
    /// valid.
    pub fn parse_from<I, T>(&self, argv: I) -> Result<Invocation, VulnDbError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.clone().try_get_matches_from(argv)?;
        let arguments = validate(argument_values(&matches))?;

        let config_path = matches.get_one::<PathBuf>("config");
        let config = load_config(config_path.map(PathBuf::as_path))?;
        let verbosity = get_verbosity(&matches, &config);

        Ok(Invocation {
            arguments,
            config,
            verbosity,
        })
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ParsedArguments {
    /// Parse and validate an argument vector without loading configuration
    pub fn parse_from<I, T>(argv: I) -> Result<Self, VulnDbError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = build_command().try_get_matches_from(argv)?;
        Ok(validate(argument_values(&matches))?)
    }
}

/// Build the clap command
pub fn build_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(crate_version!())
        .about("Your personal CVE/BID database.")
        .disable_version_flag(true)
        .arg(
            Arg::new(Field::Init.id())
                .long(Field::Init.id())
                .help(
                    "Rebuild the local database with every CVE from the NIST feeds and every \
                     BugTraq id (BID). Existing entries are removed first",
                )
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(Field::Bid.id())
                .long(Field::Bid.id())
                .value_name("BID")
                .help("Show all products affected by this BugTraq id")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new(Field::Cve.id())
                .long(Field::Cve.id())
                .value_name("CVE")
                .help("Show all products affected by this CVE"),
        )
        .arg(
            Arg::new(Field::Product.id())
                .long(Field::Product.id())
                .value_name("PRODUCT")
                .help("Show all CVE/BID vulnerabilities of this product"),
        )
        .arg(
            Arg::new(Field::ProductVersion.id())
                .long(Field::ProductVersion.id())
                .value_name("VERSION")
                .help("Narrow a --product query to this version (requires --product)"),
        )
        .arg(
            Arg::new(Field::OnlyCheck.id())
                .long(Field::OnlyCheck.id())
                .help(
                    "Only report whether --product has CVE/BID vulnerabilities, \
                     without listing them (requires --product)",
                )
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Show the version message and exit")
                .action(ArgAction::Version),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Path to a vuln_db.yml config file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Only print errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Print debug output")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet"),
        )
}

/// Read the six validated fields out of clap's matches
fn argument_values(matches: &ArgMatches) -> ArgumentValues {
    let string = |field: Field| matches.get_one::<String>(field.id()).cloned();

    ArgumentValues {
        init: matches.get_flag(Field::Init.id()),
        bid: matches.get_one::<i64>(Field::Bid.id()).copied(),
        cve: string(Field::Cve),
        product: string(Field::Product),
        product_version: string(Field::ProductVersion),
        only_check: matches.get_flag(Field::OnlyCheck.id()),
    }
}

/// Command-line flags override the configured verbosity
fn get_verbosity(matches: &ArgMatches, config: &Config) -> Verbosity {
    if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        config.verbosity.unwrap_or_default()
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<Invocation, VulnDbError> {
    let invocation = App::new().parse_from(std::env::args_os())?;
    let reporter = Reporter::new(invocation.verbosity);

    if let Some(source) = &invocation.config.source {
        reporter.debug(&format!("config: {}", source.display()));
    }
    match invocation.config.database_path() {
        Some(path) => reporter.debug(&format!("database: {}", path.display())),
        None => reporter.warn("no database path configured and no home directory found"),
    }
    reporter.debug(&format!("mode: {}", invocation.arguments.mode()));

    Ok(invocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Mode;
    use crate::error::ArgsError;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<ParsedArguments, VulnDbError> {
        ParsedArguments::parse_from(std::iter::once(PROGRAM_NAME).chain(args.iter().copied()))
    }

    fn args_error(args: &[&str]) -> ArgsError {
        match parse(args) {
            Err(VulnDbError::Args(e)) => e,
            other => panic!("expected argument error for {:?}, got {:?}", args, other),
        }
    }

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(args_error(&[]), ArgsError::MissingArguments);
    }

    #[test]
    fn test_ambient_flags_are_not_fields() {
        assert_eq!(args_error(&["--quiet"]), ArgsError::MissingArguments);
        assert_eq!(
            args_error(&["--verbose", "--config", "x.yml"]),
            ArgsError::MissingArguments
        );
    }

    #[test]
    fn test_cve_accessor() {
        let parsed = parse(&["--cve", "CVE-2002-1234"]).unwrap();
        assert_eq!(parsed.cve(), Some("CVE-2002-1234"));
        assert_eq!(parsed.mode(), &Mode::Cve("CVE-2002-1234".to_string()));
    }

    #[test]
    fn test_negative_bid_reaches_range_check() {
        let err = args_error(&["--bid", "-5"]);
        assert_eq!(err, ArgsError::InvalidRange(-5));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_non_numeric_bid_is_usage_error() {
        match parse(&["--bid", "abc"]) {
            Err(VulnDbError::Cli(e)) => {
                assert_eq!(e.kind(), ErrorKind::ValueValidation);
                assert_eq!(e.exit_code(), 2);
            }
            other => panic!("expected clap error, got {:?}", other),
        }
    }

    #[test]
    fn test_bid_and_cve_conflict_on_cve() {
        let err = args_error(&["--bid", "10", "--cve", "CVE-2002-1234"]);
        assert_eq!(err, ArgsError::Conflicting(Field::Cve));
    }

    #[test]
    fn test_version_flag() {
        for flag in ["-v", "--version"] {
            match parse(&[flag]) {
                Err(VulnDbError::Cli(e)) => {
                    assert_eq!(e.kind(), ErrorKind::DisplayVersion);
                    assert_eq!(e.exit_code(), 0);
                    assert!(e.to_string().contains("vuln_db 0.1.0"));
                }
                other => panic!("expected version output, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_full_product_query() {
        let parsed = parse(&["--product", "foo", "--product_version", "1.0", "--only_check"]).unwrap();
        assert_eq!(parsed.product(), Some("foo"));
        assert_eq!(parsed.product_version(), Some("1.0"));
        assert!(parsed.is_only_product_check());
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let args = ["--product", "nginx", "--product_version", "1.2"];
        assert_eq!(parse(&args).unwrap(), parse(&args).unwrap());
    }

    #[test]
    fn test_get_verbosity() {
        let config = Config {
            verbosity: Some(Verbosity::Silent),
            ..Default::default()
        };

        let matches = build_command().get_matches_from(["vuln_db", "--init"]);
        assert_eq!(get_verbosity(&matches, &config), Verbosity::Silent);
        assert_eq!(get_verbosity(&matches, &Config::default()), Verbosity::Normal);

        let matches = build_command().get_matches_from(["vuln_db", "--init", "--verbose"]);
        assert_eq!(get_verbosity(&matches, &config), Verbosity::Verbose);

        let matches = build_command().get_matches_from(["vuln_db", "--init", "--quiet"]);
        assert_eq!(get_verbosity(&matches, &config), Verbosity::Quiet);
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        let result = build_command().try_get_matches_from(["vuln_db", "--quiet", "--verbose"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::ArgumentConflict);
    }
}
