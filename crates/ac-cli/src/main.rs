use ac_cli::commands;
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn definition_arg() -> Arg {
    Arg::new("definition")
        .long("definition")
        .value_parser(clap::value_parser!(PathBuf))
        .help("Checklist definition file (.yaml, .yml, .toml or .json); built-in sample if omitted")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn cli() -> Command {
    Command::new("action-center")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Action Center: business-account application review")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log filter (overrides RUST_LOG), e.g. debug or ac_checklist=debug"),
        )
        .subcommand(
            Command::new("summary")
                .about("Show the application header, scores and action items")
                .arg(definition_arg()),
        )
        .subcommand(
            Command::new("checklist")
                .about("Show the review checklist grouped by owner")
                .arg(definition_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("tab")
                .about("Render one tab")
                .arg(
                    Arg::new("id")
                        .required(true)
                        .help("Tab id: action-center, rfi, risk, business-opportunity, decisioning"),
                )
                .arg(definition_arg()),
        )
        .subcommand(
            Command::new("replay")
                .about("Apply a script of status and notes edits to a fresh session")
                .arg(
                    Arg::new("script")
                        .long("script")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Edit script (.yaml, .yml or .json)"),
                )
                .arg(definition_arg())
                .arg(json_arg())
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Exit with status 1 if any edit is rejected"),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate a checklist definition file")
                .arg(definition_arg().required(true)),
        )
}

fn init_tracing(level: Option<&String>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("Invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn definition(args: &ArgMatches) -> Option<&PathBuf> {
    args.get_one::<PathBuf>("definition")
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_one::<String>("log-level"))?;

    match matches.subcommand() {
        Some(("summary", args)) => {
            let session = commands::open_session(definition(args).map(PathBuf::as_path))?;
            print!("{}", commands::summary(&session));
        }
        Some(("checklist", args)) => {
            let session = commands::open_session(definition(args).map(PathBuf::as_path))?;
            println!("{}", commands::checklist(&session, args.get_flag("json"))?);
        }
        Some(("tab", args)) => {
            let mut session = commands::open_session(definition(args).map(PathBuf::as_path))?;
            let id = args
                .get_one::<String>("id")
                .context("Missing tab id")?;
            print!("{}", commands::tab(&mut session, id)?);
        }
        Some(("replay", args)) => {
            let mut session = commands::open_session(definition(args).map(PathBuf::as_path))?;
            let script = args
                .get_one::<PathBuf>("script")
                .context("Missing --script")?;
            let report = commands::run_replay(&mut session, script)?;
            if args.get_flag("json") {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("Failed to serialize report")?
                );
            } else {
                print!("{report}");
            }
            if args.get_flag("strict") && report.rejected() > 0 {
                std::process::exit(1);
            }
        }
        Some(("validate", args)) => {
            let path = definition(args).context("Missing --definition")?;
            println!("{}", commands::validate(path)?);
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn replay_requires_script() {
        assert!(cli().try_get_matches_from(["action-center", "replay"]).is_err());
        let matches = cli()
            .try_get_matches_from(["action-center", "replay", "--script", "edits.yaml", "--strict"])
            .unwrap();
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "replay");
        assert!(args.get_flag("strict"));
        assert!(!args.get_flag("json"));
    }

    #[test]
    fn log_level_is_global() {
        let matches = cli()
            .try_get_matches_from(["action-center", "summary", "--log-level", "debug"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("log-level").map(String::as_str),
            Some("debug")
        );
    }
}
