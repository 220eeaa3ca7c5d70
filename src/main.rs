// SPDX-License-Identifier: MPL-2.0
use iced_invite::app::{self, paths, Flags};
use iced_invite::content;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_invite - a wedding invitation page

USAGE:
    iced_invite [OPTIONS]

OPTIONS:
    --lang <LOCALE>        Interface language (e.g. en-US, fr)
    --content <FILE>       Invitation TOML file (defaults to the built-in one)
    --config-dir <DIR>     Directory holding settings.toml
    --data-dir <DIR>       Directory for persisted state and built-in photos
    --replay-intro         Show the envelope intro even if already opened
    -v, --verbose          Debug logging (RUST_LOG takes precedence)
    -h, --help             Print this help

The built-in invitation expects its photos in <data dir>/photos/01.jpg and
onwards. No photos ship with the program; use --content for your own.
";

struct Args {
    lang: Option<String>,
    content: Option<PathBuf>,
    config_dir: Option<String>,
    data_dir: Option<String>,
    replay_intro: bool,
    verbose: bool,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        content: args.opt_value_from_str("--content")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        replay_intro: args.contains("--replay-intro"),
        verbose: args.contains(["-v", "--verbose"]),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(parsed))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "iced_invite=debug" } else { "iced_invite=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(args.verbose);
    paths::init_cli_overrides(args.data_dir, args.config_dir);

    let photo_base = paths::get_app_data_dir().unwrap_or_else(|| PathBuf::from("."));
    let invitation = match content::load(args.content.as_deref(), &photo_base) {
        Ok(invitation) => invitation,
        Err(err) => {
            tracing::error!(error = %err, "cannot load invitation content");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let flags = Flags {
        lang: args.lang,
        invitation,
        replay_intro: args.replay_intro,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
