// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Snackbar stack demo

USAGE:
  iced_snackbar [OPTIONS]

OPTIONS:
  --position <POS>       top-left | top-right | top-center
  --auto-hide-ms <MS>    Auto-dismiss delay in milliseconds
  --theme <MODE>         light | dark | system
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        position: args.opt_value_from_str("--position")?,
        auto_hide_ms: args.opt_value_from_str("--auto-hide-ms")?,
        theme: args.opt_value_from_str("--theme")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
