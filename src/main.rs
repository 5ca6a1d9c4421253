// SPDX-License-Identifier: MPL-2.0
use iced_helpers::app::{self, Flags};
use iced_helpers::config::paths;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_helpers demo

USAGE:
  iced_helpers [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr, zh-TW)
  --config-dir <PATH>   Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("iced_helpers=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = read_option(&mut args, "--lang");
    let config_dir = read_option(&mut args, "--config-dir");

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_override(config_dir);

    app::run(Flags { lang })
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, %err, "invalid command line option");
            None
        }
    }
}
