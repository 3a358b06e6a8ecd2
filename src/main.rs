// SPDX-License-Identifier: MPL-2.0
use stockroom::app::{self, Flags};
use stockroom::logging;

const HELP: &str = "\
Stockroom

USAGE:
  stockroom [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Directory holding settings.toml
  --log-level <LEVEL>  Tracing filter (overridden by STOCKROOM_LOG)
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir: Option<std::path::PathBuf> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            eprintln!("Ignoring --config-dir: {err}");
            None
        });
    let log_level: Option<String> =
        args.opt_value_from_str("--log-level").unwrap_or_else(|err| {
            eprintln!("Ignoring --log-level: {err}");
            None
        });

    for unused in args.finish() {
        eprintln!("Ignoring unexpected argument: {}", unused.to_string_lossy());
    }

    logging::init(log_level.as_deref());
    app::run(Flags { config_dir })
}
