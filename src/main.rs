// SPDX-License-Identifier: MPL-2.0

use iced_records::app::{self, Flags};
use iced_records::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

fn parse_theme(value: &str) -> Result<ThemeMode, String> {
    match value {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(format!("unknown theme {other:?} (expected light, dark or system)")),
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        theme: args.opt_value_from_fn("--theme", parse_theme).unwrap(),
        status: args.opt_value_from_str("--status").unwrap(),
    };

    app::run(flags)
}
