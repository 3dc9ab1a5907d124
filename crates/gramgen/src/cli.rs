use clap::builder::styling;
use clap::{Arg, ArgAction, Command};

use crate::config::{self, RegenConfig};
use crate::progress::ProgressMode;

impl RegenConfig {
    pub fn from_args() -> Self {
        let styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
            .usage(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
            .literal(styling::AnsiColor::Cyan.on_default() | styling::Effects::BOLD)
            .placeholder(styling::AnsiColor::Cyan.on_default());

        let matches = Command::new(std::env!("CARGO_PKG_NAME"))
            .version(std::env!("CARGO_PKG_VERSION"))
            .about(std::env!("CARGO_PKG_DESCRIPTION"))
            .styles(styles)
            .next_line_help(true)
            .arg(
                Arg::new("grammar")
                    .help("Specify the grammar file to regenerate from.")
                    .default_value(config::DEFAULT_GRAMMAR)
                    .index(1),
            )
            .arg(
                Arg::new("output-dir")
                    .short('o')
                    .long("output-dir")
                    .default_value(config::DEFAULT_OUTPUT_DIR)
                    .help(
                        "Place generated parser sources in this directory. Any prior contents \
                        are deleted before the grammar compiler runs.",
                    ),
            )
            .arg(
                Arg::new("language")
                    .short('l')
                    .long("language")
                    .default_value(config::DEFAULT_LANGUAGE)
                    .help("Target language passed to the grammar compiler via '-Dlanguage='."),
            )
            .arg(
                Arg::new("tool")
                    .long("tool")
                    .default_value(config::DEFAULT_TOOL)
                    .help("Invocation name of the grammar compiler to try first."),
            )
            .arg(
                Arg::new("fallback-tool")
                    .long("fallback-tool")
                    .default_value(config::DEFAULT_FALLBACK_TOOL)
                    .help(
                        "Alternate invocation name tried, with identical arguments, if the \
                        primary tool fails.",
                    ),
            )
            .arg(
                Arg::new("progress")
                    .long("progress")
                    .action(ArgAction::SetTrue)
                    .help("Set whether or not to show progress"),
            )
            .get_matches();

        let progress = if matches.get_flag("progress") {
            ProgressMode::Visible
        } else {
            ProgressMode::Hidden
        };

        RegenConfig {
            grammar_path: matches
                .get_one::<String>("grammar")
                .unwrap()
                .to_owned()
                .into(),
            output_dir: matches
                .get_one::<String>("output-dir")
                .unwrap()
                .to_owned()
                .into(),
            target_language: matches.get_one::<String>("language").unwrap().to_owned(),
            primary_tool: matches.get_one::<String>("tool").unwrap().to_owned(),
            fallback_tool: matches
                .get_one::<String>("fallback-tool")
                .unwrap()
                .to_owned(),
            progress,
        }
    }
}
