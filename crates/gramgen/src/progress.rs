use std::borrow::Cow;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProgressMode {
    Hidden,
    Visible,
}

const TICK_STRINGS: &[&str] = &["⠉", "⠘", "⠰", "⠤", "⠆", "⠃", "✔"];

/// A spinner shown on stderr while an external tool runs. Call 'finish' when the tool exits.
pub fn spinner(mode: ProgressMode, name: impl ToString) -> indicatif::ProgressBar {
    let bar = indicatif::ProgressBar::with_draw_target(
        None,
        match mode {
            ProgressMode::Hidden => indicatif::ProgressDrawTarget::hidden(),
            ProgressMode::Visible => indicatif::ProgressDrawTarget::stderr(),
        },
    );
    bar.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
            .unwrap()
            .tick_strings(TICK_STRINGS),
    );
    bar.set_message(Cow::Owned(name.to_string()));
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
