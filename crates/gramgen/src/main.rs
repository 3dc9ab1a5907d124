// When 'lib.rs' exists, cargo treats 'main.rs' as a separate crate
use gramgen::config::RegenConfig;
use gramgen::report::Reportable;

use std::io;

fn main() {
    better_panic::install();

    let config = RegenConfig::from_args();
    match gramgen::handle_config(config) {
        Ok(outcome) => {
            let _ = outcome.write_warnings(&mut io::stderr().lock());
        }
        Err(err) => {
            let _ = err.report(&mut io::stderr().lock());
            std::process::exit(err.exit_status());
        }
    }
}
