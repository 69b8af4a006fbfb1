use gurl_core::config::{self, GurlConfig};
use gurl_core::logging;
use std::io;

mod cli;

fn main() {
    // Config only shapes logging; a broken file must not stop rendering.
    let cfg = config::load_or_default().unwrap_or_else(|err| {
        eprintln!("gurl warning: {:#}; using defaults", err);
        GurlConfig::default()
    });

    // Initialize logging as early as possible.
    logging::init(&cfg);

    // Parse CLI and dispatch.
    if let Err(err) = cli::run_from(std::env::args_os(), &mut io::stdout().lock()) {
        let _ = cli::report(&err, &mut io::stderr().lock());
        std::process::exit(1);
    }
}
