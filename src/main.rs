//! Standalone walkthrough viewer.
//!
//! Usage: `roam [options.toml]`

use std::path::Path;

use roam::options::Options;
use roam::viewer::Viewer;

fn main() {
    env_logger::init();

    // Optional argument: path to a TOML options file.
    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => {
                log::info!("loaded options from {path}");
                options
            }
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("viewer error: {e}");
        std::process::exit(1);
    }
}
