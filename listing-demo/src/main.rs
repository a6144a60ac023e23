use std::fs::File;
use std::io;

use listing_demo::{AdapterConfig, App, paths};
use listing_term::Terminal;
use simplelog::{Config, LevelFilter, WriteLogger};

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        log::error!("listing exited with error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to a file; the terminal is in raw mode while the app runs.
fn init_logging() {
    let Some(path) = paths::prepare_log_file() else {
        return;
    };
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("failed to create {}: {}", path.display(), e),
    }
}

async fn run() -> io::Result<()> {
    let app = App::new(AdapterConfig::default()).map_err(io::Error::other)?;
    log::info!("starting listing");

    let mut terminal = Terminal::new()?;
    app.run(&mut terminal).await
}
