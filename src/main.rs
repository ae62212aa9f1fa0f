use std::io;

use anyhow::Error;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use bid_sort::driver::{csv_path_from_args, Driver};

// cargo run -r -- ./tests/fixtures/bids-10.csv
pub fn main() -> Result<(), Error> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let csv_path = csv_path_from_args(std::env::args());
    log::info!("Input file: {}", csv_path.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut driver = Driver::new(csv_path);
    driver.run(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
