use std::path::PathBuf;

use anyhow::{anyhow, Error};
use bid_sort::loader::Loader;
use bid_sort::sort::{quick_sort_all, selection_sort};
use bid_sort::store::BidStore;
use bid_sort::timing::Stopwatch;

fn load(input_path: &PathBuf) -> Result<BidStore, Error> {
    let report = Loader::new(input_path.clone()).load();
    if let Some(e) = report.error() {
        return Err(anyhow!("{:#}", e));
    }
    Ok(BidStore::from(report.into_bids()))
}

// cargo run -r --example compare_sorts -- ./tests/fixtures/bids-10.csv
pub fn main() -> Result<(), Error> {
    let input_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("./tests/fixtures/bids-10.csv"));

    let mut by_selection = load(&input_path)?;
    let mut by_quick = by_selection.clone();

    let stopwatch = Stopwatch::start();
    let swaps = selection_sort(&mut by_selection);
    println!("selection sort, {} bids, {} swaps\n{}", by_selection.len(), swaps, stopwatch.elapsed());

    let stopwatch = Stopwatch::start();
    quick_sort_all(&mut by_quick);
    println!("quick sort, {} bids\n{}", by_quick.len(), stopwatch.elapsed());

    if by_selection.titles() != by_quick.titles() {
        return Err(anyhow!("selection sort and quick sort disagree"));
    }
    for bid in &by_quick {
        println!("{}", bid);
    }
    Ok(())
}
