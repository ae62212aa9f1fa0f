use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use bid_sort::bid::Bid;
use bid_sort::store::BidStore;
use data_encoding::HEXLOWER;
use rand::Rng;

#[allow(dead_code)]
pub const HEADER: &str = "ArticleTitle,ArticleID,Department,CloseDate,WinningBid,InventoryID,VehicleID,ReceiptNumber,Fund";

#[allow(dead_code)]
pub fn setup() {
    let results_dir_path = PathBuf::from_str("./target/results/").unwrap();

    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    }
}

#[allow(dead_code)]
pub fn temp_file_name(dir: &str) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result
}

#[allow(dead_code)]
pub fn write_lines(path: &PathBuf, lines: &[&str]) -> Result<(), anyhow::Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

#[allow(dead_code)]
pub fn store_from_titles(titles: &[&str]) -> BidStore {
    let bids = titles.iter()
        .enumerate()
        .map(|(i, title)| Bid::new(&i.to_string(), title, "General Fund", i as f64))
        .collect::<Vec<Bid>>();
    BidStore::from(bids)
}

/// Random store drawing titles from `distinct` values so that duplicates are common.
#[allow(dead_code)]
pub fn random_store(size: usize, distinct: usize) -> BidStore {
    let mut rng = rand::thread_rng();
    let bids = (0..size)
        .map(|i| {
            let title = format!("Item {}", rng.gen_range(0..distinct));
            Bid::new(&i.to_string(), &title, "General Fund", rng.gen_range(0.0..1000.0))
        })
        .collect::<Vec<Bid>>();
    BidStore::from(bids)
}

/// Bid ids in ascending order, used to check that a sort is a permutation of its input.
#[allow(dead_code)]
pub fn sorted_ids(store: &BidStore) -> Vec<String> {
    let mut ids: Vec<String> = store.iter().map(|bid| bid.bid_id().to_string()).collect();
    ids.sort();
    ids
}

#[allow(dead_code)]
pub fn owned_titles(store: &BidStore) -> Vec<String> {
    store.titles().into_iter().map(|title| title.to_string()).collect()
}
