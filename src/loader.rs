use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use csv::{ReaderBuilder, StringRecord};

use crate::bid::Bid;
use crate::columns::Columns;
use crate::config::Config;
use crate::currency::str_to_double;

/// Outcome of a load: the bids read and the error that stopped reading, if any.
#[derive(Debug)]
pub struct LoadReport {
    bids: Vec<Bid>,
    error: Option<anyhow::Error>,
}

impl LoadReport {
    /// Bids read before the end of the file or before the first error.
    pub fn bids(&self) -> &Vec<Bid> {
        &self.bids
    }

    pub fn into_bids(self) -> Vec<Bid> {
        self.bids
    }

    /// The error that stopped the load.
    pub fn error(&self) -> Option<&anyhow::Error> {
        self.error.as_ref()
    }

    /// True when the whole file was read.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Load bids from a delimited text file.
///
/// Rows are split by the [csv] crate, so quoted fields may contain the delimiter. A row that
/// cannot be decoded or that is too short for the configured [Columns] stops the load. The
/// error is logged and the bids read up to that row are kept.
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use bid_sort::columns::Columns;
/// use bid_sort::loader::Loader;
///
/// fn load_tsv(input: PathBuf) -> usize {
///     let mut loader = Loader::new(input);
///     loader.with_delimiter(b'\t');
///     loader.with_columns(Columns::new().with_fund(5));
///     loader.load().bids().len()
/// }
/// ```
pub struct Loader {
    path: PathBuf,
    delimiter: u8,
    has_headers: bool,
    columns: Columns,
    currency_symbol: char,
}

impl Loader {
    /// Create a default Loader definition.
    ///
    /// * The default delimiter is a comma (',')
    /// * The first row is a header and is skipped
    /// * Columns are mapped by [Columns::new]
    /// * '$' is stripped from the amount before conversion
    pub fn new(path: PathBuf) -> Loader {
        Loader {
            path,
            delimiter: b',',
            has_headers: true,
            columns: Columns::new(),
            currency_symbol: '$',
        }
    }

    /// Set the field delimiter. The default is ','
    pub fn with_delimiter(&mut self, delimiter: u8) {
        self.delimiter = delimiter;
    }

    /// Specify whether the first row is a header. The default is true
    pub fn with_headers(&mut self, has_headers: bool) {
        self.has_headers = has_headers;
    }

    /// Replace the column mapping.
    pub fn with_columns(&mut self, columns: Columns) {
        self.columns = columns;
    }

    /// Set the character stripped from amounts. The default is '$'
    pub fn with_currency_symbol(&mut self, currency_symbol: char) {
        self.currency_symbol = currency_symbol;
    }

    /// Read the file. Never fails, see [LoadReport] for the outcome.
    pub fn load(&self) -> LoadReport {
        let config = self.create_config();
        log::info!("Start loading bids from {}", config.path().display());
        let mut bids = Vec::new();
        let error = Self::read_bids(&config, &mut bids).err();
        if let Some(e) = &error {
            log::error!("{:#}", e);
        }
        log::info!("Finish loading bids from {}, {} bids read", config.path().display(), bids.len());
        LoadReport {
            bids,
            error,
        }
    }

    fn create_config(&self) -> Config {
        Config::new(
            self.path.clone(),
            self.delimiter,
            self.has_headers,
            self.columns.clone(),
            self.currency_symbol,
        )
    }

    fn read_bids(config: &Config, bids: &mut Vec<Bid>) -> Result<(), anyhow::Error> {
        let file = File::open(config.path())
            .with_context(|| anyhow!("path: {}", config.path().display()))?;
        let mut reader = ReaderBuilder::new()
            .delimiter(config.delimiter())
            .has_headers(config.has_headers())
            .flexible(true)
            .from_reader(file);

        for result in reader.records() {
            let record = result
                .with_context(|| anyhow!("path: {}", config.path().display()))?;
            let bid = Self::create_bid(&record, config)
                .with_context(||
                    format!(
                        "path: {}, line: {}",
                        config.path().display(),
                        record.position().map(|p| p.line()).unwrap_or(0),
                    )
                )?;
            bids.push(bid);
        }
        Ok(())
    }

    fn create_bid(record: &StringRecord, config: &Config) -> Result<Bid, anyhow::Error> {
        let columns = config.columns();
        if record.len() < columns.required() {
            return Err(
                anyhow!(
                    "Requested column {} but there are only {} columns using {} as delimiter",
                    columns.required() - 1,
                    record.len(),
                    config.delimiter() as char,
                )
            );
        }

        Ok(
            Bid::new(
                &record[columns.bid_id()],
                &record[columns.title()],
                &record[columns.fund()],
                str_to_double(&record[columns.amount()], config.currency_symbol()),
            )
        )
    }
}

/// Load bids with the default [Loader] settings, keeping whatever was read before an error.
pub fn load_bids(path: &Path) -> Vec<Bid> {
    Loader::new(path.to_path_buf()).load().into_bids()
}
