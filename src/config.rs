use std::path::PathBuf;

use crate::columns::Columns;

#[derive(Clone, Debug)]
pub(crate) struct Config {
    path: PathBuf,
    delimiter: u8,
    has_headers: bool,
    columns: Columns,
    currency_symbol: char,
}

impl Config {
    pub(crate) fn new(
        path: PathBuf,
        delimiter: u8,
        has_headers: bool,
        columns: Columns,
        currency_symbol: char,
    ) -> Config {
        Config {
            path,
            delimiter,
            has_headers,
            columns,
            currency_symbol,
        }
    }

    pub(crate) fn path(&self) -> &PathBuf {
        &self.path
    }

    pub(crate) fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub(crate) fn has_headers(&self) -> bool {
        self.has_headers
    }

    pub(crate) fn columns(&self) -> &Columns {
        &self.columns
    }

    pub(crate) fn currency_symbol(&self) -> char {
        self.currency_symbol
    }
}
