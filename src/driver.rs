use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::loader::Loader;
use crate::menu::{Choice, Menu};
use crate::prompt::{read_bid, read_lossy_line};
use crate::sort::{quick_sort_all, selection_sort};
use crate::store::BidStore;
use crate::timing::Stopwatch;

/// Input file used when no path is given on the command line.
pub const DEFAULT_CSV_PATH: &str = "eBid_Monthly_Sales_Dec_2016.csv";

/// Pick the input file from the process arguments, program name included.
///
/// The path is taken only when it is the single argument. Any other argument count falls back
/// to [DEFAULT_CSV_PATH].
pub fn csv_path_from_args<I: IntoIterator<Item = String>>(args: I) -> PathBuf {
    let args: Vec<String> = args.into_iter().collect();
    match args.as_slice() {
        [_, path] => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CSV_PATH),
    }
}

/// What the menu loop does after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive menu over a [BidStore].
///
/// The driver owns the store and the path bids are loaded from. Each action runs to
/// completion before the next choice is read.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use std::path::PathBuf;
/// use bid_sort::driver::Driver;
///
/// let mut driver = Driver::new(PathBuf::from("bids.csv"));
/// let mut output = Vec::new();
/// driver.run(&mut Cursor::new("7\n9\n"), &mut output).unwrap();
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("Not a valid option. Please try again."));
/// assert!(output.ends_with("Good bye.\n"));
/// ```
pub struct Driver {
    csv_path: PathBuf,
    store: BidStore,
}

impl Driver {
    pub fn new(csv_path: PathBuf) -> Driver {
        Driver {
            csv_path,
            store: BidStore::new(),
        }
    }

    /// Start with bids already in the store.
    pub fn with_store(csv_path: PathBuf, store: BidStore) -> Driver {
        Driver {
            csv_path,
            store,
        }
    }

    pub fn csv_path(&self) -> &Path {
        self.csv_path.as_path()
    }

    pub fn store(&self) -> &BidStore {
        &self.store
    }

    /// Show the menu and dispatch choices until exit is chosen or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<(), anyhow::Error> {
        loop {
            write!(output, "{}", Menu)?;
            write!(output, "Enter choice: ")?;
            output.flush()?;

            let choice = match read_lossy_line(input)? {
                None => {
                    log::debug!("End of input, exiting");
                    writeln!(output)?;
                    Choice::Exit
                }
                Some(line) => Choice::parse(&line),
            };

            if self.dispatch(choice, output)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Perform a single menu action.
    pub fn dispatch<W: Write>(&mut self, choice: Choice, output: &mut W) -> Result<Flow, anyhow::Error> {
        log::debug!("Dispatch {:?}, {} bids in store", choice, self.store.len());
        match choice {
            Choice::Load => self.load(output)?,
            Choice::Display => self.display(output)?,
            Choice::SelectionSort => self.selection_sort(output)?,
            Choice::QuickSort => self.quick_sort(output)?,
            Choice::Exit => {
                writeln!(output, "Good bye.")?;
                return Ok(Flow::Exit);
            }
            Choice::Invalid => {
                writeln!(output, "Not a valid option. Please try again.")?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Prompt for one bid and append it to the store. Returns false if input ended first.
    pub fn add_bid<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<bool, anyhow::Error> {
        match read_bid(input, output)? {
            None => Ok(false),
            Some(bid) => {
                log::debug!("Add bid {}", bid);
                self.store.push(bid);
                Ok(true)
            }
        }
    }

    fn load<W: Write>(&mut self, output: &mut W) -> Result<(), anyhow::Error> {
        let stopwatch = Stopwatch::start();
        writeln!(output, "Loading CSV file {}", self.csv_path.display())?;
        let report = Loader::new(self.csv_path.clone()).load();
        self.store.replace(report.into_bids());
        writeln!(output, "{} bids read", self.store.len())?;
        writeln!(output, "{}", stopwatch.elapsed())?;
        Ok(())
    }

    fn display<W: Write>(&self, output: &mut W) -> Result<(), anyhow::Error> {
        for bid in &self.store {
            writeln!(output, "{}", bid)?;
        }
        writeln!(output)?;
        Ok(())
    }

    fn selection_sort<W: Write>(&mut self, output: &mut W) -> Result<(), anyhow::Error> {
        let stopwatch = Stopwatch::start();
        let swaps = selection_sort(&mut self.store);
        let elapsed = stopwatch.elapsed();
        log::debug!("Selection sort performed {} swaps", swaps);
        self.check_sorted("selection sort");
        writeln!(output, "{} bids sorted", self.store.len())?;
        writeln!(output, "{}", elapsed)?;
        Ok(())
    }

    fn quick_sort<W: Write>(&mut self, output: &mut W) -> Result<(), anyhow::Error> {
        let stopwatch = Stopwatch::start();
        quick_sort_all(&mut self.store);
        let elapsed = stopwatch.elapsed();
        self.check_sorted("quick sort");
        writeln!(output, "{} bids sorted", self.store.len())?;
        writeln!(output, "{}", elapsed)?;
        Ok(())
    }

    fn check_sorted(&self, algorithm: &str) {
        if !self.store.is_sorted_by_title() {
            log::warn!("Store is not sorted by title after {}", algorithm);
        }
    }
}
