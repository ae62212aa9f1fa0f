use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A menu selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// 1. Load bids from the input file
    Load,
    /// 2. Display all bids
    Display,
    /// 3. Selection sort all bids
    SelectionSort,
    /// 4. Quick sort all bids
    QuickSort,
    /// 9. Exit
    Exit,
    /// Anything else
    Invalid,
}

impl Choice {
    /// Parse one line of user input. Never fails, unknown input is [Choice::Invalid].
    pub fn parse(line: &str) -> Choice {
        match i64::from_str(line.trim()) {
            Ok(1) => Choice::Load,
            Ok(2) => Choice::Display,
            Ok(3) => Choice::SelectionSort,
            Ok(4) => Choice::QuickSort,
            Ok(9) => Choice::Exit,
            _ => Choice::Invalid,
        }
    }
}

/// The menu text, without the trailing prompt.
pub struct Menu;

impl Display for Menu {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Menu:")?;
        writeln!(f, "  1. Load Bids")?;
        writeln!(f, "  2. Display All Bids")?;
        writeln!(f, "  3. Selection Sort All Bids")?;
        writeln!(f, "  4. Quick Sort All Bids")?;
        writeln!(f, "  9. Exit")
    }
}
