//! This crate loads bid records from a delimited text file, for example a
//! [CSV](https://www.rfc-editor.org/rfc/rfc4180) export of monthly auction sales, and sorts them
//! by title with either of two classic comparison sorts so their running times can be compared.
//!
//! * [selection_sort](sort::selection_sort) performs Θ(n²) comparisons on any input.
//! * [quick_sort](sort::quick_sort) uses Hoare partitioning around the middle element and an
//!   explicit stack of pending ranges, so adversarial inputs cannot exhaust the call stack.
//!
//! Both sorts work in place on a [BidStore](store::BidStore) and neither is stable.
//!
//! # Examples
//! ```
//! use std::path::PathBuf;
//! use bid_sort::loader::Loader;
//! use bid_sort::sort::{quick_sort_all, selection_sort};
//! use bid_sort::store::BidStore;
//! use bid_sort::timing::Stopwatch;
//!
//! // load the same file twice and time each sort
//! fn compare(input: PathBuf) {
//!     let mut by_selection = BidStore::from(Loader::new(input.clone()).load().into_bids());
//!     let mut by_quick = BidStore::from(Loader::new(input).load().into_bids());
//!
//!     let stopwatch = Stopwatch::start();
//!     selection_sort(&mut by_selection);
//!     println!("selection sort\n{}", stopwatch.elapsed());
//!
//!     let stopwatch = Stopwatch::start();
//!     quick_sort_all(&mut by_quick);
//!     println!("quick sort\n{}", stopwatch.elapsed());
//!
//!     assert_eq!(by_selection.titles(), by_quick.titles());
//! }
//! ```
//!

pub(crate) mod config;

pub mod bid;
pub mod columns;
pub mod currency;
pub mod driver;
pub mod loader;
pub mod menu;
pub mod prompt;
pub mod sort;
pub mod store;
pub mod timing;
