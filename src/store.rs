use std::slice::Iter;

use crate::bid::Bid;

/// Insertion ordered, index addressable collection of bids.
///
/// The store owns its records. Ordering is whatever the last load or sort produced.
#[derive(Clone, Debug, Default)]
pub struct BidStore {
    bids: Vec<Bid>,
}

impl BidStore {
    /// Create an empty store.
    pub fn new() -> BidStore {
        BidStore {
            bids: Vec::new(),
        }
    }

    /// Replace the complete content of the store.
    pub fn replace(&mut self, bids: Vec<Bid>) {
        self.bids = bids;
    }

    /// Append a bid at the end of the store.
    pub fn push(&mut self, bid: Bid) {
        self.bids.push(bid);
    }

    pub fn get(&self, index: usize) -> Option<&Bid> {
        self.bids.get(index)
    }

    /// Exchange the bids at `a` and `b`.
    ///
    /// # Panics
    /// Panics if `a` or `b` are out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.bids.swap(a, b);
    }

    pub fn len(&self) -> usize {
        self.bids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Bid> {
        self.bids.iter()
    }

    /// Titles in store order.
    pub fn titles(&self) -> Vec<&str> {
        self.bids.iter().map(|bid| bid.title()).collect()
    }

    /// Check that titles are in non decreasing order.
    pub fn is_sorted_by_title(&self) -> bool {
        self.bids.windows(2).all(|w| w[0].title() <= w[1].title())
    }

    pub(crate) fn title(&self, index: usize) -> &str {
        self.bids[index].title()
    }
}

impl From<Vec<Bid>> for BidStore {
    fn from(bids: Vec<Bid>) -> Self {
        BidStore {
            bids,
        }
    }
}

impl<'a> IntoIterator for &'a BidStore {
    type Item = &'a Bid;
    type IntoIter = Iter<'a, Bid>;

    fn into_iter(self) -> Self::IntoIter {
        self.bids.iter()
    }
}
