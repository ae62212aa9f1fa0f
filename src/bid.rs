use std::fmt::{Display, Formatter};

/// A single bid entry.
///
/// Fields are fixed at construction. A [Bid] may be moved around inside a
/// [BidStore](crate::store::BidStore) but never edited in place.
///
/// # Examples
/// ```
/// use bid_sort::bid::Bid;
/// let bid = Bid::new("98109", "Hammer", "General Fund", 12.5);
/// assert_eq!(bid.to_string(), "98109: Hammer | 12.5 | General Fund");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bid {
    bid_id: String,
    title: String,
    fund: String,
    amount: f64,
}

impl Bid {
    /// Create a new [Bid]
    ///
    /// # Arguments
    /// * `bid_id` - the bid identifier, not required to be unique
    /// * `title` - the title, used as the sort key
    /// * `fund` - the fund the bid is drawn against
    /// * `amount` - the bid amount, already stripped of any currency symbol
    pub fn new(bid_id: &str, title: &str, fund: &str, amount: f64) -> Bid {
        Bid {
            bid_id: bid_id.to_string(),
            title: title.to_string(),
            fund: fund.to_string(),
            amount,
        }
    }

    /// Get the bid identifier.
    pub fn bid_id(&self) -> &str {
        self.bid_id.as_str()
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Get the fund.
    pub fn fund(&self) -> &str {
        self.fund.as_str()
    }

    /// Get the amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl Display for Bid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} | {} | {}", self.bid_id, self.title, self.amount, self.fund)
    }
}
