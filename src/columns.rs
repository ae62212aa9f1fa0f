/// Maps bid fields to column positions in a delimited row.
///
/// Positions start at 0. The defaults match the monthly sales export: title in column 0, id in
/// column 1, amount in column 4 and fund in column 8.
///
/// # Examples
/// ```
/// // read a short four column layout: id, title, fund, amount
/// use bid_sort::columns::Columns;
/// let columns = Columns::new()
///     .with_bid_id(0)
///     .with_title(1)
///     .with_fund(2)
///     .with_amount(3);
/// assert_eq!(columns.required(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Columns {
    bid_id: usize,
    title: usize,
    fund: usize,
    amount: usize,
}

impl Columns {
    /// Create the default [Columns] mapping.
    pub fn new() -> Columns {
        Columns {
            bid_id: 1,
            title: 0,
            fund: 8,
            amount: 4,
        }
    }

    /// Get the bid id column.
    pub fn bid_id(&self) -> usize {
        self.bid_id
    }

    /// Get the title column.
    pub fn title(&self) -> usize {
        self.title
    }

    /// Get the fund column.
    pub fn fund(&self) -> usize {
        self.fund
    }

    /// Get the amount column.
    pub fn amount(&self) -> usize {
        self.amount
    }

    /// Number of columns a row must have for every mapped field to be present.
    pub fn required(&self) -> usize {
        [self.bid_id, self.title, self.fund, self.amount]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Specify the bid id column.
    pub fn with_bid_id(mut self, bid_id: usize) -> Columns {
        self.bid_id = bid_id;
        self
    }

    /// Specify the title column.
    pub fn with_title(mut self, title: usize) -> Columns {
        self.title = title;
        self
    }

    /// Specify the fund column.
    pub fn with_fund(mut self, fund: usize) -> Columns {
        self.fund = fund;
        self
    }

    /// Specify the amount column. The amount is converted with
    /// [str_to_double](crate::currency::str_to_double).
    pub fn with_amount(mut self, amount: usize) -> Columns {
        self.amount = amount;
        self
    }
}

impl Default for Columns {
    fn default() -> Self {
        Columns::new()
    }
}
