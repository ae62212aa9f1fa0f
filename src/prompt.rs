use std::io::{BufRead, Write};

use crate::bid::Bid;
use crate::currency::str_to_double;

/// Print `prompt` and read one line, without its line terminator. Returns `None` at end of
/// input.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, anyhow::Error> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    read_lossy_line(input)
}

/// Read one line, without its line terminator. Bytes that are not valid UTF-8 are replaced
/// with U+FFFD. Returns `None` at end of input.
pub fn read_lossy_line<R: BufRead>(input: &mut R) -> Result<Option<String>, anyhow::Error> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
}

/// Prompt for the fields of a bid, one line each. The amount is converted with '$' stripped.
///
/// Returns `None` when input ends before all four fields were read.
pub fn read_bid<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<Bid>, anyhow::Error> {
    let bid_id = match read_line(input, output, "Enter Id: ")? {
        None => return Ok(None),
        Some(line) => line,
    };
    let title = match read_line(input, output, "Enter title: ")? {
        None => return Ok(None),
        Some(line) => line,
    };
    let fund = match read_line(input, output, "Enter fund: ")? {
        None => return Ok(None),
        Some(line) => line,
    };
    let amount = match read_line(input, output, "Enter amount: ")? {
        None => return Ok(None),
        Some(line) => str_to_double(&line, '$'),
    };
    Ok(Some(Bid::new(&bid_id, &title, fund.trim(), amount)))
}
