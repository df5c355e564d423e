//! Data row accumulation.

use super::schema::Plot;
use crate::utils::config::CLOSING_MARKER_TOKEN;
use crate::utils::error::ParseError;

/// What a line inside an open table turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Values were appended to the plot
    Data,
    /// Empty line, nothing to do
    Blank,
    /// Closing marker; the plot is complete
    Close,
}

/// True when `line` carries the table closing token
pub fn is_closing_row(line: &str) -> bool {
    line.split_whitespace().any(|t| t == CLOSING_MARKER_TOKEN)
}

/// Parse a data row and append its values to `plot`, column by column.
///
/// The row is validated completely before anything is appended, so a failing
/// row leaves the plot untouched.
///
/// # Errors
/// * `ParseError::ColumnCount` - token count differs from trace count
/// * `ParseError::NumericParse` - a token is not a finite float
pub fn accumulate_row(plot: &mut Plot, line: &str, line_no: usize) -> Result<RowKind, ParseError> {
    if is_closing_row(line) {
        return Ok(RowKind::Close);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(RowKind::Blank);
    }

    if tokens.len() != plot.traces.len() {
        return Err(ParseError::ColumnCount {
            line: line_no,
            expected: plot.traces.len(),
            found: tokens.len(),
        });
    }

    let values = tokens
        .iter()
        .enumerate()
        .map(|(column, token)| parse_sample(token, line_no, column + 1))
        .collect::<Result<Vec<f64>, ParseError>>()?;

    for (trace, value) in plot.traces.iter_mut().zip(values) {
        trace.data.push(value);
    }

    Ok(RowKind::Data)
}

/// Parse one sample value
///
/// **Private** - internal helper for accumulate_row
fn parse_sample(token: &str, line_no: usize, column: usize) -> Result<f64, ParseError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::NumericParse {
            line: line_no,
            column,
            token: token.to_string(),
        })
}
