//! `range-cli`: reads a range and a stream of numbers, reports the numbers
//! that fall inside the range.
//!
//! Input is whitespace-separated: the first two numbers are the lower and
//! upper bound, every following number is inserted into a
//! [`BalancedTree`]. Reading stops at the first token that is not a number.
//!
//! Provides the logic used by the `range-query` binary:
//! - [`parse_input`]: tokenize the input into a [`Request`]
//! - [`run`]: build the tree and answer the query
//! - [`normalize`]: sort and deduplicate raw query output
//! - [`render`]: format a [`Report`] for the terminal

use range_forest::{check_bounds, BalancedTree, RangeError};
use thiserror::Error;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("Missing value for {0}")]
    MissingBound(&'static str),
    #[error("Give correct input values for xLower and xUpper ({0})")]
    Range(#[from] RangeError),
}

// ── Input ─────────────────────────────────────────────────────────────────

/// A parsed query: bounds plus the values to index.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub lo: f64,
    pub hi: f64,
    pub values: Vec<f64>,
}

/// Splits `text` into a [`Request`].
///
/// Tokens are read until the first one that does not parse as `f64`; the
/// rest of the input is ignored, like formatted stream extraction.
pub fn parse_input(text: &str) -> Result<Request, CliError> {
    let mut numbers = text.split_whitespace().map_while(|t| t.parse::<f64>().ok());
    let lo = numbers.next().ok_or(CliError::MissingBound("xLower"))?;
    let hi = numbers.next().ok_or(CliError::MissingBound("xUpper"))?;
    check_bounds(&lo, &hi)?;
    let values: Vec<f64> = numbers.collect();
    log::debug!("parsed range [{lo}, {hi}] and {} values", values.len());
    Ok(Request { lo, hi, values })
}

// ── Query ─────────────────────────────────────────────────────────────────

/// Result of answering a [`Request`].
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub lo: f64,
    pub hi: f64,
    /// Pre-order dump of the tree built from the input.
    pub preorder: Vec<f64>,
    /// Tree-dump rendering of the index.
    pub tree: String,
    /// Split node key; `None` for point queries and when no node can match.
    pub split: Option<f64>,
    /// Matching values, ascending and deduplicated.
    pub found: Vec<f64>,
}

/// Indexes `request.values` and answers the range query.
pub fn run(request: &Request) -> Result<Report, CliError> {
    check_bounds(&request.lo, &request.hi)?;

    let mut tree = BalancedTree::new();
    let mut skipped = 0usize;
    for v in &request.values {
        if !tree.insert(*v) {
            skipped += 1;
        }
    }
    log::info!(
        "indexed {} values ({skipped} duplicates or NaN skipped), height {}",
        tree.len(),
        tree.height()
    );

    let (found, split) = if request.lo == request.hi {
        let found = if tree.contains(&request.lo) {
            vec![request.lo]
        } else {
            Vec::new()
        };
        (found, None)
    } else {
        let (found, stats) = tree.query_with_stats(&request.lo, &request.hi);
        log::info!(
            "split node {:?} after {} nodes, {} boundary nodes, {} keys collected in bulk",
            stats.split,
            stats.split_walk,
            stats.boundary_walk,
            stats.collected
        );
        (found, stats.split)
    };

    Ok(Report {
        lo: request.lo,
        hi: request.hi,
        preorder: tree.preorder(),
        tree: tree.to_string(),
        split,
        found: normalize(found),
    })
}

/// Sorts ascending and drops repeated values.
pub fn normalize(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}

// ── Output ────────────────────────────────────────────────────────────────

/// Which optional sections [`render`] prints.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    /// Only print the result section.
    pub quiet: bool,
    /// Print the tree-dump rendering after the pre-order dump.
    pub tree: bool,
}

pub const NO_VALUES: &str = "No values found in the given range";

pub fn render(report: &Report, opts: RenderOptions) -> String {
    let mut out = String::new();

    if !opts.quiet {
        out.push_str("Values entered in the BBST:\n");
        out.push_str(&join(&report.preorder, "  "));
        out.push('\n');
        if opts.tree {
            out.push_str(&report.tree);
            out.push('\n');
        }
        out.push('\n');
        if let Some(split) = report.split {
            out.push_str(&format!("Split node: {split}\n\n"));
        }
    }

    if report.found.is_empty() {
        out.push_str(NO_VALUES);
        out.push('\n');
    } else if report.lo == report.hi {
        out.push_str(&format!("{}\n", report.lo));
    } else {
        out.push_str(&format!(
            "Values found in the given range {} & {} :\n",
            report.lo, report.hi
        ));
        out.push_str(&join(&report.found, " "));
        out.push('\n');
    }

    out
}

fn join(values: &[f64], sep: &str) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}
