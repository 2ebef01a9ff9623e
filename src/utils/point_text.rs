//! Plain-text point set format
//!
//! One point set per line, points written as `x,y` and separated by `;`.
//! Parentheses around a point are allowed, a blank line is an empty set,
//! and lines starting with `#` are comments.

use lazy_static::lazy_static;
use regex::Regex;

use crate::coordinate::Point;
use crate::errors::{CoordError, CoordResult};

lazy_static! {
    static ref POINT_PATTERN: Regex =
        Regex::new(r"^\(?\s*([^,()\s]+)\s*,\s*([^,()\s]+)\s*\)?$").expect("valid point pattern");
}

/// Parse a single `x,y` token
///
/// # Arguments
/// * `token` - The point text, with or without parentheses
/// * `line` - 1-based line number used in error messages
pub fn parse_point(token: &str, line: usize) -> CoordResult<Point> {
    let invalid = || CoordError::InvalidPoint { line, text: token.to_string() };

    let captures = POINT_PATTERN.captures(token.trim()).ok_or_else(invalid)?;
    let x = captures[1].parse::<f64>().map_err(|_| invalid())?;
    let y = captures[2].parse::<f64>().map_err(|_| invalid())?;

    Ok(Point::new(x, y))
}

/// Parse one line into a point set
pub fn parse_point_line(text: &str, line: usize) -> CoordResult<Vec<Point>> {
    text.split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| parse_point(token, line))
        .collect()
}

/// Parse a whole document into point sets, skipping comment lines
pub fn parse_point_sets(text: &str) -> CoordResult<Vec<Vec<Point>>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with('#'))
        .map(|(index, line)| parse_point_line(line, index + 1))
        .collect()
}

/// Format a point set as one line (without the newline)
pub fn format_point_line(points: &[Point]) -> String {
    points.iter()
        .map(Point::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Format point sets, one per line
///
/// The output parses back to the same sets; float formatting is exact.
pub fn format_point_sets<S: AsRef<[Point]>>(sets: &[S]) -> String {
    if sets.is_empty() {
        return String::new();
    }

    let mut output = sets.iter()
        .map(|set| format_point_line(set.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");
    output.push('\n');
    output
}
