// src/parsers.rs
use std::fmt::Display;
use std::str::FromStr;

use crate::analyze::Span;

/// Wrapper type to parse selection spans from the CLI
/// (e.g. `1:0..2:3`, zero-based `line:char`, end exclusive).
#[derive(Debug, Clone, Copy)]
pub struct SelectionArg(pub Span);

impl FromStr for SelectionArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once("..")
            .ok_or_else(|| format!("Invalid selection '{s}': expected LINE:CHAR..LINE:CHAR"))?;
        let (start_line, start_char) = parse_position(start)?;
        let (end_line, end_char) = parse_position(end)?;
        Ok(Self(Span { start_line, start_char, end_line, end_char }))
    }
}

fn parse_position(s: &str) -> Result<(usize, usize), String> {
    let (line, ch) = s
        .split_once(':')
        .ok_or_else(|| format!("Invalid position '{s}': expected LINE:CHAR"))?;
    Ok((
        parse_number(line.trim(), "line")?,
        parse_number(ch.trim(), "char")?,
    ))
}

fn parse_number(s: &str, what: &str) -> Result<usize, String> {
    s.parse::<usize>()
        .map_err(|err| format!("invalid {what} number '{s}': {err}"))
}

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse the `--hold` delay in seconds, constrained to [0, 600].
/// Zero is accepted so the status line can be dismissed immediately.
///
/// # Errors
/// Returns an error if the input is not a valid number or exceeds 600.
pub fn parse_hold_seconds(s: &str) -> Result<u64, String> {
    parse_bounded_number(s, 0, Some(600))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selection_span() {
        let arg: SelectionArg = "1:0..2:3".parse().expect("valid span");
        assert_eq!(arg.0.start_line, 1);
        assert_eq!(arg.0.start_char, 0);
        assert_eq!(arg.0.end_line, 2);
        assert_eq!(arg.0.end_char, 3);
    }

    #[test]
    fn rejects_malformed_spans() {
        assert!("1:0".parse::<SelectionArg>().is_err());
        assert!("1..2".parse::<SelectionArg>().is_err());
        assert!("a:0..2:3".parse::<SelectionArg>().is_err());
    }

    #[test]
    fn hold_seconds_bounds() {
        assert_eq!(parse_hold_seconds("0"), Ok(0));
        assert_eq!(parse_hold_seconds("5"), Ok(5));
        assert!(parse_hold_seconds("601").is_err());
        assert!(parse_hold_seconds("abc").is_err());
    }
}
