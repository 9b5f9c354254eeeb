// Free-form color text -> Color.
// Three grammars, tried in order: named color, hex (#RRGGBB / #RGB),
// decimal triple with an optional `rgb` prefix. A failed parse must leave
// the caller's current color untouched, so failure is a plain value here.

use std::fmt::{self, Display};

use crate::types::Color;

/// The text matched none of the recognized color grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidColor;

impl Display for InvalidColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not a recognized color")
    }
}

/// Named colors, matched exactly (lowercase, case-sensitive).
const NAMED: &[(&str, Color)] = &[
    ("black", Color::new(0, 0, 0)),
    ("white", Color::new(255, 255, 255)),
    ("red", Color::new(255, 0, 0)),
    ("green", Color::new(0, 128, 0)),
    ("blue", Color::new(0, 0, 255)),
    ("yellow", Color::new(255, 255, 0)),
    ("cyan", Color::new(0, 255, 255)),
    ("magenta", Color::new(255, 0, 255)),
    ("gray", Color::new(128, 128, 128)),
    ("grey", Color::new(128, 128, 128)),
    ("orange", Color::new(255, 165, 0)),
    ("purple", Color::new(128, 0, 128)),
    ("pink", Color::new(255, 192, 203)),
    ("brown", Color::new(139, 69, 19)),
];

/// Parse a color string.
///
/// Accepted forms:
/// * a named color from the fixed table, e.g. `black`
/// * hex with optional `#`: `RRGGBB`, or `RGB` with each digit doubled
///   (`f` -> `ff`), case-insensitive
/// * decimal: `rgb(r,g,b)` or any spelling that splits into three integer
///   tokens on spaces, parentheses and commas, e.g. `12, 34, 56`
pub fn parse(text: &str) -> Result<Color, InvalidColor> {
    let text = text.trim();
    if let Some(&(_, color)) = NAMED.iter().find(|(name, _)| *name == text) {
        return Ok(color);
    }
    if let Some(color) = parse_hex(text) {
        return Ok(color);
    }
    if let Some(color) = parse_decimal(text) {
        return Ok(color);
    }
    Err(InvalidColor)
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// `#RRGGBB` or `#RGB` (leading `#` optional). Each hex pair `d1 d2` is the
/// byte `16*d1 + d2`; the 3-digit form duplicates each digit.
fn parse_hex(text: &str) -> Option<Color> {
    let bytes = text.strip_prefix('#').unwrap_or(text).as_bytes();
    match bytes.len() {
        3 => {
            let r = nibble(bytes[0])?;
            let g = nibble(bytes[1])?;
            let b = nibble(bytes[2])?;
            Some(Color::new(r * 17, g * 17, b * 17))
        }
        6 => {
            let pair = |hi, lo| Some(nibble(hi)? << 4 | nibble(lo)?);
            Some(Color::new(
                pair(bytes[0], bytes[1])?,
                pair(bytes[2], bytes[3])?,
                pair(bytes[4], bytes[5])?,
            ))
        }
        _ => None,
    }
}

/// Split on spaces, parentheses and commas, drop empty tokens, allow one
/// leading literal `rgb`, then require exactly three byte-sized integers.
fn parse_decimal(text: &str) -> Option<Color> {
    let mut tokens = text
        .split([' ', '(', ')', ','])
        .filter(|t| !t.is_empty())
        .peekable();
    if tokens.peek() == Some(&"rgb") {
        tokens.next();
    }
    let r = tokens.next()?.parse::<u8>().ok()?;
    let g = tokens.next()?.parse::<u8>().ok()?;
    let b = tokens.next()?.parse::<u8>().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(Color::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors() {
        assert_eq!(parse("black"), Ok(Color::new(0, 0, 0)));
        assert_eq!(parse("white"), Ok(Color::new(255, 255, 255)));
        assert_eq!(parse("red"), Ok(Color::new(255, 0, 0)));
        assert_eq!(parse("green"), Ok(Color::new(0, 128, 0)));
        assert_eq!(parse("grey"), Ok(Color::new(128, 128, 128)));
        assert_eq!(parse("brown"), Ok(Color::new(139, 69, 19)));
    }

    #[test]
    fn named_colors_are_case_sensitive() {
        assert_eq!(parse("Black"), Err(InvalidColor));
        assert_eq!(parse("WHITE"), Err(InvalidColor));
    }

    #[test]
    fn hex_rrggbb() {
        assert_eq!(parse("#000000"), Ok(Color::new(0, 0, 0)));
        assert_eq!(parse("#ffffff"), Ok(Color::new(255, 255, 255)));
        assert_eq!(parse("#FF8000"), Ok(Color::new(255, 128, 0)));
        assert_eq!(parse("1a2b3c"), Ok(Color::new(0x1A, 0x2B, 0x3C)));
    }

    #[test]
    fn hex_rgb_shorthand_doubles_digits() {
        assert_eq!(parse("#fff"), Ok(Color::new(255, 255, 255)));
        assert_eq!(parse("#f00"), Ok(Color::new(255, 0, 0)));
        assert_eq!(parse("#abc"), Ok(Color::new(170, 187, 204)));
        assert_eq!(parse("123"), Ok(Color::new(17, 34, 51)));
    }

    #[test]
    fn hex_is_case_insensitive() {
        assert_eq!(parse("#AbCdEf"), parse("#abcdef"));
        assert_eq!(parse("#A1f"), parse("#a1F"));
    }

    #[test]
    fn decimal_forms() {
        assert_eq!(parse("rgb(10,20,30)"), Ok(Color::new(10, 20, 30)));
        assert_eq!(parse("10,20,30"), Ok(Color::new(10, 20, 30)));
        assert_eq!(parse("rgb 10 20 30"), Ok(Color::new(10, 20, 30)));
        assert_eq!(parse("rgb( 0 , 255 , 0 )"), Ok(Color::new(0, 255, 0)));
    }

    #[test]
    fn decimal_out_of_range_fails() {
        assert_eq!(parse("300,0,0"), Err(InvalidColor));
        assert_eq!(parse("rgb(0,0,256)"), Err(InvalidColor));
        assert_eq!(parse("-1,0,0"), Err(InvalidColor));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(parse(""), Err(InvalidColor));
        assert_eq!(parse("notacolor"), Err(InvalidColor));
        assert_eq!(parse("#12"), Err(InvalidColor));
        assert_eq!(parse("#12345"), Err(InvalidColor));
        assert_eq!(parse("#1234567"), Err(InvalidColor));
        assert_eq!(parse("1,2"), Err(InvalidColor));
        assert_eq!(parse("1,2,3,4"), Err(InvalidColor));
        assert_eq!(parse("rgb(a,b,c)"), Err(InvalidColor));
    }
}
