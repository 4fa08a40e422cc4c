//! Component layouts such as `"{d}. {m} {y}"`, tokenized once and shared by
//! rendering and recognition so both always agree on the layout.

const DAY: &str = "{d}";
const MONTH: &str = "{m}";
const YEAR: &str = "{y}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Day,
    Month,
    Year,
}

/// Splits `pattern` into literals and field tokens.
pub fn segments(pattern: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = pattern;
    while !rest.is_empty() {
        let next = [(DAY, Segment::Day), (MONTH, Segment::Month), (YEAR, Segment::Year)]
            .into_iter()
            .filter_map(|(token, segment)| rest.find(token).map(|at| (at, token, segment)))
            .min_by_key(|(at, ..)| *at);

        match next {
            Some((at, token, segment)) => {
                if at > 0 {
                    out.push(Segment::Literal(&rest[..at]));
                }
                out.push(segment);
                rest = &rest[at + token.len()..];
            }
            None => {
                out.push(Segment::Literal(rest));
                rest = "";
            }
        }
    }
    out
}

/// Converts literal text to a regex fragment; any whitespace run matches any
/// whitespace run.
pub fn literal_regex(literal: &str) -> String {
    let mut out = String::new();
    let mut in_space = false;
    for ch in literal.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push_str(r"\s+");
            }
            in_space = true;
        } else {
            in_space = false;
            out.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4])));
        }
    }
    out
}
