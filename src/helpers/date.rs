//! Date helper functions

use chrono::NaiveDateTime;

/// Format a date using a Moment.js-style format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMMM D, YYYY") // -> "April 9, 2024"
/// format_date(&date, "YYYY-MM-DD")   // -> "2024-04-09"
/// ```
pub fn format_date(date: &NaiveDateTime, format: &str) -> String {
    date.format(&moment_to_chrono_format(format)).to_string()
}

/// Format a date in ISO 8601 / XML format, treating it as UTC
pub fn date_xml(date: &NaiveDateTime) -> String {
    date.and_utc().to_rfc3339()
}

/// Format just the calendar date, as used in sitemaps
pub fn date_iso(date: &NaiveDateTime) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Convert a Moment.js format to a chrono format.
///
/// Runs of the same token letter are translated as a unit, so `MMMM` and
/// `M` never interfere. Text inside `[...]` is copied literally.
fn moment_to_chrono_format(format: &str) -> String {
    let chars: Vec<char> = format.chars().collect();
    let mut out = String::with_capacity(format.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '[' {
            let end = chars[i + 1..]
                .iter()
                .position(|&ch| ch == ']')
                .map(|p| i + 1 + p);
            if let Some(end) = end {
                for &lit in &chars[i + 1..end] {
                    push_literal(&mut out, lit);
                }
                i = end + 1;
                continue;
            }
        }

        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == c {
            run += 1;
        }

        let spec = match (c, run) {
            ('Y', 2) => Some("%y"),
            ('Y', _) => Some("%Y"),
            ('M', 1) => Some("%-m"),
            ('M', 2) => Some("%m"),
            ('M', 3) => Some("%b"),
            ('M', _) => Some("%B"),
            ('D', 1) => Some("%-d"),
            ('D', 2) => Some("%d"),
            ('D', _) => Some("%j"),
            ('d', 1) => Some("%w"),
            ('d', 2) | ('d', 3) => Some("%a"),
            ('d', _) => Some("%A"),
            ('H', 1) => Some("%-H"),
            ('H', _) => Some("%H"),
            ('h', 1) => Some("%-I"),
            ('h', _) => Some("%I"),
            ('m', 1) => Some("%-M"),
            ('m', _) => Some("%M"),
            ('s', 1) => Some("%-S"),
            ('s', _) => Some("%S"),
            ('A', _) => Some("%p"),
            ('a', _) => Some("%P"),
            _ => None,
        };

        match spec {
            Some(spec) => out.push_str(spec),
            None => {
                for _ in 0..run {
                    push_literal(&mut out, c);
                }
            }
        }
        i += run;
    }

    out
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}
