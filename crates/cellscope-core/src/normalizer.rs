//! Normalizer — turns raw CSV cell text into typed device attributes.
//!
//! Every function here is total. A value that cannot be parsed is not an
//! error; it normalises to `None` and the record carries on without it. The
//! device dataset is hand-collected, so `"-"`, empty cells, and unit suffixes
//! glued onto numbers are all routine.

/// Launch statuses that carry no release date.
const DISCONTINUED: &str = "Discontinued";
const CANCELLED: &str = "Cancelled";

fn is_terminal_status(s: &str) -> bool {
    s == DISCONTINUED || s == CANCELLED
}

/// Treat a missing cell and an empty cell the same way.
fn present(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// `None` for a missing, empty, or `"-"` cell; otherwise the trimmed text.
///
/// The `"-"` check happens before trimming, so `" - "` survives as `"-"`.
pub fn clean_text(s: Option<&str>) -> Option<String> {
    match present(s)? {
        "-" => None,
        s => Some(s.trim().to_string()),
    }
}

/// Parse the first four characters as an integer.
///
/// No plausibility check is made: `"1234abc"` yields `1234`.
pub fn parse_leading_year(s: Option<&str>) -> Option<i32> {
    let s = present(s)?;
    let prefix: String = s.chars().take(4).collect();
    prefix.trim().parse().ok()
}

/// Parse the number in front of the first space, e.g. `"169 g (5.96 oz)"`.
///
/// Without a space the whole value is parsed. The number is read as a
/// floating-point prefix, so `"169g"` still yields `169.0`.
pub fn parse_number_before_space(s: Option<&str>) -> Option<f64> {
    let s = match present(s)? {
        "-" => return None,
        s => s,
    };
    let head = s.split_once(' ').map_or(s, |(head, _)| head);
    parse_float_prefix(head)
}

/// Read the longest leading `[+-]digits[.digits][e[+-]digits]` run.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut at: usize| {
        while bytes.get(at).is_some_and(u8::is_ascii_digit) {
            at += 1;
        }
        at
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        digits += frac_end - (end + 1);
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Availability part of a launch status: everything before the first comma.
///
/// `"Discontinued"` and `"Cancelled"` pass through untouched. A status with
/// no comma is returned whole.
pub fn parse_availability_status(s: Option<&str>) -> Option<String> {
    let s = present(s)?;
    if is_terminal_status(s) {
        return Some(s.to_string());
    }
    Some(s.split_once(',').map_or(s, |(head, _)| head).to_string())
}

/// Release year embedded in a launch status such as
/// `"Available. Released 2019, June"`.
///
/// Takes the four characters starting at the first `"20"`; they must all be
/// digits.
pub fn parse_launch_year_from_status(s: Option<&str>) -> Option<i32> {
    let s = present(s).filter(|s| !is_terminal_status(s))?;
    let start = s.find("20")?;
    let window = s.get(start..start + 4)?;
    if !window.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    window.parse().ok()
}

/// SIM description, dropping bare `"Yes"`/`"No"` answers. Not trimmed.
pub fn parse_sim_info(s: Option<&str>) -> Option<String> {
    match s? {
        "Yes" | "No" => None,
        s => Some(s.to_string()),
    }
}

/// Operating system name without the trailing version details, e.g.
/// `"Linux, Maemo"` becomes `"Linux"`. The text before the comma is kept
/// as-is; only a comma-free value is trimmed.
pub fn parse_operating_system(s: Option<&str>) -> Option<String> {
    let s = present(s)?;
    Some(match s.split_once(',') {
        Some((head, _)) => head.to_string(),
        None => s.trim().to_string(),
    })
}

/// Number of non-empty comma-separated entries.
pub fn count_comma_separated_tokens(s: Option<&str>) -> usize {
    s.map_or(0, |s| {
        s.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .count()
    })
}
