//! Effort/debt duration parsing.
//!
//! SonarQube reports remediation effort as strings such as `"5min"` or
//! `"1h30min"`. These are read with a compound duration grammar (signed
//! decimal numbers, each followed by one of `ns`, `us`, `µs`, `ms`, `s`,
//! `m`, `h`). Strings ending in a two character unit the grammar does not
//! know, like `min`, are retried with that suffix removed.

mod error;

pub use error::DurationParseError;

const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;

/// Parses an effort string and returns its length in hours.
///
/// # Errors
///
/// Returns [`DurationParseError`] if neither the full string nor the string
/// with its last two characters removed is a valid duration.
pub fn parse_effort_hours(input: &str) -> Result<f64, DurationParseError> {
    parse_effort(input).map(|nanos| nanos as f64 / NANOS_PER_HOUR)
}

fn parse_effort(input: &str) -> Result<i64, DurationParseError> {
    if let Some(nanos) = parse_compound(input) {
        return Ok(nanos);
    }

    // Retry without a trailing unit suffix such as the "in" of "min".
    let chars = input.chars().count();
    if chars > 2 {
        let cut = input
            .char_indices()
            .nth(chars - 2)
            .map_or(input.len(), |(idx, _)| idx);
        if let Some(nanos) = parse_compound(&input[..cut]) {
            return Ok(nanos);
        }
    }

    Err(DurationParseError {
        input: input.to_string(),
    })
}

/// Parses a compound duration expression into signed nanoseconds.
///
/// Returns `None` on any syntax error, unknown unit or overflow.
fn parse_compound(input: &str) -> Option<i64> {
    let mut rest = input;
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    if rest == "0" {
        return Some(0);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let int_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let int_part = &rest[..int_len];
        rest = &rest[int_len..];

        let mut frac_part = "";
        if let Some(stripped) = rest.strip_prefix('.') {
            let frac_len = stripped
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(stripped.len());
            frac_part = &stripped[..frac_len];
            rest = &stripped[frac_len..];
        }

        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let unit = &rest[..unit_len];
        rest = &rest[unit_len..];

        let scale = unit_nanos(unit)?;
        let whole = if int_part.is_empty() {
            0
        } else {
            int_part.parse::<u64>().ok()?
        };

        let mut value = whole.checked_mul(scale)?;
        if !frac_part.is_empty() {
            // Only the leading digits that still matter at nanosecond scale.
            let mut fraction = 0.0_f64;
            let mut weight = 1.0_f64;
            for digit in frac_part.bytes().take(18) {
                weight /= 10.0;
                fraction += f64::from(digit - b'0') * weight;
            }
            value = value.checked_add((fraction * scale as f64) as u64)?;
        }
        total = total.checked_add(value)?;
    }

    let total = i64::try_from(total).ok()?;
    Some(if negative { -total } else { total })
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(3_600 * 1_000_000_000),
        _ => None,
    }
}
