use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Rendering pattern applied when a caller supplies none.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized timestamp `{0}`")]
pub struct TimestampError(String);

/// Parses an ISO-8601 timestamp and normalizes it to UTC.
///
/// An input carrying an offset (`Z`, `+02:00`) is shifted to UTC. An input
/// with no offset is taken as already being UTC: the clock value is kept
/// unchanged and UTC is attached. A bare date means midnight.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, TimestampError> {
    let input = input.trim();

    if let Ok(t) = DateTime::parse_from_rfc3339(input) {
        return Ok(t.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(t.and_utc());
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(t) = d.and_hms_opt(0, 0, 0) {
            return Ok(t.and_utc());
        }
    }

    Err(TimestampError(input.to_string()))
}

/// Renders a stored UTC timestamp with the given strftime pattern, falling
/// back to [`DEFAULT_FORMAT`].
pub fn format_timestamp(time: DateTime<Utc>, pattern: Option<&str>) -> String {
    render(time, pattern.unwrap_or(DEFAULT_FORMAT))
}

// strftime specifiers delegated to chrono; anything else is emitted
// literally so caller typos never abort a response.
const KNOWN_SPECIFIERS: &[char] = &[
    'Y', 'y', 'C', 'G', 'g', 'm', 'b', 'B', 'h', 'd', 'e', 'j', 'a', 'A',
    'w', 'u', 'U', 'W', 'V', 'H', 'k', 'I', 'l', 'P', 'p', 'M', 'S', 'f',
    's', 'z', 'Z', 'D', 'F', 'R', 'T', 'r', 'v', 'x', 'X', 'c', 'n', 't',
    '+',
];

fn render(time: DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            None => out.push('%'),
            Some('%') => out.push('%'),
            // Two-character forms: %.f (dotted fraction) and %:z
            // (colon-separated offset).
            Some('.') if chars.peek() == Some(&'f') => {
                chars.next();
                out.push_str(&time.format("%.f").to_string());
            }
            Some(':') if chars.peek() == Some(&'z') => {
                chars.next();
                out.push_str(&time.format("%:z").to_string());
            }
            Some(spec) if KNOWN_SPECIFIERS.contains(&spec) => {
                let mut single = String::from("%");
                single.push(spec);
                out.push_str(&time.format(&single).to_string());
            }
            Some(other) => {
                out.push('%');
                out.push(other);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn naive_input_is_taken_as_utc_without_shifting() {
        let t = parse_timestamp("2024-09-01T10:00:00").unwrap();
        assert_eq!(t, utc(2024, 9, 1, 10, 0, 0));
    }

    #[test]
    fn offset_input_is_shifted_to_utc() {
        let t = parse_timestamp("2024-09-01T12:00:00+02:00").unwrap();
        assert_eq!(t, utc(2024, 9, 1, 10, 0, 0));
    }

    #[test]
    fn zulu_suffix_and_fraction_are_accepted() {
        let t = parse_timestamp("2024-01-02T01:01:01.000Z").unwrap();
        assert_eq!(t, utc(2024, 1, 2, 1, 1, 1));
    }

    #[test]
    fn naive_fraction_and_space_separator_are_accepted() {
        let t = parse_timestamp("2024-09-01T10:00:00.250").unwrap();
        assert_eq!(t.timestamp_subsec_millis(), 250);

        let t = parse_timestamp("2024-09-01 10:00:00").unwrap();
        assert_eq!(t, utc(2024, 9, 1, 10, 0, 0));
    }

    #[test]
    fn bare_date_means_midnight() {
        let t = parse_timestamp("2024-09-01").unwrap();
        assert_eq!(t, utc(2024, 9, 1, 0, 0, 0));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_timestamp("next tuesday").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn default_format_is_seconds_precision_iso() {
        let t = utc(2024, 9, 1, 10, 0, 0);
        assert_eq!(format_timestamp(t, None), "2024-09-01T10:00:00");
    }

    #[test]
    fn custom_pattern_is_applied() {
        let t = utc(2024, 9, 1, 16, 0, 0);
        assert_eq!(format_timestamp(t, Some("%m-%d-%Y")), "09-01-2024");
    }

    #[test]
    fn week_number_tokens_render() {
        let t = utc(2024, 9, 1, 16, 0, 0);
        assert_eq!(format_timestamp(t, Some("%U")), "35");
        assert_eq!(format_timestamp(t, Some("%W")), "35");
        assert_eq!(format_timestamp(t, Some("%G-%V")), "2024-35");
    }

    #[test]
    fn twelve_hour_and_whitespace_tokens_render() {
        let t = utc(2024, 9, 1, 16, 0, 0);
        assert_eq!(format_timestamp(t, Some("%r")), "04:00:00 PM");
        assert_eq!(format_timestamp(t, Some("a%nb%tc")), "a\nb\tc");
        assert_eq!(
            format_timestamp(t, Some("%+")),
            "2024-09-01T16:00:00+00:00"
        );
    }

    #[test]
    fn two_character_tokens_render() {
        let t = parse_timestamp("2024-09-01T16:00:00.250").unwrap();
        assert_eq!(format_timestamp(t, Some("%S%.f")), "00.250");
        assert_eq!(format_timestamp(t, Some("%:z")), "+00:00");

        // unrecognized two-character leads stay literal
        assert_eq!(format_timestamp(t, Some("%.x")), "%.x");
        assert_eq!(format_timestamp(t, Some("%:y")), "%:y");
    }

    #[test]
    fn unknown_tokens_pass_through_literally() {
        let t = utc(2024, 9, 1, 16, 0, 0);
        assert_eq!(format_timestamp(t, Some("%q %Y")), "%q 2024");
    }

    #[test]
    fn percent_escapes_render_as_literals() {
        let t = utc(2024, 9, 1, 16, 0, 0);
        assert_eq!(format_timestamp(t, Some("100%%")), "100%");
        assert_eq!(format_timestamp(t, Some("%Y%")), "2024%");
    }

    #[test]
    fn plain_text_is_untouched() {
        let t = utc(2024, 9, 1, 16, 0, 0);
        assert_eq!(format_timestamp(t, Some("at %H o'clock")), "at 16 o'clock");
    }
}
