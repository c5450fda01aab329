use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};

const HOUR: i32 = 3600;

// Colon-less offset variant seen in some payloads, e.g. 2025-12-15T07:15:00+0700.
const OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn fixed_east(seconds: i32) -> FixedOffset {
    FixedOffset::east_opt(seconds).expect("offset within +/-24h")
}

/// Fixed offset for an Indonesian zone label. Anything unrecognised maps to
/// WIB, matching the airport table's default.
pub fn offset_for_label(label: &str) -> FixedOffset {
    match label {
        "WITA" => fixed_east(8 * HOUR),
        "WIT" => fixed_east(9 * HOUR),
        _ => fixed_east(7 * HOUR),
    }
}

/// WIB/WITA/WIT label when the offset is +7/+8/+9 hours.
pub fn zone_label(offset: FixedOffset) -> Option<&'static str> {
    match offset.local_minus_utc() {
        x if x == 7 * HOUR => Some("WIB"),
        x if x == 8 * HOUR => Some("WITA"),
        x if x == 9 * HOUR => Some("WIT"),
        _ => None,
    }
}

/// Parse an ISO-8601 timestamp carrying an offset, accepting both `±HH:MM`
/// and `±HHMM` forms.
pub fn parse_offset_datetime(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, OFFSET_FORMAT))
        .ok()
}

/// Interpret a naive local timestamp (`YYYY-MM-DDTHH:MM:SS`) in the given
/// fixed-offset zone.
pub fn parse_naive_in(value: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let naive = NaiveDateTime::parse_from_str(value, NAIVE_FORMAT).ok()?;
    offset.from_local_datetime(&naive).single()
}

/// Zone of an ISO-8601 timestamp. Unparseable input falls back to WIB.
pub fn zone_of(value: &str) -> FixedOffset {
    parse_offset_datetime(value)
        .map(|dt| *dt.offset())
        .unwrap_or_else(|| offset_for_label("WIB"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_of_reads_colon_offsets() {
        let offset = zone_of("2025-12-15T06:00:00+07:00");
        assert_eq!(offset.local_minus_utc(), 7 * HOUR);
        assert_eq!(zone_label(offset), Some("WIB"));
    }

    #[test]
    fn zone_of_reads_compact_offsets() {
        let offset = zone_of("2025-12-15T09:30:00+0800");
        assert_eq!(offset.local_minus_utc(), 8 * HOUR);
        assert_eq!(zone_label(offset), Some("WITA"));
    }

    #[test]
    fn zone_of_keeps_foreign_offsets_unlabelled() {
        let offset = zone_of("2025-12-15T09:30:00+05:30");
        assert_eq!(offset.local_minus_utc(), 5 * HOUR + 1800);
        assert_eq!(zone_label(offset), None);
    }

    #[test]
    fn zone_of_falls_back_to_wib() {
        let offset = zone_of("not a timestamp");
        assert_eq!(offset.local_minus_utc(), 7 * HOUR);
    }

    #[test]
    fn parse_offset_datetime_preserves_instant() {
        let wib = parse_offset_datetime("2025-12-15T06:00:00+07:00").expect("parse");
        let wita = parse_offset_datetime("2025-12-15T09:30:00+0800").expect("parse");
        // 06:00 WIB and 09:30 WITA are 150 real minutes apart.
        assert_eq!((wita - wib).num_minutes(), 150);
    }

    #[test]
    fn parse_naive_in_attaches_zone() {
        let offset = offset_for_label("WITA");
        let dt = parse_naive_in("2025-12-15T09:30:00", offset).expect("parse");
        assert_eq!(dt.to_rfc3339(), "2025-12-15T09:30:00+08:00");
    }

    #[test]
    fn offset_for_label_defaults_to_wib() {
        assert_eq!(offset_for_label("UTC").local_minus_utc(), 7 * HOUR);
        assert_eq!(offset_for_label("WIT").local_minus_utc(), 9 * HOUR);
    }
}
