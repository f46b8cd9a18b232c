use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC instant the way existing clients of this service expect it:
/// RFC 3339 with microseconds and a `+00:00` offset, followed by a literal `Z`.
///
/// The result ends in `+00:00Z`, which is not valid ISO-8601. Strip the last
/// character before handing it to a strict parser.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    let mut timestamp = now.to_rfc3339_opts(SecondsFormat::Micros, false);
    timestamp.push('Z');
    timestamp
}

pub fn timestamp() -> String {
    format_timestamp(Utc::now())
}
