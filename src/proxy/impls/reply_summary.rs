use std::fmt;
use std::fmt::Formatter;
use crate::bencode::enums::decoded_value::DecodedValue;
use crate::proxy::structs::reply_summary::ReplySummary;

impl ReplySummary {
    /// Reads the swarm counters out of a decoded reply. Returns `None` unless
    /// `value` is a dictionary.
    pub fn from_value(value: &DecodedValue) -> Option<ReplySummary>
    {
        value.as_map()?;
        Some(ReplySummary {
            complete: count(value, b"complete"),
            incomplete: count(value, b"incomplete"),
            interval: count(value, b"interval"),
            failure_reason: value.get(b"failure reason")
                .and_then(DecodedValue::as_bytes)
                .map(|reason| String::from_utf8_lossy(reason).into_owned()),
        })
    }

    /// Seeder count to record for the swarm. A missing or unreadable
    /// `complete` counts as zero.
    pub fn seeders(&self) -> i64
    {
        self.complete.unwrap_or(0)
    }
}

fn count(value: &DecodedValue, key: &[u8]) -> Option<i64>
{
    value.get(key).and_then(DecodedValue::as_count)
}

impl fmt::Display for ReplySummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let show = |value: Option<i64>| value.map(|value| value.to_string()).unwrap_or_else(|| String::from("-"));
        write!(f, "complete={} incomplete={} interval={}", show(self.complete), show(self.incomplete), show(self.interval))
    }
}
