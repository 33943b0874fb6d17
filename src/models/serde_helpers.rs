//! Serde helpers for wall-clock times.
//!
//! Two formats reach us: form inputs send "HH:MM", hosted-store time
//! columns send "HH:MM:SS". Both decode to a `NaiveTime`; we always
//! write back "HH:MM".

use chrono::NaiveTime;

pub fn parse_wall_clock(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

pub fn format_wall_clock(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub mod wall_clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_wall_clock(time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_wall_clock(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid wall-clock time: {}", s)))
    }
}

/// Same as [`wall_clock`] but for optional fields; null and absent both map
/// to `None`.
pub mod wall_clock_opt {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&super::format_wall_clock(t)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => super::parse_wall_clock(&s)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid wall-clock time: {}", s))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_both_formats() {
        let short = parse_wall_clock("09:30").unwrap();
        let long = parse_wall_clock("09:30:00").unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_wall_clock("half past nine").is_none());
        assert!(parse_wall_clock("").is_none());
    }

    #[test]
    fn test_formats_without_seconds() {
        let t = parse_wall_clock("14:00:00").unwrap();
        assert_eq!(format_wall_clock(&t), "14:00");
    }
}
