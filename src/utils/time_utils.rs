use chrono::{DateTime, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";
}

pub fn now_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Display form of an epoch-ms timestamp, `None` when out of chrono's range.
pub fn epoch_ms_to_utc(epoch_ms: i64) -> Option<String> {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|dt| dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string())
}

/// Coarse "time left" label, e.g. `6d`, `3h`, `expired`.
pub fn format_remaining(ms: i64) -> String {
    if ms <= 0 {
        return "expired".to_string();
    }
    let mins = ms / TimeUtils::MS_IN_MIN;
    if mins < 60 {
        return format!("{}m", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }
    format!("{}d", hours / 24)
}
