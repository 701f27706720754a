use chrono::{Local, LocalResult, TimeZone};

/// 将毫秒时间戳格式化为本地时间 HH:MM:SS.mmm
pub fn format_timestamp(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms) {
        LocalResult::Single(time) => time.format("%H:%M:%S%.3f").to_string(),
        _ => format!("Invalid timestamp: {}", timestamp_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millisecond_component_is_preserved() {
        let formatted = format_timestamp(1_700_000_000_123);
        assert!(formatted.ends_with(".123"), "got {}", formatted);
    }

    #[test]
    fn out_of_range_timestamp_is_reported() {
        let formatted = format_timestamp(i64::MAX);
        assert!(formatted.starts_with("Invalid timestamp"));
    }
}
