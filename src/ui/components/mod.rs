pub mod addresses;
pub mod chat_list;
pub mod chat_screen;
pub mod checkout;
pub mod domicilios;
pub mod find_driver;
pub mod home;
pub mod order_tracking;
pub mod profile;
pub mod store_detail;
pub mod transporte;

/// Clock-time label for a millisecond timestamp.
pub(crate) fn format_time(timestamp_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::format_time;

    #[test]
    fn format_time_handles_invalid_timestamps() {
        assert_eq!(format_time(i64::MAX), "");
        assert!(!format_time(0).is_empty());
    }
}
