//! Wall clock in epoch milliseconds.

/// Current time in milliseconds since the Unix epoch.
#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Current time in milliseconds since the Unix epoch.
#[cfg(not(feature = "csr"))]
pub fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
}
