//! Wall-clock access that works in the browser and natively.
//!
//! `std::time::SystemTime::now()` panics on `wasm32-unknown-unknown`, so the
//! hydrate build reads `Date.now()` instead.

/// Current Unix time in whole seconds.
pub fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0).floor() as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}
