//! Display formatting for entry size and last-updated labels.

/// Formats a byte count as megabytes with two decimals, e.g. `1.00 MB`.
pub fn format_size_mb(size_bytes: u64) -> String {
    format!("{:.2} MB", size_bytes as f64 / 1024.0 / 1024.0)
}

/// Formats a provider timestamp as a short date label, e.g. `Sat Jan 07 2023`.
///
/// Unparseable input yields `Invalid Date`, matching the browser's own
/// rendering of a bad timestamp.
pub fn date_label(updated_at: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(updated_at));
        String::from(date.to_date_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        civil_date_label(updated_at).unwrap_or_else(|| "Invalid Date".to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn civil_date_label(updated_at: &str) -> Option<String> {
    const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    let date = updated_at.get(..10)?;
    let mut parts = date.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    // Sakamoto's method, Sunday = 0.
    const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let adjusted_year = if month < 3 { year - 1 } else { year };
    let weekday = (adjusted_year + adjusted_year / 4 - adjusted_year / 100 + adjusted_year / 400
        + OFFSETS[(month - 1) as usize]
        + day as i32)
        .rem_euclid(7) as usize;

    Some(format!(
        "{} {} {:02} {}",
        WEEKDAYS[weekday],
        MONTHS[(month - 1) as usize],
        day,
        year
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_megabyte_formats_with_two_decimals() {
        assert_eq!(format_size_mb(1_048_576), "1.00 MB");
        assert_eq!(format_size_mb(0), "0.00 MB");
        assert_eq!(format_size_mb(1_572_864), "1.50 MB");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn provider_timestamps_render_as_short_dates() {
        assert_eq!(date_label("2023-01-07T10:00:00.000Z"), "Sat Jan 07 2023");
        assert_eq!(date_label("2024-02-29T00:00:00.000Z"), "Thu Feb 29 2024");
        assert_eq!(date_label("not a timestamp"), "Invalid Date");
        assert_eq!(date_label(""), "Invalid Date");
    }
}
