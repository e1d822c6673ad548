//! Date, time, and coordinate pickers.

use chrono::{NaiveDate, NaiveTime};

use super::patterns::{DATE, LAT_LON, TIME_HHMM, TIME_HMS, TIME_KO};

/// Pick the first date in the text, pattern `YYYY[-/.]MM[-/.]DD` with the
/// year in 2000-2099.
pub fn pick_first_date(text: &str) -> Option<NaiveDate> {
    let caps = DATE.captures(text)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Pick the first time in the text.
///
/// Strict priority:
/// 1. `HH:MM(:SS)` with valid ranges, missing seconds defaulting to 00
/// 2. the Korean idiom `H시 M분`
/// 3. a bare 4-digit HHMM token within 20 characters after the first date
///
/// The first rule that fires wins; there is no chaining beyond these.
pub fn pick_first_time(text: &str) -> Option<NaiveTime> {
    if let Some(caps) = TIME_HMS.captures(text) {
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;
        let second: u32 = match caps.get(3) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        return NaiveTime::from_hms_opt(hour, minute, second);
    }

    if let Some(caps) = TIME_KO.captures(text) {
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;
        if hour <= 23 && minute <= 59 {
            return NaiveTime::from_hms_opt(hour, minute, 0);
        }
    }

    if let Some(date_match) = DATE.find(text) {
        let after: String = text[date_match.end()..].chars().take(20).collect();
        // Only the first 4-digit token is considered
        if let Some(caps) = TIME_HHMM.captures(&after) {
            let hhmm = &caps[1];
            let hour: u32 = hhmm[..2].parse().ok()?;
            let minute: u32 = hhmm[2..].parse().ok()?;
            if hour <= 23 && minute <= 59 {
                return NaiveTime::from_hms_opt(hour, minute, 0);
            }
        }
    }

    None
}

/// Pick a comma-separated latitude/longitude pair. Returns both
/// coordinates or neither.
pub fn pick_lat_lon(text: &str) -> (Option<f64>, Option<f64>) {
    let Some(caps) = LAT_LON.captures(text) else {
        return (None, None);
    };
    match (caps[1].parse::<f64>(), caps[2].parse::<f64>()) {
        (Ok(lat), Ok(lon)) => (Some(lat), Some(lon)),
        _ => (None, None),
    }
}
