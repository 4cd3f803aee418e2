//! Expiration spec parsing and human-readable countdown rendering.
//!
//! An expiration spec is a string of the form `"<count>_<unit>"`, e.g.
//! `"5_days"`, with unit one of `minutes`, `hours`, `days`, `weeks`,
//! `months`, `years`. The sentinel `"never"` means no expiration.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};

use crate::ShareError;

/// Parses an expiration spec into an absolute expiry instant.
///
/// Returns `None` for the `"never"` sentinel. Minutes, hours, days and weeks
/// are fixed durations (UTC has no DST, so day arithmetic matches calendar
/// day addition); months and years use calendar arithmetic and respect
/// month-length and leap-year boundaries.
///
/// # Errors
///
/// Returns `ShareError::InvalidExpirySpec` if the spec does not split into
/// exactly two parts, the count is not a non-negative integer, or the unit
/// is unrecognized.
pub fn compute_expiry(spec: &str) -> Result<Option<DateTime<Utc>>, ShareError> {
    if spec == "never" {
        return Ok(None);
    }

    let parts: Vec<&str> = spec.split('_').collect();
    let (count, unit) = match parts.as_slice() {
        [count, unit] => (*count, *unit),
        _ => return Err(ShareError::InvalidExpirySpec(spec.to_owned())),
    };

    let count: u32 = count
        .parse()
        .map_err(|_| ShareError::InvalidExpirySpec(spec.to_owned()))?;

    let now = Utc::now();
    let expires_at = match unit {
        "minutes" => Some(now + Duration::minutes(i64::from(count))),
        "hours" => Some(now + Duration::hours(i64::from(count))),
        "days" => Some(now + Duration::days(i64::from(count))),
        "weeks" => Some(now + Duration::weeks(i64::from(count))),
        "months" => now.checked_add_months(Months::new(count)),
        "years" => count
            .checked_mul(12)
            .and_then(|months| now.checked_add_months(Months::new(months))),
        _ => return Err(ShareError::InvalidExpirySpec(spec.to_owned())),
    };

    // None here means the count pushed the date out of chrono's range.
    expires_at
        .map(Some)
        .ok_or_else(|| ShareError::InvalidExpirySpec(spec.to_owned()))
}

/// Renders a human-readable countdown for an expiry instant.
///
/// - `"Already expired"` once the instant has passed.
/// - `"Expires today"` when the calendar year/month/day difference is
///   all-zero.
/// - Otherwise `"Expires in ..."` with nonzero year/month/day parts, the
///   last two joined by `"and"` (e.g. `"Expires in 1 year 2 months and
///   3 days"`).
pub fn describe_remaining(expires_at: DateTime<Utc>) -> String {
    describe_remaining_at(expires_at, Utc::now())
}

fn describe_remaining_at(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if now >= expires_at {
        return "Already expired".to_owned();
    }

    let mut years = i64::from(expires_at.year() - now.year());
    let mut months = i64::from(expires_at.month()) - i64::from(now.month());
    let mut days = i64::from(expires_at.day()) - i64::from(now.day());

    if years == 0 && months == 0 && days == 0 {
        return "Expires today".to_owned();
    }

    // Borrow down from higher units, using the length of the month before
    // the target when borrowing days.
    if days < 0 {
        days += days_in_previous_month(expires_at.date_naive());
        months -= 1;
    }
    if months < 0 {
        months += 12;
        years -= 1;
    }

    let mut parts = Vec::new();
    for (count, unit) in [(years, "year"), (months, "month"), (days, "day")] {
        match count {
            1 => parts.push(format!("1 {unit}")),
            n if n > 1 => parts.push(format!("{n} {unit}s")),
            _ => {}
        }
    }

    match parts.as_slice() {
        [] => "Expires today".to_owned(),
        [only] => format!("Expires in {only}"),
        [head @ .., last] => format!("Expires in {} and {last}", head.join(" ")),
    }
}

fn days_in_previous_month(date: NaiveDate) -> i64 {
    // Only None at the edges of chrono's supported calendar range.
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| i64::from(last.day()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, TimeZone};

    fn base_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn in_calendar(years: u32, months: u32, days: u64) -> DateTime<Utc> {
        base_now() + Months::new(years * 12 + months) + Days::new(days)
    }

    #[test]
    fn test_describe_year_month_day() {
        let got = describe_remaining_at(in_calendar(1, 2, 3), base_now());
        assert_eq!(got, "Expires in 1 year 2 months and 3 days");
    }

    #[test]
    fn test_describe_plural_year_singular_month() {
        let got = describe_remaining_at(in_calendar(2, 1, 3), base_now());
        assert_eq!(got, "Expires in 2 years 1 month and 3 days");
    }

    #[test]
    fn test_describe_singular_day() {
        let got = describe_remaining_at(in_calendar(3, 2, 1), base_now());
        assert_eq!(got, "Expires in 3 years 2 months and 1 day");
    }

    #[test]
    fn test_describe_month_and_days() {
        let got = describe_remaining_at(in_calendar(0, 1, 2), base_now());
        assert_eq!(got, "Expires in 1 month and 2 days");
    }

    #[test]
    fn test_describe_year_and_days() {
        let got = describe_remaining_at(in_calendar(1, 0, 2), base_now());
        assert_eq!(got, "Expires in 1 year and 2 days");
    }

    #[test]
    fn test_describe_year_and_months() {
        let got = describe_remaining_at(in_calendar(1, 2, 0), base_now());
        assert_eq!(got, "Expires in 1 year and 2 months");
    }

    #[test]
    fn test_describe_single_part_omits_and() {
        let got = describe_remaining_at(in_calendar(1, 0, 0), base_now());
        assert_eq!(got, "Expires in 1 year");

        let got = describe_remaining_at(in_calendar(0, 1, 0), base_now());
        assert_eq!(got, "Expires in 1 month");

        let got = describe_remaining_at(in_calendar(0, 0, 1), base_now());
        assert_eq!(got, "Expires in 1 day");
    }

    #[test]
    fn test_describe_expires_today() {
        let got = describe_remaining_at(base_now() + Duration::seconds(1), base_now());
        assert_eq!(got, "Expires today");
    }

    #[test]
    fn test_describe_already_expired() {
        let got = describe_remaining_at(base_now() - Duration::seconds(1), base_now());
        assert_eq!(got, "Already expired");

        // The exact instant counts as expired.
        let got = describe_remaining_at(base_now(), base_now());
        assert_eq!(got, "Already expired");
    }

    #[test]
    fn test_describe_borrows_days_across_month_boundary() {
        // Mar 28 -> Apr 2: borrowing pulls the length of March (31 days).
        let now = Utc.with_ymd_and_hms(2025, 3, 28, 12, 0, 0).unwrap();
        let expires = Utc.with_ymd_and_hms(2025, 4, 2, 12, 0, 0).unwrap();
        assert_eq!(describe_remaining_at(expires, now), "Expires in 5 days");
    }

    #[test]
    fn test_compute_never_sentinel() {
        assert_eq!(compute_expiry("never").unwrap(), None);
    }

    #[test]
    fn test_compute_fixed_duration_units() {
        let before = Utc::now();
        let expires = compute_expiry("90_minutes").unwrap().unwrap();
        assert!(expires > before + Duration::minutes(89));
        assert!(expires < before + Duration::minutes(91));

        let expires = compute_expiry("2_weeks").unwrap().unwrap();
        assert!(expires > before + Duration::days(13));
        assert!(expires < before + Duration::days(15));
    }

    #[test]
    fn test_compute_calendar_units() {
        let before = Utc::now();
        let expires = compute_expiry("3_months").unwrap().unwrap();
        // Calendar months are 28 to 31 days long.
        assert!(expires >= before + Duration::days(28 * 3));
        assert!(expires <= before + Duration::days(31 * 3) + Duration::seconds(1));

        let expires = compute_expiry("1_years").unwrap().unwrap();
        assert!(expires >= before + Duration::days(365));
        assert!(expires <= before + Duration::days(366) + Duration::seconds(1));
    }

    #[test]
    fn test_compute_rejects_malformed_specs() {
        for spec in ["", "5days", "5_days_extra", "five_days", "-1_days", "5_fortnights"] {
            let err = compute_expiry(spec).unwrap_err();
            assert_eq!(err, ShareError::InvalidExpirySpec(spec.to_owned()), "{spec}");
        }
    }

    #[test]
    fn test_compute_then_describe_is_never_expired() {
        for spec in [
            "5_minutes",
            "2_hours",
            "1_days",
            "3_weeks",
            "6_months",
            "1_years",
        ] {
            let expires = compute_expiry(spec).unwrap().unwrap();
            assert_ne!(describe_remaining(expires), "Already expired", "{spec}");
        }
    }
}
