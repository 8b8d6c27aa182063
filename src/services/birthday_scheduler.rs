//! Greeting-date computation for upcoming birthdays.
//!
//! A birthday is "upcoming" when its next occurrence, counted from today,
//! is at most [`UPCOMING_WINDOW_DAYS`] days away (today included). The
//! greeting is sent on that day, or on the following Monday when the
//! occurrence falls on a weekend.

use crate::domain::BirthdayDate;
use chrono::{Datelike, Duration, NaiveDate};

/// Inclusive look-ahead, in days, for upcoming birthdays.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// The birthday's month and day placed in `year`.
///
/// 29 February falls on 1 March in non-leap years.
pub fn occurrence_in(birthday: &BirthdayDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Next occurrence of `birthday` on or after `today`.
pub fn next_occurrence(birthday: &BirthdayDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in(birthday, today.year())?;
    if this_year < today {
        occurrence_in(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move Saturday and Sunday forward to the following Monday.
pub fn shift_weekend(date: NaiveDate) -> NaiveDate {
    let weekday = i64::from(date.weekday().num_days_from_monday());
    if weekday >= 5 {
        date + Duration::days(7 - weekday)
    } else {
        date
    }
}

/// Greeting date for `birthday` if it is within the upcoming window.
pub fn greeting_date(birthday: &BirthdayDate, today: NaiveDate) -> Option<NaiveDate> {
    let next = next_occurrence(birthday, today)?;
    let days_until = (next - today).num_days();

    if days_until <= UPCOMING_WINDOW_DAYS {
        Some(shift_weekend(next))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%d.%m.%Y").unwrap()
    }

    fn birthday(s: &str) -> BirthdayDate {
        BirthdayDate::new(s).unwrap()
    }

    #[test]
    fn test_next_occurrence_this_year() {
        assert_eq!(
            next_occurrence(&birthday("15.06.1990"), date("01.06.2024")),
            Some(date("15.06.2024"))
        );
    }

    #[test]
    fn test_next_occurrence_rolls_to_next_year() {
        assert_eq!(
            next_occurrence(&birthday("08.03.1990"), date("10.03.2024")),
            Some(date("08.03.2025"))
        );
    }

    #[test]
    fn test_next_occurrence_today() {
        assert_eq!(
            next_occurrence(&birthday("10.03.1990"), date("10.03.2024")),
            Some(date("10.03.2024"))
        );
    }

    #[test]
    fn test_leap_day_in_common_year() {
        assert_eq!(occurrence_in(&birthday("29.02.2000"), 2023), Some(date("01.03.2023")));
        assert_eq!(occurrence_in(&birthday("29.02.2000"), 2024), Some(date("29.02.2024")));
    }

    #[test]
    fn test_shift_weekend() {
        // 01.06.2024 is a Saturday, 02.06.2024 a Sunday.
        assert_eq!(shift_weekend(date("01.06.2024")), date("03.06.2024"));
        assert_eq!(shift_weekend(date("02.06.2024")), date("03.06.2024"));
        assert_eq!(shift_weekend(date("03.06.2024")), date("03.06.2024"));
        assert_eq!(shift_weekend(date("07.06.2024")), date("07.06.2024"));
    }

    #[test]
    fn test_greeting_date_sunday_shifts_to_monday() {
        assert_eq!(
            greeting_date(&birthday("02.06.1990"), date("01.06.2024")),
            Some(date("03.06.2024"))
        );
    }

    #[test]
    fn test_greeting_date_window_bounds() {
        let today = date("03.06.2024"); // Monday
        assert_eq!(
            greeting_date(&birthday("03.06.1980"), today),
            Some(date("03.06.2024"))
        );
        assert_eq!(
            greeting_date(&birthday("10.06.1980"), today),
            Some(date("10.06.2024"))
        );
        assert_eq!(greeting_date(&birthday("11.06.1980"), today), None);
    }

    #[test]
    fn test_greeting_date_far_away() {
        assert_eq!(greeting_date(&birthday("15.06.1990"), date("01.01.2024")), None);
    }

    #[test]
    fn test_greeting_date_across_new_year() {
        // 03.01.2026 is a Saturday.
        assert_eq!(
            greeting_date(&birthday("03.01.1995"), date("29.12.2025")),
            Some(date("05.01.2026"))
        );
    }

    #[test]
    fn test_greeting_date_passed_yesterday() {
        assert_eq!(greeting_date(&birthday("09.03.1990"), date("10.03.2024")), None);
    }
}
