//! Polish public holiday calendar.
//!
//! NBP publishes no prices on weekends or public holidays.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Easter Sunday of `year` (Gregorian, anonymous algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// All public holidays of `year`, in calendar order.
pub fn holidays(year: i32) -> Vec<NaiveDate> {
    let fixed = [(1, 1), (1, 6), (5, 1), (5, 3), (8, 15), (11, 1), (11, 11), (12, 25), (12, 26)];
    let mut days: Vec<NaiveDate> = fixed
        .iter()
        .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .collect();

    if let Some(easter) = easter_sunday(year) {
        // Easter Sunday, Easter Monday, Pentecost, Corpus Christi
        days.extend(
            [0, 1, 49, 60]
                .iter()
                .filter_map(|&offset| easter.checked_add_days(Days::new(offset))),
        );
    }

    days.sort();
    days
}

pub fn is_holiday(date: NaiveDate) -> bool {
    holidays(date.year()).contains(&date)
}

/// A weekday that is not a public holiday.
pub fn is_trading_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !is_holiday(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_easter_sunday() {
        assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(date(2025, 4, 20)));
        assert_eq!(easter_sunday(2019), Some(date(2019, 4, 21)));
    }

    #[test]
    fn test_moveable_holidays_2024() {
        assert!(is_holiday(date(2024, 4, 1)));
        assert!(is_holiday(date(2024, 5, 19)));
        assert!(is_holiday(date(2024, 5, 30)));
        assert!(!is_holiday(date(2024, 5, 29)));
    }

    #[test]
    fn test_holiday_count() {
        assert_eq!(holidays(2024).len(), 13);
    }

    #[test]
    fn test_trading_days() {
        // Wednesday
        assert!(is_trading_day(date(2024, 3, 6)));
        // Saturday, Sunday
        assert!(!is_trading_day(date(2024, 3, 9)));
        assert!(!is_trading_day(date(2024, 3, 10)));
        // Independence Day, a Monday
        assert!(!is_trading_day(date(2024, 11, 11)));
    }
}
