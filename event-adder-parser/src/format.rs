use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveTime};

use crate::Error;

/// Converts a `dd.mm.yy` date into `YYYYMMDD`, reading the year as `20yy`.
///
/// The first component lands in the month slot and the second in the day
/// slot, the order quick-add links have always been produced in.
///
/// ```
/// assert_eq!(event_adder_parser::format_event_date("05.03.24").unwrap(), "20240503");
/// ```
pub fn format_event_date(date: &str) -> Result<String, Error> {
    let invalid = || Error::InvalidDate(date.to_owned());

    let mut parts = date.split('.');
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let month = parse_digits(month, 1..=2).ok_or_else(invalid)?;
    let day = parse_digits(day, 1..=2).ok_or_else(invalid)?;
    let year = parse_digits(year, 2..=2).ok_or_else(invalid)?;

    let date = NaiveDate::from_ymd_opt(2000 + year as i32, month, day).ok_or_else(invalid)?;

    Ok(date.format("%Y%m%d").to_string())
}

/// Converts an `h:mm` or `hh:mm` time into `HHMMSS` with zero seconds.
///
/// ```
/// assert_eq!(event_adder_parser::format_event_time("9:30").unwrap(), "093000");
/// ```
pub fn format_event_time(time: &str) -> Result<String, Error> {
    let invalid = || Error::InvalidTime(time.to_owned());

    let (hour, minute) = time.split_once(':').ok_or_else(invalid)?;
    let hour = parse_digits(hour, 1..=2).ok_or_else(invalid)?;
    let minute = parse_digits(minute, 2..=2).ok_or_else(invalid)?;

    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)?;

    Ok(time.format("%H%M%S").to_string())
}

fn parse_digits(s: &str, len: RangeInclusive<usize>) -> Option<u32> {
    if !len.contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_event_date() {
        assert_eq!(format_event_date("05.03.24").unwrap(), "20240503");
        assert_eq!(format_event_date("01.01.24").unwrap(), "20240101");
        assert_eq!(format_event_date("02.01.24").unwrap(), "20240201");
        assert_eq!(format_event_date("12.31.99").unwrap(), "20991231");
        assert_eq!(format_event_date("02.29.24").unwrap(), "20240229");
    }

    #[test]
    fn test_format_event_date_pads_single_digits() {
        assert_eq!(format_event_date("5.3.24").unwrap(), "20240503");
    }

    #[test]
    fn test_format_event_date_rejects_malformed() {
        for date in [
            "", "05.03", "05.03.2024", "05-03-24", "05.03.24.", "aa.03.24", "+5.03.24", "13.05.24",
            "02.29.23", "05.32.24", "00.01.24", "01.00.24", "09.31.24", " 05.03.24",
        ] {
            assert_eq!(
                format_event_date(date),
                Err(Error::InvalidDate(date.to_owned())),
                "{date:?}"
            );
        }
    }

    #[test]
    fn test_format_event_time() {
        assert_eq!(format_event_time("9:30").unwrap(), "093000");
        assert_eq!(format_event_time("14:05").unwrap(), "140500");
        assert_eq!(format_event_time("0:00").unwrap(), "000000");
        assert_eq!(format_event_time("23:59").unwrap(), "235900");
    }

    #[test]
    fn test_format_event_time_rejects_malformed() {
        for time in [
            "", "930", "9:3", "9:300", "123:00", "24:00", "12:60", "99:99", "9:30:00", "a:30",
        ] {
            assert_eq!(
                format_event_time(time),
                Err(Error::InvalidTime(time.to_owned())),
                "{time:?}"
            );
        }
    }
}
