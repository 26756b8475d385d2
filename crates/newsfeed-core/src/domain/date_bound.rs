use std::fmt::{Display, Formatter};

use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

const CALENDAR_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

const DATE_FORMATS: [&[BorrowedFormatItem<'_>]; 2] = [
    CALENDAR_DATE,
    format_description!("[year]/[month]/[day]"),
];

const LOCAL_DATE_TIME_FORMATS: [&[BorrowedFormatItem<'_>]; 3] = [
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
];

/// Lower or upper publication bound for `from`/`to`.
///
/// Text is kept verbatim until validation so that a malformed value can be
/// reported as-is. Every variant normalizes to a UTC calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateBound {
    Date(Date),
    DateTime(OffsetDateTime),
    Text(String),
}

impl DateBound {
    /// UTC calendar date this bound denotes, or `None` when it is not a real
    /// ISO-8601 date with a four-digit year.
    pub fn calendar_date(&self) -> Option<Date> {
        let date = match self {
            Self::Date(date) => *date,
            Self::DateTime(value) => value.checked_to_offset(UtcOffset::UTC)?.date(),
            Self::Text(text) => parse_text(text)?,
        };

        (0..=9999).contains(&date.year()).then_some(date)
    }

    /// `YYYY-MM-DD` form sent to the upstream.
    pub fn normalize(&self) -> Option<String> {
        self.calendar_date()?.format(CALENDAR_DATE).ok()
    }
}

fn parse_text(text: &str) -> Option<Date> {
    if let Ok(value) = OffsetDateTime::parse(text, &Rfc3339) {
        return value.checked_to_offset(UtcOffset::UTC).map(|utc| utc.date());
    }

    // Date-times without an offset are read as UTC.
    LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(text, *format).ok())
        .map(PrimitiveDateTime::date)
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| Date::parse(text, *format).ok())
        })
}

impl Display for DateBound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => match date.format(CALENDAR_DATE) {
                Ok(formatted) => f.write_str(&formatted),
                Err(_) => write!(f, "{date}"),
            },
            Self::DateTime(value) => match value.format(&Rfc3339) {
                Ok(formatted) => f.write_str(&formatted),
                Err(_) => write!(f, "{value}"),
            },
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<Date> for DateBound {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<OffsetDateTime> for DateBound {
    fn from(value: OffsetDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<&str> for DateBound {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DateBound {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    #[test]
    fn calendar_date_text_passes_through() {
        assert_eq!(
            DateBound::from("2021-07-21").normalize().as_deref(),
            Some("2021-07-21")
        );
    }

    #[test]
    fn slash_separated_year_first_text_is_accepted() {
        assert_eq!(
            DateBound::from("2021/07/21").normalize().as_deref(),
            Some("2021-07-21")
        );
    }

    #[test]
    fn time_of_day_is_discarded() {
        assert_eq!(
            DateBound::from("2021-07-19T03:41:00").normalize().as_deref(),
            Some("2021-07-19")
        );
        assert_eq!(
            DateBound::from("2021-07-19T03:41").normalize().as_deref(),
            Some("2021-07-19")
        );
        assert_eq!(
            DateBound::from("2021-07-19T03:41:00.250").normalize().as_deref(),
            Some("2021-07-19")
        );
    }

    #[test]
    fn offset_date_times_are_converted_to_utc_first() {
        assert_eq!(
            DateBound::from("2021-07-20T23:30:00-02:00")
                .normalize()
                .as_deref(),
            Some("2021-07-21")
        );
        assert_eq!(
            DateBound::from(datetime!(2021-07-21 00:30 +01:00))
                .normalize()
                .as_deref(),
            Some("2021-07-20")
        );
    }

    #[test]
    fn structured_date_is_valid() {
        assert_eq!(
            DateBound::from(date!(2021 - 07 - 21)).normalize().as_deref(),
            Some("2021-07-21")
        );
    }

    #[test]
    fn day_first_text_is_rejected() {
        assert_eq!(DateBound::from("21/07/2021").normalize(), None);
    }

    #[test]
    fn impossible_calendar_dates_are_rejected() {
        assert_eq!(DateBound::from("2021-02-30").normalize(), None);
        assert_eq!(DateBound::from("2021-13-01").normalize(), None);
        assert_eq!(DateBound::from("").normalize(), None);
        assert_eq!(DateBound::from("yesterday").normalize(), None);
    }

    #[test]
    fn negative_years_are_rejected() {
        let date = Date::from_calendar_date(-1, time::Month::January, 1).expect("valid date");
        assert_eq!(DateBound::from(date).normalize(), None);
    }

    #[test]
    fn offsets_shifting_past_year_9999_are_rejected() {
        assert_eq!(DateBound::from("9999-12-31T23:00:00-02:00").normalize(), None);
        assert_eq!(
            DateBound::from(datetime!(9999-12-31 23:00 -02:00)).normalize(),
            None
        );
    }

    #[test]
    fn display_keeps_original_text() {
        assert_eq!(DateBound::from("21/07/2021").to_string(), "21/07/2021");
        assert_eq!(DateBound::from(date!(2021 - 07 - 21)).to_string(), "2021-07-21");
    }
}
