use crate::db::DATE_FMT;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse a user supplied date with the configured format, falling back to ISO `YYYY-MM-DD`.
pub fn parse_date(s: &str, format: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, format)
        .or_else(|_| NaiveDate::parse_from_str(s, DATE_FMT))
        .map_err(|_| {
            AppError::InvalidDate(format!(
                "'{}' needs to be in full date format: {}",
                s,
                format_hint(format)
            ))
        })
}

pub fn format_date(d: &NaiveDate, format: &str) -> String {
    d.format(format).to_string()
}

/// Human readable version of a chrono format, e.g. `%m-%d-%Y` → `mm-dd-yyyy`.
pub fn format_hint(format: &str) -> String {
    format
        .replace("%Y", "yyyy")
        .replace("%m", "mm")
        .replace("%d", "dd")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_configured_and_iso_formats() {
        let want = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(parse_date("06-01-2024", "%m-%d-%Y").unwrap(), want);
        assert_eq!(parse_date("2024-06-01", "%m-%d-%Y").unwrap(), want);
        assert_eq!(parse_date(" 01/06/2024 ", "%d/%m/%Y").unwrap(), want);
    }

    #[test]
    fn rejects_garbage_with_hint() {
        let err = parse_date("June 1st", "%m-%d-%Y").unwrap_err();
        assert!(err.to_string().contains("mm-dd-yyyy"));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_date("02-30-2024", "%m-%d-%Y").is_err());
    }
}
