use chrono::{ DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc };
use serde::{ Deserialize, Serialize };
use strum::{ Display, EnumIter, EnumString };

use crate::errors::{ PortalError, PortalResult };
use crate::utils::constants::LAST_MODIFIED_PREFIX;

/// Naive layouts tried after the offset-aware formats. Interpreted in local time.
const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Shorter digit strings are years (exactly four digits) or rejected
const MIN_EPOCH_MILLIS_DIGITS: usize = 5;

/// Language of the humanized duration phrases
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    De,
    Es,
}

/// Coarse bucket an elapsed interval falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeUnit {
    FewSeconds,
    Seconds(i64),
    Minute,
    Minutes(i64),
    Hour,
    Hours(i64),
    Day,
    Days(i64),
    Month,
    Months(i64),
    Year,
    Years(i64),
}

impl RelativeUnit {
    /// Buckets a duration. Sign is ignored; every quantity is rounded to the nearest unit.
    pub fn classify(duration: Duration) -> Self {
        let ms = (duration.num_milliseconds() as f64).abs();
        let seconds = (ms / 1_000.0).round() as i64;
        let minutes = (ms / 60_000.0).round() as i64;
        let hours = (ms / 3_600_000.0).round() as i64;
        let exact_days = ms / 86_400_000.0;
        let days = exact_days.round() as i64;
        let exact_months = (exact_days * 4_800.0) / 146_097.0;
        let months = exact_months.round() as i64;
        let years = (exact_months / 12.0).round() as i64;

        if seconds <= 44 {
            RelativeUnit::FewSeconds
        } else if seconds < 45 {
            RelativeUnit::Seconds(seconds)
        } else if minutes <= 1 {
            RelativeUnit::Minute
        } else if minutes < 45 {
            RelativeUnit::Minutes(minutes)
        } else if hours <= 1 {
            RelativeUnit::Hour
        } else if hours < 22 {
            RelativeUnit::Hours(hours)
        } else if days <= 1 {
            RelativeUnit::Day
        } else if days < 26 {
            RelativeUnit::Days(days)
        } else if months <= 1 {
            RelativeUnit::Month
        } else if months < 11 {
            RelativeUnit::Months(months)
        } else if years <= 1 {
            RelativeUnit::Year
        } else {
            RelativeUnit::Years(years)
        }
    }
}

impl Locale {
    pub fn phrase(&self, unit: RelativeUnit) -> String {
        use RelativeUnit::*;
        match self {
            Locale::En =>
                match unit {
                    FewSeconds => "a few seconds".to_string(),
                    Seconds(n) => format!("{} seconds", n),
                    Minute => "a minute".to_string(),
                    Minutes(n) => format!("{} minutes", n),
                    Hour => "an hour".to_string(),
                    Hours(n) => format!("{} hours", n),
                    Day => "a day".to_string(),
                    Days(n) => format!("{} days", n),
                    Month => "a month".to_string(),
                    Months(n) => format!("{} months", n),
                    Year => "a year".to_string(),
                    Years(n) => format!("{} years", n),
                }
            Locale::Fr =>
                match unit {
                    FewSeconds => "quelques secondes".to_string(),
                    Seconds(n) => format!("{} secondes", n),
                    Minute => "une minute".to_string(),
                    Minutes(n) => format!("{} minutes", n),
                    Hour => "une heure".to_string(),
                    Hours(n) => format!("{} heures", n),
                    Day => "un jour".to_string(),
                    Days(n) => format!("{} jours", n),
                    Month => "un mois".to_string(),
                    Months(n) => format!("{} mois", n),
                    Year => "un an".to_string(),
                    Years(n) => format!("{} ans", n),
                }
            Locale::De =>
                match unit {
                    FewSeconds => "ein paar Sekunden".to_string(),
                    Seconds(n) => format!("{} Sekunden", n),
                    Minute => "eine Minute".to_string(),
                    Minutes(n) => format!("{} Minuten", n),
                    Hour => "eine Stunde".to_string(),
                    Hours(n) => format!("{} Stunden", n),
                    Day => "ein Tag".to_string(),
                    Days(n) => format!("{} Tage", n),
                    Month => "ein Monat".to_string(),
                    Months(n) => format!("{} Monate", n),
                    Year => "ein Jahr".to_string(),
                    Years(n) => format!("{} Jahre", n),
                }
            Locale::Es =>
                match unit {
                    FewSeconds => "unos segundos".to_string(),
                    Seconds(n) => format!("{} segundos", n),
                    Minute => "un minuto".to_string(),
                    Minutes(n) => format!("{} minutos", n),
                    Hour => "una hora".to_string(),
                    Hours(n) => format!("{} horas", n),
                    Day => "un día".to_string(),
                    Days(n) => format!("{} días", n),
                    Month => "un mes".to_string(),
                    Months(n) => format!("{} meses", n),
                    Year => "un año".to_string(),
                    Years(n) => format!("{} años", n),
                }
        }
    }
}

/// Parses a date-like string into an instant.
///
/// Accepts, in order:
/// - RFC 3339 and RFC 2822
/// - naive `YYYY-MM-DDTHH:MM:SS[.fff]`, `YYYY-MM-DD HH:MM:SS[.fff]` and
///   `YYYY-MM-DDTHH:MM` date-times (local time)
/// - `YYYY-MM-DD`, `YYYY-MM` and `YYYY` dates (local midnight of the first day)
/// - integers of at least five digits as epoch milliseconds
pub fn parse_date(input: &str) -> PortalResult<DateTime<Utc>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PortalError::InvalidDate(input.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = NAIVE_DATETIME_FORMATS.iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| parse_calendar_date(trimmed).and_then(|date| date.and_hms_opt(0, 0, 0)));
    if let Some(naive) = naive {
        // Nonexistent local times (DST gaps) have no earliest mapping
        return Local.from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| PortalError::InvalidDate(input.to_string()));
    }

    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.len() < MIN_EPOCH_MILLIS_DIGITS {
        return Err(PortalError::InvalidDate(input.to_string()));
    }
    trimmed
        .parse::<i64>()
        .ok()
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
        .ok_or_else(|| PortalError::InvalidDate(input.to_string()))
}

/// `YYYY-MM-DD`, `YYYY-MM` or a bare four digit `YYYY`
fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", input), DATE_FORMAT) {
        // Only a year-month may borrow the day, never a full date with junk appended
        if input.len() == 7 {
            return Some(date);
        }
    }
    if input.len() == 4 && input.bytes().all(|b| b.is_ascii_digit()) {
        return input.parse::<i32>().ok().and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }
    None
}

/// Humanizes a duration in English, e.g. "a few seconds", "2 hours", "3 days"
pub fn humanize_duration(duration: Duration) -> String {
    humanize_duration_in(duration, Locale::En)
}

pub fn humanize_duration_in(duration: Duration, locale: Locale) -> String {
    locale.phrase(RelativeUnit::classify(duration))
}

/// "Last modified {humanized} ago" relative to the current instant
pub fn humanize_date_difference(date: &str) -> PortalResult<String> {
    humanize_date_difference_at(date, Utc::now())
}

pub fn humanize_date_difference_at(date: &str, now: DateTime<Utc>) -> PortalResult<String> {
    humanize_date_difference_localized(date, now, Locale::En)
}

pub fn humanize_date_difference_localized(
    date: &str,
    now: DateTime<Utc>,
    locale: Locale
) -> PortalResult<String> {
    let received = parse_date(date)?;
    let elapsed = now.signed_duration_since(received);
    Ok(format!("{} {} ago", LAST_MODIFIED_PREFIX, humanize_duration_in(elapsed, locale)))
}
