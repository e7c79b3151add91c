//! Balance, money formatting and day grouping for the transaction list.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use thiserror::Error;

use crate::TransactionRecord;

/// Largest amount accepted from the add-transaction form, in cents
pub const MAX_INPUT_CENTS: i64 = 10_000_000_000;

/// Signed sum of all amounts, clamped to the `i64` range
pub fn balance_cents(records: &[TransactionRecord]) -> i64 {
    records
        .iter()
        .fold(0i64, |balance, record| balance.saturating_add(record.amount_cents))
}

/// `-$12.00`, `+$5.50`, `$0.00`
pub fn format_cents(cents: i64) -> String {
    let sign = match cents {
        c if c < 0 => "-",
        c if c > 0 => "+",
        _ => "",
    };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, group_thousands(abs / 100), abs % 100)
}

/// Same as [`format_cents`] without the leading `+`, for balances
pub fn format_balance(cents: i64) -> String {
    let formatted = format_cents(cents);
    formatted.strip_prefix('+').map(str::to_string).unwrap_or(formatted)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `27 July 2024 10:40 AM`
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%-d %B %Y %-I:%M %p").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Please enter an amount")]
    Empty,
    #[error("`{0}` is not a valid amount")]
    Invalid(String),
    #[error("Amount must be greater than zero")]
    NotPositive,
    #[error("Amount can have at most two decimal places")]
    TooPrecise,
    #[error("Amount is too large")]
    TooLarge,
}

/// Parses a form amount in currency units (`12`, `12.5`, `1,200.00`) into
/// positive cents. The sign is chosen by the income/expense toggle.
pub fn parse_amount_input(input: &str) -> Result<i64, AmountError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return Err(AmountError::Empty);
    }
    if cleaned.starts_with('-') {
        return Err(AmountError::NotPositive);
    }

    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(AmountError::Invalid(input.trim().to_string()));
    }
    if fraction.len() > 2 {
        return Err(AmountError::TooPrecise);
    }

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| AmountError::TooLarge)?
    };
    let fraction: i64 = format!("{:0<2}", fraction)
        .parse()
        .map_err(|_| AmountError::Invalid(input.trim().to_string()))?;

    let cents = whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(fraction))
        .ok_or(AmountError::TooLarge)?;
    if cents == 0 {
        return Err(AmountError::NotPositive);
    }
    if cents > MAX_INPUT_CENTS {
        return Err(AmountError::TooLarge);
    }
    Ok(cents)
}

/// Records of one calendar day (UTC), newest first
#[derive(Debug, Clone, PartialEq)]
pub struct DaySection {
    pub date: NaiveDate,
    pub title: String,
    pub records: Vec<TransactionRecord>,
}

/// Groups records by day, newest day first; titles are "Today",
/// "Yesterday" or the full date.
pub fn group_by_day(records: &[TransactionRecord], today: NaiveDate) -> Vec<DaySection> {
    let mut sorted: Vec<&TransactionRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.timestamp_utc.cmp(&a.timestamp_utc).then_with(|| a.id.cmp(&b.id)));

    let mut sections: Vec<DaySection> = Vec::new();
    for record in sorted {
        let date = record.timestamp_utc.date_naive();
        match sections.last_mut() {
            Some(section) if section.date == date => section.records.push(record.clone()),
            _ => sections.push(DaySection {
                date,
                title: day_title(date, today),
                records: vec![record.clone()],
            }),
        }
    }
    sections
}

fn day_title(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today - Duration::days(1) {
        "Yesterday".to_string()
    } else {
        date.format("%-d %B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn record(amount_cents: i64, timestamp: DateTime<Utc>) -> TransactionRecord {
        TransactionRecord {
            id: Uuid::new_v4(),
            category_id: "bills".to_string(),
            amount_cents,
            timestamp_utc: timestamp,
            description: "test".to_string(),
            label: None,
        }
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(-20000), "-$200.00");
        assert_eq!(format_cents(550), "+$5.50");
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(-7), "-$0.07");
        assert_eq!(format_cents(42_322_345), "+$423,223.45");
        assert_eq!(format_balance(42_322_345), "$423,223.45");
        assert_eq!(format_balance(-100), "-$1.00");
    }

    #[test]
    fn test_balance_is_signed_sum() {
        let now = Utc::now();
        let records = vec![record(-1200, now), record(5000, now), record(-800, now)];
        assert_eq!(balance_cents(&records), 3000);
        assert_eq!(balance_cents(&[]), 0);
    }

    #[test]
    fn test_balance_clamps_instead_of_overflowing() {
        let now = Utc.with_ymd_and_hms(2024, 7, 27, 10, 40, 0).unwrap();
        let records = vec![record(i64::MIN, now), record(i64::MIN, now)];
        assert_eq!(balance_cents(&records), i64::MIN);
        assert_eq!(balance_cents(&[record(i64::MAX, now), record(1, now)]), i64::MAX);
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 7, 27, 10, 40, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "27 July 2024 10:40 AM");
        let ts = Utc.with_ymd_and_hms(2024, 7, 27, 13, 20, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "27 July 2024 1:20 PM");
    }

    #[test]
    fn test_parse_amount_input() {
        assert_eq!(parse_amount_input("12"), Ok(1200));
        assert_eq!(parse_amount_input(" 12.5 "), Ok(1250));
        assert_eq!(parse_amount_input("$1,200.05"), Ok(120005));
        assert_eq!(parse_amount_input(".99"), Ok(99));
        assert_eq!(parse_amount_input(""), Err(AmountError::Empty));
        assert_eq!(parse_amount_input("0.00"), Err(AmountError::NotPositive));
        assert_eq!(parse_amount_input("-3"), Err(AmountError::NotPositive));
        assert_eq!(parse_amount_input("1.234"), Err(AmountError::TooPrecise));
        assert_eq!(parse_amount_input("abc"), Err(AmountError::Invalid("abc".to_string())));
        assert_eq!(parse_amount_input("."), Err(AmountError::Invalid(".".to_string())));
        assert_eq!(parse_amount_input("999999999999"), Err(AmountError::TooLarge));
    }

    #[test]
    fn test_group_by_day_titles_and_order() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 27).unwrap();
        let records = vec![
            record(-1200, Utc.with_ymd_and_hms(2024, 7, 26, 9, 0, 0).unwrap()),
            record(-20000, Utc.with_ymd_and_hms(2024, 7, 27, 10, 40, 0).unwrap()),
            record(-1200, Utc.with_ymd_and_hms(2024, 7, 27, 13, 20, 0).unwrap()),
            record(5000, Utc.with_ymd_and_hms(2024, 7, 1, 8, 0, 0).unwrap()),
        ];

        let sections = group_by_day(&records, today);

        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Today", "Yesterday", "1 July 2024"]);
        assert_eq!(sections[0].records.len(), 2);
        assert_eq!(sections[0].records[0].amount_cents, -1200);
        assert!(group_by_day(&[], today).is_empty());
    }
}
