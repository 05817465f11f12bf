//! Money and time rendering for the shell.

use chrono::{DateTime, Local, Utc};

const GROUPING_SEPARATOR: char = ',';

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        _ => 2,
    }
}

/// Formats `value` with `precision` decimals and thousands grouping.
pub fn format_number(value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    match body.find('.') {
        Some(pos) => format!("{}{}", insert_grouping(&body[..pos]), &body[pos..]),
        None => insert_grouping(&body),
    }
}

fn insert_grouping(int_part: &str) -> String {
    match int_part.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits)),
        None => group_digits(int_part),
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().enumerate() {
        if count != 0 && (digits.len() - count) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders an amount like `¥1,234` or `-$12.50`.
pub fn format_currency(amount: f64, code: &str) -> String {
    let precision = minor_units_for(code);
    let symbol = symbol_for(code);
    let magnitude = format_number(amount.abs(), precision);
    let rounds_to_zero = magnitude.chars().all(|ch| !matches!(ch, '1'..='9'));
    if amount < 0.0 && !rounds_to_zero {
        format!("-{}{}", symbol, magnitude)
    } else {
        format!("{}{}", symbol, magnitude)
    }
}

pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%Y/%m/%d").to_string()
}

pub fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M").to_string()
}
