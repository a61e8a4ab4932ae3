//! Turns raw store records into normalized [`Transaction`]s.
//!
//! Checks run amount, then date, then type; the first failing check decides
//! the rejection reason. A rejection never aborts the batch.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tally_domain::{
    Diagnostics, Identifiable, RawTransaction, Rejection, RejectionReason, Transaction,
    TransactionType, FALLBACK_SOURCE,
};

/// Largest single amount accepted. Keeps every running sum far from the
/// 96-bit mantissa limit of [`Decimal`].
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

pub fn normalize(index: usize, raw: &RawTransaction) -> Result<Transaction, Rejection> {
    let amount = parse_amount(&raw.amount).ok_or_else(|| {
        reject(
            index,
            raw,
            RejectionReason::InvalidAmount,
            format!("amount `{}` is not a non-negative decimal", raw.amount),
        )
    })?;
    let date = parse_date(&raw.date).ok_or_else(|| {
        reject(
            index,
            raw,
            RejectionReason::InvalidDate,
            format!("date `{}` is not a calendar date", raw.date),
        )
    })?;
    let kind = TransactionType::from_str(&raw.kind)
        .map_err(|err| reject(index, raw, RejectionReason::UnknownType, err.to_string()))?;

    Ok(Transaction {
        id: raw.id.clone(),
        date,
        kind,
        category: raw.category.clone(),
        source: normalize_source(raw.source.as_deref()),
        amount,
        description: raw.description.clone(),
    })
}

/// Normalizes every record in order, handing accepted ones to `accept` and
/// collecting the rest. Each rejection is logged at debug level.
pub fn partition<F>(records: &[RawTransaction], mut accept: F) -> Diagnostics
where
    F: FnMut(Transaction),
{
    let mut diagnostics = Diagnostics::new();
    for (index, raw) in records.iter().enumerate() {
        match normalize(index, raw) {
            Ok(txn) => accept(txn),
            Err(rejection) => {
                tracing::debug!(
                    index = rejection.index,
                    record_id = %rejection.record_id,
                    reason = %rejection.reason,
                    "skipping transaction record: {}",
                    rejection.detail
                );
                diagnostics.push(rejection);
            }
        }
    }
    diagnostics
}

/// Parses an exact, non-negative amount. Plain and scientific notation are accepted.
///
/// Amounts above [`MAX_AMOUNT`] are refused like any other invalid amount,
/// even though they are well-formed decimals.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()?;
    if value.is_zero() {
        return Some(Decimal::ZERO);
    }
    if value.is_sign_negative() || value > MAX_AMOUNT {
        return None;
    }
    Some(value)
}

/// Extracts the calendar date written in `text`.
///
/// Timestamps keep the date as written; no time zone conversion happens.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(stamp.date_naive());
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|stamp| stamp.date())
}

pub fn normalize_source(source: Option<&str>) -> String {
    match source {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => FALLBACK_SOURCE.to_string(),
    }
}

fn reject(
    index: usize,
    raw: &RawTransaction,
    reason: RejectionReason,
    detail: String,
) -> Rejection {
    Rejection {
        index,
        record_id: raw.id().to_string(),
        reason,
        detail,
    }
}
