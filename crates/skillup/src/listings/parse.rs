use std::fmt;

use serde::Serialize;

/// Listing attributes that are derived by parsing free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingField {
    Compensation,
    Duration,
}

impl fmt::Display for ListingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingField::Compensation => f.write_str("compensation"),
            ListingField::Duration => f.write_str("duration"),
        }
    }
}

/// Failure to derive a numeric attribute from a listing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListingParseError {
    #[error("listing has no {field}")]
    Missing { field: ListingField },
    #[error("unable to parse {field} from '{raw}'")]
    Unparsable { field: ListingField, raw: String },
}

/// Extract the lower bound of a free-text salary range such as `R$ 8.000 - R$ 12.000`.
pub fn parse_compensation(raw: &str) -> Result<u32, ListingParseError> {
    let unparsable = || ListingParseError::Unparsable {
        field: ListingField::Compensation,
        raw: raw.to_string(),
    };

    let start = raw.find(|c: char| c.is_ascii_digit()).ok_or_else(unparsable)?;
    let rest = &raw[start..];
    let run_len = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
        .unwrap_or(rest.len());
    let run = &rest[..run_len];
    let thousands = matches!(rest[run_len..].chars().next(), Some('k' | 'K'));

    let mut segments = run.split(['.', ',']);
    let mut whole = segments.next().unwrap_or_default().to_string();
    let mut fraction = "";
    for segment in segments {
        if segment.len() == 3 && segment.bytes().all(|b| b.is_ascii_digit()) {
            whole.push_str(segment);
        } else {
            fraction = segment;
            break;
        }
    }

    let mut value: u64 = whole.parse().map_err(|_| unparsable())?;
    if thousands {
        let scaled: String = fraction.chars().chain("000".chars()).take(3).collect();
        let scaled: u64 = scaled.parse().map_err(|_| unparsable())?;
        value = value
            .checked_mul(1000)
            .and_then(|v| v.checked_add(scaled))
            .ok_or_else(unparsable)?;
    }

    u32::try_from(value).map_err(|_| unparsable())
}

/// Read the leading number of a duration label such as `8 semanas`.
pub fn parse_duration_weeks(raw: &str) -> Result<u32, ListingParseError> {
    let trimmed = raw.trim_start();
    let digits_len = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    trimmed[..digits_len]
        .parse()
        .map_err(|_| ListingParseError::Unparsable {
            field: ListingField::Duration,
            raw: raw.to_string(),
        })
}
