//! Cleaning and validation of catalog import records.
//!
//! The import pipeline reads JSON exports of the ghazal and quote
//! spreadsheets. Spreadsheet exports carry `_x000D_` escape artifacts and
//! Windows line endings; both are stripped before anything is stored.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::CoreError;

/// Author used for quotes that do not name one.
pub const DEFAULT_QUOTE_AUTHOR: &str = "حافظ شیرازی";

/// Spreadsheet-export escape for a carriage return.
const CR_ARTIFACT: &str = "_x000D_";

// ---------------------------------------------------------------------------
// Raw records
// ---------------------------------------------------------------------------

/// One entry of `ghazals.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct GhazalRecord {
    pub ghazal_number: Option<i32>,
    #[serde(default)]
    pub persian_text: String,
    #[serde(default)]
    pub english_translation: String,
}

/// One entry of `quotes.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRecord {
    #[serde(default)]
    pub text: String,
    pub author: Option<String>,
    #[serde(default)]
    pub is_daily_quote: bool,
}

// ---------------------------------------------------------------------------
// Cleaned records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanGhazal {
    pub ghazal_number: i32,
    pub persian_text: String,
    pub english_translation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanQuote {
    pub text: String,
    pub author: String,
    pub is_daily_quote: bool,
}

/// Records kept and dropped while preparing one import file.
#[derive(Debug, Clone)]
pub struct Prepared<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

impl<T> Default for Prepared<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing and cleaning
// ---------------------------------------------------------------------------

/// Remove export artifacts and surrounding whitespace.
pub fn clean_text(raw: &str) -> String {
    raw.replace(CR_ARTIFACT, "").replace('\r', "").trim().to_string()
}

pub fn parse_ghazals(json: &str) -> Result<Vec<GhazalRecord>, CoreError> {
    serde_json::from_str(json)
        .map_err(|e| CoreError::Validation(format!("Invalid ghazals JSON: {e}")))
}

pub fn parse_quotes(json: &str) -> Result<Vec<QuoteRecord>, CoreError> {
    serde_json::from_str(json)
        .map_err(|e| CoreError::Validation(format!("Invalid quotes JSON: {e}")))
}

/// Clean ghazal records.
///
/// A missing `ghazal_number` defaults to the record's 1-based position in the
/// file. Records with neither text are skipped, as are repeats of a number
/// already seen earlier in the file.
pub fn prepare_ghazals(records: Vec<GhazalRecord>) -> Prepared<CleanGhazal> {
    let mut prepared = Prepared::default();
    let mut seen = HashSet::new();

    for (position, record) in (1..).zip(records) {
        let ghazal_number = record.ghazal_number.unwrap_or(position);
        let persian_text = clean_text(&record.persian_text);
        let translation = clean_text(&record.english_translation);

        if (persian_text.is_empty() && translation.is_empty()) || !seen.insert(ghazal_number) {
            prepared.skipped += 1;
            continue;
        }

        prepared.records.push(CleanGhazal {
            ghazal_number,
            persian_text,
            english_translation: (!translation.is_empty()).then_some(translation),
        });
    }

    prepared
}

/// Clean quote records, dropping empty texts and in-file duplicates.
pub fn prepare_quotes(records: Vec<QuoteRecord>) -> Prepared<CleanQuote> {
    let mut prepared = Prepared::default();
    let mut seen = HashSet::new();

    for record in records {
        let text = clean_text(&record.text);
        if text.is_empty() || !seen.insert(text.clone()) {
            prepared.skipped += 1;
            continue;
        }

        let author = record
            .author
            .as_deref()
            .map(clean_text)
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_QUOTE_AUTHOR.to_string());

        prepared.records.push(CleanQuote {
            text,
            author,
            is_daily_quote: record.is_daily_quote,
        });
    }

    prepared
}
