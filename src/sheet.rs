//! Word list access over the Google Sheets API.
//!
//! The spreadsheet is expected to carry a header row naming the `Word`,
//! `Meaning`, `Synonyms` and `Antonyms` columns, in any order. Only the
//! `Word` column is mandatory.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("request to the Sheets API failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Sheets API returned {status}: {body}")]
    Api { status: StatusCode, body: String },
    #[error("the word sheet has no \"{0}\" column")]
    MissingColumn(&'static str),
}

/// One row of the vocabulary sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub meaning: String,
    pub synonyms: String,
    pub antonyms: String,
}

/// Answer column a multiple-choice question draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Meaning,
    Synonyms,
    Antonyms,
}

impl WordRecord {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Meaning => &self.meaning,
            Field::Synonyms => &self.synonyms,
            Field::Antonyms => &self.antonyms,
        }
    }
}

/// Read-only client for a single spreadsheet.
pub struct SheetClient {
    http: reqwest::Client,
    api_key: String,
    spreadsheet_id: String,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetClient {
    pub fn new(api_key: String, spreadsheet_id: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            spreadsheet_id,
        }
    }

    /// Fetches every row of `range` and turns it into word records.
    ///
    /// An empty sheet yields an empty list, which the caller treats as
    /// "nothing left to quiz", not as a failure.
    pub async fn list_records(&self, range: &str) -> Result<Vec<WordRecord>, SheetError> {
        let url = format!(
            "https://sheets.googleapis.com/v4/spreadsheets/{}/values/{}",
            self.spreadsheet_id, range
        );
        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SheetError::Api { status, body });
        }

        let body: ValueRange = response.json().await?;
        records_from_rows(body.values)
    }
}

/// Column positions detected from the header row.
#[derive(Debug, Default)]
struct Columns {
    word: usize,
    meaning: Option<usize>,
    synonyms: Option<usize>,
    antonyms: Option<usize>,
}

fn detect_columns(header: &[String]) -> Result<Columns, SheetError> {
    let mut columns = Columns::default();
    let mut word_found = false;
    for (i, name) in header.iter().enumerate() {
        match name.trim().to_lowercase().as_str() {
            "word" | "words" | "vocabulary" => {
                columns.word = i;
                word_found = true;
            }
            "meaning" | "meanings" | "definition" | "definitions" => columns.meaning = Some(i),
            "synonym" | "synonyms" => columns.synonyms = Some(i),
            "antonym" | "antonyms" => columns.antonyms = Some(i),
            _ => {}
        }
    }
    if !word_found {
        return Err(SheetError::MissingColumn("Word"));
    }
    Ok(columns)
}

fn records_from_rows(rows: Vec<Vec<String>>) -> Result<Vec<WordRecord>, SheetError> {
    let mut rows = rows.into_iter();
    let header = match rows.next() {
        Some(header) => header,
        None => return Ok(Vec::new()),
    };
    let columns = detect_columns(&header)?;
    for (name, index) in [
        ("Meaning", columns.meaning),
        ("Synonyms", columns.synonyms),
        ("Antonyms", columns.antonyms),
    ] {
        if index.is_none() {
            log::warn!(
                "The word sheet has no \"{}\" column; those questions will be skipped",
                name
            );
        }
    }

    let cell = |row: &[String], index: Option<usize>| -> String {
        index
            .and_then(|i| row.get(i))
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    };

    // Rows without a word are padding or decoration in the sheet; drop them.
    let mut records = Vec::new();
    for row in rows {
        let word = cell(&row, Some(columns.word));
        if word.is_empty() {
            continue;
        }
        records.push(WordRecord {
            word,
            meaning: cell(&row, columns.meaning),
            synonyms: cell(&row, columns.synonyms),
            antonyms: cell(&row, columns.antonyms),
        });
    }
    Ok(records)
}
