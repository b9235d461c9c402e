//! PK Library
//!
//! A registry of reference-product PK records keyed by normalised drug identity
//! (trimmed, lower-cased). Records can be:
//! - Taken from the built-in table embedded at compile time
//! - Loaded from a JSON array or a CSV file
//!
//! # Example
//!
//! ```rust,ignore
//! use beplanner::pk::PKLibrary;
//!
//! let library = PKLibrary::builtin();
//! let pk = library.get("  Omeprazole ");
//! assert_eq!(pk.t_half, Some(1.0));
//!
//! // Unknown identities never fail
//! assert!(library.get("unobtainium").is_unknown());
//! ```

use lazy_static::lazy_static;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use super::PKParameters;

const BUILTIN_PK: &str = include_str!("data/reference_pk.json");

lazy_static! {
    static ref SHARED: PKLibrary = PKLibrary::builtin();
}

/// Errors that can occur when loading a PK library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LibraryError {
    #[error("Failed to read PK library: {0}")]
    Io(String),

    #[error("Failed to parse PK library JSON: {0}")]
    Json(String),

    #[error("CSV error: {0}")]
    Csv(String),

    /// A record carries a value that cannot be a PK parameter
    #[error("Invalid PK record for '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },
}

/// One JSON entry: a record and every identity it is known under
#[derive(Debug, Deserialize)]
struct JsonEntry {
    names: Vec<String>,
    #[serde(flatten)]
    parameters: PKParameters,
}

/// One CSV row (`inn,cmax,auc,tmax,t_half,cv_intra`, empty cells are unknown)
#[derive(Debug, Deserialize)]
struct CsvRow {
    inn: String,
    #[serde(default)]
    cmax: Option<f64>,
    #[serde(default)]
    auc: Option<f64>,
    #[serde(default)]
    tmax: Option<f64>,
    #[serde(default)]
    t_half: Option<f64>,
    #[serde(default)]
    cv_intra: Option<f64>,
}

/// A registry of reference PK records
#[derive(Debug, Clone, Default)]
pub struct PKLibrary {
    records: HashMap<String, PKParameters>,
}

impl PKLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Create a library with the built-in reference records
    pub fn builtin() -> Self {
        let mut library = Self::new();
        if let Err(e) = library.load_json(BUILTIN_PK) {
            tracing::error!("Built-in PK table is invalid: {}", e);
        }
        library
    }

    /// Process-wide instance of the built-in library
    pub fn shared() -> &'static PKLibrary {
        &SHARED
    }

    /// Build a library from a JSON array of records
    pub fn from_json(json: &str) -> Result<Self, LibraryError> {
        let mut library = Self::new();
        library.load_json(json)?;
        Ok(library)
    }

    /// Build a library from a CSV file
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
        let mut library = Self::new();
        library.load_csv(path)?;
        Ok(library)
    }

    /// Add every record of a JSON array to this library
    ///
    /// Nothing is added unless every record is valid.
    pub fn load_json(&mut self, json: &str) -> Result<(), LibraryError> {
        let entries: Vec<JsonEntry> =
            serde_json::from_str(json).map_err(|e| LibraryError::Json(e.to_string()))?;

        let mut staged = Vec::new();
        for entry in entries {
            for name in &entry.names {
                staged.push(stage(name, entry.parameters)?);
            }
        }
        self.records.extend(staged);
        Ok(())
    }

    /// Add every row of a CSV file to this library
    ///
    /// Nothing is added unless every row is valid.
    pub fn load_csv(&mut self, path: impl AsRef<Path>) -> Result<(), LibraryError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LibraryError::Io(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let mut reader = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| LibraryError::Csv(e.to_string()))?;
        let headers = reader
            .headers()
            .map_err(|e| LibraryError::Csv(e.to_string()))?
            .iter()
            .map(|h| h.to_lowercase())
            .collect::<Vec<_>>();
        reader.set_headers(csv::StringRecord::from(headers));

        let mut staged = Vec::new();
        for row in reader.deserialize() {
            let row: CsvRow = row.map_err(|e| LibraryError::Csv(e.to_string()))?;
            let parameters = PKParameters {
                cmax: row.cmax,
                auc: row.auc,
                tmax: row.tmax,
                t_half: row.t_half,
                cv_intra: row.cv_intra,
            };
            staged.push(stage(&row.inn, parameters)?);
        }
        self.records.extend(staged);
        Ok(())
    }

    /// Register a record under a drug identity, replacing any previous one
    pub fn insert(&mut self, name: &str, parameters: PKParameters) -> Result<(), LibraryError> {
        let (key, parameters) = stage(name, parameters)?;
        self.records.insert(key, parameters);
        Ok(())
    }

    /// Look up a drug; unknown identities yield an all-absent record
    pub fn get(&self, name: &str) -> PKParameters {
        self.lookup(name).unwrap_or_default()
    }

    /// Look up a drug, distinguishing unknown identities
    pub fn lookup(&self, name: &str) -> Option<PKParameters> {
        self.records.get(&normalize(name)).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(&normalize(name))
    }

    /// Sorted list of registered identities
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Normalise and check a record before it enters the registry
fn stage(name: &str, parameters: PKParameters) -> Result<(String, PKParameters), LibraryError> {
    let key = normalize(name);
    if key.is_empty() {
        return Err(LibraryError::InvalidRecord {
            name: name.to_string(),
            reason: "empty drug identity".to_string(),
        });
    }
    check_record(&key, &parameters)?;
    Ok((key, parameters))
}

fn check_record(name: &str, pk: &PKParameters) -> Result<(), LibraryError> {
    let invalid = |reason: &str| LibraryError::InvalidRecord {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if let Some(cv) = pk.cv_intra {
        if !(0.0..=1.0).contains(&cv) {
            return Err(invalid("cv_intra must be within [0, 1]"));
        }
    }
    let non_negative = [
        ("cmax", pk.cmax),
        ("auc", pk.auc),
        ("tmax", pk.tmax),
        ("t_half", pk.t_half),
    ];
    for (field, value) in non_negative {
        if let Some(v) = value {
            if !(v >= 0.0 && v.is_finite()) {
                return Err(invalid(&format!("{field} must be a non-negative number")));
            }
        }
    }
    Ok(())
}
