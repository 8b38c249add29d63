use serde::{Deserialize, Serialize};
use serde_json as json;
use serde_path_to_error as spte;

use crate::error::{Result, WorkoutError};
use crate::message::Locale;
use crate::models::Summary;

/// One sensor package: type tag plus positional data fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PackageRepr")]
pub struct Package {
    pub tag: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(tag: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self { tag: tag.into(), data: data.into() }
    }
}

// Accepts both ["RUN", [15000, 1, 75]] and {"tag": "RUN", "data": [...]}
#[derive(Deserialize)]
#[serde(untagged)]
enum PackageRepr {
    Pair(String, Vec<f64>),
    Object { tag: String, data: Vec<f64> },
}

impl From<PackageRepr> for Package {
    fn from(r: PackageRepr) -> Self {
        match r {
            PackageRepr::Pair(tag, data) | PackageRepr::Object { tag, data } => Package { tag, data },
        }
    }
}

/// Batch settings. All fields optional; missing ones fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Cfg {
    pub locale: Option<Locale>,
    /// Abort the batch on the first rejected package (default true).
    pub fail_fast: Option<bool>,
}

impl Cfg {
    pub fn from_json(s: &str) -> Result<Self> {
        parse_json("cfg", s)
    }

    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    pub fn fail_fast(&self) -> bool {
        self.fail_fast.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOut {
    pub index: usize,
    pub tag: String,
    #[serde(flatten)]
    pub summary: Summary,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rejected {
    pub index: usize,
    pub tag: String,
    pub reason: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BatchReport {
    pub summaries: Vec<SummaryOut>,
    pub rejected: Vec<Rejected>,
}

/// Strict JSON parse; the error carries the path of the failing field.
pub(crate) fn parse_json<T>(what: &'static str, s: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let mut de = json::Deserializer::from_str(s);
    spte::deserialize(&mut de).map_err(|e| WorkoutError::Parse {
        what,
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}
