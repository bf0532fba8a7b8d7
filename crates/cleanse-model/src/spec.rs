//! Declarative cleaning specification, loaded once from a JSON document.
//!
//! The original dynamic attribute-from-mapping access is replaced with a
//! statically declared struct: every recognized option is a named, typed
//! field with a documented default. The specification is read-only after
//! load; stages only ever borrow it.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap as _;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::SpecError;

/// A user-declared column set: either an explicit list of names or the
/// sentinel `"all"` meaning every live column.
///
/// Any other JSON shape fails deserialization, which is where the
/// unsupported-shape configuration error surfaces in this statically typed
/// model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelection {
    All,
    Columns(Vec<String>),
}

impl ColumnSelection {
    pub fn is_empty(&self) -> bool {
        matches!(self, ColumnSelection::Columns(names) if names.is_empty())
    }
}

impl Default for ColumnSelection {
    fn default() -> Self {
        ColumnSelection::Columns(Vec::new())
    }
}

impl<'de> Deserialize<'de> for ColumnSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SelectionVisitor;

        impl<'de> Visitor<'de> for SelectionVisitor {
            type Value = ColumnSelection;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of column names or the literal \"all\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value == "all" {
                    Ok(ColumnSelection::All)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut names = Vec::new();
                while let Some(name) = seq.next_element::<String>()? {
                    names.push(name);
                }
                Ok(ColumnSelection::Columns(names))
            }
        }

        deserializer.deserialize_any(SelectionVisitor)
    }
}

impl Serialize for ColumnSelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ColumnSelection::All => serializer.serialize_str("all"),
            ColumnSelection::Columns(names) => names.serialize(serializer),
        }
    }
}

/// The two column groups steering NaN-row filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaGroups {
    pub all: ColumnSelection,
    pub any: ColumnSelection,
}

/// Ordered (old, new) substring pairs, deserialized from a JSON object in
/// document order. Order matters: within one entry, later replacements see
/// the result of earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementSet(pub Vec<(String, String)>);

impl<'de> Deserialize<'de> for ReplacementSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = ReplacementSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping old substrings to replacements")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::new();
                while let Some((old, new)) = map.next_entry::<String, String>()? {
                    pairs.push((old, new));
                }
                Ok(ReplacementSet(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

impl Serialize for ReplacementSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (old, new) in &self.0 {
            map.serialize_entry(old, new)?;
        }
        map.end()
    }
}

/// One detailed-replacement entry: a column set and its substring swaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceDetail {
    pub col: ColumnSelection,
    pub change: ReplacementSet,
}

/// The full cleaning specification.
///
/// `int_col` and `float_col` are plain lists (no `"all"` sentinel): they are
/// coerced unconditionally and an unknown name there is a fatal
/// configuration error rather than a resolver warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningSpec {
    pub input_file: PathBuf,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
    #[serde(default)]
    pub export_output_file: bool,

    #[serde(default)]
    pub drop_double_headers: bool,
    #[serde(default)]
    pub drop_row_title: bool,
    #[serde(default)]
    pub drop_col: Vec<String>,

    #[serde(default)]
    pub drop_na: bool,
    #[serde(default)]
    pub drop_na_how: NaGroups,
    #[serde(default)]
    pub drop_duplicates: bool,

    #[serde(default)]
    pub replace_char_details: Vec<ReplaceDetail>,
    #[serde(default)]
    pub str_columns_upper: ColumnSelection,

    #[serde(default)]
    pub datetime_col: ColumnSelection,
    #[serde(default)]
    pub int_col: Vec<String>,
    #[serde(default)]
    pub float_col: Vec<String>,
    #[serde(default)]
    pub numeric_col: ColumnSelection,

    #[serde(default)]
    pub outliers_col: ColumnSelection,

    #[serde(default)]
    pub create_profiles: bool,
    #[serde(default = "default_input_profile")]
    pub input_file_profile: PathBuf,
    #[serde(default = "default_output_profile")]
    pub output_file_profile: PathBuf,

    #[serde(default = "default_info_file")]
    pub cleaning_info_file: PathBuf,
}

fn default_delimiter() -> char {
    ','
}

fn default_output_file() -> PathBuf {
    PathBuf::from("cleaned.csv")
}

fn default_input_profile() -> PathBuf {
    PathBuf::from("profile_origin.txt")
}

fn default_output_profile() -> PathBuf {
    PathBuf::from("profile_cleaned.txt")
}

fn default_info_file() -> PathBuf {
    PathBuf::from("cleaning_info.txt")
}

impl CleaningSpec {
    /// Load and validate a specification from a JSON file.
    ///
    /// # Errors
    ///
    /// `SpecError::NotFound` when the file cannot be read,
    /// `SpecError::Parse` when the document is malformed or an option has
    /// an unsupported shape, `SpecError::Shape` when a value fails
    /// post-parse validation.
    pub fn load(path: &Path) -> Result<Self, SpecError> {
        let text = fs::read_to_string(path).map_err(|source| SpecError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let spec: Self = serde_json::from_str(&text).map_err(|source| SpecError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        spec.validate()?;
        Ok(spec)
    }

    /// The delimiter as the single byte the CSV layer expects.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }

    pub(crate) fn validate(&self) -> Result<(), SpecError> {
        if !self.delimiter.is_ascii() {
            return Err(SpecError::Shape(format!(
                "delimiter {:?} is not a single ascii character",
                self.delimiter
            )));
        }
        Ok(())
    }
}
