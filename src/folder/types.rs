use malachite::integer::Integer;
use malachite::natural::Natural;
use serde::{Serialize, Serializer};
use std::fmt;

/// A folder name derived from a code, with the values it was built from.
///
/// Numbers have no upper bound, so they serialize as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderName {
    pub code: String,
    #[serde(serialize_with = "as_decimal")]
    pub number: Natural,
    #[serde(serialize_with = "as_decimal")]
    pub range_start: Natural,
    #[serde(serialize_with = "as_decimal")]
    pub range_end: Natural,
    #[serde(serialize_with = "as_decimal")]
    pub id: Integer,
    pub name: String,
}

fn as_decimal<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

impl fmt::Display for FolderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
