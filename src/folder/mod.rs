mod digits;
mod scheme;
mod types;

use malachite::integer::Integer;
use malachite::natural::Natural;
use tracing::debug;

use crate::error::FolderError;

pub use digits::{decimal_value, extract_digits};
pub use scheme::{DEFAULT_OFFSET, DEFAULT_WIDTH, FolderScheme};
pub use types::FolderName;

/// Range of the 100-wide bucket containing `number`, e.g. "1200 - 1299".
#[must_use]
pub fn compute_range(number: &Natural) -> String {
    FolderScheme::default().range(number)
}

/// Bucket index offset by 6; negative below 600.
#[must_use]
pub fn compute_id(number: &Natural) -> Integer {
    FolderScheme::default().id(number)
}

/// Folder name for `number`, e.g. "6. 1200 - 1299".
#[must_use]
pub fn format_name(number: &Natural) -> String {
    FolderScheme::default().name(number)
}

/// Derive the folder name for a code using the default scheme.
pub fn make_folder_name(code: &str) -> Result<String, FolderError> {
    let number = extract_digits(code)?;
    debug!(code, number = %number, "Extracted folder number");
    Ok(format_name(&number))
}
