use malachite::integer::Integer;
use malachite::natural::Natural;
use tracing::debug;

use crate::error::FolderError;
use crate::folder::digits::extract_digits;
use crate::folder::types::FolderName;

pub const DEFAULT_WIDTH: u64 = 100;
pub const DEFAULT_OFFSET: i64 = 6;

/// Bucketing rules for folder numbers.
///
/// A number `n` falls into bucket `n / width`, which covers the closed
/// range `[bucket * width, bucket * width + width - 1]` and is identified
/// as `bucket - offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderScheme {
    width: u64,
    offset: i64,
}

impl Default for FolderScheme {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl FolderScheme {
    pub fn new(width: u64, offset: i64) -> Result<Self, FolderError> {
        if width == 0 {
            return Err(FolderError::InvalidWidth);
        }

        Ok(Self { width, offset })
    }

    pub fn width(&self) -> u64 {
        self.width
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    #[must_use]
    pub fn bucket(&self, number: &Natural) -> Natural {
        number / Natural::from(self.width)
    }

    /// Inclusive bounds of the range containing `number`.
    #[must_use]
    pub fn range_bounds(&self, number: &Natural) -> (Natural, Natural) {
        let start = self.bucket(number) * Natural::from(self.width);
        let end = &start + Natural::from(self.width - 1);
        (start, end)
    }

    #[must_use]
    pub fn range(&self, number: &Natural) -> String {
        let (start, end) = self.range_bounds(number);
        format!("{} - {}", start, end)
    }

    #[must_use]
    pub fn id(&self, number: &Natural) -> Integer {
        Integer::from(self.bucket(number)) - Integer::from(self.offset)
    }

    #[must_use]
    pub fn name(&self, number: &Natural) -> String {
        format!("{}. {}", self.id(number), self.range(number))
    }

    pub fn derive(&self, code: &str) -> Result<FolderName, FolderError> {
        let number = extract_digits(code)?;
        let (range_start, range_end) = self.range_bounds(&number);
        let id = self.id(&number);
        let name = format!("{}. {} - {}", id, range_start, range_end);

        debug!(
            code,
            number = %number,
            range_start = %range_start,
            range_end = %range_end,
            id = %id,
            "Derived folder"
        );

        Ok(FolderName {
            code: code.to_string(),
            number,
            range_start,
            range_end,
            id,
            name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn natural(digits: &str) -> Natural {
        Natural::from_str(digits).unwrap()
    }

    #[test]
    fn test_default_scheme() {
        let scheme = FolderScheme::default();
        assert_eq!(scheme.width(), 100);
        assert_eq!(scheme.offset(), 6);
        assert_eq!(FolderScheme::new(100, 6).unwrap(), scheme);
    }

    #[test]
    fn test_zero_width_rejected() {
        assert_eq!(FolderScheme::new(0, 6), Err(FolderError::InvalidWidth));
    }

    #[test]
    fn test_custom_scheme() {
        let scheme = FolderScheme::new(1000, 0).unwrap();
        let number = Natural::from(4321u32);
        assert_eq!(scheme.range(&number), "4000 - 4999");
        assert_eq!(scheme.id(&number), 4);
        assert_eq!(scheme.name(&number), "4. 4000 - 4999");

        let scheme = FolderScheme::new(10, -2).unwrap();
        assert_eq!(scheme.name(&Natural::from(57u32)), "7. 50 - 59");
    }

    #[test]
    fn test_width_one() {
        let scheme = FolderScheme::new(1, 0).unwrap();
        let number = Natural::from(42u32);
        assert_eq!(scheme.range_bounds(&number), (number.clone(), number.clone()));
        assert_eq!(scheme.id(&number), 42);
    }

    #[test]
    fn test_range_past_u64() {
        let scheme = FolderScheme::default();
        let (start, end) = scheme.range_bounds(&Natural::from(u64::MAX));
        assert_eq!(start, natural("18446744073709551600"));
        assert_eq!(end, natural("18446744073709551699"));
        assert_eq!(scheme.id(&Natural::from(u64::MAX)), 184_467_440_737_095_510i64);
    }

    #[test]
    fn test_derive() {
        let folder = FolderScheme::default().derive("PROD1234").unwrap();
        assert_eq!(folder.code, "PROD1234");
        assert_eq!(folder.number, 1234u32);
        assert_eq!(folder.range_start, 1200u32);
        assert_eq!(folder.range_end, 1299u32);
        assert_eq!(folder.id, 6);
        assert_eq!(folder.name, "6. 1200 - 1299");
    }

    #[test]
    fn test_derive_long_code() {
        let folder = FolderScheme::default()
            .derive("EAN4006381333931-LOT20240101")
            .unwrap();
        assert_eq!(folder.number, natural("400638133393120240101"));
        assert_eq!(
            folder.name,
            "4006381333931202395. 400638133393120240100 - 400638133393120240199"
        );
    }

    #[test]
    fn test_derive_no_digits() {
        assert!(matches!(
            FolderScheme::default().derive("ABC"),
            Err(FolderError::NoDigitsFound { .. })
        ));
    }

    proptest! {
        #[test]
        fn test_number_within_range(digits in "[0-9]{1,40}", width in 1u64..10_000) {
            let scheme = FolderScheme::new(width, 0).unwrap();
            let number = natural(&digits);
            let (start, end) = scheme.range_bounds(&number);
            prop_assert!(start <= number && number <= end);
            prop_assert_eq!(&end - &start, Natural::from(width - 1));
            prop_assert_eq!(start % Natural::from(width), 0u32);
        }

        #[test]
        fn test_id_tracks_bucket(number in any::<u64>(), offset in -1000i64..1000) {
            let scheme = FolderScheme::new(100, offset).unwrap();
            let expected = i128::from(number / 100) - i128::from(offset);
            prop_assert_eq!(scheme.id(&Natural::from(number)), Integer::from(expected));
        }
    }
}
