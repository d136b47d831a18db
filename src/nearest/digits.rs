// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decimal digit arrays, least significant digit first.
//!
//! Index 0 is the units digit. A prefix of the array is therefore the low end
//! of the number, and its value is read with the same weights: digit `i`
//! counts `10^i`. Prefix values may have leading zeros (the prefix `[4, 0]`
//! of 1204 has value 4).

/// The decimal digits of a number, least significant first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitArray {
    digits: Vec<u8>,
}

impl DigitArray {
    /// Split `number` into its digits. Zero has the single digit 0.
    pub fn from_number(mut number: u64) -> Self {
        let mut digits = Vec::with_capacity(20);
        loop {
            digits.push((number % 10) as u8);
            number /= 10;
            if number == 0 {
                break;
            }
        }
        Self { digits }
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Never true: every number has at least one digit.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }

    /// The lowest `k` digits.
    ///
    /// # Panics
    ///
    /// Panics if `k > self.len()`.
    pub fn prefix(&self, k: usize) -> &[u8] {
        &self.digits[..k]
    }

    /// Replace the lowest `replacement.len()` digits.
    ///
    /// # Panics
    ///
    /// Panics if the replacement is longer than the array.
    pub fn splice_prefix(&mut self, replacement: &[u8]) {
        self.digits[..replacement.len()].copy_from_slice(replacement);
    }

    /// Join the digits back into a number, or `None` if it overflows `u64`.
    pub fn value(&self) -> Option<u64> {
        self.digits
            .iter()
            .rev()
            .try_fold(0u64, |acc, &d| acc.checked_mul(10)?.checked_add(u64::from(d)))
    }
}

/// Value of a least-significant-first digit slice.
///
/// Slices of up to 38 digits fit in `u128`; `u64` numbers have at most 20.
pub fn value_of(digits: &[u8]) -> u128 {
    digits
        .iter()
        .rev()
        .fold(0u128, |acc, &d| acc * 10 + u128::from(d))
}

/// The `k` lowest digits of `value`, least significant first, zero padded.
pub fn digits_of(mut value: u128, k: usize) -> Vec<u8> {
    let mut digits = Vec::with_capacity(k);
    for _ in 0..k {
        digits.push((value % 10) as u8);
        value /= 10;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number() {
        assert_eq!(DigitArray::from_number(12345).as_slice(), &[5, 4, 3, 2, 1]);
        assert_eq!(DigitArray::from_number(120).as_slice(), &[0, 2, 1]);
        assert_eq!(DigitArray::from_number(0).as_slice(), &[0]);
        assert_eq!(DigitArray::from_number(u64::MAX).len(), 20);
    }

    #[test]
    fn test_value_round_trip() {
        for n in [0, 7, 10, 90822, 1203450, u64::MAX] {
            assert_eq!(DigitArray::from_number(n).value(), Some(n));
        }
    }

    #[test]
    fn test_value_overflow() {
        let mut digits = DigitArray::from_number(u64::MAX);
        // 18446744073709551615 -> 18446744073709551651
        digits.splice_prefix(&[1, 5]);
        assert_eq!(digits.value(), None);
    }

    #[test]
    fn test_prefix_value_keeps_leading_zeros() {
        let digits = DigitArray::from_number(1204);
        assert_eq!(digits.prefix(2), &[4, 0]);
        assert_eq!(value_of(digits.prefix(2)), 4);
        assert_eq!(digits_of(4, 2), vec![4, 0]);
    }

    #[test]
    fn test_splice_prefix() {
        let mut digits = DigitArray::from_number(12345);
        digits.splice_prefix(&[4, 5]);
        assert_eq!(digits.value(), Some(12354));
    }
}
