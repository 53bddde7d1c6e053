use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor};

use num_bigint::BigUint;
use num_traits::Zero;

/// Runtime value: an arbitrary-precision non-negative integer
///
/// Bitwise operators work on the full width of both operands, so a shorter operand is
/// zero-extended to the longer one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Value(BigUint);

impl Value {
    /// The value zero
    pub fn zero() -> Self {
        Value(BigUint::zero())
    }

    /// Interprets a run of `0`/`1` digits as base 2.
    ///
    /// Returns `None` for an empty string or any other digit.
    pub fn from_binary_literal(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b == b'0' || b == b'1') {
            return None;
        }
        BigUint::parse_bytes(digits.as_bytes(), 2).map(Value)
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Number of significant bits (0 for zero)
    pub fn bit_len(&self) -> u64 {
        self.0.bits()
    }

    /// Borrow the underlying integer
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Minimal binary rendering, `0` for zero
    pub fn to_binary_string(&self) -> String {
        format!("{:b}", self.0)
    }
}

impl From<BigUint> for Value {
    fn from(n: BigUint) -> Self {
        Value(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value(BigUint::from(n))
    }
}

impl From<Value> for BigUint {
    fn from(value: Value) -> Self {
        value.0
    }
}

macro_rules! bitwise_op {
    ($trait:ident, $method:ident) => {
        impl $trait for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                Value((self.0).$method(rhs.0))
            }
        }

        impl<'a> $trait<&'a Value> for &'a Value {
            type Output = Value;

            fn $method(self, rhs: &'a Value) -> Value {
                Value((&self.0).$method(&rhs.0))
            }
        }
    };
}

bitwise_op!(BitAnd, bitand);
bitwise_op!(BitOr, bitor);
bitwise_op!(BitXor, bitxor);

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

impl fmt::Binary for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(digits: &str) -> Value {
        Value::from_binary_literal(digits).unwrap()
    }

    #[test]
    fn test_parse_binary_literal() {
        assert_eq!(bin("101"), Value::from(5u64));
        assert_eq!(bin("0000"), Value::zero());
        assert_eq!(Value::from_binary_literal(""), None);
        assert_eq!(Value::from_binary_literal("102"), None);
    }

    #[test]
    fn test_canonical_rendering() {
        assert_eq!(bin("000110").to_string(), "110");
        assert_eq!(bin("0").to_string(), "0");
        assert_eq!(Value::zero().to_binary_string(), "0");
        assert_eq!(format!("{:#b}", bin("11")), "0b11");
    }

    #[test]
    fn test_operands_are_zero_extended() {
        assert_eq!(bin("1") & bin("1111"), bin("1"));
        assert_eq!(bin("1") | bin("1000"), bin("1001"));
        assert_eq!(&bin("1111") ^ &bin("1"), bin("1110"));
    }

    #[test]
    fn test_wide_values_do_not_truncate() {
        let wide = format!("1{}", "0".repeat(200));
        let value = bin(&wide) | bin("1");
        assert_eq!(value.bit_len(), 201);
        assert_eq!(value.to_string(), format!("1{}1", "0".repeat(199)));
    }
}
