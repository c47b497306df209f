use ::num_traits::CheckedAdd;
use ::num_traits::CheckedMul;

use self::error::ArithErr;

pub(crate) type ArithResult<T> = Result<T, ArithErr>;

/// Every value added here stems from an untrusted hint stream, so a wrapped
/// result is never used. `field` names the quantity being computed and only
/// shows up in diagnostics.
pub(crate) fn checked_add<T>(lhs: T, rhs: T, field: &'static str) -> ArithResult<T>
where
    T: CheckedAdd + Copy + Into<u64>,
{
    lhs.checked_add(&rhs).ok_or_else(|| ArithErr::Add {
        field,
        lhs: lhs.into(),
        rhs: rhs.into(),
    })
}

pub(crate) fn checked_mul<T>(lhs: T, rhs: T, field: &'static str) -> ArithResult<T>
where
    T: CheckedMul + Copy + Into<u64>,
{
    lhs.checked_mul(&rhs).ok_or_else(|| ArithErr::Mul {
        field,
        lhs: lhs.into(),
        rhs: rhs.into(),
    })
}

/// The number of bits taken by `count` consecutive fields of `width` bits.
pub(crate) fn field_bits(count: u32, width: u32, field: &'static str) -> ArithResult<u32> {
    checked_mul(count, width, field)
}

pub(crate) mod error {
    use ::thiserror::Error;

    #[derive(Debug, Error, PartialEq, Clone, Copy)]
    pub enum ArithErr {
        #[error("Overflow computing {field}: {lhs} + {rhs}")]
        Add {
            field: &'static str,
            lhs: u64,
            rhs: u64,
        },
        #[error("Overflow computing {field}: {lhs} * {rhs}")]
        Mul {
            field: &'static str,
            lhs: u64,
            rhs: u64,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_err_eq;

    #[test]
    fn checked_arith_valid() {
        assert_eq!(checked_add(1u32, 2, "sum"), Ok(3));
        assert_eq!(checked_add(u32::MAX - 1, 1, "sum"), Ok(u32::MAX));
        assert_eq!(checked_add(u64::from(u32::MAX), 1, "sum"), Ok(1 << 32));
        assert_eq!(checked_mul(0u32, u32::MAX, "product"), Ok(0));
        assert_eq!(field_bits(1 << 20, 32, "bits"), Ok(1 << 25));
    }

    #[test]
    fn checked_arith_invalid() {
        assert_err_eq!(
            checked_add(u32::MAX, 1, "page length"),
            ArithErr::Add {
                field: "page length",
                lhs: u32::MAX.into(),
                rhs: 1,
            }
        );
        assert_err_eq!(
            checked_add(u64::MAX, 2, "offset"),
            ArithErr::Add {
                field: "offset",
                lhs: u64::MAX,
                rhs: 2,
            }
        );
        assert_err_eq!(
            field_bits(u32::MAX, 32, "identifier bits"),
            ArithErr::Mul {
                field: "identifier bits",
                lhs: u32::MAX.into(),
                rhs: 32,
            }
        );
    }
}
