use ::thiserror::Error;

use crate::arith::error::ArithErr;
use crate::bit::error::BitErr;
use crate::process::filter::error::FilterErr;

pub(crate) type HintResult<T> = Result<T, HintErr>;

/// Every variant makes the hint tables unusable as a whole. The document is
/// then loaded sequentially instead.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum HintErr {
    #[error("Bits: {0}")]
    Bit(#[from] BitErr),
    #[error("Arithmetic: {0}")]
    Arith(#[from] ArithErr),
    #[error("Filter: {0}")]
    Filter(#[from] FilterErr),
    #[error("Missing entry in the hint stream dictionary. Key: {0}")]
    MissingEntry(&'static str),
    #[error("Invalid shared object hint table offset: {0}")]
    SharedOffset(i64),
    #[error("Hint stream too short. Size: {size}. Required: {required}")]
    TooShort { size: u64, required: u64 },
    #[error("Invalid width of {field}: {width}. Expected at most 32 bits")]
    InvalidWidth { field: &'static str, width: u32 },
    #[error(
        "Shared object hint table at bit {table} starts before the end of the page offset hint \
         table at bit {position}"
    )]
    SharedTableOverlap { table: u64, position: u64 },
    #[error("Too many {field}: {value}. Limit: {limit}")]
    Limit {
        field: &'static str,
        value: u64,
        limit: u64,
    },
}
