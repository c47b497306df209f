use ::thiserror::Error;

use super::ascii_hex::error::AHxErrorCode;
use super::flate::error::FlErrorCode;

pub(crate) type FilterResult<T> = Result<T, FilterErr>;

#[derive(Debug, Error, PartialEq, Clone)]
#[error("{object}. Error: {code}")]
pub struct FilterErr {
    pub(crate) object: &'static str,
    pub(crate) code: FilterErrorCode,
}

// FlErrorCode does not implement Copy
#[derive(Debug, Error, PartialEq, Clone)]
pub enum FilterErrorCode {
    #[error("Mismatching number of filters {0} and decode parameters {1}")]
    Mismatch(usize, usize),
    #[error("Unsupported. Found: {0}")]
    Unsupported(String),
    #[error("Unsupported parameter {0}. Found: {1}")]
    UnsupportedParameter(&'static str, i64),
    #[error("Wrong value type for {0}. Expected {1}. Found: {2}")]
    ValueType(&'static str, &'static str, String),
    //
    #[error("ASCIIHex: {0}")]
    AHx(AHxErrorCode),
    #[error("Flate: {0}")]
    Fl(FlErrorCode),
}

mod convert {
    use super::*;

    impl FilterErr {
        pub fn new(object: &'static str, code: FilterErrorCode) -> Self {
            Self { object, code }
        }
    }

    macro_rules! filter_err_from {
        ($from:ty, $object:ident) => {
            impl From<$from> for FilterErr {
                fn from(code: $from) -> Self {
                    Self::new(stringify!($object), FilterErrorCode::$object(code))
                }
            }
        };
    }

    filter_err_from!(AHxErrorCode, AHx);
    filter_err_from!(FlErrorCode, Fl);
}
