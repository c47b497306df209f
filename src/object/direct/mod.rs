pub(crate) mod array;
pub(crate) mod dictionary;

use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

use self::array::Array;
use self::dictionary::Dictionary;
use crate::object::indirect::reference::Reference;

/// REFERENCE:
/// - [7.3 Objects, p24]
/// - [7.3.8 Stream objects, p31]
/// Streams are always indirect objects and are kept apart from direct values.
/// While `Reference` is not an object, it can substitute for one in
/// dictionaries and arrays, and it is convenient to treat it as such.
#[derive(Debug, PartialEq, Clone)]
pub enum DirectValue {
    Reference(Reference),
    Array(Array),
    Boolean(bool),
    Dictionary(Dictionary),
    Integer(i64),
    Name(String),
    Null,
    Real(f64),
}

impl Display for DirectValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Reference(reference) => write!(f, "{}", reference),
            Self::Array(array) => write!(f, "{}", array),
            Self::Boolean(boolean) => write!(f, "{}", boolean),
            Self::Dictionary(dictionary) => write!(f, "{}", dictionary),
            Self::Integer(integer) => write!(f, "{}", integer),
            Self::Name(name) => write!(f, "/{}", name),
            Self::Null => write!(f, "null"),
            Self::Real(real) => write!(f, "{}", real),
        }
    }
}

mod process {
    use super::*;

    impl DirectValue {
        /// REFERENCE: [7.3.3 Numeric objects, p24]
        /// Hint table entries are integers. Real values are not accepted in
        /// their place.
        pub(crate) fn as_integer(&self) -> Option<i64> {
            if let Self::Integer(integer) = self {
                Some(*integer)
            } else {
                None
            }
        }
    }
}

mod convert {
    use super::*;
    use crate::impl_from;

    impl_from!(Reference, Reference, DirectValue);
    impl_from!(Array, Array, DirectValue);
    impl_from!(bool, Boolean, DirectValue);
    impl_from!(Dictionary, Dictionary, DirectValue);
    impl_from!(i64, Integer, DirectValue);
    impl_from!(i32, Integer, DirectValue);
    impl_from!(u32, Integer, DirectValue);
    impl_from!(f64, Real, DirectValue);

    impl From<&str> for DirectValue {
        fn from(name: &str) -> Self {
            Self::Name(name.to_string())
        }
    }

    impl<T> From<Vec<T>> for DirectValue
    where
        T: Into<DirectValue>,
    {
        fn from(values: Vec<T>) -> Self {
            Self::Array(values.into_iter().map(Into::into).collect())
        }
    }
}
