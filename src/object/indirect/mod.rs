pub(crate) mod reference;
pub(crate) mod stream;

use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

use self::stream::Stream;
use super::direct::DirectValue;

/// REFERENCE: [7.3.10 Indirect objects, p33]
#[derive(Debug, PartialEq, Clone)]
pub enum IndirectValue {
    Stream(Stream),
    Direct(DirectValue),
}

impl Display for IndirectValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Stream(stream) => write!(f, "{}", stream),
            Self::Direct(direct) => write!(f, "{}", direct),
        }
    }
}

mod convert {
    use super::*;
    use crate::impl_from;

    impl_from!(Stream, Stream, IndirectValue);
    impl_from!(DirectValue, Direct, IndirectValue);
}
