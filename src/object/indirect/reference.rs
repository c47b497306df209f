use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

use crate::ObjectNumber;

/// REFERENCE: [3.33 indirect object, p10] and [7.5.4 Cross-reference table,
/// p56-57]
/// Generation numbers are restricted to 5 digits with a maximum of 65,535.
pub type GenerationNumber = u16;

/// REFERENCE: [7.3.10 Indirect Objects, p33]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Reference {
    pub(crate) object_number: ObjectNumber,
    pub(crate) generation_number: GenerationNumber,
}

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {} R", self.object_number, self.generation_number)
    }
}

mod convert {
    use super::*;

    impl Reference {
        pub fn new(object_number: ObjectNumber, generation_number: GenerationNumber) -> Self {
            Self {
                object_number,
                generation_number,
            }
        }
    }
}
