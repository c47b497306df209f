use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;
use ::std::ops::Deref;

use super::DirectValue;

/// REFERENCE: [7.3.6 Array objects, p29]
#[derive(Debug, PartialEq, Default, Clone)]
pub struct Array(Vec<DirectValue>);

impl Display for Array {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl Deref for Array {
    type Target = [DirectValue];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod convert {
    use super::*;

    impl Array {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push(&mut self, value: impl Into<DirectValue>) {
            self.0.push(value.into());
        }
    }

    impl FromIterator<DirectValue> for Array {
        fn from_iter<I: IntoIterator<Item = DirectValue>>(iter: I) -> Self {
            Self(iter.into_iter().collect())
        }
    }
}
