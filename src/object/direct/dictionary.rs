use ::log::warn;
use ::std::collections::HashMap;
use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

use super::DirectValue;

/// REFERENCE: [7.3.7 Dictionary objects, p30-31]
/// Keys are stored without the leading solidus.
#[derive(Debug, PartialEq, Default, Clone)]
pub struct Dictionary(HashMap<String, DirectValue>);

impl Display for Dictionary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        // Sort the keys so that the output is stable
        let mut entries = self.0.iter().collect::<Vec<_>>();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        write!(f, "<<")?;
        for (i, (key, value)) in entries.into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "/{} {}", key, value)?;
        }
        write!(f, ">>")
    }
}

mod process {
    use super::*;

    impl Dictionary {
        /// REFERENCE: [7.3.7 Dictionary objects, p30]
        /// An entry whose value is null is equivalent to an absent entry.
        pub fn get(&self, key: &str) -> Option<&DirectValue> {
            self.0.get(key).filter(|value| **value != DirectValue::Null)
        }

        pub fn len(&self) -> usize {
            self.0.len()
        }

        pub fn is_empty(&self) -> bool {
            self.0.is_empty()
        }
    }
}

mod convert {
    use super::*;

    impl Dictionary {
        pub fn new() -> Self {
            Self::default()
        }

        /// REFERENCE: [7.3.7 Dictionary objects, p30]
        /// Dictionary keys should not be duplicated. The last value wins.
        pub fn insert(
            &mut self,
            key: impl Into<String>,
            value: impl Into<DirectValue>,
        ) -> Option<DirectValue> {
            let key = key.into();
            let value = value.into();
            let old_value = self.0.insert(key.clone(), value);
            if let Some(old_value) = &old_value {
                warn!(
                    "Dictionary: Overwriting value for key /{}: {} -> {}",
                    key, old_value, self.0[&key]
                );
            }
            old_value
        }

        /// Builder-style variant of `insert`.
        pub fn with(mut self, key: impl Into<String>, value: impl Into<DirectValue>) -> Self {
            self.insert(key, value);
            self
        }
    }

    impl<K, V> FromIterator<(K, V)> for Dictionary
    where
        K: Into<String>,
        V: Into<DirectValue>,
    {
        fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
            let mut dictionary = Self::new();
            for (key, value) in iter {
                dictionary.insert(key, value);
            }
            dictionary
        }
    }
}
