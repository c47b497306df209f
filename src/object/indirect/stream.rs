use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

use crate::object::direct::dictionary::Dictionary;
use crate::Byte;

/// REFERENCE: [7.3.8 Stream objects, p31]
/// The data is kept as stored in the file, i.e. before any filter is undone.
#[derive(Debug, PartialEq, Clone)]
pub struct Stream {
    pub(crate) dictionary: Dictionary,
    pub(crate) data: Vec<Byte>,
}

impl Display for Stream {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}\nstream\n<{} bytes>\nendstream", self.dictionary, self.data.len())
    }
}

mod process {
    use ::log::trace;

    use super::*;
    use crate::process::filter::error::FilterResult;
    use crate::process::filter::Filter;
    use crate::process::filter::FilteringChain;

    impl Stream {
        pub fn dictionary(&self) -> &Dictionary {
            &self.dictionary
        }

        pub fn data(&self) -> &[Byte] {
            &self.data
        }

        pub(crate) fn defilter(&self) -> FilterResult<Vec<Byte>> {
            let defiltered = FilteringChain::new(&self.dictionary)?.defilter(self.data.as_slice())?;
            trace!(
                "Stream: Defiltered {} bytes into {} bytes",
                self.data.len(),
                defiltered.len()
            );
            Ok(defiltered)
        }

        pub(crate) fn filter_buffer(
            &self,
            buffer: impl Into<Vec<Byte>> + AsRef<[Byte]>,
        ) -> FilterResult<Vec<Byte>> {
            FilteringChain::new(&self.dictionary)?.filter(buffer)
        }
    }
}

mod convert {
    use super::*;
    use crate::process::filter::error::FilterResult;

    impl Stream {
        pub fn new(dictionary: impl Into<Dictionary>, data: impl Into<Vec<Byte>>) -> Self {
            Self {
                dictionary: dictionary.into(),
                data: data.into(),
            }
        }

        /// Build a stream from already decoded data by applying the filters
        /// named in `dictionary`.
        pub fn from_decoded(
            dictionary: impl Into<Dictionary>,
            decoded: impl Into<Vec<Byte>> + AsRef<[Byte]>,
        ) -> FilterResult<Self> {
            let mut stream = Self::new(dictionary, Vec::new());
            stream.data = stream.filter_buffer(decoded)?;
            Ok(stream)
        }
    }
}
