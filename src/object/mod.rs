pub(crate) mod direct;
pub(crate) mod error;
pub(crate) mod indirect;

use ::log::debug;
use ::log::warn;
use ::std::collections::HashMap;

pub use self::direct::array::Array;
pub use self::direct::dictionary::Dictionary;
pub use self::direct::DirectValue;
pub use self::error::ObjectErr;
use self::error::ObjectResult;
pub use self::indirect::reference::Reference;
pub use self::indirect::stream::Stream;
pub use self::indirect::IndirectValue;
pub use crate::process::filter::error::FilterErr;
use crate::Byte;

/// A reference resolving to another reference is followed at most this many
/// times.
const MAX_REFERENCE_DEPTH: usize = 32;

/// Read access to the object graph of a PDF file.
///
/// The hint table decoder only ever reads integers, arrays of integers and
/// the decoded bytes of the hint stream, so this is all it asks of a parser.
/// Every lookup may come back empty. Whether a missing value falls back to a
/// default or fails the decode is up to the caller.
pub trait ObjectModel {
    type Dictionary;
    type Array;
    type Object;
    type Stream;

    /// The integer value of `key`, following indirect references.
    fn get_int(&self, dictionary: &Self::Dictionary, key: &str) -> Option<i64>;

    /// The array value of `key`, following indirect references.
    fn get_array<'a>(
        &'a self,
        dictionary: &'a Self::Dictionary,
        key: &str,
    ) -> Option<&'a Self::Array>;

    /// The element at `index`, following indirect references.
    fn resolve_element<'a>(
        &'a self,
        array: &'a Self::Array,
        index: usize,
    ) -> Option<&'a Self::Object>;

    fn as_int(&self, object: &Self::Object) -> Option<i64>;

    fn stream_dictionary<'a>(&self, stream: &'a Self::Stream) -> &'a Self::Dictionary;

    /// The stream data with every filter in `/Filter` undone.
    fn decode_stream_bytes(&self, stream: &Self::Stream) -> Result<Vec<Byte>, FilterErr>;
}

/// An in-memory object store keyed by reference.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Document {
    objects: HashMap<Reference, IndirectValue>,
}

impl ObjectModel for Document {
    type Dictionary = Dictionary;
    type Array = Array;
    type Object = DirectValue;
    type Stream = Stream;

    fn get_int(&self, dictionary: &Dictionary, key: &str) -> Option<i64> {
        dictionary
            .get(key)
            .and_then(|value| self.resolve_or_log(value))
            .and_then(DirectValue::as_integer)
    }

    fn get_array<'a>(&'a self, dictionary: &'a Dictionary, key: &str) -> Option<&'a Array> {
        match dictionary.get(key).and_then(|value| self.resolve_or_log(value)) {
            Some(DirectValue::Array(array)) => Some(array),
            _ => None,
        }
    }

    fn resolve_element<'a>(&'a self, array: &'a Array, index: usize) -> Option<&'a DirectValue> {
        array
            .get(index)
            .and_then(|value| self.resolve_or_log(value))
    }

    fn as_int(&self, object: &DirectValue) -> Option<i64> {
        self.resolve_or_log(object)
            .and_then(DirectValue::as_integer)
    }

    fn stream_dictionary<'a>(&self, stream: &'a Stream) -> &'a Dictionary {
        stream.dictionary()
    }

    fn decode_stream_bytes(&self, stream: &Stream) -> Result<Vec<Byte>, FilterErr> {
        stream.defilter()
    }
}

mod process {
    use super::*;

    impl Document {
        pub fn get(&self, reference: &Reference) -> Option<&IndirectValue> {
            self.objects.get(reference)
        }

        pub fn len(&self) -> usize {
            self.objects.len()
        }

        pub fn is_empty(&self) -> bool {
            self.objects.is_empty()
        }

        /// REFERENCE: [7.3.10 Indirect objects, p33]
        /// Follow `value` until it is no longer a reference.
        pub fn resolve<'a>(&'a self, value: &'a DirectValue) -> ObjectResult<&'a DirectValue> {
            let mut resolved = value;
            let mut depth = 0;
            while let DirectValue::Reference(reference) = resolved {
                if depth == MAX_REFERENCE_DEPTH {
                    return Err(match value {
                        DirectValue::Reference(origin) => ObjectErr::ReferenceDepth(*origin),
                        _ => ObjectErr::ReferenceDepth(*reference),
                    });
                }
                depth += 1;
                resolved = match self.objects.get(reference) {
                    Some(IndirectValue::Direct(direct)) => direct,
                    Some(IndirectValue::Stream(_)) => {
                        return Err(ObjectErr::Type {
                            reference: *reference,
                            expected_type: stringify!(DirectValue),
                        })
                    }
                    None => return Err(ObjectErr::Missing(*reference)),
                };
            }
            Ok(resolved)
        }

        pub fn stream(&self, reference: &Reference) -> ObjectResult<&Stream> {
            match self.objects.get(reference) {
                Some(IndirectValue::Stream(stream)) => Ok(stream),
                Some(IndirectValue::Direct(_)) => Err(ObjectErr::Type {
                    reference: *reference,
                    expected_type: stringify!(Stream),
                }),
                None => Err(ObjectErr::Missing(*reference)),
            }
        }

        pub(super) fn resolve_or_log<'a>(&'a self, value: &'a DirectValue) -> Option<&'a DirectValue> {
            self.resolve(value)
                .map_err(|err| debug!("Document: {}", err))
                .ok()
        }
    }
}

mod convert {
    use super::*;

    impl Document {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(
            &mut self,
            reference: Reference,
            value: impl Into<IndirectValue>,
        ) -> Option<IndirectValue> {
            let old_value = self.objects.insert(reference, value.into());
            if old_value.is_some() {
                warn!("Document: Replacing object {}", reference);
            }
            old_value
        }
    }
}
