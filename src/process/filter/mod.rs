pub(crate) mod ascii_hex;
pub(crate) mod error;
pub(crate) mod flate;

use ::log::debug;

use self::ascii_hex::AHx;
use self::error::FilterErr;
use self::error::FilterErrorCode;
use self::error::FilterResult;
use self::flate::Fl;
use crate::object::direct::dictionary::Dictionary;
use crate::object::direct::DirectValue;
use crate::Byte;

/// REFERENCE: [Table 5: Entries common to all stream dictionaries, p32]
pub(crate) const KEY_FILTER: &str = "Filter";
pub(crate) const KEY_DECODEPARMS: &str = "DecodeParms";

pub(crate) trait Filter {
    fn filter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>>;

    fn defilter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>>;
}

#[derive(Debug, PartialEq)]
pub(crate) struct FilteringChain(Vec<Filtering>);

impl Filter for FilteringChain {
    fn filter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>> {
        // The filters in the stream dictionary are in the order they need to
        // be applied to defilter the data. Filter the data by applying the
        // filters in the reverse order.
        let mut filtered: Vec<_>;
        if let [rest @ .., last] = self.0.as_slice() {
            filtered = last.filter(bytes)?;
            for filtering in rest.iter().rev() {
                filtered = filtering.filter(filtered)?;
            }
        } else {
            filtered = bytes.into();
        }
        Ok(filtered)
    }

    /// REFERENCE: [7.3.8.2 Stream extent, p31-33] and [7.4 Filters, p34]
    fn defilter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>> {
        let mut defiltered: Vec<_>;
        if let [first, rest @ ..] = self.0.as_slice() {
            defiltered = first.defilter(bytes)?;
            for filtering in rest {
                defiltered = filtering.defilter(defiltered)?;
            }
        } else {
            defiltered = bytes.into();
        }
        Ok(defiltered)
    }
}

/// REFERENCE: [Table 6: Standard filters, p35-36]
/// Hint streams are in practice either uncompressed or Flate-compressed.
/// ASCIIHexDecode is kept for hand-written test files.
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum Filtering {
    None,
    AHx(AHx),
    Fl(Fl),
}

impl Filtering {
    pub(crate) fn new(name: &str, decode_parms: Option<&Dictionary>) -> FilterResult<Self> {
        // REFERENCE: [Table 92 — Additional abbreviations in an inline image
        // object, p269]
        match name {
            "AHx" | "ASCIIHexDecode" => Ok(Self::AHx(AHx)),
            "Fl" | "FlateDecode" => Ok(Self::Fl(Fl::new(decode_parms)?)),
            _ => Err(FilterErr::new(
                stringify!(Filtering),
                FilterErrorCode::Unsupported(name.to_string()),
            )),
        }
    }
}

impl Filter for Filtering {
    fn filter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>> {
        match self {
            Self::None => Ok(bytes.into()),
            Self::AHx(filtering) => filtering.filter(bytes),
            Self::Fl(filtering) => filtering.filter(bytes),
        }
    }

    fn defilter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>> {
        match self {
            Self::None => Ok(bytes.into()),
            Self::AHx(filtering) => filtering.defilter(bytes),
            Self::Fl(filtering) => filtering.defilter(bytes),
        }
    }
}

mod convert {
    use super::*;

    fn value_type_err(key: &'static str, expected: &'static str, value: &DirectValue) -> FilterErr {
        FilterErr::new(
            stringify!(FilteringChain),
            FilterErrorCode::ValueType(key, expected, value.to_string()),
        )
    }

    impl FilteringChain {
        /// REFERENCE: [7.3.8.2 Stream extent, p31-33]
        /// `/Filter` is either a single name or an array of names. When it is
        /// an array, `/DecodeParms`, if present, is an array of the same
        /// length whose entries are dictionaries or null.
        pub(crate) fn new(dictionary: &Dictionary) -> FilterResult<Self> {
            let filtering = dictionary.get(KEY_FILTER);
            let decode_parms = dictionary.get(KEY_DECODEPARMS);

            let filter_chain = match (filtering, decode_parms) {
                (None, _) => vec![Filtering::None],
                (Some(DirectValue::Name(filtering)), Some(DirectValue::Dictionary(decode_parms))) => {
                    vec![Filtering::new(filtering, Some(decode_parms))?]
                }
                (Some(DirectValue::Name(filtering)), None) => {
                    vec![Filtering::new(filtering, None)?]
                }
                (Some(DirectValue::Name(_)), Some(decode_parms)) => {
                    return Err(value_type_err(
                        KEY_DECODEPARMS,
                        stringify!(Dictionary),
                        decode_parms,
                    ));
                }
                (Some(DirectValue::Array(filterings)), Some(DirectValue::Array(decode_parms))) => {
                    if filterings.len() != decode_parms.len() {
                        return Err(FilterErr::new(
                            stringify!(FilteringChain),
                            FilterErrorCode::Mismatch(filterings.len(), decode_parms.len()),
                        ));
                    }
                    filterings
                        .iter()
                        .zip(decode_parms.iter())
                        .map(|(filtering, decode_parms)| match (filtering, decode_parms) {
                            (DirectValue::Name(filtering), DirectValue::Dictionary(decode_parms)) => {
                                Filtering::new(filtering, Some(decode_parms))
                            }
                            (DirectValue::Name(filtering), DirectValue::Null) => {
                                Filtering::new(filtering, None)
                            }
                            (DirectValue::Name(_), _) => Err(value_type_err(
                                KEY_DECODEPARMS,
                                stringify!(Dictionary),
                                decode_parms,
                            )),
                            _ => Err(value_type_err(KEY_FILTER, stringify!(Name), filtering)),
                        })
                        .collect::<FilterResult<_>>()?
                }
                (Some(DirectValue::Array(filterings)), None) => filterings
                    .iter()
                    .map(|filtering| {
                        if let DirectValue::Name(filtering) = filtering {
                            Filtering::new(filtering, None)
                        } else {
                            Err(value_type_err(KEY_FILTER, stringify!(Name), filtering))
                        }
                    })
                    .collect::<FilterResult<_>>()?,
                (Some(DirectValue::Array(_)), Some(decode_parms)) => {
                    return Err(value_type_err(
                        KEY_DECODEPARMS,
                        stringify!(Array),
                        decode_parms,
                    ));
                }
                (Some(filtering), _) => {
                    return Err(value_type_err(
                        KEY_FILTER,
                        stringify!(Name | Array),
                        filtering,
                    ));
                }
            };
            debug!("FilteringChain: {:?}", filter_chain);

            Ok(Self(filter_chain))
        }
    }
}
