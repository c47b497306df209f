use ::flate2::read::ZlibDecoder;
use ::flate2::read::ZlibEncoder;
use ::flate2::Compression;
use ::std::io::Read;

use self::error::FlErrorCode;
use super::Filter;
use crate::process::filter::error::FilterResult;
use crate::Byte;
use crate::DECODED_LIMIT;

/// REFERENCE: [Table 8: Optional parameters for LZWDecode and FlateDecode
/// filters, p38]
const KEY_PREDICTOR: &str = "Predictor";

/// REFERENCE: [7.4.4 LZWDecode and FlateDecode filters, p38]
/// zlib/deflate compression filter. Hint streams carry no predictor, so only
/// the default predictor is accepted.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub(crate) struct Fl;

impl Filter for Fl {
    fn filter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>> {
        let mut filtered = Vec::default();

        let mut filter: ZlibEncoder<&[Byte]> =
            ZlibEncoder::new(bytes.as_ref(), Compression::default());
        filter
            .read_to_end(&mut filtered)
            .map_err(|err| FlErrorCode::Filter(err.to_string()))?;

        Ok(filtered)
    }

    /// The output is capped at `DECODED_LIMIT` bytes. Reading one byte past
    /// the cap is enough to tell an oversized stream apart.
    fn defilter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>> {
        let mut defiltered = Vec::default();

        let mut defilter = ZlibDecoder::new(bytes.as_ref()).take(DECODED_LIMIT + 1);
        defilter
            .read_to_end(&mut defiltered)
            .map_err(|err| FlErrorCode::Defilter(err.to_string()))?;
        if defiltered.len() as u64 > DECODED_LIMIT {
            return Err(FlErrorCode::Limit(DECODED_LIMIT).into());
        }

        Ok(defiltered)
    }
}

mod convert {
    use super::*;
    use crate::object::direct::dictionary::Dictionary;
    use crate::object::direct::DirectValue;
    use crate::process::filter::error::FilterErr;
    use crate::process::filter::error::FilterErrorCode;

    impl Fl {
        pub(in crate::process::filter) fn new(
            decode_parms: Option<&Dictionary>,
        ) -> FilterResult<Self> {
            let predictor = decode_parms.and_then(|decode_parms| decode_parms.get(KEY_PREDICTOR));
            match predictor {
                None | Some(DirectValue::Integer(1)) => Ok(Self),
                Some(DirectValue::Integer(predictor)) => Err(FilterErr::new(
                    stringify!(Fl),
                    FilterErrorCode::UnsupportedParameter(KEY_PREDICTOR, *predictor),
                )),
                Some(value) => Err(FilterErr::new(
                    stringify!(Fl),
                    FilterErrorCode::ValueType(KEY_PREDICTOR, stringify!(Integer), value.to_string()),
                )),
            }
        }
    }
}

pub(in crate::process::filter) mod error {
    use ::thiserror::Error;

    #[derive(Debug, Error, PartialEq, Clone)]
    pub enum FlErrorCode {
        #[error("Filtering: {0}")]
        Filter(String),
        #[error("Defiltering: {0}")]
        Defilter(String),
        #[error("Decoded data exceeds {0} bytes")]
        Limit(u64),
    }
}
