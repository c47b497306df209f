use self::error::AHxErrorCode;
use super::Filter;
use crate::process::filter::error::FilterResult;
use crate::Byte;

const HEX_DIGITS: &[Byte; 16] = b"0123456789ABCDEF";
const EOD: Byte = b'>';

/// REFERENCE: [7.2.3 Character set, p22]
fn is_white_space(byte: Byte) -> bool {
    matches!(byte, b'\0' | b'\t' | b'\n' | b'\x0C' | b'\r' | b' ')
}

fn hex_val(byte: Byte) -> Result<Byte, AHxErrorCode> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(AHxErrorCode::InvalidHexDigit(char::from(byte))),
    }
}

/// ASCII hexadecimal filter.
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) struct AHx;

impl Filter for AHx {
    fn filter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>> {
        let bytes = bytes.as_ref();
        let mut filtered = Vec::with_capacity(bytes.len() * 2 + 1);
        for &byte in bytes {
            filtered.push(HEX_DIGITS[usize::from(byte >> 4)]);
            filtered.push(HEX_DIGITS[usize::from(byte & 0x0F)]);
        }
        filtered.push(EOD);
        Ok(filtered)
    }

    /// REFERENCE: [7.4.2 ASCIIHexDecode filter, p37]
    /// White space is ignored. A final odd digit is completed with a zero.
    /// The EOD marker is optional, but nothing other than white space may
    /// follow it.
    fn defilter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>> {
        let bytes = bytes.as_ref();
        let mut digits = bytes
            .iter()
            .copied()
            .filter(|&byte| !is_white_space(byte));

        let mut defiltered = Vec::with_capacity(bytes.len() / 2);
        let mut high: Option<Byte> = None;
        for byte in digits.by_ref() {
            if byte == EOD {
                break;
            }
            let value = hex_val(byte)?;
            match high.take() {
                Some(high) => defiltered.push(high << 4 | value),
                None => high = Some(value),
            }
        }
        if let Some(byte) = digits.next() {
            return Err(AHxErrorCode::AfterEod(char::from(byte)).into());
        }
        if let Some(high) = high {
            defiltered.push(high << 4);
        }

        Ok(defiltered)
    }
}

pub(in crate::process::filter) mod error {
    use ::thiserror::Error;

    #[derive(Debug, Error, PartialEq, Clone, Copy)]
    pub enum AHxErrorCode {
        #[error("Invalid ASCII hexadecimal digit: {0}")]
        InvalidHexDigit(char),
        #[error("Unexpected character after the EOD marker: {0}")]
        AfterEod(char),
    }
}
