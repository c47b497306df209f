use ::log::debug;
use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

pub use self::error::LinearizedErr;
use crate::arith::checked_add;
use crate::arith::ArithResult;
use crate::FileOffset;
use crate::ObjectNumber;
use crate::PageIndex;

// Linearization parameter dictionary keys
pub(crate) const KEY_L: &str = "L";
pub(crate) const KEY_H: &str = "H";
pub(crate) const KEY_O: &str = "O";
pub(crate) const KEY_E: &str = "E";
pub(crate) const KEY_N: &str = "N";
pub(crate) const KEY_T: &str = "T";
pub(crate) const KEY_P: &str = "P";

/// REFERENCE: [Annex F.2.2 Linearization parameter dictionary, Table F.1]
///
/// Only the entries needed to locate and interpret the hint tables are kept.
/// The values are validated once, here, so that the hint table decoder can
/// rely on them without re-reading the dictionary.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Linearized {
    page_count: u32,
    first_page_index: PageIndex,
    first_page_object_number: ObjectNumber,
    first_page_end: FileOffset,
    hint_start: FileOffset,
    hint_length: u64,
    overflow_hint: Option<(FileOffset, u64)>,
    file_length: Option<FileOffset>,
    main_xref_offset: Option<FileOffset>,
}

impl Display for Linearized {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "<<")?;
        if let Some(file_length) = self.file_length {
            write!(f, " /{} {}", KEY_L, file_length)?;
        }
        write!(f, " /{} [{} {}", KEY_H, self.hint_start, self.hint_length)?;
        if let Some((offset, length)) = self.overflow_hint {
            write!(f, " {} {}", offset, length)?;
        }
        write!(f, "]")?;
        write!(f, " /{} {}", KEY_O, self.first_page_object_number)?;
        write!(f, " /{} {}", KEY_E, self.first_page_end)?;
        write!(f, " /{} {}", KEY_N, self.page_count)?;
        if let Some(main_xref_offset) = self.main_xref_offset {
            write!(f, " /{} {}", KEY_T, main_xref_offset)?;
        }
        write!(f, " /{} {} >>", KEY_P, self.first_page_index)
    }
}

mod process {
    use super::*;

    impl Linearized {
        pub fn page_count(&self) -> u32 {
            self.page_count
        }

        pub fn first_page_index(&self) -> PageIndex {
            self.first_page_index
        }

        pub fn first_page_object_number(&self) -> ObjectNumber {
            self.first_page_object_number
        }

        /// The offset of the end of the first page, `/E`.
        pub fn first_page_end(&self) -> FileOffset {
            self.first_page_end
        }

        /// The offset of the primary hint stream.
        pub fn hint_start(&self) -> FileOffset {
            self.hint_start
        }

        /// The length of the primary hint stream. Never zero.
        pub fn hint_length(&self) -> u64 {
            self.hint_length
        }

        pub fn overflow_hint(&self) -> Option<(FileOffset, u64)> {
            self.overflow_hint
        }

        pub fn file_length(&self) -> Option<FileOffset> {
            self.file_length
        }

        pub fn main_xref_offset(&self) -> Option<FileOffset> {
            self.main_xref_offset
        }

        /// REFERENCE: [Annex F.3 Hint tables, Note 1 under Table F.3]
        /// Offsets stored in the hint tables ignore the primary hint stream.
        /// An offset past the start of the hint stream therefore needs the
        /// length of the hint stream added to become a file offset.
        pub fn hints_offset_to_file_offset(&self, raw: u32) -> ArithResult<FileOffset> {
            let raw = FileOffset::from(raw);
            if raw > self.hint_start {
                checked_add(raw, self.hint_length, "hint table offset")
            } else {
                Ok(raw)
            }
        }
    }
}

mod convert {
    use super::error::LinearizedErr;
    use super::error::LinearizedResult;
    use super::*;
    use crate::object::ObjectModel;
    use crate::MAX_OBJECT_NUMBER;
    use crate::MAX_PAGE_COUNT;

    fn required<M: ObjectModel>(
        model: &M,
        dictionary: &M::Dictionary,
        key: &'static str,
    ) -> LinearizedResult<i64> {
        model
            .get_int(dictionary, key)
            .ok_or(LinearizedErr::MissingEntry {
                key,
                data_type: stringify!(Integer),
            })
    }

    fn in_range<T>(
        key: &'static str,
        value: i64,
        expected: &'static str,
        valid: impl FnOnce(&T) -> bool,
    ) -> LinearizedResult<T>
    where
        T: TryFrom<i64>,
    {
        T::try_from(value)
            .ok()
            .filter(valid)
            .ok_or(LinearizedErr::WrongValue {
                key,
                expected,
                value,
            })
    }

    fn non_negative(key: &'static str, value: i64) -> LinearizedResult<u64> {
        in_range(key, value, "a non-negative integer", |_: &u64| true)
    }

    impl Linearized {
        pub fn new<M: ObjectModel>(model: &M, dictionary: &M::Dictionary) -> LinearizedResult<Self> {
            let page_count = required(model, dictionary, KEY_N)?;
            let first_page_object_number = required(model, dictionary, KEY_O)?;
            let first_page_end = required(model, dictionary, KEY_E)?;
            let hint = model
                .get_array(dictionary, KEY_H)
                .ok_or(LinearizedErr::MissingEntry {
                    key: KEY_H,
                    data_type: stringify!(Array),
                })?;

            let page_count = in_range(KEY_N, page_count, "a page count", |page_count: &u32| {
                (1..=MAX_PAGE_COUNT).contains(page_count)
            })?;
            let first_page_object_number = in_range(
                KEY_O,
                first_page_object_number,
                "a positive object number",
                |object_number: &ObjectNumber| (1..=MAX_OBJECT_NUMBER).contains(object_number),
            )?;
            let first_page_end = non_negative(KEY_E, first_page_end)?;

            // REFERENCE: [Table F.1, H]
            // An array of two or four integers: the offset and length of the
            // primary hint stream, optionally followed by those of the
            // overflow hint stream.
            let mut hint_values = Vec::with_capacity(4);
            while let Some(element) = model.resolve_element(hint, hint_values.len()) {
                if hint_values.len() == 4 {
                    return Err(LinearizedErr::HintLength(5));
                }
                let value = model.as_int(element).ok_or(LinearizedErr::WrongType {
                    key: KEY_H,
                    data_type: stringify!(Integer),
                })?;
                hint_values.push(non_negative(KEY_H, value)?);
            }
            let (hint_start, hint_length, overflow_hint) = match hint_values.as_slice() {
                [start, length] => (*start, *length, None),
                [start, length, overflow_start, overflow_length] => {
                    (*start, *length, Some((*overflow_start, *overflow_length)))
                }
                _ => return Err(LinearizedErr::HintLength(hint_values.len())),
            };
            if hint_length == 0 {
                return Err(LinearizedErr::WrongValue {
                    key: KEY_H,
                    expected: "a positive hint stream length",
                    value: 0,
                });
            }

            let first_page_index = model
                .get_int(dictionary, KEY_P)
                .map(|first_page_index| {
                    in_range(
                        KEY_P,
                        first_page_index,
                        "a page index less than the page count",
                        |first_page_index: &PageIndex| *first_page_index < page_count,
                    )
                })
                .transpose()?
                .unwrap_or(0);
            let file_length = model
                .get_int(dictionary, KEY_L)
                .map(|file_length| non_negative(KEY_L, file_length))
                .transpose()?;
            let main_xref_offset = model
                .get_int(dictionary, KEY_T)
                .map(|main_xref_offset| non_negative(KEY_T, main_xref_offset))
                .transpose()?;

            let linearized = Self {
                page_count,
                first_page_index,
                first_page_object_number,
                first_page_end,
                hint_start,
                hint_length,
                overflow_hint,
                file_length,
                main_xref_offset,
            };
            debug!("Linearized: {}", linearized);
            Ok(linearized)
        }
    }
}

pub(crate) mod error {
    use ::thiserror::Error;

    pub(crate) type LinearizedResult<T> = Result<T, LinearizedErr>;

    #[derive(Debug, Error, PartialEq, Clone, Copy)]
    pub enum LinearizedErr {
        #[error("Missing entry. Key: {key}. Expected {data_type}")]
        MissingEntry {
            key: &'static str,
            data_type: &'static str,
        },
        #[error("Wrong data type. Key: {key}. Expected {data_type}")]
        WrongType {
            key: &'static str,
            data_type: &'static str,
        },
        #[error("Wrong value. Key: {key}. Expected {expected}. Found: {value}")]
        WrongValue {
            key: &'static str,
            expected: &'static str,
            value: i64,
        },
        #[error("Hint stream array of length {0}. Expected 2 or 4")]
        HintLength(usize),
    }
}
