use ::log::debug;
use ::log::trace;

use super::error::HintErr;
use super::error::HintResult;
use super::validate_width;
use crate::arith::checked_add;
use crate::arith::checked_mul;
use crate::arith::field_bits;
use crate::bit::BitCursor;
use crate::linearized::Linearized;
use crate::BitCount;
use crate::FileOffset;
use crate::ObjectNumber;
use crate::MAX_OBJECT_NUMBER;

/// REFERENCE: [Annex F.4.2 Shared object hint table, Table F.5]
/// The header is 24 bytes long.
pub(super) const SHARED_HEADER_BITS: BitCount = 192;
/// Item 5: the number of bits needed for the object count of a group.
const GROUP_OBJECTS_BITS: BitCount = 16;

/// REFERENCE: [Annex F.4.2 Shared object hint table, p1014-1015]
///
/// The first `first_page_shared_count` entries describe objects of the first
/// page section. The others describe the shared objects section.
/// `offsets` holds one more entry than `numbers` and `lengths`.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct SharedTable {
    pub(crate) first_page_shared_count: u32,
    pub(crate) numbers: Vec<ObjectNumber>,
    pub(crate) offsets: Vec<FileOffset>,
    pub(crate) lengths: Vec<u32>,
}

mod convert {
    use super::*;

    impl SharedTable {
        /// `table_offset` is the byte offset of the table within the decoded
        /// hint stream, the `/S` entry of the hint stream dictionary.
        pub(crate) fn read(
            cursor: &mut BitCursor,
            table_offset: u64,
            linearized: &Linearized,
            first_page_object_offset: FileOffset,
        ) -> HintResult<Self> {
            let table = checked_mul(table_offset, 8, "shared object hint table position")?;
            let position = cursor.position_bits();
            if table < position {
                return Err(HintErr::SharedTableOverlap { table, position });
            }
            cursor.skip_bits(table - position)?;

            cursor.ensure(SHARED_HEADER_BITS)?;
            let first_shared_object_number = cursor.read_bits(32)?;
            let first_shared_location = cursor.read_bits(32)?;
            let first_page_shared_count = cursor.read_bits(32)?;
            let shared_object_count = cursor.read_bits(32)?;
            cursor.skip_bits(GROUP_OBJECTS_BITS)?;
            let least_group_length = cursor.read_bits(32)?;
            let delta_group_length_bits = cursor.read_bits(16)?;
            trace!(
                "SharedTable: First shared object {} at {}. {} of {} entries in the first page",
                first_shared_object_number,
                first_shared_location,
                first_page_shared_count,
                shared_object_count
            );

            validate_width("the shared object group length delta", delta_group_length_bits)?;
            if shared_object_count > MAX_OBJECT_NUMBER {
                return Err(HintErr::Limit {
                    field: "shared object entries",
                    value: shared_object_count.into(),
                    limit: MAX_OBJECT_NUMBER.into(),
                });
            }
            let first_shared_location =
                linearized.hints_offset_to_file_offset(first_shared_location)?;
            let first_page_object_number = linearized.first_page_object_number();

            let required = field_bits(
                shared_object_count,
                delta_group_length_bits,
                "shared object group lengths",
            )?;
            // The group lengths and one signature flag per entry
            cursor.ensure(BitCount::from(required) + BitCount::from(shared_object_count))?;

            let capacity = shared_object_count as usize;
            let mut numbers = Vec::with_capacity(capacity);
            let mut lengths = Vec::with_capacity(capacity);
            let mut offsets = Vec::with_capacity(capacity + 1);
            let mut next_offset = first_page_object_offset;
            for index in 0..shared_object_count {
                let length = checked_add(
                    cursor.read_bits(delta_group_length_bits)?,
                    least_group_length,
                    "shared object group length",
                )?;
                let number = if index < first_page_shared_count {
                    checked_add(first_page_object_number, index, "shared object number")?
                } else {
                    checked_add(
                        first_shared_object_number,
                        index - first_page_shared_count,
                        "shared object number",
                    )?
                };
                let offset = if index == first_page_shared_count {
                    first_shared_location
                } else if index == 0 {
                    first_page_object_offset
                } else {
                    next_offset
                };
                next_offset =
                    checked_add(offset, FileOffset::from(length), "shared object offset")?;

                numbers.push(number);
                lengths.push(length);
                offsets.push(offset);
            }
            offsets.push(next_offset);

            // The signature flags are of no use for availability checks
            cursor.byte_align();
            cursor.skip_bits(shared_object_count.into())?;
            cursor.byte_align();

            debug!(
                "SharedTable: {} entries, ending at bit {}",
                shared_object_count,
                cursor.position_bits()
            );
            Ok(Self {
                first_page_shared_count,
                numbers,
                offsets,
                lengths,
            })
        }
    }
}
