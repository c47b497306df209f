use ::log::debug;
use ::log::trace;

use super::error::HintErr;
use super::error::HintResult;
use super::validate_width;
use crate::arith::checked_add;
use crate::arith::field_bits;
use crate::bit::BitCursor;
use crate::linearized::Linearized;
use crate::BitCount;
use crate::FileOffset;
use crate::MAX_OBJECT_NUMBER;

/// REFERENCE: [Annex F.4.1 Page offset hint table, Table F.3]
/// The header is 36 bytes long.
pub(super) const PAGE_HEADER_BITS: BitCount = 288;
/// Items 6 through 9: the content stream offset and length columns.
const CONTENT_STREAM_BITS: BitCount = 96;
/// Item 13: the denominator of the fractional position.
const DENOMINATOR_BITS: BitCount = 16;

/// REFERENCE: [Annex F.4.1 Page offset hint table, p1012-1014]
///
/// One entry per page in every per-page array. `page_offsets` holds one more
/// entry, the end of the last page.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct PageTable {
    pub(crate) first_page_object_offset: FileOffset,
    pub(crate) delta_objects: Vec<u32>,
    pub(crate) page_lengths: Vec<u32>,
    pub(crate) page_offsets: Vec<FileOffset>,
    pub(crate) shared_object_counts: Vec<u32>,
    /// The shared object identifiers of all pages, in page order.
    pub(crate) shared_identifiers: Vec<u32>,
}

/// The fields of the page offset hint table header kept past the header.
#[derive(Debug, PartialEq, Clone, Copy)]
struct PageHeader {
    least_objects_per_page: u32,
    first_page_object_location: u32,
    delta_object_bits: u32,
    least_page_length: u32,
    delta_length_bits: u32,
    shared_ref_bits: u32,
    shared_id_bits: u32,
    shared_numerator_bits: u32,
}

impl PageHeader {
    fn read(cursor: &mut BitCursor) -> HintResult<Self> {
        cursor.ensure(PAGE_HEADER_BITS)?;
        let least_objects_per_page = cursor.read_bits(32)?;
        let first_page_object_location = cursor.read_bits(32)?;
        let delta_object_bits = cursor.read_bits(16)?;
        let least_page_length = cursor.read_bits(32)?;
        let delta_length_bits = cursor.read_bits(16)?;
        cursor.skip_bits(CONTENT_STREAM_BITS)?;
        let shared_ref_bits = cursor.read_bits(16)?;
        let shared_id_bits = cursor.read_bits(16)?;
        let shared_numerator_bits = cursor.read_bits(16)?;
        cursor.skip_bits(DENOMINATOR_BITS)?;

        validate_width("the object count delta", delta_object_bits)?;
        validate_width("the page length delta", delta_length_bits)?;
        validate_width("the shared object reference count", shared_ref_bits)?;
        validate_width("the shared object identifier", shared_id_bits)?;
        validate_width("the fractional position numerator", shared_numerator_bits)?;

        let header = Self {
            least_objects_per_page,
            first_page_object_location,
            delta_object_bits,
            least_page_length,
            delta_length_bits,
            shared_ref_bits,
            shared_id_bits,
            shared_numerator_bits,
        };
        trace!("PageHeader: {:?}", header);
        Ok(header)
    }
}

/// Read `count` fields of `width` bits each, adding `least` to every one.
fn read_column(
    cursor: &mut BitCursor,
    count: u32,
    width: u32,
    least: u32,
    field: &'static str,
) -> HintResult<Vec<u32>> {
    cursor.ensure(BitCount::from(field_bits(count, width, field)?))?;
    (0..count)
        .map(|_| Ok(checked_add(cursor.read_bits(width)?, least, field)?))
        .collect()
}

mod convert {
    use super::*;

    impl PageTable {
        /// The cursor is expected at the start of the hint stream. On
        /// success, it is left on the byte boundary following the table.
        pub(crate) fn read(cursor: &mut BitCursor, linearized: &Linearized) -> HintResult<Self> {
            let page_count = linearized.page_count();
            let header = PageHeader::read(cursor)?;
            let first_page_object_offset =
                linearized.hints_offset_to_file_offset(header.first_page_object_location)?;

            let delta_objects = read_column(
                cursor,
                page_count,
                header.delta_object_bits,
                header.least_objects_per_page,
                "page object counts",
            )?;
            cursor.byte_align();

            let page_lengths = read_column(
                cursor,
                page_count,
                header.delta_length_bits,
                header.least_page_length,
                "page lengths",
            )?;
            let page_offsets = page_offsets(linearized, first_page_object_offset, &page_lengths)?;
            cursor.byte_align();

            let shared_object_counts = read_column(
                cursor,
                page_count,
                header.shared_ref_bits,
                0,
                "shared object reference counts",
            )?;
            cursor.byte_align();
            let identifier_count = shared_object_counts
                .iter()
                .map(|&count| u64::from(count))
                .sum::<u64>();
            if identifier_count > u64::from(MAX_OBJECT_NUMBER) {
                return Err(HintErr::Limit {
                    field: "shared object references",
                    value: identifier_count,
                    limit: MAX_OBJECT_NUMBER.into(),
                });
            }

            let mut shared_identifiers = Vec::with_capacity(identifier_count as usize);
            for &count in shared_object_counts.iter() {
                shared_identifiers.extend(read_column(
                    cursor,
                    count,
                    header.shared_id_bits,
                    0,
                    "shared object identifiers",
                )?);
            }
            cursor.byte_align();

            // The fractional positions are of no use for availability checks
            for &count in shared_object_counts.iter() {
                let bits = field_bits(count, header.shared_numerator_bits, "numerators")?;
                cursor.skip_bits(bits.into())?;
            }
            cursor.byte_align();

            // A second page length column, only relevant to content streams
            let bits = field_bits(page_count, header.delta_length_bits, "page lengths")?;
            cursor.skip_bits(bits.into())?;
            cursor.byte_align();

            debug!(
                "PageTable: {} pages, {} shared object references, ending at bit {}",
                page_count,
                identifier_count,
                cursor.position_bits()
            );
            Ok(Self {
                first_page_object_offset,
                delta_objects,
                page_lengths,
                page_offsets,
                shared_object_counts,
                shared_identifiers,
            })
        }
    }

    /// The first page sits at `first_page_object_offset`, ahead of `/E`. The
    /// remaining pages follow one another starting at `/E`, skipping over the
    /// first page. A last entry marks the end of the last page.
    fn page_offsets(
        linearized: &Linearized,
        first_page_object_offset: FileOffset,
        page_lengths: &[u32],
    ) -> HintResult<Vec<FileOffset>> {
        let first_page_index = linearized.first_page_index() as usize;
        let first_page_end = linearized.first_page_end();
        let next_offset = |offsets: &[FileOffset], previous: usize| {
            checked_add(
                offsets[previous],
                FileOffset::from(page_lengths[previous]),
                "page offset",
            )
        };

        let mut offsets = Vec::with_capacity(page_lengths.len() + 1);
        for index in 0..page_lengths.len() {
            let offset = if index == first_page_index {
                first_page_object_offset
            } else if index == first_page_index + 1 {
                if index == 1 {
                    first_page_end
                } else {
                    next_offset(&offsets, index - 2)?
                }
            } else if index == 0 {
                first_page_end
            } else {
                next_offset(&offsets, index - 1)?
            };
            offsets.push(offset);
        }
        if let Some(last) = page_lengths.len().checked_sub(1) {
            let end = next_offset(&offsets, last)?;
            offsets.push(end);
        }
        Ok(offsets)
    }
}
