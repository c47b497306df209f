pub mod avail;
pub(crate) mod error;
pub(crate) mod page;
pub(crate) mod shared;

use ::log::debug;
use ::log::warn;

use self::avail::DownloadHints;
pub use self::error::HintErr;
use self::error::HintResult;
use self::page::PageTable;
use self::page::PAGE_HEADER_BITS;
use self::shared::SharedTable;
use self::shared::SHARED_HEADER_BITS;
use crate::bit::BitCursor;
use crate::linearized::Linearized;
use crate::object::ObjectModel;
use crate::FileOffset;
use crate::ObjectNumber;
use crate::PageIndex;
use crate::MAX_FIELD_BITS;

/// REFERENCE: [Table F.1, Primary hint stream dictionary, S]
/// The offset of the shared object hint table within the decoded hint stream.
pub(crate) const KEY_S: &str = "S";

/// Both table headers must fit in the decoded hint stream.
const MIN_HINT_STREAM_LENGTH: u64 = (PAGE_HEADER_BITS + SHARED_HEADER_BITS) / 8;

fn validate_width(field: &'static str, width: u32) -> HintResult<()> {
    if width > MAX_FIELD_BITS {
        return Err(HintErr::InvalidWidth { field, width });
    }
    Ok(())
}

/// The byte range of a page and the object number of its page object.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PagePos {
    pub offset: FileOffset,
    pub length: u64,
    pub object_number: ObjectNumber,
}

/// REFERENCE: [Annex F.3 Hint tables, p1011]
///
/// The decoded page offset and shared object hint tables of a linearized
/// document. Both tables are decoded together and are immutable afterwards.
/// There is no partially decoded state.
#[derive(Debug, PartialEq, Clone)]
pub struct HintTables {
    linearized: Linearized,
    page: PageTable,
    shared: SharedTable,
}

mod process {
    use super::*;

    impl HintTables {
        pub fn linearized(&self) -> &Linearized {
            &self.linearized
        }

        pub fn page_count(&self) -> u32 {
            self.linearized.page_count()
        }

        pub fn first_page_index(&self) -> PageIndex {
            self.linearized.first_page_index()
        }

        pub fn first_page_object_offset(&self) -> FileOffset {
            self.page.first_page_object_offset
        }

        /// One offset per page followed by the end of the last page.
        pub fn page_offsets(&self) -> &[FileOffset] {
            &self.page.page_offsets
        }

        pub fn page_lengths(&self) -> &[u32] {
            &self.page.page_lengths
        }

        /// The number of objects in each page.
        pub fn delta_objects(&self) -> &[u32] {
            &self.page.delta_objects
        }

        pub fn shared_object_counts(&self) -> &[u32] {
            &self.page.shared_object_counts
        }

        /// The indices into the shared object table referenced by page
        /// `index`.
        pub fn page_shared_identifiers(&self, index: PageIndex) -> Option<&[u32]> {
            let index = usize::try_from(index).ok()?;
            let counts = &self.page.shared_object_counts;
            let start = counts
                .get(..index)?
                .iter()
                .map(|&count| count as usize)
                .sum::<usize>();
            let end = start.checked_add(*counts.get(index)? as usize)?;
            self.page.shared_identifiers.get(start..end)
        }

        pub fn first_page_shared_count(&self) -> u32 {
            self.shared.first_page_shared_count
        }

        pub fn shared_object_numbers(&self) -> &[ObjectNumber] {
            &self.shared.numbers
        }

        /// One offset per shared object entry followed by the end of the last
        /// entry.
        pub fn shared_object_offsets(&self) -> &[FileOffset] {
            &self.shared.offsets
        }

        pub fn shared_object_lengths(&self) -> &[u32] {
            &self.shared.lengths
        }

        /// The page object of the first page is `/O`. The objects of the
        /// remaining pages are numbered from 1 in page order.
        pub fn page_pos(&self, index: PageIndex) -> Option<PagePos> {
            let position = usize::try_from(index).ok()?;
            let offset = *self.page.page_offsets.get(position)?;
            let length = u64::from(*self.page.page_lengths.get(position)?);

            let first_page_index = self.first_page_index() as usize;
            let object_number = if position == first_page_index {
                self.linearized.first_page_object_number()
            } else {
                self.page.delta_objects[..position]
                    .iter()
                    .enumerate()
                    .filter(|(page, _)| *page != first_page_index)
                    .try_fold(1u32, |object_number, (_, &count)| {
                        object_number.checked_add(count)
                    })?
            };
            Some(PagePos {
                offset,
                length,
                object_number,
            })
        }
    }
}

mod convert {
    use super::*;

    impl HintTables {
        /// Decode the primary hint stream.
        ///
        /// REFERENCE: [Annex F.3 Hint tables, p1011]
        /// The page offset hint table comes first. The shared object hint
        /// table starts at the byte given by `/S`.
        pub fn load_hint_stream<M: ObjectModel>(
            model: &M,
            linearized: &Linearized,
            stream: &M::Stream,
        ) -> Result<Self, HintErr> {
            let dictionary = model.stream_dictionary(stream);
            let shared_offset = model
                .get_int(dictionary, KEY_S)
                .ok_or(HintErr::MissingEntry(KEY_S))?;
            let shared_offset = u64::try_from(shared_offset)
                .ok()
                .filter(|&shared_offset| shared_offset > 0)
                .ok_or(HintErr::SharedOffset(shared_offset))?;

            let data = model.decode_stream_bytes(stream)?;
            let size = data.len() as u64;
            if size < MIN_HINT_STREAM_LENGTH || size < shared_offset {
                return Err(HintErr::TooShort {
                    size,
                    required: MIN_HINT_STREAM_LENGTH.max(shared_offset),
                });
            }

            let mut cursor = BitCursor::new(&data)?;
            let page = PageTable::read(&mut cursor, linearized)?;
            let shared = SharedTable::read(
                &mut cursor,
                shared_offset,
                linearized,
                page.first_page_object_offset,
            )?;
            if !cursor.is_eof() {
                // Other hint tables, such as the outline hint table
                debug!(
                    "HintTables: Ignoring {} bits past the shared object hint table",
                    cursor.remaining_bits()
                );
            }
            Ok(Self {
                linearized: *linearized,
                page,
                shared,
            })
        }

        /// Decode the hint tables of a document, if they are usable.
        ///
        /// `None` means the document is to be loaded without hints. This is
        /// the case for single page documents, when the primary hint stream
        /// is not downloaded yet, in which case its range is requested, and
        /// when the hint stream is malformed.
        pub fn parse<M, H>(
            model: &M,
            linearized: &Linearized,
            stream: &M::Stream,
            hints: &mut H,
        ) -> Option<Self>
        where
            M: ObjectModel,
            H: DownloadHints + ?Sized,
        {
            if linearized.page_count() <= 1 {
                debug!("HintTables: Single page document");
                return None;
            }
            if !hints.is_range_available(linearized.hint_start(), linearized.hint_length()) {
                debug!(
                    "HintTables: Hint stream at {} not available",
                    linearized.hint_start()
                );
                return None;
            }
            match Self::load_hint_stream(model, linearized, stream) {
                Ok(hint_tables) => Some(hint_tables),
                Err(err) => {
                    warn!("HintTables: Discarding the hint tables: {}", err);
                    None
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use ::pretty_assertions::assert_eq;

    use super::*;
    use crate::arith::error::ArithErr;
    use crate::assert_err_eq;
    use crate::bit::error::BitErr;
    use crate::linearized::tests::ten_pages_dictionary;
    use crate::object::Dictionary;
    use crate::object::Document;
    use crate::object::Stream;
    use crate::process::filter::KEY_FILTER;
    use crate::Byte;

    /// Writes big-endian bit fields, the inverse of `BitCursor`.
    #[derive(Debug, Default)]
    pub(crate) struct BitWriter {
        bytes: Vec<Byte>,
        position: u64,
    }

    impl BitWriter {
        pub(crate) fn write(&mut self, value: u32, width: u32) {
            for bit in (0..width).rev() {
                if self.position % 8 == 0 {
                    self.bytes.push(0);
                }
                // Widths past 32 bits write leading zeros
                if value.checked_shr(bit).unwrap_or(0) & 1 == 1 {
                    let last = self.bytes.last_mut().unwrap();
                    *last |= 0x80 >> (self.position % 8);
                }
                self.position += 1;
            }
        }

        pub(crate) fn align(&mut self) {
            self.position = (self.position + 7) / 8 * 8;
        }

        pub(crate) fn len(&self) -> usize {
            self.bytes.len()
        }
    }

    /// The raw content of a hint stream. Lengths and counts are stored as
    /// deltas, exactly as they are encoded.
    #[derive(Debug, Clone)]
    pub(crate) struct HintLayout {
        pub(crate) least_objects_per_page: u32,
        pub(crate) first_page_object_location: u32,
        pub(crate) delta_object_bits: u32,
        pub(crate) least_page_length: u32,
        pub(crate) delta_length_bits: u32,
        pub(crate) shared_ref_bits: u32,
        pub(crate) shared_id_bits: u32,
        pub(crate) shared_numerator_bits: u32,
        pub(crate) delta_objects: Vec<u32>,
        pub(crate) delta_lengths: Vec<u32>,
        pub(crate) shared_identifiers: Vec<Vec<u32>>,
        pub(crate) first_shared_object_number: u32,
        pub(crate) first_shared_location: u32,
        pub(crate) first_page_shared_count: u32,
        pub(crate) least_group_length: u32,
        pub(crate) delta_group_length_bits: u32,
        pub(crate) delta_group_lengths: Vec<u32>,
    }

    impl HintLayout {
        /// Returns the hint stream data and the offset of the shared object
        /// hint table.
        pub(crate) fn encode(&self) -> (Vec<Byte>, u64) {
            let mut writer = BitWriter::default();
            writer.write(self.least_objects_per_page, 32);
            writer.write(self.first_page_object_location, 32);
            writer.write(self.delta_object_bits, 16);
            writer.write(self.least_page_length, 32);
            writer.write(self.delta_length_bits, 16);
            // Content stream columns
            writer.write(0, 32);
            writer.write(0, 16);
            writer.write(0, 32);
            writer.write(0, 16);
            writer.write(self.shared_ref_bits, 16);
            writer.write(self.shared_id_bits, 16);
            writer.write(self.shared_numerator_bits, 16);
            writer.write(1, 16);

            for &delta in &self.delta_objects {
                writer.write(delta, self.delta_object_bits);
            }
            writer.align();
            for &delta in &self.delta_lengths {
                writer.write(delta, self.delta_length_bits);
            }
            writer.align();
            for identifiers in &self.shared_identifiers {
                writer.write(identifiers.len() as u32, self.shared_ref_bits);
            }
            writer.align();
            for &identifier in self.shared_identifiers.iter().flatten() {
                writer.write(identifier, self.shared_id_bits);
            }
            writer.align();
            for _ in self.shared_identifiers.iter().flatten() {
                writer.write(0, self.shared_numerator_bits);
            }
            writer.align();
            for &delta in &self.delta_lengths {
                writer.write(delta, self.delta_length_bits);
            }
            writer.align();

            let shared_offset = writer.len() as u64;
            writer.write(self.first_shared_object_number, 32);
            writer.write(self.first_shared_location, 32);
            writer.write(self.first_page_shared_count, 32);
            writer.write(self.delta_group_lengths.len() as u32, 32);
            writer.write(1, 16);
            writer.write(self.least_group_length, 32);
            writer.write(self.delta_group_length_bits, 16);
            for &delta in &self.delta_group_lengths {
                writer.write(delta, self.delta_group_length_bits);
            }
            writer.align();
            for _ in &self.delta_group_lengths {
                writer.write(0, 1);
            }
            writer.align();

            (writer.bytes, shared_offset)
        }

        pub(crate) fn stream(&self) -> Stream {
            let (data, shared_offset) = self.encode();
            Stream::new(Dictionary::new().with(KEY_S, shared_offset as i64), data)
        }
    }

    /// The hint tables of the document described by `ten_pages_dictionary`.
    ///
    /// | page | offset | length | objects | shared identifiers |
    /// |------|--------|--------|---------|--------------------|
    /// | 0    | 4000   | 700    | 5       | 2, 0               |
    /// | 1    | 4700   | 600    | 7       |                    |
    /// | 2    | 5300   | 650    | 6       |                    |
    /// | 3    | 1250   | 2750   | 15      | 0, 1               |
    /// | 4    | 5950   | 700    | 8       |                    |
    /// | 5    | 6650   | 600    | 5       | 3                  |
    /// | 6    | 7250   | 800    | 6       |                    |
    /// | 7    | 8050   | 650    | 7       | 2                  |
    /// | 8    | 8700   | 600    | 5       |                    |
    /// | 9    | 9300   | 700    | 6       |                    |
    ///
    /// | entry | object | offset | length |
    /// |-------|--------|--------|--------|
    /// | 0     | 20     | 1250   | 100    |
    /// | 1     | 21     | 1350   | 150    |
    /// | 2     | 40     | 10000  | 400    |
    /// | 3     | 41     | 10400  | 500    |
    pub(crate) fn ten_pages_layout() -> HintLayout {
        HintLayout {
            least_objects_per_page: 5,
            // Past the hint stream at 1000, so 200 bytes are added
            first_page_object_location: 1050,
            delta_object_bits: 4,
            least_page_length: 600,
            delta_length_bits: 12,
            shared_ref_bits: 2,
            shared_id_bits: 2,
            shared_numerator_bits: 3,
            delta_objects: vec![0, 2, 1, 10, 3, 0, 1, 2, 0, 1],
            delta_lengths: vec![100, 0, 50, 2150, 100, 0, 200, 50, 0, 100],
            shared_identifiers: vec![
                vec![2, 0],
                vec![],
                vec![],
                vec![0, 1],
                vec![],
                vec![3],
                vec![],
                vec![2],
                vec![],
                vec![],
            ],
            first_shared_object_number: 40,
            first_shared_location: 9800,
            first_page_shared_count: 2,
            least_group_length: 100,
            delta_group_length_bits: 9,
            delta_group_lengths: vec![0, 50, 300, 400],
        }
    }

    pub(crate) fn ten_pages_linearized() -> Linearized {
        Linearized::new(&Document::new(), &ten_pages_dictionary()).unwrap()
    }

    pub(crate) fn ten_pages_hint_tables() -> HintTables {
        let stream = ten_pages_layout().stream();
        HintTables::load_hint_stream(&Document::new(), &ten_pages_linearized(), &stream).unwrap()
    }

    fn linearized_with(page_count: i64, first_page_index: i64) -> Linearized {
        let dictionary = Dictionary::new()
            .with("N", page_count)
            .with("O", 20i64)
            .with("E", 4000i64)
            .with("H", vec![1000i64, 200])
            .with("P", first_page_index);
        Linearized::new(&Document::new(), &dictionary).unwrap()
    }

    fn load(layout: &HintLayout, linearized: &Linearized) -> Result<HintTables, HintErr> {
        HintTables::load_hint_stream(&Document::new(), linearized, &layout.stream())
    }

    #[test]
    fn hint_tables_valid() {
        let hint_tables = ten_pages_hint_tables();
        assert_eq!(hint_tables.page_count(), 10);
        assert_eq!(hint_tables.first_page_index(), 3);
        assert_eq!(hint_tables.first_page_object_offset(), 1250);
        assert_eq!(
            hint_tables.page_offsets(),
            [4000, 4700, 5300, 1250, 5950, 6650, 7250, 8050, 8700, 9300, 10000]
        );
        assert_eq!(
            hint_tables.page_lengths(),
            [700, 600, 650, 2750, 700, 600, 800, 650, 600, 700]
        );
        assert_eq!(hint_tables.delta_objects(), [5, 7, 6, 15, 8, 5, 6, 7, 5, 6]);
        assert_eq!(
            hint_tables.shared_object_counts(),
            [2, 0, 0, 2, 0, 1, 0, 1, 0, 0]
        );
        assert_eq!(hint_tables.page_shared_identifiers(0), Some([2, 0].as_slice()));
        assert_eq!(hint_tables.page_shared_identifiers(1), Some([].as_slice()));
        assert_eq!(hint_tables.page_shared_identifiers(3), Some([0, 1].as_slice()));
        assert_eq!(hint_tables.page_shared_identifiers(7), Some([2].as_slice()));
        assert_eq!(hint_tables.page_shared_identifiers(10), None);

        assert_eq!(hint_tables.first_page_shared_count(), 2);
        assert_eq!(hint_tables.shared_object_numbers(), [20, 21, 40, 41]);
        assert_eq!(
            hint_tables.shared_object_offsets(),
            [1250, 1350, 10000, 10400, 10900]
        );
        assert_eq!(hint_tables.shared_object_lengths(), [100, 150, 400, 500]);
    }

    #[test]
    fn page_pos_valid() {
        let hint_tables = ten_pages_hint_tables();
        let page_pos = |offset, length, object_number| {
            Some(PagePos {
                offset,
                length,
                object_number,
            })
        };
        // The first page
        assert_eq!(hint_tables.page_pos(3), page_pos(1250, 2750, 20));
        assert_eq!(hint_tables.page_pos(0), page_pos(4000, 700, 1));
        assert_eq!(hint_tables.page_pos(1), page_pos(4700, 600, 6));
        assert_eq!(hint_tables.page_pos(2), page_pos(5300, 650, 13));
        // The objects of the first page are not counted
        assert_eq!(hint_tables.page_pos(4), page_pos(5950, 700, 19));
        assert_eq!(hint_tables.page_pos(9), page_pos(9300, 700, 50));
        assert_eq!(hint_tables.page_pos(10), None);
    }

    #[test]
    fn hint_tables_first_page_zero_valid() {
        // With the first page at index 0, page offsets never decrease
        let mut layout = ten_pages_layout();
        layout.delta_lengths[0] = 2150;
        layout.delta_lengths[3] = 50;
        let hint_tables = load(&layout, &linearized_with(10, 0)).unwrap();
        let offsets = hint_tables.page_offsets();
        assert_eq!(
            offsets,
            [1250, 4000, 4600, 5250, 5900, 6600, 7200, 8000, 8650, 9250, 9950]
        );
        assert!(offsets.windows(2).all(|pair| pair[0] <= pair[1]));
        let offsets = hint_tables.shared_object_offsets();
        assert!(offsets[1..].windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(hint_tables.page_pos(0).map(|pos| pos.object_number), Some(20));
        assert_eq!(hint_tables.page_pos(1).map(|pos| pos.object_number), Some(1));

        // The first shared object entry is in the shared objects section
        let mut layout = ten_pages_layout();
        layout.first_page_shared_count = 0;
        layout.shared_identifiers = vec![vec![]; 10];
        let hint_tables = load(&layout, &ten_pages_linearized()).unwrap();
        assert_eq!(hint_tables.shared_object_numbers(), [40, 41, 42, 43]);
        assert_eq!(
            hint_tables.shared_object_offsets(),
            [10000, 10100, 10250, 10650, 11150]
        );

        // Zero-width fields read as zero
        let mut layout = ten_pages_layout();
        layout.delta_object_bits = 0;
        layout.shared_numerator_bits = 0;
        let hint_tables = load(&layout, &ten_pages_linearized()).unwrap();
        assert_eq!(hint_tables.delta_objects(), [5; 10]);
    }

    #[test]
    fn hint_stream_filter_valid() {
        let (data, shared_offset) = ten_pages_layout().encode();
        let dictionary = Dictionary::new()
            .with(KEY_S, shared_offset as i64)
            .with(KEY_FILTER, "FlateDecode");
        let stream = Stream::from_decoded(dictionary, data).unwrap();
        let hint_tables =
            HintTables::load_hint_stream(&Document::new(), &ten_pages_linearized(), &stream)
                .unwrap();
        assert_eq!(hint_tables, ten_pages_hint_tables());
    }

    #[test]
    fn hint_stream_invalid() {
        let linearized = ten_pages_linearized();
        let (data, shared_offset) = ten_pages_layout().encode();

        // Missing or invalid /S
        let stream = Stream::new(Dictionary::new(), data.clone());
        assert_err_eq!(
            HintTables::load_hint_stream(&Document::new(), &linearized, &stream),
            HintErr::MissingEntry(KEY_S)
        );
        let stream = Stream::new(Dictionary::new().with(KEY_S, 0i64), data.clone());
        assert_err_eq!(
            HintTables::load_hint_stream(&Document::new(), &linearized, &stream),
            HintErr::SharedOffset(0)
        );
        let stream = Stream::new(Dictionary::new().with(KEY_S, 5000i64), data.clone());
        assert_err_eq!(
            HintTables::load_hint_stream(&Document::new(), &linearized, &stream),
            HintErr::TooShort {
                size: data.len() as u64,
                required: 5000,
            }
        );
        // The shared object table cannot start inside the page table
        let stream = Stream::new(Dictionary::new().with(KEY_S, 40i64), data.clone());
        assert_err_eq!(
            HintTables::load_hint_stream(&Document::new(), &linearized, &stream),
            HintErr::SharedTableOverlap {
                table: 320,
                position: shared_offset * 8,
            }
        );
    }

    #[test]
    fn hint_stream_truncated_invalid() {
        // Truncating the hint stream at any byte fails the whole decode
        let linearized = ten_pages_linearized();
        let (data, shared_offset) = ten_pages_layout().encode();
        for length in 0..data.len() {
            let dictionary = Dictionary::new().with(KEY_S, shared_offset as i64);
            let stream = Stream::new(dictionary, data[..length].to_vec());
            let result = HintTables::load_hint_stream(&Document::new(), &linearized, &stream);
            assert!(
                matches!(
                    result,
                    Err(HintErr::Bit(BitErr::NotEnoughBits { .. }) | HintErr::TooShort { .. })
                ),
                "Length {}: {:?}",
                length,
                result
            );
        }
    }

    #[test]
    fn hint_tables_invalid() {
        let linearized = ten_pages_linearized();

        let mut layout = ten_pages_layout();
        layout.delta_length_bits = 33;
        assert_err_eq!(
            load(&layout, &linearized),
            HintErr::InvalidWidth {
                field: "the page length delta",
                width: 33,
            }
        );

        let mut layout = ten_pages_layout();
        layout.delta_group_length_bits = 0xFFFF;
        assert_err_eq!(
            load(&layout, &linearized),
            HintErr::InvalidWidth {
                field: "the shared object group length delta",
                width: 0xFFFF,
            }
        );

        // A page length overflowing 32 bits
        let mut layout = ten_pages_layout();
        layout.least_page_length = u32::MAX;
        assert_err_eq!(
            load(&layout, &linearized),
            ArithErr::Add {
                field: "page lengths",
                lhs: 100,
                rhs: u32::MAX.into(),
            }
        );

        // An object number overflowing 32 bits
        let mut layout = ten_pages_layout();
        layout.first_shared_object_number = u32::MAX;
        assert_err_eq!(
            load(&layout, &linearized),
            ArithErr::Add {
                field: "shared object number",
                lhs: u64::from(u32::MAX),
                rhs: 1,
            }
        );

        // More shared object entries than allowed
        let mut layout = ten_pages_layout();
        layout.delta_group_lengths = vec![0; 4];
        let (mut data, shared_offset) = layout.encode();
        let count = shared_offset as usize + 12;
        data[count..count + 4].copy_from_slice(&u32::MAX.to_be_bytes());
        let stream = Stream::new(Dictionary::new().with(KEY_S, shared_offset as i64), data);
        assert_err_eq!(
            HintTables::load_hint_stream(&Document::new(), &linearized, &stream),
            HintErr::Limit {
                field: "shared object entries",
                value: u32::MAX.into(),
                limit: crate::MAX_OBJECT_NUMBER.into(),
            }
        );

        // A page count far beyond the data
        let layout = ten_pages_layout();
        let result = load(&layout, &linearized_with(1 << 20, 0));
        assert!(matches!(
            result,
            Err(HintErr::Bit(BitErr::NotEnoughBits { .. }))
        ));
    }

    #[test]
    fn shared_entries_invalid() {
        // Zero-width group lengths still need a signature flag per entry
        let mut layout = ten_pages_layout();
        layout.delta_group_length_bits = 0;
        let (mut data, shared_offset) = layout.encode();
        let count = shared_offset as usize + 12;
        data[count..count + 4].copy_from_slice(&crate::MAX_OBJECT_NUMBER.to_be_bytes());
        let position = (shared_offset + 24) * 8;
        let remaining = data.len() as u64 * 8 - position;
        let stream = Stream::new(Dictionary::new().with(KEY_S, shared_offset as i64), data);
        assert_err_eq!(
            HintTables::load_hint_stream(&Document::new(), &ten_pages_linearized(), &stream),
            BitErr::NotEnoughBits {
                position,
                requested: crate::MAX_OBJECT_NUMBER.into(),
                remaining,
            }
        );
    }

    #[test]
    fn parse_valid() {
        let linearized = ten_pages_linearized();
        let stream = ten_pages_layout().stream();
        let mut requested = Vec::new();
        let mut hints = |offset: FileOffset, length: u64| {
            requested.push((offset, length));
            true
        };
        let hint_tables = HintTables::parse(&Document::new(), &linearized, &stream, &mut hints);
        assert_eq!(hint_tables, Some(ten_pages_hint_tables()));
        assert_eq!(requested, [(1000, 200)]);
    }

    #[test]
    fn parse_invalid() {
        let stream = ten_pages_layout().stream();
        let mut available = |_: FileOffset, _: u64| true;

        // A single page document has no use for hints
        let hint_tables = HintTables::parse(
            &Document::new(),
            &linearized_with(1, 0),
            &stream,
            &mut available,
        );
        assert_eq!(hint_tables, None);

        // The hint stream is not downloaded yet
        let mut unavailable = |_: FileOffset, _: u64| false;
        let hint_tables = HintTables::parse(
            &Document::new(),
            &ten_pages_linearized(),
            &stream,
            &mut unavailable,
        );
        assert_eq!(hint_tables, None);

        // A malformed hint stream is discarded
        let stream = Stream::new(Dictionary::new().with(KEY_S, 36i64), vec![0xFF; 64]);
        let hint_tables = HintTables::parse(
            &Document::new(),
            &ten_pages_linearized(),
            &stream,
            &mut available,
        );
        assert_eq!(hint_tables, None);
    }
}
