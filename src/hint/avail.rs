use ::log::debug;
use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

use super::HintTables;
use crate::FileOffset;
use crate::PageIndex;

/// Whether the bytes a page depends on have been downloaded.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DataAvail {
    Available,
    /// Some bytes are still missing. Asking again later may succeed.
    NotAvailable,
    /// The hint tables cannot locate the page. Asking again will not help.
    Error,
}

impl Display for DataAvail {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Available => write!(f, "available"),
            Self::NotAvailable => write!(f, "not available"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// The download state of the file, as seen by the availability checks.
///
/// Implementations are expected to remember ranges reported as missing, so
/// that they can be downloaded first.
pub trait DownloadHints {
    fn is_range_available(&mut self, offset: FileOffset, length: u64) -> bool;
}

impl<F> DownloadHints for F
where
    F: FnMut(FileOffset, u64) -> bool,
{
    fn is_range_available(&mut self, offset: FileOffset, length: u64) -> bool {
        self(offset, length)
    }
}

/// Downloaded byte ranges, plus the ranges asked for while missing.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct RangeTracker {
    /// Sorted, disjoint and non-adjacent `(start, end)` pairs, `end` excluded.
    available: Vec<(FileOffset, FileOffset)>,
    requested: Vec<(FileOffset, u64)>,
}

mod process {
    use super::*;

    impl RangeTracker {
        pub fn is_available(&self, offset: FileOffset, length: u64) -> bool {
            if length == 0 {
                return true;
            }
            let end = match offset.checked_add(length) {
                Some(end) => end,
                None => return false,
            };
            let index = self
                .available
                .partition_point(|&(start, _)| start <= offset);
            index
                .checked_sub(1)
                .map_or(false, |index| self.available[index].1 >= end)
        }

        /// The missing ranges in the order they were asked for.
        pub fn requested(&self) -> &[(FileOffset, u64)] {
            &self.requested
        }

        pub fn clear_requested(&mut self) {
            self.requested.clear();
        }
    }

    impl DownloadHints for RangeTracker {
        fn is_range_available(&mut self, offset: FileOffset, length: u64) -> bool {
            if self.is_available(offset, length) {
                return true;
            }
            debug!("RangeTracker: Requesting {} bytes at {}", length, offset);
            self.requested.push((offset, length));
            false
        }
    }

    impl HintTables {
        /// REFERENCE: [Annex F.4 Hint table details, p1012]
        ///
        /// A page is available once its own byte range and the ranges of the
        /// shared objects it references are. The first page is part of the
        /// first page section and is assumed available. So are the shared
        /// objects of the first page section.
        ///
        /// The first missing range is reported to `hints` and ends the check.
        pub fn check_page<H>(&self, index: PageIndex, hints: &mut H) -> DataAvail
        where
            H: DownloadHints + ?Sized,
        {
            if index == self.first_page_index() {
                return DataAvail::Available;
            }
            let position = index as usize;
            let (offset, length) = match (
                self.page.page_offsets.get(position),
                self.page.page_lengths.get(position),
            ) {
                (Some(&offset), Some(&length)) => (offset, u64::from(length)),
                _ => {
                    debug!("HintTables: Page {} out of range", index);
                    return DataAvail::Error;
                }
            };
            if length == 0 {
                debug!("HintTables: Page {} is empty", index);
                return DataAvail::Error;
            }
            if !hints.is_range_available(offset, length) {
                return DataAvail::NotAvailable;
            }

            let identifiers = match self.page_shared_identifiers(index) {
                Some(identifiers) => identifiers,
                None => return DataAvail::Error,
            };
            let first_page_object_number = self.linearized.first_page_object_number();
            let first_page_objects = u64::from(first_page_object_number)
                ..u64::from(first_page_object_number) + u64::from(self.first_page_shared_count());
            for &identifier in identifiers {
                let entry = identifier as usize;
                let number = match self.shared.numbers.get(entry) {
                    Some(&number) => number,
                    None => {
                        debug!(
                            "HintTables: Page {} references missing shared object entry {}",
                            index, identifier
                        );
                        return DataAvail::Error;
                    }
                };
                if first_page_objects.contains(&u64::from(number)) {
                    continue;
                }
                let offset = self.shared.offsets[entry];
                let length = u64::from(self.shared.lengths[entry]);
                if length == 0 {
                    debug!("HintTables: Shared object entry {} is empty", identifier);
                    return DataAvail::Error;
                }
                if !hints.is_range_available(offset, length) {
                    return DataAvail::NotAvailable;
                }
            }
            DataAvail::Available
        }
    }
}

mod convert {
    use super::*;

    impl RangeTracker {
        pub fn new() -> Self {
            Self::default()
        }

        /// Record `length` bytes at `offset` as downloaded. Overlapping and
        /// adjacent ranges are merged.
        pub fn mark_available(&mut self, offset: FileOffset, length: u64) {
            if length == 0 {
                return;
            }
            let mut start = offset;
            let mut end = offset.saturating_add(length);
            self.available.retain(|&(other_start, other_end)| {
                if other_end < start || other_start > end {
                    return true;
                }
                start = start.min(other_start);
                end = end.max(other_end);
                false
            });
            let index = self
                .available
                .partition_point(|&(other_start, _)| other_start < start);
            self.available.insert(index, (start, end));
        }
    }
}
