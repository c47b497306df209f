mod arith;
mod bit;
mod convert;
pub mod hint;
pub mod linearized;
pub mod object;
mod process;

pub use self::hint::avail::DataAvail;
pub use self::hint::avail::DownloadHints;
pub use self::hint::avail::RangeTracker;
pub use self::hint::HintTables;
pub use self::hint::PagePos;
pub use self::linearized::Linearized;
pub use self::object::Document;
pub use self::object::ObjectModel;

// Limit the size of the decoded stream to 1 GiB.
const DECODED_LIMIT: u64 = 1 << 30;

/// REFERENCE: [Annex F.3 Hint tables, Table F.3]
/// The bit widths recorded in the hint stream headers are only meaningful in
/// the range 0 through 32.
const MAX_FIELD_BITS: u32 = 32;

/// Page counts beyond this value are rejected before any page array is
/// allocated.
const MAX_PAGE_COUNT: u32 = 1 << 20;

/// Object numbers, shared object totals and the overall number of shared
/// object references are capped by this value.
const MAX_OBJECT_NUMBER: u32 = 4 * 1024 * 1024;

/// REFERENCE: [7.5.1 General, p53]
/// Byte offsets are stored as u64 regardless of the platform's pointer width.
/// They are converted to `usize` only when indexing a buffer.
pub type FileOffset = u64;
/// REFERENCE: [3.33 indirect object, p10]
/// Hint tables encode object numbers in at most 32 bits.
pub type ObjectNumber = u32;
/// Zero-based page index, as used by the `/P` entry of the linearization
/// parameter dictionary.
pub type PageIndex = u32;
/// A position or a length measured in bits.
type BitCount = u64;
/// REFERENCE: [4.7 byte, p7]
pub type Byte = u8;
