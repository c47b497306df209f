use ::log::trace;

use self::error::BitErr;
use self::error::BitResult;
use crate::BitCount;
use crate::Byte;
use crate::MAX_FIELD_BITS;

/// A forward-only reader of big-endian bit fields.
///
/// REFERENCE: [Annex F.3 Hint tables, p1011]
/// Hint table fields are packed most-significant bit first, without padding
/// between consecutive fields of the same table. Each table starts on a byte
/// boundary.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct BitCursor<'buffer> {
    buffer: &'buffer [Byte],
    position: BitCount,
    total_bits: BitCount,
}

impl BitCursor<'_> {
    pub(crate) fn remaining_bits(&self) -> BitCount {
        // position never exceeds total_bits
        self.total_bits - self.position
    }

    pub(crate) fn position_bits(&self) -> BitCount {
        self.position
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.position == self.total_bits
    }

    /// Fail unless at least `count` bits remain.
    pub(crate) fn ensure(&self, count: BitCount) -> BitResult<()> {
        let remaining = self.remaining_bits();
        if count > remaining {
            return Err(BitErr::NotEnoughBits {
                position: self.position,
                requested: count,
                remaining,
            });
        }
        Ok(())
    }

    /// Read a field of `width` bits, 0 ..= 32. A zero-width field reads as 0
    /// without moving the cursor.
    pub(crate) fn read_bits(&mut self, width: u32) -> BitResult<u32> {
        if width > MAX_FIELD_BITS {
            return Err(BitErr::InvalidWidth(width));
        }
        self.ensure(BitCount::from(width))?;

        let mut value = 0u64;
        let mut pending = width;
        while pending > 0 {
            let index = usize::try_from(self.position / 8)
                .map_err(|_| BitErr::OutOfBuffer(self.position))?;
            let byte = *self
                .buffer
                .get(index)
                .ok_or(BitErr::OutOfBuffer(self.position))?;
            let used = (self.position % 8) as u32;
            let available = 8 - used;
            let take = pending.min(available);
            let bits = (u32::from(byte) >> (available - take)) & ((1 << take) - 1);
            value = (value << take) | u64::from(bits);
            pending -= take;
            self.position += BitCount::from(take);
        }
        // At most 32 bits were accumulated
        Ok(value as u32)
    }

    pub(crate) fn skip_bits(&mut self, count: BitCount) -> BitResult<()> {
        self.ensure(count)?;
        self.position += count;
        Ok(())
    }

    /// Move to the next byte boundary, if not already on one.
    pub(crate) fn byte_align(&mut self) {
        let aligned = (self.position + 7) / 8 * 8;
        if aligned != self.position {
            trace!(
                "BitCursor: Aligning from bit {} to bit {}",
                self.position,
                aligned
            );
        }
        // total_bits is a multiple of 8, so aligning cannot pass it
        self.position = aligned;
    }
}

mod convert {
    use super::*;

    impl<'buffer> BitCursor<'buffer> {
        pub(crate) fn new(buffer: &'buffer [Byte]) -> BitResult<Self> {
            let total_bits = BitCount::try_from(buffer.len())
                .ok()
                .and_then(|len| len.checked_mul(8))
                .ok_or(BitErr::BufferTooLarge(buffer.len()))?;
            Ok(Self {
                buffer,
                position: 0,
                total_bits,
            })
        }
    }
}

pub(crate) mod error {
    use ::thiserror::Error;

    use crate::BitCount;

    pub(crate) type BitResult<T> = Result<T, BitErr>;

    #[derive(Debug, Error, PartialEq, Clone, Copy)]
    pub enum BitErr {
        #[error(
            "Not enough bits. Position: {}. Requested: {}. Remaining: {}",
            position,
            requested,
            remaining
        )]
        NotEnoughBits {
            position: BitCount,
            requested: BitCount,
            remaining: BitCount,
        },
        #[error("Invalid field width: {0}. Expected at most 32 bits")]
        InvalidWidth(u32),
        #[error("Position {0} is outside the buffer")]
        OutOfBuffer(BitCount),
        #[error("Buffer of {0} bytes is too large to address in bits")]
        BufferTooLarge(usize),
    }
}
