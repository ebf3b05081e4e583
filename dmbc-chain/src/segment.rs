//! The segment engine: the single mechanism through which every
//! variable-length field in this format is encoded.
//!
//! An object's encoding is a fixed-size header followed by a tail of
//! variable-length payloads. Inside the header, a variable-length field is
//! represented by an 8-byte [`SegmentPointer`] `(offset: u32, length: u32)`
//! little-endian pair; `offset` is measured from the start of the
//! *enclosing* object, and `length` is the payload's byte length. The
//! payload itself is appended to the tail and the two are concatenated at
//! [`SegmentWriter::finish`].
//!
//! Nested objects (an asset list inside an offer, say) are handled by
//! encoding the nested object into its own flat buffer first and handing
//! that buffer to the parent's [`SegmentWriter::push_segment`] as opaque
//! payload bytes — the outer pointer then naturally covers both the nested
//! headers and their own trailing payloads, per the framing rule.
//!
//! `offset` is relative to the start of the enclosing object, i.e. the
//! start of its header — not the start of the tail. Because
//! [`SegmentWriter::push_segment`] is normally called before every field
//! that follows it in the header has been written, the final header size
//! isn't known until [`SegmentWriter::finish`]; pointers are therefore
//! written as placeholders and patched with their absolute offset once
//! the header is complete.

use tracing::trace;

use crate::codec::DmbcEncode;

/// An inline `(offset, length)` locator, always 8 bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentPointer {
    pub offset: u32,
    pub length: u32,
}

impl SegmentPointer {
    pub const ENCODED_LEN: usize = 8;

    /// True iff this pointer stays within `enclosing_size` bytes — the
    /// segment-closure property every encoded object must satisfy.
    pub fn is_closed_within(&self, enclosing_size: usize) -> bool {
        (self.offset as u64 + self.length as u64) <= enclosing_size as u64
    }
}

impl DmbcEncode for SegmentPointer {
    fn dmbc_encode(&self, target: &mut Vec<u8>) {
        self.offset.dmbc_encode(target);
        self.length.dmbc_encode(target);
    }
}

/// Accumulates a header region and a tail region, in a single
/// depth-first pass, then concatenates them on [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct SegmentWriter {
    header: Vec<u8>,
    tail: Vec<u8>,
    /// (position of the placeholder pointer in `header`, offset within
    /// `tail`, payload length) — patched into absolute offsets at `finish`.
    pending: Vec<(usize, u32, u32)>,
}

impl SegmentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `bytes` directly into the fixed-header region. Used for
    /// every inline fixed-width field (keys, amounts, inline structs).
    pub fn push_field(&mut self, bytes: &[u8]) {
        self.header.extend_from_slice(bytes);
    }

    /// Appends `payload` to the tail and reserves an 8-byte segment
    /// pointer in the header pointing to it. The pointer's final offset,
    /// relative to the start of this object, is resolved at `finish`
    /// once the header's total size is known.
    pub fn push_segment(&mut self, payload: &[u8]) {
        let tail_offset = self.tail.len() as u32;
        let length = payload.len() as u32;
        self.tail.extend_from_slice(payload);

        let header_pos = self.header.len();
        self.header
            .extend_from_slice(&[0u8; SegmentPointer::ENCODED_LEN]);
        self.pending.push((header_pos, tail_offset, length));

        trace!(header_pos, tail_offset, length, "reserved segment pointer");
    }

    pub fn finish(mut self) -> Vec<u8> {
        let header_len = self.header.len() as u32;
        for (header_pos, tail_offset, length) in &self.pending {
            let ptr = SegmentPointer {
                offset: header_len + tail_offset,
                length: *length,
            };
            let encoded = ptr.dmbc_encode_to_vec();
            self.header[*header_pos..*header_pos + SegmentPointer::ENCODED_LEN]
                .copy_from_slice(&encoded);
        }

        trace!(
            header_len,
            tail_len = self.tail.len(),
            pending = self.pending.len(),
            "resolved segment pointers"
        );

        let mut out = self.header;
        out.extend_from_slice(&self.tail);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment_offset_starts_after_the_header() {
        let mut w = SegmentWriter::new();
        w.push_field(&[0xAA, 0xBB, 0xCC]);
        w.push_segment(b"hello");
        let out = w.finish();
        // header: 3 literal bytes + 8-byte pointer = 11 bytes
        let offset = u32::from_le_bytes(out[3..7].try_into().unwrap());
        let length = u32::from_le_bytes(out[7..11].try_into().unwrap());
        assert_eq!(offset, 11);
        assert_eq!(length, 5);
        assert_eq!(&out[11..16], b"hello");
    }

    #[test]
    fn successive_segments_are_appended_in_insertion_order() {
        let mut w = SegmentWriter::new();
        w.push_segment(b"abc");
        w.push_segment(b"defgh");
        let out = w.finish();
        // header is two 8-byte pointers = 16 bytes
        let first_offset = u32::from_le_bytes(out[0..4].try_into().unwrap());
        let first_length = u32::from_le_bytes(out[4..8].try_into().unwrap());
        let second_offset = u32::from_le_bytes(out[8..12].try_into().unwrap());
        let second_length = u32::from_le_bytes(out[12..16].try_into().unwrap());
        assert_eq!((first_offset, first_length), (16, 3));
        assert_eq!((second_offset, second_length), (19, 5));
        assert_eq!(&out[16..19], b"abc");
        assert_eq!(&out[19..24], b"defgh");
    }

    #[test]
    fn finish_concatenates_header_then_tail() {
        let mut w = SegmentWriter::new();
        w.push_field(&[0xAA, 0xBB]);
        w.push_segment(b"xyz");
        let out = w.finish();
        assert_eq!(&out[0..2], &[0xAA, 0xBB]);
        // header is 2 literal bytes + 8-byte pointer = 10 bytes
        assert_eq!(&out[10..13], b"xyz");
    }

    #[test]
    fn pointer_closure_rejects_overrun() {
        let ptr = SegmentPointer { offset: 10, length: 5 };
        assert!(ptr.is_closed_within(15));
        assert!(!ptr.is_closed_within(14));
    }
}
