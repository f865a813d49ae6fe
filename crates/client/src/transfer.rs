//! Chunked binary transfer core
//!
//! Both attachment directions move payloads in fixed-size chunks tagged
//! with their byte offset. The remote side assembles by offset, so chunks
//! are produced in strictly increasing, contiguous order and each transfer
//! is a single linear pass: any failed chunk aborts the whole transfer.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use twentyfour_domain::{Result, TwentyFourError};

/// One contiguous sub-range of a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpan {
    pub offset: usize,
    pub len: usize,
}

impl ChunkSpan {
    /// End offset (exclusive).
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Iterator over the chunk spans of a payload of `total` bytes.
///
/// Spans cover `[0, total)` exactly once each with no gaps or overlaps;
/// every span is `chunk_size` bytes except possibly the last, which carries
/// the remainder. A zero-length payload yields no spans at all.
#[derive(Debug, Clone)]
pub struct ChunkPlan {
    total: usize,
    chunk_size: usize,
    offset: usize,
}

impl ChunkPlan {
    /// Plan a transfer of `total` bytes in chunks of at most `chunk_size`.
    ///
    /// # Errors
    /// Returns [`TwentyFourError::InvalidInput`] when `chunk_size` is zero.
    pub fn new(total: usize, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(TwentyFourError::InvalidInput("chunk size must be non-zero".into()));
        }
        Ok(Self { total, chunk_size, offset: 0 })
    }

    /// Number of chunks the plan will produce.
    pub fn chunk_count(&self) -> usize {
        self.total.div_ceil(self.chunk_size)
    }
}

impl Iterator for ChunkPlan {
    type Item = ChunkSpan;

    fn next(&mut self) -> Option<ChunkSpan> {
        if self.offset >= self.total {
            return None;
        }
        let len = self.chunk_size.min(self.total - self.offset);
        let span = ChunkSpan { offset: self.offset, len };
        self.offset += len;
        Some(span)
    }
}

/// Encode one chunk for transport.
pub fn encode_chunk(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode one chunk from its transport encoding.
pub fn decode_chunk(text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text.trim())
        .map_err(|err| TwentyFourError::Soap(format!("invalid chunk encoding: {err}")))
}
