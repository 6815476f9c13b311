//! One-shot buffer compression and decompression.
//!
//! A [`Codec`] owns one reusable algorithm context per direction, amortizing
//! context construction across calls. Methods take `&mut self`, so a single
//! codec can never be entered re-entrantly; callers that want concurrent
//! one-shot calls create one codec per thread of execution, or use the
//! module-level [`compress`]/[`decompress`] functions which build a short-lived
//! context per call.

use zstd_safe::{CCtx, DCtx};

use crate::bounds::decompressed_capacity;
use crate::error::{CodecError, Result};
use crate::{Level, MAX_INPUT_SIZE};

fn algorithm_error(code: zstd_safe::ErrorCode) -> CodecError {
    CodecError::algorithm(zstd_safe::get_error_name(code))
}

fn check_input_size(data: &[u8]) -> Result<()> {
    if data.len() > MAX_INPUT_SIZE {
        return Err(CodecError::input_too_large(data.len(), MAX_INPUT_SIZE));
    }
    Ok(())
}

/// A one-shot codec with reusable per-direction algorithm contexts.
pub struct Codec {
    cctx: CCtx<'static>,
    dctx: DCtx<'static>,
}

impl Codec {
    /// Create a codec with fresh contexts.
    pub fn new() -> Self {
        Self {
            cctx: CCtx::create(),
            dctx: DCtx::create(),
        }
    }

    /// Compress a complete buffer at the given level.
    ///
    /// The output is sized by the algorithm's worst-case bound, then trimmed to
    /// exactly the produced byte count.
    ///
    /// # Errors
    ///
    /// [`CodecError::InputTooLarge`] if `data` exceeds [`MAX_INPUT_SIZE`],
    /// [`CodecError::Algorithm`] if the algorithm reports a failure.
    pub fn compress(&mut self, data: &[u8], level: Level) -> Result<Vec<u8>> {
        check_input_size(data)?;
        let bound = zstd_safe::compress_bound(data.len());
        let mut output = Vec::with_capacity(bound);
        self.cctx
            .compress(&mut output, data, level.get())
            .map_err(algorithm_error)?;
        Ok(output)
    }

    /// Decompress a complete frame, allocating exactly the declared content
    /// size.
    ///
    /// The declared size must be strictly less than `max_output_size`; see
    /// [`crate::bounds`] for the policy. The returned buffer holds only the
    /// bytes actually produced.
    ///
    /// # Errors
    ///
    /// [`CodecError::InputTooLarge`], the bound-checking errors of
    /// [`crate::bounds::decompressed_capacity`], or [`CodecError::Algorithm`]
    /// if decompression itself fails.
    pub fn decompress(&mut self, data: &[u8], max_output_size: usize) -> Result<Vec<u8>> {
        check_input_size(data)?;
        let capacity = decompressed_capacity(data, max_output_size)?;
        let mut output = Vec::with_capacity(capacity);
        self.dctx
            .decompress(&mut output, data)
            .map_err(algorithm_error)?;
        Ok(output)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

/// Compress a complete buffer with a short-lived context.
///
/// See [`Codec::compress`] for semantics.
pub fn compress(data: &[u8], level: Level) -> Result<Vec<u8>> {
    Codec::new().compress(data, level)
}

/// Decompress a complete frame with a short-lived context.
///
/// See [`Codec::decompress`] for semantics.
pub fn decompress(data: &[u8], max_output_size: usize) -> Result<Vec<u8>> {
    Codec::new().decompress(data, max_output_size)
}
