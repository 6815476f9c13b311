//! Output-capacity policy for one-shot decompression.
//!
//! Before any output buffer is allocated, the frame header is inspected and the
//! declared content size is checked against the caller's ceiling. This crate
//! uses the *exact-or-fail* strategy: frames that do not declare their content
//! size are rejected with [`CodecError::UnknownContentSize`] instead of being
//! sized by a conservative estimate. The declared size must be strictly less
//! than the ceiling; a frame whose content size equals the ceiling exactly is
//! rejected.

use crate::error::{CodecError, Result};

/// Compute the output capacity required to decompress `frame`.
///
/// Returns the content size declared by the frame header, after validating it
/// against `max_output_size`.
///
/// # Errors
///
/// * [`CodecError::InvalidFrame`] if the header cannot be parsed.
/// * [`CodecError::UnknownContentSize`] if the header declares no size.
/// * [`CodecError::ContentSizeTooLarge`] if the declared size is
///   `>= max_output_size` or does not fit in `usize`.
pub fn decompressed_capacity(frame: &[u8], max_output_size: usize) -> Result<usize> {
    let declared =
        zstd_safe::get_frame_content_size(frame).map_err(|_| CodecError::InvalidFrame)?;
    let size = declared.ok_or(CodecError::UnknownContentSize)?;
    if size >= max_output_size as u64 {
        return Err(CodecError::content_size_too_large(size, max_output_size));
    }
    usize::try_from(size).map_err(|_| CodecError::content_size_too_large(size, max_output_size))
}
