//! # zframe
//!
//! Bounded-chunk streaming and async one-shot Zstandard codecs.
//!
//! This crate orchestrates the Zstandard algorithm (via [`zstd_safe`]) behind
//! two calling conventions:
//!
//! - [`compress`]/[`decompress`]: one-shot transforms over complete buffers,
//!   with decompression bound-checked against a caller ceiling before any
//!   output is allocated. [`Codec`] amortizes context construction across
//!   calls; [`task::compress_async`] and [`task::Dispatcher`] run the same
//!   transforms on background threads.
//! - [`Compressor`]/[`Decompressor`]: incremental streaming sessions that
//!   accept input in arbitrary splits and deliver output through a sink in
//!   chunks bounded by a fixed window, so peak memory stays flat regardless
//!   of input size.
//!
//! ## Example
//!
//! ```rust,no_run
//! use zframe::{compress, decompress, Level};
//!
//! let data = b"Hello, Zstandard!";
//! let compressed = compress(data, Level::DEFAULT)?;
//! let decompressed = decompress(&compressed, data.len() + 1)?;
//! assert_eq!(decompressed, data);
//! # Ok::<(), zframe::CodecError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bounds;
mod codec;
mod error;
mod stream;
pub mod task;

pub use codec::{Codec, compress, decompress};
pub use error::{CodecError, Result};
pub use stream::{
    Compressor, Decompressor, compress_input_size, compress_output_size, decompress_input_size,
    decompress_output_size,
};
pub use task::{Dispatcher, compress_async, decompress_async};

/// Maximum accepted input length, 1 GiB.
///
/// Inputs past this limit are rejected up front with
/// [`CodecError::InputTooLarge`], before any allocation or dispatch.
pub const MAX_INPUT_SIZE: usize = 1 << 30;

/// Default ceiling for decompressed output, 1 GiB.
///
/// A convenient `max_output_size` for callers without a tighter bound of
/// their own.
pub const DEFAULT_MAX_DECOMPRESSED_SIZE: usize = 1 << 30;

/// A compression level.
///
/// Out-of-range values are clamped to the algorithm's supported range rather
/// than rejected, so any `i32` converts to a usable level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level(i32);

impl Level {
    /// The algorithm's default level (3).
    pub const DEFAULT: Self = Self(3);

    /// Create a level, clamping into `[min_level(), max_level()]`.
    pub fn new(level: i32) -> Self {
        Self(level.clamp(min_level(), max_level()))
    }

    /// Get the raw level value.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i32> for Level {
    fn from(level: i32) -> Self {
        Self::new(level)
    }
}

/// Minimum supported compression level.
pub fn min_level() -> i32 {
    zstd_safe::min_c_level()
}

/// Maximum supported compression level.
pub fn max_level() -> i32 {
    zstd_safe::max_c_level()
}

/// Default compression level.
pub fn default_level() -> i32 {
    Level::DEFAULT.get()
}

/// Version of the underlying Zstandard library, as `major.minor.patch`.
pub fn version() -> String {
    let number = zstd_safe::version_number();
    format!(
        "{}.{}.{}",
        number / 10_000,
        (number / 100) % 100,
        number % 100
    )
}
