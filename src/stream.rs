//! Streaming compression and decompression sessions.
//!
//! A session wraps one exclusively-owned streaming context plus a fixed-size
//! *output window*. Input is consumed through a cursor; whenever the window
//! fills exactly to capacity its contents are handed to the caller's sink and
//! the window is reused. Peak memory is therefore bounded by the window size no
//! matter how much data a single [`feed`](Compressor::feed) call carries, and a
//! sink may run zero, one, or many times per call.
//!
//! Sessions are strictly sequential: every operation takes `&mut self`, so
//! overlapping calls on one session are rejected at compile time. Independent
//! sessions share nothing and may run on different threads freely.
//!
//! # Example
//!
//! ```rust,no_run
//! use zframe::{Compressor, Decompressor, Level};
//!
//! let mut compressed = Vec::new();
//! let mut compressor = Compressor::new(Level::DEFAULT)?;
//! compressor.feed(b"some data", |chunk| compressed.extend_from_slice(chunk))?;
//! compressor.feed(b"more data", |chunk| compressed.extend_from_slice(chunk))?;
//! compressor.finish(|chunk| compressed.extend_from_slice(chunk))?;
//!
//! let mut output = Vec::new();
//! let mut decompressor = Decompressor::new();
//! decompressor.feed(&compressed, |chunk| output.extend_from_slice(chunk))?;
//! decompressor.finish(|chunk| output.extend_from_slice(chunk))?;
//! assert_eq!(output, b"some datamore data");
//! # Ok::<(), zframe::CodecError>(())
//! ```

use zstd_safe::{CCtx, DCtx, InBuffer, OutBuffer};

use crate::error::{CodecError, Result};
use crate::Level;

/// Recommended input chunk size for streaming compression.
pub fn compress_input_size() -> usize {
    CCtx::in_size()
}

/// Output window capacity used by [`Compressor`] sessions.
pub fn compress_output_size() -> usize {
    CCtx::out_size()
}

/// Recommended input chunk size for streaming decompression.
pub fn decompress_input_size() -> usize {
    DCtx::in_size()
}

/// Output window capacity used by [`Decompressor`] sessions.
pub fn decompress_output_size() -> usize {
    DCtx::out_size()
}

fn algorithm_error(code: zstd_safe::ErrorCode) -> CodecError {
    CodecError::algorithm(zstd_safe::get_error_name(code))
}

/// Session lifecycle. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Active,
    Finished,
}

/// A streaming compression session.
///
/// Created with a compression [`Level`]; accepts repeated
/// [`feed`](Self::feed) calls and a single [`finish`](Self::finish). After
/// `finish` returns, the session is terminal and every further call fails with
/// [`CodecError::SessionFinished`] without invoking the sink.
pub struct Compressor {
    cctx: CCtx<'static>,
    window: Box<[u8]>,
    filled: usize,
    state: SessionState,
}

impl Compressor {
    /// Create a compression session.
    ///
    /// The output window capacity is fixed here, once, to the algorithm's
    /// recommended streaming output size.
    ///
    /// # Errors
    ///
    /// [`CodecError::Algorithm`] if the streaming context rejects the level.
    pub fn new(level: Level) -> Result<Self> {
        let mut cctx = CCtx::create();
        cctx.init(level.get()).map_err(algorithm_error)?;
        Ok(Self {
            cctx,
            window: vec![0u8; CCtx::out_size()].into_boxed_slice(),
            filled: 0,
            state: SessionState::Active,
        })
    }

    /// Feed a chunk of input, delivering produced output through `sink`.
    ///
    /// The sink receives the full window every time it fills to capacity, and
    /// one final partial chunk for whatever the call left behind. It may run
    /// zero times when the algorithm buffers everything internally.
    ///
    /// # Errors
    ///
    /// [`CodecError::SessionFinished`] after [`finish`](Self::finish), or
    /// [`CodecError::Algorithm`] if a streaming step fails. A failed session
    /// stays terminal-free but must be dropped; its output is incomplete.
    pub fn feed(&mut self, chunk: &[u8], mut sink: impl FnMut(&[u8])) -> Result<()> {
        if self.state == SessionState::Finished {
            return Err(CodecError::SessionFinished);
        }
        let mut input = InBuffer::around(chunk);
        while input.pos < chunk.len() {
            let mut output = OutBuffer::around_pos(&mut self.window[..], self.filled);
            self.cctx
                .compress_stream(&mut output, &mut input)
                .map_err(algorithm_error)?;
            self.filled = output.pos();
            if self.filled == self.window.len() {
                sink(&self.window[..]);
                self.filled = 0;
            }
        }
        if self.filled > 0 {
            sink(&self.window[..self.filled]);
            self.filled = 0;
        }
        Ok(())
    }

    /// End the stream, flushing the frame epilogue through `sink`.
    ///
    /// Drives the stream-end primitive until the algorithm reports no pending
    /// output, with the same fill-and-flush discipline as
    /// [`feed`](Self::feed). The session is terminal once this returns,
    /// success or failure.
    pub fn finish(&mut self, mut sink: impl FnMut(&[u8])) -> Result<()> {
        if self.state == SessionState::Finished {
            return Err(CodecError::SessionFinished);
        }
        self.state = SessionState::Finished;
        loop {
            let mut output = OutBuffer::around_pos(&mut self.window[..], self.filled);
            let remaining = self
                .cctx
                .end_stream(&mut output)
                .map_err(algorithm_error)?;
            self.filled = output.pos();
            if self.filled == self.window.len() {
                sink(&self.window[..]);
                self.filled = 0;
            }
            if remaining == 0 {
                break;
            }
        }
        if self.filled > 0 {
            sink(&self.window[..self.filled]);
            self.filled = 0;
        }
        Ok(())
    }
}

/// A streaming decompression session.
///
/// Accepts compressed bytes in arbitrary splits and delivers decompressed
/// output in window-sized chunks. [`finish`](Self::finish) verifies the frame
/// actually ended; a truncated stream fails with
/// [`CodecError::IncompleteFrame`] and anything the failing call already
/// delivered must be discarded.
pub struct Decompressor {
    dctx: DCtx<'static>,
    window: Box<[u8]>,
    filled: usize,
    state: SessionState,
    /// Whether any input has been consumed since creation.
    started: bool,
    /// Whether the last streaming step reported the frame complete.
    frame_done: bool,
}

impl Decompressor {
    /// Create a decompression session.
    pub fn new() -> Self {
        Self {
            dctx: DCtx::create(),
            window: vec![0u8; DCtx::out_size()].into_boxed_slice(),
            filled: 0,
            state: SessionState::Active,
            started: false,
            frame_done: false,
        }
    }

    /// Feed a chunk of compressed input, delivering output through `sink`.
    ///
    /// Same window discipline as [`Compressor::feed`]: full windows are
    /// flushed mid-loop, a final partial chunk is delivered after the input is
    /// consumed, and the sink may run zero times.
    ///
    /// # Errors
    ///
    /// [`CodecError::SessionFinished`] after [`finish`](Self::finish), or
    /// [`CodecError::Algorithm`] on malformed frame data.
    pub fn feed(&mut self, chunk: &[u8], mut sink: impl FnMut(&[u8])) -> Result<()> {
        if self.state == SessionState::Finished {
            return Err(CodecError::SessionFinished);
        }
        if !chunk.is_empty() {
            self.started = true;
        }
        let mut input = InBuffer::around(chunk);
        while input.pos < chunk.len() {
            let mut output = OutBuffer::around_pos(&mut self.window[..], self.filled);
            let hint = self
                .dctx
                .decompress_stream(&mut output, &mut input)
                .map_err(algorithm_error)?;
            self.frame_done = hint == 0;
            self.filled = output.pos();
            if self.filled == self.window.len() {
                sink(&self.window[..]);
                self.filled = 0;
            }
        }
        if self.filled > 0 {
            sink(&self.window[..self.filled]);
            self.filled = 0;
        }
        Ok(())
    }

    /// End the stream, verifying that the frame completed.
    ///
    /// If the frame already ended during [`feed`](Self::feed) (or nothing was
    /// ever fed) this succeeds without touching the context. Otherwise a
    /// single terminating step runs with an empty input view; produced output
    /// is delivered once, and the call fails with
    /// [`CodecError::IncompleteFrame`] when the algorithm still expects more
    /// input. The session is terminal once this returns, success or failure.
    pub fn finish(&mut self, mut sink: impl FnMut(&[u8])) -> Result<()> {
        if self.state == SessionState::Finished {
            return Err(CodecError::SessionFinished);
        }
        self.state = SessionState::Finished;
        if !self.started || self.frame_done {
            return Ok(());
        }
        let mut input = InBuffer::around(&[]);
        let mut output = OutBuffer::around_pos(&mut self.window[..], self.filled);
        let hint = self
            .dctx
            .decompress_stream(&mut output, &mut input)
            .map_err(algorithm_error)?;
        self.filled = output.pos();
        if self.filled > 0 {
            sink(&self.window[..self.filled]);
            self.filled = 0;
        }
        if hint != 0 {
            return Err(CodecError::IncompleteFrame);
        }
        Ok(())
    }
}

impl Default for Decompressor {
    fn default() -> Self {
        Self::new()
    }
}
