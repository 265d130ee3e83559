//! Byte-stream backends for the memory-mapped character device.
//!
//! The address space talks to the outside world through a [`ByteChannel`].
//! The real simulator uses [`StdioChannel`] (process stdin/stdout); tests
//! script input and capture output with [`BufferChannel`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::rc::Rc;

/// One-byte-at-a-time console seam for the character port.
pub trait ByteChannel {
    /// Blocking read of one byte. `None` means end of input.
    fn getchar(&mut self) -> Option<u8>;

    /// Emit one byte.
    fn putchar(&mut self, byte: u8);
}

/// Channel backed by the process's standard streams.
///
/// Output is flushed per byte so that nothing is lost when the driver
/// terminates the process without unwinding.
pub struct StdioChannel;

impl ByteChannel for StdioChannel {
    fn getchar(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        io::stdin().lock().read_exact(&mut buf).ok().map(|_| buf[0])
    }

    fn putchar(&mut self, byte: u8) {
        let mut out = io::stdout().lock();
        let _ = out.write_all(&[byte]);
        let _ = out.flush();
    }
}

/// In-memory channel for tests: scripted input, captured output.
///
/// Clones share the underlying buffers, so a test can keep a handle while
/// the address space owns the channel.
#[derive(Clone, Default)]
pub struct BufferChannel {
    input: Rc<RefCell<VecDeque<u8>>>,
    output: Rc<RefCell<Vec<u8>>>,
}

impl BufferChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: &[u8]) -> Self {
        Self {
            input: Rc::new(RefCell::new(input.iter().copied().collect())),
            output: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Everything the program has written so far.
    pub fn output(&self) -> Vec<u8> {
        self.output.borrow().clone()
    }
}

impl ByteChannel for BufferChannel {
    fn getchar(&mut self) -> Option<u8> {
        self.input.borrow_mut().pop_front()
    }

    fn putchar(&mut self, byte: u8) {
        self.output.borrow_mut().push(byte);
    }
}
