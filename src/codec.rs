//! TLS presentation-language writer
//!
//! [`Writer`] appends big-endian integers and opaque bytes to a buffer and
//! supports scoped length prefixes: [`Writer::begin_u16`] reserves the prefix,
//! the caller writes the contents, and [`Writer::end`] measures them and
//! patches the prefix in place. Prefixes nest and must be closed in LIFO order.
//!
//! ```
//! # use ech_keygen::codec::Writer;
//! # fn main() -> ech_keygen::Result<()> {
//! let mut w = Writer::new();
//! let outer = w.begin_u16();
//! w.put_u8(7);
//! let inner = w.begin_u8();
//! w.put_bytes(b"abc");
//! w.end(inner)?;
//! w.end(outer)?;
//! assert_eq!(w.finish()?, vec![0x00, 0x05, 0x07, 0x03, b'a', b'b', b'c']);
//! # Ok(())
//! # }
//! ```

use crate::{Error, Result};

/// An open length prefix, returned by [`Writer::begin_u8`]/[`Writer::begin_u16`]
#[derive(Debug)]
#[must_use = "a length prefix must be closed with Writer::end"]
pub struct LengthPrefix {
    offset: usize,
    width: usize,
}

impl LengthPrefix {
    fn max_len(&self) -> usize {
        match self.width {
            1 => u8::MAX as usize,
            _ => u16::MAX as usize,
        }
    }
}

/// Buffer writer for length-prefixed wire structures
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
    open: Vec<usize>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn put_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Reserve a 1-byte length prefix
    pub fn begin_u8(&mut self) -> LengthPrefix {
        self.begin(1)
    }

    /// Reserve a 2-byte length prefix
    pub fn begin_u16(&mut self) -> LengthPrefix {
        self.begin(2)
    }

    fn begin(&mut self, width: usize) -> LengthPrefix {
        let offset = self.buf.len();
        self.buf.resize(offset + width, 0);
        self.open.push(offset);
        LengthPrefix { offset, width }
    }

    /// Close a prefix, writing the length of everything written since it was opened
    pub fn end(&mut self, prefix: LengthPrefix) -> Result<()> {
        if self.open.last() != Some(&prefix.offset) {
            return Err(Error::Encode(format!(
                "length prefix at offset {} closed out of order",
                prefix.offset
            )));
        }
        self.open.pop();

        let contents_start = prefix.offset + prefix.width;
        let contents_len = self.buf.len() - contents_start;
        if contents_len > prefix.max_len() {
            return Err(Error::Encode(format!(
                "{} bytes do not fit a {}-byte length prefix",
                contents_len, prefix.width
            )));
        }

        match prefix.width {
            1 => self.buf[prefix.offset] = contents_len as u8,
            _ => self.buf[prefix.offset..contents_start]
                .copy_from_slice(&(contents_len as u16).to_be_bytes()),
        }
        Ok(())
    }

    /// Consume the writer, failing if any prefix is still open
    pub fn finish(self) -> Result<Vec<u8>> {
        if !self.open.is_empty() {
            return Err(Error::Encode(format!(
                "{} length prefix(es) left open",
                self.open.len()
            )));
        }
        Ok(self.buf)
    }
}
