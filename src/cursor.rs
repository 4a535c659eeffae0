//! A forward-only big-endian reader over one subrecord
use binrw::io::{self, Cursor as IoCursor};
use binrw::{BinRead, BinResult, Endian};

/// A cursor positioned inside a subrecord
///
/// All reads are big-endian regardless of the host and the position only
/// ever moves forward. Reading or skipping past the end of the buffer is an
/// end-of-file error, which the decoders report as a truncated record.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    inner: IoCursor<&'a [u8]>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Cursor {
            inner: IoCursor::new(bytes),
        }
    }

    /// The number of bytes consumed so far
    pub fn position(&self) -> usize {
        self.inner.position() as usize
    }

    /// The number of bytes left to read
    pub fn remaining(&self) -> usize {
        self.inner.get_ref().len().saturating_sub(self.position())
    }

    /// Read a value whose layout takes no arguments
    pub fn read<T>(&mut self) -> BinResult<T>
    where
        T: for<'b> BinRead<Args<'b> = ()>,
    {
        self.read_args(())
    }

    /// Read a value whose layout is parameterized by `args`
    pub fn read_args<T: BinRead>(&mut self, args: T::Args<'_>) -> BinResult<T> {
        let start = self.inner.position();
        let value = T::read_options(&mut self.inner, Endian::Big, args);
        // binrw pads by seeking, and a seek past the end succeeds
        match value {
            Ok(value) if self.inner.position() <= self.inner.get_ref().len() as u64 => Ok(value),
            Ok(_) => {
                self.inner.set_position(start);
                Err(eof(start))
            }
            Err(err) => {
                self.inner.set_position(start);
                Err(err)
            }
        }
    }

    /// Borrow the next `n` bytes and step over them
    pub fn take(&mut self, n: usize) -> BinResult<&'a [u8]> {
        if self.remaining() < n {
            return Err(eof(self.inner.position()));
        }
        let start = self.position();
        let bytes: &'a [u8] = *self.inner.get_ref();
        self.inner.set_position((start + n) as u64);
        Ok(&bytes[start..start + n])
    }

    /// Step over `n` spare bytes without looking at them
    pub fn skip(&mut self, n: usize) -> BinResult<()> {
        self.take(n).map(|_| ())
    }
}

fn eof(pos: u64) -> binrw::Error {
    binrw::Error::Io(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("subrecord ended at byte {pos}"),
    ))
}
