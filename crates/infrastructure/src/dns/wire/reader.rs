use super::name::decode_name;
use dnsprobe_domain::{DomainError, DomainName};

/// Bounds-checked cursor over a received message.
///
/// The slice is exactly what the transport received; every read checks it
/// before touching a byte and fails with `TruncatedRecord` otherwise.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn at(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Fails unless `n` more bytes are available from the current position.
    pub fn require(&self, n: usize) -> Result<(), DomainError> {
        if self.pos > self.buf.len() || self.remaining() < n {
            return Err(DomainError::TruncatedRecord {
                offset: self.pos.saturating_add(n),
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, DomainError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, DomainError> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DomainError> {
        self.require(n)?;
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    pub fn skip(&mut self, n: usize) -> Result<(), DomainError> {
        self.require(n)?;
        self.pos += n;
        Ok(())
    }

    /// Decodes a name at the cursor and moves past the bytes it occupies here,
    /// which is only the pointer when the name is compressed.
    pub fn read_name(&mut self) -> Result<DomainName, DomainError> {
        let (name, consumed) = decode_name(self.buf, self.pos)?;
        self.skip(consumed)?;
        Ok(name)
    }
}
