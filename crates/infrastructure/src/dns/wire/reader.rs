use rootwalk_domain::DomainError;

/// Cursor over an immutable DNS message buffer.
///
/// Compression pointers are absolute offsets into the whole message, so every
/// decoder shares one reader and may `seek` it, rather than slicing the buffer.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Moves the cursor to an absolute offset. Seeking to the very end is allowed.
    pub fn seek(&mut self, offset: usize) -> Result<(), DomainError> {
        if offset > self.buf.len() {
            return Err(DomainError::TruncatedInput {
                needed: offset - self.buf.len(),
                offset: self.buf.len(),
            });
        }
        self.pos = offset;
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, DomainError> {
        let bytes = self.read_bytes(1)?;
        Ok(bytes[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_i32(&mut self) -> Result<i32, DomainError> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DomainError> {
        let end = self.pos.checked_add(len).filter(|end| *end <= self.buf.len());
        match end {
            Some(end) => {
                let bytes = &self.buf[self.pos..end];
                self.pos = end;
                Ok(bytes)
            }
            None => Err(DomainError::TruncatedInput {
                needed: len - self.remaining(),
                offset: self.pos,
            }),
        }
    }
}
