use super::error::HeaderError;

pub struct PppReader<'a> {
    buf: &'a [u8],
}

impl<'a> PppReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), HeaderError> {
        if self.buf.len() < needed {
            return Err(HeaderError::TooShort {
                needed,
                actual: self.buf.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, HeaderError> {
        self.buf.get(offset).copied().ok_or(HeaderError::TooShort {
            needed: offset + 1,
            actual: self.buf.len(),
        })
    }

    /// Reads a network-byte-order u16 and returns it in host order.
    pub fn read_u16_be(&self, range: std::ops::Range<usize>) -> Result<u16, HeaderError> {
        let bytes = self
            .buf
            .get(range.clone())
            .ok_or(HeaderError::TooShort {
                needed: range.end,
                actual: self.buf.len(),
            })?;
        if bytes.len() != 2 {
            return Err(HeaderError::TooShort {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }
}
