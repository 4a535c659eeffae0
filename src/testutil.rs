//! Builders for synthetic big-endian subrecords

#[derive(Debug, Default, Clone)]
pub struct Buf(Vec<u8>);

impl Buf {
    pub fn new() -> Self {
        Buf::default()
    }

    pub fn u8(mut self, v: u8) -> Self {
        self.0.push(v);
        self
    }

    pub fn i8(self, v: i8) -> Self {
        self.bytes(&v.to_be_bytes())
    }

    pub fn u16(self, v: u16) -> Self {
        self.bytes(&v.to_be_bytes())
    }

    pub fn i16(self, v: i16) -> Self {
        self.bytes(&v.to_be_bytes())
    }

    pub fn u32(self, v: u32) -> Self {
        self.bytes(&v.to_be_bytes())
    }

    pub fn i32(self, v: i32) -> Self {
        self.bytes(&v.to_be_bytes())
    }

    pub fn bytes(mut self, v: &[u8]) -> Self {
        self.0.extend_from_slice(v);
        self
    }

    pub fn zeros(mut self, n: usize) -> Self {
        self.0.resize(self.0.len() + n, 0);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn build(self) -> Vec<u8> {
        self.0
    }
}
