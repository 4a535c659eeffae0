//! Builders for synthetic big-endian subrecords
#![allow(dead_code)]

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

    pub fn build(self) -> Vec<u8> {
        self.0
    }
}

/// An EM3 run-time snapshot with the given model and swath values
pub fn em3_run_time(model: u16, port_swath: u16, stbd_swath: u16, gated: u16, hilo: u8) -> Buf {
    Buf::new()
        .u16(model)
        .u32(1_000_000_000)
        .u32(0)
        .u16(12)
        .u16(345)
        .u32(0)
        .u8(2)
        .u8(1)
        .u16(3)
        .u16(500)
        .u16(3125)
        .u16(150)
        .u16(15)
        .u8(0)
        .u8(20)
        .u8(30)
        .u8(10)
        .u8(45)
        .u8(1)
        .u16(port_swath)
        .u8(0)
        .u8(40)
        .u8(3)
        .u8(0)
        .u16(stbd_swath)
        .u16(gated)
        .u8(hilo)
        .zeros(3)
}

/// The fixed part of an EM3 subrecord, up to and including `run_time_id`
pub fn em3_head(run_time_id: u32) -> Buf {
    Buf::new()
        .u16(300)
        .u16(11)
        .u16(222)
        .u16(14950)
        .u16(525)
        .u16(135)
        .u16(4500)
        .i16(-12)
        .i8(-1)
        .u32(run_time_id)
}

/// An EM4 subrecord with `sectors` transmit sectors and no snapshots
pub fn em4(ping: u16, transducer_depth: u32, sectors: &[i16]) -> Vec<u8> {
    let mut buf = Buf::new()
        .u16(2040)
        .u16(ping)
        .u16(101)
        .u16(15000)
        .u32(transducer_depth)
        .u16(400)
        .u32(30000)
        .u32(0)
        .u32(0)
        .i32(0)
        .zeros(16)
        .u16(sectors.len() as u16);
    for &tilt in sectors {
        buf = buf
            .i16(tilt)
            .u16(0)
            .u32(0)
            .u32(0)
            .u32(300_000)
            .u16(0)
            .u8(0)
            .u8(0)
            .u32(0)
            .zeros(16);
    }
    buf.zeros(16).u32(0).build()
}
