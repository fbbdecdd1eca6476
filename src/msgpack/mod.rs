#![allow(clippy::cast_possible_truncation)]

pub(crate) mod encoder;

use bytes::{BufMut, BytesMut};

pub(crate) trait Write {
    fn write_u8(&mut self, v: u8) -> usize;
    fn write_u16(&mut self, v: u16) -> usize;
    fn write_u32(&mut self, v: u32) -> usize;
    fn write_u64(&mut self, v: u64) -> usize;
    fn write_i16(&mut self, v: i16) -> usize;
    fn write_i32(&mut self, v: i32) -> usize;
    fn write_i64(&mut self, v: i64) -> usize;
    fn write_f64(&mut self, v: f64) -> usize;

    fn write_bytes(&mut self, v: &[u8]) -> usize;
    fn write_str(&mut self, v: &str) -> usize;
}

/// Byte sink that discards all writes and only reports their size, used to compute the encoded
/// size of a document before allocating for it.
pub(crate) struct Sink;

impl Write for Sink {
    fn write_u8(&mut self, _: u8) -> usize {
        std::mem::size_of::<u8>()
    }

    fn write_u16(&mut self, _: u16) -> usize {
        std::mem::size_of::<u16>()
    }

    fn write_u32(&mut self, _: u32) -> usize {
        std::mem::size_of::<u32>()
    }

    fn write_u64(&mut self, _: u64) -> usize {
        std::mem::size_of::<u64>()
    }

    fn write_i16(&mut self, _: i16) -> usize {
        std::mem::size_of::<i16>()
    }

    fn write_i32(&mut self, _: i32) -> usize {
        std::mem::size_of::<i32>()
    }

    fn write_i64(&mut self, _: i64) -> usize {
        std::mem::size_of::<i64>()
    }

    fn write_f64(&mut self, _: f64) -> usize {
        std::mem::size_of::<f64>()
    }

    fn write_bytes(&mut self, v: &[u8]) -> usize {
        v.len()
    }

    fn write_str(&mut self, v: &str) -> usize {
        v.len()
    }
}

impl Write for BytesMut {
    fn write_u8(&mut self, v: u8) -> usize {
        self.put_u8(v);
        std::mem::size_of::<u8>()
    }

    fn write_u16(&mut self, v: u16) -> usize {
        self.put_u16(v);
        std::mem::size_of::<u16>()
    }

    fn write_u32(&mut self, v: u32) -> usize {
        self.put_u32(v);
        std::mem::size_of::<u32>()
    }

    fn write_u64(&mut self, v: u64) -> usize {
        self.put_u64(v);
        std::mem::size_of::<u64>()
    }

    fn write_i16(&mut self, v: i16) -> usize {
        self.put_i16(v);
        std::mem::size_of::<i16>()
    }

    fn write_i32(&mut self, v: i32) -> usize {
        self.put_i32(v);
        std::mem::size_of::<i32>()
    }

    fn write_i64(&mut self, v: i64) -> usize {
        self.put_i64(v);
        std::mem::size_of::<i64>()
    }

    fn write_f64(&mut self, v: f64) -> usize {
        self.put_f64(v);
        std::mem::size_of::<f64>()
    }

    fn write_bytes(&mut self, v: &[u8]) -> usize {
        self.put_slice(v);
        v.len()
    }

    fn write_str(&mut self, v: &str) -> usize {
        self.put_slice(v.as_bytes());
        v.len()
    }
}
