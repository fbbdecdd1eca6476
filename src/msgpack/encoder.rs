use std::collections::HashMap;

use super::Write;
use crate::{Document, Value};

const MARKER_NIL: u8 = 0xc0;
const MARKER_BOOL_FALSE: u8 = 0xc2;
const MARKER_BOOL_TRUE: u8 = 0xc3;

const MARKER_U8: u8 = 0xcc;
const MARKER_U16: u8 = 0xcd;
const MARKER_U32: u8 = 0xce;
const MARKER_U64: u8 = 0xcf;

const MARKER_I8: u8 = 0xd0;
const MARKER_I16: u8 = 0xd1;
const MARKER_I32: u8 = 0xd2;
const MARKER_I64: u8 = 0xd3;

const MARKER_F64: u8 = 0xcb;

const MARKER_BIN8: u8 = 0xc4;
const MARKER_BIN16: u8 = 0xc5;
const MARKER_BIN32: u8 = 0xc6;

const MARKER_STR16: u8 = 0xda;
const MARKER_STR32: u8 = 0xdb;

const MARKER_ARRAY16: u8 = 0xdc;
const MARKER_ARRAY32: u8 = 0xdd;

const MARKER_MAP16: u8 = 0xde;
const MARKER_MAP32: u8 = 0xdf;

/// Serialize a whole document as a map of its fields, returning the written size.
pub(crate) fn pack_document(w: &mut impl Write, doc: &Document) -> usize {
    let mut size = pack_map_begin(w, doc.len());
    for (name, value) in doc {
        size += pack_string(w, name);
        size += pack_value(w, value);
    }

    size
}

pub(crate) fn pack_value(w: &mut impl Write, val: &Value) -> usize {
    match val {
        Value::Nil => pack_nil(w),
        Value::Bool(val) => pack_bool(w, *val),
        Value::Int(val) => pack_integer(w, *val),
        Value::Uint(val) => pack_u64(w, *val),
        Value::Float(val) => pack_f64(w, *val),
        Value::String(val) => pack_string(w, val),
        Value::Blob(val) => pack_blob(w, val),
        Value::List(val) => pack_array(w, val),
        Value::Map(val) => pack_map(w, val),
    }
}

fn pack_array(w: &mut impl Write, values: &[Value]) -> usize {
    let mut size = pack_array_begin(w, values.len());
    for val in values {
        size += pack_value(w, val);
    }

    size
}

fn pack_map(w: &mut impl Write, map: &HashMap<String, Value>) -> usize {
    let mut size = pack_map_begin(w, map.len());
    for (key, val) in map {
        size += pack_string(w, key);
        size += pack_value(w, val);
    }

    size
}

fn pack_half_byte(w: &mut impl Write, value: u8) -> usize {
    w.write_u8(value);
    1
}

fn pack_byte(w: &mut impl Write, marker: u8, value: u8) -> usize {
    w.write_u8(marker);
    w.write_u8(value);
    2
}

fn pack_nil(w: &mut impl Write) -> usize {
    w.write_u8(MARKER_NIL);
    1
}

fn pack_bool(w: &mut impl Write, value: bool) -> usize {
    w.write_u8(if value {
        MARKER_BOOL_TRUE
    } else {
        MARKER_BOOL_FALSE
    });
    1
}

fn pack_map_begin(w: &mut impl Write, length: usize) -> usize {
    match length {
        val if val < 16 => pack_half_byte(w, 0x80 | (length as u8)),
        val if val < (1 << 16) => pack_u16(w, MARKER_MAP16, length as u16),
        _ => pack_u32(w, MARKER_MAP32, length as u32),
    }
}

fn pack_array_begin(w: &mut impl Write, length: usize) -> usize {
    match length {
        val if val < 16 => pack_half_byte(w, 0x90 | (length as u8)),
        val if val < (1 << 16) => pack_u16(w, MARKER_ARRAY16, length as u16),
        _ => pack_u32(w, MARKER_ARRAY32, length as u32),
    }
}

fn pack_string(w: &mut impl Write, value: &str) -> usize {
    let mut size = match value.len() {
        len if len < 32 => pack_half_byte(w, 0xa0 | (len as u8)),
        len if len < (1 << 16) => pack_u16(w, MARKER_STR16, len as u16),
        len => pack_u32(w, MARKER_STR32, len as u32),
    };
    size += w.write_str(value);

    size
}

fn pack_blob(w: &mut impl Write, value: &[u8]) -> usize {
    let mut size = match value.len() {
        len if len < (1 << 8) => pack_byte(w, MARKER_BIN8, len as u8),
        len if len < (1 << 16) => pack_u16(w, MARKER_BIN16, len as u16),
        len => pack_u32(w, MARKER_BIN32, len as u32),
    };
    size += w.write_bytes(value);

    size
}

fn pack_integer(w: &mut impl Write, val: i64) -> usize {
    match val {
        0..=0x7f => pack_half_byte(w, val as u8),
        0x80..=0xff => pack_byte(w, MARKER_U8, val as u8),
        0x100..=0xffff => pack_u16(w, MARKER_U16, val as u16),
        0x1_0000..=0xffff_ffff => pack_u32(w, MARKER_U32, val as u32),
        -32..=-1 => pack_half_byte(w, val as u8),
        -0x80..=-33 => pack_byte(w, MARKER_I8, val as u8),
        -0x8000..=-0x81 => pack_i16(w, MARKER_I16, val as i16),
        -0x8000_0000..=-0x8001 => pack_i32(w, MARKER_I32, val as i32),
        val if val > 0xffff_ffff => pack_i64(w, MARKER_U64, val),
        _ => pack_i64(w, MARKER_I64, val),
    }
}

fn pack_u16(w: &mut impl Write, marker: u8, value: u16) -> usize {
    w.write_u8(marker);
    w.write_u16(value);
    3
}

fn pack_u32(w: &mut impl Write, marker: u8, value: u32) -> usize {
    w.write_u8(marker);
    w.write_u32(value);
    5
}

fn pack_i16(w: &mut impl Write, marker: u8, value: i16) -> usize {
    w.write_u8(marker);
    w.write_i16(value);
    3
}

fn pack_i32(w: &mut impl Write, marker: u8, value: i32) -> usize {
    w.write_u8(marker);
    w.write_i32(value);
    5
}

fn pack_i64(w: &mut impl Write, marker: u8, value: i64) -> usize {
    w.write_u8(marker);
    w.write_i64(value);
    9
}

fn pack_u64(w: &mut impl Write, value: u64) -> usize {
    if let Ok(value) = i64::try_from(value) {
        return pack_integer(w, value);
    }

    w.write_u8(MARKER_U64);
    w.write_u64(value);
    9
}

fn pack_f64(w: &mut impl Write, value: f64) -> usize {
    w.write_u8(MARKER_F64);
    w.write_f64(value);
    9
}

#[cfg(test)]
mod tests {
    use bytes::BytesMut;

    use super::{pack_integer, pack_value};
    use crate::{msgpack::Sink, Value};

    fn packed(val: &Value) -> Vec<u8> {
        let mut buf = BytesMut::new();
        pack_value(&mut buf, val);
        buf.to_vec()
    }

    #[test]
    fn scalars() {
        assert_eq!(vec![0xc0], packed(&Value::Nil));
        assert_eq!(vec![0xc3], packed(&Value::from(true)));
        assert_eq!(vec![0x07], packed(&Value::from(7)));
        assert_eq!(vec![0xcc, 0x80], packed(&Value::from(128)));
        assert_eq!(vec![0xff], packed(&Value::from(-1)));
        assert_eq!(vec![0xd0, 0x80], packed(&Value::from(-128)));
        assert_eq!(
            vec![0xcb, 0x3f, 0xf8, 0, 0, 0, 0, 0, 0],
            packed(&Value::from(1.5)),
        );
    }

    #[test]
    fn strings_and_blobs() {
        assert_eq!(vec![0xa2, b'h', b'i'], packed(&Value::from("hi")));
        assert_eq!(vec![0xc4, 0x02, 0x01, 0x02], packed(&Value::from(vec![1_u8, 2])));

        let long = "x".repeat(40);
        let mut expected = vec![0xda, 0x00, 0x28];
        expected.extend_from_slice(long.as_bytes());
        assert_eq!(expected, packed(&Value::from(long)));
    }

    #[test]
    fn composites() {
        assert_eq!(
            vec![0x92, 0x01, 0xa1, b'a'],
            packed(&Value::List(vec![Value::from(1), Value::from("a")])),
        );
    }

    #[test]
    fn integer_boundaries() {
        for val in [
            0,
            0x7f,
            0x80,
            0xff,
            0x100,
            0xffff,
            0x1_0000,
            0xffff_ffff,
            0x1_0000_0000,
            i64::MAX,
            -1,
            -32,
            -33,
            -0x80,
            -0x81,
            -0x8000,
            -0x8001,
            -0x8000_0000,
            -0x8000_0001,
            i64::MIN,
        ] {
            let mut buf = BytesMut::new();
            let written = pack_integer(&mut buf, val);
            assert_eq!(written, buf.len(), "size mismatch for {val}");
            assert_eq!(written, pack_integer(&mut Sink, val), "sink mismatch for {val}");
        }
    }

    #[test]
    fn uint_beyond_i64() {
        assert_eq!(
            vec![0xcf, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff],
            packed(&Value::from(u64::MAX)),
        );
    }
}
