//! Fixed-width byte packing shared by every value type.
//!
//! Packed forms carry no framing: no length prefix, no type tag. Doubles are written as
//! little-endian IEEE-754, so packing a vector and unpacking it again is lossless. Colours pack
//! to one byte per channel and are therefore lossy.

use crate::core::prelude::*;
use bincode::config::{Config, standard};
use std::io::Write;

pub(crate) fn config() -> impl Config {
    standard().with_little_endian().with_fixed_int_encoding()
}

/// A value with a fixed-width binary representation.
pub trait Packable: Sized {
    /// Exact size of the packed form in bytes.
    const PACKED_LEN: usize;

    fn to_bytes(&self) -> Result<Vec<u8>>;

    /// Fails with [`GeomError::Decode`] unless `bytes` is exactly [`Self::PACKED_LEN`] long.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Writes the packed form to `sink` and returns the number of bytes written.
    fn write<W: Write>(&self, sink: &mut W) -> Result<usize> {
        let bytes = self.to_bytes()?;
        sink.write_all(&bytes)?;
        Ok(bytes.len())
    }
}

pub(crate) fn encode<T: bincode::Encode>(value: &T) -> Result<Vec<u8>> {
    Ok(bincode::encode_to_vec(value, config())?)
}

/// Decodes a value whose packed form must be exactly `expected` bytes long.
pub(crate) fn decode<T: bincode::Decode<()>>(bytes: &[u8], expected: usize) -> Result<T> {
    check_len::<T>(bytes, expected)?;
    let (value, _) = bincode::decode_from_slice(bytes, config())?;
    Ok(value)
}

pub(crate) fn check_len<T>(bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() == expected {
        Ok(())
    } else {
        Err(GeomError::Decode {
            type_name: short_type_name::<T>(),
            expected,
            actual: bytes.len(),
        })
    }
}

fn short_type_name<T>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockWriter {
        written: Vec<u8>,
        calls: usize,
    }

    impl Write for MockWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.calls += 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("sink closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_pushes_exact_bytes() {
        let v = Vector2::new(3.5, 2.125);
        let mut writer = MockWriter::default();
        assert_eq!(v.write(&mut writer).unwrap(), 16);
        assert_eq!(writer.written, v.to_bytes().unwrap());
        assert_eq!(writer.calls, 1);
    }

    #[test]
    fn write_to_vec() {
        let mut sink = Vec::new();
        let rect = Rect::new(Vector2::new(10.0, 20.0), Vector2::new(30.0, 40.0));
        let circle = Circle::new(3.0, Vector2::new(2.0, 5.2));
        rect.write(&mut sink).unwrap();
        circle.write(&mut sink).unwrap();
        assert_eq!(sink.len(), Rect::PACKED_LEN + Circle::PACKED_LEN);
        assert_eq!(Rect::from_bytes(&sink[..Rect::PACKED_LEN]).unwrap(), rect);
        assert_eq!(Circle::from_bytes(&sink[Rect::PACKED_LEN..]).unwrap(), circle);
    }

    #[test]
    fn write_reports_sink_failure() {
        let err = Color::red().write(&mut FailingWriter).unwrap_err();
        assert!(matches!(err, GeomError::Io(_)));
    }

    #[test]
    fn decode_rejects_wrong_length() {
        let err = Vector2::from_bytes(&[0; 15]).unwrap_err();
        match err {
            GeomError::Decode {
                type_name,
                expected,
                actual,
            } => {
                assert_eq!(type_name, "Vector2");
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            e => panic!("unexpected error: {e}"),
        }
        assert!(Vector2::from_bytes(&[0; 17]).is_err());
        assert!(Vector3::from_bytes(&[0; 16]).is_err());
        assert!(Color::from_bytes(&[0; 3]).is_err());
    }

    #[test]
    fn doubles_are_little_endian() {
        let bytes = Vector2::new(1.0, -2.0).to_bytes().unwrap();
        assert_eq!(&bytes[..8], &1.0_f64.to_le_bytes());
        assert_eq!(&bytes[8..], &(-2.0_f64).to_le_bytes());
    }

    #[test]
    fn serde_path_matches_packed_layout() {
        let v = Vector3::new(1.5, -0.25, 8.0);
        let via_serde = bincode::serde::encode_to_vec(v, config()).unwrap();
        assert_eq!(via_serde, v.to_bytes().unwrap());
    }
}
