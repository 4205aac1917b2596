use bytes::{Buf, BytesMut};
use lwutil::endian::{self, U16_LEN, U32_LEN};
use lwutil::varint::{self, MAX_VARINT_LEN};
use lwutil::{bits, hex, math, ByteOrder, CodecError, ErrorKind};

#[test]
fn store_u32_le_scenario() {
    let mut buf = [0u8; U32_LEN];
    endian::store_u32_le(0x1234_5678, &mut buf);
    assert_eq!(buf, [0x78, 0x56, 0x34, 0x12]);
}

#[test]
fn store_u32_be_scenario() {
    let mut buf = [0u8; U32_LEN];
    endian::store_u32_be(0x1234_5678, &mut buf);
    assert_eq!(buf, [0x12, 0x34, 0x56, 0x78]);
}

#[test]
fn fixed_width_u16_roundtrip_both_orders() {
    let mut buf = [0u8; U16_LEN];
    for value in 0..=u16::MAX {
        endian::store_u16_le(value, &mut buf);
        assert_eq!(endian::load_u16_le(&buf), value);
        endian::store_u16_be(value, &mut buf);
        assert_eq!(endian::load_u16_be(&buf), value);
    }
}

#[test]
fn fixed_width_u32_roundtrip_sampled() {
    let mut buf = [0u8; U32_LEN];
    for order in [ByteOrder::Little, ByteOrder::Big] {
        for value in (0..=u32::MAX).step_by(65_521).chain([u32::MAX]) {
            order.store_u32(value, &mut buf);
            assert_eq!(order.load_u32(&buf), value, "{order:?} {value:#x}");
        }
    }
}

#[test]
fn encode_varint_150_scenario() {
    let mut buf = [0u8; 10];
    assert_eq!(varint::encode_varint(150, &mut buf), Ok(2));
    assert_eq!(&buf[..2], &[0x96, 0x01]);
}

#[test]
fn decode_varint_86942_scenario() {
    assert_eq!(varint::decode_varint(&[0x9E, 0xA7, 0x05]), Ok((86942, 3)));
}

#[test]
fn encode_varint_buffer_too_small_scenario() {
    let mut buf = [0u8; 2];
    let err = varint::encode_varint(86942, &mut buf).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
}

#[test]
fn decode_varint_truncated_scenario() {
    let err = varint::decode_varint(&[0x9E, 0xA7]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TruncatedVarint);
}

#[test]
fn varint_roundtrip_reports_length() {
    let mut buf = [0u8; MAX_VARINT_LEN];
    for value in [0, 1, 127, 128, 150, 16383, 16384, 86942, u32::MAX] {
        let len = varint::encode_varint(value, &mut buf).unwrap();
        assert_eq!(len, varint::varint_len(value));
        assert_eq!(varint::decode_varint(&buf[..len]).unwrap(), (value, len));
    }
}

#[test]
fn caller_retries_with_larger_buffer() {
    let value = 86942;
    let mut small = [0u8; 2];
    let needed = match varint::encode_varint(value, &mut small) {
        Err(CodecError::BufferTooSmall { needed, .. }) => needed,
        other => panic!("unexpected result: {other:?}"),
    };

    let mut large = vec![0u8; needed];
    assert_eq!(varint::encode_varint(value, &mut large), Ok(needed));
}

#[test]
fn fixed_width_header_followed_by_varints() {
    let mut wire = BytesMut::new();
    wire.extend_from_slice(&[0u8; U16_LEN]);
    endian::store_u16_be(0xBEEF, &mut wire[..U16_LEN]);
    for value in [1, 300, 70_000] {
        varint::put_varint(&mut wire, value).unwrap();
    }

    let mut src = wire.freeze();
    assert_eq!(endian::load_u16_be(&src), 0xBEEF);
    src.advance(U16_LEN);
    let decoded: Vec<u32> = (0..3)
        .map(|_| varint::get_varint(&mut src).unwrap())
        .collect();
    assert_eq!(decoded, [1, 300, 70_000]);
    assert!(!src.has_remaining());
}

#[test]
fn helper_modules_are_reachable() {
    assert_eq!(&hex::u32_to_hex(0xCAFE), b"0000cafe");
    assert!(bits::is_set_all(bits::set(0u8, 0x81), 0x81));
    assert_eq!(math::map_range(5, 0, 10, 0, 100), Some(50));
}
