use libnfca::protocol::{BitFrame, parity_vec};
use libnfca::utils::{bits_to_hex, bits_to_hex_par};
use libnfca::Error;

use crate::common::fixtures;

#[test]
fn bit_counted_frames_keep_exact_length() {
    let reqa = fixtures::reqa();
    assert_eq!(reqa.bit_len(), 7);
    assert_eq!(reqa.whole_bytes(), 0);
    assert_eq!(reqa.residual_bits(), 7);

    let select = fixtures::select_default_uid();
    assert_eq!(select.bit_len(), 72);
    assert_eq!(select.byte_len(), 9);
}

#[test]
fn frame_bit_count_invariant() {
    assert!(matches!(
        BitFrame::new(vec![0x26], 9),
        Err(Error::InvalidBitCount { bits: 9, capacity: 1 })
    ));
}

#[test]
fn render_partial_byte() {
    assert_eq!(bits_to_hex(&[0x26], 7), "26");
    assert_eq!(fixtures::anticollision().to_string(), "93  20  ");
}

#[test]
fn render_flags_parity_mismatch_only() {
    let data = hex::decode("deadbeaf62").unwrap();
    let good = parity_vec(&data);
    assert!(!bits_to_hex_par(&data, 40, &good).contains('!'));

    let mut bad = good.clone();
    bad[3] ^= 1;
    let rendered = bits_to_hex_par(&data, 40, &bad);
    assert_eq!(rendered, "de  ad  be  af! 62  ");
}
