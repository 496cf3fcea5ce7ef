use libnfca::protocol::{
    crc_a, mirror_byte, mirror_bytes, mirror_u32, mirror_u64, odd_parity, parity_bits,
    parity_mismatches, swap_endian32, swap_endian64,
};
use proptest::prelude::*;

#[test]
fn mirror_byte_involution_for_every_byte() {
    for b in 0..=255u8 {
        assert_eq!(mirror_byte(mirror_byte(b)), b, "byte {:#04x}", b);
    }
}

#[test]
fn odd_parity_law_for_every_byte() {
    for b in 0..=255u8 {
        let even_popcount = b.count_ones() % 2 == 0;
        assert_eq!(odd_parity(b) == 1, even_popcount, "byte {:#04x}", b);
    }
}

#[test]
fn crc_a_distinguishes_length() {
    assert_ne!(crc_a(&[0x00]), crc_a(&[0x00, 0x00]));
    assert_eq!(crc_a(&[0x00]), crc_a(&[0x00]));
}

#[test]
fn parity_mismatch_decision() {
    let data = [0x93, 0x20, 0x26];
    let mut parity = [0u8; 3];
    parity_bits(&data, &mut parity);
    assert!(parity_mismatches(&data, 24, &parity).is_empty());

    parity[0] ^= 1;
    parity[2] ^= 1;
    assert_eq!(parity_mismatches(&data, 24, &parity), vec![0, 2]);
}

proptest! {
    #[test]
    fn swap_endian_involutions(a in any::<u32>(), b in any::<u64>()) {
        prop_assert_eq!(swap_endian32(swap_endian32(a)), a);
        prop_assert_eq!(swap_endian64(swap_endian64(b)), b);
    }

    #[test]
    fn mirror_bytes_involution(data in prop::collection::vec(any::<u8>(), 0..128)) {
        let mut buf = data.clone();
        mirror_bytes(&mut buf);
        mirror_bytes(&mut buf);
        prop_assert_eq!(buf, data);
    }

    #[test]
    fn mirror_words_reverse_bits_per_byte(a in any::<u32>(), b in any::<u64>()) {
        prop_assert_eq!(mirror_u32(a), a.reverse_bits().swap_bytes());
        prop_assert_eq!(mirror_u64(b), b.reverse_bits().swap_bytes());
    }
}
