use libnfca::protocol::{append_crc_a, crc_a, crc_a_bytes, verify_crc_a};
use proptest::prelude::*;

#[test]
fn crc_a_reference_vectors() {
    // SAK 0x08 as sent by a MIFARE Classic 1K
    assert_eq!(crc_a_bytes(&[0x08]), [0xb6, 0xdd]);
    // HLTA
    assert_eq!(crc_a_bytes(&hex::decode("5000").unwrap()), [0x57, 0xcd]);
    // SELECT CL1 for DE AD BE AF
    assert_eq!(
        crc_a_bytes(&hex::decode("9370deadbeaf62").unwrap()),
        [0xdb, 0x98]
    );
    assert_eq!(crc_a(&[0x12, 0x34, 0x56]), 0x7348);
}

#[test]
fn crc_a_uses_iso14443a_seed() {
    // CRC-CCITT's 0xFFFF seed would give a different value
    assert_eq!(crc_a(&[]), 0x6363);
}

#[test]
fn verify_rejects_swapped_crc_bytes() {
    assert!(verify_crc_a(&[0x08, 0xb6, 0xdd]));
    assert!(!verify_crc_a(&[0x08, 0xdd, 0xb6]));
}

proptest! {
    #[test]
    fn append_crc_round_trips(payload in prop::collection::vec(any::<u8>(), 1..96)) {
        let mut block = payload.clone();
        append_crc_a(&mut block);
        prop_assert_eq!(block.len(), payload.len() + 2);
        prop_assert_eq!(&block[..payload.len()], &payload[..]);
        prop_assert!(verify_crc_a(&block));
    }

    #[test]
    fn single_bit_flip_breaks_crc(
        payload in prop::collection::vec(any::<u8>(), 1..32),
        idx in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut block = payload.clone();
        append_crc_a(&mut block);
        let i = idx.index(block.len());
        block[i] ^= 1 << bit;
        prop_assert!(!verify_crc_a(&block));
    }
}
