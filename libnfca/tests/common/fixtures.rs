// fixtures.rs — provides commonly used identities and frames

use libnfca::protocol::BitFrame;
use libnfca::types::{Atqa, Sak, TargetIdentity, Uid};

/// Decode a hex string (spaces allowed) into a frame of `bits` bits.
pub fn hex_frame(s: &str, bits: usize) -> BitFrame {
    let bytes = hex::decode(s.replace(' ', "")).unwrap();
    BitFrame::new(bytes, bits).unwrap()
}

pub fn default_uid() -> Uid {
    Uid::from_bytes([0xDE, 0xAD, 0xBE, 0xAF])
}

pub fn sample_uid() -> Uid {
    Uid::from_bytes([0x04, 0x3A, 0x91, 0x5C])
}

/// MIFARE Ultralight-like identity with SAK 0x00
pub fn sample_identity() -> TargetIdentity {
    TargetIdentity::new(sample_uid(), Atqa::from_bytes([0x44, 0x00]), Sak::new(0x00))
}

pub fn reqa() -> BitFrame {
    hex_frame("26", 7)
}

pub fn wupa() -> BitFrame {
    hex_frame("52", 7)
}

pub fn anticollision() -> BitFrame {
    hex_frame("93 20", 16)
}

pub fn select_default_uid() -> BitFrame {
    hex_frame("93 70 de ad be af 62 db 98", 72)
}

pub fn hlta() -> BitFrame {
    hex_frame("50 00 57 cd", 32)
}
