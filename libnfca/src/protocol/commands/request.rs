// libnfca/src/protocol/commands/request.rs

use crate::constants::{CMD_REQA, CMD_WUPA, REQUEST_FRAME_BITS};
use crate::protocol::BitFrame;
use crate::{Error, Result};

/// Encode REQA (`26`, 7 bits)
pub fn encode_reqa() -> BitFrame {
    BitFrame::short(CMD_REQA)
}

/// Encode WUPA (`52`, 7 bits)
pub fn encode_wupa() -> BitFrame {
    BitFrame::short(CMD_WUPA)
}

/// Decode a 7-bit short frame. Returns true for WUPA, false for REQA.
pub fn decode_short_frame(frame: &BitFrame) -> Result<bool> {
    if frame.bit_len() != REQUEST_FRAME_BITS {
        return Err(Error::FrameFormat(format!(
            "short frame must be {} bits, got {}",
            REQUEST_FRAME_BITS,
            frame.bit_len()
        )));
    }
    let code = crate::protocol::parser::byte_at(frame.as_bytes(), 0)? & 0x7f;
    match code {
        CMD_REQA => Ok(false),
        CMD_WUPA => Ok(true),
        actual => Err(Error::UnexpectedCommand {
            expected: CMD_REQA,
            actual,
        }),
    }
}
