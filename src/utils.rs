use crate::definitions::{StunTransactionId, STUN_MAGIC_COOKIE_U32};
use crate::header::StunHeader;
use rand::Rng;
use std::io::Cursor;

/// Checks for a STUN message header
///
/// This function is intended to be used with multiplexed streams in order to separate STUN packets from other protocols.
/// Unlike [`StunHeader::decode`] (which preserves whatever magic cookie value it reads, per the codec's decode
/// contract), this also requires the magic cookie to match `0x2112A442`, since that's the actual signal multiplexed
/// demuxing relies on to tell STUN apart from other protocols sharing the port.
///
/// Arguments:
/// * `data_bytes`: Streaming data bytes that need to be checked. Note that only the first 20 bytes are processed.
pub fn check_for_stun_message_header(data_bytes: &[u8]) -> Option<StunHeader> {
    let header = StunHeader::decode(&mut Cursor::new(data_bytes)).ok()?;

    if header.magic_cookie != STUN_MAGIC_COOKIE_U32 {
        return None;
    }

    Some(header)
}

/// Generates a random Transaction Id to be used in a StunMessage
///
/// The [Transaction Id is a randomly selected 96-bit number](https://tools.ietf.org/html/rfc5389#section-3) represented here by StunTransactionId
pub fn generate_transaction_id() -> StunTransactionId {
    let mut rng = rand::thread_rng();
    let buf: StunTransactionId = rng.gen();

    buf
}
