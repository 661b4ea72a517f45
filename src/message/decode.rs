use std::io::Cursor;

use crate::definitions::{
    STUN_FINGERPRINT_ATTR_SIZE, STUN_HEADER_SIZE, STUN_INTEGRITY_ATTR_SIZE,
};
use crate::StunHeader;
use crate::{AttributeDecodeError, StunAttribute};

pub use super::errors::{IntegrityKeyGenerationError, MessageDecodeError, MessageEncodeError};
use super::message::StunMessage;

impl StunMessage {
    /// Decodes and returns the STUN message
    ///
    /// Arguments:
    ///
    /// * `bytes`: binary encoded message to decode from
    /// * `integrity_password`: Optionally set key that will be used for message integrity verification
    pub fn decode(
        bytes: &[u8],
        integrity_password: Option<&str>,
    ) -> Result<Self, MessageDecodeError> {
        let data_len = bytes.len();
        let mut cursor = Cursor::new(bytes);

        // Decode header
        let header = StunHeader::decode(&mut cursor)?;

        // The declared length must fit within what's actually available
        // after the header; `bytes` may legitimately carry more than one
        // message (e.g. a stream buffer), so trailing bytes past the
        // declared length are left untouched rather than rejected.
        let available = data_len.saturating_sub(STUN_HEADER_SIZE);
        if header.message_len as usize > available {
            return Err(MessageDecodeError::DeclaredLengthMismatch {
                declared: header.message_len,
                available,
            });
        }
        let message_end = (STUN_HEADER_SIZE + header.message_len as usize) as u64;

        // Decode attributes
        let mut attributes = Vec::new();

        let mut integrity_attr_passed = false;

        // Track for username/realm occurrences
        let mut username = None;
        let mut realm = None;

        while cursor.position() < message_end {
            let decoded = StunAttribute::decode(&mut cursor, header.transaction_id);

            match decoded {
                Ok(decoded) => {
                    // Ignore all attributes after the MESSAGE-INTEGRITY attribute.
                    // As per [RFC5389 Section 15.4](https://tools.ietf.org/html/rfc5389#section-15.4)
                    if !integrity_attr_passed {
                        attributes.push(decoded.clone());
                    }

                    // Handle Fingerprint and MessageIntegrity attributes
                    match decoded {
                        StunAttribute::Username { value } => {
                            username = Some(value);
                        }
                        StunAttribute::Realm { value } => {
                            realm = Some(value);
                        }
                        StunAttribute::Fingerprint { value } => {
                            let attr_pos = cursor.position() as usize - STUN_FINGERPRINT_ATTR_SIZE;

                            // Make sure the Fingerprint attribute is the last one
                            if cursor.position() != message_end {
                                return Err(
                                    MessageDecodeError::IncorrectFingerprintAttributePosition {
                                        msg_len: message_end as usize,
                                        attr_pos: attr_pos as usize,
                                    },
                                );
                            }

                            // Compute fingerprint for verification
                            let computed_fingerprint =
                                Self::calculate_fingerprint(&cursor.get_ref()[0..attr_pos]);

                            // Make sure the fingerprint matches
                            if computed_fingerprint != value {
                                return Err(MessageDecodeError::FingerprintMismatch {
                                    attr_value: value,
                                    computed_value: computed_fingerprint,
                                });
                            }

                            if integrity_attr_passed {
                                // Push the attribute to the list explicitly since it's after the MessageIntegrity attribute
                                attributes.push(decoded);
                            }
                        }
                        StunAttribute::MessageIntegrity { key } => {
                            // Mark MessageIntegrity attribute as passed so we can ignore attributes that happen after it
                            // With the exception of the Fingerprint attribute
                            integrity_attr_passed = true;

                            // If an `integrity_password` has been supplied, recalculate and verify the HMAC value
                            if let Some(integrity_password) = integrity_password {
                                let integrity_key = Self::calculate_integrity_key(
                                    integrity_password,
                                    realm.clone(),
                                    username.clone(),
                                )?;

                                let hmac = Self::calculate_integrity_hash(
                                    &integrity_key,
                                    &cursor.get_ref()[0..(cursor.position() as usize
                                        - STUN_INTEGRITY_ATTR_SIZE)
                                        as usize],
                                );

                                // Verify message integrity
                                if hmac != key {
                                    return Err(MessageDecodeError::MessageIntegrityFail {
                                        attr_value: key,
                                        computed_value: hmac,
                                    });
                                }
                            }
                        }
                        _ => {}
                    };
                }
                Err(err) => {
                    match err {
                        AttributeDecodeError::UnrecognizedAttributeType { attr_type } => {
                            // Attributes with type values between 0x8000 and 0xFFFF are
                            // comprehension-optional attributes, which means that those attributes
                            // can be ignored by the STUN agent if it does not understand them.
                            // Only return an error when the attribute is comprehension-required
                            if attr_type < 0x8000 {
                                return Err(MessageDecodeError::from(err));
                            }
                        }
                        // Return an error on any other attribute decoding error
                        _ => return Err(MessageDecodeError::from(err)),
                    }
                }
            }
        }

        Ok(Self { header, attributes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{StunMessageClass, StunMessageMethod};
    use crate::StunAttribute;

    #[test]
    fn minimal_binding_request_round_trips() {
        let msg = StunMessage::new(StunMessageMethod::BindingRequest, StunMessageClass::Request)
            .set_transaction_id([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);

        let encoded = msg.encode(None).unwrap();
        let decoded = StunMessage::decode(&encoded, None).unwrap();

        assert_eq!(decoded.encode(None).unwrap(), encoded);
    }

    #[test]
    fn fingerprint_is_byte_exact_and_decodes() {
        let msg = StunMessage::create_request()
            .add_attribute(StunAttribute::Username {
                value: "user".to_string(),
            })
            .unwrap()
            .add_fingerprint()
            .unwrap();

        let encoded = msg.encode(None).unwrap();

        assert_eq!(&encoded[encoded.len() - 8..encoded.len() - 4], &[0x80, 0x28, 0x00, 0x04]);

        let crc = StunMessage::calculate_fingerprint(&encoded[..encoded.len() - 8]);
        let stored = u32::from_be_bytes([
            encoded[encoded.len() - 4],
            encoded[encoded.len() - 3],
            encoded[encoded.len() - 2],
            encoded[encoded.len() - 1],
        ]);
        assert_eq!(crc, stored);

        assert!(StunMessage::decode(&encoded, None).is_ok());
    }

    #[test]
    fn truncated_message_fails_to_decode() {
        let msg = StunMessage::create_request();
        let encoded = msg.encode(None).unwrap();

        // A full header is 20 bytes; 19 is one short.
        let truncated = &encoded[..19];

        assert!(StunMessage::decode(truncated, None).is_err());
    }

    #[test]
    fn declared_length_mismatch_is_rejected() {
        let msg = StunMessage::create_request()
            .add_attribute(StunAttribute::Username {
                value: "user".to_string(),
            })
            .unwrap();
        let encoded = msg.encode(None).unwrap();

        // A full 20-byte header is present but one declared attribute byte
        // is missing off the end.
        let short = &encoded[..encoded.len() - 1];
        assert!(matches!(
            StunMessage::decode(short, None),
            Err(MessageDecodeError::DeclaredLengthMismatch { .. })
        ));
    }

    #[test]
    fn trailing_bytes_past_declared_length_are_ignored() {
        let msg = StunMessage::create_request();
        let encoded = msg.encode(None).unwrap();

        // `bytes` may carry more than one message back-to-back (e.g. a
        // stream buffer); bytes past this message's declared length must
        // not be parsed as further attributes or rejected outright.
        let mut with_trailer = encoded.clone();
        with_trailer.extend_from_slice(&encoded);

        let decoded = StunMessage::decode(&with_trailer, None).unwrap();
        assert_eq!(decoded.encode(None).unwrap(), encoded);
    }
}
