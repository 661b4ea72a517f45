use std::io::{Cursor, Write};

pub use super::errors::{
    IntegrityKeyGenerationError, MessageBuildError, MessageDecodeError, MessageEncodeError,
};
use super::message::StunMessage;

use crate::attribute::{
    presentity, MessageTypeColumn, Presentity, PresentityRow, StunAttribute, ALL_ATTRIBUTE_TYPES,
};
use crate::config::CodecConfig;

impl StunMessage {
    /// Encodes the STUN message into a binary representation, without any
    /// [`CodecConfig`] applied — a thin wrapper over
    /// [`Self::encode_with_config`] for callers that don't synthesize
    /// SOFTWARE/FINGERPRINT or enforce mandatory attributes.
    ///
    /// Arguments:
    ///
    /// * `integrity_password`: Optionally set key that will be used for message integrity generation. Required if a MessageIntegrity attribute is present.
    pub fn encode(&self, integrity_password: Option<&str>) -> Result<Vec<u8>, MessageEncodeError> {
        self.encode_with_config(integrity_password, &CodecConfig::default())
    }

    /// Encodes the STUN message into a binary representation, applying the
    /// preparation pass spec.md §4.2 describes: MESSAGE-INTEGRITY and
    /// FINGERPRINT are pulled off the end (if present), a SOFTWARE attribute
    /// is synthesized from `config.software` when requested and absent, then
    /// MESSAGE-INTEGRITY and FINGERPRINT are re-appended in that order,
    /// FINGERPRINT being synthesized too if `config.always_sign` is set.
    ///
    /// When `config.strict` is set, every `Mandatory` cell of the presentity
    /// table for this message's (class, method) must be present among the
    /// final attributes, or this fails with
    /// [`MessageEncodeError::MissingMandatoryAttribute`].
    pub fn encode_with_config(
        &self,
        integrity_password: Option<&str>,
        config: &CodecConfig,
    ) -> Result<Vec<u8>, MessageEncodeError> {
        let mut attributes = self.attributes.clone();

        let message_integrity = remove_first(&mut attributes, |attr| {
            matches!(attr, StunAttribute::MessageIntegrity { .. })
        });
        let fingerprint = remove_first(&mut attributes, |attr| {
            matches!(attr, StunAttribute::Fingerprint { .. })
        });

        if let Some(software) = &config.software {
            if !attributes
                .iter()
                .any(|attr| matches!(attr, StunAttribute::Software { .. }))
            {
                attributes.push(StunAttribute::Software {
                    description: software.clone(),
                });
            }
        }

        if let Some(message_integrity) = message_integrity {
            attributes.push(message_integrity);
        }

        match fingerprint {
            Some(fingerprint) => attributes.push(fingerprint),
            None if config.always_sign => {
                attributes.push(StunAttribute::Fingerprint { value: 0 })
            }
            None => {}
        }

        if config.strict {
            self.validate_mandatory_attributes(&attributes)?;
        }

        self.encode_prepared(&attributes, integrity_password)
    }

    /// Fails with `MissingMandatoryAttribute` if `attributes` lacks a type
    /// the presentity table marks `Mandatory` for this message's (class,
    /// method). No-op when the table doesn't govern this (class, method).
    fn validate_mandatory_attributes(
        &self,
        attributes: &[StunAttribute],
    ) -> Result<(), MessageEncodeError> {
        let column =
            match MessageTypeColumn::for_message_type(self.header.message_class, self.header.message_method) {
                Some(column) => column,
                None => return Ok(()),
            };

        for attr_type in ALL_ATTRIBUTE_TYPES.iter().copied() {
            let row = PresentityRow::from(attr_type);

            if presentity(row, column) != Presentity::Mandatory {
                continue;
            }

            let present = attributes
                .iter()
                .any(|attr| attr.attribute_type() == attr_type);

            if !present {
                return Err(MessageEncodeError::MissingMandatoryAttribute {
                    attr_type,
                    class: self.header.message_class,
                    method: self.header.message_method,
                });
            }
        }

        Ok(())
    }

    // Encodes the header followed by `attributes` in order, computing
    // content-dependent attributes (MESSAGE-INTEGRITY, FINGERPRINT) against
    // the buffer as written so far.
    fn encode_prepared(
        &self,
        attributes: &[StunAttribute],
        integrity_password: Option<&str>,
    ) -> Result<Vec<u8>, MessageEncodeError> {
        let attr_count = attributes.len();
        let mut cursor = Cursor::new(Vec::new());

        // Encode and write the header
        let encoded_header = &self.header.encode()?;
        cursor.write_all(encoded_header)?;

        // Mark that a message integrity attribute is present
        let mut msg_integrity_present = false;

        // Track for username/realm occurrences
        let mut username = None;
        let mut realm = None;

        // Process each attribute and encode it
        for (idx, attr) in attributes.iter().enumerate() {
            let processed_attr = match attr {
                // Track the username attribute being set
                StunAttribute::Username { value } => {
                    username = Some(value.clone());

                    attr.clone()
                }
                // Track the realm attribute being set
                StunAttribute::Realm { value } => {
                    realm = Some(value.clone());

                    attr.clone()
                }
                // Process the Fingerprint attribute
                StunAttribute::Fingerprint { value } => {
                    // Make sure that the Fingerprint attribute is the last one
                    if attr_count - 1 != idx {
                        return Err(MessageEncodeError::IncorrectFingerprintAttributePosition {
                            attr_count,
                            fingerprint_attr_idx: idx,
                        });
                    }
                    // Check if it contains a placeholder value and replace it with the computed fingerprint
                    if *value == 0 {
                        // Update the encoded message length so the correct fingerprint can be calculated
                        self.set_message_length(&mut cursor.get_mut(), 8);

                        // Update the fingerprint value
                        let fingerprint = Self::calculate_fingerprint(cursor.get_ref());

                        StunAttribute::Fingerprint { value: fingerprint }
                    } else {
                        attr.clone()
                    }
                }
                // Process the MessageIntegrity attribute
                StunAttribute::MessageIntegrity { key } => {
                    // Mark it as present
                    msg_integrity_present = true;

                    // In case of placeholder data, replace it with the calculated HMAC value
                    if key.is_empty() {
                        if let Some(integrity_password) = integrity_password {
                            // Calculate the integrity key
                            let integrity_key = Self::calculate_integrity_key(
                                integrity_password,
                                realm.clone(),
                                username.clone(),
                            )?;

                            let hmac =
                                Self::calculate_integrity_hash(&integrity_key, cursor.get_ref());

                            StunAttribute::MessageIntegrity { key: hmac }
                        } else {
                            // Return an error if no `integrity_password` is submitted with placeholder data
                            return Err(MessageEncodeError::MissingIntegrityPassword());
                        }
                    } else {
                        // Return pre-submitted data
                        attr.clone()
                    }
                }
                _ => {
                    // If a MessageIntegrity attribute has been already addded,
                    // no other attributes (except Fingerprint) can be added after it
                    if msg_integrity_present {
                        return Err(MessageEncodeError::AttributeAfterIntegrity());
                    }

                    attr.clone()
                }
            };

            // Encode and write the attribute
            let encoded_attr = processed_attr.encode(self.header.transaction_id)?;
            cursor.write_all(&encoded_attr)?;
        }

        // Update the encoded message length
        self.set_message_length(&mut cursor.get_mut(), 0);

        // Return the encoded data
        Ok(cursor.get_ref().to_vec())
    }
}

// Removes and returns the first attribute matching `predicate`, if any.
fn remove_first(
    attributes: &mut Vec<StunAttribute>,
    predicate: impl Fn(&StunAttribute) -> bool,
) -> Option<StunAttribute> {
    let idx = attributes.iter().position(predicate)?;

    Some(attributes.remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{StunMessageClass, StunMessageMethod};

    #[test]
    fn strict_mode_requires_peer_address_on_send_indication() {
        let msg = StunMessage::new(StunMessageMethod::Send, StunMessageClass::Indication)
            .add_attribute(StunAttribute::Data {
                value: b"hello".to_vec(),
            })
            .unwrap();

        let config = CodecConfig {
            strict: true,
            ..Default::default()
        };

        let result = msg.encode_with_config(None, &config);

        assert!(matches!(
            result,
            Err(MessageEncodeError::MissingMandatoryAttribute { .. })
        ));
    }

    #[test]
    fn non_strict_mode_allows_missing_mandatory_attribute() {
        let msg = StunMessage::new(StunMessageMethod::Send, StunMessageClass::Indication)
            .add_attribute(StunAttribute::Data {
                value: b"hello".to_vec(),
            })
            .unwrap();

        assert!(msg.encode(None).is_ok());
    }

    #[test]
    fn always_sign_synthesizes_fingerprint() {
        let msg = StunMessage::create_request();
        let config = CodecConfig {
            always_sign: true,
            ..Default::default()
        };

        let encoded = msg.encode_with_config(None, &config).unwrap();
        assert_eq!(&encoded[encoded.len() - 8..encoded.len() - 4], &[0x80, 0x28, 0x00, 0x04]);
    }

    #[test]
    fn software_is_synthesized_once() {
        let msg = StunMessage::create_request()
            .add_attribute(StunAttribute::Software {
                description: "existing".to_string(),
            })
            .unwrap();

        let config = CodecConfig {
            software: Some("stun-ice-coder".to_string()),
            ..Default::default()
        };

        let encoded = msg.encode_with_config(None, &config).unwrap();
        let decoded = StunMessage::decode(&encoded, None).unwrap();

        let software_count = decoded
            .get_attributes()
            .iter()
            .filter(|attr| matches!(attr, StunAttribute::Software { .. }))
            .count();

        assert_eq!(software_count, 1);
    }
}
