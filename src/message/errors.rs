use crate::attribute::StunAttributeType;
use crate::header::{StunMessageClass, StunMessageMethod};
use crate::{AttributeDecodeError, AttributeEncodeError, HeaderDecodeError, HeaderEncodeError};
use thiserror::Error;

/// Errors building a [`super::StunMessage`] via its attribute-adding methods.
#[derive(Error, Debug)]
pub enum MessageBuildError {
    /// The attribute's presentity for this message's (class, method) is
    /// `N/A` — spec.md §6/§7's `IllegalAttribute`.
    #[error("Attribute {attr_type:?} is not applicable to a {class:?} {method:?} message.")]
    IllegalAttribute {
        /// The attribute type that was rejected.
        attr_type: StunAttributeType,
        /// The message's class at the time of rejection.
        class: StunMessageClass,
        /// The message's method at the time of rejection.
        method: StunMessageMethod,
    },
    /// SASLprep failed while normalizing a USERNAME or REALM value.
    #[error("Failed to process value via SASLprep.")]
    SASLPrepFailure(#[from] stringprep::Error),
}

/// Integrity Key Errors
#[derive(Error, Debug)]
pub enum IntegrityKeyGenerationError {
    /// SASLprep failure during key generation
    #[error("Failed to process key section via SASLprep.")]
    SASLPrepFailure(#[from] stringprep::Error),
    /// Fails key generation due to missing `username`. May happen when a STUN message contains the REALM but not the username attribute
    #[error("No username has been provided for long-term credential key generation")]
    MissingUsername(),
}

/// Message encoding errors.
#[derive(Error, Debug)]
pub enum MessageDecodeError {
    /// IO error when reading a field value
    #[error("Error reading field value.")]
    ReadFailure(#[from] std::io::Error),
    /// Failure to decode the STUN header section
    #[error("Error decoding STUN header.")]
    HeaderDecodeFailure(#[from] HeaderDecodeError),
    /// Failure to decode a STUN attribute
    #[error("Error decoding STUN attribute.")]
    AttributeDecodeFailure(#[from] AttributeDecodeError),
    /// Failure to generate an integrity verification key
    #[error("Error decoding STUN attribute.")]
    IntegrityKeyGenerationFailure(#[from] IntegrityKeyGenerationError),
    /// Fingerprint attribute is not the last one.
    /// This can mean that either the provided byte data contains more than only the STUN message, or message integrity has been compromised.
    #[error("Fingerprint attribute is not the last one. Message length: {msg_len}, attribute position: {attr_pos}.")]
    IncorrectFingerprintAttributePosition {
        /// STUN message length
        msg_len: usize,
        /// Fingerprint attribute position in that message
        attr_pos: usize,
    },
    /// The header's declared message length exceeds the number of
    /// attribute bytes actually available after the 20-byte header.
    #[error("Declared message length {declared} exceeds the {available} attribute bytes available.")]
    DeclaredLengthMismatch {
        /// `message_len` as read from the header.
        declared: u16,
        /// Bytes actually available after the header.
        available: usize,
    },
    /// Stored and calculated fingerprints mismatch.
    /// Means that the message integrity has been compromised.
    #[error("Fingerprint value mismatch. Attribute value: {attr_value:#X?}, computed value: {computed_value:#X?}.")]
    FingerprintMismatch {
        /// Provided CRC32 value
        attr_value: u32,
        /// Computed CRC32 value
        computed_value: u32,
    },
    /// The calculated HMAC value doesn't match with the provided one.
    /// Either the provided `integrity_key` is incorrect or the message integrity has been compromised.
    #[error("Message integrity is compromised. Attribute HMAC value: {attr_value:#X?}, computed HMAC value: {computed_value:#X?}.")]
    MessageIntegrityFail {
        /// Provided HMAC
        attr_value: Vec<u8>,
        /// Calculated HMAC
        computed_value: Vec<u8>,
    },
}

/// Message decoding errors.
#[derive(Error, Debug)]
pub enum MessageEncodeError {
    /// IO error when writing a field value
    #[error("Error writing field value.")]
    WriteFailure(#[from] std::io::Error),
    /// Failure to encode the STUN header section.
    #[error("Error encoding STUN header.")]
    HeaderEncodeFailure(#[from] HeaderEncodeError),
    /// Failure to encode a STUN attribute
    #[error("Error encoding STUN attribute.")]
    AttributeEncodeFailure(#[from] AttributeEncodeError),
    /// Failure to generate an integrity verification key
    #[error("Error decoding STUN attribute.")]
    IntegrityKeyGenerationFailure(#[from] IntegrityKeyGenerationError),
    /// The Fingerprint attribute is not the last one provided.
    #[error("Fingerprint attribute is not the last one. Attributes count: {attr_count}, fingerprint attribute index: {fingerprint_attr_idx}.")]
    IncorrectFingerprintAttributePosition {
        /// Amount of provided attributes
        attr_count: usize,
        /// Index of the Fingerprint attribute
        fingerprint_attr_idx: usize,
    },
    /// An attribute was added after the MessageIntegrity attribute. Only a single Fingerprint attribute can be added after it.
    #[error("An attribute was added after the MessageIntegrity attribute. Only the Fingerprint attribute can be placed after the MessageIntegrity attribute.")]
    AttributeAfterIntegrity(),
    /// A placeholder MessageIntegrity attribute was set, but no `integrity_key` argument was provided to the `encode` function making the HMAC computation impossible.
    #[error("Missing message integrity password. A placeholder HMAC value is set in MessageIntegrity attribute but no `integrity_password` is provided as an encoding argument.")]
    MissingIntegrityPassword(),
    /// `CodecConfig::strict` was set and a `Mandatory` attribute for this
    /// message's type was absent at encode time. Spec.md §7's `InvalidState`.
    #[error("Mandatory attribute {attr_type:?} missing for a {class:?} {method:?} message.")]
    MissingMandatoryAttribute {
        /// The missing attribute's type.
        attr_type: StunAttributeType,
        /// The message's class.
        class: StunMessageClass,
        /// The message's method.
        method: StunMessageMethod,
    },
}
