use num_derive::FromPrimitive;

/// Readable representation of STUN/TURN attribute type codes that this
/// codec knows how to decode into a concrete [`super::StunAttribute`]
/// variant.
///
/// This does **not** cover every type code a peer might send — comprehension
/// optional codes (0x8000-0xFFFF) outside this list are surfaced to the
/// caller as [`super::AttributeDecodeError::UnrecognizedAttributeType`] and
/// may be ignored, per [RFC5389 §15](https://tools.ietf.org/html/rfc5389#section-15).
#[derive(Debug, Copy, Clone, Eq, PartialEq, FromPrimitive)]
pub enum StunAttributeType {
    /// [RFC5389 §15.1](https://tools.ietf.org/html/rfc5389#section-15.1)
    MappedAddress = 0x0001,
    /// [RFC3489 §11.2.2](https://tools.ietf.org/html/rfc3489#section-11.2.2) (deprecated)
    ResponseAddress = 0x0002,
    /// [RFC3489 §11.2.3](https://tools.ietf.org/html/rfc3489#section-11.2.3) (deprecated)
    ChangeRequest = 0x0003,
    /// [RFC3489 §11.2.4](https://tools.ietf.org/html/rfc3489#section-11.2.4) (deprecated)
    SourceAddress = 0x0004,
    /// [RFC3489 §11.2.5](https://tools.ietf.org/html/rfc3489#section-11.2.5) (deprecated)
    ChangedAddress = 0x0005,
    /// [RFC5389 §15.3](https://tools.ietf.org/html/rfc5389#section-15.3)
    Username = 0x0006,
    /// [RFC3489 §11.2.9](https://tools.ietf.org/html/rfc3489#section-11.2.9) (deprecated)
    Password = 0x0007,
    /// [RFC5389 §15.4](https://tools.ietf.org/html/rfc5389#section-15.4)
    MessageIntegrity = 0x0008,
    /// [RFC5389 §15.6](https://tools.ietf.org/html/rfc5389#section-15.6)
    ErrorCode = 0x0009,
    /// [RFC5389 §15.9](https://tools.ietf.org/html/rfc5389#section-15.9)
    UnknownAttributes = 0x000a,
    /// [RFC3489 §11.2.10](https://tools.ietf.org/html/rfc3489#section-11.2.10) (deprecated)
    ReflectedFrom = 0x000b,
    /// [RFC5766 §14.1](https://tools.ietf.org/html/rfc5766#section-14.1)
    ChannelNumber = 0x000c,
    /// [RFC5766 §14.2](https://tools.ietf.org/html/rfc5766#section-14.2)
    Lifetime = 0x000d,
    /// [RFC5766 §14.3](https://tools.ietf.org/html/rfc5766#section-14.3)
    XorPeerAddress = 0x0012,
    /// [RFC5766 §14.4](https://tools.ietf.org/html/rfc5766#section-14.4)
    Data = 0x0013,
    /// [RFC5389 §15.7](https://tools.ietf.org/html/rfc5389#section-15.7)
    Realm = 0x0014,
    /// [RFC5389 §15.8](https://tools.ietf.org/html/rfc5389#section-15.8)
    Nonce = 0x0015,
    /// [RFC5766 §14.5](https://tools.ietf.org/html/rfc5766#section-14.5)
    XorRelayedAddress = 0x0016,
    /// [RFC6156 §4.1.1](https://tools.ietf.org/html/rfc6156#section-4.1.1)
    RequestedAddressFamily = 0x0017,
    /// [RFC5766 §14.6](https://tools.ietf.org/html/rfc5766#section-14.6)
    EvenPort = 0x0018,
    /// [RFC5766 §14.7](https://tools.ietf.org/html/rfc5766#section-14.7)
    RequestedTransport = 0x0019,
    /// [RFC5766 §14.8](https://tools.ietf.org/html/rfc5766#section-14.8)
    DontFragment = 0x001a,
    /// [RFC5389 §15.2](https://tools.ietf.org/html/rfc5389#section-15.2)
    XorMappedAddress = 0x0020,
    /// [RFC5766 §14.9](https://tools.ietf.org/html/rfc5766#section-14.9)
    ReservationToken = 0x0022,
    /// [RFC8445 §7.1.1](https://tools.ietf.org/html/rfc8445#section-7.1.1)
    Priority = 0x0024,
    /// [RFC8445 §7.1.2](https://tools.ietf.org/html/rfc8445#section-7.1.2)
    UseCandidate = 0x0025,
    /// [RFC5389 §15.10](https://tools.ietf.org/html/rfc5389#section-15.10)
    Software = 0x8022,
    /// [RFC5389 §15.11](https://tools.ietf.org/html/rfc5389#section-15.11)
    AlternateServer = 0x8023,
    /// [RFC5389 §15.5](https://tools.ietf.org/html/rfc5389#section-15.5)
    Fingerprint = 0x8028,
    /// [RFC8445 §7.1.3](https://tools.ietf.org/html/rfc8445#section-7.1.3)
    IceControlled = 0x8029,
    /// [RFC8445 §7.1.3](https://tools.ietf.org/html/rfc8445#section-7.1.3)
    IceControlling = 0x802a,
}

/// Every recognized attribute type, in presentity-table row order. Used to
/// walk the table's `Mandatory` cells during strict-mode encode validation.
pub(crate) const ALL: [StunAttributeType; 31] = [
    StunAttributeType::MappedAddress,
    StunAttributeType::ResponseAddress,
    StunAttributeType::ChangeRequest,
    StunAttributeType::SourceAddress,
    StunAttributeType::ChangedAddress,
    StunAttributeType::Username,
    StunAttributeType::Password,
    StunAttributeType::MessageIntegrity,
    StunAttributeType::ErrorCode,
    StunAttributeType::UnknownAttributes,
    StunAttributeType::ReflectedFrom,
    StunAttributeType::ChannelNumber,
    StunAttributeType::Lifetime,
    StunAttributeType::XorPeerAddress,
    StunAttributeType::Data,
    StunAttributeType::Realm,
    StunAttributeType::Nonce,
    StunAttributeType::XorRelayedAddress,
    StunAttributeType::RequestedAddressFamily,
    StunAttributeType::EvenPort,
    StunAttributeType::RequestedTransport,
    StunAttributeType::DontFragment,
    StunAttributeType::XorMappedAddress,
    StunAttributeType::ReservationToken,
    StunAttributeType::Priority,
    StunAttributeType::UseCandidate,
    StunAttributeType::IceControlled,
    StunAttributeType::IceControlling,
    StunAttributeType::Software,
    StunAttributeType::AlternateServer,
    StunAttributeType::Fingerprint,
];
