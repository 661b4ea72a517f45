#[derive(Debug, Copy, Clone, Eq, PartialEq, FromPrimitive)]
/// [STUN message method](https://tools.ietf.org/html/rfc5389#section-18.1)
///
/// A STUN method is a hex number in the range 0x000 - 0xFFF.  The
/// encoding of STUN method into a STUN message is described in
/// Section 6.

/// The initial STUN methods are:

/// 0x000: (Reserved)
/// 0x001: Binding
/// 0x002: (Reserved; was SharedSecret)

/// STUN methods in the range 0x000 - 0x7FF are assigned by IETF Review
/// [RFC5226](https://tools.ietf.org/html/rfc5226).  STUN methods in the range 0x800 - 0xFFF are assigned by
/// Designated Expert [RFC5226](https://tools.ietf.org/html/rfc5226).  The responsibility of the expert is to
/// verify that the selected codepoint(s) are not in use and that the
/// request is not for an abnormally large number of codepoints.
/// Technical review of the extension itself is outside the scope of the
/// designated expert responsibility.
pub enum StunMessageMethod {
    /// STUN binding request method
    BindingRequest = 0b0000_0000_0000_0001,
    /// [RFC5389 §11](https://tools.ietf.org/html/rfc5389#section-11): reserved, was the RFC 3489
    /// shared-secret method. Kept only so the presentity table has a column
    /// for it; no constructor in this crate produces a message with this
    /// method.
    SharedSecret = 0b0000_0000_0000_0010,
    /// [RFC5766 §6](https://tools.ietf.org/html/rfc5766#section-6): requests the server allocate a relayed transport address.
    Allocate = 0b0000_0000_0000_0011,
    /// [RFC5766 §7](https://tools.ietf.org/html/rfc5766#section-7): refreshes the lifetime of an existing allocation.
    Refresh = 0b0000_0000_0000_0100,
    /// [RFC5766 §10](https://tools.ietf.org/html/rfc5766#section-10): relays application data to a peer, client to server.
    Send = 0b0000_0000_0000_0110,
    /// [RFC5766 §10](https://tools.ietf.org/html/rfc5766#section-10): relays application data from a peer, server to client.
    Data = 0b0000_0000_0000_0111,
    /// [RFC5766 §11](https://tools.ietf.org/html/rfc5766#section-11): binds a channel number to a peer address.
    ChannelBind = 0b0000_0000_0000_1001,
}
