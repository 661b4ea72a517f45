use stringprep::saslprep;

pub use super::errors::{
    IntegrityKeyGenerationError, MessageBuildError, MessageDecodeError, MessageEncodeError,
};
use crate::attribute::{presentity, MessageTypeColumn, Presentity, PresentityRow};
use crate::definitions::StunTransactionId;
use crate::header::StunHeader;
use crate::header::{StunMessageClass, StunMessageMethod};
use crate::StunAttribute;

/// STUN message [RFC5389](https://tools.ietf.org/html/rfc5389#section-6)
///
///   STUN messages are encoded in binary using network-oriented format
///   (most significant byte or octet first, also commonly known as big-
///   endian).  The transmission order is described in detail in Appendix B
///   of [RFC0791](https://tools.ietf.org/html/rfc791). Unless otherwise noted, numeric constants are
///   in decimal (base 10).
///
///   All STUN messages MUST start with a 20-byte header followed by zero
///   or more Attributes.  The STUN header contains a STUN message type,
///   magic cookie, transaction ID, and message length.
///```text
///        0                   1                   2                   3
///        0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
///       +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///       |0 0|     STUN Message Type     |         Message Length        |
///       +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///       |                         Magic Cookie                          |
///       +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///       |                                                               |
///       |                     Transaction ID (96 bits)                  |
///       |                                                               |
///       +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///
///                   Figure 2: Format of STUN Message Header
///```
///   The most significant 2 bits of every STUN message MUST be zeroes.
///   This can be used to differentiate STUN packets from other protocols
///   when STUN is multiplexed with other protocols on the same port.
///
///   The message type defines the message class (request, success
///   response, failure response, or indication) and the message method
///   (the primary function) of the STUN message. The method and class are
///   orthogonal, so that for each method, a request, success response,
///   error response, and indication are possible for that method.
///
///   The magic cookie field MUST contain the fixed value 0x2112A442 in
///   network byte order.
///
///   The transaction ID is a 96-bit identifier, used to uniquely identify
///   STUN transactions.
///
///   The message length MUST contain the size, in bytes, of the message
///   not including the 20-byte STUN header.
#[derive(Debug, Clone)]
pub struct StunMessage {
    /// STUN message header
    pub(super) header: StunHeader,
    /// STUN message attributes, in insertion order. At most one attribute
    /// per wire type code — [`Self::add_attribute`] replaces rather than
    /// duplicates.
    pub(super) attributes: Vec<StunAttribute>,
}

impl StunMessage {
    /// Creates a new message
    pub fn new(method: StunMessageMethod, class: StunMessageClass) -> Self {
        let header = StunHeader::new(method, class, None);

        Self {
            header,
            attributes: Vec::new(),
        }
    }

    /// Creates a Binding Request
    pub fn create_request() -> Self {
        Self::default().set_message_class(StunMessageClass::Request)
    }

    /// Creates a Binding Success Response
    pub fn create_success_response() -> Self {
        Self::default().set_message_class(StunMessageClass::SuccessResponse)
    }

    /// Creates a Binding Error Response
    pub fn create_error_response() -> Self {
        Self::default().set_message_class(StunMessageClass::ErrorResponse)
    }

    /// Creates a Binding Indication
    pub fn create_indication() -> Self {
        Self::default().set_message_class(StunMessageClass::Indication)
    }

    /// Creates an Allocate request [RFC5766 §6.1](https://tools.ietf.org/html/rfc5766#section-6.1)
    pub fn create_allocate_request() -> Self {
        Self::new(StunMessageMethod::Allocate, StunMessageClass::Request)
    }

    /// Creates a Refresh request [RFC5766 §7](https://tools.ietf.org/html/rfc5766#section-7)
    pub fn create_refresh_request() -> Self {
        Self::new(StunMessageMethod::Refresh, StunMessageClass::Request)
    }

    /// Creates a ChannelBind request [RFC5766 §11](https://tools.ietf.org/html/rfc5766#section-11)
    pub fn create_channel_bind_request() -> Self {
        Self::new(StunMessageMethod::ChannelBind, StunMessageClass::Request)
    }

    /// Creates a Send indication [RFC5766 §10](https://tools.ietf.org/html/rfc5766#section-10)
    pub fn create_send_indication() -> Self {
        Self::new(StunMessageMethod::Send, StunMessageClass::Indication)
    }

    /// Creates a Data indication [RFC5766 §10](https://tools.ietf.org/html/rfc5766#section-10)
    pub fn create_data_indication() -> Self {
        Self::new(StunMessageMethod::Data, StunMessageClass::Indication)
    }

    /// Sets message transaction id
    pub fn set_transaction_id(mut self, transaction_id: StunTransactionId) -> Self {
        self.header.transaction_id = transaction_id;

        self
    }

    /// Sets message class
    pub fn set_message_class(mut self, class: StunMessageClass) -> Self {
        self.header.message_class = class;

        self
    }

    /// Sets message method
    pub fn set_message_method(mut self, method: StunMessageMethod) -> Self {
        self.header.message_method = method;

        self
    }

    /// Returns an immutable reference to the message header
    pub fn get_header(&self) -> &StunHeader {
        &self.header
    }

    /// Returns an immutable reference to the message attributes
    pub fn get_attributes(&self) -> &Vec<StunAttribute> {
        &self.attributes
    }

    /// Looks up this message's presentity table column, if the table
    /// governs its (class, method) combination at all.
    fn presentity_column(&self) -> Option<MessageTypeColumn> {
        MessageTypeColumn::for_message_type(self.header.message_class, self.header.message_method)
    }

    /// Rejects `attr` if it's `N/A` for this message's (class, method) under
    /// the presentity table (spec.md §6/§7: `IllegalAttribute`), otherwise
    /// inserts it, replacing any existing attribute of the same wire type
    /// (spec.md §3: "adding an attribute whose type code already exists
    /// replaces the existing one").
    fn insert_attribute(mut self, attr: StunAttribute) -> Result<Self, MessageBuildError> {
        if let Some(column) = self.presentity_column() {
            let row = PresentityRow::from(attr.attribute_type());

            if presentity(row, column) == Presentity::NotApplicable {
                return Err(MessageBuildError::IllegalAttribute {
                    attr_type: attr.attribute_type(),
                    class: self.header.message_class,
                    method: self.header.message_method,
                });
            }
        }

        let attr_type = attr.attribute_type();

        match self
            .attributes
            .iter()
            .position(|existing| existing.attribute_type() == attr_type)
        {
            Some(idx) => self.attributes[idx] = attr,
            None => self.attributes.push(attr),
        }

        Ok(self)
    }

    /// Adds an attribute to the list, rejecting it if it's `N/A` for this
    /// message's type.
    pub fn add_attribute(self, attr: StunAttribute) -> Result<Self, MessageBuildError> {
        self.insert_attribute(attr)
    }

    /// Adds a Fingerprint attribute at the end of the message
    ///
    /// NOTE: This function should be invoked only when all other attributes are added
    pub fn add_fingerprint(self) -> Result<Self, MessageBuildError> {
        self.insert_attribute(StunAttribute::Fingerprint { value: 0 })
    }

    /// Adds a MessageIntegrity attribute at the end of the message
    ///
    /// NOTE: This function should be invoked only when all other attributes are added but before the Fingerprint attribute
    pub fn add_message_integrity(self) -> Result<Self, MessageBuildError> {
        self.insert_attribute(StunAttribute::MessageIntegrity { key: Vec::new() })
    }

    /// Adds USER, REALM and MESSAGE-INTEGRITY attributes for long term credential authentication
    ///
    /// NOTE: This function should be invoked only when all other attributes are added but before the Fingerprint attribute
    pub fn add_long_term_credential_message_integrity(
        self,
        username: &str,
        realm: &str,
    ) -> Result<Self, MessageBuildError> {
        let this = self.insert_attribute(StunAttribute::Username {
            value: saslprep(username)?.to_string(),
        })?;

        let this = this.insert_attribute(StunAttribute::Realm {
            value: saslprep(realm)?.to_string(),
        })?;

        this.add_message_integrity()
    }
}

impl std::default::Default for StunMessage {
    /// Default STUN message.
    ///
    /// Class: Request
    /// Method: Binding
    /// Transaction ID: randomly generated
    fn default() -> Self {
        Self::new(StunMessageMethod::BindingRequest, StunMessageClass::Request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_attribute_rejects_na_combination() {
        // PRIORITY is N/A on a Binding success response.
        let result = StunMessage::create_success_response()
            .add_attribute(StunAttribute::Priority { value: 1 });

        assert!(matches!(
            result,
            Err(MessageBuildError::IllegalAttribute { .. })
        ));
    }

    #[test]
    fn add_attribute_replaces_duplicate_type() {
        let msg = StunMessage::create_request()
            .add_attribute(StunAttribute::Priority { value: 1 })
            .unwrap()
            .add_attribute(StunAttribute::Priority { value: 2 })
            .unwrap();

        assert_eq!(msg.get_attributes().len(), 1);
        assert!(matches!(
            msg.get_attributes()[0],
            StunAttribute::Priority { value: 2 }
        ));
    }

    #[test]
    fn send_indication_accepts_peer_address_but_rejects_fingerprint_reorder() {
        let msg = StunMessage::create_send_indication()
            .add_attribute(StunAttribute::XorPeerAddress {
                socket_addr: "192.0.2.1:3478".parse().unwrap(),
            })
            .unwrap();

        assert_eq!(msg.get_attributes().len(), 1);
    }
}
