use super::types::StunAttributeType;
use crate::header::{StunMessageClass, StunMessageMethod};

/// Per-message-type validity status of an attribute, looked up in the
/// [presentity table](https://tools.ietf.org/html/rfc5389#section-13).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Presentity {
    /// The attribute must not appear with this message type.
    NotApplicable,
    /// The attribute may appear, conditioned on other message state
    /// (e.g. whether long-term credentials are in use).
    Conditional,
    /// The attribute may appear unconditionally.
    Optional,
    /// The attribute must appear.
    Mandatory,
}

/// One row of the presentity table: every attribute kind this table governs,
/// plus a trailing catch-all for comprehension-optional types with no row of
/// their own.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PresentityRow {
    MappedAddress,
    ResponseAddress,
    ChangeRequest,
    SourceAddress,
    ChangedAddress,
    Username,
    Password,
    MessageIntegrity,
    ErrorCode,
    UnknownAttributes,
    ReflectedFrom,
    ChannelNumber,
    Lifetime,
    XorPeerAddress,
    Data,
    Realm,
    Nonce,
    XorRelayedAddress,
    RequestedAddressFamily,
    EvenPort,
    RequestedTransport,
    DontFragment,
    XorMappedAddress,
    ReservationToken,
    Priority,
    UseCandidate,
    IceControlled,
    IceControlling,
    Software,
    AlternateServer,
    Fingerprint,
    /// Any comprehension-optional attribute type not covered by a row above.
    UnknownOptional,
}

impl From<StunAttributeType> for PresentityRow {
    fn from(attr_type: StunAttributeType) -> Self {
        match attr_type {
            StunAttributeType::MappedAddress => PresentityRow::MappedAddress,
            StunAttributeType::ResponseAddress => PresentityRow::ResponseAddress,
            StunAttributeType::ChangeRequest => PresentityRow::ChangeRequest,
            StunAttributeType::SourceAddress => PresentityRow::SourceAddress,
            StunAttributeType::ChangedAddress => PresentityRow::ChangedAddress,
            StunAttributeType::Username => PresentityRow::Username,
            StunAttributeType::Password => PresentityRow::Password,
            StunAttributeType::MessageIntegrity => PresentityRow::MessageIntegrity,
            StunAttributeType::ErrorCode => PresentityRow::ErrorCode,
            StunAttributeType::UnknownAttributes => PresentityRow::UnknownAttributes,
            StunAttributeType::ReflectedFrom => PresentityRow::ReflectedFrom,
            StunAttributeType::ChannelNumber => PresentityRow::ChannelNumber,
            StunAttributeType::Lifetime => PresentityRow::Lifetime,
            StunAttributeType::XorPeerAddress => PresentityRow::XorPeerAddress,
            StunAttributeType::Data => PresentityRow::Data,
            StunAttributeType::Realm => PresentityRow::Realm,
            StunAttributeType::Nonce => PresentityRow::Nonce,
            StunAttributeType::XorRelayedAddress => PresentityRow::XorRelayedAddress,
            StunAttributeType::RequestedAddressFamily => PresentityRow::RequestedAddressFamily,
            StunAttributeType::EvenPort => PresentityRow::EvenPort,
            StunAttributeType::RequestedTransport => PresentityRow::RequestedTransport,
            StunAttributeType::DontFragment => PresentityRow::DontFragment,
            StunAttributeType::XorMappedAddress => PresentityRow::XorMappedAddress,
            StunAttributeType::ReservationToken => PresentityRow::ReservationToken,
            StunAttributeType::Priority => PresentityRow::Priority,
            StunAttributeType::UseCandidate => PresentityRow::UseCandidate,
            StunAttributeType::IceControlled => PresentityRow::IceControlled,
            StunAttributeType::IceControlling => PresentityRow::IceControlling,
            StunAttributeType::Software => PresentityRow::Software,
            StunAttributeType::AlternateServer => PresentityRow::AlternateServer,
            StunAttributeType::Fingerprint => PresentityRow::Fingerprint,
        }
    }
}

/// One column of the presentity table: a (class, method) combination the
/// table assigns presentity values for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MessageTypeColumn {
    BindingRequest,
    BindingResponse,
    BindingError,
    SharedSecretRequest,
    SharedSecretResponse,
    SharedSecretError,
    AllocateRequest,
    AllocateResponse,
    RefreshRequest,
    RefreshResponse,
    ChannelBindRequest,
    ChannelBindResponse,
    SendIndication,
    DataIndication,
}

impl MessageTypeColumn {
    /// Maps a (class, method) pair onto its presentity table column.
    ///
    /// Returns `None` for combinations the table doesn't cover (e.g. a
    /// Binding Indication) — presentity validation is skipped for those.
    pub fn for_message_type(
        class: StunMessageClass,
        method: StunMessageMethod,
    ) -> Option<Self> {
        use StunMessageClass::*;
        use StunMessageMethod::*;

        match (method, class) {
            (BindingRequest, Request) => Some(Self::BindingRequest),
            (BindingRequest, SuccessResponse) => Some(Self::BindingResponse),
            (BindingRequest, ErrorResponse) => Some(Self::BindingError),
            (SharedSecret, Request) => Some(Self::SharedSecretRequest),
            (SharedSecret, SuccessResponse) => Some(Self::SharedSecretResponse),
            (SharedSecret, ErrorResponse) => Some(Self::SharedSecretError),
            (Allocate, Request) => Some(Self::AllocateRequest),
            (Allocate, SuccessResponse) | (Allocate, ErrorResponse) => Some(Self::AllocateResponse),
            (Refresh, Request) => Some(Self::RefreshRequest),
            (Refresh, SuccessResponse) | (Refresh, ErrorResponse) => Some(Self::RefreshResponse),
            (ChannelBind, Request) => Some(Self::ChannelBindRequest),
            (ChannelBind, SuccessResponse) | (ChannelBind, ErrorResponse) => {
                Some(Self::ChannelBindResponse)
            }
            (Send, Indication) => Some(Self::SendIndication),
            (Data, Indication) => Some(Self::DataIndication),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

use Presentity::{Conditional, Mandatory, NotApplicable as N, Optional};

// Columns, in `MessageTypeColumn` declaration order:
// BindReq, BindResp, BindErr, SSReq, SSResp, SSErr, AllocReq, AllocResp,
// RefreshReq, RefreshResp, CBindReq, CBindResp, SendInd, DataInd.
//
// The SharedSecret columns are uniformly N/A: `StunMessageMethod::SharedSecret`
// has no public constructor (see header/message_method.rs), so no message can
// ever be validated against them; the column exists only so the table has a
// full 14 entries per row, matching the source's shape.
#[rustfmt::skip]
const TABLE: [[Presentity; 14]; 32] = [
    // MappedAddress
    [N, Optional, N,        N, N, N,  N, N,        N, N,        N, N,        N, N],
    // ResponseAddress (legacy, RFC 3489)
    [N, N, N,                N, N, N,  N, N,        N, N,        N, N,        N, N],
    // ChangeRequest (legacy, RFC 3489)
    [N, N, N,                N, N, N,  N, N,        N, N,        N, N,        N, N],
    // SourceAddress (legacy, RFC 3489)
    [N, N, N,                N, N, N,  N, N,        N, N,        N, N,        N, N],
    // ChangedAddress (legacy, RFC 3489)
    [N, N, N,                N, N, N,  N, N,        N, N,        N, N,        N, N],
    // Username
    [Conditional, N, N,      N, N, N,  Conditional, N, Conditional, N, Conditional, N, Optional, N],
    // Password (legacy, RFC 3489)
    [N, N, N,                N, N, N,  N, N,        N, N,        N, N,        N, N],
    // MessageIntegrity
    [Conditional, Conditional, Conditional, N, N, N, Conditional, Conditional, Conditional, Conditional, Conditional, Conditional, Optional, N],
    // ErrorCode
    [N, N, Mandatory,        N, N, N,  N, Conditional, N, Conditional, N, Conditional, N, N],
    // UnknownAttributes
    [N, N, Optional,         N, N, N,  N, Optional,  N, Optional,  N, Optional,  N, N],
    // ReflectedFrom (legacy, RFC 3489)
    [N, N, N,                N, N, N,  N, N,        N, N,        N, N,        N, N],
    // ChannelNumber
    [N, N, N,                N, N, N,  N, N,        N, N,        Mandatory, N, N, N],
    // Lifetime
    [N, N, N,                N, N, N,  Optional, Mandatory, Optional, Mandatory, N, N, N, N],
    // XorPeerAddress
    [N, N, N,                N, N, N,  N, N,        N, N,        Mandatory, N, Mandatory, N],
    // Data
    [N, N, N,                N, N, N,  N, N,        N, N,        N, N,        Optional, Mandatory],
    // Realm
    [Conditional, N, Conditional, N, N, N, Conditional, N, Conditional, N, Conditional, N, Optional, N],
    // Nonce
    [Conditional, N, Conditional, N, N, N, Conditional, N, Conditional, N, Conditional, N, Optional, N],
    // XorRelayedAddress
    [N, N, N,                N, N, N,  N, Mandatory, N, N,        N, N,        N, N],
    // RequestedAddressFamily
    [N, N, N,                N, N, N,  Optional, N,  N, N,        N, N,        N, N],
    // EvenPort
    [N, N, N,                N, N, N,  Optional, N,  N, N,        N, N,        N, N],
    // RequestedTransport
    [N, N, N,                N, N, N,  Mandatory, N, N, N,        N, N,        N, N],
    // DontFragment
    [N, N, N,                N, N, N,  Optional, N,  N, N,        N, N,        Optional, N],
    // XorMappedAddress
    [N, Mandatory, N,        N, N, N,  N, Mandatory, N, N,        N, N,        N, N],
    // ReservationToken
    [N, N, N,                N, N, N,  Optional, Optional, N, N, N, N,        N, N],
    // Priority
    [Mandatory, N, N,        N, N, N,  N, N,        N, N,        N, N,        N, N],
    // UseCandidate
    [Optional, N, N,         N, N, N,  N, N,        N, N,        N, N,        N, N],
    // IceControlled
    [Conditional, N, N,      N, N, N,  N, N,        N, N,        N, N,        N, N],
    // IceControlling
    [Conditional, N, N,      N, N, N,  N, N,        N, N,        N, N,        N, N],
    // Software
    [Optional, Optional, Optional, N, N, N, Optional, Optional, Optional, Optional, Optional, Optional, Optional, Optional],
    // AlternateServer
    [N, N, Optional,         N, N, N,  N, N,        N, N,        N, N,        N, N],
    // Fingerprint
    [Optional, Optional, Optional, N, N, N, Optional, Optional, Optional, Optional, Optional, Optional, Optional, Optional],
    // UnknownOptional (spec.md §9: "shorter than other rows" — N/A except on indications)
    [N, N, N,                N, N, N,  N, N,        N, N,        N, N,        Optional, Optional],
];

/// Looks up the presentity of `row` under `column`.
pub fn presentity(row: PresentityRow, column: MessageTypeColumn) -> Presentity {
    TABLE[row as usize][column.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_32_rows() {
        assert_eq!(TABLE.len(), 32);
    }

    #[test]
    fn table_rows_have_14_columns() {
        for row in TABLE.iter() {
            assert_eq!(row.len(), 14);
        }
    }

    #[test]
    fn shared_secret_columns_are_fully_na() {
        for row in TABLE.iter() {
            assert_eq!(row[3], Presentity::NotApplicable);
            assert_eq!(row[4], Presentity::NotApplicable);
            assert_eq!(row[5], Presentity::NotApplicable);
        }
    }

    #[test]
    fn legacy_rows_are_fully_na() {
        for legacy in [
            PresentityRow::ResponseAddress,
            PresentityRow::ChangeRequest,
            PresentityRow::SourceAddress,
            PresentityRow::ChangedAddress,
            PresentityRow::Password,
            PresentityRow::ReflectedFrom,
        ] {
            for column in TABLE[legacy as usize].iter() {
                assert_eq!(*column, Presentity::NotApplicable);
            }
        }
    }

    #[test]
    fn send_indication_requires_peer_address() {
        assert_eq!(
            presentity(PresentityRow::XorPeerAddress, MessageTypeColumn::SendIndication),
            Presentity::Mandatory
        );
        assert_eq!(
            presentity(PresentityRow::Data, MessageTypeColumn::SendIndication),
            Presentity::Optional
        );
    }

    #[test]
    fn priority_mandatory_in_binding_request() {
        assert_eq!(
            presentity(PresentityRow::Priority, MessageTypeColumn::BindingRequest),
            Presentity::Mandatory
        );
    }

    #[test]
    fn column_mapping_skips_unlisted_combinations() {
        use crate::header::{StunMessageClass, StunMessageMethod};

        assert!(MessageTypeColumn::for_message_type(
            StunMessageClass::Indication,
            StunMessageMethod::BindingRequest
        )
        .is_none());
    }
}
