//! A STUN/TURN message codec and an in-memory ICE candidate model for a
//! single media-stream [`component::Component`].
//!
//! The codec (`header`, `attribute`, `message`) is bit-exact with RFC 5389
//! (STUN), RFC 5766 (TURN), and RFC 8445 (ICE) peers. The `component`
//! module holds, prioritizes, deduplicates, and selects default candidates
//! for one transport flow; it does no network I/O of its own.

mod definitions;
mod utils;

pub mod attribute;
pub mod component;
pub mod config;
pub mod header;
pub mod message;

pub use attribute::{
    AttributeDecodeError, AttributeEncodeError, MessageTypeColumn, Presentity, PresentityRow,
    StunAttribute, StunAttributeType,
};
pub use component::{Candidate, CandidateError, CandidateKind, Component, ComponentError, Transport};
pub use config::CodecConfig;
pub use header::{HeaderDecodeError, HeaderEncodeError, StunHeader, StunMessageClass, StunMessageMethod};
pub use message::{
    IntegrityKeyGenerationError, MessageBuildError, MessageDecodeError, MessageEncodeError,
    StunMessage,
};

pub use utils::{check_for_stun_message_header, generate_transaction_id};
