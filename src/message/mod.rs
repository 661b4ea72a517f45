mod decode;
mod encode;
mod errors;
mod message;
mod private_utils;

pub use errors::{
    IntegrityKeyGenerationError, MessageBuildError, MessageDecodeError, MessageEncodeError,
};
pub use message::StunMessage;
