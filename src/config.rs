/// Encode-time configuration, passed into [`crate::StunMessage::encode_with_config`]
/// instead of being read from ambient process state.
///
/// Mirrors the two named options the source configures globally
/// (`stack.software`, `stack.always_sign`), plus a `strict` flag that gates
/// mandatory-attribute enforcement (full RFC 3489 compatibility mode is a
/// non-goal; `strict` exists so the `InvalidState` path can still be
/// exercised without standing up that whole mode).
#[derive(Debug, Clone, Default)]
pub struct CodecConfig {
    /// Value to place in a synthesized SOFTWARE attribute when one isn't
    /// already present on the message. `None` means no SOFTWARE is added.
    pub software: Option<String>,
    /// When set, a FINGERPRINT attribute is synthesized on every encode if
    /// one isn't already present.
    pub always_sign: bool,
    /// When set, `encode` enforces the presentity table's `Mandatory` cells,
    /// failing with `MessageEncodeError::MissingMandatoryAttribute` if one
    /// is absent. Off by default, matching RFC 5389 mode (spec.md §6).
    pub strict: bool,
}

impl CodecConfig {
    /// The default configuration: no SOFTWARE, no forced FINGERPRINT, no
    /// mandatory-attribute enforcement.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_permissive() {
        let config = CodecConfig::new();
        assert!(config.software.is_none());
        assert!(!config.always_sign);
        assert!(!config.strict);
    }
}
