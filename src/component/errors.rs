use thiserror::Error;

/// Errors constructing a [`super::Candidate`].
#[derive(Error, Debug)]
pub enum CandidateError {
    /// `Candidate::new` was asked to build a Host candidate. Host
    /// candidates must be built with `Candidate::new_host`, which fixes
    /// `base == transport_address`.
    #[error("Host candidates must be constructed with Candidate::new_host.")]
    HostCandidateMustUseBaseConstructor,
}

/// Errors constructing or operating a [`super::Component`].
///
/// A Component never errors internally once constructed; it only refuses
/// operations that would violate an invariant, and the only such invariant
/// checked at construction is the `componentId` range.
#[derive(Error, Debug)]
pub enum ComponentError {
    /// `componentId` must be in `{1, ..., 256}`.
    #[error("Component id {component_id} is out of range 1..=256.")]
    InvalidComponentId { component_id: u16 },
}
