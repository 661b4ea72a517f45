use std::fmt;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::errors::CandidateError;

/// A candidate's teardown action, shared (not duplicated) across clones of
/// the same [`Candidate`] so that freeing any one clone's resource marks it
/// freed for all of them. Wrapped in its own type since `Box<dyn FnOnce() +
/// Send>` implements neither `Clone` nor `Debug`, which `Candidate` needs in
/// order to be returned from `Component`'s list-snapshotting getters.
#[derive(Clone)]
struct FreeHook {
    fired: Arc<AtomicBool>,
    hook: Arc<dyn Fn() + Send + Sync>,
}

impl FreeHook {
    fn new(hook: Box<dyn Fn() + Send + Sync>) -> Self {
        Self {
            fired: Arc::new(AtomicBool::new(false)),
            hook: Arc::from(hook),
        }
    }

    /// Runs the teardown action, unless it (or a clone sharing this hook)
    /// already has.
    fn fire(&self) {
        if !self.fired.swap(true, Ordering::SeqCst) {
            (self.hook)();
        }
    }
}

impl fmt::Debug for FreeHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FreeHook")
            .field("fired", &self.fired.load(Ordering::SeqCst))
            .finish()
    }
}

/// Transport protocol a [`Candidate`] communicates over.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Transport {
    /// User Datagram Protocol.
    Udp,
    /// Transmission Control Protocol.
    Tcp,
    /// Transport Layer Security over TCP.
    Tls,
    /// Datagram Transport Layer Security over UDP.
    Dtls,
}

/// ICE candidate type, in descending order of the type preference RFC 8445
/// §5.1.2.1 recommends (host highest, relayed lowest).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CandidateKind {
    /// A transport address obtained directly from a local interface.
    Host,
    /// A transport address learned via a STUN Binding request
    /// ([RFC8445 §5.1.1.2](https://tools.ietf.org/html/rfc8445#section-5.1.1.2)).
    ServerReflexive,
    /// A transport address learned from an incoming connectivity check
    /// ([RFC8445 §7.2.5.3.1](https://tools.ietf.org/html/rfc8445#section-7.2.5.3.1)).
    PeerReflexive,
    /// A transport address obtained from a TURN server
    /// ([RFC8445 §5.1.1.1](https://tools.ietf.org/html/rfc8445#section-5.1.1.1)).
    Relayed,
}

impl CandidateKind {
    /// RFC 8445 §5.1.2.1 recommends `type preference` values in this range
    /// per kind, constant across all candidates of that kind on an agent.
    /// These are the recommended defaults.
    fn type_preference(self) -> u32 {
        match self {
            CandidateKind::Host => 126,
            CandidateKind::PeerReflexive => 110,
            CandidateKind::ServerReflexive => 100,
            CandidateKind::Relayed => 0,
        }
    }
}

/// A transport address one peer might use to receive media, together with
/// the metadata ICE needs to prioritize and deduplicate it.
///
/// Opaque bundle of `(transportAddress, base, kind, priority,
/// defaultPreference, isVirtual)` per spec.md §3, extended with
/// `foundation` and `related_address` (grounded in RFC 8445 §5.1.1.3 and
/// ice implementations that expose them, e.g. `webrtc-rs`'s `Candidate`
/// trait). This crate stores both fields but doesn't use them in its own
/// logic — they exist for the out-of-scope connectivity checker to consume.
#[derive(Debug, Clone)]
pub struct Candidate {
    transport_address: SocketAddr,
    base: SocketAddr,
    kind: CandidateKind,
    transport: Transport,
    priority: u32,
    default_preference: u16,
    is_virtual: bool,
    foundation: String,
    related_address: Option<SocketAddr>,
    free_hook: Option<FreeHook>,
}

impl Candidate {
    /// Creates a host candidate, where `base == transport_address` as
    /// spec.md §3 requires.
    pub fn new_host(
        transport_address: SocketAddr,
        transport: Transport,
        default_preference: u16,
        foundation: impl Into<String>,
    ) -> Self {
        Self {
            transport_address,
            base: transport_address,
            kind: CandidateKind::Host,
            transport,
            priority: 0,
            default_preference,
            is_virtual: false,
            foundation: foundation.into(),
            related_address: None,
            free_hook: None,
        }
    }

    /// Creates a non-host candidate, whose `base` is the local transport
    /// address it was derived from.
    ///
    /// Fails if `kind` is `Host` — host candidates must go through
    /// [`Self::new_host`], which enforces `base == transport_address`
    /// (spec.md §3) by construction.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        transport_address: SocketAddr,
        base: SocketAddr,
        kind: CandidateKind,
        transport: Transport,
        default_preference: u16,
        foundation: impl Into<String>,
        related_address: Option<SocketAddr>,
    ) -> Result<Self, CandidateError> {
        if kind == CandidateKind::Host {
            return Err(CandidateError::HostCandidateMustUseBaseConstructor);
        }

        Ok(Self {
            transport_address,
            base,
            kind,
            transport,
            priority: 0,
            default_preference,
            is_virtual: false,
            foundation: foundation.into(),
            related_address,
            free_hook: None,
        })
    }

    /// Sets the teardown hook run (at most once, even across clones of this
    /// candidate) by [`Self::free`].
    pub fn with_free_hook(mut self, hook: Box<dyn Fn() + Send + Sync>) -> Self {
        self.free_hook = Some(FreeHook::new(hook));
        self
    }

    /// Marks this candidate as virtual (spec.md §4.3,
    /// `countLocalHostCandidates` excludes virtual host candidates).
    pub fn with_virtual(mut self, is_virtual: bool) -> Self {
        self.is_virtual = is_virtual;
        self
    }

    /// The transport address this candidate represents.
    pub fn transport_address(&self) -> SocketAddr {
        self.transport_address
    }

    /// The local transport address this candidate was derived from. Equal
    /// to `transport_address` for host candidates.
    pub fn base(&self) -> SocketAddr {
        self.base
    }

    /// This candidate's type.
    pub fn kind(&self) -> CandidateKind {
        self.kind
    }

    /// The transport protocol this candidate communicates over.
    pub fn transport(&self) -> Transport {
        self.transport
    }

    /// The priority last computed by [`super::Component::prioritize_candidates`],
    /// or `0` if it has never been computed.
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// The local preference used to break ties among otherwise-equal candidates.
    pub fn default_preference(&self) -> u16 {
        self.default_preference
    }

    /// Whether `countLocalHostCandidates` should skip this candidate.
    pub fn is_virtual(&self) -> bool {
        self.is_virtual
    }

    /// The foundation string: candidates sharing one are assumed to have
    /// similar connectivity (RFC 8445 §5.1.1.3). Stored only; not
    /// interpreted by this crate.
    pub fn foundation(&self) -> &str {
        &self.foundation
    }

    /// The address this candidate is related to (e.g. a server-reflexive
    /// candidate's host base, or a relayed candidate's server-reflexive
    /// mapped address), if any.
    pub fn related_address(&self) -> Option<SocketAddr> {
        self.related_address
    }

    /// Computes and stores this candidate's priority per
    /// [RFC8445 §5.1.2](https://tools.ietf.org/html/rfc8445#section-5.1.2):
    /// `priority = (2^24)*type_preference + (2^8)*local_preference + (256 - component_id)`.
    pub(super) fn compute_priority(&mut self, component_id: u16) {
        let type_preference = self.kind.type_preference();
        let local_preference = u32::from(self.default_preference);

        self.priority =
            (type_preference << 24) + (local_preference << 8) + (256 - u32::from(component_id));
    }

    /// Releases this candidate's underlying resource (e.g. its socket).
    /// Idempotent: a second call (including one made through a clone of
    /// this candidate) is a no-op, since the hook tracks whether it has
    /// already fired.
    pub fn free(&self) {
        if let Some(hook) = &self.free_hook {
            hook.fire();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_candidate_base_equals_transport_address() {
        let addr = "192.0.2.1:4000".parse().unwrap();
        let candidate = Candidate::new_host(addr, Transport::Udp, 65535, "1");

        assert_eq!(candidate.base(), candidate.transport_address());
    }

    #[test]
    fn priority_formula_matches_rfc8445() {
        let addr = "192.0.2.1:4000".parse().unwrap();
        let mut candidate = Candidate::new_host(addr, Transport::Udp, 65535, "1");

        candidate.compute_priority(1);

        let expected = (126u32 << 24) + (65535u32 << 8) + (256 - 1);
        assert_eq!(candidate.priority(), expected);
    }

    #[test]
    fn new_rejects_host_kind() {
        let addr = "192.0.2.1:4000".parse().unwrap();
        let result = Candidate::new(
            addr,
            addr,
            CandidateKind::Host,
            Transport::Udp,
            0,
            "1",
            None,
        );

        assert!(matches!(
            result,
            Err(CandidateError::HostCandidateMustUseBaseConstructor)
        ));
    }

    #[test]
    fn free_hook_runs_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();

        let addr = "192.0.2.1:4000".parse().unwrap();
        let candidate = Candidate::new_host(addr, Transport::Udp, 0, "1")
            .with_free_hook(Box::new(move || {
                calls_clone.fetch_add(1, Ordering::SeqCst);
            }));

        candidate.free();
        candidate.free();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
