//! In-memory ICE candidate model for a single transport flow of a media
//! stream ([RFC8445](https://tools.ietf.org/html/rfc8445)). Holds local and
//! remote candidate lists, prioritizes and deduplicates local candidates,
//! and selects defaults. Does no network I/O; candidates' sockets are
//! external resources released through [`Candidate::free`].

mod candidate;
mod errors;

use std::sync::Mutex;

pub use candidate::{Candidate, CandidateKind, Transport};
pub use errors::{CandidateError, ComponentError};

/// A back-reference to the media stream that owns this component, modeled
/// as a relation-only handle: the Component never owns or dereferences its
/// parent, it only reports the index it was given.
pub type ParentStreamHandle = usize;

/// One transport flow of a media stream, e.g. RTP (`component_id == 1`) or
/// RTCP (`component_id == 2`). Owns two independently-locked candidate
/// lists and holds the selected default candidates.
///
/// Locking discipline: `local_candidates` and `remote_candidates` are
/// guarded by two separate [`Mutex`]es. Every read (including snapshotting
/// for [`Self::get_local_candidates`]) and every mutation takes the
/// relevant guard; no operation holds both at once, and no operation holds
/// a guard across a call into candidate code that could re-enter the
/// Component.
pub struct Component {
    component_id: u16,
    transport: Transport,
    parent_stream: ParentStreamHandle,
    local_candidates: Mutex<Vec<Candidate>>,
    remote_candidates: Mutex<Vec<Candidate>>,
    default_candidate: Mutex<Option<Candidate>>,
    default_remote_candidate: Mutex<Option<Candidate>>,
}

impl Component {
    /// Creates an empty Component for the given `component_id` (must be in
    /// `1..=256`) and `transport`, bound to `parent_stream`.
    pub fn new(
        component_id: u16,
        transport: Transport,
        parent_stream: ParentStreamHandle,
    ) -> Result<Self, ComponentError> {
        if !(1..=256).contains(&component_id) {
            return Err(ComponentError::InvalidComponentId { component_id });
        }

        Ok(Self {
            component_id,
            transport,
            parent_stream,
            local_candidates: Mutex::new(Vec::new()),
            remote_candidates: Mutex::new(Vec::new()),
            default_candidate: Mutex::new(None),
            default_remote_candidate: Mutex::new(None),
        })
    }

    /// This component's id, e.g. `1` for RTP or `2` for RTCP.
    pub fn get_component_id(&self) -> u16 {
        self.component_id
    }

    /// The transport protocol candidates on this component use.
    pub fn get_transport(&self) -> Transport {
        self.transport
    }

    /// The relation-only handle to this component's owning media stream.
    pub fn get_parent_stream(&self) -> ParentStreamHandle {
        self.parent_stream
    }

    /// Appends one local candidate, preserving insertion order among calls
    /// on the same thread.
    pub fn add_local_candidate(&self, candidate: Candidate) {
        self.local_candidates.lock().unwrap().push(candidate);
    }

    /// Appends local candidates in order. A no-op on an empty slice.
    pub fn add_local_candidates(&self, candidates: Vec<Candidate>) {
        if candidates.is_empty() {
            return;
        }

        self.local_candidates.lock().unwrap().extend(candidates);
    }

    /// Appends one remote candidate.
    pub fn add_remote_candidate(&self, candidate: Candidate) {
        self.remote_candidates.lock().unwrap().push(candidate);
    }

    /// Appends remote candidates in order. A no-op on an empty slice.
    pub fn add_remote_candidates(&self, candidates: Vec<Candidate>) {
        if candidates.is_empty() {
            return;
        }

        self.remote_candidates.lock().unwrap().extend(candidates);
    }

    /// An independent snapshot of the local candidate list, in its current
    /// order.
    pub fn get_local_candidates(&self) -> Vec<Candidate> {
        self.local_candidates.lock().unwrap().clone()
    }

    /// An independent snapshot of the remote candidate list, in insertion
    /// order.
    pub fn get_remote_candidates(&self) -> Vec<Candidate> {
        self.remote_candidates.lock().unwrap().clone()
    }

    /// Count of local candidates whose type is `Host` and whose
    /// `is_virtual` is false.
    pub fn count_local_host_candidates(&self) -> usize {
        self.local_candidates
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.kind() == CandidateKind::Host && !c.is_virtual())
            .count()
    }

    /// Computes each local candidate's priority
    /// ([RFC8445 §5.1.2](https://tools.ietf.org/html/rfc8445#section-5.1.2)),
    /// then sorts the local candidate list in strictly descending order of
    /// priority. The sort is stable, so candidates with equal priority
    /// keep their relative insertion order.
    pub fn prioritize_candidates(&self) {
        let component_id = self.component_id;
        let mut candidates = self.local_candidates.lock().unwrap();

        for candidate in candidates.iter_mut() {
            candidate.compute_priority(component_id);
        }

        candidates.sort_by(|a, b| b.priority().cmp(&a.priority()));
    }

    /// Removes redundant local candidates. Precondition: candidates are
    /// already sorted in descending priority order (call
    /// [`Self::prioritize_candidates`] first). For each candidate `c`,
    /// scanned in order, every later candidate sharing both
    /// `transport_address` and `base` with `c` is dropped, since `c` is
    /// guaranteed to carry priority greater than or equal to theirs. After
    /// this pass, only the highest-priority candidate of each
    /// `(transport_address, base)` class remains.
    pub fn eliminate_redundant_candidates(&self) {
        let mut candidates = self.local_candidates.lock().unwrap();
        let mut kept: Vec<Candidate> = Vec::with_capacity(candidates.len());

        for candidate in candidates.drain(..) {
            let already_kept = kept.iter().any(|k| {
                k.transport_address() == candidate.transport_address() && k.base() == candidate.base()
            });

            if !already_kept {
                kept.push(candidate);
            }
        }

        *candidates = kept;
    }

    /// The currently selected default local candidate, if any.
    pub fn get_default_candidate(&self) -> Option<Candidate> {
        self.default_candidate.lock().unwrap().clone()
    }

    /// Scans local candidates and sets the default to the one with maximum
    /// `default_preference`, ties broken by first-seen. Leaves the default
    /// `None` if the local candidate list is empty.
    pub fn select_default_candidate(&self) {
        let candidates = self.local_candidates.lock().unwrap();

        // `Iterator::max_by_key` returns the *last* maximum on a tie, but
        // spec.md §4.3 requires ties broken by first-seen, so the maximum is
        // tracked by hand, only replacing on a strictly greater preference.
        let mut selected: Option<&Candidate> = None;
        for candidate in candidates.iter() {
            let is_new_max = match selected {
                Some(current) => candidate.default_preference() > current.default_preference(),
                None => true,
            };

            if is_new_max {
                selected = Some(candidate);
            }
        }

        *self.default_candidate.lock().unwrap() = selected.cloned();
    }

    /// Sets the default remote candidate, supplied externally (e.g. from
    /// signaling) rather than selected from `remote_candidates`.
    pub fn set_default_remote_candidate(&self, candidate: Candidate) {
        *self.default_remote_candidate.lock().unwrap() = Some(candidate);
    }

    /// The currently set default remote candidate, if any.
    pub fn get_default_remote_candidate(&self) -> Option<Candidate> {
        self.default_remote_candidate.lock().unwrap().clone()
    }

    /// Releases every local candidate's underlying resource (via each
    /// candidate's own [`Candidate::free`]), then clears the local
    /// candidate list.
    pub fn free(&self) {
        let mut candidates = self.local_candidates.lock().unwrap();

        for candidate in candidates.iter() {
            candidate.free();
        }

        candidates.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(addr: &str, default_preference: u16) -> Candidate {
        Candidate::new_host(addr.parse().unwrap(), Transport::Udp, default_preference, "1")
    }

    #[test]
    fn new_rejects_out_of_range_component_id() {
        assert!(matches!(
            Component::new(0, Transport::Udp, 0),
            Err(ComponentError::InvalidComponentId { component_id: 0 })
        ));
        assert!(matches!(
            Component::new(257, Transport::Udp, 0),
            Err(ComponentError::InvalidComponentId { component_id: 257 })
        ));
        assert!(Component::new(1, Transport::Udp, 0).is_ok());
        assert!(Component::new(256, Transport::Udp, 0).is_ok());
    }

    #[test]
    fn add_local_candidates_empty_is_noop() {
        let component = Component::new(1, Transport::Udp, 0).unwrap();
        component.add_local_candidates(Vec::new());

        assert!(component.get_local_candidates().is_empty());
    }

    #[test]
    fn prioritize_then_eliminate_redundant() {
        let component = Component::new(1, Transport::Udp, 0).unwrap();

        component.add_local_candidate(host("192.0.2.1:100", 100));
        component.add_local_candidate(host("192.0.2.2:200", 500));
        component.add_local_candidate(host("192.0.2.3:300", 300));

        component.prioritize_candidates();

        let priorities: Vec<u32> = component
            .get_local_candidates()
            .iter()
            .map(Candidate::priority)
            .collect();
        assert_eq!(priorities, vec![priorities[0], priorities[1], priorities[2]]);
        assert!(priorities[0] > priorities[1]);
        assert!(priorities[1] > priorities[2]);

        // Duplicate the third candidate's (address, base) with a lower priority.
        let duplicate_addr = component.get_local_candidates()[2].transport_address();
        component.add_local_candidate(host(&duplicate_addr.to_string(), 200));

        component.prioritize_candidates();
        component.eliminate_redundant_candidates();

        let remaining = component.get_local_candidates();
        assert_eq!(remaining.len(), 3);

        let mut seen = std::collections::HashSet::new();
        for candidate in &remaining {
            assert!(seen.insert((candidate.transport_address(), candidate.base())));
        }
    }

    #[test]
    fn select_default_candidate_picks_max_preference_first_seen_on_tie() {
        let component = Component::new(1, Transport::Udp, 0).unwrap();

        component.add_local_candidate(host("192.0.2.1:100", 10));
        component.add_local_candidate(host("192.0.2.2:200", 50));
        component.add_local_candidate(host("192.0.2.3:300", 50));

        component.select_default_candidate();

        let default = component.get_default_candidate().unwrap();
        assert_eq!(default.transport_address(), "192.0.2.2:200".parse().unwrap());
    }

    #[test]
    fn select_default_candidate_on_empty_list_leaves_none() {
        let component = Component::new(1, Transport::Udp, 0).unwrap();
        component.select_default_candidate();

        assert!(component.get_default_candidate().is_none());
    }

    #[test]
    fn count_local_host_candidates_excludes_virtual() {
        let component = Component::new(1, Transport::Udp, 0).unwrap();

        component.add_local_candidate(host("192.0.2.1:100", 10));
        component.add_local_candidate(host("192.0.2.2:200", 10).with_virtual(true));

        assert_eq!(component.count_local_host_candidates(), 1);
    }

    #[test]
    fn free_clears_local_candidates() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let freed = Arc::new(AtomicUsize::new(0));
        let freed_clone = freed.clone();

        let component = Component::new(1, Transport::Udp, 0).unwrap();
        component.add_local_candidate(
            host("192.0.2.1:100", 10).with_free_hook(Box::new(move || {
                freed_clone.fetch_add(1, Ordering::SeqCst);
            })),
        );

        component.free();

        assert_eq!(freed.load(Ordering::SeqCst), 1);
        assert!(component.get_local_candidates().is_empty());
    }
}
