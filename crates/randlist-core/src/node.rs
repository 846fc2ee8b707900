//! Arena node storage for [`RandList`](crate::RandList).

/// Stable handle to a node in a [`RandList`](crate::RandList).
///
/// A handle is only meaningful for the list that created it and is
/// invalidated by [`RandList::clear`](crate::RandList::clear). A handle from
/// a different list that happens to name a live slot is indistinguishable
/// from a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A single node slot: payload plus chain and auxiliary links.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) payload: String,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    /// Non-owning cross link to any node of the same list, self included.
    pub(crate) rand: Option<NodeId>,
}
