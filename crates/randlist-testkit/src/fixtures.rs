//! Test fixtures and assertion helpers.

use randlist_core::RandList;

/// Expected encoding of [`three_node_list`]. The encoder records node 1's
/// forward reference; the decoder will drop it.
pub const THREE_NODE_ENCODING: &str = "Node 1\nNode 2\nNode 3\n-1\n2\n0\n1\n";

/// The worked scenario: payloads `Node 1..3` wired node1 -> node3,
/// node2 -> node1, node3 -> node2.
pub fn three_node_list() -> RandList {
    RandList::from_payloads(["Node 1", "Node 2", "Node 3"], |position, _| {
        Some([2, 0, 1][position])
    })
}

/// Project every node's auxiliary link onto its target position, in chain
/// order. Two lists with equal projections have isomorphic aliasing.
pub fn rand_positions(list: &RandList) -> Vec<Option<usize>> {
    list.node_ids()
        .map(|id| list.rand_target(id).and_then(|target| list.index_of(target)))
        .collect()
}
