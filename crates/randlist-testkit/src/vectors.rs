//! Golden test vectors for the line codec.
//!
//! These vectors pin the exact encoded bytes and the exact post-decode
//! aliasing, including the deliberate forward-reference drop.

use serde::Serialize;

use randlist_core::RandList;

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// What the vector exercises.
    pub description: &'static str,
    /// Payloads, in chain order.
    pub payloads: &'static [&'static str],
    /// Auxiliary target position per node, before encoding.
    pub rand_targets: &'static [Option<usize>],
    /// Expected encoded text.
    pub encoded: &'static str,
    /// Expected auxiliary target position per node after decoding.
    pub decoded_targets: &'static [Option<usize>],
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty",
            description: "Empty list: exactly one sentinel line",
            payloads: &[],
            rand_targets: &[],
            encoded: "-1\n",
            decoded_targets: &[],
        },
        GoldenVector {
            name: "single_no_ref",
            description: "One node without an auxiliary link",
            payloads: &["solo"],
            rand_targets: &[None],
            encoded: "solo\n-1\n-1\n",
            decoded_targets: &[None],
        },
        GoldenVector {
            name: "single_self_ref",
            description: "A self reference is recorded but dropped on decode",
            payloads: &["solo"],
            rand_targets: &[Some(0)],
            encoded: "solo\n-1\n0\n",
            decoded_targets: &[None],
        },
        GoldenVector {
            name: "three_node_classic",
            description: "The worked scenario: 1->3 dropped, 2->1 and 3->2 kept",
            payloads: &["Node 1", "Node 2", "Node 3"],
            rand_targets: &[Some(2), Some(0), Some(1)],
            encoded: "Node 1\nNode 2\nNode 3\n-1\n2\n0\n1\n",
            decoded_targets: &[None, Some(0), Some(1)],
        },
        GoldenVector {
            name: "forward_chain",
            description: "Every link points forward; all are lost on decode",
            payloads: &["a", "b", "c"],
            rand_targets: &[Some(1), Some(2), None],
            encoded: "a\nb\nc\n-1\n1\n2\n-1\n",
            decoded_targets: &[None, None, None],
        },
        GoldenVector {
            name: "backward_chain",
            description: "Every link points backward; all survive decode",
            payloads: &["a", "b", "c"],
            rand_targets: &[None, Some(0), Some(1)],
            encoded: "a\nb\nc\n-1\n-1\n0\n1\n",
            decoded_targets: &[None, Some(0), Some(1)],
        },
        GoldenVector {
            name: "numeric_payloads",
            description: "Payloads that look numeric are still payloads",
            payloads: &["0", "7", "-2"],
            rand_targets: &[Some(0), Some(0), Some(1)],
            encoded: "0\n7\n-2\n-1\n0\n0\n1\n",
            decoded_targets: &[None, Some(0), Some(1)],
        },
    ]
}

/// Build the input list a vector describes.
pub fn build_list_from_vector(vector: &GoldenVector) -> RandList {
    RandList::from_payloads(vector.payloads.iter().copied(), |position, _| {
        vector.rand_targets[position]
    })
}

/// Encode every vector's input and compare against the expected bytes.
///
/// Returns `(name, matched)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool)> {
    all_vectors()
        .iter()
        .map(|vector| {
            let list = build_list_from_vector(vector);
            let mut encoded = Vec::new();
            let ok = randlist_core::codec::encode(&list, &mut encoded).is_ok()
                && encoded == vector.encoded.as_bytes();
            (vector.name.to_string(), ok)
        })
        .collect()
}
