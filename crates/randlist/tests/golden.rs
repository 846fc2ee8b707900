//! Golden vector verification.
//!
//! Every implementation of the line format must produce these exact bytes
//! and recover this exact aliasing.

use serde::Serialize;

use randlist::codec;
use randlist_testkit::vectors::{all_vectors, build_list_from_vector, verify_all_vectors};
use randlist_testkit::{rand_positions, GoldenVector};

#[test]
fn all_vectors_encode_to_expected_bytes() {
    for (name, ok) in verify_all_vectors() {
        assert!(ok, "vector {name} encoded differently");
    }
}

#[test]
fn all_vectors_round_trip_to_expected_aliasing() {
    for vector in all_vectors() {
        let list = build_list_from_vector(&vector);

        let mut encoded = Vec::new();
        codec::encode(&list, &mut encoded).unwrap();
        let decoded = codec::decode(encoded.as_slice()).unwrap();

        assert_eq!(
            decoded.len(),
            vector.payloads.len(),
            "count diverged for {}",
            vector.name
        );
        assert_eq!(
            rand_positions(&decoded),
            vector.decoded_targets,
            "aliasing diverged for {}",
            vector.name
        );
    }
}

#[test]
fn vectors_are_deterministic() {
    for vector in all_vectors() {
        let mut first = Vec::new();
        codec::encode(&build_list_from_vector(&vector), &mut first).unwrap();
        let mut second = Vec::new();
        codec::encode(&build_list_from_vector(&vector), &mut second).unwrap();
        assert_eq!(first, second, "vector {} is not deterministic", vector.name);
    }
}

#[test]
fn print_golden_vectors_json() {
    #[derive(Serialize)]
    struct VectorFile {
        version: String,
        description: String,
        vectors: Vec<GoldenVector>,
    }

    let file = VectorFile {
        version: "0.1.0".to_string(),
        description: "Golden test vectors for the randlist line format. \
                      Every implementation must produce identical outputs."
            .to_string(),
        vectors: all_vectors(),
    };

    let json = serde_json::to_string_pretty(&file).unwrap();
    println!("{}", json);
}
