//! # randlist-testkit
//!
//! Testing utilities for randlist.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Generators**: deterministic random lists and proptest strategies
//! - **Fixtures**: the worked three-node scenario and assertion helpers
//! - **Golden vectors**: known inputs with expected encodings and expected
//!   post-decode aliasing
//!
//! ## Generators
//!
//! ```rust
//! use randlist_testkit::generators::random_list;
//!
//! let list = random_list(42, 1_000);
//! assert_eq!(list.len(), 1_000);
//! ```
//!
//! ## Golden vectors
//!
//! ```rust
//! use randlist_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok) in verify_all_vectors() {
//!     assert!(ok, "vector {name} diverged");
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{rand_positions, three_node_list, THREE_NODE_ENCODING};
pub use generators::{list_from_params, random_list, ListParams};
pub use vectors::{all_vectors, build_list_from_vector, verify_all_vectors, GoldenVector};
