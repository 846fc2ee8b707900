//! # randlist-core
//!
//! Pure primitives for randlist: a doubly linked sequence whose nodes carry
//! one auxiliary cross link, plus the line codec that persists it.
//!
//! This crate contains no file I/O (the codec works over [`std::io::Write`]
//! and [`std::io::BufRead`]), no global state, and no async. It is pure
//! computation over an arena-owned list.
//!
//! ## Key Types
//!
//! - [`RandList`] - The owned sequence of text payloads
//! - [`NodeId`] - Stable, copyable handle to a node in a list
//! - [`codec`] - The position-based line encoding and its inverse
//!
//! ## The codec
//!
//! Node identity cannot be persisted, so the encoder assigns each node its
//! position along the chain and writes auxiliary links as positions. The
//! decoder rebuilds the chain and resolves positions back into handles. See
//! the [`codec`] module for the format and its one known asymmetry.

pub mod codec;
pub mod error;
pub mod list;
pub mod node;

pub use codec::{decode, encode};
pub use error::{CodecError, ListError};
pub use list::{Iter, NodeIds, RandList};
pub use node::NodeId;
