//! # randlist
//!
//! A doubly linked sequence whose nodes carry one auxiliary cross link, a
//! position-based line codec for it, and the file plumbing around both.
//!
//! ## Overview
//!
//! - **[`RandList`]**: the owned sequence; auxiliary links are arena
//!   handles, never raw pointers.
//! - **[`codec`]**: position-based text encoding and its inverse.
//! - **[`persist`]**: save/load through real files with path-aware errors.
//! - **[`alloc`]**: an installable byte-counting allocation observer.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use randlist::{load_from_path, save_to_path, RandList};
//!
//! fn example() -> randlist::Result<()> {
//!     let mut list = RandList::new();
//!     let first = list.push_back("Node 1");
//!     let second = list.push_back("Node 2");
//!     list.set_rand(second, Some(first)).expect("members of this list");
//!
//!     save_to_path(&list, "serialized_list.txt")?;
//!     let decoded = load_from_path("serialized_list.txt")?;
//!     assert_eq!(decoded.len(), 2);
//!     Ok(())
//! }
//! ```

pub mod alloc;
pub mod error;
pub mod persist;

// Re-export the core crate for direct access
pub use randlist_core as core;

pub use error::{PersistError, Result};
pub use persist::{load_from_path, save_to_path};

// Re-export commonly used core types
pub use randlist_core::{codec, CodecError, ListError, NodeId, RandList};
