//! Byte-counting allocation observer.
//!
//! An installable [`GlobalAlloc`] wrapper over the system allocator that
//! keeps running byte totals. Nothing in this workspace installs it; a
//! binary that wants the report opts in:
//!
//! ```rust,ignore
//! use randlist::alloc::CountingAllocator;
//!
//! #[global_allocator]
//! static ALLOC: CountingAllocator = CountingAllocator::new();
//! ```
//!
//! The counters are relaxed atomics: cheap, and exact totals matter less
//! than orders of magnitude in a report.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

/// System-allocator wrapper counting total and currently live bytes.
pub struct CountingAllocator {
    total: AtomicUsize,
    current: AtomicUsize,
}

impl CountingAllocator {
    /// Create an allocator with zeroed counters.
    pub const fn new() -> Self {
        Self {
            total: AtomicUsize::new(0),
            current: AtomicUsize::new(0),
        }
    }

    /// Total bytes ever allocated.
    pub fn total_allocated(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    /// Bytes allocated and not yet freed.
    pub fn current_usage(&self) -> usize {
        self.current.load(Ordering::Relaxed)
    }
}

impl Default for CountingAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// SAFETY: delegates all allocation to `System`; the counters never affect
// the returned pointers or layouts.
unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            self.total.fetch_add(layout.size(), Ordering::Relaxed);
            self.current.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        self.current.fetch_sub(layout.size(), Ordering::Relaxed);
    }
}
