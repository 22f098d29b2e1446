//! Pending heading - the only state shared between input and the tick loop.
//!
//! Input writes, the tick loop reads once at the start of each avatar step.
//! A single atomic byte: last write wins and there is nothing to tear.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::types::Heading;

/// Cloneable handle to one shared heading cell
#[derive(Debug, Clone)]
pub struct PendingHeading {
    cell: Arc<AtomicU8>,
}

impl PendingHeading {
    pub fn new(initial: Heading) -> Self {
        Self {
            cell: Arc::new(AtomicU8::new(initial.as_u8())),
        }
    }

    /// Overwrite the pending heading
    pub fn set(&self, heading: Heading) {
        self.cell.store(heading.as_u8(), Ordering::Release);
    }

    /// Latest heading written
    pub fn load(&self) -> Heading {
        // Only valid encodings are ever stored.
        Heading::from_u8(self.cell.load(Ordering::Acquire)).unwrap_or(Heading::Right)
    }
}

impl Default for PendingHeading {
    fn default() -> Self {
        Self::new(Heading::Right)
    }
}
