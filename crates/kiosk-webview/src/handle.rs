use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a managed view.
///
/// Allocated by a [`ViewRegistry`](crate::ViewRegistry) from its own
/// counter; never reused after the view is destroyed. `0` is a valid handle.
/// Serializes as a bare number so hosted content sees plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewHandle(pub u64);

impl ViewHandle {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view-{}", self.0)
    }
}
