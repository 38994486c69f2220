//! Once-per-instance activity guard
//!
//! A page view may re-render many times; only the first pass counts.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActivityGuard {
    counted: bool,
}

impl ActivityGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time it is called, `false` afterwards
    pub fn claim(&mut self) -> bool {
        !std::mem::replace(&mut self.counted, true)
    }

    pub fn is_counted(&self) -> bool {
        self.counted
    }
}
