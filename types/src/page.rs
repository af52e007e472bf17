use serde::{Deserialize, Serialize};

/// Request-scoped paging window describing which slice of the population
/// to draw candidates from.
///
/// The window is created per incoming request and never persisted by the
/// engine; keeping it across a session is the caller's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Index of the first record in the window.
    pub offset: u64,
    /// Number of records in the window, always within
    /// [`MIN_SIZE`](Self::MIN_SIZE)..=[`MAX_SIZE`](Self::MAX_SIZE).
    pub size: u32,
}

impl PageWindow {
    /// Smallest permitted window size.
    pub const MIN_SIZE: u32 = 1;
    /// Largest permitted window size.
    pub const MAX_SIZE: u32 = 100;
    /// Window size used when the caller expresses no preference.
    pub const DEFAULT_SIZE: u32 = 10;

    /// Create a window, clamping `size` into the permitted range.
    pub fn new(offset: u64, size: u32) -> Self {
        Self {
            offset,
            size: size.clamp(Self::MIN_SIZE, Self::MAX_SIZE),
        }
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            offset: 0,
            size: Self::DEFAULT_SIZE,
        }
    }
}
