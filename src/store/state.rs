//! Store lifecycle
//!
//! ```text
//! Uninitialized --load--> Loading --ok--> Ready
//!                            |
//!                            +--medium unusable--> LoadFailed --load--> Loading
//! ```
//!
//! Only `Ready` accepts mutations, so an empty pre-load state can never be
//! written over saved data.

use std::fmt;

/// Lifecycle phase of a [`FinanceStore`](super::FinanceStore)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreState {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    LoadFailed,
}

impl StoreState {
    /// Whether mutations (and therefore persistence) are allowed
    pub fn accepts_writes(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Whether `load` may be started from this state
    pub fn can_start_loading(&self) -> bool {
        matches!(self, Self::Uninitialized | Self::LoadFailed | Self::Ready)
    }
}

impl fmt::Display for StoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Loading => write!(f, "loading"),
            Self::Ready => write!(f, "ready"),
            Self::LoadFailed => write!(f, "load failed"),
        }
    }
}
