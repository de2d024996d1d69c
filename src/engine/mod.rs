//! The interactive core: signal sampling, visibility observation,
//! active-section tracking, and keyboard-driven navigation.

pub mod navigator;
pub mod observer;
pub mod scroll;
pub mod signals;
pub mod tracker;

pub use navigator::{NavIntent, Navigator};
pub use observer::{
    ExtentObserver, ObserverOptions, SubscriptionId, ViewportObserver, VisibilityChange,
};
pub use scroll::ScrollAnimator;
pub use signals::{InputSignals, PointerPosition};
pub use tracker::ActiveSectionTracker;
