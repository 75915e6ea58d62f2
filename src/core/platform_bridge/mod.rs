//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the winit platform layer with the camera core.
//
// This module defines the contract between the platform implementation
// and core logic, so the windowing backend can change without touching
// the camera code.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Core-side event collection and buffering
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub use interface::PlatformError;
pub(crate) use interface::PlatformEvent;
