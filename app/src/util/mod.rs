//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic so the rest of the crate stays testable on native.

pub mod storage;
pub mod text;
pub mod time;
