//! Adapter implementations of the port traits.
//!
//! `live` talks to the real disk and real processes, `recording` wraps a
//! live adapter and captures every interaction to a cassette, and
//! `replaying` serves a previously captured cassette back.

pub mod live;
pub mod recording;
pub mod replaying;
