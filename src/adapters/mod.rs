//! Adapters - concrete implementations of the ports.

mod random;

pub use random::{ScriptedRandomSource, ThreadRngSource};
