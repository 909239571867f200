//! Ports - traits the domain depends on, implemented by adapters.

mod random_source;

pub use random_source::RandomSource;
