//! One fetch, parse, classify, notify cycle against the watched store.

pub mod cycle;

pub use cycle::{CycleConfig, CycleFailure, CycleOutcome, CycleReport, Monitor};
