pub mod dns;

pub use dns::{LookupOutcome, PerformLookupUseCase};
