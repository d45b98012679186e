mod perform_lookup;

pub use perform_lookup::{LookupOutcome, PerformLookupUseCase};
