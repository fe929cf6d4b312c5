//! Application use cases (business logic orchestration).

mod load_population;

pub use load_population::*;
