pub mod facility;
pub mod validation;

pub use facility::*;
pub use validation::*;
