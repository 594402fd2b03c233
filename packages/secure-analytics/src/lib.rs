pub use application;
pub use domain;
pub use infrastructure;
