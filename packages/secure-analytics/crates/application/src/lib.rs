pub mod config;
pub mod session;
pub mod simulator;

pub use config::AppConfig;
pub use session::DashboardSession;
pub use simulator::LiveSimulator;
