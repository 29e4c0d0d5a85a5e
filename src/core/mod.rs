pub mod agent;

pub use agent::{PortfolioAgent, ResponseSource};
