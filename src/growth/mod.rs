//! Compound growth projection and after-tax proceeds

mod compound;
mod projection;

pub use compound::{compound_growth, net_of_tax};
pub use projection::{project_until, GrowthProjection};
