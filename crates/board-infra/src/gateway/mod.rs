//! Backend gateway adapters.

mod hosted;
mod memory;

pub use hosted::{HostedGateway, HostedGatewayConfig};
pub use memory::InMemoryGateway;
