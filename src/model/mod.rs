pub use swarm_core::{AgentLogic, WorldBounds};
pub mod agent {
    pub use swarm_core::agent::*;
}
pub mod config {
    pub use swarm_core::config::*;
}
pub mod spatial_hash {
    pub use swarm_core::spatial_hash::*;
}
pub mod snapshot {
    pub use swarm_core::snapshot::*;
}
pub mod systems {
    pub use swarm_core::systems::*;
}
pub mod world {
    pub use swarm_core::world::*;
}
pub mod state {
    pub use swarm_data::*;
}
