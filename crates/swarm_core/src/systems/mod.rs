pub mod flocking;
pub mod stats;
