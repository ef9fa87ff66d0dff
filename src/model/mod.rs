pub mod config {
    pub use objectlife_core::config::*;
}
pub mod spatial_hash {
    pub use objectlife_core::spatial_hash::*;
}
pub mod lifecycle {
    pub use objectlife_core::lifecycle::*;
}
pub mod snapshot {
    pub use objectlife_core::snapshot::*;
}
pub mod metrics {
    pub use objectlife_core::metrics::*;
}
pub mod state {
    pub use objectlife_data::*;
}

pub mod world;
