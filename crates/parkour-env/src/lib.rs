// parkour-env: World state, episode lifecycle, and the platformer episode controllers.

pub mod body;
pub mod controller;
pub mod episode;
pub mod reach;
pub mod runner;
pub mod scene;
pub mod world;

pub mod prelude {
    pub use crate::body::{HostBody, PointMass};
    pub use crate::controller::Controller;
    pub use crate::episode::{Episode, EpisodeState};
    pub use crate::reach::ReachAgent;
    pub use crate::runner::RunnerAgent;
    pub use crate::scene::{ContactEvent, ContactPhase, EntityId, EntityKind, Scene};
    pub use crate::world::PlatformWorld;
}
