pub mod config;
pub mod constants;
pub mod curve;
pub mod engine;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod media;
pub mod particle;
pub mod pool;
pub mod pulse;
pub mod render;
pub mod rng;
pub mod sim;
pub mod upload;

pub use config::*;
pub use curve::{HeartCurve, Point, RingSpec};
pub use engine::*;
pub use error::*;
pub use field::TargetField;
pub use frame_loop::*;
pub use particle::*;
pub use pool::ParticlePool;
pub use pulse::PulseDriver;
pub use render::{FrameOutcome, Surface};
pub use rng::*;
