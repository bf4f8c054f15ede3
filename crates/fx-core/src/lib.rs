pub mod constants;
pub mod engine;
pub mod flicker;
pub mod floaters;
pub mod gallery;
pub mod noise;
pub mod particles;
pub mod timer;

pub use constants::*;
pub use engine::*;
pub use flicker::*;
pub use floaters::*;
pub use gallery::*;
pub use noise::*;
pub use particles::*;
pub use timer::*;
