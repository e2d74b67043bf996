// Frame-based animation system

pub mod cat;
pub mod engine;

pub use cat::CatAnimation;
pub use engine::{AnimationEngine, AnimationFrame};
