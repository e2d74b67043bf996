pub mod animation;
pub mod animator;
pub mod display;

pub use animation::{AnimationEngine, AnimationFrame, CatAnimation};
pub use animator::{Animator, AnimatorConfig, AnimatorState};
pub use display::{ClearStrategy, Surface, TerminalSurface};
