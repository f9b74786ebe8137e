// Result Renderer: presentation state for one scored interview.

pub mod renderer;
pub mod scroll;
