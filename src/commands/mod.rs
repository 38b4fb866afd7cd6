mod kinds;
mod render;

pub use kinds::{cmd_describe, cmd_example, cmd_kinds};
pub use render::{cmd_render, RenderArgs};
