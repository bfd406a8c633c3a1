// Presentation side: the concrete CLI pipeline and terminal rendering.
// The pure transform lives in `core` and never calls back into this module.

pub mod pipelines;
pub mod render;
