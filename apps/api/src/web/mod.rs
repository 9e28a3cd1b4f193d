// Presentation layer: the Home view, the Evaluation form, and the result view.
// Server-rendered with askama; the JSON surface lives in `evaluation::handlers`.

pub mod handlers;
pub mod upload;
pub mod views;
