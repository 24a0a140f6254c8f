//! HTML → Markdown tests for markup produced by rich text editors rather
//! than by the Markdown renderer.

mod editor_input;
