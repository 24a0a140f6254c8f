//! Format implementations
//!
//! This module contains the format implementations that convert between
//! their own syntax and the HTML hub representation.

pub mod html;
pub mod markdown;

pub use html::HtmlFormat;
pub use markdown::{
    BulletMarker, CodeBlockStyle, CodeFence, HeadingStyle, HorizontalRule, LineBreak,
    MarkdownFormat, MarkdownOptions, RenderOptions,
};
