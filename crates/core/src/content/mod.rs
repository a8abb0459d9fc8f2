//! The structured-content model: an ordered sequence of typed blocks
//! representing rich text with embedded objects.

mod block;

pub use block::{Block, ListKind, MarkDef, ObjectBlock, Span, TextBlock, TextStyle};
