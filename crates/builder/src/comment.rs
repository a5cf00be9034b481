use crate::node::Node;
use ast_common::{BytePos, SourceLocation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// `// …` up to the end of the line.
    Line,
    /// `/* … */`, possibly spanning lines.
    Block,
}

/// A comment the tokenizer produced.
///
/// The builder never creates or inspects these; they exist here so the
/// attachment hook has somewhere typed to put them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    /// Text between the comment delimiters.
    pub value: String,
    pub start: BytePos,
    pub end: BytePos,
    pub loc: SourceLocation,
}

/// Decides which pending comments become the leading/trailing/inner
/// comments of a freshly finished node.
///
/// The finisher invokes this exactly once per sealed node, after the
/// node's position fields are final. The matching algorithm lives entirely
/// behind this trait; the builder only guarantees the call.
pub trait CommentHandler {
    fn process_comment(&mut self, node: &mut Node);
}

/// Drops every comment on the floor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCommentHandler;

impl CommentHandler for NoopCommentHandler {
    fn process_comment(&mut self, _node: &mut Node) {}
}
