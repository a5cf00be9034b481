use crate::comment::Comment;
use ast_common::{Atom, BytePos, SourceLocation};

/// Where a node is in its open → finished lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Open,
    Finished,
}

/// Side-channel metadata recorded on nodes in lenient mode.
///
/// Allocated only when lenient mode is on; its absence is meaningful and
/// downstream code must not default it away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeExtra {
    /// Indentation of the line the node started on.
    pub indent: u32,
}

/// An in-progress or finalized syntax-tree node.
///
/// Nodes come out of [`NodeBuilder`](crate::NodeBuilder) only; the private
/// lifecycle field keeps struct literals out of reach of the grammar
/// layer. While a node is open, `kind` is the empty atom and `end` is
/// `BytePos(0)`.
#[derive(Debug, PartialEq, Eq)]
pub struct Node {
    /// Discriminant of the construct, e.g. `"Identifier"`. Empty until the
    /// node is finished.
    pub kind: Atom,
    /// Offset of the first byte covered by this node.
    pub start: BytePos,
    /// Offset one past the last byte covered. `BytePos(0)` while open.
    pub end: BytePos,
    pub loc: SourceLocation,
    /// Offset pair mirroring `start`/`end`; recorded only when range
    /// tracking is enabled.
    pub range: Option<(BytePos, BytePos)>,
    /// Filled in by the comment-processing hook, never by the builder.
    pub leading_comments: Vec<Comment>,
    pub trailing_comments: Vec<Comment>,
    pub inner_comments: Vec<Comment>,
    /// Lenient-mode metadata. `None` outside lenient mode.
    pub extra: Option<NodeExtra>,
    pub(crate) state: NodeState,
}

impl Node {
    #[inline]
    pub fn state(&self) -> NodeState {
        self.state
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == NodeState::Open
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state == NodeState::Finished
    }

    /// Duplicate of this node, for reinterpreting an already-parsed
    /// construct as a different one without reparsing.
    ///
    /// Copies every field except the three comment sequences, which start
    /// empty: comments stay attached to the original only, so no comment
    /// is ever claimed by two tree positions. `Clone` is deliberately left
    /// unimplemented; this is the only copy.
    pub fn clone_node(&self) -> Node {
        Node {
            kind: self.kind.clone(),
            start: self.start,
            end: self.end,
            loc: self.loc.clone(),
            range: self.range,
            leading_comments: Vec::new(),
            trailing_comments: Vec::new(),
            inner_comments: Vec::new(),
            extra: self.extra,
            state: self.state,
        }
    }
}
