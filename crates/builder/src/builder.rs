use std::rc::Rc;

use crate::{
    comment::{CommentHandler, NoopCommentHandler},
    context::ParserState,
    node::{Node, NodeExtra, NodeState},
    Options,
};
use ast_common::{Atom, BytePos, Position, SourceLocation};

/// Factory and finisher for [`Node`]s.
///
/// Every node starts life in a `start_node*` call with only its start
/// recorded, and becomes usable once a `finish_node*` call seals its kind
/// and end. The builder owns the per-parse configuration, so nodes pick up
/// range tracking, lenient-mode metadata and the source filename without
/// the grammar layer threading them around.
#[derive(Debug)]
pub struct NodeBuilder<C: CommentHandler = NoopCommentHandler> {
    options: Options,
    /// `options.source_filename`, interned once so thousands of locations
    /// can share it.
    filename: Option<Rc<str>>,
    comments: C,
}

impl NodeBuilder {
    /// Builder that drops comments.
    pub fn new(options: Options) -> NodeBuilder {
        NodeBuilder::with_comments(options, NoopCommentHandler)
    }
}

impl<C: CommentHandler> NodeBuilder<C> {
    pub fn with_comments(options: Options, comments: C) -> NodeBuilder<C> {
        let filename = options.source_filename.as_deref().map(Rc::from);

        NodeBuilder {
            options,
            filename,
            comments,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn comments(&self) -> &C {
        &self.comments
    }

    pub fn comments_mut(&mut self) -> &mut C {
        &mut self.comments
    }

    /// Open a node at the current token.
    pub fn start_node(&self, state: &ParserState) -> Node {
        self.new_node(state.start, state.start_loc, Some(state.indent))
    }

    /// Open a node at an explicit, previously captured position.
    ///
    /// `indent` is the indentation that was captured alongside `pos`; pass
    /// `None` to fall back to the current line's indentation.
    pub fn start_node_at(
        &self,
        state: &ParserState,
        pos: BytePos,
        loc: Position,
        indent: Option<u32>,
    ) -> Node {
        self.new_node(pos, loc, Some(indent.unwrap_or(state.indent)))
    }

    /// Open a node starting where `node` starts, for wrapping an
    /// already-parsed construct.
    pub fn start_node_at_node(&self, node: &Node) -> Node {
        debug_assert!(
            !self.options.lenient || node.extra.is_some(),
            "start_node_at_node: lenient mode, but the reference node carries no indent"
        );

        self.new_node(node.start, node.loc.start, node.extra.map(|e| e.indent))
    }

    fn new_node(&self, pos: BytePos, loc: Position, indent: Option<u32>) -> Node {
        trace_node!("open node at {:?}", pos);

        Node {
            kind: Atom::default(),
            start: pos,
            end: BytePos(0),
            loc: SourceLocation::new(loc, self.filename.clone()),
            range: if self.options.ranges {
                Some((pos, BytePos(0)))
            } else {
                None
            },
            leading_comments: Vec::new(),
            trailing_comments: Vec::new(),
            inner_comments: Vec::new(),
            extra: if self.options.lenient {
                indent.map(|indent| NodeExtra { indent })
            } else {
                None
            },
            state: NodeState::Open,
        }
    }

    /// Seal `node` at the end of the last consumed token.
    ///
    /// Not at the cursor: by the time a construct's last token has been
    /// consumed, the cursor already sits on the next token, past any
    /// trivia in between.
    pub fn finish_node(&mut self, state: &ParserState, node: Node, kind: &str) -> Node {
        self.finish_node_at(node, kind, state.last_tok_end, state.last_tok_end_loc)
    }

    /// Seal `node` as a `kind` ending at an explicit position.
    pub fn finish_node_at(
        &mut self,
        mut node: Node,
        kind: &str,
        pos: BytePos,
        loc: Position,
    ) -> Node {
        debug_assert!(
            node.is_open(),
            "finish_node_at: node was already finished as {}",
            node.kind
        );
        debug_assert!(!kind.is_empty(), "finish_node_at: empty node kind");
        debug_assert!(
            node.start <= pos,
            "assertion failed: (node.start <= node.end). start = {}, end = {}",
            node.start.0,
            pos.0
        );
        debug_assert!(
            node.loc.start <= loc,
            "assertion failed: (loc.start <= loc.end). start = {:?}, end = {:?}",
            node.loc.start,
            loc
        );
        debug_assert_eq!(
            node.range.is_some(),
            self.options.ranges,
            "finish_node_at: node was opened under a different `ranges` setting"
        );

        trace_node!("finish {} at {:?}", kind, pos);

        node.kind = Atom::from(kind);
        node.end = pos;
        node.loc.end = loc;
        if let Some(range) = &mut node.range {
            range.1 = pos;
        }
        node.state = NodeState::Finished;

        self.comments.process_comment(&mut node);

        node
    }

    /// Move `node`'s start back to `reference`'s start, leaving its end
    /// untouched.
    ///
    /// Used when a construct turns out to be wrapped by a larger one whose
    /// first token was already consumed, e.g. reinterpreting a parsed
    /// expression as the callee of a call.
    pub fn reset_start_location_from_node(&self, node: &mut Node, reference: &Node) {
        debug_assert_eq!(
            node.range.is_some(),
            self.options.ranges,
            "reset_start_location_from_node: node was opened under a different `ranges` setting"
        );
        debug_assert_eq!(
            reference.range.is_some(),
            self.options.ranges,
            "reset_start_location_from_node: reference was opened under a different `ranges` setting"
        );

        node.start = reference.start;
        node.loc.start = reference.loc.start;
        if let Some(range) = &mut node.range {
            range.0 = reference.range.map_or(reference.start, |r| r.0);
        }
    }
}
