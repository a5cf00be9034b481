use ast_common::{BytePos, Position};

/// The slice of the host parser's running state that node construction
/// reads.
///
/// The parser keeps one of these current as it advances and lends it to
/// every factory/finisher call; the builder never mutates it. Keeping the
/// reads explicit means the protocol can be driven in tests without a live
/// tokenizer behind it.
#[derive(Debug, Clone, Copy)]
pub struct ParserState {
    /// Start offset of the current token, where a new construct would
    /// begin.
    pub start: BytePos,
    /// Line/column form of `start`.
    pub start_loc: Position,
    /// End offset of the most recently consumed token. Nodes are sealed
    /// here rather than at the cursor, so trivia the cursor has already
    /// skipped never lands inside a node.
    pub last_tok_end: BytePos,
    /// Line/column form of `last_tok_end`.
    pub last_tok_end_loc: Position,
    /// Indentation of the current line. Only read in lenient mode.
    pub indent: u32,
}

impl Default for ParserState {
    /// State at the very start of an input: nothing consumed yet.
    fn default() -> Self {
        ParserState {
            start: BytePos(0),
            start_loc: Position::new(1, 0),
            last_tok_end: BytePos(0),
            last_tok_end_loc: Position::new(1, 0),
            indent: 0,
        }
    }
}
