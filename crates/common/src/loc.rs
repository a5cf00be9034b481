use std::rc::Rc;

/// A human-readable position in a source file.
///
/// `line` is 1-based and `column` is 0-based, so `line == 0` never names a
/// real position; see [`DUMMY_POS`]. The derived order is document order:
/// earlier lines compare smaller, ties are broken by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[inline]
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Returns `true` for positions that were never assigned.
    #[inline]
    pub fn is_dummy(self) -> bool {
        self.line == 0
    }
}

/// Placeholder for a position that has not been recorded yet.
pub const DUMMY_POS: Position = Position { line: 0, column: 0 };

/// The region of a source file covered by a node, in line/column form.
///
/// `filename` is shared by every location of a parse; it is stamped on at
/// creation and never replaced for the node's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
    pub filename: Option<Rc<str>>,
}

impl SourceLocation {
    /// A location whose end is not known yet.
    #[inline]
    pub fn new(start: Position, filename: Option<Rc<str>>) -> Self {
        SourceLocation {
            start,
            end: DUMMY_POS,
            filename,
        }
    }
}
