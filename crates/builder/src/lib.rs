pub use self::{
    builder::NodeBuilder,
    comment::{Comment, CommentHandler, CommentKind, NoopCommentHandler},
    context::ParserState,
    node::{Node, NodeExtra, NodeState},
};
use serde::{Deserialize, Serialize};

#[macro_use]
mod macros;
mod builder;
mod comment;
mod context;
mod node;

/// Host-parser configuration read by the node builder.
///
/// The wire form is camelCase because these are surfaced verbatim as
/// embedder-facing parse options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Options {
    /// Record a `(start, end)` offset pair on every node, mirroring
    /// `start`/`end` but toggleable independently of them.
    #[serde(default)]
    pub ranges: bool,

    /// Lenient parsing mode: indentation metadata is recorded on every
    /// node's `extra`.
    #[serde(default)]
    pub lenient: bool,

    /// File name stamped into the `loc` of every node.
    #[serde(default)]
    pub source_filename: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Options;

    #[test]
    fn options_from_json() {
        let opts: Options =
            serde_json::from_str(r#"{ "ranges": true, "sourceFilename": "input.js" }"#).unwrap();
        assert!(opts.ranges);
        assert!(!opts.lenient);
        assert_eq!(opts.source_filename.as_deref(), Some("input.js"));
    }

    #[test]
    fn options_default_to_off() {
        let opts: Options = serde_json::from_str("{}").unwrap();
        assert!(!opts.ranges);
        assert!(!opts.lenient);
        assert!(opts.source_filename.is_none());
    }

    #[test]
    fn options_reject_unknown_fields() {
        assert!(serde_json::from_str::<Options>(r#"{ "regions": true }"#).is_err());
    }
}
