//! Entry points and output filename templates.
//!
//! Templates use the engine's placeholder syntax:
//!
//! ```text
//! js/[name].[hash:8].js   ->  js/main.d74981ef.js
//! ```

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use webplan_util::hash::blake3_bytes;

/// Entry chunk name → entry file.
pub type Entry = BTreeMap<String, PathBuf>;

/// Which digest a hash placeholder refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashKind {
    /// `[hash]` / `[fullhash]`: the whole compilation.
    Build,
    /// `[chunkhash]`: one chunk.
    Chunk,
    /// `[contenthash]`: one emitted file.
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Name,
    Id,
    Ext,
    Hash { kind: HashKind, len: Option<usize> },
}

/// A parsed output filename template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl FilenameTemplate {
    /// Parse a template. Unknown `[...]` tokens are kept as literal text.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(open) = rest.find('[') {
            let Some(close) = rest[open..].find(']').map(|i| open + i) else {
                break;
            };
            literal.push_str(&rest[..open]);

            match parse_token(&rest[open + 1..close]) {
                Some(segment) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                None => literal.push_str(&rest[open..=close]),
            }
            rest = &rest[close + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: source.to_string(),
            segments,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True when the rendered name changes with the output bytes.
    #[must_use]
    pub fn has_content_hash(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Hash { .. }))
    }

    /// Hash placeholders in template order, with their length limits.
    #[must_use]
    pub fn hash_placeholders(&self) -> Vec<(HashKind, Option<usize>)> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Hash { kind, len } => Some((*kind, *len)),
                _ => None,
            })
            .collect()
    }

    /// Substitute every placeholder from `ctx`.
    #[must_use]
    pub fn render(&self, ctx: &RenderContext) -> String {
        let mut out = String::with_capacity(self.source.len() + ctx.hash.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Name => out.push_str(&ctx.name),
                Segment::Id => out.push_str(&ctx.id),
                Segment::Ext => out.push_str(&ctx.ext),
                Segment::Hash { len, .. } => {
                    let end = len.map_or(ctx.hash.len(), |n| n.min(ctx.hash.len()));
                    out.push_str(ctx.hash.get(..end).unwrap_or_default());
                }
            }
        }
        out
    }
}

fn parse_token(token: &str) -> Option<Segment> {
    let (head, len) = match token.split_once(':') {
        Some((head, len)) => (head, Some(len.parse::<usize>().ok()?)),
        None => (token, None),
    };

    let kind = match head {
        "name" if len.is_none() => return Some(Segment::Name),
        "id" if len.is_none() => return Some(Segment::Id),
        "ext" if len.is_none() => return Some(Segment::Ext),
        "hash" | "fullhash" => HashKind::Build,
        "chunkhash" => HashKind::Chunk,
        "contenthash" => HashKind::Content,
        _ => return None,
    };
    Some(Segment::Hash { kind, len })
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for FilenameTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

/// Values substituted into a [`FilenameTemplate`].
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub name: String,
    pub id: String,
    /// Extension without the leading dot.
    pub ext: String,
    /// Hex digest set by [`RenderContext::content`]; hash placeholders take a
    /// prefix of it.
    hash: String,
}

impl RenderContext {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = ext.into();
        self
    }

    /// Use the BLAKE3 digest of `bytes` as the hash.
    #[must_use]
    pub fn content(mut self, bytes: &[u8]) -> Self {
        self.hash = blake3_bytes(bytes);
        self
    }
}

/// Where and how the engine writes scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    pub path: PathBuf,
    pub filename: FilenameTemplate,
    pub chunk_filename: FilenameTemplate,
    /// Global object name, so bundles also load inside workers.
    pub global_object: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_script_name() {
        let template = FilenameTemplate::parse("js/[name].[hash:8].js");
        let ctx = RenderContext::new("main").content(b"hello world");
        assert_eq!(template.render(&ctx), "js/main.d74981ef.js");
    }

    #[test]
    fn test_render_asset_name() {
        let template = FilenameTemplate::parse("assets/[name].[hash:16].[ext]");
        let ctx = RenderContext::new("skybox").ext("hdr").content(b"hello world");
        assert_eq!(template.render(&ctx), "assets/skybox.d74981efa70a0c88.hdr");
    }

    #[test]
    fn test_render_chunk_id() {
        let template = FilenameTemplate::parse("css/chunk.[id].[chunkhash:8].css");
        let ctx = RenderContext::new("vendor").id("42").content(b"hello world");
        assert_eq!(template.render(&ctx), "css/chunk.42.d74981ef.css");
    }

    #[test]
    fn test_unbounded_hash_uses_full_digest() {
        let template = FilenameTemplate::parse("[contenthash]");
        let ctx = RenderContext::new("x").content(b"hello world");
        assert_eq!(template.render(&ctx).len(), 64);
    }

    #[test]
    fn test_hash_without_content_renders_empty() {
        let template = FilenameTemplate::parse("js/[name].[hash:8].js");
        assert_eq!(template.render(&RenderContext::new("main")), "js/main..js");
    }

    #[test]
    fn test_content_hash_detection() {
        assert!(FilenameTemplate::parse("js/[name].[hash:8].js").has_content_hash());
        assert!(FilenameTemplate::parse("[contenthash].js").has_content_hash());
        assert!(!FilenameTemplate::parse("./index.html").has_content_hash());
        assert!(!FilenameTemplate::parse("[name].[query].js").has_content_hash());
        assert!(FilenameTemplate::parse("[name].[fullhash].js").has_content_hash());
    }

    #[test]
    fn test_unknown_tokens_stay_literal() {
        let template = FilenameTemplate::parse("[query][name][hash:x].js");
        let ctx = RenderContext::new("main");
        assert_eq!(template.render(&ctx), "[query]main[hash:x].js");
    }

    #[test]
    fn test_unclosed_bracket() {
        let template = FilenameTemplate::parse("js/[name.js");
        assert_eq!(template.render(&RenderContext::new("main")), "js/[name.js");
    }

    #[test]
    fn test_hash_placeholders() {
        let template = FilenameTemplate::parse("js/chunk.[name].[chunkhash:8].js");
        assert_eq!(template.hash_placeholders(), vec![(HashKind::Chunk, Some(8))]);
    }
}
