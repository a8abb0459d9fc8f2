use serde::Deserialize;
use serde_json::Value;

/// One node in a structured-content sequence.
///
/// Text blocks carry the `_type: "block"` discriminant; everything else is
/// an embedded object kept as an opaque payload until a registered renderer
/// claims it. Deserialization never fails on an unknown `_type`; authors
/// may introduce object types the renderer does not know yet.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Block {
    Text(TextBlock),
    Object(ObjectBlock),
}

/// Discriminant pin for [`TextBlock`]: only `"block"` matches, so the
/// untagged [`Block`] enum falls through to [`ObjectBlock`] for every
/// other `_type`.
#[derive(Debug, Clone, Copy, Deserialize)]
enum BlockTag {
    #[serde(rename = "block")]
    Block,
}

/// A rich-text block: a style tag plus inline spans with marks.
#[derive(Debug, Clone, Deserialize)]
pub struct TextBlock {
    #[serde(rename = "_type")]
    #[allow(dead_code)]
    tag: BlockTag,
    #[serde(default)]
    pub style: TextStyle,
    #[serde(rename = "listItem")]
    pub list_item: Option<ListKind>,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub children: Vec<Span>,
    #[serde(rename = "markDefs", default)]
    pub mark_defs: Vec<MarkDef>,
}

fn default_level() -> u8 {
    1
}

impl TextBlock {
    /// Concatenated text of all child spans, used for heading anchors and
    /// table-of-contents entries.
    pub fn plain_text(&self) -> String {
        self.children.iter().map(|s| s.text.as_str()).collect()
    }

    /// Look up the mark definition a span's mark key refers to.
    pub fn mark_def(&self, key: &str) -> Option<&MarkDef> {
        self.mark_defs.iter().find(|d| d.key == key)
    }
}

/// Block-level style tag. Unknown styles deserialize to `Normal` so a new
/// style in the store degrades to a paragraph instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum TextStyle {
    #[default]
    Normal,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Blockquote,
}

impl From<String> for TextStyle {
    fn from(style: String) -> Self {
        match style.as_str() {
            "h1" => TextStyle::H1,
            "h2" => TextStyle::H2,
            "h3" => TextStyle::H3,
            "h4" => TextStyle::H4,
            "h5" => TextStyle::H5,
            "h6" => TextStyle::H6,
            "blockquote" => TextStyle::Blockquote,
            _ => TextStyle::Normal,
        }
    }
}

impl TextStyle {
    /// Heading depth, 1 through 6, for heading styles only.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            TextStyle::H1 => Some(1),
            TextStyle::H2 => Some(2),
            TextStyle::H3 => Some(3),
            TextStyle::H4 => Some(4),
            TextStyle::H5 => Some(5),
            TextStyle::H6 => Some(6),
            _ => None,
        }
    }
}

/// List membership for a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ListKind {
    Bullet,
    Number,
    /// Any list kind the renderer does not know; rendered as a bullet list.
    Other,
}

impl From<String> for ListKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "bullet" => ListKind::Bullet,
            "number" => ListKind::Number,
            _ => ListKind::Other,
        }
    }
}

/// An inline run of text plus the marks applied to it. A mark is either a
/// decorator name (`strong`, `em`, ...) or the `_key` of a mark definition
/// on the enclosing block.
#[derive(Debug, Clone, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

/// An annotation definition referenced by span marks. Only `link` is
/// understood; other definition types pass their children through unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub def_type: String,
    pub href: Option<String>,
    #[serde(default)]
    pub blank: bool,
    pub rel: Option<String>,
}

/// An embedded typed object: the discriminant plus its raw payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectBlock {
    #[serde(rename = "_type", default)]
    pub object_type: String,
    #[serde(flatten)]
    pub value: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<Block> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn text_block_with_spans() {
        let blocks = parse(
            r#"[{
                "_type": "block",
                "style": "h2",
                "children": [
                    {"_type": "span", "text": "Hello ", "marks": []},
                    {"_type": "span", "text": "world", "marks": ["strong"]}
                ],
                "markDefs": []
            }]"#,
        );
        match &blocks[0] {
            Block::Text(t) => {
                assert_eq!(t.style, TextStyle::H2);
                assert_eq!(t.plain_text(), "Hello world");
                assert_eq!(t.children[1].marks, vec!["strong"]);
            }
            Block::Object(_) => panic!("expected text block"),
        }
    }

    #[test]
    fn unknown_type_becomes_object() {
        let blocks = parse(r#"[{"_type": "futureWidget", "payload": 42}]"#);
        match &blocks[0] {
            Block::Object(o) => {
                assert_eq!(o.object_type, "futureWidget");
                assert_eq!(o.value["payload"], 42);
            }
            Block::Text(_) => panic!("expected object block"),
        }
    }

    #[test]
    fn unknown_style_degrades_to_normal() {
        let blocks = parse(
            r#"[{"_type": "block", "style": "fancyQuote", "children": [], "markDefs": []}]"#,
        );
        match &blocks[0] {
            Block::Text(t) => assert_eq!(t.style, TextStyle::Normal),
            Block::Object(_) => panic!("expected text block"),
        }
    }

    #[test]
    fn list_item_block() {
        let blocks = parse(
            r#"[{
                "_type": "block",
                "style": "normal",
                "listItem": "number",
                "level": 2,
                "children": [{"_type": "span", "text": "item", "marks": []}],
                "markDefs": []
            }]"#,
        );
        match &blocks[0] {
            Block::Text(t) => {
                assert_eq!(t.list_item, Some(ListKind::Number));
                assert_eq!(t.level, 2);
            }
            Block::Object(_) => panic!("expected text block"),
        }
    }

    #[test]
    fn link_mark_def_lookup() {
        let blocks = parse(
            r#"[{
                "_type": "block",
                "children": [{"_type": "span", "text": "here", "marks": ["k1"]}],
                "markDefs": [{"_key": "k1", "_type": "link", "href": "/about", "blank": true}]
            }]"#,
        );
        match &blocks[0] {
            Block::Text(t) => {
                let def = t.mark_def("k1").unwrap();
                assert_eq!(def.def_type, "link");
                assert_eq!(def.href.as_deref(), Some("/about"));
                assert!(def.blank);
                assert!(t.mark_def("missing").is_none());
            }
            Block::Object(_) => panic!("expected text block"),
        }
    }
}
