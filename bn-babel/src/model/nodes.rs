//! Core data structures for post content documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The root of a post body: an ordered sequence of blocks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// A top-level node of a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text(TextBlock),
    List(ListBlock),
    Link(LinkBlock),
    Image(ImageBlock),
}

/// A block whose children are inline runs (paragraphs, headings, quotes, loose list items).
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub kind: TextKind,
    pub align: Option<Align>,
    pub children: Vec<Text>,
}

/// Kinds of blocks holding inline runs directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Blockquote,
    ListItem,
}

/// A bulleted or numbered list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListBlock {
    pub kind: ListKind,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Bulleted,
    Numbered,
}

/// An item of a list. Items hold runs, never nested blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub children: Vec<Text>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkBlock {
    pub url: String,
    pub children: Vec<Text>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlock {
    pub url: String,
}

/// Horizontal alignment of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A leaf run of text carrying inline formatting flags.
///
/// Flags that are off are omitted from the JSON encoding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Inline formatting flags a run can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
}

/// The set of marks carried by one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Marks {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

/// Flat discriminant over every block shape, as stored under the `kind` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Blockquote,
    BulletedList,
    NumberedList,
    ListItem,
    Link,
    Image,
}

impl Document {
    /// The document a new post starts with: one paragraph holding one empty run.
    pub fn empty() -> Self {
        Document {
            blocks: vec![Block::paragraph(vec![Text::default()])],
        }
    }

    pub fn new(blocks: Vec<Block>) -> Self {
        Document { blocks }
    }

    /// Concatenated text of all blocks, one line per text-bearing line.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Text(b) => lines.push(flatten_text(&b.children)),
                Block::Link(b) => lines.push(flatten_text(&b.children)),
                Block::List(b) => lines.extend(b.items.iter().map(|i| flatten_text(&i.children))),
                Block::Image(_) => {}
            }
        }
        lines.join("\n")
    }
}

impl Block {
    pub fn paragraph(children: Vec<Text>) -> Self {
        Block::text(TextKind::Paragraph, children)
    }

    pub fn text(kind: TextKind, children: Vec<Text>) -> Self {
        Block::Text(TextBlock {
            kind,
            align: None,
            children,
        })
    }

    pub fn list(kind: ListKind, items: Vec<ListItem>) -> Self {
        Block::List(ListBlock { kind, items })
    }

    pub fn link(url: impl Into<String>, children: Vec<Text>) -> Self {
        Block::Link(LinkBlock {
            url: url.into(),
            children,
        })
    }

    pub fn image(url: impl Into<String>) -> Self {
        Block::Image(ImageBlock { url: url.into() })
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Text(b) => b.kind.into(),
            Block::List(b) => b.kind.into(),
            Block::Link(_) => BlockKind::Link,
            Block::Image(_) => BlockKind::Image,
        }
    }

    /// Whether the block satisfies the structural invariants without repair.
    pub fn is_valid(&self) -> bool {
        match self {
            Block::Text(b) => !b.children.is_empty(),
            Block::Link(b) => !b.children.is_empty(),
            Block::List(b) => !b.items.is_empty() && b.items.iter().all(|i| !i.children.is_empty()),
            Block::Image(_) => true,
        }
    }
}

impl ListItem {
    pub fn new(children: Vec<Text>) -> Self {
        ListItem { children }
    }
}

impl Text {
    pub fn plain(text: impl Into<String>) -> Self {
        Text {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_marks(text: impl Into<String>, marks: Marks) -> Self {
        Text {
            text: text.into(),
            bold: marks.bold,
            italic: marks.italic,
            underline: marks.underline,
        }
    }

    pub fn marks(&self) -> Marks {
        Marks {
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
        }
    }

    pub fn set_marks(&mut self, marks: Marks) {
        self.bold = marks.bold;
        self.italic = marks.italic;
        self.underline = marks.underline;
    }

    pub fn has(&self, mark: Mark) -> bool {
        self.marks().has(mark)
    }

    /// Length in characters, the unit selection offsets are counted in.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl Marks {
    pub fn has(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
        }
    }

    pub fn with(mut self, mark: Mark, on: bool) -> Self {
        match mark {
            Mark::Bold => self.bold = on,
            Mark::Italic => self.italic = on,
            Mark::Underline => self.underline = on,
        }
        self
    }
}

/// Joins the text of a run sequence, dropping all formatting.
pub fn flatten_text(runs: &[Text]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

impl TextKind {
    pub fn tag_name(self) -> &'static str {
        match self {
            TextKind::Paragraph => "p",
            TextKind::Heading1 => "h1",
            TextKind::Heading2 => "h2",
            TextKind::Heading3 => "h3",
            TextKind::Blockquote => "blockquote",
            TextKind::ListItem => "li",
        }
    }
}

impl ListKind {
    pub fn tag_name(self) -> &'static str {
        match self {
            ListKind::Bulleted => "ul",
            ListKind::Numbered => "ol",
        }
    }
}

impl From<TextKind> for BlockKind {
    fn from(kind: TextKind) -> Self {
        match kind {
            TextKind::Paragraph => BlockKind::Paragraph,
            TextKind::Heading1 => BlockKind::Heading1,
            TextKind::Heading2 => BlockKind::Heading2,
            TextKind::Heading3 => BlockKind::Heading3,
            TextKind::Blockquote => BlockKind::Blockquote,
            TextKind::ListItem => BlockKind::ListItem,
        }
    }
}

impl From<ListKind> for BlockKind {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Bulleted => BlockKind::BulletedList,
            ListKind::Numbered => BlockKind::NumberedList,
        }
    }
}

impl BlockKind {
    pub const ALL: [BlockKind; 10] = [
        BlockKind::Paragraph,
        BlockKind::Heading1,
        BlockKind::Heading2,
        BlockKind::Heading3,
        BlockKind::Blockquote,
        BlockKind::BulletedList,
        BlockKind::NumberedList,
        BlockKind::ListItem,
        BlockKind::Link,
        BlockKind::Image,
    ];

    /// The name used under the `kind` key of the JSON encoding.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading1 => "heading1",
            BlockKind::Heading2 => "heading2",
            BlockKind::Heading3 => "heading3",
            BlockKind::Blockquote => "blockquote",
            BlockKind::BulletedList => "bulletedList",
            BlockKind::NumberedList => "numberedList",
            BlockKind::ListItem => "listItem",
            BlockKind::Link => "link",
            BlockKind::Image => "image",
        }
    }

    /// Parses a kind name. Also accepts the names used by the first editor
    /// release (`heading-one`, `bulleted-list`, ...).
    pub fn parse(name: &str) -> Option<Self> {
        let kind = match name {
            "paragraph" => BlockKind::Paragraph,
            "heading1" | "heading-one" => BlockKind::Heading1,
            "heading2" | "heading-two" => BlockKind::Heading2,
            "heading3" | "heading-three" => BlockKind::Heading3,
            "blockquote" => BlockKind::Blockquote,
            "bulletedList" | "bulleted-list" => BlockKind::BulletedList,
            "numberedList" | "numbered-list" => BlockKind::NumberedList,
            "listItem" | "list-item" => BlockKind::ListItem,
            "link" => BlockKind::Link,
            "image" => BlockKind::Image,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_list(self) -> bool {
        matches!(self, BlockKind::BulletedList | BlockKind::NumberedList)
    }

    pub fn as_list(self) -> Option<ListKind> {
        match self {
            BlockKind::BulletedList => Some(ListKind::Bulleted),
            BlockKind::NumberedList => Some(ListKind::Numbered),
            _ => None,
        }
    }

    pub fn as_text(self) -> Option<TextKind> {
        match self {
            BlockKind::Paragraph => Some(TextKind::Paragraph),
            BlockKind::Heading1 => Some(TextKind::Heading1),
            BlockKind::Heading2 => Some(TextKind::Heading2),
            BlockKind::Heading3 => Some(TextKind::Heading3),
            BlockKind::Blockquote => Some(TextKind::Blockquote),
            BlockKind::ListItem => Some(TextKind::ListItem),
            _ => None,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Mark {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "bold" => Some(Mark::Bold),
            "italic" => Some(Mark::Italic),
            "underline" => Some(Mark::Underline),
            _ => None,
        }
    }
}
