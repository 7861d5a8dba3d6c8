/// A parsed post: the block tree built before any HTML is emitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Fenced code block; `lines` are kept verbatim.
    Code { lang: String, lines: Vec<String> },
    /// `id` is `None` for setext headings.
    Heading {
        level: u8,
        id: Option<String>,
        content: Vec<Inline>,
    },
    Rule,
    List(List),
    Footer(Vec<Inline>),
    Quote(Quote),
    /// Plain text lines, blank lines included.
    Paragraph(Vec<Vec<Inline>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub kind: ListKind,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListItem {
    pub content: Vec<Inline>,
    pub children: Vec<List>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Quote {
    pub items: Vec<QuoteItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuoteItem {
    Line(Vec<Inline>),
    Nested(Quote),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Blank,
    SelfFrame,
}

impl LinkTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkTarget::Blank => "_blank",
            LinkTarget::SelfFrame => "_self",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// Text not yet claimed by a rule. Escaped on output.
    Text(String),
    /// A backslash-escaped markup character.
    Escaped(char),
    Code(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Strike(Vec<Inline>),
    Color {
        color: String,
        children: Vec<Inline>,
    },
    Link {
        href: String,
        title: Option<String>,
        target: LinkTarget,
        children: Vec<Inline>,
    },
    Image {
        alt: String,
        src: String,
        title: Option<String>,
    },
    AutoLink {
        url: String,
        target: LinkTarget,
    },
}

impl Inline {
    /// Nested inline content, if this node has any.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Inline>> {
        match self {
            Inline::Strong(children)
            | Inline::Emphasis(children)
            | Inline::Strike(children)
            | Inline::Color { children, .. }
            | Inline::Link { children, .. } => Some(children),
            _ => None,
        }
    }
}
