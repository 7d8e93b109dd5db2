//! Splitting documents into text nodes.
//!
//! Markdown is parsed with `pulldown-cmark`. Every run of contiguous text
//! becomes one node, together with the kinds of the elements around it.
//! Soft line breaks stay inside the node, as they do in the source.
//! Front matter, inline code, code blocks, HTML, image alt text and
//! autolinks never produce text nodes, and link destinations are not text at all.
//!
//! Plain text files produce one node per line.

use pulldown_cmark::{Event, LinkType, Options, Parser, Tag};
use std::path::Path;

/// Kinds of document nodes that can be named in the `skip` option.
///
/// Names follow the usual Markdown AST vocabulary (`BlockQuote`,
/// `ListItem`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A paragraph.
    Paragraph,
    /// An ATX or setext heading.
    Heading,
    /// A block quote.
    BlockQuote,
    /// An ordered or bullet list.
    List,
    /// One item of a list.
    ListItem,
    /// `*emphasis*`.
    Emphasis,
    /// `**strong**`.
    Strong,
    /// `~~strikethrough~~`.
    Delete,
    /// A link; its text is scanned, its destination is not.
    Link,
    /// A table.
    Table,
    /// A table row (header or body).
    TableRow,
    /// A table cell.
    TableCell,
    /// A footnote definition.
    FootnoteDefinition,
    /// A fenced or indented code block.
    CodeBlock,
    /// An `<https://...>` or `<mail@...>` link.
    AutoLink,
    /// An image; its alt text is not scanned.
    Image,
    /// A raw HTML block.
    Html,
    /// YAML front matter at the top of the document.
    FrontMatter,
    /// Anything else.
    Other,
}

impl NodeKind {
    /// Looks up a kind by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "Paragraph" => Self::Paragraph,
            "Heading" | "Header" => Self::Heading,
            "BlockQuote" => Self::BlockQuote,
            "List" => Self::List,
            "ListItem" => Self::ListItem,
            "Emphasis" => Self::Emphasis,
            "Strong" => Self::Strong,
            "Delete" | "Strikethrough" => Self::Delete,
            "Link" => Self::Link,
            "Table" => Self::Table,
            "TableRow" => Self::TableRow,
            "TableCell" => Self::TableCell,
            "FootnoteDefinition" => Self::FootnoteDefinition,
            "CodeBlock" => Self::CodeBlock,
            "AutoLink" => Self::AutoLink,
            "Image" => Self::Image,
            "Html" | "HtmlBlock" => Self::Html,
            "FrontMatter" | "Yaml" => Self::FrontMatter,
            _ => return None,
        };
        Some(kind)
    }

    fn from_tag(tag: &Tag<'_>) -> Self {
        match tag {
            Tag::Paragraph => Self::Paragraph,
            Tag::Heading { .. } => Self::Heading,
            Tag::BlockQuote(_) => Self::BlockQuote,
            Tag::CodeBlock(_) => Self::CodeBlock,
            Tag::HtmlBlock => Self::Html,
            Tag::List(_) => Self::List,
            Tag::Item => Self::ListItem,
            Tag::FootnoteDefinition(_) => Self::FootnoteDefinition,
            Tag::Table(_) => Self::Table,
            Tag::TableHead | Tag::TableRow => Self::TableRow,
            Tag::TableCell => Self::TableCell,
            Tag::Emphasis => Self::Emphasis,
            Tag::Strong => Self::Strong,
            Tag::Strikethrough => Self::Delete,
            Tag::Link {
                link_type: LinkType::Autolink | LinkType::Email,
                ..
            } => Self::AutoLink,
            Tag::Link { .. } => Self::Link,
            Tag::Image { .. } => Self::Image,
            Tag::MetadataBlock(_) => Self::FrontMatter,
            _ => Self::Other,
        }
    }

    /// Text below these kinds is never prose.
    fn is_opaque(self) -> bool {
        matches!(
            self,
            Self::CodeBlock | Self::AutoLink | Self::Image | Self::Html | Self::FrontMatter
        )
    }
}

/// A piece of prose handed to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode<'a> {
    /// The text, exactly as it appears in the source.
    pub text: &'a str,
    /// Byte offset of `text` within the source.
    pub offset: usize,
    /// Kinds of the enclosing elements, outermost first.
    pub ancestors: Vec<NodeKind>,
}

/// How a file's contents are split into nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// CommonMark with tables, strikethrough, footnotes and front matter.
    Markdown,
    /// One node per line.
    PlainText,
}

impl DocumentFormat {
    /// Picks the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "md" | "markdown" => Some(Self::Markdown),
            "txt" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Splits `source` into text nodes.
    #[must_use]
    pub fn text_nodes(self, source: &str) -> Vec<TextNode<'_>> {
        match self {
            Self::Markdown => markdown_nodes(source),
            Self::PlainText => plain_text_nodes(source),
        }
    }
}

/// Splits Markdown into text nodes.
#[must_use]
pub fn markdown_nodes<'a>(source: &'a str) -> Vec<TextNode<'a>> {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS;

    let mut nodes = Vec::new();
    let mut stack: Vec<NodeKind> = Vec::new();
    let mut run: Option<std::ops::Range<usize>> = None;

    let flush = |run: &mut Option<std::ops::Range<usize>>,
                 stack: &[NodeKind],
                 nodes: &mut Vec<TextNode<'a>>| {
        if let Some(range) = run.take() {
            if !range.is_empty() {
                nodes.push(TextNode {
                    text: &source[range.clone()],
                    offset: range.start,
                    ancestors: stack.to_vec(),
                });
            }
        }
    };

    for (event, range) in Parser::new_ext(source, options).into_offset_iter() {
        match event {
            Event::Text(_) | Event::SoftBreak => {
                if stack.iter().any(|kind| kind.is_opaque()) {
                    continue;
                }
                match run.as_mut() {
                    Some(current) if current.end == range.start => current.end = range.end,
                    _ => {
                        flush(&mut run, &stack, &mut nodes);
                        run = Some(range);
                    }
                }
            }
            Event::Start(tag) => {
                flush(&mut run, &stack, &mut nodes);
                stack.push(NodeKind::from_tag(&tag));
            }
            Event::End(_) => {
                flush(&mut run, &stack, &mut nodes);
                stack.pop();
            }
            _ => flush(&mut run, &stack, &mut nodes),
        }
    }
    flush(&mut run, &stack, &mut nodes);

    nodes
}

/// Splits plain text into one node per line.
#[must_use]
pub fn plain_text_nodes(source: &str) -> Vec<TextNode<'_>> {
    let mut offset = 0;
    source
        .split_inclusive('\n')
        .filter_map(|line| {
            let start = offset;
            offset += line.len();
            let text = line.trim_end_matches(['\n', '\r']);
            (!text.is_empty()).then(|| TextNode {
                text,
                offset: start,
                ancestors: vec![NodeKind::Paragraph],
            })
        })
        .collect()
}
