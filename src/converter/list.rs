//! List builder - nests list items by indentation.

use super::inline::InlinePipeline;
use crate::core::ast::{List, ListItem, ListKind};
use regex::Regex;
use std::sync::LazyLock;

static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([ \t]*)(\d+\.|[*-]) +(.*)$").expect("list item pattern must compile")
});

/// Deepest list nesting. Deeper items join the innermost open list.
pub const MAX_LIST_DEPTH: usize = 32;

/// A physical line recognised as a list item.
#[derive(Debug, Clone, PartialEq)]
pub struct ListLine<'t> {
    pub indent: usize,
    pub kind: ListKind,
    pub text: &'t str,
}

/// Recognises `indent + marker + space + text`. Tabs count as four spaces.
pub fn parse_list_line(line: &str) -> Option<ListLine<'_>> {
    let caps = LIST_ITEM_RE.captures(line)?;
    let indent = caps
        .get(1)?
        .as_str()
        .chars()
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum();
    let kind = if caps.get(2)?.as_str().ends_with('.') {
        ListKind::Ordered
    } else {
        ListKind::Unordered
    };
    Some(ListLine {
        indent,
        kind,
        text: caps.get(3)?.as_str(),
    })
}

struct Frame {
    indent: usize,
    list: List,
}

/// Stack machine over list lines.
///
/// The stack holds one frame per open list, deepest last. A deeper indent
/// opens a list inside the current item, a shallower one closes frames until
/// the indent fits, anything else adds a sibling to the deepest open list.
pub struct ListBuilder<'a> {
    pipeline: &'a InlinePipeline,
    stack: Vec<Frame>,
}

impl<'a> ListBuilder<'a> {
    pub fn new(pipeline: &'a InlinePipeline) -> Self {
        Self {
            pipeline,
            stack: Vec::new(),
        }
    }

    pub fn push(&mut self, line: &ListLine<'_>) {
        let item = ListItem {
            content: self.pipeline.parse(line.text),
            children: Vec::new(),
        };

        let Some(top) = self.stack.last() else {
            self.open(line, item);
            return;
        };
        if line.indent > top.indent && self.stack.len() < MAX_LIST_DEPTH {
            self.open(line, item);
            return;
        }

        while self.stack.len() > 1
            && self
                .stack
                .last()
                .is_some_and(|frame| line.indent < frame.indent)
        {
            self.close_top();
        }
        if let Some(top) = self.stack.last_mut() {
            top.list.items.push(item);
        }
    }

    /// Closes every open list and returns the outermost one.
    pub fn finish(mut self) -> Option<List> {
        while self.stack.len() > 1 {
            self.close_top();
        }
        self.stack.pop().map(|frame| frame.list)
    }

    fn open(&mut self, line: &ListLine<'_>, item: ListItem) {
        self.stack.push(Frame {
            indent: line.indent,
            list: List {
                kind: line.kind,
                items: vec![item],
            },
        });
    }

    fn close_top(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        if let Some(owner) = self
            .stack
            .last_mut()
            .and_then(|parent| parent.list.items.last_mut())
        {
            owner.children.push(frame.list);
        }
    }
}
