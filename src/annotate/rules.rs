//! Tokenizer rules: pure text-span classifiers used by the splicing pass.
//!
//! Each rule maps one text value to an ordered sequence of classified spans
//! that tile the input, or `None` when nothing matched and the node should
//! be left untouched. Matches are non-overlapping and left-to-right; the
//! boundary whitespace in front of a match stays in the gap text so no
//! character is lost or duplicated.

use crate::ast::Node;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Leading word boundary, `#`, one or more Unicode letters. The greedy
/// letter class already stops at the first non-letter, so no trailing
/// boundary check is needed.
static HASHTAG_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)(#\p{L}+)").expect("hashtag rule pattern"));

/// Leading word boundary, `@identifier`, optional `@domain.tld` origin, and
/// a mandatory whitespace-or-end terminator. The terminator lives outside
/// the capture; the engine retries the origin-less form before rejecting a
/// position.
static MENTION_RULE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\s)(@[A-Za-z0-9_]+(?:@[A-Za-z0-9.-]+\.[A-Za-z]{2,})?)(?:\s|$)")
        .expect("mention rule pattern")
});

/// Strict email grammar used to re-classify a mention match whose whole
/// value is a bare address.
static EMAIL_RULE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern")
});

/// `:name:` shortcode; the span value is the bare name.
static EMOJI_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([A-Za-z0-9_+-]+):").expect("emoji rule pattern"));

/// One classified slice of a text value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Span {
    kind: SpanKind,
    value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanKind {
    Text,
    Mention,
    Hashtag,
    Emoji,
}

impl Span {
    fn text(value: &str) -> Self {
        Span {
            kind: SpanKind::Text,
            value: value.to_string(),
        }
    }

    fn mention(value: &str) -> Self {
        Span {
            kind: SpanKind::Mention,
            value: value.to_string(),
        }
    }

    fn hashtag(value: &str) -> Self {
        Span {
            kind: SpanKind::Hashtag,
            value: value.to_string(),
        }
    }

    fn emoji(name: &str) -> Self {
        Span {
            kind: SpanKind::Emoji,
            value: name.to_string(),
        }
    }

    /// The source slice this span was produced from. Emoji spans drop the
    /// surrounding colons from their value, so they reconstruct them here.
    pub(crate) fn raw(&self) -> Cow<'_, str> {
        match self.kind {
            SpanKind::Emoji => Cow::Owned(format!(":{}:", self.value)),
            _ => Cow::Borrowed(&self.value),
        }
    }

    pub(crate) fn into_node(self) -> Node {
        match self.kind {
            SpanKind::Text => Node::text(self.value),
            SpanKind::Mention => Node::mention(self.value),
            SpanKind::Hashtag => Node::hashtag(self.value),
            SpanKind::Emoji => Node::emoji(self.value),
        }
    }
}

/// Classifies `#tag` runs. Gap text before, between, and after matches is
/// emitted only when non-empty.
pub(crate) fn hashtag_spans(value: &str) -> Option<Vec<Span>> {
    scan(value, &HASHTAG_RULE, |matched| Span::hashtag(matched))
}

/// Classifies `@user` / `@user@origin` runs. A match whose whole value
/// reads as a bare email address stays plain text; everything else becomes
/// a mention.
pub(crate) fn mention_spans(value: &str) -> Option<Vec<Span>> {
    scan(value, &MENTION_RULE, |matched| {
        if EMAIL_RULE.is_match(matched) {
            Span::text(matched)
        } else {
            Span::mention(matched)
        }
    })
}

/// Classifies `:name:` shortcodes.
pub(crate) fn emoji_spans(value: &str) -> Option<Vec<Span>> {
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in EMOJI_RULE.captures_iter(value) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        if whole.start() > last {
            spans.push(Span::text(&value[last..whole.start()]));
        }
        spans.push(Span::emoji(name.as_str()));
        last = whole.end();
    }
    finish(spans, value, last)
}

/// Shared scan loop for the boundary-anchored rules.
///
/// The classified span is capture group 1; the search resumes at the end of
/// that group so a single whitespace character can terminate one match and
/// open the next. `^` only matches at the start of the original value, not
/// at the resume offset.
fn scan(value: &str, rule: &Regex, classify: impl Fn(&str) -> Span) -> Option<Vec<Span>> {
    let mut spans = Vec::new();
    let mut last = 0;
    let mut pos = 0;
    loop {
        let Some(m) = rule.captures_at(value, pos).and_then(|caps| caps.get(1)) else {
            break;
        };
        if m.start() > last {
            spans.push(Span::text(&value[last..m.start()]));
        }
        spans.push(classify(m.as_str()));
        last = m.end();
        pos = m.end();
    }
    finish(spans, value, last)
}

fn finish(mut spans: Vec<Span>, value: &str, last: usize) -> Option<Vec<Span>> {
    if spans.is_empty() {
        return None;
    }
    if last < value.len() {
        spans.push(Span::text(&value[last..]));
    }
    Some(spans)
}
