//! Rendering stages.
//!
//! Each stage is a rewrite over a [`Document`]. [`STAGES`] fixes the order;
//! it matters, since later patterns see the output of earlier ones.

use super::{
    Document,
    embed::{extract_youtube_id, video_embed},
    stash,
};
use regex::{Captures, Regex};
use std::{borrow::Cow, sync::LazyLock};

// ============================================================================
// Patterns
// ============================================================================

static RE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(\w*)\n((?s:.*?))```").unwrap());

static RE_INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Heading patterns, deepest level first.
static RE_HEADINGS: LazyLock<Vec<(usize, Regex)>> = LazyLock::new(|| {
    (1..=6)
        .rev()
        .map(|level| {
            let re = Regex::new(&format!(r"(?m)^#{{{level}}} (.+)$")).unwrap();
            (level, re)
        })
        .collect()
});

/// Asterisk emphasis patterns with their replacements, strongest first.
static RE_EMPHASIS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\*\*\*(.+?)\*\*\*", "<strong><em>${1}</em></strong>"),
        (r"\*\*(.+?)\*\*", "<strong>${1}</strong>"),
        (r"\*(.+?)\*", "<em>${1}</em>"),
    ]
    .into_iter()
    .map(|(pattern, rep)| (Regex::new(pattern).unwrap(), rep))
    .collect()
});

/// Underscore emphasis, strongest first: (pattern, marker width, open, close).
///
/// Only applied when neither outer side of the span touches a letter or
/// digit, so `snake_case` names, URLs and video ids pass through.
static RE_UNDERSCORE: LazyLock<Vec<(Regex, usize, &'static str, &'static str)>> =
    LazyLock::new(|| {
        [
            (r"___(.+?)___", 3_usize, "<strong><em>", "</em></strong>"),
            (r"__(.+?)__", 2, "<strong>", "</strong>"),
            (r"_(.+?)_", 1, "<em>", "</em>"),
        ]
        .into_iter()
        .map(|(pattern, width, open, close)| (Regex::new(pattern).unwrap(), width, open, close))
        .collect()
    });

static RE_BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^&gt; (.+)$").unwrap());

static RE_RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^---$").unwrap());

static RE_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

static RE_YOUTUBE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{youtube:([^}]+)\}\}").unwrap());

static RE_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^- (.+)$").unwrap());

static RE_ITEM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:<li>.*</li>\n?)+").unwrap());

static RE_NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[0-9]+\. (.+)$").unwrap());

/// Blocks starting with one of these are never wrapped in `<p>`.
const BLOCK_PREFIXES: [&str; 7] = ["<h", "<ul", "<ol", "<pre", "<blockquote", "<div", "<hr"];

// ============================================================================
// Stage table
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Escape,
    FencedCode,
    InlineCode,
    Headings,
    Emphasis,
    Blockquotes,
    HorizontalRules,
    Images,
    Links,
    VideoEmbeds,
    UnorderedLists,
    OrderedLists,
    Paragraphs,
    Restore,
}

/// Stages in application order.
pub const STAGES: [Stage; 14] = [
    Stage::Escape,
    Stage::FencedCode,
    Stage::InlineCode,
    Stage::Headings,
    Stage::Emphasis,
    Stage::Blockquotes,
    Stage::HorizontalRules,
    Stage::Images,
    Stage::Links,
    Stage::VideoEmbeds,
    Stage::UnorderedLists,
    Stage::OrderedLists,
    Stage::Paragraphs,
    Stage::Restore,
];

impl Stage {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Escape => "escape",
            Self::FencedCode => "fenced-code",
            Self::InlineCode => "inline-code",
            Self::Headings => "headings",
            Self::Emphasis => "emphasis",
            Self::Blockquotes => "blockquotes",
            Self::HorizontalRules => "horizontal-rules",
            Self::Images => "images",
            Self::Links => "links",
            Self::VideoEmbeds => "video-embeds",
            Self::UnorderedLists => "unordered-lists",
            Self::OrderedLists => "ordered-lists",
            Self::Paragraphs => "paragraphs",
            Self::Restore => "restore",
        }
    }

    /// Apply this stage to a document in place.
    pub fn apply(self, doc: &mut Document) {
        let Document { text, stash } = doc;

        let next = match self {
            Self::Escape => Cow::Owned(escape(text)),
            Self::FencedCode => RE_FENCE.replace_all(text, |caps: &Captures| {
                let html = format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    &caps[1],
                    caps[2].trim()
                );
                stash.block(html)
            }),
            Self::InlineCode => RE_INLINE_CODE.replace_all(text, |caps: &Captures| {
                stash.inline(format!("<code>{}</code>", &caps[1]))
            }),
            Self::Headings => Cow::Owned(headings(text)),
            Self::Emphasis => Cow::Owned(emphasis(text)),
            Self::Blockquotes => {
                RE_BLOCKQUOTE.replace_all(text, "<blockquote>${1}</blockquote>")
            }
            Self::HorizontalRules => RE_RULE.replace_all(text, "<hr>"),
            Self::Images => {
                RE_IMAGE.replace_all(text, r#"<img src="${2}" alt="${1}" loading="lazy">"#)
            }
            Self::Links => RE_LINK.replace_all(
                text,
                r#"<a href="${2}" target="_blank" rel="noopener">${1}</a>"#,
            ),
            Self::VideoEmbeds => RE_YOUTUBE.replace_all(text, |caps: &Captures| {
                video_embed(extract_youtube_id(&caps[1]))
            }),
            Self::UnorderedLists => Cow::Owned(unordered_lists(text)),
            Self::OrderedLists => RE_NUMBERED.replace_all(text, "<li>${1}</li>"),
            Self::Paragraphs => Cow::Owned(paragraphs(text)),
            Self::Restore => Cow::Owned(stash.restore(text)),
        };

        if let Cow::Owned(next) = next {
            *text = next;
        }
    }

    /// Run only this stage on `input`, restoring stashed fragments after.
    pub fn run(self, input: &str) -> String {
        let mut doc = Document::new(input);
        self.apply(&mut doc);
        doc.finish()
    }
}

// ============================================================================
// Stage bodies
// ============================================================================

/// Escape `&`, `<` and `>`. Placeholder characters in the source are
/// neutralized first.
fn escape(text: &str) -> String {
    let text = stash::neutralize(text);
    if !text.contains(['&', '<', '>']) {
        return text;
    }

    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn headings(text: &str) -> String {
    RE_HEADINGS
        .iter()
        .fold(text.to_string(), |acc, (level, re)| {
            let rep = format!("<h{level}>${{1}}</h{level}>");
            re.replace_all(&acc, rep.as_str()).into_owned()
        })
}

fn emphasis(text: &str) -> String {
    let text = RE_EMPHASIS
        .iter()
        .fold(text.to_string(), |acc, (re, rep)| {
            re.replace_all(&acc, *rep).into_owned()
        });
    RE_UNDERSCORE
        .iter()
        .fold(text, |acc, (re, width, open, close)| {
            underscore_spans(&acc, re, *width, open, close)
        })
}

/// Wrap underscore spans whose outer sides are not word characters.
///
/// A rejected candidate only skips its opening marker, so a later span on
/// the same line can still match.
fn underscore_spans(text: &str, re: &Regex, width: usize, open: &str, close: &str) -> String {
    let touches_word = |c: Option<char>| c.is_some_and(char::is_alphanumeric);

    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search = 0;
    while let Some(caps) = re.captures_at(text, search) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let before = text[..whole.start()].chars().next_back();
        let after = text[whole.end()..].chars().next();
        if touches_word(before) || touches_word(after) {
            search = whole.start() + width;
            continue;
        }
        out.push_str(&text[copied..whole.start()]);
        out.push_str(open);
        out.push_str(inner.as_str());
        out.push_str(close);
        copied = whole.end();
        search = whole.end();
    }
    out.push_str(&text[copied..]);
    out
}

/// Bullets become items; each contiguous run of item lines is wrapped once.
fn unordered_lists(text: &str) -> String {
    let items = RE_BULLET.replace_all(text, "<li>${1}</li>");
    RE_ITEM_RUN.replace_all(&items, "<ul>${0}</ul>").into_owned()
}

fn is_block_level(block: &str) -> bool {
    stash::starts_with_block(block) || BLOCK_PREFIXES.iter().any(|p| block.starts_with(p))
}

/// Split on blank lines and wrap inline blocks in `<p>`.
fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(|block| {
            if block.trim().is_empty() || is_block_level(block) {
                Cow::Borrowed(block)
            } else {
                Cow::Owned(format!("<p>{}</p>", block.replace('\n', "<br>")))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
