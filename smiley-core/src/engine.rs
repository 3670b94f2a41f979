//! Smiley substitution engine
//!
//! Rewrites smiley tokens and aliases into `<img>` tags and inserts snippets
//! into a text surface at the cursor.

use log::debug;

use crate::error::{ConfigError, SelectionError};
use crate::selection::{Selection, SelectionQuirk};
use crate::smiley::{AliasMap, SmileySet};
use crate::surface::TextSurface;

/// A literal pattern and the image tag it renders to
#[derive(Debug, Clone)]
struct Pattern {
    needle: String,
    image: String,
}

/// Piece of text during substitution. Rendered images are never rescanned.
#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    Raw(&'a str),
    Image(&'a str),
}

/// Immutable substitution engine for one smiley set
#[derive(Debug, Clone)]
pub struct Engine {
    set: SmileySet,
    aliases: AliasMap,
    quirk: SelectionQuirk,
    token_patterns: Vec<Pattern>,
    alias_patterns: Vec<Pattern>,
}

impl Engine {
    /// Build an engine, rejecting aliases that point at unknown tokens
    pub fn new(set: SmileySet, aliases: AliasMap) -> Result<Self, ConfigError> {
        aliases.validate(&set)?;

        let token_patterns = longest_first(
            set.iter()
                .map(|smiley| Pattern {
                    needle: smiley.token.clone(),
                    image: image_tag(smiley.name(), &smiley.url),
                })
                .collect(),
        );

        let alias_patterns = longest_first(
            aliases
                .iter()
                .filter_map(|alias| {
                    set.get(&alias.token).map(|smiley| Pattern {
                        needle: alias.alias.clone(),
                        image: image_tag("", &smiley.url),
                    })
                })
                .collect(),
        );

        debug!(
            "Engine ready with {} tokens and {} aliases",
            token_patterns.len(),
            alias_patterns.len()
        );

        Ok(Self {
            set,
            aliases,
            quirk: SelectionQuirk::default(),
            token_patterns,
            alias_patterns,
        })
    }

    /// Engine with no smilies; `render` is the identity
    pub fn empty() -> Self {
        Self {
            set: SmileySet::default(),
            aliases: AliasMap::default(),
            quirk: SelectionQuirk::default(),
            token_patterns: Vec::new(),
            alias_patterns: Vec::new(),
        }
    }

    pub fn with_quirk(mut self, quirk: SelectionQuirk) -> Self {
        self.quirk = quirk;
        self
    }

    pub fn set(&self) -> &SmileySet {
        &self.set
    }

    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    pub fn quirk(&self) -> SelectionQuirk {
        self.quirk
    }

    /// Replace every token, then every alias, with its image tag
    pub fn render(&self, text: &str) -> String {
        if self.token_patterns.is_empty() && self.alias_patterns.is_empty() {
            return text.to_string();
        }

        let mut segments = vec![Segment::Raw(text)];
        for pattern in self.token_patterns.iter().chain(&self.alias_patterns) {
            segments = substitute(segments, pattern);
        }

        let mut result = String::with_capacity(text.len());
        for segment in segments {
            match segment {
                Segment::Raw(s) | Segment::Image(s) => result.push_str(s),
            }
        }
        result
    }

    /// Replace the surface's selection with `snippet` and park the cursor after it.
    /// Returns the new cursor offset.
    pub fn insert_at_cursor<S: TextSurface + ?Sized>(
        &self,
        surface: &mut S,
        snippet: &str,
    ) -> Result<usize, SelectionError> {
        let len = surface.len_chars();
        let reported = surface.selection();
        let sentinel = reported.is_sentinel(len, self.quirk);
        let range = reported.normalize(len, self.quirk)?;

        // A sentinel range is not a real selection, so its text stays.
        let replace_end = if sentinel { range.start } else { range.end };
        surface.replace(range.start..replace_end, snippet);

        let cursor = range.start + snippet.chars().count();
        surface.set_selection(Selection::caret(cursor));
        Ok(cursor)
    }
}

/// Sort by descending char length; ties keep declaration order
fn longest_first(mut patterns: Vec<Pattern>) -> Vec<Pattern> {
    patterns.sort_by_key(|p| std::cmp::Reverse(p.needle.chars().count()));
    patterns
}

fn substitute<'a>(segments: Vec<Segment<'a>>, pattern: &'a Pattern) -> Vec<Segment<'a>> {
    let needle = pattern.needle.as_str();
    let mut out = Vec::with_capacity(segments.len());
    let mut count = 0usize;

    for segment in segments {
        let Segment::Raw(raw) = segment else {
            out.push(segment);
            continue;
        };

        let mut rest = raw;
        while let Some(pos) = rest.find(needle) {
            if pos > 0 {
                out.push(Segment::Raw(&rest[..pos]));
            }
            out.push(Segment::Image(&pattern.image));
            rest = &rest[pos + needle.len()..];
            count += 1;
        }
        if !rest.is_empty() {
            out.push(Segment::Raw(rest));
        }
    }

    if count > 0 {
        debug!("Replaced {} occurrence(s) of {}", count, needle);
    }
    out
}

fn image_tag(alt: &str, src: &str) -> String {
    format!(
        "<img alt=\"{}\" src=\"{}\">",
        escape_attr(alt),
        escape_attr(src)
    )
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiley::{Alias, Smiley};
    use crate::surface::TextBuffer;

    fn engine(tokens: &[(&str, &str)], aliases: &[(&str, &str)]) -> Engine {
        let set = SmileySet::new(
            tokens
                .iter()
                .map(|(token, url)| Smiley::new(*token, *url))
                .collect(),
        )
        .unwrap();
        let aliases = AliasMap::new(
            aliases
                .iter()
                .map(|(alias, token)| Alias::new(*alias, *token))
                .collect(),
        )
        .unwrap();
        Engine::new(set, aliases).unwrap()
    }

    #[test]
    fn test_token_and_alias_scenario() {
        let engine = engine(&[(":smile:", "url1")], &[(":-)", ":smile:")]);
        assert_eq!(
            engine.render("hi :-) there :smile:"),
            "hi <img alt=\"\" src=\"url1\"> there <img alt=\"smile\" src=\"url1\">"
        );
    }

    #[test]
    fn test_empty_engine_is_identity() {
        let engine = Engine::empty();
        let text = "hi :-) there :smile: <b>bold</b>";
        assert_eq!(engine.render(text), text);
    }

    #[test]
    fn test_all_repeats_replaced() {
        let engine = engine(&[(":)", "u")], &[]);
        assert_eq!(
            engine.render(":):):)"),
            "<img alt=\"\" src=\"u\"><img alt=\"\" src=\"u\"><img alt=\"\" src=\"u\">"
        );
    }

    #[test]
    fn test_longest_token_wins() {
        let engine = engine(&[(":)", "short"), (":))", "long")], &[]);
        assert_eq!(
            engine.render(":)) :)"),
            "<img alt=\")\" src=\"long\"> <img alt=\"\" src=\"short\">"
        );
    }

    #[test]
    fn test_tokens_before_aliases() {
        // ":sad:" contains the alias "sad:" but the token pass consumes it first
        let engine = engine(&[(":sad:", "u")], &[("sad:", ":sad:")]);
        assert_eq!(
            engine.render(":sad: sad:"),
            "<img alt=\"sad\" src=\"u\"> <img alt=\"\" src=\"u\">"
        );
    }

    #[test]
    fn test_alias_never_matches_inside_rendered_tag() {
        let engine = engine(&[(":smile:", "pic.gif")], &[("pic", ":smile:")]);
        assert_eq!(
            engine.render(":smile:"),
            "<img alt=\"smile\" src=\"pic.gif\">"
        );
    }

    #[test]
    fn test_patterns_are_literal() {
        let engine = engine(&[("(.*)", "u")], &[]);
        assert_eq!(engine.render("abc"), "abc");
        assert_eq!(engine.render("a(.*)b"), "a<img alt=\".*\" src=\"u\">b");
    }

    #[test]
    fn test_markup_passes_through() {
        let engine = engine(&[(":smile:", "u")], &[]);
        let text = "<a href=\"x\">link</a> & more";
        assert_eq!(engine.render(text), text);
    }

    #[test]
    fn test_attributes_escaped() {
        let engine = engine(&[(":q:", "a\"b&c")], &[]);
        assert_eq!(
            engine.render(":q:"),
            "<img alt=\"q\" src=\"a&quot;b&amp;c\">"
        );
    }

    #[test]
    fn test_dangling_alias_fails_construction() {
        let set = SmileySet::new(vec![Smiley::new(":smile:", "u")]).unwrap();
        let aliases = AliasMap::new(vec![Alias::new("<3", ":heart:")]).unwrap();
        assert!(matches!(
            Engine::new(set, aliases),
            Err(ConfigError::DanglingAlias { .. })
        ));
    }

    #[test]
    fn test_insert_at_empty_selection() {
        let engine = Engine::empty();
        let mut buf = TextBuffer::with_selection("0123456789", Selection::caret(5));

        let cursor = engine.insert_at_cursor(&mut buf, "X").unwrap();
        assert_eq!(cursor, 6);
        assert_eq!(buf.text(), "01234X56789");
        assert_eq!(buf.len_chars(), 11);
        assert_eq!(buf.selection(), Selection::caret(6));
    }

    #[test]
    fn test_insert_replaces_selection() {
        let engine = Engine::empty();
        let mut buf = TextBuffer::with_selection("hello world", Selection::new(6, 11));

        let cursor = engine.insert_at_cursor(&mut buf, ":smile:").unwrap();
        assert_eq!(buf.text(), "hello :smile:");
        assert_eq!(cursor, 13);
        assert_eq!(buf.selection(), Selection::caret(13));
    }

    #[test]
    fn test_insert_with_sentinel_end_keeps_trailing_text() {
        let engine = Engine::empty();
        let text = "a".repeat(50);
        let mut buf = TextBuffer::with_selection(&text, Selection::new(0, 1));

        let cursor = engine.insert_at_cursor(&mut buf, "X").unwrap();
        assert_eq!(cursor, 1);
        assert_eq!(buf.text(), format!("X{}", text));
        assert_eq!(buf.selection(), Selection::caret(1));
    }

    #[test]
    fn test_sentinel_start_past_reported_end() {
        let engine = Engine::empty();
        let text = "b".repeat(50);
        let mut buf = TextBuffer::with_selection(&text, Selection::new(30, 2));

        let cursor = engine.insert_at_cursor(&mut buf, "Y").unwrap();
        assert_eq!(cursor, 31);
        assert_eq!(buf.len_chars(), 51);
        assert_eq!(buf.text().chars().nth(30), Some('Y'));
    }

    #[test]
    fn test_insert_without_quirk_replaces_first_char() {
        let engine = Engine::empty().with_quirk(SelectionQuirk::None);
        let mut buf = TextBuffer::with_selection("abcdef", Selection::new(0, 1));

        engine.insert_at_cursor(&mut buf, "X").unwrap();
        assert_eq!(buf.text(), "Xbcdef");
    }

    #[test]
    fn test_insert_rejects_invalid_range() {
        let engine = Engine::empty();
        let mut buf = TextBuffer::with_selection("0123456789", Selection::new(8, 4));

        let result = engine.insert_at_cursor(&mut buf, "X");
        assert_eq!(result, Err(SelectionError::Inverted { start: 8, end: 4 }));
        assert_eq!(buf.text(), "0123456789");

        buf.set_selection(Selection::new(3, 20));
        let result = engine.insert_at_cursor(&mut buf, "X");
        assert_eq!(result, Err(SelectionError::OutOfBounds { end: 20, len: 10 }));
        assert_eq!(buf.text(), "0123456789");
    }

    #[test]
    fn test_insert_counts_chars_not_bytes() {
        let engine = Engine::empty();
        let mut buf = TextBuffer::with_selection("ééé", Selection::caret(3));

        let cursor = engine.insert_at_cursor(&mut buf, "ü").unwrap();
        assert_eq!(cursor, 4);
        assert_eq!(buf.text(), "éééü");
    }
}
