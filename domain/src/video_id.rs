//! Extraction of the 11-character video identifier from YouTube URLs.
//!
//! Four URL shapes are recognized. Each is an independent matcher that receives the
//! byte offset just past the host prefix and returns the identifier if the shape fits:
//!
//! | shape        | example                                       |
//! |--------------|-----------------------------------------------|
//! | nested path  | `youtube.com/user/someone/dQw4w9WgXcQ`        |
//! | `/v/`, embed | `youtube.com/embed/dQw4w9WgXcQ`               |
//! | query param  | `youtube.com/watch?feature=share&v=dQw4w9WgXcQ` |
//! | short link   | `youtu.be/dQw4w9WgXcQ`                        |
//!
//! Host occurrences are scanned left to right and the first one for which a shape
//! matches wins. Within a `youtube.com/` occurrence the shapes are tried in the order
//! listed above. No normalization (scheme, case, whitespace) is applied to the input.
//!
//! The nested path and query param shapes both look for the right-most marker on a
//! line. That answer is computed once per line and shared by every host occurrence
//! on it, so extraction stays linear in the length of the input.

use std::fmt;
use std::ops::RangeInclusive;

const ID_LEN: usize = 11;
const YOUTUBE_HOST: &str = "youtube.com/";
const SHORT_LINK_HOST: &str = "youtu.be/";
const QUERY_KEY: &str = "v=";

/// The 11-character token YouTube uses to reference a video.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

type ShapeMatcher = fn(&mut Scanner<'_>, usize) -> Option<VideoId>;

const YOUTUBE_SHAPES: [ShapeMatcher; 3] = [nested_path, versioned_or_embed, query_param];

/// Returns the video identifier embedded in `url`, or `None` when no known shape matches.
pub fn extract(url: &str) -> Option<VideoId> {
    let mut scanner = Scanner::new(url);

    url.char_indices().find_map(|(at, _)| {
        let rest = &url[at..];
        if rest.starts_with(YOUTUBE_HOST) {
            let after_host = at + YOUTUBE_HOST.len();
            YOUTUBE_SHAPES
                .iter()
                .find_map(|shape| shape(&mut scanner, after_host))
        } else if rest.starts_with(SHORT_LINK_HOST) {
            short_link(&mut scanner, at + SHORT_LINK_HOST.len())
        } else {
            None
        }
    })
}

/// The input being scanned, plus the per-line markers the shapes share.
struct Scanner<'a> {
    url: &'a str,
    nested_slashes: RightMost<'a>,
    query_markers: RightMost<'a>,
}

impl<'a> Scanner<'a> {
    fn new(url: &'a str) -> Self {
        Self {
            url,
            nested_slashes: RightMost::new(url, is_slash_before_id),
            query_markers: RightMost::new(url, is_query_key_before_id),
        }
    }
}

/// Remembers the right-most position on the current line accepted by `accepts`.
///
/// Lookups must move forward through the input; a line is only scanned again when
/// a lookup leaves it.
struct RightMost<'a> {
    url: &'a str,
    accepts: fn(&str) -> bool,
    /// Start of the line through its terminating `\n` (or the end of the input).
    line: RangeInclusive<usize>,
    found: Option<usize>,
}

impl<'a> RightMost<'a> {
    fn new(url: &'a str, accepts: fn(&str) -> bool) -> Self {
        Self {
            url,
            accepts,
            line: 1..=0,
            found: None,
        }
    }

    /// Right-most accepted position that is at or after `from` and on the same line.
    fn at_or_after(&mut self, from: usize) -> Option<usize> {
        if !self.line.contains(&from) {
            let url = self.url;
            let accepts = self.accepts;
            let start = url[..from].rfind('\n').map_or(0, |newline| newline + 1);
            let end = url[from..]
                .find('\n')
                .map_or(url.len(), |newline| from + newline);

            self.found = url[start..end]
                .char_indices()
                .rev()
                .map(|(at, _)| start + at)
                .find(|&at| accepts(&url[at..]));
            self.line = start..=end;
        }
        self.found.filter(|&at| at >= from)
    }
}

/// `youtube.com/<segment>/<anything>/<id>`
///
/// `<segment>` runs up to the first `/`; `<anything>` is non-empty, stays on the
/// line it starts on, and the right-most `/` followed by a valid identifier is used.
fn nested_path(scanner: &mut Scanner<'_>, after_host: usize) -> Option<VideoId> {
    let url = scanner.url;
    let slash = after_host + url[after_host..].find('/')?;
    if slash == after_host {
        return None;
    }
    let tail = slash + 1;

    let id_slash = scanner
        .nested_slashes
        .at_or_after(tail)
        .filter(|&at| at > tail)?;
    read_id(&url[id_slash + 1..])
}

/// `youtube.com/v/<id>` and `youtube.com/embed/<id>`
fn versioned_or_embed(scanner: &mut Scanner<'_>, after_host: usize) -> Option<VideoId> {
    let after_host = &scanner.url[after_host..];
    after_host
        .strip_prefix("v/")
        .or_else(|| after_host.strip_prefix("embed/"))
        .and_then(read_id)
}

/// `youtube.com/<...>?v=<id>` or `youtube.com/<...>&v=<id>`
///
/// The right-most `?v=`/`&v=` on the host's line that is followed by a valid
/// identifier is used.
fn query_param(scanner: &mut Scanner<'_>, after_host: usize) -> Option<VideoId> {
    let marker = scanner.query_markers.at_or_after(after_host)?;
    read_id(&scanner.url[marker + 1 + QUERY_KEY.len()..])
}

/// `youtu.be/<id>`
fn short_link(scanner: &mut Scanner<'_>, after_host: usize) -> Option<VideoId> {
    read_id(&scanner.url[after_host..])
}

fn is_slash_before_id(s: &str) -> bool {
    s.strip_prefix('/').and_then(read_id).is_some()
}

fn is_query_key_before_id(s: &str) -> bool {
    s.strip_prefix(['?', '&'])
        .and_then(|rest| rest.strip_prefix(QUERY_KEY))
        .and_then(read_id)
        .is_some()
}

/// Reads exactly `ID_LEN` identifier characters from the start of `s`.
fn read_id(s: &str) -> Option<VideoId> {
    let id: String = s
        .chars()
        .take(ID_LEN)
        .take_while(|&c| is_id_char(c))
        .collect();

    (id.chars().count() == ID_LEN).then_some(VideoId(id))
}

fn is_id_char(c: char) -> bool {
    !matches!(c, '"' | '&' | '?' | '/' | ' ')
}
