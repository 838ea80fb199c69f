//! Inline parsing primitives
//!
//!     Inline parsing runs on one logical line at a time, after block parsing has removed list
//!     markers and joined paragraph lines. It recognizes two formatting kinds:
//!
//!         - Strong: `**text**` or `__text__`
//!         - Emphasis: `*text*` or `_text_`
//!
//!     Matching is flat and non-nesting. The scanner walks the line left to right; at each
//!     position the delimiters are tried in the order listed in [SPECS]. The first position
//!     with a match wins, and scanning resumes right after the closing delimiter. Content may
//!     not contain the delimiter character and must not be empty, so `**` or `*a**` stay
//!     literal. Backslash escapes are not recognized.
//!
//!     See [parser] for the scanner.

mod nodes;
mod parser;

pub use nodes::{InlineContent, InlineKind, InlineSegment};
pub use parser::{parse_inline_segments, InlineSpec, SPECS};
