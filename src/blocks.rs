//! Block parsing
//!
//!     Block parsing turns a section body into an ordered list of [Block]s. It is a single
//!     pass over the lines of the body:
//!
//!         1. Line endings (`\r\n`, `\r`) are normalized to `\n` and the text is split.
//!         2. Each trimmed line is classified (see [line_classification]) as blank, bullet,
//!            numbered or plain. Bullet is checked before numbered, numbered before plain.
//!         3. Lines are fed to an accumulator holding at most one open paragraph and one open
//!            list. Blank lines flush both, list lines flush the paragraph and any list of the
//!            other kind, plain lines flush the list.
//!         4. End of input flushes whatever is still open.
//!
//!     A paragraph flush joins its buffered lines with a single space and runs the inline
//!     segmenter once over the result. List items are segmented line by line.
//!
//!     Nothing here fails: any string, including the empty one, parses.

pub mod line_classification;
mod nodes;
mod parser;

pub use line_classification::{classify_line, LineType};
pub use nodes::{Block, ListKind};
pub use parser::{normalize_newlines, parse_content_blocks};
