use std::io::{self, BufRead, Seek, SeekFrom};

/// Everything from this character to the end of a line is ignored.
pub const COMMENT_MARKER: char = '#';

/// A meaningful line: comment stripped, trimmed, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based position in the raw input.
    pub number: usize,
    pub text: String,
}

/// A saved stream position, see [`LineReader::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    offset: u64,
    line: usize,
}

/// Drop the comment tail of `raw` and trim surrounding whitespace.
pub fn strip_comment(raw: &str) -> &str {
    raw.find(COMMENT_MARKER)
        .map_or(raw, |pos| &raw[..pos])
        .trim()
}

// ---------------------------------------------------------------------------
// LineReader
// ---------------------------------------------------------------------------

/// Yields the meaningful lines of a text stream, skipping blank and
/// comment-only lines.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    /// Raw lines consumed so far.
    line: usize,
    buf: String,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        LineReader {
            inner,
            line: 0,
            buf: String::new(),
        }
    }

    /// Next meaningful line, or `None` at end of stream.
    pub fn next_line(&mut self) -> io::Result<Option<Line>> {
        loop {
            self.buf.clear();
            if self.inner.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let text = strip_comment(&self.buf);
            if !text.is_empty() {
                return Ok(Some(Line {
                    number: self.line,
                    text: text.to_string(),
                }));
            }
        }
    }

    /// Number of raw lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line
    }
}

impl<R: BufRead + Seek> LineReader<R> {
    /// Capture the current position so a lookahead can be undone.
    pub fn checkpoint(&mut self) -> io::Result<Checkpoint> {
        Ok(Checkpoint {
            offset: self.inner.stream_position()?,
            line: self.line,
        })
    }

    /// Rewind to a position captured by [`checkpoint`](Self::checkpoint).
    pub fn restore(&mut self, checkpoint: Checkpoint) -> io::Result<()> {
        self.inner.seek(SeekFrom::Start(checkpoint.offset))?;
        self.line = checkpoint.line;
        Ok(())
    }
}
