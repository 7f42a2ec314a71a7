use std::io::{BufRead, Seek};

use super::error::ParseError;
use super::model::{is_missing, Signal, SignalSet, MISSING};
use super::reader::{Line, LineReader};

/// Line that closes a signal's sample block.
pub const END_OF_SIGNAL: &str = "END_OF_SIGNAL";

/// Token standing for an x value to be interpolated.
pub const MISSING_TOKEN: &str = "*";

/// Parse every signal block of `input`.
///
/// File layout:
/// ```text
/// <label>
/// <x> <y>        # x may be `*`
/// ...
/// END_OF_SIGNAL
/// ```
///
/// A label that appears twice keeps the later block's samples.
pub fn parse_signals<R: BufRead + Seek>(input: R) -> Result<SignalSet, ParseError> {
    SignalParser::new(input).parse()
}

/// How the sample loop of one block ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SampleBlock {
    /// All pre-counted samples were read; the terminator is still pending.
    FullyConsumed,
    /// `END_OF_SIGNAL` showed up before the pre-counted number of samples.
    TerminatedEarly { at_index: usize },
}

// ---------------------------------------------------------------------------
// SignalParser
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct SignalParser<R> {
    reader: LineReader<R>,
}

impl<R: BufRead + Seek> SignalParser<R> {
    pub fn new(input: R) -> Self {
        SignalParser {
            reader: LineReader::new(input),
        }
    }

    /// Consume the whole stream into a [`SignalSet`].
    pub fn parse(mut self) -> Result<SignalSet, ParseError> {
        let mut signals = SignalSet::new();

        while let Some((label, signal)) = self.next_signal()? {
            log::debug!(
                "Parsed signal '{label}': {} samples, {} missing x",
                signal.len(),
                signal.missing_x()
            );
            if signals.insert(label.clone(), signal).is_some() {
                log::warn!("Signal '{label}' defined more than once, keeping the last block");
            }
        }

        Ok(signals)
    }

    /// Read the next `label … END_OF_SIGNAL` block, or `None` at end of stream.
    pub fn next_signal(&mut self) -> Result<Option<(String, Signal)>, ParseError> {
        let Some(header) = self.reader.next_line()? else {
            return Ok(None);
        };
        if header.text == END_OF_SIGNAL {
            return Err(ParseError::UnexpectedTerminator {
                line: header.number,
            });
        }
        let label = header.text;

        let expected = self.count_samples(&label, header.number)?;
        let mut signal = Signal::with_capacity(expected);

        match self.read_samples(&label, expected, &mut signal)? {
            SampleBlock::FullyConsumed => self.expect_terminator(&label)?,
            SampleBlock::TerminatedEarly { at_index } => {
                log::debug!("Signal '{label}' ended after {at_index} of {expected} samples");
            }
        }

        Ok(Some((label, signal)))
    }

    /// Count the sample lines up to the next terminator, then rewind.
    fn count_samples(&mut self, label: &str, label_line: usize) -> Result<usize, ParseError> {
        let mark = self.reader.checkpoint()?;
        let mut count = 0;
        loop {
            match self.reader.next_line()? {
                Some(line) if line.text == END_OF_SIGNAL => break,
                Some(_) => count += 1,
                None => {
                    return Err(ParseError::UnterminatedSignal {
                        label: label.to_string(),
                        line: label_line,
                    })
                }
            }
        }
        self.reader.restore(mark)?;
        Ok(count)
    }

    /// Read up to `expected` sample lines into `signal`.
    fn read_samples(
        &mut self,
        label: &str,
        expected: usize,
        signal: &mut Signal,
    ) -> Result<SampleBlock, ParseError> {
        for index in 0..expected {
            let Some(line) = self.reader.next_line()? else {
                return Err(ParseError::UnterminatedSignal {
                    label: label.to_string(),
                    line: self.reader.line_number(),
                });
            };
            if line.text == END_OF_SIGNAL {
                return Ok(SampleBlock::TerminatedEarly { at_index: index });
            }
            let (x, y) = parse_sample(label, &line)?;
            signal.push(x, y);
        }
        Ok(SampleBlock::FullyConsumed)
    }

    fn expect_terminator(&mut self, label: &str) -> Result<(), ParseError> {
        match self.reader.next_line()? {
            Some(line) if line.text == END_OF_SIGNAL => Ok(()),
            Some(line) => Err(ParseError::MissingTerminator {
                label: label.to_string(),
                line: line.number,
                found: line.text,
            }),
            None => Err(ParseError::UnterminatedSignal {
                label: label.to_string(),
                line: self.reader.line_number(),
            }),
        }
    }
}

// -- Sample line helpers --

/// Split a sample line into `(x, y)`; a missing x becomes [`MISSING`].
///
/// A `NaN` literal counts as missing, so it is accepted for x and rejected for y.
fn parse_sample(label: &str, line: &Line) -> Result<(f64, f64), ParseError> {
    let tokens: Vec<&str> = line.text.split_whitespace().collect();
    let &[x_token, y_token] = tokens.as_slice() else {
        return Err(ParseError::WrongTokenCount {
            label: label.to_string(),
            line: line.number,
            found: tokens.len(),
        });
    };

    let x = parse_value(label, line, x_token)?.unwrap_or(MISSING);
    let y = parse_value(label, line, y_token)?
        .filter(|v| !is_missing(*v))
        .ok_or_else(|| ParseError::MissingY {
            label: label.to_string(),
            line: line.number,
        })?;
    Ok((x, y))
}

fn parse_value(label: &str, line: &Line, token: &str) -> Result<Option<f64>, ParseError> {
    if token == MISSING_TOKEN {
        return Ok(None);
    }
    token
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ParseError::MalformedNumber {
            label: label.to_string(),
            line: line.number,
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(input: &str) -> Result<SignalSet, ParseError> {
        parse_signals(Cursor::new(input))
    }

    #[test]
    fn parses_blocks_in_order() {
        let set = parse("A\n0 5\n1 6\nEND_OF_SIGNAL\nB\n2.5 -1e3\nEND_OF_SIGNAL\n").unwrap();

        assert_eq!(set.labels().collect::<Vec<_>>(), ["A", "B"]);
        let a = set.get("A").unwrap();
        assert_eq!(a.x(), [0.0, 1.0]);
        assert_eq!(a.y(), [5.0, 6.0]);
        let b = set.get("B").unwrap();
        assert_eq!(b.x(), [2.5]);
        assert_eq!(b.y(), [-1000.0]);
    }

    #[test]
    fn empty_input_gives_empty_set() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("# just comments\n\n   \n").unwrap().is_empty());
    }

    #[test]
    fn label_without_samples_is_an_empty_signal() {
        let set = parse("quiet\nEND_OF_SIGNAL\n").unwrap();
        assert!(set.get("quiet").unwrap().is_empty());
    }

    #[test]
    fn star_marks_missing_x() {
        let set = parse("A\n* 0\n1.0 2\nEND_OF_SIGNAL\n").unwrap();
        let a = set.get("A").unwrap();
        assert!(is_missing(a.x()[0]));
        assert_eq!(a.x()[1], 1.0);
        assert_eq!(a.missing_x(), 1);
    }

    #[test]
    fn comments_and_blanks_are_ignored_inside_blocks() {
        let plain = parse("A\n0 1\n1 2\nEND_OF_SIGNAL\n").unwrap();
        let noisy = parse(
            "# file header\n\nA   # label comment\n\n0 1 # first\n#\n   \n1 2\nEND_OF_SIGNAL # done\n\n",
        )
        .unwrap();
        assert_eq!(plain, noisy);
    }

    #[test]
    fn duplicate_label_keeps_last_block() {
        let set = parse("A\n0 1\nEND_OF_SIGNAL\nB\n0 0\nEND_OF_SIGNAL\nA\n7 8\n9 10\nEND_OF_SIGNAL\n")
            .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("A").unwrap().x(), [7.0, 9.0]);
        assert_eq!(set.labels().collect::<Vec<_>>(), ["A", "B"]);
    }

    #[test]
    fn unterminated_block_is_fatal() {
        let err = parse("A\n0 1\nEND_OF_SIGNAL\nB\n0 1\n1 2\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnterminatedSignal { ref label, line: 4 } if label == "B"
        ));
    }

    #[test]
    fn wrong_token_count_is_fatal() {
        let err = parse("A\n0 1 2\nEND_OF_SIGNAL\n").unwrap_err();
        assert!(matches!(err, ParseError::WrongTokenCount { found: 3, line: 2, .. }));

        let err = parse("A\n0\nEND_OF_SIGNAL\n").unwrap_err();
        assert!(matches!(err, ParseError::WrongTokenCount { found: 1, .. }));
    }

    #[test]
    fn malformed_number_is_fatal() {
        let err = parse("A\n0 1\n0.5 abc\nEND_OF_SIGNAL\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedNumber { ref token, line: 3, .. } if token == "abc"
        ));
    }

    #[test]
    fn missing_y_is_fatal() {
        let err = parse("A\n1 *\nEND_OF_SIGNAL\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingY { line: 2, .. }));
    }

    #[test]
    fn nan_literal_is_missing_for_x_and_fatal_for_y() {
        let set = parse("A\nNaN 1\n2 3\nEND_OF_SIGNAL\n").unwrap();
        let a = set.get("A").unwrap();
        assert_eq!(a.missing_x(), 1);
        assert_eq!(a.y(), [1.0, 3.0]);

        let err = parse("A\n1 NaN\nEND_OF_SIGNAL\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingY { ref label, line: 2 } if label == "A"));

        let err = parse("A\n1 2\n2 nan\nEND_OF_SIGNAL\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingY { line: 3, .. }));
    }

    #[test]
    fn terminator_in_label_position_is_fatal() {
        let err = parse("END_OF_SIGNAL\n").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedTerminator { line: 1 }));
    }

    #[test]
    fn sample_count_beyond_terminator_stops_early() {
        let mut parser = SignalParser::new(Cursor::new("1 1\n2 2\nEND_OF_SIGNAL\n"));
        let mut signal = Signal::new();

        let block = parser.read_samples("A", 5, &mut signal).unwrap();

        assert_eq!(block, SampleBlock::TerminatedEarly { at_index: 2 });
        assert_eq!(signal.len(), 2);
        assert_eq!(signal.x().len(), signal.y().len());
    }

    #[test]
    fn sample_count_short_of_terminator_is_fatal() {
        let mut parser = SignalParser::new(Cursor::new("1 1\n2 2\n3 3\nEND_OF_SIGNAL\n"));
        let mut signal = Signal::new();

        let block = parser.read_samples("A", 2, &mut signal).unwrap();
        assert_eq!(block, SampleBlock::FullyConsumed);

        let err = parser.expect_terminator("A").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingTerminator { ref found, line: 3, .. } if found == "3 3"
        ));
    }

    #[test]
    fn error_messages_name_label_and_line() {
        let err = parse("\n\nsig\n1 x\nEND_OF_SIGNAL\n").unwrap_err();
        assert_eq!(err.to_string(), "signal 'sig', line 4: 'x' is not a number");
    }
}
