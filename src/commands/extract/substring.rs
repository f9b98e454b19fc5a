use std::io::{BufRead, Write};

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use anyhow::Result;

/// Line filter keeping every line that contains any identifier literally.
///
/// This over-selects when one identifier is a substring of another, or of an
/// unrelated field in the row.
#[derive(Clone)]
pub struct SubstringMatcher {
    automaton: AhoCorasick,
}

impl SubstringMatcher {
    pub fn new(ids: &[String]) -> Result<Self> {
        Ok(Self {
            automaton: AhoCorasickBuilder::new()
                .ascii_case_insensitive(false)
                .match_kind(MatchKind::Standard)
                .build(ids)?,
        })
    }

    pub fn is_match(&self, line: &[u8]) -> bool {
        self.automaton.patterns_len() > 0 && self.automaton.is_match(line)
    }

    /// Copies matching lines in input order and returns how many matched.
    ///
    /// With `with_header`, the first line is copied unconditionally and not counted.
    pub fn filter_lines<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        writer: &mut W,
        with_header: bool,
    ) -> Result<usize> {
        let mut line = Vec::new();
        let mut rows = 0;
        let mut first = true;
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            let is_header = std::mem::take(&mut first);
            if is_header && with_header {
                write_line(writer, &line)?;
            } else if self.is_match(&line) {
                write_line(writer, &line)?;
                rows += 1;
            }
        }
        Ok(rows)
    }
}

fn write_line<W: Write>(writer: &mut W, line: &[u8]) -> Result<()> {
    writer.write_all(line)?;
    if !line.ends_with(b"\n") {
        writer.write_all(b"\n")?;
    }
    Ok(())
}
