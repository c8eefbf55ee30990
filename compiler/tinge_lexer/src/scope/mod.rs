//! Pass 3: scope links between matching quotes and brackets.
//!
//! Every lexeme starts linked to itself. Strings and comments recorded by
//! the classifier are opaque to the top level: their interiors are
//! resolved as separate sub-problems, so a bracket inside a string never
//! matches one outside it.
//!
//! Bracket matching keeps one stack per family, never recursion, so
//! nesting depth is bounded only by memory.

use crate::classify::{is_escaped, Lexeme, Region};
use crate::TokenKind;

/// Bytes treated as quote characters when linking unclassified quotes.
const QUOTES: [u8; 3] = *b"'\"`";

const FAMILIES: usize = 4;

/// Open/close bytes of each bracket family.
const BRACKETS: [(u8, u8); FAMILIES] = [(b'(', b')'), (b'[', b']'), (b'{', b'}'), (b'<', b'>')];

/// Resolve scope links for `lexemes`. Returns one link per lexeme.
pub(crate) fn resolve(source: &[u8], lexemes: &[Lexeme], regions: &[Region]) -> Vec<usize> {
    let mut resolver = Resolver::new(source, lexemes);
    resolver.run(regions);

    if resolver.unmatched > 0 {
        tracing::trace!(unmatched = resolver.unmatched, "unmatched brackets self-link");
    }
    tracing::trace!(quote_scans = resolver.quote_scans, "quote pairing done");
    resolver.links
}

struct Resolver<'a> {
    source: &'a [u8],
    lexemes: &'a [Lexeme],
    links: Vec<usize>,
    unmatched: usize,
    /// Candidate closers examined while pairing quotes.
    quote_scans: usize,
}

impl<'a> Resolver<'a> {
    fn new(source: &'a [u8], lexemes: &'a [Lexeme]) -> Self {
        Self {
            source,
            lexemes,
            links: (0..lexemes.len()).collect(),
            unmatched: 0,
            quote_scans: 0,
        }
    }

    fn run(&mut self, regions: &[Region]) {
        let lexemes = self.lexemes;
        let mut top_level = Vec::with_capacity(lexemes.len());
        let mut next = 0;
        for region in regions {
            top_level.extend(next..region.start);
            next = region.end;
            self.region(region);
        }
        top_level.extend(next..lexemes.len());
        self.scope(&top_level);
    }

    fn region(&mut self, region: &Region) {
        let interior: Vec<usize> = match region.kind {
            TokenKind::String if region.closed && region.end - region.start >= 2 => {
                self.link(region.start, region.end - 1);
                (region.start + 1..region.end - 1).collect()
            }
            TokenKind::String => (region.start + 1..region.end).collect(),
            _ => (region.start..region.end).collect(),
        };
        if region.kind == TokenKind::String {
            self.brackets(&interior);
        } else {
            self.scope(&interior);
        }
    }

    /// Link quote pairs among `indices`, resolving brackets between each
    /// pair on their own, then match the remaining brackets.
    ///
    /// Whether a closer is escaped depends only on the backslashes right
    /// before it, never on the opener. Once a search for some quote byte
    /// comes up empty, every later opener of that byte in `indices` would
    /// fail the same way and is skipped.
    fn scope(&mut self, indices: &[usize]) {
        let mut rest = Vec::with_capacity(indices.len());
        let mut exhausted = [false; QUOTES.len()];
        let mut i = 0;
        while i < indices.len() {
            let open = indices[i];
            if let Some(slot) = self.quote(open) {
                if !exhausted[slot] {
                    if let Some(close) = self.closing_quote(indices, i, QUOTES[slot]) {
                        self.link(open, indices[close]);
                        self.brackets(&indices[i + 1..close]);
                        i = close + 1;
                        continue;
                    }
                    exhausted[slot] = true;
                }
            }
            rest.push(open);
            i += 1;
        }
        self.brackets(&rest);
    }

    /// Position in `indices` of the first unescaped `quote` after `at`.
    fn closing_quote(&mut self, indices: &[usize], at: usize, quote: u8) -> Option<usize> {
        let floor = self.lexemes[indices[at]].end;
        for (pos, &idx) in indices.iter().enumerate().skip(at + 1) {
            self.quote_scans += 1;
            let lex = &self.lexemes[idx];
            if lex.single_byte(self.source) == Some(quote)
                && !is_escaped(self.source, lex.start, floor)
            {
                return Some(pos);
            }
        }
        None
    }

    /// Per-family depth matching over `indices`.
    fn brackets(&mut self, indices: &[usize]) {
        let mut stacks: [Vec<usize>; FAMILIES] = Default::default();
        for &idx in indices {
            let Some(byte) = self.lexemes[idx].single_byte(self.source) else {
                continue;
            };
            for (family, &(open, close)) in BRACKETS.iter().enumerate() {
                if byte == open {
                    stacks[family].push(idx);
                } else if byte == close {
                    match stacks[family].pop() {
                        Some(opener) => self.link(opener, idx),
                        None => self.unmatched += 1,
                    }
                }
            }
        }
        self.unmatched += stacks.iter().map(Vec::len).sum::<usize>();
    }

    /// Slot in [`QUOTES`] of a linkable quote lexeme.
    ///
    /// An apostrophe inside a comment is prose, not a delimiter.
    fn quote(&self, idx: usize) -> Option<usize> {
        let lex = &self.lexemes[idx];
        let byte = lex.single_byte(self.source)?;
        if byte == b'\'' && lex.kind.is_comment() {
            return None;
        }
        QUOTES.iter().position(|&q| q == byte)
    }

    fn link(&mut self, a: usize, b: usize) {
        self.links[a] = b;
        self.links[b] = a;
    }
}

#[cfg(test)]
mod tests;
