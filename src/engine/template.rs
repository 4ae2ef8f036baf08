//! Response templates.
//!
//! A template is parsed once, when its rule is compiled, into literal pieces
//! and positional slots:
//!
//! ```text
//! "Jadwal jam {0}. Cek lineup."
//!   -> [Literal("Jadwal jam "), Slot(0), Literal(". Cek lineup.")]
//! ```
//!
//! Syntax: `{N}` is capture group `N`, `{}` takes the next group in order,
//! and `{{` / `}}` are literal braces. Anything else inside braces, an
//! unclosed `{`, a lone `}`, or mixing `{}` with `{N}` makes the template
//! malformed; a malformed template is still usable and is always returned
//! verbatim.
//!
//! Rendering never fails. When it cannot fill every slot the caller gets the
//! template source back unchanged, together with the reason.

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Slot(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    /// True when the source contains at least one unescaped `{`.
    has_placeholders: bool,
    /// Parsed pieces, or the byte offset where parsing gave up.
    pieces: Result<Vec<Piece>, usize>,
}

/// Why a template came back unrendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbatimReason {
    NoPlaceholders,
    NoGroups,
    MissingGroup { index: usize, available: usize },
    Malformed { offset: usize },
}

/// Result of [`Template::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome<'t> {
    Rendered(String),
    Verbatim { text: &'t str, reason: VerbatimReason },
}

/// Owned summary of a [`RenderOutcome`], kept in reply traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    Rendered,
    Verbatim(VerbatimReason),
}

impl RenderOutcome<'_> {
    pub fn status(&self) -> RenderStatus {
        match self {
            RenderOutcome::Rendered(_) => RenderStatus::Rendered,
            RenderOutcome::Verbatim { reason, .. } => RenderStatus::Verbatim(*reason),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            RenderOutcome::Rendered(text) => text,
            RenderOutcome::Verbatim { text, .. } => text.to_string(),
        }
    }
}

impl Template {
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let (has_placeholders, pieces) = parse_pieces(&source);
        Template { source, has_placeholders, pieces }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn has_placeholders(&self) -> bool {
        self.has_placeholders
    }

    /// Number of distinct groups the template refers to (highest index + 1).
    pub fn arity(&self) -> usize {
        match &self.pieces {
            Ok(pieces) => pieces
                .iter()
                .filter_map(|p| match p {
                    Piece::Slot(i) => Some(i + 1),
                    Piece::Literal(_) => None,
                })
                .max()
                .unwrap_or(0),
            Err(_) => 0,
        }
    }

    /// Fill the template's slots with `groups`.
    ///
    /// Rendering is only attempted when the template has placeholders and at
    /// least one group is available; otherwise the source comes back as is.
    pub fn render(&self, groups: &[String]) -> RenderOutcome<'_> {
        let verbatim = |reason| RenderOutcome::Verbatim { text: self.source.as_str(), reason };

        if !self.has_placeholders {
            return verbatim(VerbatimReason::NoPlaceholders);
        }
        if groups.is_empty() {
            return verbatim(VerbatimReason::NoGroups);
        }
        let pieces = match &self.pieces {
            Ok(pieces) => pieces,
            Err(offset) => return verbatim(VerbatimReason::Malformed { offset: *offset }),
        };

        let mut out = String::with_capacity(self.source.len());
        for piece in pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Slot(index) => match groups.get(*index) {
                    Some(group) => out.push_str(group),
                    None => {
                        return verbatim(VerbatimReason::MissingGroup { index: *index, available: groups.len() });
                    }
                },
            }
        }
        RenderOutcome::Rendered(out)
    }
}

fn parse_pieces(source: &str) -> (bool, Result<Vec<Piece>, usize>) {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut has_placeholders = false;
    let mut next_auto = 0usize;
    let mut saw_auto = false;
    let mut saw_manual = false;
    let mut error: Option<usize> = None;

    let mut chars = source.char_indices().peekable();
    while let Some((offset, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                literal.push('{');
            }
            '{' => {
                has_placeholders = true;
                if error.is_some() {
                    continue;
                }

                let mut field = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    field.push(c);
                }

                let index = if !closed {
                    None
                } else if field.is_empty() {
                    saw_auto = true;
                    next_auto += 1;
                    Some(next_auto - 1)
                } else if field.bytes().all(|b| b.is_ascii_digit()) {
                    saw_manual = true;
                    field.parse::<usize>().ok()
                } else {
                    None
                };

                match index {
                    Some(index) if !(saw_auto && saw_manual) => {
                        if !literal.is_empty() {
                            pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                        }
                        pieces.push(Piece::Slot(index));
                    }
                    _ => error = Some(offset),
                }
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
                literal.push('}');
            }
            '}' => {
                if error.is_none() {
                    error = Some(offset);
                }
            }
            c => literal.push(c),
        }
    }

    if let Some(offset) = error {
        return (has_placeholders, Err(offset));
    }
    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }
    (has_placeholders, Ok(pieces))
}
