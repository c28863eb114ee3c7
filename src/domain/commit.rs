use regex::Regex;

/// A single `Token: value` footer entry.
///
/// Values may span multiple lines; continuation lines are folded into the
/// value with their line breaks preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub token: String,
    pub value: String,
}

impl Footer {
    /// True for the breaking-change footer tokens
    pub fn is_breaking(&self) -> bool {
        self.token == "BREAKING CHANGE" || self.token == "BREAKING-CHANGE"
    }
}

/// Parsed representation of a full commit message
///
/// Parsing is lenient and never fails: malformed headers leave `type`,
/// `scope` and `subject` empty so the linter can report each missing piece
/// on its own. Blank-line counts around the body and footer blocks are kept
/// for the leading-blank rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// The first line, verbatim
    pub header: String,
    pub r#type: String,
    /// None when no parentheses are present, Some("") for `type(): ...`
    pub scope: Option<String>,
    /// `!` between type/scope and the colon
    pub breaking_marker: bool,
    pub subject: String,
    pub body: Option<String>,
    pub footers: Vec<Footer>,
    /// Blank lines between the header and the body
    pub body_blank_lines: usize,
    /// Blank lines between the preceding content and the footer block
    pub footer_blank_lines: usize,
    /// Raw lines of the footer block, for per-line length checks
    pub footer_lines: Vec<String>,
}

fn header_regex() -> Regex {
    // Panic-free by construction; the pattern is a compile-time constant
    Regex::new(r"^([^()!:\s]*)(?:\(([^()]*)\))?(!)?:\s?(.*)$").unwrap_or_else(|_| unreachable!())
}

fn footer_regex() -> Regex {
    Regex::new(r"^(BREAKING CHANGE|[A-Za-z][A-Za-z0-9-]*)(: | #)(.*)$")
        .unwrap_or_else(|_| unreachable!())
}

impl CommitMessage {
    /// Parse a commit message.
    ///
    /// Supports the conventional header `type(scope)!: subject`, an optional
    /// body, and trailing footer paragraphs whose first line looks like a
    /// `Token: value` or `Token #value` trailer. A header that does not match
    /// the grammar at all yields empty type/scope/subject.
    pub fn parse(message: &str) -> Self {
        let lines: Vec<&str> = message.lines().collect();
        let header = lines.first().copied().unwrap_or("").to_string();

        let (r#type, scope, breaking_marker, subject) = match header_regex().captures(&header) {
            Some(captures) => (
                captures
                    .get(1)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                captures.get(2).map(|m| m.as_str().to_string()),
                captures.get(3).is_some(),
                captures
                    .get(4)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
            ),
            None => (String::new(), None, false, String::new()),
        };

        // Group the remaining lines into paragraphs, remembering how many
        // blank lines preceded each one.
        let mut paragraphs: Vec<(usize, Vec<String>)> = Vec::new();
        let mut blanks = 0usize;
        let mut current: Option<(usize, Vec<String>)> = None;

        for line in lines.iter().skip(1) {
            if line.trim().is_empty() {
                if let Some(paragraph) = current.take() {
                    paragraphs.push(paragraph);
                }
                blanks += 1;
            } else {
                match current.as_mut() {
                    Some((_, paragraph_lines)) => paragraph_lines.push(line.to_string()),
                    None => {
                        current = Some((blanks, vec![line.to_string()]));
                        blanks = 0;
                    }
                }
            }
        }
        if let Some(paragraph) = current.take() {
            paragraphs.push(paragraph);
        }

        // Footers are the trailing run of paragraphs that open with a trailer
        // token; everything before that is body.
        let footer_re = footer_regex();
        let mut footer_start = paragraphs.len();
        while footer_start > 0 {
            let (_, paragraph_lines) = &paragraphs[footer_start - 1];
            let opens_with_token = paragraph_lines
                .first()
                .map(|l| footer_re.is_match(l))
                .unwrap_or(false);
            if opens_with_token {
                footer_start -= 1;
            } else {
                break;
            }
        }

        let body_blank_lines = if footer_start > 0 { paragraphs[0].0 } else { 0 };
        let body = if footer_start > 0 {
            let text = paragraphs[..footer_start]
                .iter()
                .map(|(_, paragraph_lines)| paragraph_lines.join("\n"))
                .collect::<Vec<_>>()
                .join("\n\n");
            Some(text)
        } else {
            None
        };

        let footer_blank_lines = paragraphs
            .get(footer_start)
            .map(|(before, _)| *before)
            .unwrap_or(0);

        let mut footers: Vec<Footer> = Vec::new();
        let mut footer_lines: Vec<String> = Vec::new();
        for (_, paragraph_lines) in &paragraphs[footer_start..] {
            for line in paragraph_lines {
                footer_lines.push(line.clone());
                if let Some(captures) = footer_re.captures(line) {
                    footers.push(Footer {
                        token: captures
                            .get(1)
                            .map(|m| m.as_str().to_string())
                            .unwrap_or_default(),
                        value: captures
                            .get(3)
                            .map(|m| m.as_str().to_string())
                            .unwrap_or_default(),
                    });
                } else if let Some(last) = footers.last_mut() {
                    // Continuation line of a multi-line footer value
                    last.value.push('\n');
                    last.value.push_str(line);
                }
            }
        }

        CommitMessage {
            header,
            r#type,
            scope,
            breaking_marker,
            subject,
            body,
            footers,
            body_blank_lines,
            footer_blank_lines,
            footer_lines,
        }
    }

    /// True if any footer carries the breaking-change token
    pub fn has_breaking_footer(&self) -> bool {
        self.footers.iter().any(Footer::is_breaking)
    }

    /// Lines of the body, for per-line length checks
    pub fn body_lines(&self) -> Vec<&str> {
        self.body
            .as_deref()
            .map(|b| b.lines().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_scope() {
        let msg = CommitMessage::parse("feat(auth): add login");
        assert_eq!(msg.r#type, "feat");
        assert_eq!(msg.scope, Some("auth".to_string()));
        assert_eq!(msg.subject, "add login");
        assert!(!msg.breaking_marker);
        assert!(msg.body.is_none());
        assert!(msg.footers.is_empty());
    }

    #[test]
    fn test_parse_with_breaking_marker() {
        let msg = CommitMessage::parse("feat(auth)!: redesign login");
        assert_eq!(msg.r#type, "feat");
        assert!(msg.breaking_marker);
        assert!(!msg.has_breaking_footer());
    }

    #[test]
    fn test_parse_without_scope() {
        let msg = CommitMessage::parse("fix: resolve timeout");
        assert_eq!(msg.r#type, "fix");
        assert_eq!(msg.scope, None);
        assert_eq!(msg.subject, "resolve timeout");
    }

    #[test]
    fn test_parse_empty_scope_parens() {
        let msg = CommitMessage::parse("fix(): resolve timeout");
        assert_eq!(msg.scope, Some(String::new()));
    }

    #[test]
    fn test_parse_non_conventional() {
        let msg = CommitMessage::parse("Random commit message");
        assert_eq!(msg.r#type, "");
        assert_eq!(msg.scope, None);
        assert_eq!(msg.subject, "");
        assert_eq!(msg.header, "Random commit message");
    }

    #[test]
    fn test_parse_body() {
        let msg = CommitMessage::parse("feat(core): add cache\n\nkeeps hot entries in memory");
        assert_eq!(msg.body.as_deref(), Some("keeps hot entries in memory"));
        assert_eq!(msg.body_blank_lines, 1);
        assert!(msg.footers.is_empty());
    }

    #[test]
    fn test_parse_body_with_two_blank_lines() {
        let msg = CommitMessage::parse("feat(core): add cache\n\n\nbody after two blanks");
        assert_eq!(msg.body_blank_lines, 2);
    }

    #[test]
    fn test_parse_breaking_change_footer() {
        let msg = CommitMessage::parse(
            "fix(api): drop legacy endpoint\n\nBREAKING CHANGE: the /v1 endpoint is gone",
        );
        assert!(msg.has_breaking_footer());
        assert_eq!(msg.footers.len(), 1);
        assert_eq!(msg.footers[0].token, "BREAKING CHANGE");
        assert_eq!(msg.footers[0].value, "the /v1 endpoint is gone");
        assert!(msg.body.is_none());
        assert_eq!(msg.footer_blank_lines, 1);
    }

    #[test]
    fn test_parse_hyphenated_breaking_footer() {
        let msg = CommitMessage::parse("fix(api): drop endpoint\n\nBREAKING-CHANGE: gone");
        assert!(msg.has_breaking_footer());
    }

    #[test]
    fn test_parse_body_and_footers() {
        let msg = CommitMessage::parse(
            "feat(auth)!: switch token format\n\nTokens are now opaque strings.\n\nReviewed-by: sam\nRefs #42",
        );
        assert_eq!(msg.body.as_deref(), Some("Tokens are now opaque strings."));
        assert_eq!(msg.footers.len(), 2);
        assert_eq!(msg.footers[0].token, "Reviewed-by");
        assert_eq!(msg.footers[0].value, "sam");
        assert_eq!(msg.footers[1].token, "Refs");
        assert_eq!(msg.footers[1].value, "42");
        assert_eq!(msg.footer_blank_lines, 1);
    }

    #[test]
    fn test_parse_multiline_footer_value() {
        let msg = CommitMessage::parse(
            "fix(db): retry writes\n\nBREAKING CHANGE: retries are\nnow enabled by default",
        );
        assert_eq!(msg.footers.len(), 1);
        assert_eq!(msg.footers[0].value, "retries are\nnow enabled by default");
        assert_eq!(msg.footer_lines.len(), 2);
    }

    #[test]
    fn test_footer_without_blank_line_counted() {
        // Footer directly after the header, no separating blank line
        let msg = CommitMessage::parse("fix(db): retry writes\nRefs #42");
        assert_eq!(msg.footers.len(), 1);
        assert_eq!(msg.footer_blank_lines, 0);
    }

    #[test]
    fn test_mid_message_trailer_like_line_stays_body() {
        let msg = CommitMessage::parse(
            "fix(db): retry writes\n\nNote: this only affects bulk writes\n\nplain closing paragraph",
        );
        assert!(msg.footers.is_empty());
        assert!(msg
            .body
            .as_deref()
            .unwrap_or("")
            .contains("plain closing paragraph"));
    }

    #[test]
    fn test_idempotent_parse() {
        let text = "feat(core): add cache\n\nbody text\n\nRefs #7";
        assert_eq!(CommitMessage::parse(text), CommitMessage::parse(text));
    }
}
