/// Runtime options for the parser.
///
/// The defaults match the common INI dialect: full-line comments start
/// with `;` or `#`, inline comments (on unquoted values only) with `;`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ParseOptions {
    /// Whether full-line comments are recognized at all.
    pub allow_comments: bool,

    /// Characters that mark an entire line as a comment
    /// when they appear in the first column.
    pub comment_prefixes: Vec<char>,

    /// Whether trailing comments on unquoted values are stripped.
    pub allow_inline_comments: bool,

    /// Characters that start an inline comment inside an unquoted value.
    pub inline_comment_prefixes: Vec<char>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_comments: true,
            comment_prefixes: vec![';', '#'],
            allow_inline_comments: true,
            inline_comment_prefixes: vec![';'],
        }
    }
}

impl ParseOptions {
    pub(crate) fn is_comment_line(&self, line: &str) -> bool {
        if !self.allow_comments {
            return false;
        }

        line.chars()
            .next()
            .is_some_and(|first| self.comment_prefixes.contains(&first))
    }

    /// Truncates `value` at the first inline-comment prefix (if enabled)
    /// and re-strips trailing whitespace.
    pub(crate) fn strip_inline_comment<'v>(&self, value: &'v str) -> &'v str {
        if !self.allow_inline_comments {
            return value;
        }

        match value.find(|c| self.inline_comment_prefixes.contains(&c)) {
            Some(index) => value[..index].trim_end(),
            None => value,
        }
    }
}
