/// Knobs for the lexer and parser.
///
/// The defaults keep the narrow behavior: only the plain space is skipped
/// between tokens, and containers may nest up to 128 levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting depth of arrays and objects
    pub max_depth: usize,
    /// Also skip `\t`, `\n` and `\r` between tokens
    pub json_whitespace: bool,
}

impl ParserConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 128;
    /// Deepest nesting a debug build recurses through on a 2 MiB thread stack.
    pub const LENIENT_MAX_DEPTH: usize = 256;

    pub const fn strict() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            json_whitespace: false,
        }
    }

    /// Deeper nesting, and the full JSON whitespace set between tokens.
    pub const fn lenient() -> Self {
        Self {
            max_depth: Self::LENIENT_MAX_DEPTH,
            json_whitespace: true,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_json_whitespace(mut self, json_whitespace: bool) -> Self {
        self.json_whitespace = json_whitespace;
        self
    }

    pub(crate) fn is_whitespace(&self, ch: char) -> bool {
        match ch {
            ' ' => true,
            '\t' | '\n' | '\r' => self.json_whitespace,
            _ => false,
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::strict()
    }
}
