//! Parser façade over OXC.
//!
//! The extractor only needs a [`Program`]; this module turns source text into
//! one and folds parser diagnostics into [`JsmetaError::Parse`].

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::{JsmetaError, Result};

/// Parse options for reading source code.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Source type (JavaScript, TypeScript, JSX, TSX)
    pub source_type: SourceType,
    /// Keep the recovered tree when the parser reports errors
    pub allow_errors: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source_type: SourceType::mjs().with_jsx(true),
            allow_errors: false,
        }
    }
}

impl ParseOptions {
    /// Create parse options from a file path, falling back to an ES module.
    ///
    /// JavaScript sources always accept JSX, so component files named `.js`
    /// parse without a `.jsx` extension. TypeScript keeps the extension's
    /// choice, since `.ts` generics and casts conflict with JSX.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let source_type = SourceType::from_path(path.as_ref()).unwrap_or(SourceType::mjs());
        let source_type = if source_type.is_javascript() {
            source_type.with_jsx(true)
        } else {
            source_type
        };
        Self {
            source_type,
            allow_errors: false,
        }
    }

    pub fn allow_errors(mut self, allow: bool) -> Self {
        self.allow_errors = allow;
        self
    }
}

/// Parsed program together with the text it was parsed from.
pub struct ParsedProgram<'a> {
    pub program: Program<'a>,
    /// Recoverable diagnostics kept when `allow_errors` is set.
    pub diagnostics: Vec<String>,
    pub source_text: &'a str,
}

impl<'a> ParsedProgram<'a> {
    pub fn ast(&self) -> &Program<'a> {
        &self.program
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Parse `source` into an AST allocated in `allocator`.
///
/// A parser panic is always fatal. Other diagnostics are fatal unless
/// `options.allow_errors` is set.
pub fn parse<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    options: ParseOptions,
    path: &Path,
) -> Result<ParsedProgram<'a>> {
    let result = Parser::new(allocator, source, options.source_type).parse();

    let diagnostics: Vec<String> = result.errors.iter().map(|err| err.to_string()).collect();

    if result.panicked || (!options.allow_errors && !diagnostics.is_empty()) {
        return Err(JsmetaError::parse_error(path.to_path_buf(), &diagnostics));
    }

    Ok(ParsedProgram {
        program: result.program,
        diagnostics,
        source_text: source,
    })
}
