use std::fs;
use std::io;
use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    BindingIdentifier, BindingPatternKind, Class, ClassElement, Declaration,
    ExportDefaultDeclaration, ExportDefaultDeclarationKind, ExportNamedDeclaration, Expression,
    FormalParameter, FormalParameters, Function, ImportDeclaration, ImportDeclarationSpecifier,
    MethodDefinition, MethodDefinitionKind, ModuleExportName, Program, PropertyDefinition,
    PropertyKey, Statement,
};
use oxc_span::Span;
use tracing::{debug, warn};

use crate::error::{ConstructKind, JsmetaError, Result};
use crate::model::{
    ClassRecord, ExportKind, ExportRecord, FileMetadata, FunctionRecord, ImportRecord,
    MethodKind, MethodRecord, PropertyRecord, SourceLocation, Specifier, ANONYMOUS, COMPUTED_KEY,
};
use crate::parse::{parse, ParseOptions};

/// Options controlling metadata extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Extract from the parser's recovered tree instead of failing on syntax errors.
    pub allow_parse_errors: bool,
}

/// Builds a [`FileMetadata`] summary from JavaScript / TypeScript modules using OXC.
#[derive(Debug, Clone, Default)]
pub struct MetadataExtractor {
    options: ExtractOptions,
}

impl MetadataExtractor {
    /// Create a new extractor with the provided options.
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract metadata from a file on disk.
    pub fn extract_from_path(&self, path: impl AsRef<Path>) -> Result<FileMetadata> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|error| {
            if error.kind() == io::ErrorKind::NotFound {
                JsmetaError::InputNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                JsmetaError::Io {
                    path: path.to_path_buf(),
                    error,
                }
            }
        })?;
        self.extract_from_source(path, &source)
    }

    /// Parse an in-memory source string and extract its metadata.
    pub fn extract_from_source(&self, path: impl AsRef<Path>, source: &str) -> Result<FileMetadata> {
        let path = path.as_ref();
        let allocator = Allocator::default();
        let options = ParseOptions::from_path(path).allow_errors(self.options.allow_parse_errors);
        let parsed = parse(&allocator, source, options, path)?;

        for diagnostic in &parsed.diagnostics {
            warn!(path = %path.display(), "continuing past parse error: {diagnostic}");
        }

        self.extract(path, parsed.ast(), parsed.source_text)
    }

    /// Walk an already parsed program once and collect its structural metadata.
    ///
    /// `source_text` is only used to turn spans into line/column positions for
    /// error reports.
    pub fn extract(
        &self,
        path: &Path,
        program: &Program<'_>,
        source_text: &str,
    ) -> Result<FileMetadata> {
        let mut walker = MetadataWalker {
            path,
            line_index: LineIndex::new(source_text),
            metadata: FileMetadata::default(),
        };
        walker.visit_statements(&program.body, Parent::Program)?;

        let metadata = walker.metadata;
        debug!(
            path = %path.display(),
            imports = metadata.imports.len(),
            exports = metadata.exports.len(),
            classes = metadata.classes.len(),
            functions = metadata.functions.len(),
            "extracted metadata"
        );
        Ok(metadata)
    }
}

/// Syntactic parent of the statement being visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parent {
    Program,
    ExportNamed,
    Nested,
}

struct MetadataWalker<'p, 's> {
    path: &'p Path,
    line_index: LineIndex<'s>,
    metadata: FileMetadata,
}

impl MetadataWalker<'_, '_> {
    fn visit_statements(&mut self, statements: &[Statement<'_>], parent: Parent) -> Result<()> {
        for statement in statements {
            self.visit_statement(statement, parent)?;
        }
        Ok(())
    }

    fn visit_statement(&mut self, statement: &Statement<'_>, parent: Parent) -> Result<()> {
        match statement {
            Statement::ImportDeclaration(import) => self.record_import(import),
            Statement::ExportDefaultDeclaration(export) => self.record_export_default(export)?,
            Statement::ExportNamedDeclaration(export) => self.record_export_named(export)?,
            Statement::ClassDeclaration(class) => self.record_class(class)?,
            Statement::FunctionDeclaration(function) => self.record_function(function, parent)?,

            // Block-like statements may hold class declarations. Function
            // bodies are never entered.
            Statement::BlockStatement(block) => self.visit_statements(&block.body, Parent::Nested)?,
            Statement::IfStatement(stmt) => {
                self.visit_statement(&stmt.consequent, Parent::Nested)?;
                if let Some(alternate) = &stmt.alternate {
                    self.visit_statement(alternate, Parent::Nested)?;
                }
            }
            Statement::LabeledStatement(stmt) => self.visit_statement(&stmt.body, Parent::Nested)?,
            Statement::ForStatement(stmt) => self.visit_statement(&stmt.body, Parent::Nested)?,
            Statement::ForInStatement(stmt) => self.visit_statement(&stmt.body, Parent::Nested)?,
            Statement::ForOfStatement(stmt) => self.visit_statement(&stmt.body, Parent::Nested)?,
            Statement::WhileStatement(stmt) => self.visit_statement(&stmt.body, Parent::Nested)?,
            Statement::DoWhileStatement(stmt) => {
                self.visit_statement(&stmt.body, Parent::Nested)?
            }
            Statement::TryStatement(stmt) => {
                self.visit_statements(&stmt.block.body, Parent::Nested)?;
                if let Some(handler) = &stmt.handler {
                    self.visit_statements(&handler.body.body, Parent::Nested)?;
                }
                if let Some(finalizer) = &stmt.finalizer {
                    self.visit_statements(&finalizer.body, Parent::Nested)?;
                }
            }
            Statement::SwitchStatement(stmt) => {
                for case in &stmt.cases {
                    self.visit_statements(&case.consequent, Parent::Nested)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn record_import(&mut self, import: &ImportDeclaration<'_>) {
        let mut record = ImportRecord::new(import.source.value.to_string());
        if let Some(specifiers) = &import.specifiers {
            record
                .specifiers
                .extend(specifiers.iter().filter_map(import_specifier));
        }
        debug!(source = %record.source, specifiers = record.specifiers.len(), "import");
        if let Some(apex) = record.apex_target() {
            debug!(class = apex.class_name, method = ?apex.method_name, "apex import");
        }
        self.metadata.imports.push(record);
    }

    fn record_export_default(&mut self, export: &ExportDefaultDeclaration<'_>) -> Result<()> {
        let name = match &export.declaration {
            ExportDefaultDeclarationKind::FunctionDeclaration(function) => {
                function.id.as_ref().map(|id| id.name.to_string())
            }
            ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                class.id.as_ref().map(|id| id.name.to_string())
            }
            ExportDefaultDeclarationKind::TSInterfaceDeclaration(interface) => {
                Some(interface.id.name.to_string())
            }
            _ => None,
        }
        .unwrap_or_else(|| ANONYMOUS.to_string());

        self.push_export(ExportKind::Default, name);

        // A default-exported function has the export as its parent and is not
        // a top-level function; a default-exported class is still a class.
        if let ExportDefaultDeclarationKind::ClassDeclaration(class) = &export.declaration {
            self.record_class(class)?;
        }
        Ok(())
    }

    fn record_export_named(&mut self, export: &ExportNamedDeclaration<'_>) -> Result<()> {
        let Some(declaration) = &export.declaration else {
            return Ok(());
        };

        match declaration {
            Declaration::ClassDeclaration(class) => {
                let name = self.require_name(
                    class.id.as_ref(),
                    ConstructKind::ExportNamedDeclaration,
                    export.span,
                    "exported class has no identifier",
                )?;
                self.push_export(ExportKind::Class, name);
                self.record_class(class)?;
            }
            Declaration::FunctionDeclaration(function) if function.body.is_some() => {
                let name = self.require_name(
                    function.id.as_ref(),
                    ConstructKind::ExportNamedDeclaration,
                    export.span,
                    "exported function has no identifier",
                )?;
                self.push_export(ExportKind::Function, name);
                self.record_function(function, Parent::ExportNamed)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn push_export(&mut self, kind: ExportKind, name: String) {
        debug!(kind = kind.as_str(), name = %name, "export");
        self.metadata.exports.push(ExportRecord::new(kind, name));
    }

    fn record_class(&mut self, class: &Class<'_>) -> Result<()> {
        let name = self.require_name(
            class.id.as_ref(),
            ConstructKind::ClassDeclaration,
            class.span,
            "class declaration has no identifier",
        )?;

        let mut record = ClassRecord::new(name);
        if let Some(Expression::Identifier(super_class)) = &class.super_class {
            record.super_class = Some(super_class.name.to_string());
        }

        for element in &class.body.body {
            match element {
                ClassElement::MethodDefinition(method) => {
                    if let Some(method) = method_record(method) {
                        record.methods.push(method);
                    }
                }
                ClassElement::PropertyDefinition(property) => {
                    if let Some(property) = property_record(property) {
                        record.properties.push(property);
                    }
                }
                _ => {}
            }
        }

        debug!(
            name = %record.name,
            methods = record.methods.len(),
            properties = record.properties.len(),
            "class"
        );
        self.metadata.classes.push(record);
        Ok(())
    }

    fn record_function(&mut self, function: &Function<'_>, parent: Parent) -> Result<()> {
        if parent == Parent::Nested || function.body.is_none() {
            return Ok(());
        }

        let name = self.require_name(
            function.id.as_ref(),
            ConstructKind::FunctionDeclaration,
            function.span,
            "function declaration has no identifier",
        )?;
        debug!(name = %name, "function");
        self.metadata.functions.push(FunctionRecord {
            name,
            is_async: function.r#async,
            parameters: parameter_names(&function.params),
        });
        Ok(())
    }

    fn require_name(
        &self,
        id: Option<&BindingIdentifier<'_>>,
        kind: ConstructKind,
        span: Span,
        reason: &str,
    ) -> Result<String> {
        match id {
            Some(id) => Ok(id.name.to_string()),
            None => {
                let location = self.line_index.location(span.start);
                Err(JsmetaError::Extraction {
                    kind,
                    path: self.path.to_path_buf(),
                    line: location.line,
                    column: location.column,
                    reason: reason.to_string(),
                })
            }
        }
    }
}

fn import_specifier(specifier: &ImportDeclarationSpecifier<'_>) -> Option<Specifier> {
    match specifier {
        ImportDeclarationSpecifier::ImportDefaultSpecifier(default_spec) => {
            Some(Specifier::default_import(default_spec.local.name.to_string()))
        }
        ImportDeclarationSpecifier::ImportSpecifier(named_spec) => {
            let imported = match &named_spec.imported {
                ModuleExportName::IdentifierName(ident) => ident.name.to_string(),
                ModuleExportName::IdentifierReference(ident) => ident.name.to_string(),
                ModuleExportName::StringLiteral(lit) => lit.value.to_string(),
            };
            Some(Specifier::named(imported, named_spec.local.name.to_string()))
        }
        ImportDeclarationSpecifier::ImportNamespaceSpecifier(_) => None,
    }
}

fn method_record(method: &MethodDefinition<'_>) -> Option<MethodRecord> {
    // Private methods and bodiless signatures are separate member kinds.
    if matches!(method.key, PropertyKey::PrivateIdentifier(_)) || method.value.body.is_none() {
        return None;
    }

    let kind = match method.kind {
        MethodDefinitionKind::Constructor => MethodKind::Constructor,
        MethodDefinitionKind::Method => MethodKind::Method,
        MethodDefinitionKind::Get => MethodKind::Get,
        MethodDefinitionKind::Set => MethodKind::Set,
    };

    Some(MethodRecord {
        name: member_name(&method.key, method.computed),
        kind,
        is_async: method.value.r#async,
        is_static: method.r#static,
        parameters: parameter_names(&method.value.params),
    })
}

fn property_record(property: &PropertyDefinition<'_>) -> Option<PropertyRecord> {
    if matches!(property.key, PropertyKey::PrivateIdentifier(_)) {
        return None;
    }
    Some(PropertyRecord {
        name: member_name(&property.key, property.computed),
        is_static: property.r#static,
    })
}

fn member_name(key: &PropertyKey<'_>, computed: bool) -> String {
    if computed {
        return COMPUTED_KEY.to_string();
    }
    match key {
        PropertyKey::StaticIdentifier(ident) => ident.name.to_string(),
        PropertyKey::StringLiteral(lit) => lit.value.to_string(),
        PropertyKey::NumericLiteral(lit) => lit.value.to_string(),
        _ => COMPUTED_KEY.to_string(),
    }
}

/// Parameter names, falling back to the pattern's node type when the
/// parameter is not a plain identifier. Patterns are not decomposed.
fn parameter_names(params: &FormalParameters<'_>) -> Vec<String> {
    let mut names: Vec<String> = params.items.iter().map(parameter_name).collect();
    if params.rest.is_some() {
        names.push("RestElement".to_string());
    }
    names
}

fn parameter_name(param: &FormalParameter<'_>) -> String {
    if param.accessibility.is_some() || param.readonly || param.r#override {
        return "TSParameterProperty".to_string();
    }
    match &param.pattern.kind {
        BindingPatternKind::BindingIdentifier(ident) => ident.name.to_string(),
        BindingPatternKind::ObjectPattern(_) => "ObjectPattern".to_string(),
        BindingPatternKind::ArrayPattern(_) => "ArrayPattern".to_string(),
        BindingPatternKind::AssignmentPattern(_) => "AssignmentPattern".to_string(),
    }
}

#[derive(Debug)]
struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<u32>,
}

impl<'a> LineIndex<'a> {
    fn new(source: &'a str) -> Self {
        let mut line_starts = Vec::with_capacity(128);
        line_starts.push(0);
        for (idx, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push((idx + 1) as u32);
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    /// One-based line and column (in characters) of a byte offset.
    fn location(&self, offset: u32) -> SourceLocation {
        let idx = match self.line_starts.binary_search(&offset) {
            Ok(index) => index,
            Err(index) => index.saturating_sub(1),
        };
        let line_start = self.line_starts[idx] as usize;
        let end = (offset as usize).min(self.source.len());
        let column = self
            .source
            .get(line_start..end)
            .map_or(0, |prefix| prefix.chars().count());
        SourceLocation::new(idx as u32 + 1, column as u32 + 1)
    }
}
