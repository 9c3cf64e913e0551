use serde::{Deserialize, Serialize};

/// Placeholder used when a default export has no identifier.
pub const ANONYMOUS: &str = "anonymous";

/// Module prefix of Salesforce Apex method imports.
pub const APEX_IMPORT_PREFIX: &str = "@salesforce/apex/";

/// Placeholder used for computed member keys.
pub const COMPUTED_KEY: &str = "[computed]";

/// Structural summary of a single source file.
///
/// Every sequence keeps source declaration order so that rendered documents
/// are stable across runs on unchanged input.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub imports: Vec<ImportRecord>,
    pub exports: Vec<ExportRecord>,
    pub classes: Vec<ClassRecord>,
    pub functions: Vec<FunctionRecord>,
}

impl FileMetadata {
    /// Returns `true` when none of the recognized constructs were found.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
            && self.exports.is_empty()
            && self.classes.is_empty()
            && self.functions.is_empty()
    }
}

/// One `import` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    /// Module specifier string (`"./foo"`).
    pub source: String,
    pub specifiers: Vec<Specifier>,
}

impl ImportRecord {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            specifiers: Vec::new(),
        }
    }

    /// Apex class and method behind an `@salesforce/apex/Class.method` import.
    ///
    /// `None` for every other module, including a bare `@salesforce/apex/`.
    pub fn apex_target(&self) -> Option<ApexTarget<'_>> {
        let path = self.source.strip_prefix(APEX_IMPORT_PREFIX)?;
        let mut parts = path.split('.');
        let class_name = parts.next().filter(|name| !name.is_empty())?;
        Some(ApexTarget {
            class_name,
            method_name: parts.next().filter(|name| !name.is_empty()),
        })
    }
}

/// Server-side target of an Apex import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApexTarget<'a> {
    pub class_name: &'a str,
    pub method_name: Option<&'a str>,
}

/// A binding introduced by an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Specifier {
    /// `import local from "..."`
    Default { local: String },
    /// `import { imported as local } from "..."`
    Named { imported: String, local: String },
}

impl Specifier {
    pub fn default_import(local: impl Into<String>) -> Self {
        Self::Default {
            local: local.into(),
        }
    }

    pub fn named(imported: impl Into<String>, local: impl Into<String>) -> Self {
        Self::Named {
            imported: imported.into(),
            local: local.into(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Default { .. } => "default",
            Self::Named { .. } => "named",
        }
    }

    /// Imported binding name. Default specifiers report their local name.
    pub fn imported(&self) -> &str {
        match self {
            Self::Default { local } => local,
            Self::Named { imported, .. } => imported,
        }
    }

    pub fn local(&self) -> &str {
        match self {
            Self::Default { local } | Self::Named { local, .. } => local,
        }
    }
}

/// One exported binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    #[serde(rename = "type")]
    pub kind: ExportKind,
    pub name: String,
}

impl ExportRecord {
    pub fn new(kind: ExportKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Default,
    Class,
    Function,
}

impl ExportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Class => "class",
            Self::Function => "function",
        }
    }
}

/// A declared class and its direct members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    pub name: String,
    /// Superclass identifier, when the `extends` clause is a plain identifier.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub super_class: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub properties: Vec<PropertyRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub methods: Vec<MethodRecord>,
}

impl ClassRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            super_class: None,
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub name: String,
    #[serde(rename = "static")]
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRecord {
    pub name: String,
    pub kind: MethodKind,
    #[serde(rename = "async")]
    pub is_async: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parameters: Vec<String>,
}

/// Declared kind of a class method, copied verbatim from the member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

impl MethodKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Constructor => "constructor",
            Self::Method => "method",
            Self::Get => "get",
            Self::Set => "set",
        }
    }
}

/// A top-level function declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    #[serde(rename = "async")]
    pub is_async: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parameters: Vec<String>,
}

/// One-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_specifier_reports_local_as_imported() {
        let spec = Specifier::default_import("React");
        assert_eq!(spec.type_name(), "default");
        assert_eq!(spec.imported(), "React");
        assert_eq!(spec.local(), "React");
    }

    #[test]
    fn empty_metadata() {
        assert!(FileMetadata::default().is_empty());

        let mut metadata = FileMetadata::default();
        metadata.imports.push(ImportRecord::new("lwc"));
        assert!(!metadata.is_empty());
    }

    #[test]
    fn specifier_serializes_with_type_tag() {
        let value = serde_json::to_value(Specifier::named("useFoo", "foo")).unwrap();
        assert_eq!(value["type"], "named");
        assert_eq!(value["imported"], "useFoo");
        assert_eq!(value["local"], "foo");
    }

    #[test]
    fn apex_imports_name_class_and_method() {
        let import = ImportRecord::new("@salesforce/apex/PropertyController.getPagedPropertyList");
        assert_eq!(
            import.apex_target(),
            Some(ApexTarget {
                class_name: "PropertyController",
                method_name: Some("getPagedPropertyList"),
            })
        );

        let import = ImportRecord::new("@salesforce/apex/PropertyController");
        let target = import.apex_target().unwrap();
        assert_eq!(target.class_name, "PropertyController");
        assert_eq!(target.method_name, None);

        assert_eq!(ImportRecord::new("lwc").apex_target(), None);
        assert_eq!(ImportRecord::new("@salesforce/apex/").apex_target(), None);
        assert_eq!(ImportRecord::new("@salesforce/label/c.greeting").apex_target(), None);
    }
}
