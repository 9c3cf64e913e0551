use std::borrow::Cow;
use std::fmt::Write;

use crate::model::{ClassRecord, FileMetadata, FunctionRecord, ImportRecord, MethodRecord};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Render metadata as the `SourceFile` XML document.
///
/// Sections and collections with no entries are omitted entirely, never
/// written as empty wrappers. Output is byte-identical for equal inputs.
pub fn render_xml(metadata: &FileMetadata, file_label: &str) -> String {
    let mut out = String::with_capacity(256);
    let _ = writeln!(out, "{XML_DECLARATION}");
    let _ = writeln!(out, r#"<SourceFile name="{}">"#, escape_xml(file_label));

    if !metadata.imports.is_empty() {
        out.push_str("  <Imports>\n");
        for import in &metadata.imports {
            render_import(&mut out, import);
        }
        out.push_str("  </Imports>\n");
    }

    if !metadata.exports.is_empty() {
        out.push_str("  <Exports>\n");
        for export in &metadata.exports {
            let _ = writeln!(
                out,
                r#"    <Export type="{}" name="{}" />"#,
                export.kind.as_str(),
                escape_xml(&export.name)
            );
        }
        out.push_str("  </Exports>\n");
    }

    if !metadata.classes.is_empty() {
        out.push_str("  <Classes>\n");
        for class in &metadata.classes {
            render_class(&mut out, class);
        }
        out.push_str("  </Classes>\n");
    }

    if !metadata.functions.is_empty() {
        out.push_str("  <Functions>\n");
        for function in &metadata.functions {
            render_function(&mut out, function);
        }
        out.push_str("  </Functions>\n");
    }

    out.push_str("</SourceFile>\n");
    out
}

fn render_import(out: &mut String, import: &ImportRecord) {
    let _ = writeln!(out, r#"    <Import source="{}">"#, escape_xml(&import.source));
    for specifier in &import.specifiers {
        let _ = writeln!(
            out,
            r#"      <Specifier type="{}" imported="{}" local="{}" />"#,
            specifier.type_name(),
            escape_xml(specifier.imported()),
            escape_xml(specifier.local())
        );
    }
    out.push_str("    </Import>\n");
}

fn render_class(out: &mut String, class: &ClassRecord) {
    let _ = write!(out, r#"    <Class name="{}""#, escape_xml(&class.name));
    if let Some(super_class) = &class.super_class {
        let _ = write!(out, r#" superClass="{}""#, escape_xml(super_class));
    }
    out.push_str(">\n");

    if !class.properties.is_empty() {
        out.push_str("      <Properties>\n");
        for property in &class.properties {
            let _ = writeln!(
                out,
                r#"        <Property name="{}" static="{}" />"#,
                escape_xml(&property.name),
                property.is_static
            );
        }
        out.push_str("      </Properties>\n");
    }

    if !class.methods.is_empty() {
        out.push_str("      <Methods>\n");
        for method in &class.methods {
            render_method(out, method);
        }
        out.push_str("      </Methods>\n");
    }

    out.push_str("    </Class>\n");
}

fn render_method(out: &mut String, method: &MethodRecord) {
    let _ = writeln!(
        out,
        r#"        <Method name="{}" kind="{}" async="{}" static="{}">"#,
        escape_xml(&method.name),
        method.kind.as_str(),
        method.is_async,
        method.is_static
    );
    render_parameters(out, &method.parameters, 10);
    out.push_str("        </Method>\n");
}

fn render_function(out: &mut String, function: &FunctionRecord) {
    let _ = writeln!(
        out,
        r#"    <Function name="{}" async="{}">"#,
        escape_xml(&function.name),
        function.is_async
    );
    render_parameters(out, &function.parameters, 6);
    out.push_str("    </Function>\n");
}

fn render_parameters(out: &mut String, parameters: &[String], indent: usize) {
    if parameters.is_empty() {
        return;
    }
    let _ = writeln!(out, "{:indent$}<Parameters>", "");
    for parameter in parameters {
        let _ = writeln!(
            out,
            r#"{:width$}<Parameter name="{}" />"#,
            "",
            escape_xml(parameter),
            width = indent + 2
        );
    }
    let _ = writeln!(out, "{:indent$}</Parameters>", "");
}

/// Escape the five XML metacharacters for use inside an attribute value.
///
/// Every `&` is escaped, so input that already contains entities is escaped
/// once more rather than passed through.
pub fn escape_xml(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExportKind, ExportRecord, MethodKind, PropertyRecord, Specifier};

    #[test]
    fn escapes_all_metacharacters() {
        assert_eq!(escape_xml(r#"A&"B"#), "A&amp;&quot;B");
        assert_eq!(escape_xml("<a href='x'>"), "&lt;a href=&apos;x&apos;&gt;");
        assert!(matches!(escape_xml("plain"), Cow::Borrowed("plain")));
        assert_eq!(escape_xml(""), "");
    }

    #[test]
    fn empty_model_has_no_sections() {
        let xml = render_xml(&FileMetadata::default(), "empty.ext");
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <SourceFile name=\"empty.ext\">\n\
             </SourceFile>\n"
        );
    }

    #[test]
    fn file_label_is_escaped() {
        let xml = render_xml(&FileMetadata::default(), "a&b.js");
        assert!(xml.contains(r#"<SourceFile name="a&amp;b.js">"#));
    }

    #[test]
    fn renders_full_document() {
        let mut metadata = FileMetadata::default();

        let mut import = ImportRecord::new("lwc");
        import
            .specifiers
            .push(Specifier::named("LightningElement", "LightningElement"));
        import.specifiers.push(Specifier::named("api", "api"));
        metadata.imports.push(import);
        let mut import =
            ImportRecord::new("@salesforce/apex/PropertyController.getPagedPropertyList");
        import.specifiers.push(Specifier::default_import("getPagedPropertyList"));
        metadata.imports.push(import);

        metadata
            .exports
            .push(ExportRecord::new(ExportKind::Default, "PropertyTile"));

        let mut class = ClassRecord::new("PropertyTile");
        class.super_class = Some("LightningElement".to_string());
        class.properties.push(PropertyRecord {
            name: "property".to_string(),
            is_static: false,
        });
        class.methods.push(MethodRecord {
            name: "handleClick".to_string(),
            kind: MethodKind::Method,
            is_async: false,
            is_static: false,
            parameters: vec!["event".to_string()],
        });
        class.methods.push(MethodRecord {
            name: "connectedCallback".to_string(),
            kind: MethodKind::Method,
            is_async: true,
            is_static: false,
            parameters: Vec::new(),
        });
        metadata.classes.push(class);

        metadata.functions.push(FunctionRecord {
            name: "format".to_string(),
            is_async: false,
            parameters: vec!["value".to_string(), "ObjectPattern".to_string()],
        });

        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<SourceFile name="propertyTile.js">
  <Imports>
    <Import source="lwc">
      <Specifier type="named" imported="LightningElement" local="LightningElement" />
      <Specifier type="named" imported="api" local="api" />
    </Import>
    <Import source="@salesforce/apex/PropertyController.getPagedPropertyList">
      <Specifier type="default" imported="getPagedPropertyList" local="getPagedPropertyList" />
    </Import>
  </Imports>
  <Exports>
    <Export type="default" name="PropertyTile" />
  </Exports>
  <Classes>
    <Class name="PropertyTile" superClass="LightningElement">
      <Properties>
        <Property name="property" static="false" />
      </Properties>
      <Methods>
        <Method name="handleClick" kind="method" async="false" static="false">
          <Parameters>
            <Parameter name="event" />
          </Parameters>
        </Method>
        <Method name="connectedCallback" kind="method" async="true" static="false">
        </Method>
      </Methods>
    </Class>
  </Classes>
  <Functions>
    <Function name="format" async="false">
      <Parameters>
        <Parameter name="value" />
        <Parameter name="ObjectPattern" />
      </Parameters>
    </Function>
  </Functions>
</SourceFile>
"#;
        assert_eq!(render_xml(&metadata, "propertyTile.js"), expected);
    }

    #[test]
    fn import_without_specifiers_keeps_wrapper() {
        let mut metadata = FileMetadata::default();
        metadata.imports.push(ImportRecord::new("./styles.css"));
        let xml = render_xml(&metadata, "side-effect.js");
        assert!(xml.contains("    <Import source=\"./styles.css\">\n    </Import>\n"));
    }
}
