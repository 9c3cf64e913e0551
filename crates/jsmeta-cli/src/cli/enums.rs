use clap::ValueEnum;
use jsmeta::OutputFormat;

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// SourceFile XML document
    Xml,
    /// Pretty-printed JSON of the same model
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Xml => OutputFormat::Xml,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
