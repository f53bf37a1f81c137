use serde::Serialize;
use std::io::Write;
use std::str::FromStr;
use tabled::{Table, Tabled, settings::Style};

/// Output formats accepted by `--output`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable table (flag omitted or empty)
    #[default]
    Table,
    Json,
    /// `yaml` or `yml`
    Yaml,
}

/// Raised for any `--output` value outside the recognized set
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid output format '{0}', valid options are: json, yaml, yml")]
pub struct InvalidOutputFormat(pub String);

impl FromStr for OutputFormat {
    type Err = InvalidOutputFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(InvalidOutputFormat(other.to_string())),
        }
    }
}

/// Errors raised while writing rendered output
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    #[error("failed to serialize JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize YAML output: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Write `data` as indented JSON
pub fn dump_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    data: &T,
) -> Result<(), OutputError> {
    serde_json::to_writer_pretty(&mut *out, data)?;
    writeln!(out)?;
    Ok(())
}

/// Write `data` as YAML
pub fn dump_yaml<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    data: &T,
) -> Result<(), OutputError> {
    let content = serde_yaml::to_string(data)?;
    out.write_all(content.as_bytes())?;
    Ok(())
}

/// Write rows as a borderless table with one header line
pub fn dump_table<W: Write, R: Tabled>(
    out: &mut W,
    rows: &[R],
) -> Result<(), OutputError> {
    let mut table = Table::new(rows);
    table.with(Style::blank());
    writeln!(out, "{table}")?;
    Ok(())
}
