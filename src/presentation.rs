// src/presentation.rs
use std::io::{self, Write};

use code_counter_core::{LanguageTable, OutputShape, Rendered};

/// 整形済みの結果を順に書き出す
pub struct Printer<'w> {
    out: &'w mut dyn Write,
    shape: OutputShape,
    delimiter: String,
    printed: usize,
}

impl<'w> Printer<'w> {
    pub fn new(out: &'w mut dyn Write, shape: OutputShape, delimiter: &str) -> Self {
        Self { out, shape, delimiter: delimiter.to_string(), printed: 0 }
    }

    pub fn print(&mut self, rendered: &Rendered, label: Option<&str>) -> io::Result<()> {
        match rendered {
            Rendered::Mapping(result) => {
                if self.printed > 0 {
                    writeln!(self.out)?;
                }
                if let Some(label) = label {
                    writeln!(self.out, "==> {label} <==")?;
                }
                writeln!(self.out, "{result}")?;
            }
            Rendered::Rows(rows) => {
                // ヘッダは最初の1回だけ
                if self.printed == 0 {
                    writeln!(self.out, "{}", rows.header.join(&self.delimiter))?;
                }
                let values: Vec<String> = rows.values.iter().map(ToString::to_string).collect();
                writeln!(self.out, "{}", values.join(&self.delimiter))?;
            }
            Rendered::Text(text) => {
                if matches!(self.shape, OutputShape::Yaml) && self.printed > 0 {
                    writeln!(self.out, "---")?;
                }
                writeln!(self.out, "{}", text.trim_end())?;
            }
        }
        self.printed += 1;
        Ok(())
    }

    pub fn print_languages(&mut self, table: &LanguageTable) -> io::Result<()> {
        writeln!(self.out, "{:<12}{:<8}{:<8}{:<8}BLOCK", "NAME", "ALIAS", "SUFFIX", "INLINE")?;
        for language in table {
            let blocks: Vec<String> = language
                .block_markers
                .iter()
                .map(|marker| format!("{} {}", marker.start, marker.end))
                .collect();
            writeln!(
                self.out,
                "{:<12}{:<8}{:<8}{:<8}{}",
                language.name,
                language.alias,
                language.suffix,
                language.inline_marker,
                blocks.join(", ")
            )?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
