use super::{patterns, ScanEvent, UniformDecl, UniformStructDecl};
use crate::error::{Result, ScanError};
use crate::report::Reporter;
use std::path::Path;

/// Line-oriented uniform scanner.
///
/// Owns the loaded source lines and a cursor that only moves forward. Two
/// states: scanning top-level lines, or accumulating a struct body after a
/// `uniform struct` header until the terminating `}...;` line.
pub struct UniformScanner {
    lines: Vec<String>,
    cursor: usize,
}

impl UniformScanner {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines, cursor: 0 }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let lines = super::load_lines(path)?;
        log::debug!("loaded {} lines from {}", lines.len(), path.display());
        Ok(Self::new(lines))
    }

    /// Walk the source once, emitting events in discovery order.
    pub fn scan(&mut self, reporter: &mut dyn Reporter) -> Result<()> {
        while self.cursor < self.lines.len() {
            let line = &self.lines[self.cursor];

            if let Some(type_name) = patterns::struct_start(line) {
                let type_name = type_name.to_string();
                let header_line = self.cursor;
                log::debug!("struct `{}` opens at line {}", type_name, header_line + 1);

                reporter
                    .emit(&ScanEvent::StructStart {
                        type_name: type_name.clone(),
                    })
                    .map_err(ScanError::Report)?;

                self.cursor += 1;
                let decl = self.consume_struct_body(type_name, header_line)?;
                reporter
                    .emit(&ScanEvent::StructEnd(decl))
                    .map_err(ScanError::Report)?;
                continue;
            }

            if let Some(name) = patterns::plain_uniform(line) {
                log::debug!("uniform `{}` at line {}", name, self.cursor + 1);
                reporter
                    .emit(&ScanEvent::Uniform(UniformDecl {
                        name: name.to_string(),
                    }))
                    .map_err(ScanError::Report)?;
            } else {
                log::trace!("skipping line {}: {:?}", self.cursor + 1, line);
            }

            self.cursor += 1;
        }

        Ok(())
    }

    /// Accumulate member lines from the line after the struct header until a
    /// `}...;` terminator. The cursor ends up on the line after the
    /// terminator; running out of input first is a malformed-input error.
    fn consume_struct_body(
        &mut self,
        type_name: String,
        header_line: usize,
    ) -> Result<UniformStructDecl> {
        let mut members = Vec::new();

        while self.cursor < self.lines.len() {
            let line = &self.lines[self.cursor];

            if let Some(instance_name) = patterns::struct_end(line) {
                let instance_name = instance_name.to_string();
                self.cursor += 1;
                log::debug!(
                    "struct `{}` closes as `{}` with {} member line(s)",
                    type_name,
                    instance_name,
                    members.len()
                );
                return Ok(UniformStructDecl {
                    type_name,
                    instance_name,
                    members,
                });
            }

            members.push(line.clone());
            self.cursor += 1;
        }

        Err(ScanError::UnterminatedStruct {
            type_name,
            line: header_line + 1,
        })
    }
}
