use crate::domain::confirmation::ConfirmationResult;
use crate::error::Result;
use std::io::Write;

/// Writes a confirmation result as pretty-printed JSON.
pub struct ConfirmationWriter<W: Write> {
    sink: W,
}

impl<W: Write> ConfirmationWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write(mut self, confirmation: &ConfirmationResult) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.sink, confirmation)?;
        writeln!(self.sink)?;
        Ok(())
    }
}
