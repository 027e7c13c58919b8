use crate::application::checkout::ViewState;
use serde::Serialize;
use std::io::{self, Write};

pub const PAY_TITLE: &str = "/payments/wompi";
pub const REFRESH_TITLE: &str = "/transactions/:id/refresh";

/// Renders checkout results as titled, pretty-printed JSON blocks.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes whichever results the view state holds; writes nothing otherwise.
    pub fn write_results(&mut self, state: &ViewState) -> io::Result<()> {
        if let Some(pay) = &state.pay_result {
            self.write_block(PAY_TITLE, pay)?;
        }
        if let Some(refresh) = &state.refresh_result {
            self.write_block(REFRESH_TITLE, refresh)?;
        }
        self.writer.flush()
    }

    fn write_block<T: Serialize>(&mut self, title: &str, value: &T) -> io::Result<()> {
        writeln!(self.writer, "{title}")?;
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)
    }
}
