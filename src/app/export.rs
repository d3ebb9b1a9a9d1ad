//! Export handlers. A failed export is reported through the error notice
//! and changes nothing else.

use super::state::SessionStore;
use crate::pdf::{DocumentWriter, ExportResult, ExportSink, export_as_document, export_as_png};

impl SessionStore {
    pub fn export_pdf(
        &mut self,
        writer: &dyn DocumentWriter,
        sink: &mut dyn ExportSink,
    ) -> ExportResult<()> {
        export_as_document(self.surface.as_deref(), writer, sink)
            .inspect_err(|err| self.report(err))
    }

    pub fn export_png(&mut self, sink: &mut dyn ExportSink) -> ExportResult<()> {
        export_as_png(self.surface.as_deref(), sink).inspect_err(|err| self.report(err))
    }
}
