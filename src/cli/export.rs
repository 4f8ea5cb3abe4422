//! Export command handler.

use std::io::Write;

use color_eyre::Result;

use crate::config::Config;
use crate::context::Context;
use crate::di::FromRef;
use crate::services::{ExportKind, ExportService};

use super::App;

impl App {
    /// Write an export of a freshly loaded store to stdout.
    pub async fn run_export(&self, kind: ExportKind, float_id: Option<&str>) -> Result<()> {
        let ctx = Context::bootstrap(Config::load()?).await?;
        let export = ExportService::from_ref(&ctx).export(kind, float_id).await;
        tracing::debug!(filename = %export.filename, "Writing export to stdout");

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(export.content.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
