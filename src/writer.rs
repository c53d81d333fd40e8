//! Conditional file writer
//!
//! Every output file goes through the same decision: if a file of that name
//! already exists at the destination, the write is skipped with an
//! informational notice (idempotent re-runs are expected and this is the
//! mechanism); otherwise the template is rendered and written. Plain assets
//! get the identical existence check, copied byte-for-byte.

use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::error::DockgenResult;
use crate::fs::FileSystem;
use crate::templates::TemplateSet;

/// What happened to each target file in one generation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    /// Files newly written, in write order
    pub written: Vec<PathBuf>,
    /// Files skipped because they already existed
    pub skipped: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn wrote(&self, target: &str) -> bool {
        self.written.iter().any(|p| p == Path::new(target))
    }

    pub fn skipped(&self, target: &str) -> bool {
        self.skipped.iter().any(|p| p == Path::new(target))
    }
}

/// Writes rendered templates and raw assets into one destination directory
pub struct ConditionalWriter<'a, F: FileSystem> {
    fs: &'a F,
    templates: &'a TemplateSet,
    dest: &'a Path,
    report: GenerationReport,
}

impl<'a, F: FileSystem> ConditionalWriter<'a, F> {
    pub fn new(fs: &'a F, templates: &'a TemplateSet, dest: &'a Path) -> Self {
        Self {
            fs,
            templates,
            dest,
            report: GenerationReport::default(),
        }
    }

    /// Render `template_id` with `context` and write it as `target`,
    /// unless `target` already exists at the destination.
    pub fn render(
        &mut self,
        target: &str,
        template_id: &str,
        context: &impl Serialize,
    ) -> DockgenResult<()> {
        if self.skip_existing(target) {
            return Ok(());
        }
        let content = self.templates.render(template_id, context)?;
        self.fs.write(&self.dest.join(target), &content)?;
        self.report.written.push(PathBuf::from(target));
        Ok(())
    }

    /// Copy the plain asset `asset_id` as `target`, with the same
    /// existence check.
    pub fn copy(&mut self, target: &str, asset_id: &str) -> DockgenResult<()> {
        if self.skip_existing(target) {
            return Ok(());
        }
        let content = self.templates.raw(asset_id)?;
        self.fs.write(&self.dest.join(target), content)?;
        self.report.written.push(PathBuf::from(target));
        Ok(())
    }

    pub fn into_report(self) -> GenerationReport {
        self.report
    }

    fn skip_existing(&mut self, target: &str) -> bool {
        if self.fs.exists(&self.dest.join(target)) {
            info!("{target} already exists, skipping.");
            self.report.skipped.push(PathBuf::from(target));
            true
        } else {
            false
        }
    }
}
