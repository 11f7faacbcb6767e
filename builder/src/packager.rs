//! ZIP packaging of generated projects

use std::io::{Cursor, Seek, Write};
use std::path::{Path, PathBuf};
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

use crate::error::{BuilderError, Result};
use crate::project::GeneratedProject;

const ARCHIVE_SUFFIX: &str = "_ntfly.zip";
const MAX_DEFLATE_LEVEL: i64 = 9;

/// Filesystem-safe archive name: anything outside ASCII alphanumerics and
/// the Arabic block becomes `_`.
pub fn archive_file_name(project_name: &str) -> String {
    let safe: String = project_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || ('\u{0600}'..='\u{06FF}').contains(&c) {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{safe}{ARCHIVE_SUFFIX}")
}

/// Write every project file into a deflated archive.
pub fn write_archive<W: Write + Seek>(project: &GeneratedProject, writer: W) -> Result<W> {
    let mut zip = ZipWriter::new(writer);

    let options: FileOptions<'_, ()> = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(MAX_DEFLATE_LEVEL))
        .unix_permissions(0o644);

    for (filename, content) in &project.files {
        zip.start_file(filename.as_str(), options)?;
        zip.write_all(content.as_bytes())
            .map_err(|e| BuilderError::Packaging(e.to_string()))?;
    }

    Ok(zip.finish()?)
}

/// Assemble the archive fully in memory.
pub fn build_archive(project: &GeneratedProject) -> Result<Vec<u8>> {
    let cursor = write_archive(project, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

/// Saves project archives into a download directory
pub struct ArchiveExporter {
    output_dir: PathBuf,
}

impl ArchiveExporter {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Build the archive and save it as `<safe name>_ntfly.zip`.
    ///
    /// The archive is assembled before anything touches the disk and lands
    /// through a rename, so a failure never leaves a partial file behind.
    pub fn export(&self, project: &GeneratedProject) -> Result<PathBuf> {
        let bytes = build_archive(project)?;
        let target = self.output_dir.join(archive_file_name(&project.description.name));

        persist(&self.output_dir, &target, &bytes)?;

        tracing::info!(
            id = %project.id,
            path = %target.display(),
            bytes = bytes.len(),
            "project archive exported"
        );
        Ok(target)
    }
}

fn persist(dir: &Path, target: &Path, bytes: &[u8]) -> Result<()> {
    let packaging = |e: std::io::Error| BuilderError::Packaging(e.to_string());

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(packaging)?;
    tmp.write_all(bytes).map_err(packaging)?;
    tmp.as_file().sync_all().map_err(packaging)?;
    tmp.persist(target)
        .map_err(|e| BuilderError::Packaging(e.error.to_string()))?;
    Ok(())
}
