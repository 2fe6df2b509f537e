//! Generation orchestration: collect declarations, render, write.

use std::path::{Path, PathBuf};

use settgen_schema::collect_files;

use crate::{GeneratedFile, Result, files::SettingsClass};

/// Inputs for one generation run. Built fresh per invocation and discarded
/// once the artifact is written or the failure is reported.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Name of the generated class; also names the artifact
    /// (`{class_name}.generated.cs`).
    pub class_name: String,
    /// Namespace wrapping the generated class.
    pub namespace: String,
    /// Ordered list of `.setting` files to merge.
    pub setting_files: Vec<PathBuf>,
}

/// A rendered file for preview output.
#[derive(Debug)]
pub struct PreviewFile {
    pub file_name: String,
    pub content: String,
}

/// C# code generator producing one strongly-typed settings class.
pub struct Generator<'a> {
    request: &'a GenerationRequest,
}

impl<'a> Generator<'a> {
    pub fn new(request: &'a GenerationRequest) -> Self {
        Self { request }
    }

    /// Render the settings class without writing to disk.
    pub fn preview(&self) -> Result<PreviewFile> {
        let class = self.build_class()?;
        Ok(PreviewFile {
            file_name: class.file_name(),
            content: class.render(),
        })
    }

    /// Generate the settings class into `output_dir` and return the
    /// artifact path.
    ///
    /// All definition files are collected and validated before anything is
    /// written, so a failed run never leaves a partial artifact behind.
    pub fn generate(&self, output_dir: &Path) -> Result<PathBuf> {
        self.build_class()?.write(output_dir)
    }

    fn build_class(&self) -> Result<SettingsClass> {
        let declarations = collect_files(&self.request.setting_files)?;
        Ok(SettingsClass::new(
            &self.request.class_name,
            &self.request.namespace,
            declarations,
        ))
    }
}
