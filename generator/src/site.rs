use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use mdsite::ConvertError;

use crate::config::SiteConfig;
use crate::error::GenerateError;
use crate::files;
use crate::page;

/// One document that failed to convert during a build.
#[derive(Debug)]
pub struct PageFailure {
    pub path: PathBuf,
    /// Source text, kept so the caller can render a diagnostic.
    pub source: String,
    pub error: ConvertError,
}

/// What a build did.
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub pages: usize,
    pub assets: usize,
    pub failures: Vec<PageFailure>,
}

/// A configured site rooted at one directory.
pub struct Site {
    root: PathBuf,
    config: SiteConfig,
}

impl Site {
    pub fn new(root: impl Into<PathBuf>, config: SiteConfig) -> Self {
        Site {
            root: root.into(),
            config,
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.config.output)
    }

    /// Build the whole site: reset the output directory, copy static
    /// assets, generate one HTML page per Markdown source.
    ///
    /// A page that fails to convert is recorded in the summary and the
    /// build moves on to the next one; I/O failures abort.
    pub fn build(&self, log: &mut dyn Write) -> Result<BuildSummary, GenerateError> {
        let output = self.output_dir();
        files::reset_dir(&output)?;

        let mut summary = BuildSummary::default();

        let static_dir = self.root.join(&self.config.static_dir);
        if static_dir.is_dir() {
            summary.assets = files::copy_dir_recursive(&static_dir, &output, log)?;
        } else {
            let _ = writeln!(
                log,
                "no static directory at {}, skipping",
                static_dir.display()
            );
        }

        let template_path = self.root.join(&self.config.template);
        let template =
            fs::read_to_string(&template_path).map_err(|e| GenerateError::io(&template_path, e))?;

        let content_dir = self.root.join(&self.config.content);
        self.generate_dir(&content_dir, &output, &template, log, &mut summary)?;
        Ok(summary)
    }

    fn generate_dir(
        &self,
        content: &Path,
        dest: &Path,
        template: &str,
        log: &mut dyn Write,
        summary: &mut BuildSummary,
    ) -> Result<(), GenerateError> {
        let entries = fs::read_dir(content).map_err(|e| GenerateError::io(content, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| GenerateError::io(content, e))?;
            let from = entry.path();
            if from.is_dir() {
                let sub = dest.join(entry.file_name());
                self.generate_dir(&from, &sub, template, log, summary)?;
            } else if from.extension().is_some_and(|ext| ext == "md") {
                let to = dest.join(entry.file_name()).with_extension("html");
                match page::generate_page(&from, template, &to, &self.config.basepath, log) {
                    Ok(()) => summary.pages += 1,
                    Err(GenerateError::Convert { path, error }) => {
                        let source =
                            fs::read_to_string(&path).map_err(|e| GenerateError::io(&path, e))?;
                        summary.failures.push(PageFailure {
                            path,
                            source,
                            error,
                        });
                    }
                    Err(other) => return Err(other),
                }
            }
        }
        Ok(())
    }
}
