use std::fs;
use std::io::Write;
use std::path::Path;

use mdsite::{extract_title, markdown_to_html_node};

use crate::error::GenerateError;

pub const TITLE_SLOT: &str = "{{ Title }}";
pub const CONTENT_SLOT: &str = "{{ Content }}";

/// Splice a page title and rendered body into the template, then point
/// root-relative links and asset paths at the base path.
pub fn fill_template(template: &str, title: &str, content: &str, basepath: &str) -> String {
    template
        .replace(TITLE_SLOT, title)
        .replace(CONTENT_SLOT, content)
        .replace("href=\"/", &format!("href=\"{}", basepath))
        .replace("src=\"/", &format!("src=\"{}", basepath))
}

/// Generate one page: read the Markdown source, convert it, fill the
/// template, and write the result (creating parent directories).
pub fn generate_page(
    from: &Path,
    template: &str,
    dest: &Path,
    basepath: &str,
    log: &mut dyn Write,
) -> Result<(), GenerateError> {
    let markdown = fs::read_to_string(from).map_err(|e| GenerateError::io(from, e))?;

    let convert = |error| GenerateError::Convert {
        path: from.to_path_buf(),
        error,
    };
    let title = extract_title(&markdown).map_err(convert)?;
    let body = markdown_to_html_node(&markdown).map_err(convert)?.to_html();

    let html = fill_template(template, &title, &body, basepath);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| GenerateError::io(parent, e))?;
    }
    fs::write(dest, html).map_err(|e| GenerateError::io(dest, e))?;
    let _ = writeln!(log, "page {} -> {}", from.display(), dest.display());
    Ok(())
}
