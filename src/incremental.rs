// WHY: Output file naming and existence checks so batch runs can skip finished inputs

use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Suffix appended to the source file stem for processed output
pub const OUTPUT_SUFFIX: &str = "_stripped";

/// Generate output file path from source file path
pub fn generate_output_path(source_path: &Path) -> PathBuf {
    let mut output_path = source_path.to_path_buf();
    let file_stem = output_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    output_path.set_file_name(format!("{file_stem}{OUTPUT_SUFFIX}.txt"));
    output_path
}

/// True for files this tool wrote itself; discovery must not pick them up again
pub fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}

/// Check if output file exists for given source file
pub fn output_exists<P: AsRef<Path>>(source_path: P) -> bool {
    generate_output_path(source_path.as_ref()).exists()
}

/// Write processed text next to its source, always ending with a newline
pub async fn write_output_file<P: AsRef<Path>>(source_path: P, content: &str) -> Result<PathBuf, io::Error> {
    let output_path = generate_output_path(source_path.as_ref());
    let content_with_newline = if content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{content}\n")
    };
    fs::write(&output_path, content_with_newline).await?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_output_path() {
        let path = generate_output_path(Path::new("/books/lorem.txt"));
        assert_eq!(path, PathBuf::from("/books/lorem_stripped.txt"));
    }

    #[test]
    fn test_is_generated_output() {
        assert!(is_generated_output(Path::new("lorem_stripped.txt")));
        assert!(!is_generated_output(Path::new("lorem.txt")));
        assert!(!is_generated_output(Path::new("stripped/lorem.txt")));
    }

    #[tokio::test]
    async fn test_write_output_appends_newline() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("book.txt");

        assert!(!output_exists(&source));

        let written = write_output_file(&source, "The.").await.unwrap();
        assert_eq!(written, temp_dir.path().join("book_stripped.txt"));
        assert!(output_exists(&source));
        assert_eq!(std::fs::read_to_string(&written).unwrap(), "The.\n");
    }
}
