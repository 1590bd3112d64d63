// Writing the documents, and comparing them with a published version.

use log::{debug, warn};
use serde::Serialize;
use snafu::{ensure, ResultExt};
use text_diff::print_diff;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::convert::*;

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct WrittenDocument {
    pub path: PathBuf,
    pub size: u64,
}

pub fn ensure_output_dir(dir: &Path) -> ConvertResult<()> {
    fs::create_dir_all(dir).context(CreatingOutputDirSnafu {
        path: dir.display().to_string(),
    })
}

/// Indented JSON, with a final newline. Non-ASCII characters are written as-is.
pub fn render_document<T: Serialize>(name: &str, value: &T) -> ConvertResult<String> {
    let mut text = serde_json::to_string_pretty(value).context(SerializingJsonSnafu { name })?;
    text.push('\n');
    Ok(text)
}

/// Writes one document. The file is closed when this function returns.
pub fn write_document(dir: &Path, file_name: &str, text: &str) -> ConvertResult<WrittenDocument> {
    let path = dir.join(file_name);
    let path_s = path.display().to_string();
    {
        let file = File::create(&path).context(WritingOutputSnafu {
            path: path_s.clone(),
        })?;
        let mut writer = BufWriter::new(file);
        writer.write_all(text.as_bytes()).context(WritingOutputSnafu {
            path: path_s.clone(),
        })?;
        writer.flush().context(WritingOutputSnafu {
            path: path_s.clone(),
        })?;
    }
    let size = fs::metadata(&path)
        .context(WritingOutputSnafu { path: path_s })?
        .len();
    debug!("write_document: {:?}: {:?} bytes", path, size);
    Ok(WrittenDocument { path, size })
}

/// Compares the generated documents with the files of the same name in the reference directory.
///
/// All the differences are printed before returning an error.
pub fn compare_with_reference(
    reference_dir: &Path,
    generated: &[(&'static str, String)],
) -> ConvertResult<()> {
    let mut mismatches: Vec<&str> = Vec::new();
    for (name, text) in generated.iter() {
        let ref_path = reference_dir.join(name);
        let reference = fs::read_to_string(&ref_path).context(ReadingReferenceSnafu {
            path: ref_path.display().to_string(),
        })?;
        if reference != *text {
            warn!("Found differences with the reference file {:?}", ref_path);
            print_diff(reference.as_str(), text.as_str(), "\n");
            mismatches.push(*name);
        }
    }
    ensure!(
        mismatches.is_empty(),
        ReferenceMismatchSnafu {
            files: mismatches.join(", ")
        }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pretty_and_unescaped() {
        let text = render_document("test", &json!({"title": "Ordet", "director": "Carl Th. Dreyer", "country": "Danmark – Ø"})).unwrap();
        assert!(text.contains("\n  \"title\": \"Ordet\""));
        assert!(text.contains("Danmark – Ø"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn writes_and_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a").join("b");
        ensure_output_dir(&out).unwrap();
        // Creating it again is not an error.
        ensure_output_dir(&out).unwrap();
        let written = write_document(&out, "polls.json", "{}\n").unwrap();
        assert_eq!(written.path, out.join("polls.json"));
        assert_eq!(written.size, 3);
        assert_eq!(fs::read_to_string(&written.path).unwrap(), "{}\n");
    }

    #[test]
    fn overwrites_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        write_document(dir.path(), "films.json", "[\n  1,\n  2\n]\n").unwrap();
        let written = write_document(dir.path(), "films.json", "[]\n").unwrap();
        assert_eq!(written.size, 3);
    }

    #[test]
    fn reference_comparison() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("films.json"), "[]\n").unwrap();
        fs::write(dir.path().join("polls.json"), "{}\n").unwrap();

        let same = vec![("films.json", "[]\n".to_string()), ("polls.json", "{}\n".to_string())];
        assert!(compare_with_reference(dir.path(), &same).is_ok());

        let different = vec![
            ("films.json", "[\n  1\n]\n".to_string()),
            ("polls.json", "{}\n".to_string()),
        ];
        match compare_with_reference(dir.path(), &different) {
            Err(ConvertError::ReferenceMismatch { files }) => assert_eq!(files, "films.json"),
            x => panic!("unexpected result {:?}", x),
        }

        let missing = vec![("directors.json", "{}\n".to_string())];
        assert!(matches!(
            compare_with_reference(dir.path(), &missing),
            Err(ConvertError::ReadingReference { .. })
        ));
    }
}
