use crate::args::Args;
use crate::convert::*;

use log::debug;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_PATH: &str = "data/sight and sound.xlsx";
pub const DEFAULT_WORKSHEET_NAME: &str = "main data";
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "public/data";

/// The optional settings file. All the entries are optional.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(rename = "inputPath")]
    pub input_path: Option<String>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
    #[serde(rename = "outputDirectory")]
    pub output_directory: Option<String>,
}

/// The settings of a conversion, after applying the defaults, the settings file and the
/// command line options (in that order).
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ConvertSettings {
    pub input_path: PathBuf,
    pub worksheet_name: String,
    pub output_directory: PathBuf,
    pub reference_directory: Option<PathBuf>,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        ConvertSettings {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            worksheet_name: DEFAULT_WORKSHEET_NAME.to_string(),
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
            reference_directory: None,
        }
    }
}

pub fn read_settings_file(path: &str) -> ConvertResult<SettingsFile> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let settings: SettingsFile =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    debug!("read_settings_file: {:?}", settings);
    Ok(settings)
}

fn resolve(root: Option<&Path>, p: &str) -> PathBuf {
    match root {
        Some(r) if Path::new(p).is_relative() => r.join(p),
        _ => PathBuf::from(p),
    }
}

/// Combines the defaults, the settings file (if any) and the command line options.
///
/// `root` is the directory of the settings file: relative paths of the file are resolved
/// against it. The paths of the command line are used as-is.
pub fn merge_settings(
    args: &Args,
    file: Option<&SettingsFile>,
    root: Option<&Path>,
) -> ConvertSettings {
    let mut res = ConvertSettings::default();
    if let Some(f) = file {
        if let Some(p) = &f.input_path {
            res.input_path = resolve(root, p);
        }
        if let Some(w) = &f.excel_worksheet_name {
            res.worksheet_name = w.clone();
        }
        if let Some(p) = &f.output_directory {
            res.output_directory = resolve(root, p);
        }
    }
    if let Some(p) = &args.input {
        res.input_path = PathBuf::from(p);
    }
    if let Some(w) = &args.excel_worksheet_name {
        res.worksheet_name = w.clone();
    }
    if let Some(p) = &args.out {
        res.output_directory = PathBuf::from(p);
    }
    res.reference_directory = args.reference.as_ref().map(PathBuf::from);
    res
}

pub fn build_settings(args: &Args) -> ConvertResult<ConvertSettings> {
    match &args.config {
        Some(config_path) => {
            let file = read_settings_file(config_path)?;
            let root = Path::new(config_path.as_str()).parent();
            Ok(merge_settings(args, Some(&file), root))
        }
        None => Ok(merge_settings(args, None, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_arguments() {
        let s = build_settings(&Args::default()).unwrap();
        assert_eq!(s, ConvertSettings::default());
        assert_eq!(s.input_path, PathBuf::from("data/sight and sound.xlsx"));
        assert_eq!(s.worksheet_name, "main data");
        assert_eq!(s.output_directory, PathBuf::from("public/data"));
        assert_eq!(s.reference_directory, None);
    }

    #[test]
    fn file_relative_paths() {
        let file = SettingsFile {
            input_path: Some("poll.xlsx".to_string()),
            excel_worksheet_name: Some("films".to_string()),
            output_directory: Some("/srv/www/data".to_string()),
        };
        let s = merge_settings(&Args::default(), Some(&file), Some(Path::new("/etc/ssdata")));
        assert_eq!(s.input_path, PathBuf::from("/etc/ssdata/poll.xlsx"));
        assert_eq!(s.worksheet_name, "films");
        assert_eq!(s.output_directory, PathBuf::from("/srv/www/data"));
    }

    #[test]
    fn command_line_wins() {
        let file = SettingsFile {
            input_path: Some("poll.xlsx".to_string()),
            excel_worksheet_name: None,
            output_directory: Some("out".to_string()),
        };
        let args = Args {
            input: Some("other.xlsx".to_string()),
            excel_worksheet_name: Some("2022".to_string()),
            reference: Some("published".to_string()),
            ..Default::default()
        };
        let s = merge_settings(&args, Some(&file), Some(Path::new("conf")));
        assert_eq!(s.input_path, PathBuf::from("other.xlsx"));
        assert_eq!(s.worksheet_name, "2022");
        assert_eq!(s.output_directory, PathBuf::from("conf/out"));
        assert_eq!(s.reference_directory, Some(PathBuf::from("published")));
    }

    #[test]
    fn reads_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("settings.json");
        let mut f = fs::File::create(&p).unwrap();
        writeln!(f, r#"{{"outputDirectory": "site/data"}}"#).unwrap();
        let args = Args {
            config: Some(p.display().to_string()),
            ..Default::default()
        };
        let s = build_settings(&args).unwrap();
        assert_eq!(s.output_directory, dir.path().join("site/data"));
        assert_eq!(s.worksheet_name, DEFAULT_WORKSHEET_NAME);
    }

    #[test]
    fn broken_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("settings.json");
        fs::write(&p, "{ not json").unwrap();
        let res = read_settings_file(&p.display().to_string());
        assert!(matches!(res, Err(ConvertError::ParsingJson { .. })));
        let missing = read_settings_file(&dir.path().join("nope.json").display().to_string());
        assert!(matches!(missing, Err(ConvertError::OpeningJson { .. })));
    }
}
