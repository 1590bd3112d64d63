use clap::Parser;

/// Converts the Sight & Sound poll spreadsheet into the JSON documents used by the web application.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file with the settings of the conversion (input path, worksheet name,
    /// output directory). Relative paths in this file are resolved against the directory of the file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path, default 'data/sight and sound.xlsx') The Excel workbook to read. Setting this option
    /// overrides the path that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (default 'main data') The name of the worksheet that contains the films.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (directory, default 'public/data') Where the JSON documents are written. The directory is
    /// created if it does not exist.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (directory, optional) A directory containing a previous version of the JSON documents. If
    /// provided, the generated documents are compared with it and any difference is reported as an error.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
