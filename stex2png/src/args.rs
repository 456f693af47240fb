use clap::{ArgAction, ColorChoice, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// Convert Godot .stex textures to .png by stripping the STEX header.
#[derive(Debug, Clone, Parser)]
#[command(version, author = "clitic <clitic21@gmail.com>", about)]
pub struct Args {
    /// Path of the texture to convert.
    /// Files without a .stex extension are converted too.
    #[arg(required = true)]
    pub input: PathBuf,

    /// Path for the converted png file.
    /// By default the input name is used with .stex replaced by .png.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for the converted png file when --output is not used.
    /// By default the directory of the input file is used.
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Overwrite the output file if it already exists.
    #[arg(short, long)]
    pub force: bool,

    /// Print conversion details in json format to stdout.
    #[arg(long)]
    pub json: bool,

    /// Do not draw a progress bar while reading the input.
    #[arg(long)]
    pub no_progress: bool,

    /// When to output colored text.
    #[arg(long, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Only print errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print more details, can be used twice for trace output.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }

        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Explicit --output or the derived file name inside --directory or next to the input.
    pub fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.output {
            return output.to_owned();
        }

        let name = stex::output_filename(&self.input_name());
        match &self.directory {
            Some(directory) => directory.join(name),
            None => self
                .input
                .parent()
                .map(|x| x.join(&name))
                .unwrap_or_else(|| PathBuf::from(&name)),
        }
    }

    /// File name of the input, empty when it is missing or not valid unicode.
    pub fn input_name(&self) -> String {
        self.input
            .file_name()
            .and_then(|x| x.to_str())
            .map(|x| x.to_owned())
            .unwrap_or_default()
    }

    /// File name of the input for status lines.
    pub fn display_name(&self) -> String {
        self.input
            .file_name()
            .map(|x| x.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("stex2png").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn output_next_to_input() {
        let args = parse(&["textures/icon.stex"]);
        assert_eq!(args.output_path(), PathBuf::from("textures/icon.png"));

        let args = parse(&["icon.STEX"]);
        assert_eq!(args.output_path(), PathBuf::from("icon.png"));
    }

    #[test]
    fn output_in_directory() {
        let args = parse(&["textures/icon.stex", "-d", "out"]);
        assert_eq!(args.output_path(), PathBuf::from("out/icon.png"));
    }

    #[test]
    fn explicit_output_wins() {
        let args = parse(&["icon.stex", "-d", "out", "-o", "custom.png"]);
        assert_eq!(args.output_path(), PathBuf::from("custom.png"));
    }

    #[test]
    fn input_without_file_name() {
        let args = parse(&[".."]);
        assert_eq!(args.input_name(), "");
        assert_eq!(args.output_path(), PathBuf::from("converted.png"));
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_input_name_falls_back() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let input = PathBuf::from("textures").join(OsStr::from_bytes(b"\xffbad.stex"));
        let args = Args::try_parse_from([OsStr::new("stex2png"), input.as_os_str()]).unwrap();

        assert_eq!(args.input_name(), "");
        assert_eq!(args.display_name(), "\u{FFFD}bad.stex");
        assert_eq!(args.output_path(), PathBuf::from("textures/converted.png"));
    }

    #[test]
    fn log_levels() {
        assert_eq!(parse(&["a.stex"]).log_level(), LevelFilter::Info);
        assert_eq!(parse(&["a.stex", "-v"]).log_level(), LevelFilter::Debug);
        assert_eq!(parse(&["a.stex", "-vv"]).log_level(), LevelFilter::Trace);
        assert_eq!(parse(&["a.stex", "-q"]).log_level(), LevelFilter::Error);
        assert!(Args::try_parse_from(["stex2png", "a.stex", "-q", "-v"]).is_err());
    }
}
