use jyotish::ReportFormat;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub output_dir: PathBuf,
    pub format: ReportFormat,
    pub seed: Option<u64>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            format: ReportFormat::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ReportToml {
    #[serde(default = "default_output_dir")]
    output_dir: PathBuf,
    #[serde(default)]
    format: ReportFormat,
    #[serde(default)]
    seed: Option<u64>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    report: Option<ReportToml>,
}

const CONFIG_PATHS: [&str; 2] = ["configs/jyotish.toml", "../../configs/jyotish.toml"];

/// Try the common relative paths for `configs/jyotish.toml`.
pub fn read_config_toml_text() -> anyhow::Result<Option<String>> {
    read_first_existing(&CONFIG_PATHS.map(Path::new))
}

/// Contents of the first path that exists. Only a missing file moves on to
/// the next candidate; any other read failure is an error.
fn read_first_existing(paths: &[&Path]) -> anyhow::Result<Option<String>> {
    for p in paths {
        match fs::read_to_string(p) {
            Ok(text) => return Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => anyhow::bail!("Could not read config {}: {e}", p.display()),
        }
    }
    Ok(None)
}

pub fn parse_report_settings(text: &str) -> anyhow::Result<ReportSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse jyotish.toml: {e}"))?;
    let Some(report) = root.report else {
        return Ok(ReportSettings::default());
    };
    Ok(ReportSettings {
        output_dir: report.output_dir,
        format: report.format,
        seed: report.seed,
    })
}

/// Load settings from `path`, or from the default locations when `None`.
///
/// A missing default file yields defaults; an explicit path must exist.
pub fn load_report_settings(path: Option<&Path>) -> anyhow::Result<ReportSettings> {
    let text = match path {
        Some(p) => fs::read_to_string(p)
            .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", p.display()))?,
        None => match read_config_toml_text()? {
            Some(text) => text,
            None => return Ok(ReportSettings::default()),
        },
    };
    parse_report_settings(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_table() {
        let settings = parse_report_settings(
            "[report]\noutput_dir = \"reports\"\nformat = \"text\"\nseed = 7\n",
        )
        .unwrap();
        assert_eq!(settings.output_dir, PathBuf::from("reports"));
        assert_eq!(settings.format, ReportFormat::Text);
        assert_eq!(settings.seed, Some(7));
    }

    #[test]
    fn test_missing_table_uses_defaults() {
        assert_eq!(parse_report_settings("").unwrap(), ReportSettings::default());
        let partial = parse_report_settings("[report]\nseed = 1\n").unwrap();
        assert_eq!(partial.output_dir, PathBuf::from("output"));
        assert_eq!(partial.format, ReportFormat::Json);
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(parse_report_settings("[report]\nformat = \"pdf\"\n").is_err());
        assert!(parse_report_settings("[report\n").is_err());
    }

    #[test]
    fn test_missing_candidates_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("jyotish.toml");
        let present = dir.path().join("other.toml");
        std::fs::write(&present, "[report]\nseed = 3\n").unwrap();

        assert_eq!(read_first_existing(&[missing.as_path()]).unwrap(), None);
        let text = read_first_existing(&[missing.as_path(), present.as_path()]).unwrap();
        assert_eq!(text.as_deref(), Some("[report]\nseed = 3\n"));
    }

    #[test]
    fn test_unreadable_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let garbled = dir.path().join("jyotish.toml");
        std::fs::write(&garbled, [0xff, 0xfe, 0x00, 0x80]).unwrap();
        let fallback = dir.path().join("fallback.toml");
        std::fs::write(&fallback, "").unwrap();

        assert!(read_first_existing(&[garbled.as_path(), fallback.as_path()]).is_err());
        assert!(read_first_existing(&[dir.path()]).is_err());
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[report]\nformat = \"text\"").unwrap();
        let settings = load_report_settings(Some(file.path())).unwrap();
        assert_eq!(settings.format, ReportFormat::Text);

        assert!(load_report_settings(Some(Path::new("/nonexistent/jyotish.toml"))).is_err());
    }
}
