use crate::cli::Args;
use crate::codec::{self, CodecError};
use crate::display::Display;
use iced_layershell::reexport::{Anchor, Layer};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_HEIGHT: u32 = 30;
pub const DEFAULT_SCOPE: &str = "normal";

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub margins: i32,
    pub scope: String,
    pub anchors: Anchor,
    pub layer: Layer,
    /// `None` when no output could be queried; the surface then stretches.
    pub width: Option<u32>,
    pub height: u32,
    pub lifetime: Option<Duration>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("`{key}` = {value} is out of range")]
    OutOfRange { key: &'static str, value: i64 },
    #[error("`{key}`: {source}")]
    Name {
        key: &'static str,
        #[source]
        source: CodecError,
    },
}

impl Options {
    pub fn defaults(display: &Display) -> Self {
        Self {
            margins: 0,
            scope: DEFAULT_SCOPE.to_string(),
            anchors: Anchor::Top | Anchor::Bottom | Anchor::Left | Anchor::Right,
            layer: Layer::Top,
            width: display.primary_width(),
            height: DEFAULT_HEIGHT,
            lifetime: None,
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let config_home = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_default();
            PathBuf::from(home).join(".config")
        });

    let config_file = config_home.join("hypr").join("layershell-demo.conf");
    if config_file.exists() {
        Some(config_file)
    } else {
        None
    }
}

/// Defaults overlaid with the config file, if one exists.
pub fn load_config(display: &Display) -> Options {
    let mut options = Options::defaults(display);
    let Some(path) = get_config_path() else {
        return options;
    };

    match apply_config_file(&mut options, &path) {
        Ok(errors) => {
            for e in errors {
                warn!(path = %path.display(), "ignoring config value: {e}");
            }
            debug!(path = %path.display(), "loaded config file");
        }
        Err(e) => warn!("{e}, using defaults"),
    }
    options
}

/// Applies every valid `general:*` key in `path` to `options`. Returns the
/// per-key errors that were skipped; fails only if the file cannot be parsed.
pub fn apply_config_file(options: &mut Options, path: &Path) -> Result<Vec<ConfigError>, ConfigError> {
    let mut config = hyprlang::Config::new();
    config.parse_file(path).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut errors = Vec::new();

    if let Ok(v) = config.get_int("general:margins") {
        match i32::try_from(v) {
            Ok(v) => options.margins = v,
            Err(_) => errors.push(ConfigError::OutOfRange { key: "general:margins", value: v }),
        }
    }
    if let Ok(v) = config.get_string("general:scope") {
        options.scope = v.to_string();
    }
    if let Ok(v) = config.get_string("general:anchors") {
        match codec::names_to_mask(&v.to_string()) {
            Ok(mask) => options.anchors = mask,
            Err(source) => errors.push(ConfigError::Name { key: "general:anchors", source }),
        }
    }
    if let Ok(v) = config.get_string("general:layer") {
        match codec::name_to_layer(&v.to_string()) {
            Ok(layer) => options.layer = layer,
            Err(source) => errors.push(ConfigError::Name { key: "general:layer", source }),
        }
    }
    if let Ok(v) = config.get_int("general:width") {
        match u32::try_from(v) {
            Ok(v) => options.width = Some(v),
            Err(_) => errors.push(ConfigError::OutOfRange { key: "general:width", value: v }),
        }
    }
    if let Ok(v) = config.get_int("general:height") {
        match u32::try_from(v) {
            Ok(v) => options.height = v,
            Err(_) => errors.push(ConfigError::OutOfRange { key: "general:height", value: v }),
        }
    }
    if let Ok(v) = config.get_int("general:time") {
        match u64::try_from(v) {
            Ok(v) => options.lifetime = Some(Duration::from_millis(v)),
            Err(_) => errors.push(ConfigError::OutOfRange { key: "general:time", value: v }),
        }
    }

    Ok(errors)
}

pub fn apply_cli_overrides(options: &mut Options, args: &Args) {
    if let Some(v) = args.margins {
        options.margins = v;
    }
    if let Some(v) = &args.scope {
        options.scope = v.clone();
    }
    if let Some(v) = args.anchors {
        options.anchors = v;
    }
    if let Some(v) = args.layer {
        options.layer = v;
    }
    if let Some(v) = args.width {
        options.width = Some(v);
    }
    if let Some(v) = args.height {
        options.height = v;
    }
    if let Some(v) = args.time {
        options.lifetime = Some(Duration::from_millis(v));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Output;
    use clap::Parser;

    fn display() -> Display {
        Display::with_primary(Output {
            name: "eDP-1".to_string(),
            width: 1366,
            height: 768,
        })
    }

    fn resolve(args: &[&str]) -> Options {
        let args = Args::try_parse_from(std::iter::once("layershell-demo").chain(args.iter().copied()))
            .unwrap();
        let mut options = Options::defaults(&display());
        apply_cli_overrides(&mut options, &args);
        options
    }

    fn write_config(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "layershell-demo-{}-{}.conf",
            name,
            std::process::id()
        ));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let options = resolve(&[]);
        assert_eq!(options.margins, 0);
        assert_eq!(options.scope, "normal");
        assert_eq!(
            options.anchors,
            Anchor::Top | Anchor::Bottom | Anchor::Left | Anchor::Right
        );
        assert_eq!(options.layer, Layer::Top);
        assert_eq!(options.width, Some(1366));
        assert_eq!(options.height, 30);
        assert_eq!(options.lifetime, None);
    }

    #[test]
    fn test_cli_overrides_every_field() {
        let options = resolve(&[
            "--margins", "10", "--scope", "osd", "--anchors", "top", "--layer", "Overlay",
            "--width", "400", "--height", "60", "--time", "200",
        ]);
        assert_eq!(options.margins, 10);
        assert_eq!(options.scope, "osd");
        assert_eq!(options.anchors, Anchor::Top);
        assert_eq!(options.layer, Layer::Overlay);
        assert_eq!(options.width, Some(400));
        assert_eq!(options.height, 60);
        assert_eq!(options.lifetime, Some(Duration::from_millis(200)));
    }

    #[test]
    fn test_unknown_display_leaves_width_open() {
        let options = Options::defaults(&Display::default());
        assert_eq!(options.width, None);

        let args = Args::try_parse_from(["layershell-demo", "--width", "640"]).unwrap();
        let mut options = Options::defaults(&Display::default());
        apply_cli_overrides(&mut options, &args);
        assert_eq!(options.width, Some(640));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let options = resolve(&["--height", "12"]);
        assert_eq!(options.height, 12);
        assert_eq!(options.width, Some(1366));
        assert_eq!(options.layer, Layer::Top);
    }

    #[test]
    fn test_negative_margins() {
        assert_eq!(resolve(&["--margins", "-4"]).margins, -4);
    }

    #[test]
    fn test_config_file_values() {
        let path = write_config(
            "values",
            "general {\n    margins = 6\n    height = 42\n    time = 1500\n}\n",
        );
        let mut options = Options::defaults(&display());
        let errors = apply_config_file(&mut options, &path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(errors.is_empty());
        assert_eq!(options.margins, 6);
        assert_eq!(options.height, 42);
        assert_eq!(options.lifetime, Some(Duration::from_millis(1500)));
        assert_eq!(options.width, Some(1366));
    }

    #[test]
    fn test_config_file_out_of_range_is_skipped() {
        let path = write_config("range", "general {\n    width = -1\n    height = 20\n}\n");
        let mut options = Options::defaults(&display());
        let errors = apply_config_file(&mut options, &path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            ConfigError::OutOfRange { key: "general:width", value: -1 }
        ));
        assert_eq!(options.width, Some(1366));
        assert_eq!(options.height, 20);
    }

    #[test]
    fn test_cli_wins_over_config_file() {
        let path = write_config("precedence", "general {\n    height = 42\n}\n");
        let mut options = Options::defaults(&display());
        apply_config_file(&mut options, &path).unwrap();
        std::fs::remove_file(&path).ok();

        let args = Args::try_parse_from(["layershell-demo", "--height", "99"]).unwrap();
        apply_cli_overrides(&mut options, &args);
        assert_eq!(options.height, 99);
    }
}
