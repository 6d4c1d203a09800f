use hyprland::data::{Monitor, Monitors, Transforms};
use hyprland::prelude::*;
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub struct Output {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// Quarter-turn transforms swap the output's width and height.
fn is_rotated(transform: &Transforms) -> bool {
    matches!(
        transform,
        Transforms::Normal90 | Transforms::Normal270 | Transforms::Flipped90 | Transforms::Flipped270
    )
}

impl Output {
    fn logical(name: String, width: f32, height: f32, scale: f32, rotated: bool) -> Self {
        let scale = if scale > 0.0 { scale } else { 1.0 };
        let (width, height) = if rotated { (height, width) } else { (width, height) };
        Self {
            name,
            width: (width / scale).round() as u32,
            height: (height / scale).round() as u32,
        }
    }

    fn from_monitor(monitor: &Monitor) -> Self {
        Self::logical(
            monitor.name.clone(),
            monitor.width as f32,
            monitor.height as f32,
            monitor.scale,
            is_rotated(&monitor.transform),
        )
    }
}

/// Snapshot of the outputs taken once at startup.
#[derive(Clone, Debug, Default)]
pub struct Display {
    primary: Option<Output>,
}

impl Display {
    pub fn query() -> Self {
        let primary = match Monitor::get_active() {
            Ok(monitor) => Some(Output::from_monitor(&monitor)),
            Err(_) => match Monitors::get() {
                Ok(monitors) => monitors.iter().next().map(Output::from_monitor),
                Err(e) => {
                    debug!(error = %e, "no compositor IPC, output size unknown");
                    None
                }
            },
        };

        if let Some(output) = &primary {
            debug!(output = %output.name, width = output.width, height = output.height, "primary output");
        }

        Self { primary }
    }

    #[cfg(test)]
    pub fn with_primary(output: Output) -> Self {
        Self {
            primary: Some(output),
        }
    }

    /// Logical width of the primary output, if one could be queried.
    pub fn primary_width(&self) -> Option<u32> {
        self.primary.as_ref().map(|o| o.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_width_from_output() {
        let display = Display::with_primary(Output {
            name: "DP-1".to_string(),
            width: 2560,
            height: 1440,
        });
        assert_eq!(display.primary_width(), Some(2560));
        assert_eq!(display.primary.map(|o| o.name), Some("DP-1".to_string()));
    }

    #[test]
    fn test_no_output_has_no_width() {
        assert_eq!(Display::default().primary_width(), None);
    }

    #[test]
    fn test_scaled_output() {
        let output = Output::logical("eDP-1".to_string(), 2880.0, 1800.0, 2.0, false);
        assert_eq!((output.width, output.height), (1440, 900));
    }

    #[test]
    fn test_rotated_output_swaps_axes() {
        assert!(is_rotated(&Transforms::Normal90));
        assert!(is_rotated(&Transforms::Flipped270));
        assert!(!is_rotated(&Transforms::Normal180));
        assert!(!is_rotated(&Transforms::Flipped));

        let output = Output::logical("DP-2".to_string(), 2560.0, 1440.0, 1.0, true);
        assert_eq!((output.width, output.height), (1440, 2560));
    }
}
