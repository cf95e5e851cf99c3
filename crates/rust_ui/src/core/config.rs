//! # Interface Configuration
//!
//! Declarative description of an interface: its roots, how each root is
//! sized, the layout it uses and the widgets placed inside it. Loadable from
//! TOML or RON through [`Config`].

use serde::{Serialize, Deserialize};

use crate::config::Config;
use crate::foundation::math::Dimension;
use crate::ui::layout::{AbsoluteLayout, Axis, AxisLayout, Layout};
use crate::ui::style::Stylesheet;

/// Top-level configuration for an [`Interface`](crate::ui::Interface)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Stylesheet shared by every root unless the root overrides it
    pub stylesheet: Stylesheet,
    /// Roots in back-to-front order
    pub roots: Vec<RootConfig>,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            stylesheet: Stylesheet::default(),
            roots: Vec::new(),
        }
    }
}

impl Config for InterfaceConfig {}

/// Configuration for a single root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    /// Human readable name, used in logs
    pub name: String,
    /// How the root is sized after its widgets are added
    pub sizing: RootSizing,
    /// Screen-space translation of the root
    pub position: [f32; 2],
    /// Whether the root starts visible
    pub visible: bool,
    /// Layout used for the root's children
    pub layout: LayoutConfig,
    /// Optional stylesheet replacing the interface stylesheet
    pub stylesheet: Option<Stylesheet>,
    /// Widgets added to the root in order
    pub widgets: Vec<WidgetConfig>,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            name: "root".to_string(),
            sizing: RootSizing::Pack,
            position: [0.0, 0.0],
            visible: true,
            layout: LayoutConfig::default(),
            stylesheet: None,
            widgets: Vec::new(),
        }
    }
}

/// Sizing call applied to a root
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RootSizing {
    /// Size to the unconstrained preferred size
    Pack,
    /// Fix the width, derive the height
    PackToWidth {
        /// Fixed width
        width: f32,
    },
    /// Fix the height, derive the width
    PackToHeight {
        /// Fixed height
        height: f32,
    },
    /// Explicit size
    Fixed {
        /// Width in pixels
        width: f32,
        /// Height in pixels
        height: f32,
    },
}

/// Layout strategy for a root or group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LayoutConfig {
    /// Stack children along an axis
    Axis {
        /// Stacking axis
        axis: Axis,
        /// Space between children
        gap: f32,
        /// Space around the children
        padding: f32,
        /// Stretch children across the cross axis
        stretch: bool,
    },
    /// Keep children where they were placed
    Absolute,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::Axis { axis: Axis::Vertical, gap: 0.0, padding: 0.0, stretch: false }
    }
}

impl LayoutConfig {
    /// Instantiate the layout strategy
    pub fn build(&self) -> Box<dyn Layout> {
        match *self {
            Self::Axis { axis, gap, padding, stretch } => Box::new(
                AxisLayout::new(axis).with_gap(gap).with_padding(padding).with_stretch(stretch),
            ),
            Self::Absolute => Box::new(AbsoluteLayout),
        }
    }
}

/// Widget placed inside a root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WidgetConfig {
    /// Clickable button
    Button {
        /// Button label
        label: String,
        /// Preferred size
        size: Dimension,
        /// Take focus when pressed
        #[serde(default)]
        focus_on_press: bool,
    },
    /// Non-interactive label
    Label {
        /// Label text
        text: String,
        /// Preferred size
        size: Dimension,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;
    use crate::ui::style::StyleValue;

    fn sample() -> InterfaceConfig {
        InterfaceConfig {
            log_filter: "rust_ui=trace".to_string(),
            stylesheet: Stylesheet::named("dark").with("button.radius", StyleValue::Number(4.0)),
            roots: vec![RootConfig {
                name: "toolbar".to_string(),
                sizing: RootSizing::PackToWidth { width: 320.0 },
                position: [10.0, 20.0],
                layout: LayoutConfig::Axis { axis: Axis::Horizontal, gap: 4.0, padding: 2.0, stretch: true },
                widgets: vec![
                    WidgetConfig::Button {
                        label: "Play".to_string(),
                        size: Dimension::new(80.0, 30.0),
                        focus_on_press: true,
                    },
                    WidgetConfig::Label { text: "Score".to_string(), size: Dimension::new(60.0, 30.0) },
                ],
                ..RootConfig::default()
            }],
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let config = sample();
        let text = config.to_string_as(ConfigFormat::Toml).unwrap();
        let parsed = InterfaceConfig::from_str_as(&text, ConfigFormat::Toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let config = sample();
        let text = config.to_string_as(ConfigFormat::Ron).unwrap();
        let parsed = InterfaceConfig::from_str_as(&text, ConfigFormat::Ron).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let text = r#"
            [[roots]]
            name = "hud"
        "#;
        let parsed = InterfaceConfig::from_str_as(text, ConfigFormat::Toml).unwrap();

        assert_eq!(parsed.log_filter, "info");
        assert_eq!(parsed.roots.len(), 1);
        assert_eq!(parsed.roots[0].sizing, RootSizing::Pack);
        assert!(parsed.roots[0].visible);
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("rust_ui_config_{}.toml", std::process::id()));
        let config = sample();
        config.save_to_file(&path).unwrap();
        let loaded = InterfaceConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }
}
