// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sidebar panel state.
//!
//! The panel keeps one set of parameters per tool group; pressing a button
//! builds the matching command from these values plus the button's axis.
//! Settings round-trip through TOML so hosts can persist them:
//!
//! ```toml
//! [align]
//! mode = "MIN"
//! use_bounds = true
//!
//! [grid]
//! columns = 4
//! ```
//!
//! Missing sections and keys fall back to their defaults.

use serde::{Deserialize, Serialize};
use trueline_geometry::{Axis, BoundSide, EdgeSide, SpacingMode, TargetMode};

use crate::commands::SnapTarget;
use crate::error::Result;

/// Every panel parameter, grouped by tool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Show advanced options in the host UI.
    pub show_advanced: bool,
    /// Align objects.
    pub align: AlignSettings,
    /// Distribute objects and distribute by distance.
    pub distribute: DistributeSettings,
    /// Grid arrange.
    pub grid: GridSettings,
    /// Mirror objects and mesh.
    pub mirror: MirrorSettings,
    /// Set cursor.
    pub cursor: CursorSettings,
    /// Aim and match size.
    pub orient: OrientSettings,
    /// Edge snapping and increment rounding.
    pub snap: SnapSettings,
    /// Space inside range.
    pub space: SpaceSettings,
}

/// Align objects parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignSettings {
    /// Target to align to.
    pub mode: TargetMode,
    /// Align bounds instead of pivots.
    pub use_bounds: bool,
    /// Which side of the bounds lands on the target.
    pub which_bound: BoundSide,
    /// Added to the resolved target.
    pub offset: f64,
}

impl Default for AlignSettings {
    fn default() -> Self {
        Self {
            mode: TargetMode::Center,
            use_bounds: false,
            which_bound: BoundSide::Center,
            offset: 0.0,
        }
    }
}

/// Distribution parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributeSettings {
    /// Equal-gap or equal-center distribution.
    pub spacing_mode: SpacingMode,
    /// Center or gap variant of fixed-distance spacing.
    pub distance_mode: SpacingMode,
    /// Fixed distance; non-negative.
    pub distance: f64,
}

impl Default for DistributeSettings {
    fn default() -> Self {
        Self {
            spacing_mode: SpacingMode::Gap,
            distance_mode: SpacingMode::Center,
            distance: 1.0,
        }
    }
}

/// Grid arrange parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Axis along a row.
    pub primary: Axis,
    /// Axis across rows.
    pub secondary: Axis,
    /// Items per row; at least one.
    pub columns: usize,
    /// Pitch along the primary axis; non-negative.
    pub spacing_primary: f64,
    /// Pitch along the secondary axis; non-negative.
    pub spacing_secondary: f64,
    /// Axis whose positions order the items.
    pub sort_by: Axis,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            primary: Axis::X,
            secondary: Axis::Y,
            columns: 3,
            spacing_primary: 1.0,
            spacing_secondary: 1.0,
            sort_by: Axis::X,
        }
    }
}

/// Mirror parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorSettings {
    /// Where the mirror plane sits.
    pub plane_origin: TargetMode,
    /// Mirror copies instead of the originals.
    pub duplicate: bool,
}

impl Default for MirrorSettings {
    fn default() -> Self {
        Self {
            plane_origin: TargetMode::World,
            duplicate: true,
        }
    }
}

/// Set cursor parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorSettings {
    /// Target the cursor moves to.
    pub mode: TargetMode,
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self {
            mode: TargetMode::Center,
        }
    }
}

/// Aim and match size parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientSettings {
    /// Local axis that points at the target.
    pub local_axis: Axis,
    /// Local axis kept closest to the matching world axis.
    pub up_axis: Axis,
    /// What to aim at.
    pub target: TargetMode,
    /// Point away from the target instead.
    pub invert: bool,
    /// Size to match; non-negative.
    pub match_size: f64,
    /// Scale all axes by the same factor.
    pub match_uniform: bool,
}

impl Default for OrientSettings {
    fn default() -> Self {
        Self {
            local_axis: Axis::Y,
            up_axis: Axis::Z,
            target: TargetMode::Selection,
            invert: false,
            match_size: 1.0,
            match_uniform: false,
        }
    }
}

/// Snapping parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Face of each moved object that snaps.
    pub source_side: EdgeSide,
    /// Face of the active object snapped to.
    pub target_side: EdgeSide,
    /// What to snap to.
    pub target: SnapTarget,
    /// Rounding increment; non-negative.
    pub increment: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            source_side: EdgeSide::Min,
            target_side: EdgeSide::Min,
            target: SnapTarget::Active,
            increment: 0.1,
        }
    }
}

/// Space inside range parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceSettings {
    /// Lower end of the range.
    pub range_min: f64,
    /// Upper end of the range.
    pub range_max: f64,
    /// Center or gap spacing.
    pub mode: SpacingMode,
}

impl Default for SpaceSettings {
    fn default() -> Self {
        Self {
            range_min: 0.0,
            range_max: 10.0,
            mode: SpacingMode::Center,
        }
    }
}

impl PanelSettings {
    /// Parses settings from TOML, then clamps values into their UI limits.
    ///
    /// # Errors
    ///
    /// Returns [`OpError::Settings`](crate::OpError::Settings) for malformed
    /// TOML or unknown enum values.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut settings: Self = toml::from_str(s)?;
        settings.clamp_to_limits();
        Ok(settings)
    }

    /// Serializes settings to TOML.
    #[must_use]
    pub fn to_toml_string(&self) -> String {
        // Every field is a plain scalar or table, which TOML always accepts.
        toml::to_string(self).unwrap_or_default()
    }

    /// Applies the lower limits the panel widgets enforce.
    pub fn clamp_to_limits(&mut self) {
        self.distribute.distance = self.distribute.distance.max(0.0);
        self.grid.columns = self.grid.columns.max(1);
        self.grid.spacing_primary = self.grid.spacing_primary.max(0.0);
        self.grid.spacing_secondary = self.grid.spacing_secondary.max(0.0);
        self.orient.match_size = self.orient.match_size.max(0.0);
        self.snap.increment = self.snap.increment.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let s = PanelSettings::from_toml_str("").unwrap();
        assert_eq!(s, PanelSettings::default());
        assert_eq!(s.distribute.spacing_mode, SpacingMode::Gap);
        assert!(s.mirror.duplicate);
        assert_eq!(s.grid.columns, 3);
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let s = PanelSettings::from_toml_str(
            r#"
            [align]
            mode = "MIN"
            use_bounds = true

            [grid]
            columns = 0
            primary = "Z"
            "#,
        )
        .unwrap();
        assert_eq!(s.align.mode, TargetMode::Min);
        assert!(s.align.use_bounds);
        assert_eq!(s.align.which_bound, BoundSide::Center);
        assert_eq!(s.grid.columns, 1, "columns are clamped to at least one");
        assert_eq!(s.grid.primary, Axis::Z);
        assert_eq!(s.grid.secondary, Axis::Y);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = PanelSettings::from_toml_str("[align]\nmode = \"MEDIAN\"\n");
        assert!(matches!(err, Err(crate::OpError::Settings(_))));
    }

    #[test]
    fn round_trips_through_toml() {
        let mut s = PanelSettings::default();
        s.snap.target = SnapTarget::Cursor;
        s.space.range_max = 4.5;
        let back = PanelSettings::from_toml_str(&s.to_toml_string()).unwrap();
        assert_eq!(back, s);
    }
}
