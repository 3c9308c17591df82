//! Per-variant scene behavior.

use super::constants::{BRANCH_HIT_RADIUS, BRANCH_SIZE};

/// Region around a branch anchor that counts as "hovered".
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitRegion {
    Box { width: f32, height: f32 },
    Radius(f32),
}

/// Where the tilt direction of a hovered branch comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltMode {
    /// Sign of the horizontal pointer movement since the last event.
    PointerMotion,
    /// Sign of the pointer's horizontal offset from the branch anchor.
    CenterOffset,
}

/// Interactive layer drawn above the petals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Foreground {
    Branches,
    Fish,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Sakura,
    Breeze,
    Koi,
}

impl Variant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sakura" => Some(Variant::Sakura),
            "breeze" => Some(Variant::Breeze),
            "koi" => Some(Variant::Koi),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Sakura => "sakura",
            Variant::Breeze => "breeze",
            Variant::Koi => "koi",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub hit_region: HitRegion,
    pub tilt_mode: TiltMode,
    pub ray_flicker: bool,
    pub foreground: Foreground,
}

impl SceneConfig {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Sakura => Self {
                hit_region: HitRegion::Box {
                    width: BRANCH_SIZE,
                    height: BRANCH_SIZE,
                },
                tilt_mode: TiltMode::PointerMotion,
                ray_flicker: false,
                foreground: Foreground::Branches,
            },
            Variant::Breeze => Self {
                hit_region: HitRegion::Radius(BRANCH_HIT_RADIUS),
                tilt_mode: TiltMode::CenterOffset,
                ray_flicker: true,
                foreground: Foreground::Branches,
            },
            Variant::Koi => Self {
                hit_region: HitRegion::Radius(BRANCH_HIT_RADIUS),
                tilt_mode: TiltMode::CenterOffset,
                ray_flicker: true,
                foreground: Foreground::Fish,
            },
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}
