//! Visual theming: background overlays and particle behavior.

/// Named visual mood driving background and particle choice.
///
/// `Hot` carries a background mapping but no classifier rule produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Clear,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
    Foggy,
    Hot,
    Night,
}

impl Theme {
    /// Lowercase identifier, as used in class names and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Stormy => "stormy",
            Self::Snowy => "snowy",
            Self::Foggy => "foggy",
            Self::Hot => "hot",
            Self::Night => "night",
        }
    }

    /// Parse a theme identifier; anything unrecognized maps to `Clear`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "clear" => Self::Clear,
            "cloudy" => Self::Cloudy,
            "rainy" => Self::Rainy,
            "stormy" => Self::Stormy,
            "snowy" => Self::Snowy,
            "foggy" => Self::Foggy,
            "hot" => Self::Hot,
            "night" => Self::Night,
            _ => Self::Clear,
        }
    }

    /// Background overlay for this theme.
    pub fn background(self) -> BackgroundSpec {
        match self {
            Self::Clear => BackgroundSpec::new(70, 55, 75, 15, Rgba::new(192, 132, 252, 0.18)),
            Self::Cloudy => BackgroundSpec::new(80, 55, 50, 0, Rgba::new(167, 139, 250, 0.13)),
            Self::Rainy => BackgroundSpec::new(55, 75, 25, 55, Rgba::new(129, 140, 248, 0.15)),
            Self::Stormy => BackgroundSpec::new(75, 55, 50, 25, Rgba::new(109, 40, 217, 0.20)),
            Self::Snowy => BackgroundSpec::new(65, 55, 50, 0, Rgba::new(221, 214, 254, 0.12)),
            Self::Foggy => BackgroundSpec::new(100, 75, 50, 50, Rgba::new(196, 181, 253, 0.09)),
            Self::Hot => BackgroundSpec::new(65, 50, 80, 10, Rgba::new(244, 114, 182, 0.20)),
            Self::Night => BackgroundSpec::new(55, 55, 50, 0, Rgba::new(109, 40, 217, 0.18)),
        }
    }
}

/// An RGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// Every overlay fades to transparent at the same stop.
const FADE_STOP: u8 = 65;

/// Radial-gradient background overlay: a colored ellipse fading out.
///
/// Radii and center positions are percentages of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundSpec {
    pub radius_x: u8,
    pub radius_y: u8,
    pub center_x: u8,
    pub center_y: u8,
    pub color: Rgba,
    pub fade: u8,
}

impl BackgroundSpec {
    const fn new(radius_x: u8, radius_y: u8, center_x: u8, center_y: u8, color: Rgba) -> Self {
        Self {
            radius_x,
            radius_y,
            center_x,
            center_y,
            color,
            fade: FADE_STOP,
        }
    }

    /// CSS form for sinks that apply the overlay as a gradient.
    pub fn css(&self) -> String {
        format!(
            "radial-gradient(ellipse {}% {}% at {}% {}%, rgba({},{},{},{}) 0%, transparent {}%)",
            self.radius_x,
            self.radius_y,
            self.center_x,
            self.center_y,
            self.color.red,
            self.color.green,
            self.color.blue,
            self.color.alpha,
            self.fade
        )
    }
}

/// Decorative particle behavior attached to a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParticleStyle {
    #[default]
    Default,
    Rain,
    Snow,
}

impl ParticleStyle {
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Rain => "rain",
            Self::Snow => "snow",
        }
    }

    /// Animation parameters for this style.
    ///
    /// Pair fields are half-open `[lo, hi)` sampling bounds; drift is
    /// horizontal, fall is vertical, streak is the trail length rain
    /// drops are drawn with.
    pub fn config(self) -> ParticleConfig {
        match self {
            Self::Default => ParticleConfig {
                count: 50,
                size: (0.5, 2.0),
                drift: (-0.15, 0.15),
                fall: (0.1, 0.5),
                opacity: (0.1, 0.6),
                streak: (0.0, 0.0),
            },
            Self::Rain => ParticleConfig {
                count: 120,
                size: (0.5, 2.0),
                drift: (-0.5, 0.5),
                fall: (4.0, 12.0),
                opacity: (0.1, 0.6),
                streak: (8.0, 23.0),
            },
            Self::Snow => ParticleConfig {
                count: 80,
                size: (1.0, 5.0),
                drift: (-0.15, 0.15),
                fall: (0.3, 1.8),
                opacity: (0.1, 0.6),
                streak: (0.0, 0.0),
            },
        }
    }
}

/// Sampling bounds for one particle system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub size: (f32, f32),
    pub drift: (f32, f32),
    pub fall: (f32, f32),
    pub opacity: (f32, f32),
    pub streak: (f32, f32),
}
