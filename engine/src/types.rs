use std::fmt;

use thiserror::Error;

/// Errors that can occur while resolving a shape kind from a topic label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeKindError {
    /// The topic label did not name one of the three shape topics
    #[error("topic label {label:?} is not one of: Circle, Square, Triangle")]
    InvalidShapeKind { label: String },
}

/// The three shape topics. Closed set: vertex generation is total over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    /// Resolve a transport topic label ("Circle", "Square", "Triangle")
    pub fn from_topic(label: &str) -> Result<Self, ShapeKindError> {
        match label {
            "Circle" => Ok(ShapeKind::Circle),
            "Square" => Ok(ShapeKind::Square),
            "Triangle" => Ok(ShapeKind::Triangle),
            _ => Err(ShapeKindError::InvalidShapeKind {
                label: label.to_string(),
            }),
        }
    }

    pub fn topic(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.topic())
    }
}

/// Palette token. Part of instance identity and the edge/fill color policy;
/// never influences geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
    Purple,
    Blue,
    Red,
    Green,
    Yellow,
    Cyan,
    Magenta,
    Orange,
}

impl Color {
    /// The render-side RGB code for this palette entry
    pub fn rgb_code(&self) -> &'static str {
        match self {
            Color::Black => "#000000",
            Color::White => "#ffffff",
            Color::Purple => "#c03bff",
            Color::Blue => "#0632ff",
            Color::Red => "#ff2600",
            Color::Green => "#00fa00",
            Color::Yellow => "#fffb00",
            Color::Cyan => "#00fdff",
            Color::Magenta => "#ff41ff",
            Color::Orange => "#ff9500",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "BLACK",
            Color::White => "WHITE",
            Color::Purple => "PURPLE",
            Color::Blue => "BLUE",
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
            Color::Cyan => "CYAN",
            Color::Magenta => "MAGENTA",
            Color::Orange => "ORANGE",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fill style carried by extended samples
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillKind {
    Solid,
    Transparent,
    HorizontalHatch,
    VerticalHatch,
}

impl FillKind {
    /// Normalize the wire value. 0 is solid, 2 and 3 are the hatches;
    /// everything else renders transparent so the mapping stays total.
    pub fn from_wire(value: u8) -> Self {
        match value {
            0 => FillKind::Solid,
            2 => FillKind::HorizontalHatch,
            3 => FillKind::VerticalHatch,
            _ => FillKind::Transparent,
        }
    }

    /// Hatch pattern handed to the renderer, if any
    pub fn hatch(&self) -> Option<&'static str> {
        match self {
            FillKind::Solid | FillKind::Transparent => None,
            FillKind::HorizontalHatch => Some("--"),
            FillKind::VerticalHatch => Some("||"),
        }
    }
}

impl Default for FillKind {
    fn default() -> Self {
        FillKind::Solid
    }
}

/// Identifies one logical animated instance stream: every sample for a
/// kind+color pair is a position of the same moving shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InstanceKey {
    pub kind: ShapeKind,
    pub color: Color,
}

impl InstanceKey {
    pub fn new(kind: ShapeKind, color: Color) -> Self {
        Self { kind, color }
    }
}

impl fmt::Display for InstanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.color)
    }
}
