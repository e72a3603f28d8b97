use crate::types::{Color, FillKind};

/// Edge width of the newest instance in a history
pub const WIDE_EDGE_LINE_WIDTH: u8 = 2;
/// Edge width of older history instances and published shapes
pub const THIN_EDGE_LINE_WIDTH: u8 = 1;

/// Face and edge colors for a shape, as a pure function of its base color
/// and fill kind.
///
/// Solid fills take the base color with a fixed contrasting edge (blue gets
/// red, everything else gets blue). Hatched fills render a white face with
/// the base color as the hatch-line edge. Transparent fills render a white
/// face with the blue accent edge.
///
/// `publisher` is the one special case: a publishing instance always
/// renders with a neutral white outline, whatever the table says.
pub fn face_and_edge_colors(
    color: Color,
    fill: FillKind,
    publisher: bool,
) -> (&'static str, &'static str) {
    let (face, edge) = match fill {
        FillKind::Solid => {
            let edge = if color == Color::Blue {
                Color::Red
            } else {
                Color::Blue
            };
            (color.rgb_code(), edge.rgb_code())
        }
        FillKind::HorizontalHatch | FillKind::VerticalHatch => {
            (Color::White.rgb_code(), color.rgb_code())
        }
        FillKind::Transparent => (Color::White.rgb_code(), Color::Blue.rgb_code()),
    };
    if publisher {
        (face, Color::White.rgb_code())
    } else {
        (face, edge)
    }
}

/// Renderer-facing style for one artifact
#[derive(Clone, Debug, PartialEq)]
pub struct ArtifactStyle {
    pub face_color: &'static str,
    pub edge_color: &'static str,
    pub hatch: Option<&'static str>,
    pub line_width: u8,
    pub z_order: i64,
}

impl ArtifactStyle {
    /// Style for a shape instance
    pub fn shape(color: Color, fill: FillKind, publisher: bool, z_order: i64) -> Self {
        let (face_color, edge_color) = face_and_edge_colors(color, fill, publisher);
        Self {
            face_color,
            edge_color,
            hatch: fill.hatch(),
            line_width: if publisher {
                THIN_EDGE_LINE_WIDTH
            } else {
                WIDE_EDGE_LINE_WIDTH
            },
            z_order,
        }
    }

    /// Style for a gone mark: no face, edge color from the shape's own
    /// policy, drawn just above the shape it overlays
    pub fn gone_mark(color: Color, fill: FillKind, shape_z_order: i64) -> Self {
        let (_, edge_color) = face_and_edge_colors(color, fill, false);
        Self {
            face_color: Color::White.rgb_code(),
            edge_color,
            hatch: None,
            line_width: WIDE_EDGE_LINE_WIDTH,
            z_order: shape_z_order + 1,
        }
    }
}
