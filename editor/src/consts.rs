use pitch_geometry::Color;

// PLAYER MARKERS
pub const COLOR_TEAM_HOME: Color = Color::from_rgb8(0x25, 0x63, 0xeb);
pub const COLOR_TEAM_AWAY: Color = Color::from_rgb8(0xdc, 0x26, 0x26);
pub const COLOR_POSITION_CORRECT: Color = Color::from_rgb8(0x22, 0xc5, 0x5e);
pub const COLOR_POSITION_INCORRECT: Color = Color::from_rgb8(0xf5, 0x9e, 0x0b);
pub const COLOR_POSITION_UNKNOWN: Color = Color::from_rgb8(0x9c, 0xa3, 0xaf);
pub const PLAYER_MARKER_RADIUS: f64 = 12.;
pub const PLAYER_MARKER_OUTLINE_WIDTH: f64 = 3.;

// HEATMAP
pub const COLOR_HEAT_LOW: Color = Color::from_rgb8(0xff, 0xeb, 0x3b);
pub const COLOR_HEAT_HIGH: Color = Color::from_rgb8(0xf4, 0x43, 0x36);
pub const HEATMAP_BASE_RADIUS: f64 = 40.;
pub const HEATMAP_MAX_OPACITY: f64 = 0.6;

// FORMATION LINES
/// Players closer than this fraction of the frame width along the pitch length belong to the same line.
pub const FORMATION_LINE_GAP_FACTOR: f64 = 0.06;
pub const FORMATION_LINE_OPACITY: f64 = 0.5;
pub const FORMATION_LINE_DASH: [f64; 2] = [6., 4.];

// ANNOTATIONS
pub const ANNOTATION_STROKE_WIDTH: f64 = 3.;
pub const ANNOTATION_FILL_OPACITY: f64 = 0.2;
pub const DISTANCE_DASH: [f64; 2] = [8., 6.];
pub const DISTANCE_ENDPOINT_RADIUS: f64 = 4.;
pub const OFFSIDE_DASH: [f64; 2] = [12., 8.];
pub const SPOTLIGHT_CORE_FRACTION: f64 = 0.35;
/// Opacity of a glow or zone fill at full intensity.
pub const GLOW_MAX_OPACITY: f64 = 0.5;

// LABELS
pub const COLOR_LABEL_TEXT: Color = Color::WHITE;
pub const COLOR_LABEL_BACKGROUND: Color = Color::from_rgba8(0x00, 0x00, 0x00, 0xb3);
pub const LABEL_PADDING: f64 = 4.;
pub const LABEL_OFFSET: f64 = 10.;

// PREVIEW
pub const PREVIEW_OPACITY: f64 = 0.7;
pub const PREVIEW_DASH: [f64; 2] = [5., 5.];
pub const PREVIEW_ORIGIN_RADIUS: f64 = 4.;

// PERSISTENCE
pub const EXPORT_FILE_PREFIX: &str = "match-analysis";
