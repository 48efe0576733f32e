// TRANSFORM
/// cos(30°), the vertical foreshortening of the simulated elevated camera.
pub const ISOMETRIC_SCALE: f64 = 0.866_025_403_784_438_6;
/// sin(30°), how much a circle lying on the pitch is flattened when seen from the simulated camera elevation.
pub const GROUND_PROJECTION: f64 = 0.5;
pub const ISOMETRIC_SHEAR: f64 = 0.5;
pub const DEPTH_FACTOR: f64 = 0.3;
pub const DEPTH_LIFT_PIXELS: f64 = 50.;
pub const PERSPECTIVE_ANGLE_DEGREES: f64 = 15.;

// MEASUREMENT
/// Distances are reported as a percentage of the frame width and labelled as meters. There is no camera calibration behind this.
pub const DISTANCE_FRAME_WIDTH_SCALE: f64 = 100.;

// RADIUS TOOLS
pub const DEFAULT_INTENSITY: f64 = 0.7;
pub const ELLIPSE_LIGHT_FLATTENING: f64 = 0.35;
pub const CONE_HEIGHT_FACTOR: f64 = 1.5;
/// Radius scale and opacity of each ring of a pressure zone, outermost first.
pub const PRESSURE_ZONE_RINGS: [(f64, f64); 3] = [(1., 0.15), (0.66, 0.3), (0.33, 0.5)];

// LINE TOOLS
pub const ARROW_HEAD_LENGTH: f64 = 14.;
pub const ARROW_HEAD_ANGLE_DEGREES: f64 = 30.;
pub const TRAJECTORY_ARC_HEIGHT_FACTOR: f64 = 0.25;
pub const PASSING_LANE_HALF_WIDTH: f64 = 18.;
