// Shared tuning constants for the background animation and pointer effects.
// Everything here is plain data so host-side tests can include it directly.

// Particle field
pub const MAX_PARTICLES: usize = 120;
pub const AREA_PER_PARTICLE: f64 = 14_000.0; // viewport px² per particle
pub const INITIAL_SPEED_MAX: f32 = 0.3; // per axis, px per frame
pub const REDUCED_MOTION_FACTOR: f32 = 0.3;

// Rendering
pub const NODE_RADIUS: f32 = 1.2;
pub const NODE_ALPHA: f32 = 0.7;
pub const EDGE_MAX_DISTANCE: f32 = 140.0;
pub const EDGE_MAX_DISTANCE_SQ: f32 = EDGE_MAX_DISTANCE * EDGE_MAX_DISTANCE;
pub const EDGE_MAX_ALPHA: f32 = 0.25;
pub const EDGE_WIDTH: f32 = 1.0;
pub const NODE_RGB: [u8; 3] = [43, 108, 255]; // nodes and edges share the blue

// Cursor ring smoothing, fraction of the remaining distance per frame
pub const RING_EASE: f32 = 0.15;

// Magnetic hover pull
pub const MAGNETIC_STRENGTH: f32 = 0.25;

// Card tilt
pub const TILT_MAX_DEG: f32 = 10.0;
pub const TILT_PERSPECTIVE_PX: f32 = 900.0;
pub const TILT_LIFT_PX: f32 = 10.0;

// Anchor scrolling gap below the fixed header
pub const SCROLL_HEADER_GAP_PX: f64 = 8.0;

// Reveal observer visibility threshold
pub const REVEAL_THRESHOLD: f64 = 0.12;
