/// DOM hooks the page markup provides.
///
/// Element ids, selectors and CSS class names live here so the wiring modules
/// only talk in terms of intent.
// Background canvas
pub const CANVAS_ID: &str = "neural-canvas";

// Theme toggle
pub const MODE_TOGGLE_ID: &str = "modeToggle";

// Custom cursor
pub const CURSOR_DOT_SELECTOR: &str = ".cursor-dot";
pub const CURSOR_RING_SELECTOR: &str = ".cursor-ring";
pub const CURSOR_ACTIVE_CLASS: &str = "active";
pub const CURSOR_HOVER_SELECTORS: [&str; 4] = ["a", "button", ".tilt", ".magnetic"];

// Pointer effects
pub const MAGNETIC_SELECTOR: &str = ".magnetic";
pub const TILT_SELECTOR: &str = ".tilt";

// Scrolling
pub const HEADER_SELECTOR: &str = ".site-header";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEALED_CLASS: &str = "in";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_STATUS_ID: &str = "form-status";

// Media queries
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
