//! Application configuration constants.

/// Supported image file extensions when scanning project capture directories.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Height of the floating navigation bar in logical pixels. Scroll targets
/// are offset by this so section headings land below the bar.
pub const NAVBAR_HEIGHT: f32 = 64.0;

/// Fraction of a section's height that must be inside the viewport before the
/// section counts as visible. Kept permissive so reveal animations start while
/// the section is still mostly off screen.
pub const REVEAL_VISIBLE_FRACTION: f32 = 0.1;

/// Section that is active before any scrolling has happened.
pub const HOME_SECTION: &str = "home";

/// Smooth-scroll tween duration and tick interval in milliseconds.
pub const SCROLL_TWEEN_MS: u64 = 420;
pub const SCROLL_TICK_MS: u64 = 16;

/// Number of decoded images kept in the LRU cache. Sized for the largest
/// project capture set with room to spare.
pub const IMAGE_CACHE_CAPACITY: usize = 24;

/// Decorative background: floating dot count and the drifting code glyphs.
pub const BACKGROUND_DOT_COUNT: usize = 50;
pub const BACKGROUND_GLYPHS: [&str; 8] = ["{}", "</>", "()", "[]", "=>", "!=", "++", "--"];

/// Delay before a submitted contact form returns to its idle state.
pub const FORM_RESET_DELAY_MS: u64 = 2000;

/// How long the "copied" hint stays up after copying the contact email.
pub const COPY_FEEDBACK_MS: u64 = 1500;
