/// Particle field and audio tuning constants.
///
/// These keep magic numbers out of the DOM code; the particle ranges are the
/// bounds every generated particle is guaranteed to sit within.
// Particle batch
pub const PARTICLE_COUNT: usize = 100;

// Horizontal start position (percent of viewport width)
pub const PARTICLE_LEFT_MIN_PERCENT: f32 = 0.0;
pub const PARTICLE_LEFT_MAX_PERCENT: f32 = 100.0;

// Start offset of the fall animation (seconds)
pub const PARTICLE_DELAY_MIN_SEC: f32 = 0.0;
pub const PARTICLE_DELAY_MAX_SEC: f32 = 5.0;

// Edge length in whole pixels; the upper bound is exclusive when sampling
pub const PARTICLE_SIZE_MIN_PX: u32 = 6;
pub const PARTICLE_SIZE_MAX_PX: u32 = 14;

pub const PARTICLE_OPACITY_MIN: f32 = 0.3;
pub const PARTICLE_OPACITY_MAX: f32 = 1.0;

// Particles start just above the viewport
pub const PARTICLE_TOP_PERCENT: f32 = -5.0;

// One full fall takes this long, then repeats
pub const FALL_DURATION_SEC: f32 = 10.0;
pub const FALL_MIDPOINT_OPACITY: f32 = 0.7;
pub const FALL_ANIMATION_PREFIX: &str = "greeting-fall";

pub const PARTICLE_PALETTE: [&str; 6] = [
    "#ff79c6", // pink
    "#bd93f9", // purple
    "#8be9fd", // cyan
    "#50fa7b", // green
    "#ffb86c", // orange
    "#ff5555", // red
];

// Audio
pub const DEFAULT_AUDIO_SRC: &str = "/birthday-song.mp3";
pub const AUDIO_ERROR_TEXT: &str = "Unable to play audio";

// Host page element ids
pub const MUSIC_TOGGLE_ID: &str = "music-toggle";
pub const AUDIO_ERROR_ID: &str = "audio-error";

// Optional overrides read from <body data-*>
pub const AUDIO_SRC_ATTR: &str = "data-audio-src";
pub const PARTICLE_ROOT_ATTR: &str = "data-particle-root";
