use crate::constants::*;
use rand::Rng;

/// One decorative falling dot. Generated once per mount and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left_percent: f32,
    pub delay_sec: f32,
    pub size_px: u32,
    pub color: &'static str,
    pub opacity: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let left_percent = PARTICLE_LEFT_MIN_PERCENT
            + rng.gen::<f32>() * (PARTICLE_LEFT_MAX_PERCENT - PARTICLE_LEFT_MIN_PERCENT);
        let delay_sec = PARTICLE_DELAY_MIN_SEC
            + rng.gen::<f32>() * (PARTICLE_DELAY_MAX_SEC - PARTICLE_DELAY_MIN_SEC);
        let size_px = rng.gen_range(PARTICLE_SIZE_MIN_PX..PARTICLE_SIZE_MAX_PX);
        let color = PARTICLE_PALETTE[rng.gen_range(0..PARTICLE_PALETTE.len())];
        let opacity =
            PARTICLE_OPACITY_MIN + rng.gen::<f32>() * (PARTICLE_OPACITY_MAX - PARTICLE_OPACITY_MIN);
        Self {
            left_percent,
            delay_sec,
            size_px,
            color,
            opacity,
        }
    }

    /// Inline CSS for this particle's element, animated by `animation_name`.
    pub fn inline_style(&self, animation_name: &str) -> String {
        format!(
            "position:fixed;pointer-events:none;left:{:.3}%;top:{}%;width:{}px;height:{}px;\
             background-color:{};border-radius:50%;animation:{} {}s linear {:.3}s infinite;\
             opacity:{:.3};",
            self.left_percent,
            PARTICLE_TOP_PERCENT,
            self.size_px,
            self.size_px,
            self.color,
            animation_name,
            FALL_DURATION_SEC,
            self.delay_sec,
            self.opacity,
        )
    }
}

/// Generate the full particle batch for one mount.
pub fn generate_particles<R: Rng + ?Sized>(rng: &mut R) -> Vec<Particle> {
    (0..PARTICLE_COUNT).map(|_| Particle::random(rng)).collect()
}

// Keyframe names are global in CSS, so each mounted field gets its own.
#[inline]
pub fn scoped_animation_name(field_id: u32) -> String {
    format!("{}-{}", FALL_ANIMATION_PREFIX, field_id)
}

/// Keyframes for the fall: drop one viewport height with a full turn while
/// fading out through the midpoint opacity.
pub fn fall_keyframes_css(animation_name: &str) -> String {
    format!(
        "@keyframes {name} {{\n  \
         0% {{ transform: translateY(0) rotate(0deg); opacity: 1; }}\n  \
         50% {{ opacity: {mid}; }}\n  \
         100% {{ transform: translateY(100vh) rotate(360deg); opacity: 0; }}\n}}\n",
        name = animation_name,
        mid = FALL_MIDPOINT_OPACITY,
    )
}
