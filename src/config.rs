use crate::constants::{AUDIO_SRC_ATTR, DEFAULT_AUDIO_SRC, PARTICLE_ROOT_ATTR};

/// Runtime settings for one page mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub audio_src: String,
    /// Element id to mount the particle field into; `<body>` when unset.
    pub particle_root_id: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            audio_src: DEFAULT_AUDIO_SRC.to_string(),
            particle_root_id: None,
        }
    }
}

impl PageConfig {
    /// Build from attribute overrides; blank values keep the default.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(src) = non_blank(lookup(AUDIO_SRC_ATTR), AUDIO_SRC_ATTR) {
            config.audio_src = src;
        }
        config.particle_root_id = non_blank(lookup(PARTICLE_ROOT_ATTR), PARTICLE_ROOT_ATTR);
        config
    }

    /// The configured particle root if the page has it; `None` means `<body>`.
    pub fn particle_root(&self, exists: impl Fn(&str) -> bool) -> Option<&str> {
        let id = self.particle_root_id.as_deref()?;
        if exists(id) {
            return Some(id);
        }
        log::warn!(
            "[config] ignoring {}=\"{}\": no such element, using <body>",
            PARTICLE_ROOT_ATTR,
            id
        );
        None
    }
}

fn non_blank(value: Option<String>, attr: &str) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        log::warn!("[config] ignoring blank {}", attr);
        return None;
    }
    Some(trimmed.to_string())
}
