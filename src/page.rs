use crate::audio::AudioPlayer;
use crate::config::PageConfig;
use crate::controls::controls_view;
use crate::dom;
use crate::field::ParticleField;
use crate::lifecycle::Teardown;
use crate::overlay::Controls;
use crate::playback::PlaybackState;
use std::rc::Rc;
use web_sys as web;

/// Everything the greeting page mounts: particles, audio and the toggle wiring.
pub struct Page {
    field: ParticleField,
    player: Rc<AudioPlayer>,
    toggle_click: dom::Listener,
}

impl Page {
    pub fn mount(document: &web::Document, config: &PageConfig) -> anyhow::Result<Self> {
        let controls = Controls::find(document)?;
        let initial = PlaybackState::new();
        controls.apply(&controls_view(&initial));

        let view_controls = controls.clone();
        let player = Rc::new(AudioPlayer::new(
            &config.audio_src,
            Rc::new(move |state: &PlaybackState| view_controls.apply(&controls_view(state))),
        )?);

        let player_click = player.clone();
        let toggle_click = dom::Listener::new(&controls.button, "click", move || {
            player_click.toggle();
        })?;

        let parent = particle_parent(document, config)?;
        let field = ParticleField::mount(document, &parent)?;

        log::info!("[page] mounted");
        Ok(Self {
            field,
            player,
            toggle_click,
        })
    }
}

impl Teardown for Page {
    fn teardown(self) {
        let Page {
            field,
            player,
            toggle_click,
        } = self;
        drop(toggle_click);
        drop(field);
        player.release();
        log::info!("[page] unmounted");
    }
}

fn particle_parent(document: &web::Document, config: &PageConfig) -> anyhow::Result<web::Element> {
    let root = config.particle_root(|id| document.get_element_by_id(id).is_some());
    match root {
        Some(id) => dom::element_by_id(document, id),
        None => document
            .body()
            .map(web::Element::from)
            .ok_or_else(|| anyhow::anyhow!("no <body>")),
    }
}

pub fn read_config(document: &web::Document) -> PageConfig {
    let body = document.body();
    PageConfig::from_attributes(|name| body.as_ref().and_then(|b| b.get_attribute(name)))
}
