use crate::dom;
use crate::particles::{fall_keyframes_css, generate_particles, scoped_animation_name};
use anyhow::anyhow;
use std::sync::atomic::{AtomicU32, Ordering};
use web_sys as web;

static NEXT_FIELD_ID: AtomicU32 = AtomicU32::new(1);

/// A mounted batch of falling particles.
///
/// The container holds its own `<style>` with the keyframes, so removing the
/// container on drop removes the animation definition with it.
pub struct ParticleField {
    container: web::Element,
    id: u32,
}

impl ParticleField {
    pub fn mount(document: &web::Document, parent: &web::Element) -> anyhow::Result<Self> {
        let id = NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed);
        let animation_name = scoped_animation_name(id);

        let container = dom::create_element(document, "div")?;
        container
            .set_attribute("data-particle-field", &id.to_string())
            .map_err(|e| anyhow!("{:?}", e))?;
        _ = container.set_attribute("aria-hidden", "true");

        let style = dom::create_element(document, "style")?;
        style.set_text_content(Some(&fall_keyframes_css(&animation_name)));
        dom::append(&container, &style)?;

        // Built detached, then attached once.
        let particles = generate_particles(&mut rand::thread_rng());
        for particle in &particles {
            let el = dom::create_element(document, "div")?;
            el.set_attribute("style", &particle.inline_style(&animation_name))
                .map_err(|e| anyhow!("{:?}", e))?;
            dom::append(&container, &el)?;
        }
        dom::append(parent, &container)?;

        log::info!(
            "[particles] field {} mounted with {} particles",
            id,
            particles.len()
        );
        Ok(Self { container, id })
    }
}

impl Drop for ParticleField {
    fn drop(&mut self) {
        self.container.remove();
        log::info!("[particles] field {} removed", self.id);
    }
}
