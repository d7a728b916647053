#![cfg(target_arch = "wasm32")]
use crate::lifecycle::Lifecycle;
use crate::page::Page;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

pub mod audio;
mod config;
pub mod constants;
mod controls;
mod dom;
pub mod field;
mod lifecycle;
pub mod overlay;
mod page;
mod particles;
pub mod playback;

thread_local! {
    static PAGE: RefCell<Lifecycle<Page>> = const { RefCell::new(Lifecycle::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("greeting-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    mount()?;
    // bfcache: leaving tears down, coming back mounts again
    dom::add_window_listener("pagehide", || {
        unmount_page();
    });
    dom::add_window_listener("pageshow", || {
        if let Err(e) = mount() {
            log::error!("[page] remount error: {:?}", e);
        }
    });
    Ok(())
}

fn mount() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = page::read_config(&document);
    PAGE.with(|p| -> anyhow::Result<()> {
        let mut lifecycle = p.borrow_mut();
        if lifecycle.is_active() {
            log::debug!("[page] already mounted");
            return Ok(());
        }
        lifecycle.activate(|| Page::mount(&document, &config))?;
        log::info!("[page] mount #{}", lifecycle.activations());
        Ok(())
    })
}

/// Mount the page effects if they are not already mounted.
#[wasm_bindgen]
pub fn mount_page() -> Result<(), JsValue> {
    mount().map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// Tear down particles and audio. Returns whether anything was mounted.
#[wasm_bindgen]
pub fn unmount_page() -> bool {
    PAGE.with(|p| p.borrow_mut().deactivate())
}
