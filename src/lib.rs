#[macro_use]
pub mod utils;

pub mod color;
pub mod config;
pub mod events;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod schedule;
pub mod scroll;
pub mod surface;
pub mod typing;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use color::Color;
pub use config::FieldConfig;
pub use events::{Dispatcher, EventKind, PageEvent};
pub use field::{Link, ParticleField};
pub use particle::Particle;
pub use schedule::{Control, FrameTask, StopHandle, TimedTask};
pub use surface::{DisplayList, DrawCommand, Surface};

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}
