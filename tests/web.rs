#![cfg(target_arch = "wasm32")]

use portfolio_particles::surface::Surface;
use portfolio_particles::web::{CanvasSurface, Portfolio};
use portfolio_particles::{Color, FieldConfig, ParticleField};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn canvas_surface_draws_and_tracks_attachment() {
    let canvas = mount_canvas("surface-test");
    let mut surface = CanvasSurface::from_canvas(canvas.clone()).unwrap().unwrap();
    surface.resize(64, 48);
    assert_eq!((canvas.width(), canvas.height()), (64, 48));

    let color = Color::from_u32(FieldConfig::COLOR).with_opacity(0.5);
    surface.clear(64.0, 48.0).unwrap();
    surface.fill_circle([10.0, 10.0], 2.0, color).unwrap();
    surface.stroke_line([0.0, 0.0], [20.0, 20.0], 1.0, color).unwrap();
    assert!(surface.is_attached());

    canvas.remove();
    assert!(!surface.is_attached());
}

#[wasm_bindgen_test]
fn field_renders_to_canvas() {
    let canvas = mount_canvas("field-test");
    let mut surface = CanvasSurface::from_canvas(canvas.clone()).unwrap().unwrap();
    surface.resize(200, 100);

    let mut field = ParticleField::new(FieldConfig::default(), 200.0, 100.0);
    field.initialize(&mut rand::thread_rng(), 25, 200.0, 100.0);
    for _ in 0..10 {
        field.tick(&mut surface).unwrap();
    }
    assert_eq!(field.particles().len(), 25);
    canvas.remove();
}

#[wasm_bindgen_test]
fn portfolio_starts_backdrop() {
    let canvas = mount_canvas("particles-bg");
    let mut portfolio = Portfolio::start_with_count("particles-bg", 30).unwrap();
    assert_eq!(portfolio.particle_count(), 30);
    assert!(portfolio.is_animating());

    portfolio.stop();
    assert!(!portfolio.is_animating());
    canvas.remove();
}

async fn next_frame() {
    let window = web_sys::window().unwrap();
    let frame = js_sys::Promise::new(&mut |resolve, _reject| {
        window.request_animation_frame(&resolve).unwrap();
    });
    JsFuture::from(frame).await.unwrap();
}

#[wasm_bindgen_test]
async fn removing_canvas_stops_animation() {
    let canvas = mount_canvas("particles-detach");
    let portfolio = Portfolio::start_with_count("particles-detach", 10).unwrap();
    next_frame().await;
    assert!(portfolio.is_animating());

    canvas.remove();
    next_frame().await;
    next_frame().await;
    assert!(!portfolio.is_animating());
}

#[wasm_bindgen_test]
fn missing_canvas_is_not_fatal() {
    let portfolio = Portfolio::start("no-such-canvas").unwrap();
    assert_eq!(portfolio.particle_count(), 0);
    assert!(!portfolio.is_animating());
}
