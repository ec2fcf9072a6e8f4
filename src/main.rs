//! Ball Pit entry point
//!
//! Thin presentation layer: window, frame clock, input translation and
//! drawing. All game rules live in `ballpit::sim`; this loop only feeds the
//! engine interaction calls plus one `update(dt)` per frame and draws what
//! it reads back.

use std::path::PathBuf;
use std::sync::OnceLock;

use macroquad::prelude::*;
use ::rand::SeedableRng;
use rand_pcg::Pcg32;

use ballpit::consts::MAX_FRAME_DT;
use ballpit::settings::Settings;
use ballpit::sim::{seed_field, Rgb, SimState};

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Settings are loaded once, before the window opens; the optional first
/// CLI argument names a JSON settings file.
fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| {
        let path = std::env::args().nth(1).map(PathBuf::from);
        match Settings::load(path.as_deref()) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("ballpit: {err}");
                std::process::exit(1);
            }
        }
    })
}

fn window_conf() -> Conf {
    env_logger::init();
    let settings = settings();
    Conf {
        window_title: "Ball Pit".to_owned(),
        window_width: settings.width as i32,
        window_height: settings.height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

fn fill_color(color: Rgb) -> Color {
    Color::from_rgba(color.r, color.g, color.b, 255)
}

#[macroquad::main(window_conf)]
async fn main() {
    let settings = settings();

    let seed = settings
        .seed
        .unwrap_or_else(|| macroquad::miniquad::date::now() as u64);
    log::info!("rng seed {seed}");
    let mut rng = Pcg32::seed_from_u64(seed);

    let mut sim = match SimState::from_settings(settings) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("ballpit: {err}");
            std::process::exit(1);
        }
    };
    seed_field(&mut sim, settings, &mut rng);

    let min_frame_time = 1.0 / settings.target_fps as f32;

    loop {
        // Follow window resizes; the delete zone stays in the top-right
        let (sw, sh) = (screen_width(), screen_height());
        if sw != sim.width() || sh != sim.height() {
            sim.set_screen_size(sw, sh);
        }

        // Hold the left button to suck balls at the cursor, release to spit
        // the oldest one back out
        let (mx, my) = mouse_position();
        let cursor = ::glam::Vec2::new(mx, my);
        if is_mouse_button_down(MouseButton::Left) {
            sim.pickup(cursor, settings.suck_radius);
        }
        if is_mouse_button_released(MouseButton::Left) {
            sim.release(cursor, ::glam::Vec2::ZERO);
        }

        let dt = get_frame_time().min(MAX_FRAME_DT);
        sim.update(dt);

        clear_background(WHITE);

        let (zone, side) = sim.delete_zone();
        draw_rectangle(zone.x, zone.y, side, side, Color::from_rgba(255, 200, 200, 150));
        let label = measure_text("delete", None, 20, 1.0);
        draw_text(
            "delete",
            zone.x + (side - label.width) / 2.0,
            28.0,
            20.0,
            BLACK,
        );

        for ball in sim.balls() {
            draw_circle(ball.pos.x, ball.pos.y, ball.radius, fill_color(ball.color));
            // Outline for visibility on the white background
            draw_circle_lines(ball.pos.x, ball.pos.y, ball.radius, 1.0, BLACK);
        }

        if is_mouse_button_down(MouseButton::Left) {
            draw_circle_lines(mx, my, settings.suck_radius, 2.0, GRAY);
        }

        let hud = Color::from_rgba(50, 50, 50, 255);
        draw_text(
            &format!("inventory: {}", sim.inventory_len()),
            10.0,
            24.0,
            24.0,
            hud,
        );
        draw_text(
            &format!("balls on field: {}", sim.balls().len()),
            10.0,
            48.0,
            24.0,
            hud,
        );
        draw_text(
            "hold LMB to suck balls, release to spit",
            10.0,
            sh - 10.0,
            24.0,
            hud,
        );

        // Cheap frame cap; vsync usually beats us to it
        let frame_time = get_frame_time();
        if frame_time < min_frame_time {
            std::thread::sleep(std::time::Duration::from_secs_f32(
                min_frame_time - frame_time,
            ));
        }

        next_frame().await;
    }
}
