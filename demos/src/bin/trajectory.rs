//! Plots the arc of a projectile onto a canvas and saves it as a PPM.

use pr::prelude::*;
use pr::util::ppm::save_ppm;

struct Projectile {
    pos: Tuple,
    vel: Tuple,
}

fn main() {
    let start = point(0.0, 1.0, 0.0);
    let vel = vector(1.0, 1.8, 0.0).normalize().unwrap() * 11.25;
    let mut proj = Projectile { pos: start, vel };

    let gravity = vector(0.0, -0.1, 0.0);
    let wind = vector(-0.01, 0.0, 0.0);

    let mut canvas = Canvas::new(900, 550);
    let ink = color(1.0, 0.7, 0.2);

    while proj.pos.y > 0.0 {
        plot(&mut canvas, &proj.pos, ink);
        proj.pos = proj.pos + proj.vel;
        proj.vel = proj.vel + gravity + wind;
    }

    save_ppm("trajectory.ppm", &canvas).unwrap();
}

/// Marks the canvas pixel under `pos`, y-flipped so that up is up.
fn plot(canvas: &mut Canvas, pos: &Tuple, ink: Color) {
    let (x, y) = (pos.x, canvas.height() as f64 - pos.y);
    if x >= 0.0
        && y >= 0.0
        && (x as usize) < canvas.width()
        && (y as usize) < canvas.height()
    {
        canvas.put_pixel(x as usize, y as usize, ink);
    }
}
