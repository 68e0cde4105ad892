//! Pushes a lattice of points through a scale-then-translate transform
//! and uses the inverse to check the round trip, drawing both.

use pr::prelude::*;
use pr::util::ppm::save_ppm;

fn main() {
    let (w, h) = (400, 400);

    // Unit square [-1, 1]² mapped to the middle of the canvas
    let to_screen = translate(w as f64 / 2.0, h as f64 / 2.0, 0.0)
        .multiply(&scale(150.0, 150.0, 1.0))
        .unwrap();
    let to_world = to_screen.inverse().unwrap();

    let mut canvas = Canvas::new(w, h);

    for i in 0..=10 {
        for j in 0..=10 {
            let p = point(i as f64 / 5.0 - 1.0, j as f64 / 5.0 - 1.0, 0.0);
            let s = to_screen.mul_tuple(&p).unwrap();

            // The inverse must take the screen point back to p
            let back = to_world.mul_tuple(&s).unwrap();
            assert!(back.approx_eq(&p));

            let shade = 0.3 + (p.x * p.y).abs() * 0.7;
            canvas.put_pixel(
                s.x as usize,
                s.y as usize,
                color(shade, shade, 1.0),
            );
        }
    }

    save_ppm("lattice.ppm", &canvas).unwrap();
}
