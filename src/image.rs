use crate::field::Field1D;
use crate::grid::Grid1D;

/// Velocity range mapped onto the gradient, the demo plot axes.
pub const PLOT_RANGE: (f64, f64) = (-1.5, 1.5);

/// Space-time diagram: one gradient-colored row per sampled step.
pub struct Image1D {
    img_buffer: image::RgbImage,
}

impl Image1D {
    pub fn new(width: u32, lines: u32) -> Self {
        Image1D {
            img_buffer: image::RgbImage::new(width, lines),
        }
    }

    /// Values already sampled at pixel positions, one per column.
    pub fn add_line(&mut self, l: u32, v: &[f64]) {
        debug_assert!(l < self.img_buffer.height());
        debug_assert_eq!(v.len(), self.img_buffer.width() as usize);
        let gradient = colorous::TURBO;
        let (lo, hi) = PLOT_RANGE;
        for x in 0..self.img_buffer.width() {
            let r = ((v[x as usize] - lo) / (hi - lo)).clamp(0.0, 1.0);
            let c = gradient.eval_continuous(r);
            self.img_buffer.put_pixel(x, l, image::Rgb(c.as_array()));
        }
    }

    /// Sample a field across the image width by linear interpolation,
    /// so the pixel width need not match the grid size.
    pub fn add_profile(&mut self, l: u32, grid: &Grid1D, field: &Field1D) {
        let width = self.img_buffer.width();
        let span = 2.0 * grid.half_width();
        let v: Vec<f64> = (0..width)
            .map(|px| {
                let x = -grid.half_width()
                    + span * px as f64 / (width - 1).max(1) as f64;
                grid.interp(field.values(), x)
            })
            .collect();
        self.add_line(l, &v);
    }

    pub fn write<F: AsRef<std::path::Path>>(self, s: &F) {
        self.img_buffer.save(s).expect("Couldn't save image");
    }
}
