use crate::field::Field1D;
use crate::grid::Grid1D;
use std::io::prelude::*;

/// Write one `x, u` row per grid point.
pub fn write_csv_1d<P: AsRef<std::path::Path>>(
    grid: &Grid1D,
    field: &Field1D,
    path: &P,
) {
    debug_assert_eq!(field.len(), grid.n_points());
    log::info!("Writing: {:?}", path.as_ref());
    let mut output =
        std::io::BufWriter::new(std::fs::File::create(path).unwrap());
    for (x, u) in grid.coords().zip(field.values()) {
        writeln!(output, "{x}, {u}").unwrap();
    }
}
