use burgers1d::image::Image1D;
use burgers1d::sim_1d_example::Args;
use burgers1d::solver::burgers_simulation;

fn main() {
    let args = Args::cli_parse("burgers_1d_image");
    let params = args.params();

    let sim = burgers_simulation(&params, args.ic_type(), args.chunk_size)
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        });
    let grid = *sim.grid();

    let num_steps = sim.num_steps();
    let steps_per_line =
        num_steps.div_ceil(args.lines.max(1)).max(1);
    let n_lines = num_steps / steps_per_line + 1;

    let mut img = Image1D::new(args.width as u32, n_lines as u32);
    img.add_profile(0, &grid, &sim.current_snapshot().field);

    for snapshot in sim {
        if snapshot.step % steps_per_line == 0 {
            let line = (snapshot.step / steps_per_line) as u32;
            img.add_profile(line, &grid, &snapshot.field);
        }
    }

    let path = args.image_path("burgers_1d_image");
    img.write(&path);
    println!("Wrote: {:?}", path);
}
