use burgers1d::csv::write_csv_1d;
use burgers1d::diagnostics::StabilityCheck;
use burgers1d::sim_1d_example::Args;
use burgers1d::solver::burgers_simulation;

fn main() {
    let args = Args::cli_parse("burgers_1d_csv");
    let params = args.params();

    let sim = burgers_simulation(&params, args.ic_type(), args.chunk_size)
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        });
    let grid = *sim.grid();

    let num_steps = sim.num_steps();
    let steps_per_frame =
        num_steps.div_ceil(args.frames.max(1)).max(1);

    write_csv_1d(&grid, &sim.current_snapshot().field, &args.frame_name(0));

    // abort the export as soon as the field blows up
    let check = StabilityCheck::default();
    for snapshot in sim {
        if let Err(e) = check.check(&snapshot) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        if snapshot.step % steps_per_frame == 0 {
            let frame = snapshot.step / steps_per_frame;
            write_csv_1d(&grid, &snapshot.field, &args.frame_name(frame));
        }
    }
}
