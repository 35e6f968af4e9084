use crate::build_info;
use crate::config::Parameters;
use crate::initial_conditions::{ClapICType, ICType};
use clap::Parser;
use std::path::PathBuf;

/// burgers1d demo executable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory for output files, will be created.
    /// WARNING, if this directory
    /// already exists, current contents will be removed.
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Chunk size to use for parallelism.
    #[arg(short, long, default_value = "1000")]
    pub chunk_size: usize,

    /// The number of threads to use.
    #[arg(short, long, default_value = "8")]
    pub threads: usize,

    /// Kinematic viscosity.
    #[arg(long, default_value = "0.1")]
    pub nu: f64,

    /// Domain half-width, the grid covers [-half_width, half_width).
    #[arg(long, default_value = "10.0")]
    pub half_width: f64,

    /// Spatial step size.
    #[arg(long, default_value = "0.1")]
    pub dx: f64,

    /// Time step.
    #[arg(long, default_value = "0.01")]
    pub dt: f64,

    /// Total simulated time.
    #[arg(long, default_value = "5.0")]
    pub total_time: f64,

    /// Initial condition.
    #[arg(long, value_enum, default_value = "gaussian-pair")]
    pub ic: ClapICType,

    /// Dial for the initial condition, meaning depends on the type.
    #[arg(long, default_value = "1.0")]
    pub ic_dial: f64,

    /// Width in pixels of image output.
    #[arg(short, long, default_value = "1000")]
    pub width: usize,

    /// How many lines the output image should have, at most.
    #[arg(short, long, default_value = "500")]
    pub lines: usize,

    /// How many profile frames to export, at most.
    #[arg(long, default_value = "100")]
    pub frames: usize,
}

impl Args {
    pub fn cli_parse(name: &str) -> Self {
        env_logger::init();
        println!("EXAMPLE: {}", name);
        println!("BUILD: {}", build_info::report(name));
        let args = Args::parse();

        let output_dir = args.output_dir.to_str().unwrap();
        let _ = std::fs::remove_dir_all(output_dir);
        std::fs::create_dir_all(output_dir).unwrap();

        #[cfg(feature = "profile-with-puffin")]
        {
            let server_addr =
                format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
            let server = puffin_http::Server::new(&server_addr).unwrap();
            // keep serving for the life of the process
            std::mem::forget(server);
            profiling::puffin::set_scopes_on(true);
        }

        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .unwrap();

        args
    }

    pub fn params(&self) -> Parameters {
        Parameters {
            nu: self.nu,
            half_width: self.half_width,
            dx: self.dx,
            dt: self.dt,
            total_time: self.total_time,
        }
    }

    pub fn ic_type(&self) -> ICType {
        self.ic.to_ic_type(self.ic_dial)
    }

    pub fn image_path(&self, name: &str) -> PathBuf {
        let mut result = self.output_dir.clone();
        result.push(format!("{}.png", name));
        result
    }

    pub fn frame_name(&self, i: usize) -> PathBuf {
        let mut result = self.output_dir.clone();
        result.push(format!("frame_{:04}.csv", i));
        result
    }
}
