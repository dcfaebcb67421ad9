use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "beta-emu", about = "Runs a beta-machine program image to completion")]
pub struct Cli {
    pub program_image: PathBuf,

    #[arg(long)]
    pub handler_image: Option<PathBuf>,

    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = 1 << 16)]
    pub program_memory_size: u32,

    #[arg(long, default_value_t = 1 << 16)]
    pub video_memory_size: u32,

    #[arg(long, default_value_t = 1 << 16)]
    pub kernel_memory_size: u32,

    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[arg(long)]
    pub trace: bool,

    #[arg(long)]
    pub max_steps: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct RegionSizes {
    pub program_memory_size: Option<u32>,
    pub video_memory_size: Option<u32>,
    pub kernel_memory_size: Option<u32>,
}

impl RegionSizes {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn apply(&self, cli: &mut Cli) {
        if let Some(size) = self.program_memory_size {
            cli.program_memory_size = size;
        }
        if let Some(size) = self.video_memory_size {
            cli.video_memory_size = size;
        }
        if let Some(size) = self.kernel_memory_size {
            cli.kernel_memory_size = size;
        }
    }
}
