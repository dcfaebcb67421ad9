use std::fs;
use std::process::exit;

use clap::Parser;
use tracing::{error, info};

use beta_emu::config::{Cli, RegionSizes};
use beta_emu::{disassemble_verbose, Computer};

fn main() {
    let mut cli = Cli::parse();
    let _logger = beta_emu::log::Logger::new(&cli.log_level);

    if let Some(path) = &cli.config {
        match fs::read_to_string(path) {
            Ok(text) => match RegionSizes::from_yaml(&text) {
                Ok(sizes) => sizes.apply(&mut cli),
                Err(e) => {
                    error!("failed to parse config file {}: {e}", path.display());
                    exit(-2);
                }
            },
            Err(e) => {
                error!("failed to read config file {}: {e}", path.display());
                exit(-2);
            }
        }
    }

    info!(
        "beta-emu starting: program={} video={} kernel={}",
        cli.program_memory_size, cli.video_memory_size, cli.kernel_memory_size
    );

    let mut computer = match Computer::new(
        cli.program_memory_size,
        cli.video_memory_size,
        cli.kernel_memory_size,
    ) {
        Ok(computer) => computer,
        Err(e) => {
            error!("failed to allocate address space: {e}");
            exit(-1);
        }
    };

    let program = match fs::read(&cli.program_image) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("failed to read program image {}: {e}", cli.program_image.display());
            exit(-2);
        }
    };
    info!("program image md5: {:x}", md5::compute(&program));
    if let Err(e) = computer.load(&program) {
        error!("{e}");
        exit(-2);
    }

    if let Some(path) = &cli.handler_image {
        let handler = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("failed to read handler image {}: {e}", path.display());
                exit(-2);
            }
        };
        info!("handler image md5: {:x}", md5::compute(&handler));
        if let Err(e) = computer.load_interrupt_handler(Some(&handler)) {
            error!("{e}");
            exit(-2);
        }
    }

    let mut steps = 0u64;
    while !computer.halted() {
        if let Some(max_steps) = cli.max_steps {
            if steps >= max_steps {
                info!("stopping after reaching max_steps={max_steps}");
                break;
            }
        }

        if cli.trace {
            let pc = computer.program_counter();
            let word = computer.get_word(pc);
            let trace = disassemble_verbose(word);
            info!("{pc:08X}  {word:08X}  {}", trace.text);
        }

        computer.execute_step();
        steps += 1;
    }

    info!("ran {steps} steps\n{}", computer.format_registers());
}
