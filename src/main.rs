use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use log::info;

use procpulse::format;
use procpulse::render::Table;
use procpulse::system::kill;
use procpulse::system::sampler::Sampler;

/// Widest the name column gets before unicode truncation kicks in.
const NAME_COLUMN_WIDTH: usize = 32;

#[derive(Parser)]
#[command(
    name = "procpulse",
    about = "Sample per-process CPU, memory, disk and network usage over an interval"
)]
struct Cli {
    /// Sampling window in seconds
    #[arg(short, long, default_value_t = 1)]
    interval: u64,

    /// Kill the process with this PID instead of monitoring
    #[arg(short, long)]
    kill: Option<u32>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // The table is rendered to a string and printed in one shot, so an
    // interrupt during the sampling sleep never leaves a half-printed grid.
    ctrlc::set_handler(|| std::process::exit(130))?;

    let cli = Cli::parse();

    match cli.kill {
        Some(pid) => run_kill(pid),
        None => run_monitor(Duration::from_secs(cli.interval)),
    }
}

fn run_kill(pid: u32) -> Result<()> {
    info!("kill requested for pid {pid}");
    let outcome = kill::kill_by_pid(pid);
    println!("{outcome}");
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_monitor(interval: Duration) -> Result<()> {
    let mut sampler = Sampler::new();
    let rows = sampler.run_cycle(interval);

    let mut table = Table::new([
        "PID",
        "Process Name",
        "CPU %",
        "Memory %",
        "Disk I/O",
        "Network I/O",
        "Running",
    ]);
    for row in rows {
        table.push_row(vec![
            row.pid.to_string(),
            format::truncate_unicode(&row.name, NAME_COLUMN_WIDTH),
            format::percent(row.cpu_percent),
            format::percent(row.memory_percent),
            format::disk_cell(row.disk_read_mb, row.disk_write_mb),
            format::net_cell(row.net_recv_mbit, row.net_sent_mbit),
            format::yes_no(row.running).to_string(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}
