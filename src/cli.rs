use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about = "Find double-bookings in an appointment list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the conflicts in an agenda, sorted by start time
    Check {
        /// Agenda file with one `yyyy-mm-dd hh:mm hh:mm | label` per line (stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Print a synthetic agenda of regularly spaced appointments
    Generate {
        /// Seed appointment, repeated at a fixed offset
        #[arg(long, default_value = "2018-11-20 08:00 08:59 | Sample appt")]
        first: String,

        /// Hours between consecutive appointments
        #[arg(long, default_value = "1")]
        step_hours: f64,

        /// Number of repeated appointments
        #[arg(long, default_value = "5000")]
        count: usize,

        /// Extra appointments that each collide with a generated one
        #[arg(long, default_value = "0")]
        conflicts: usize,

        /// Seed for choosing where collisions land
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}
