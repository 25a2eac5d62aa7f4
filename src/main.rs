use std::process;
use vuln_db::cli::{self, PROGRAM_NAME};
use vuln_db::VulnDbError;

fn main() {
    match cli::run() {
        Ok(_) => {}
        // Help, version and syntax errors keep clap's own output and status
        Err(VulnDbError::Cli(e)) => e.exit(),
        Err(e) => {
            eprintln!("{}: error: {}", PROGRAM_NAME, e);
            process::exit(e.exit_code());
        }
    }
}
