//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roster_core` linkage.
//! - Optionally open a data file and report the record count.

use roster_core::{CsvPersonRepository, PersonRepository};

fn main() {
    println!("roster_core ping={}", roster_core::ping());
    println!("roster_core version={}", roster_core::core_version());

    if let Some(data_path) = std::env::args().nth(1) {
        let repo = CsvPersonRepository::open(&data_path);
        println!("data_path={data_path} records={}", repo.get_all().len());
    }
}
