#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = bloodbank_ui::run() {
        eprintln!("Blood bank manager failed: {err:#}");
        std::process::exit(1);
    }
}
