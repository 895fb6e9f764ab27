//! dietlog main entrypoint.

use dietlog::run;
use dietlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
