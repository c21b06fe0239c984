//! tripplan main entrypoint.

use tripplan::run;
use tripplan::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
