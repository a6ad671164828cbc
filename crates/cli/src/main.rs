use std::process::ExitCode;

fn main() -> ExitCode {
    lounge_cli::run()
}
