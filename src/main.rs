use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = labsight::run() {
        eprintln!("labsight: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
