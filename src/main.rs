use std::process::ExitCode;

fn main() -> ExitCode {
    match emoji_translator::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
