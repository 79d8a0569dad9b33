mod io;
mod state;
mod types;
mod validator;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), validator::ValidateError> {
    let input_filename = std::env::args_os()
        .nth(1)
        .ok_or(validator::ValidateError::MissingArgument)?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    validator::validate(input_filename, stdout.lock(), stderr.lock())?;

    Ok(())
}
