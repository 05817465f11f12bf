use okozukai::{cli::run_cli, init};

fn main() {
    init();

    if let Err(err) = run_cli() {
        tracing::error!("shell terminated: {err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
