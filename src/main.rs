use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = passage::cli::Cli::parse();
    if let Err(e) = passage::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
