use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cpyprofile::cli::Cli::parse();
    cpyprofile::logging::init(cli.verbose);

    if let Err(err) = cpyprofile::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
