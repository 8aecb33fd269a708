use std::process;

#[tokio::main]
async fn main() {
    let exit_code = domain_trust_cli::run().await;
    process::exit(exit_code);
}
