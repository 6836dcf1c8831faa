use anyhow::Result;

fn main() -> Result<()> {
    xlsx2ttl_cli::run()
}
