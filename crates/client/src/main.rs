//! Set-bonus server binary.
//!
//! Loads set definitions from `$ARMORSET_DATA_DIR/sets`, puts a demo player
//! online and reads admin commands from stdin.
//!
//! ```bash
//! ARMORSET_DATA_DIR=./data RUST_LOG=armorset=debug cargo run -p armorset-client
//! ```

use anyhow::Result;
use armorset_client::Server;
use armorset_client::compiler::StatCompiler;
use armorset_client::config::ServerConfig;
use armorset_client::console::Command;
use armorset_client::logging::setup_logging;
use armorset_runtime::PlayerId;
use tokio::io::{AsyncBufReadExt, BufReader};

const DEMO_PLAYER: PlayerId = PlayerId(1);

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();
    let _log_guard = setup_logging(config.log_dir.as_deref())?;

    let server = Server::start(&config, Some(StatCompiler))?;
    server.join_demo_player(DEMO_PLAYER);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => println!("{}", server.execute(command)),
                    Err(err) => println!("{err}"),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    server.shutdown();
    Ok(())
}
