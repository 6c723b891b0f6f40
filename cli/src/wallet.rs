//! Wallet and navigation stand-ins for the terminal.

use quest_page::{Navigator, PageError};
use quest_starknet::{Call, StarknetError, WalletExecutor};

use std::io::Write;

/// Writes the multicall as JSON to stdout for an external signer.
pub struct JsonCallPrinter;

impl WalletExecutor for JsonCallPrinter {
    async fn execute(&self, calls: &[Call]) -> Result<(), StarknetError> {
        let json = serde_json::to_string_pretty(calls)
            .map_err(|e| StarknetError::Wallet(e.to_string()))?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{json}").map_err(|e| StarknetError::Wallet(e.to_string()))?;
        Ok(())
    }
}

/// Prints the destination instead of opening it.
pub struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn push(&self, link: &str) -> Result<(), PageError> {
        println!("open {link}");
        Ok(())
    }
}
