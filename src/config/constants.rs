//! Default endpoints and ports

/// Public Ethereum mainnet JSON-RPC endpoint
pub const MAINNET_RPC_URL: &str = "https://eth.llamarpc.com";

/// Public Sepolia testnet JSON-RPC endpoint
pub const SEPOLIA_RPC_URL: &str = "https://ethereum-sepolia-rpc.publicnode.com";

/// Default HTTP listen port
pub const DEFAULT_API_PORT: u16 = 3000;
