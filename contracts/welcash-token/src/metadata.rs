use soroban_sdk::{Address, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

pub const TOKEN_NAME: &str = "Wrapped Electric Cash";
pub const TOKEN_SYMBOL: &str = "wELCASH";
pub const DECIMALS: u32 = 8;

/// 20,000,000 whole tokens at 8 decimals.
pub const SUPPLY_CAP: i128 = 20_000_000 * 100_000_000;

/// Account whose balance is never credited; transfers to it destroy supply.
/// Ed25519 key of 28 zero bytes followed by `ff ff ff f0`.
pub const BURN_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAH77777A6EN";

pub fn burn_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, BURN_ADDRESS))
}

pub fn write_metadata(env: &Env) {
    let metadata = TokenMetadata {
        decimal: DECIMALS,
        name: String::from_str(env, TOKEN_NAME),
        symbol: String::from_str(env, TOKEN_SYMBOL),
    };
    TokenUtils::new(env).metadata().set_metadata(&metadata);
}

pub fn read_metadata(env: &Env) -> TokenMetadata {
    TokenUtils::new(env).metadata().get_metadata()
}
