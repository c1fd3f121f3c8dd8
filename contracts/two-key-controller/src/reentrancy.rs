use soroban_sdk::{symbol_short, Env, Symbol};

use crate::error::ControllerError;

const LOCK_KEY: Symbol = symbol_short!("CONFIRM");

/// Temporary-storage lock held while a confirmation executes against the
/// token. Released on drop.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn new(env: &'a Env) -> Result<Self, ControllerError> {
        if env.storage().temporary().has(&LOCK_KEY) {
            return Err(ControllerError::Reentrancy);
        }
        env.storage().temporary().set(&LOCK_KEY, &true);
        Ok(Self { env })
    }
}

impl<'a> Drop for ReentrancyGuard<'a> {
    fn drop(&mut self) {
        self.env.storage().temporary().remove(&LOCK_KEY);
    }
}
