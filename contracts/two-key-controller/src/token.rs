use soroban_sdk::{contractclient, Address, Env, Error, InvokeError};

use crate::error::ControllerError;

/// `SupplyCapExceeded` code of the wELCASH token error enum.
pub const TOKEN_SUPPLY_CAP_EXCEEDED: u32 = 4;

/// The owner-gated slice of the wELCASH token interface the controller
/// drives.
#[contractclient(name = "TokenAdminClient")]
pub trait TokenAdmin {
    fn mint(env: Env, caller: Address, to: Address, amount: i128);
    fn transfer_ownership(env: Env, caller: Address, new_owner: Address);
}

/// Translate a failed `try_*` token call into a controller error.
pub fn token_failure(failure: Result<Error, InvokeError>) -> ControllerError {
    let invoke = match failure {
        Ok(err) => InvokeError::from(err),
        Err(invoke) => invoke,
    };
    match invoke {
        InvokeError::Contract(TOKEN_SUPPLY_CAP_EXCEEDED) => ControllerError::SupplyCapExceeded,
        _ => ControllerError::TokenRejected,
    }
}

/// Collapse a `try_*` token call result, mapping failures with
/// [`token_failure`].
pub fn check_token_call<E>(
    result: Result<Result<(), E>, Result<Error, InvokeError>>,
) -> Result<(), ControllerError> {
    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(_)) => Err(ControllerError::TokenRejected),
        Err(failure) => Err(token_failure(failure)),
    }
}
