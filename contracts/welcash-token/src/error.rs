use soroban_sdk::contracterror;

/// Errors returned by the wELCASH token contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    /// `initialize` has already been called
    AlreadyInitialized = 1,
    /// Contract has not been initialized yet
    NotInitialized = 2,
    /// Caller is not the current token owner
    NotOwner = 3,
    /// Minting would push total supply past the supply cap
    SupplyCapExceeded = 4,
    /// Transfers are paused
    Paused = 5,
    /// The source or the initiator of the call is blocked
    UserBlocked = 6,
    /// Spender allowance is lower than the requested amount
    AllowanceExceeded = 7,
    /// Source balance is lower than the requested amount
    InsufficientBalance = 8,
    /// Amount is negative
    InvalidAmount = 9,
    /// Arithmetic overflow
    Overflow = 10,
}
