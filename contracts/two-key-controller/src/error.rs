use soroban_sdk::contracterror;

/// Errors returned by the two-key controller.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ControllerError {
    /// `init` has already been called
    AlreadyInitialized = 1,
    /// Controller has not been initialized yet
    NotInitialized = 2,
    /// Signer list does not hold exactly two distinct addresses
    InvalidSignerCount = 3,
    /// Caller or named proposer is not one of the two signers
    NotASigner = 4,
    /// A signer tried to confirm their own proposal
    SelfConfirmationNotAllowed = 5,
    /// Caller has no pending proposal of this kind
    NoProposalToRevoke = 6,
    /// Confirmation re-entered while another one is executing
    Reentrancy = 7,
    /// Token refused the mint because it would pass the supply cap
    SupplyCapExceeded = 8,
    /// Token refused the call for any other reason
    TokenRejected = 9,
}
