use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    IdenticalTokens = 102,
    ZeroAmount = 103,
    SlippageExceeded = 104,
    InsufficientLiquidity = 105,
    Locked = 106,
    Overflow = 107,
    InsufficientBalance = 108,
    InsufficientAllowance = 109,
    NegativeAmount = 110,
    InvalidExpiration = 111,
}
