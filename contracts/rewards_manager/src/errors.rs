use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ManagerError {
    AlreadyInitialized = 300,
    NotInitialized = 301,
    Unauthorized = 302,
    ZeroTokenBalance = 303,
    RewardsPeriodNotFinished = 304,
    ZeroAddress = 305,
    InsufficientBalance = 306,
    InvalidAmount = 307,
    Overflow = 308,
}
