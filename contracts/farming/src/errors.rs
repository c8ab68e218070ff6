use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FarmingError {
    AlreadyInitialized = 200,
    NotInitialized = 201,
    Unauthorized = 202,
    ZeroAmount = 203,
    NoStake = 204,
    InsufficientBalance = 205,
    GiftNotFound = 206,
    TooManyGifts = 207,
    InvalidDuration = 208,
    InvalidScale = 209,
    RewardTooSmall = 210,
    RewardTooBig = 211,
    RewardsPeriodNotFinished = 212,
    Overflow = 213,
}
