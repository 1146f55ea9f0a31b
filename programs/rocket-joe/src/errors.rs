use anchor_lang::prelude::*;

#[error_code]
pub enum RocketJoeError {
    // ===== Permission Errors =====
    #[msg("Unauthorized: Only the owner can perform this action")]
    Unauthorized,

    #[msg("Issuer can't participate in its own launch event")]
    IssuerCannotParticipate,

    // ===== Phase Errors =====
    #[msg("Not in phase one")]
    NotInPhaseOne,

    #[msg("Unable to withdraw outside phase one and phase two")]
    UnableToWithdraw,

    #[msg("Not in phase three")]
    NotInPhaseThree,

    #[msg("Launch event is stopped")]
    Stopped,

    #[msg("Launch event is not stopped")]
    NotStopped,

    #[msg("Can't withdraw before the user's timelock")]
    UserTimelockNotElapsed,

    #[msg("Can't withdraw before the issuer's timelock")]
    IssuerTimelockNotElapsed,

    // ===== Parameter Errors =====
    #[msg("Address can't be the zero address")]
    ZeroAddress,

    #[msg("Token can't be wrapped SOL")]
    TokenIsWsol,

    #[msg("A pool already exists for this token")]
    PairAlreadyExists,

    #[msg("Auction start must be in the future")]
    InvalidStartTime,

    #[msg("Token incentives percent too big")]
    IncentivesPercentTooBig,

    #[msg("Max withdraw penalty too big")]
    MaxWithdrawPenaltyTooBig,

    #[msg("Fixed withdraw penalty too big")]
    FixedWithdrawPenaltyTooBig,

    #[msg("Can't lock user liquidity for more than 7 days")]
    UserTimelockTooLong,

    #[msg("Issuer can't withdraw before users")]
    IssuerTimelockTooShort,

    #[msg("Invalid phase")]
    InvalidPhase,

    #[msg("Phase one duration must exceed the no-fee duration")]
    PhaseOneTooShort,

    #[msg("No-fee duration must be shorter than phase one")]
    NoFeeDurationTooLong,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Amount exceeds max allocation")]
    MaxAllocationExceeded,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid quote mint")]
    InvalidQuoteMint,

    #[msg("Invalid token vault")]
    InvalidTokenVault,

    #[msg("Invalid quote vault")]
    InvalidQuoteVault,

    #[msg("Invalid AMM program")]
    InvalidAmmProgram,

    #[msg("Invalid AMM config")]
    InvalidAmmConfig,

    #[msg("Invalid pool account")]
    InvalidPool,

    #[msg("Invalid position account")]
    InvalidPosition,

    #[msg("Invalid position NFT account")]
    InvalidPositionNftAccount,

    #[msg("Invalid penalty collector account")]
    InvalidPenaltyCollector,

    #[msg("Invalid rJOE mint")]
    InvalidRJoeMint,

    // ===== State Errors =====
    #[msg("Launch event already initialized")]
    AlreadyInitialized,

    #[msg("Pair already created")]
    PairAlreadyCreated,

    #[msg("Pair not created")]
    PairNotCreated,

    #[msg("No WSOL deposited")]
    NoWsolBalance,

    #[msg("Withdrawal amount exceeds allocation")]
    InsufficientAllocation,

    #[msg("Nothing to withdraw")]
    NothingToWithdraw,

    #[msg("Liquidity already withdrawn")]
    LiquidityAlreadyWithdrawn,

    #[msg("Incentives already withdrawn")]
    IncentivesAlreadyWithdrawn,

    #[msg("No incentives to claim")]
    NoIncentives,

    #[msg("Staked amount too low")]
    InsufficientStake,

    #[msg("Invalid price")]
    InvalidPrice,

    // ===== Math Errors =====
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Division by zero")]
    DivisionByZero,

    #[msg("Type conversion failed")]
    TypeCastFailed,
}
