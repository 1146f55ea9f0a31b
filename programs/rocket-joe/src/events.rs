use anchor_lang::prelude::*;

// =============================================================================
// FACTORY EVENTS
// =============================================================================

/// Event emitted when the factory creates a launch event
#[event]
pub struct LaunchEventCreated {
    /// Launch event address
    pub launch_event: Pubkey,
    /// Issuer of the auctioned token
    pub issuer: Pubkey,
    /// Auctioned token mint
    pub token_mint: Pubkey,
    /// Auction start timestamp
    pub phase_one_start: i64,
    /// Phase two start timestamp
    pub phase_two_start: i64,
    /// Phase three start timestamp
    pub phase_three_start: i64,
    /// rJOE burnt per SOL deposited
    pub rjoe_per_sol: u64,
    /// Sequence number of the event
    pub index: u64,
}

#[event]
pub struct PhaseDurationChanged {
    pub phase: u8,
    pub duration: i64,
}

#[event]
pub struct NoFeeDurationChanged {
    pub duration: i64,
}

#[event]
pub struct SetRJoe {
    pub rjoe_mint: Pubkey,
}

#[event]
pub struct SetPenaltyCollector {
    pub penalty_collector: Pubkey,
}

#[event]
pub struct SetRouter {
    pub router: Pubkey,
}

#[event]
pub struct SetAmmConfig {
    pub amm_config: Pubkey,
}

#[event]
pub struct SetRJoePerSol {
    pub rjoe_per_sol: u64,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

// =============================================================================
// LAUNCH EVENT LIFECYCLE EVENTS
// =============================================================================

/// Event emitted once a launch event has been initialized
#[event]
pub struct LaunchEventInitialized {
    pub launch_event: Pubkey,
    /// Share of the tokens kept as incentives (1e18 = 100%)
    pub token_incentives_percent: u64,
    /// Floor price (quote per token, scaled by 1e18)
    pub floor_price: u128,
    pub max_withdraw_penalty: u64,
    pub fixed_withdraw_penalty: u64,
    pub max_allocation: u64,
    pub user_timelock: i64,
    pub issuer_timelock: i64,
    /// Tokens for sale
    pub token_reserve: u64,
    /// Tokens set aside as incentives
    pub token_incentives: u64,
}

/// Event emitted when the issuer's tokens reach the vault
#[event]
pub struct IssuingTokenDeposited {
    pub launch_event: Pubkey,
    pub token_mint: Pubkey,
    pub amount: u64,
}

/// Event emitted when a user deposits SOL
#[event]
pub struct UserParticipated {
    pub launch_event: Pubkey,
    pub user: Pubkey,
    /// Lamports deposited in this call
    pub wsol_amount: u64,
    /// rJOE burnt for this deposit
    pub rjoe_amount: u64,
    /// User's allocation after the deposit
    pub allocation: u64,
    /// Event reserve after the deposit
    pub wsol_reserve: u64,
    pub timestamp: i64,
}

/// Event emitted when a user withdraws during phase one or two
#[event]
pub struct UserWithdrawn {
    pub launch_event: Pubkey,
    pub user: Pubkey,
    /// Amount removed from the allocation
    pub wsol_amount: u64,
    /// Part sent to the penalty collector
    pub penalty_amount: u64,
    pub timestamp: i64,
}

/// Event emitted when the owner stops a launch event
#[event]
pub struct Stopped {
    pub launch_event: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct UserEmergencyWithdraw {
    pub launch_event: Pubkey,
    pub user: Pubkey,
    pub wsol_amount: u64,
}

#[event]
pub struct IssuerEmergencyWithdraw {
    pub launch_event: Pubkey,
    pub issuer: Pubkey,
    pub token_amount: u64,
}

/// Event emitted when the pool is created in phase three
#[event]
pub struct LiquidityPoolCreated {
    pub launch_event: Pubkey,
    /// DAMM v2 pool address
    pub pool: Pubkey,
    /// Position owned by the vault authority
    pub position: Pubkey,
    pub token_mint: Pubkey,
    pub quote_mint: Pubkey,
    /// Tokens sent to the pool
    pub token_amount: u64,
    /// WSOL sent to the pool
    pub wsol_amount: u64,
    /// Liquidity shared by the principals
    pub lp_supply: u128,
    /// Whether the floor price was reached
    pub floor_price_met: bool,
    pub timestamp: i64,
}

#[event]
pub struct IssuerLiquidityWithdrawn {
    pub launch_event: Pubkey,
    pub issuer: Pubkey,
    pub pool: Pubkey,
    /// Liquidity removed from the position
    pub liquidity: u128,
    /// Unsold tokens returned
    pub token_amount: u64,
}

#[event]
pub struct UserLiquidityWithdrawn {
    pub launch_event: Pubkey,
    pub user: Pubkey,
    pub pool: Pubkey,
    pub liquidity: u128,
    pub wsol_amount: u64,
}

#[event]
pub struct IncentiveTokenWithdraw {
    pub launch_event: Pubkey,
    pub user: Pubkey,
    pub token_mint: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Skimmed {
    pub launch_event: Pubkey,
    pub penalty_collector: Pubkey,
    pub token_amount: u64,
    pub wsol_amount: u64,
}

// =============================================================================
// STAKING EVENTS
// =============================================================================

#[event]
pub struct Deposit {
    pub user: Pubkey,
    pub amount: u64,
    /// rJOE minted while settling
    pub reward: u64,
}

#[event]
pub struct Withdraw {
    pub user: Pubkey,
    pub amount: u64,
    pub reward: u64,
}

#[event]
pub struct EmergencyWithdraw {
    pub user: Pubkey,
    pub amount: u64,
}

#[event]
pub struct UpdateEmissionRate {
    pub user: Pubkey,
    pub rjoe_per_sec: u64,
}
