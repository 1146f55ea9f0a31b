// ===== Seeds =====
pub const FACTORY_SEED: &[u8] = b"rocket_joe_factory";
pub const LAUNCH_EVENT_SEED: &[u8] = b"launch_event";
pub const USER_ALLOCATION_SEED: &[u8] = b"user_allocation";
pub const STAKING_SEED: &[u8] = b"rocket_joe_staking";
pub const STAKER_INFO_SEED: &[u8] = b"staker_info";
pub const RJOE_MINT_SEED: &[u8] = b"rjoe_mint";
pub const VAULT_AUTHORITY: &[u8] = b"vault_authority";
pub const TOKEN_VAULT: &[u8] = b"token_vault";

// ===== Fixed point =====
/// 1e18 == 100% for penalties and the incentive share
pub const PRECISION: u64 = 1_000_000_000_000_000_000;

/// Scale of the floor price (quote base units per token base unit)
pub const PRICE_PRECISION: u128 = 1_000_000_000_000_000_000;

/// Scale of the staking accumulator
pub const ACC_RJOE_PRECISION: u128 = 1_000_000_000_000_000_000;

// ===== Launch event limits =====
/// Penalties are capped at 50%
pub const MAX_PENALTY: u64 = PRECISION / 2;

/// Users can't have their liquidity locked for more than 7 days
pub const MAX_USER_TIMELOCK: i64 = 7 * 24 * 60 * 60;

/// Liquidity units permanently locked in the pool at creation
pub const MINIMUM_LIQUIDITY: u128 = 1_000;

// ===== Factory defaults =====
/// Default phase one duration: 2 days
pub const DEFAULT_PHASE_ONE_DURATION: i64 = 2 * 24 * 60 * 60;

/// Default no-fee window at the start of phase one: 1 day
pub const DEFAULT_PHASE_ONE_NO_FEE_DURATION: i64 = 24 * 60 * 60;

/// Default phase two duration: 1 day
pub const DEFAULT_PHASE_TWO_DURATION: i64 = 24 * 60 * 60;

/// Default rJOE burnt per SOL deposited: 100 rJOE
pub const DEFAULT_RJOE_PER_SOL: u64 = 100 * 10u64.pow(RJOE_DECIMALS as u32);

// ===== rJOE =====
pub const RJOE_DECIMALS: u8 = 9;
pub const RJOE_NAME: &str = "Rocket Joe Token";
pub const RJOE_SYMBOL: &str = "rJOE";
