use anchor_lang::prelude::*;
use cp_amm::constants::seeds::POOL_PREFIX;

use crate::errors::RocketJoeError;

/// Canonical DAMM v2 pool address for a config and a mint pair
pub fn derive_pool_address(config: &Pubkey, mint_a: &Pubkey, mint_b: &Pubkey) -> Pubkey {
    let (first, second) = if mint_a > mint_b {
        (mint_a, mint_b)
    } else {
        (mint_b, mint_a)
    };

    Pubkey::find_program_address(
        &[POOL_PREFIX, config.as_ref(), first.as_ref(), second.as_ref()],
        &cp_amm::ID,
    )
    .0
}

/// Reject when a pool for the pair already exists
pub fn check_pool_not_created(
    pool: &AccountInfo,
    config: &Pubkey,
    token_mint: &Pubkey,
    quote_mint: &Pubkey,
) -> Result<()> {
    require_keys_eq!(
        pool.key(),
        derive_pool_address(config, token_mint, quote_mint),
        RocketJoeError::InvalidPool
    );
    require!(pool.data_is_empty(), RocketJoeError::PairAlreadyExists);

    Ok(())
}

/// Validate a new durations pair for the factory
pub fn validate_durations(phase_one: i64, no_fee: i64, phase_two: i64) -> Result<()> {
    require!(no_fee >= 0, RocketJoeError::NoFeeDurationTooLong);
    require!(phase_one > no_fee, RocketJoeError::PhaseOneTooShort);
    require!(phase_two > 0, RocketJoeError::InvalidAmount);

    Ok(())
}
