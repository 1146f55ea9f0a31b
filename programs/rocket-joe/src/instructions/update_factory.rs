use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::RocketJoeError;
use crate::events::{
    NoFeeDurationChanged, OwnershipTransferred, PhaseDurationChanged, SetAmmConfig,
    SetPenaltyCollector, SetRJoe, SetRJoePerSol, SetRouter,
};
use crate::state::RocketJoeFactory;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct UpdateFactoryParams {
    pub rjoe_mint: Option<Pubkey>,
    pub penalty_collector: Option<Pubkey>,
    pub router: Option<Pubkey>,
    pub amm_config: Option<Pubkey>,
    pub rjoe_per_sol: Option<u64>,
    pub new_owner: Option<Pubkey>,
}

#[derive(Accounts)]
pub struct UpdateFactory<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [FACTORY_SEED],
        bump = factory.bump,
        constraint = factory.owner == owner.key() @ RocketJoeError::Unauthorized,
    )]
    pub factory: Box<Account<'info, RocketJoeFactory>>,
}

pub fn update_factory(ctx: Context<UpdateFactory>, params: UpdateFactoryParams) -> Result<()> {
    let factory = &mut ctx.accounts.factory;

    if let Some(rjoe_mint) = params.rjoe_mint {
        require_keys_neq!(rjoe_mint, Pubkey::default(), RocketJoeError::ZeroAddress);
        factory.rjoe_mint = rjoe_mint;
        emit!(SetRJoe { rjoe_mint });
    }

    if let Some(penalty_collector) = params.penalty_collector {
        require_keys_neq!(penalty_collector, Pubkey::default(), RocketJoeError::ZeroAddress);
        factory.penalty_collector = penalty_collector;
        emit!(SetPenaltyCollector { penalty_collector });
    }

    if let Some(router) = params.router {
        // Pools can only be created through DAMM v2
        require_keys_eq!(router, cp_amm::ID, RocketJoeError::InvalidAmmProgram);
        factory.router = router;
        emit!(SetRouter { router });
    }

    if let Some(amm_config) = params.amm_config {
        require_keys_neq!(amm_config, Pubkey::default(), RocketJoeError::ZeroAddress);
        factory.amm_config = amm_config;
        emit!(SetAmmConfig { amm_config });
    }

    if let Some(rjoe_per_sol) = params.rjoe_per_sol {
        factory.rjoe_per_sol = rjoe_per_sol;
        emit!(SetRJoePerSol { rjoe_per_sol });
    }

    if let Some(new_owner) = params.new_owner {
        require_keys_neq!(new_owner, Pubkey::default(), RocketJoeError::ZeroAddress);
        emit!(OwnershipTransferred {
            previous_owner: factory.owner,
            new_owner,
        });
        factory.owner = new_owner;
    }

    msg!("Rocket Joe factory updated successfully");

    Ok(())
}

/// Handler for `set_phase_duration`, phase is 1 or 2
pub fn set_phase_duration(ctx: Context<UpdateFactory>, phase: u8, duration: i64) -> Result<()> {
    let factory = &mut ctx.accounts.factory;
    factory.set_phase_duration(phase, duration)?;

    emit!(PhaseDurationChanged { phase, duration });
    msg!("Phase {} duration set to {} seconds", phase, duration);

    Ok(())
}

pub fn set_phase_one_no_fee_duration(ctx: Context<UpdateFactory>, duration: i64) -> Result<()> {
    let factory = &mut ctx.accounts.factory;
    factory.set_phase_one_no_fee_duration(duration)?;

    emit!(NoFeeDurationChanged { duration });
    msg!("Phase one no-fee duration set to {} seconds", duration);

    Ok(())
}
