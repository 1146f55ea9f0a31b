use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::*;
use crate::errors::RocketJoeError;
use crate::state::RocketJoeFactory;
use crate::utils::validate_durations;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitializeFactoryParams {
    pub rjoe_mint: Pubkey,
    pub penalty_collector: Pubkey,
    pub amm_config: Pubkey,
    pub rjoe_per_sol: Option<u64>,              // Use default 100 rJOE if not provided
    pub phase_one_duration: Option<i64>,        // Use default 2 days if not provided
    pub phase_one_no_fee_duration: Option<i64>, // Use default 1 day if not provided
    pub phase_two_duration: Option<i64>,        // Use default 1 day if not provided
}

#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = RocketJoeFactory::SIZE,
        seeds = [FACTORY_SEED],
        bump,
    )]
    pub factory: Box<Account<'info, RocketJoeFactory>>,

    /// WSOL mint
    #[account(
        address = anchor_spl::token::spl_token::native_mint::ID
    )]
    pub wsol_mint: Account<'info, Mint>,

    /// CHECK: AMM program used as router (verified by address)
    #[account(address = cp_amm::ID @ RocketJoeError::InvalidAmmProgram)]
    pub router: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_factory(
    ctx: Context<InitializeFactory>,
    params: InitializeFactoryParams,
) -> Result<()> {
    let factory = &mut ctx.accounts.factory;

    // First set default values
    factory.initialize_defaults(
        ctx.accounts.owner.key(),
        params.rjoe_mint,
        ctx.accounts.wsol_mint.key(),
        params.penalty_collector,
        ctx.accounts.router.key(),
        params.amm_config,
        ctx.bumps.factory,
    )?;

    // Then override default values with parameters
    if let Some(rjoe_per_sol) = params.rjoe_per_sol {
        factory.rjoe_per_sol = rjoe_per_sol;
    }

    if let Some(phase_one_duration) = params.phase_one_duration {
        factory.phase_one_duration = phase_one_duration;
    }

    if let Some(no_fee_duration) = params.phase_one_no_fee_duration {
        factory.phase_one_no_fee_duration = no_fee_duration;
    }

    if let Some(phase_two_duration) = params.phase_two_duration {
        factory.phase_two_duration = phase_two_duration;
    }

    validate_durations(
        factory.phase_one_duration,
        factory.phase_one_no_fee_duration,
        factory.phase_two_duration,
    )?;

    msg!("Rocket Joe factory initialized successfully");
    msg!("Owner: {}", factory.owner);
    msg!("rJOE: {}", factory.rjoe_mint);
    msg!("rJOE per SOL: {}", factory.rjoe_per_sol);

    Ok(())
}
