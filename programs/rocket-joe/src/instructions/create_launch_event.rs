use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::RocketJoeError;
use crate::events::{IssuingTokenDeposited, LaunchEventCreated, LaunchEventInitialized};
use crate::state::{LaunchEvent, LaunchEventConfig, RocketJoeFactory};
use crate::utils::check_pool_not_created;

#[derive(Accounts)]
pub struct CreateLaunchEvent<'info> {
    /// Funds the accounts and supplies the auctioned tokens
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [FACTORY_SEED],
        bump = factory.bump,
    )]
    pub factory: Box<Account<'info, RocketJoeFactory>>,

    /// One launch event per auctioned token
    #[account(
        init,
        payer = creator,
        space = LaunchEvent::SIZE,
        seeds = [LAUNCH_EVENT_SEED, token_mint.key().as_ref()],
        bump,
    )]
    pub launch_event: Box<Account<'info, LaunchEvent>>,

    /// vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    pub token_mint: Box<Account<'info, Mint>>,

    /// WSOL mint, checked against the factory
    #[account(
        address = factory.wsol_mint @ RocketJoeError::InvalidQuoteMint
    )]
    pub wsol_mint: Box<Account<'info, Mint>>,

    /// Launch event token vault
    #[account(
        init,
        payer = creator,
        seeds = [TOKEN_VAULT, launch_event.key().as_ref(), token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = vault_authority,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    /// Launch event WSOL vault (for storing deposits)
    #[account(
        init,
        payer = creator,
        seeds = [TOKEN_VAULT, launch_event.key().as_ref(), wsol_mint.key().as_ref()],
        bump,
        token::mint = wsol_mint,
        token::authority = vault_authority,
    )]
    pub quote_vault: Box<Account<'info, TokenAccount>>,

    /// Creator's token account (source of the auctioned tokens)
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = creator,
    )]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: canonical DAMM v2 pool for the pair, must not exist yet
    pub pool: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn create_launch_event(
    ctx: Context<CreateLaunchEvent>,
    params: LaunchEventConfig,
) -> Result<()> {
    let factory = &mut ctx.accounts.factory;
    let launch_event = &mut ctx.accounts.launch_event;
    let token_mint = ctx.accounts.token_mint.key();
    let clock = Clock::get()?;

    // Validate parameters
    factory.validate_launch_event_params(&token_mint, &params, clock.unix_timestamp)?;
    check_pool_not_created(
        &ctx.accounts.pool.to_account_info(),
        &factory.amm_config,
        &token_mint,
        &factory.wsol_mint,
    )?;

    launch_event.initialize(
        factory,
        token_mint,
        ctx.accounts.token_vault.key(),
        ctx.accounts.quote_vault.key(),
        &params,
        ctx.bumps.launch_event,
    )?;

    factory.num_launch_events = factory
        .num_launch_events
        .checked_add(1)
        .ok_or(RocketJoeError::MathOverflow)?;

    // Move the issuer's tokens into the vault
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.creator_token_account.to_account_info(),
                to: ctx.accounts.token_vault.to_account_info(),
                authority: ctx.accounts.creator.to_account_info(),
            },
        ),
        params.token_amount,
    )?;

    emit!(LaunchEventCreated {
        launch_event: launch_event.key(),
        issuer: launch_event.issuer,
        token_mint,
        phase_one_start: launch_event.auction_start,
        phase_two_start: launch_event.phase_one_end(),
        phase_three_start: launch_event.phase_two_end(),
        rjoe_per_sol: launch_event.rjoe_per_sol,
        index: launch_event.index,
    });

    emit!(IssuingTokenDeposited {
        launch_event: launch_event.key(),
        token_mint,
        amount: params.token_amount,
    });

    emit!(LaunchEventInitialized {
        launch_event: launch_event.key(),
        token_incentives_percent: launch_event.token_incentives_percent,
        floor_price: launch_event.floor_price,
        max_withdraw_penalty: launch_event.max_withdraw_penalty,
        fixed_withdraw_penalty: launch_event.fixed_withdraw_penalty,
        max_allocation: launch_event.max_allocation,
        user_timelock: launch_event.user_timelock,
        issuer_timelock: launch_event.issuer_timelock,
        token_reserve: launch_event.token_reserve,
        token_incentives: launch_event.token_incentives_balance,
    });

    msg!("Launch event {} created", launch_event.key());
    msg!("Token: {}", token_mint);
    msg!("Auction start: {}", launch_event.auction_start);
    msg!(
        "Tokens for sale: {}, incentives: {}",
        launch_event.token_reserve,
        launch_event.token_incentives_balance
    );

    Ok(())
}
