use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::RocketJoeError;
use crate::events::UserParticipated;
use crate::state::{LaunchEvent, RocketJoeFactory, UserAllocation};

#[derive(Accounts)]
pub struct Participate<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [LAUNCH_EVENT_SEED, launch_event.token_mint.as_ref()],
        bump = launch_event.bump,
    )]
    pub launch_event: Box<Account<'info, LaunchEvent>>,

    #[account(
        init_if_needed,
        payer = user,
        space = UserAllocation::SIZE,
        seeds = [USER_ALLOCATION_SEED, launch_event.key().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub user_allocation: Box<Account<'info, UserAllocation>>,

    /// Launch event WSOL vault
    #[account(
        mut,
        address = launch_event.quote_vault @ RocketJoeError::InvalidQuoteVault,
    )]
    pub quote_vault: Box<Account<'info, TokenAccount>>,

    /// Ticket token burnt on deposit
    #[account(
        mut,
        address = launch_event.rjoe_mint @ RocketJoeError::InvalidRJoeMint,
    )]
    pub rjoe_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        token::mint = rjoe_mint,
        token::authority = user,
    )]
    pub user_rjoe_account: Box<Account<'info, TokenAccount>>,

    /// Source of the WSOL for `deposit_wsol`
    #[account(
        mut,
        token::mint = launch_event.quote_mint,
        token::authority = user,
    )]
    pub user_wsol_account: Option<Box<Account<'info, TokenAccount>>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Deposit native SOL, wrapped into the event's WSOL vault
pub fn deposit_sol(ctx: Context<Participate>, amount: u64) -> Result<()> {
    participate(ctx, amount, true)
}

/// Deposit WSOL from the user's token account
pub fn deposit_wsol(ctx: Context<Participate>, amount: u64) -> Result<()> {
    participate(ctx, amount, false)
}

fn participate(ctx: Context<Participate>, amount: u64, native: bool) -> Result<()> {
    let launch_event = &mut ctx.accounts.launch_event;
    let user_allocation = &mut ctx.accounts.user_allocation;
    let user = &ctx.accounts.user;
    let clock = Clock::get()?;

    user_allocation.initialize_if_needed(
        user.key(),
        launch_event.key(),
        ctx.bumps.user_allocation,
    );

    launch_event.record_deposit(user_allocation, &user.key(), amount, clock.unix_timestamp)?;

    // Burn the ticket tokens
    let rjoe_amount = RocketJoeFactory::rjoe_needed(launch_event.rjoe_per_sol, amount)?;
    if rjoe_amount > 0 {
        token::burn(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Burn {
                    mint: ctx.accounts.rjoe_mint.to_account_info(),
                    from: ctx.accounts.user_rjoe_account.to_account_info(),
                    authority: user.to_account_info(),
                },
            ),
            rjoe_amount,
        )?;
    }

    if native {
        // Transfer SOL to vault
        anchor_lang::system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: user.to_account_info(),
                    to: ctx.accounts.quote_vault.to_account_info(),
                },
            ),
            amount,
        )?;
        token::sync_native(CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            token::SyncNative {
                account: ctx.accounts.quote_vault.to_account_info(),
            },
        ))?;
    } else {
        let user_wsol_account = ctx
            .accounts
            .user_wsol_account
            .as_ref()
            .ok_or(RocketJoeError::InvalidQuoteVault)?;

        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: user_wsol_account.to_account_info(),
                    to: ctx.accounts.quote_vault.to_account_info(),
                    authority: user.to_account_info(),
                },
            ),
            amount,
        )?;
    }

    emit!(UserParticipated {
        launch_event: launch_event.key(),
        user: user.key(),
        wsol_amount: amount,
        rjoe_amount,
        allocation: user_allocation.amount,
        wsol_reserve: launch_event.wsol_reserve,
        timestamp: clock.unix_timestamp,
    });

    msg!("User {} deposited {} lamports", user.key(), amount);
    msg!("rJOE burnt: {}", rjoe_amount);
    msg!(
        "Allocation: {} / {}",
        user_allocation.amount,
        launch_event.max_allocation
    );

    Ok(())
}
