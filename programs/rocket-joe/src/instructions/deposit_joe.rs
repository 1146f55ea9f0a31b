use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::RocketJoeError;
use crate::events::Deposit;
use crate::state::{RocketJoeStaking, StakerInfo};
use crate::utils::mint_rjoe;

#[derive(Accounts)]
pub struct DepositJoe<'info> {
    /// User who wants to stake JOE
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKING_SEED],
        bump = staking.bump,
    )]
    pub staking: Box<Account<'info, RocketJoeStaking>>,

    #[account(
        init_if_needed,
        payer = user,
        space = StakerInfo::SIZE,
        seeds = [STAKER_INFO_SEED, user.key().as_ref()],
        bump,
    )]
    pub staker_info: Box<Account<'info, StakerInfo>>,

    /// User's JOE account (source of tokens)
    #[account(
        mut,
        token::mint = staking.joe_mint,
        token::authority = user,
    )]
    pub user_joe_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        address = staking.joe_vault @ RocketJoeError::InvalidTokenVault,
    )]
    pub joe_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        address = staking.rjoe_mint @ RocketJoeError::InvalidRJoeMint,
    )]
    pub rjoe_mint: Box<Account<'info, Mint>>,

    /// Receives pending rJOE
    #[account(
        mut,
        token::mint = rjoe_mint,
        token::authority = user,
    )]
    pub user_rjoe_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Stake JOE, paying out pending rJOE first
pub fn deposit_joe(ctx: Context<DepositJoe>, amount: u64) -> Result<()> {
    let staking = &mut ctx.accounts.staking;
    let staker_info = &mut ctx.accounts.staker_info;
    let current_time = Clock::get()?.unix_timestamp;

    staker_info.initialize_if_needed(ctx.accounts.user.key(), ctx.bumps.staker_info);

    let reward = staking.deposit(staker_info, amount, current_time)?;

    mint_rjoe(
        &ctx.accounts.token_program,
        &ctx.accounts.rjoe_mint,
        &ctx.accounts.user_rjoe_account,
        &staking.to_account_info(),
        staking.bump,
        reward,
    )?;

    if amount > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.user_joe_account.to_account_info(),
                    to: ctx.accounts.joe_vault.to_account_info(),
                    authority: ctx.accounts.user.to_account_info(),
                },
            ),
            amount,
        )?;
    }

    emit!(Deposit {
        user: ctx.accounts.user.key(),
        amount,
        reward,
    });

    msg!(
        "User {} staked {} JOE, total staked {}",
        ctx.accounts.user.key(),
        amount,
        staker_info.amount
    );
    msg!("rJOE paid: {}", reward);

    Ok(())
}
