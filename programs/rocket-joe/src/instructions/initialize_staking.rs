use anchor_lang::prelude::*;
use anchor_spl::metadata::{create_metadata_accounts_v3, CreateMetadataAccountsV3, Metadata};
use anchor_spl::token::{Mint, Token, TokenAccount};
use mpl_token_metadata::types::DataV2;

use crate::constants::*;
use crate::state::RocketJoeStaking;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitializeStakingParams {
    pub rjoe_per_sec: u64,
    pub rjoe_uri: String,
}

#[derive(Accounts)]
pub struct InitializeStaking<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = RocketJoeStaking::SIZE,
        seeds = [STAKING_SEED],
        bump,
    )]
    pub staking: Box<Account<'info, RocketJoeStaking>>,

    /// vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    /// Staked token
    pub joe_mint: Box<Account<'info, Mint>>,

    /// Ticket token, only the staking account can mint it
    #[account(
        init,
        payer = owner,
        seeds = [RJOE_MINT_SEED],
        bump,
        mint::decimals = RJOE_DECIMALS,
        mint::authority = staking.key(),
    )]
    pub rjoe_mint: Box<Account<'info, Mint>>,

    /// Holds staked JOE
    #[account(
        init,
        payer = owner,
        seeds = [TOKEN_VAULT, staking.key().as_ref(), joe_mint.key().as_ref()],
        bump,
        token::mint = joe_mint,
        token::authority = vault_authority,
    )]
    pub joe_vault: Box<Account<'info, TokenAccount>>,

    /// Token metadata account
    /// CHECK: Validated by Metaplex program
    #[account(
        mut,
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            rjoe_mint.key().as_ref(),
        ],
        seeds::program = metadata_program.key(),
        bump,
    )]
    pub metadata: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn initialize_staking(
    ctx: Context<InitializeStaking>,
    params: InitializeStakingParams,
) -> Result<()> {
    let staking = &mut ctx.accounts.staking;
    let clock = Clock::get()?;

    staking.initialize(
        ctx.accounts.owner.key(),
        ctx.accounts.joe_mint.key(),
        ctx.accounts.rjoe_mint.key(),
        ctx.accounts.joe_vault.key(),
        params.rjoe_per_sec,
        clock.unix_timestamp,
        ctx.bumps.staking,
    );

    let seeds = &[STAKING_SEED, &[staking.bump]];
    let signer_seeds = &[&seeds[..]];

    // Create metadata
    let metadata_accounts = CreateMetadataAccountsV3 {
        metadata: ctx.accounts.metadata.to_account_info(),
        mint: ctx.accounts.rjoe_mint.to_account_info(),
        mint_authority: staking.to_account_info(),
        payer: ctx.accounts.owner.to_account_info(),
        update_authority: staking.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
        rent: ctx.accounts.rent.to_account_info(),
    };

    let data = DataV2 {
        name: RJOE_NAME.to_string(),
        symbol: RJOE_SYMBOL.to_string(),
        uri: params.rjoe_uri,
        seller_fee_basis_points: 0,
        creators: None,
        collection: None,
        uses: None,
    };

    create_metadata_accounts_v3(
        CpiContext::new_with_signer(
            ctx.accounts.metadata_program.to_account_info(),
            metadata_accounts,
            signer_seeds,
        ),
        data,
        false, // is_mutable
        true,  // update_authority_is_signer
        None,  // collection_details
    )?;

    msg!("Rocket Joe staking initialized successfully");
    msg!("JOE: {}", staking.joe_mint);
    msg!("rJOE: {}", staking.rjoe_mint);
    msg!("rJOE per second: {}", staking.rjoe_per_sec);

    Ok(())
}
