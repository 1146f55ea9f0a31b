use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;
use anchor_spl::token_interface::TokenInterface;
use cp_amm::state::Config;

use crate::const_pda::const_authority::{POOL_ID, VAULT_BUMP};
use crate::constants::*;
use crate::errors::RocketJoeError;
use crate::events::LiquidityPoolCreated;
use crate::state::{LaunchEvent, Phase};
use crate::utils::{check_pool_not_created, get_initial_sqrt_price, get_liquidity_for_adding_liquidity};

#[derive(Accounts)]
pub struct CreatePair<'info> {
    /// Anyone can create the pool once phase three starts
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LAUNCH_EVENT_SEED, launch_event.token_mint.as_ref()],
        bump = launch_event.bump,
    )]
    pub launch_event: Box<Account<'info, LaunchEvent>>,

    /// Vault authority, creator and owner of the pool position
    #[account(
        mut,
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    #[account(
        mut,
        address = launch_event.token_vault @ RocketJoeError::InvalidTokenVault,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        address = launch_event.quote_vault @ RocketJoeError::InvalidQuoteVault,
    )]
    pub quote_vault: Box<Account<'info, TokenAccount>>,

    /// CHECK: pool authority
    #[account(
        mut,
        address = POOL_ID,
    )]
    pub pool_authority: AccountInfo<'info>,
    /// Pool config
    #[account(address = launch_event.amm_config @ RocketJoeError::InvalidAmmConfig)]
    pub pool_config: AccountLoader<'info, Config>,
    /// CHECK: pool, address checked against the config and mints
    #[account(mut)]
    pub pool: UncheckedAccount<'info>,
    /// CHECK: position nft mint
    #[account(mut, signer)]
    pub position_nft_mint: UncheckedAccount<'info>,
    /// CHECK: position nft account
    #[account(mut)]
    pub position_nft_account: UncheckedAccount<'info>,
    /// CHECK:
    #[account(mut)]
    pub position: UncheckedAccount<'info>,
    /// CHECK:
    #[account(
        address = cp_amm::ID,
        constraint = amm_program.key() == launch_event.router @ RocketJoeError::InvalidAmmProgram,
    )]
    pub amm_program: UncheckedAccount<'info>,
    /// CHECK: base token mint
    #[account(
        mut,
        address = launch_event.token_mint @ RocketJoeError::InvalidTokenMint
    )]
    pub base_mint: UncheckedAccount<'info>,
    /// CHECK: quote token mint
    #[account(
        mut,
        address = launch_event.quote_mint @ RocketJoeError::InvalidQuoteMint
    )]
    pub quote_mint: UncheckedAccount<'info>,
    /// CHECK:
    #[account(mut)]
    pub token_a_vault: UncheckedAccount<'info>,
    /// CHECK:
    #[account(mut)]
    pub token_b_vault: UncheckedAccount<'info>,
    pub token_base_program: Interface<'info, TokenInterface>,
    pub token_quote_program: Interface<'info, TokenInterface>,
    pub token_2022_program: Interface<'info, TokenInterface>,
    /// CHECK: damm event authority
    pub damm_event_authority: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreatePair<'info> {
    /// Create the DAMM v2 pool with the auction proceeds.
    ///
    /// `rent_lamports` is sent to the vault authority first; it pays for the
    /// pool, position and NFT accounts created by the AMM.
    pub fn create_pair(&mut self, rent_lamports: u64) -> Result<()> {
        let clock = Clock::get()?;
        let launch_event = &self.launch_event;

        launch_event.require_not_stopped()?;
        require!(
            launch_event.phase(clock.unix_timestamp) == Phase::PhaseThree,
            RocketJoeError::NotInPhaseThree
        );
        require!(!launch_event.pair_created, RocketJoeError::PairAlreadyCreated);
        check_pool_not_created(
            &self.pool.to_account_info(),
            &launch_event.amm_config,
            &launch_event.token_mint,
            &launch_event.quote_mint,
        )?;

        let mut allocation = launch_event.compute_pair_allocation()?;

        let (sqrt_price, liquidity) = {
            let config = self.pool_config.load()?;
            let sqrt_price = get_initial_sqrt_price(
                allocation.token_amount,
                allocation.wsol_amount,
                config.sqrt_min_price,
                config.sqrt_max_price,
            )?;
            let liquidity = get_liquidity_for_adding_liquidity(
                allocation.token_amount,
                allocation.wsol_amount,
                sqrt_price,
                config.sqrt_min_price,
                config.sqrt_max_price,
            )?;
            (sqrt_price, liquidity)
        };
        require!(liquidity > MINIMUM_LIQUIDITY, RocketJoeError::InvalidAmount);

        if rent_lamports > 0 {
            anchor_lang::system_program::transfer(
                CpiContext::new(
                    self.system_program.to_account_info(),
                    anchor_lang::system_program::Transfer {
                        from: self.payer.to_account_info(),
                        to: self.vault_authority.to_account_info(),
                    },
                ),
                rent_lamports,
            )?;
        }

        let token_before = self.token_vault.amount;
        let quote_before = self.quote_vault.amount;
        let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];

        cp_amm::cpi::initialize_pool(
            CpiContext::new_with_signer(
                self.amm_program.to_account_info(),
                cp_amm::cpi::accounts::InitializePoolCtx {
                    creator: self.vault_authority.to_account_info(),
                    position_nft_mint: self.position_nft_mint.to_account_info(),
                    position_nft_account: self.position_nft_account.to_account_info(),
                    payer: self.vault_authority.to_account_info(),
                    config: self.pool_config.to_account_info(),
                    pool_authority: self.pool_authority.to_account_info(),
                    pool: self.pool.to_account_info(),
                    position: self.position.to_account_info(),
                    token_a_mint: self.base_mint.to_account_info(),
                    token_b_mint: self.quote_mint.to_account_info(),
                    token_a_vault: self.token_a_vault.to_account_info(),
                    token_b_vault: self.token_b_vault.to_account_info(),
                    payer_token_a: self.token_vault.to_account_info(),
                    payer_token_b: self.quote_vault.to_account_info(),
                    token_a_program: self.token_base_program.to_account_info(),
                    token_b_program: self.token_quote_program.to_account_info(),
                    token_2022_program: self.token_2022_program.to_account_info(),
                    system_program: self.system_program.to_account_info(),
                    event_authority: self.damm_event_authority.to_account_info(),
                    program: self.amm_program.to_account_info(),
                },
                signer_seeds,
            ),
            cp_amm::InitializePoolParameters {
                liquidity,
                sqrt_price,
                activation_point: None,
            },
        )?;

        // The minimum liquidity stays in the pool forever
        cp_amm::cpi::permanent_lock_position(
            CpiContext::new_with_signer(
                self.amm_program.to_account_info(),
                cp_amm::cpi::accounts::PermanentLockPositionCtx {
                    pool: self.pool.to_account_info(),
                    position: self.position.to_account_info(),
                    position_nft_account: self.position_nft_account.to_account_info(),
                    owner: self.vault_authority.to_account_info(),
                    event_authority: self.damm_event_authority.to_account_info(),
                    program: self.amm_program.to_account_info(),
                },
                signer_seeds,
            ),
            MINIMUM_LIQUIDITY,
        )?;

        // Tokens the pool didn't take stay with the issuer's reserve,
        // WSOL it didn't take is refunded to participants
        self.token_vault.reload()?;
        self.quote_vault.reload()?;
        allocation.token_amount = token_before
            .checked_sub(self.token_vault.amount)
            .ok_or(RocketJoeError::MathOverflow)?;
        allocation.wsol_amount = quote_before
            .checked_sub(self.quote_vault.amount)
            .ok_or(RocketJoeError::MathOverflow)?;

        let launch_event = &mut self.launch_event;
        launch_event.record_pair_created(&allocation, liquidity)?;
        launch_event.pool = Some(self.pool.key());
        launch_event.position = Some(self.position.key());
        launch_event.position_nft_account = Some(self.position_nft_account.key());

        emit!(LiquidityPoolCreated {
            launch_event: launch_event.key(),
            pool: self.pool.key(),
            position: self.position.key(),
            token_mint: launch_event.token_mint,
            quote_mint: launch_event.quote_mint,
            token_amount: allocation.token_amount,
            wsol_amount: allocation.wsol_amount,
            lp_supply: launch_event.lp_supply,
            floor_price_met: allocation.floor_price_met,
            timestamp: clock.unix_timestamp,
        });

        msg!("Pool {} created", self.pool.key());
        msg!(
            "Tokens: {}, WSOL: {}, floor price met: {}",
            allocation.token_amount,
            allocation.wsol_amount,
            allocation.floor_price_met
        );
        msg!("Liquidity: {} ({} locked)", liquidity, MINIMUM_LIQUIDITY);

        Ok(())
    }
}
