use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::RocketJoeError;

#[account]
pub struct RocketJoeFactory {
    /// Owner address (can update configuration and stop launch events)
    pub owner: Pubkey,

    /// Ticket token burnt on deposit
    pub rjoe_mint: Pubkey,

    /// Wrapped SOL mint
    pub wsol_mint: Pubkey,

    /// Receives early withdrawal penalties
    pub penalty_collector: Pubkey,

    /// AMM program used to create pools
    pub router: Pubkey,

    /// AMM pool config used to derive and create pools
    pub amm_config: Pubkey,

    /// rJOE burnt per SOL deposited
    pub rjoe_per_sol: u64,

    /// Phase one duration (seconds)
    pub phase_one_duration: i64,

    /// No-fee window at the start of phase one (seconds)
    pub phase_one_no_fee_duration: i64,

    /// Phase two duration (seconds)
    pub phase_two_duration: i64,

    /// Number of launch events created
    pub num_launch_events: u64,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 8],
}

/// Parameters checked by the factory before a launch event is created
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy)]
pub struct LaunchEventConfig {
    pub issuer: Pubkey,
    pub auction_start: i64,
    pub token_amount: u64,
    pub token_incentives_percent: u64,
    pub floor_price: u128,
    pub max_withdraw_penalty: u64,
    pub fixed_withdraw_penalty: u64,
    pub max_allocation: u64,
    pub user_timelock: i64,
    pub issuer_timelock: i64,
}

impl RocketJoeFactory {
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        32 + // rjoe_mint
        32 + // wsol_mint
        32 + // penalty_collector
        32 + // router
        32 + // amm_config
        8 + // rjoe_per_sol
        8 + // phase_one_duration
        8 + // phase_one_no_fee_duration
        8 + // phase_two_duration
        8 + // num_launch_events
        1 + // bump
        8 * 8; // reserved

    /// Initialize default configuration
    pub fn initialize_defaults(
        &mut self,
        owner: Pubkey,
        rjoe_mint: Pubkey,
        wsol_mint: Pubkey,
        penalty_collector: Pubkey,
        router: Pubkey,
        amm_config: Pubkey,
        bump: u8,
    ) -> Result<()> {
        for key in [rjoe_mint, penalty_collector, router, amm_config] {
            require_keys_neq!(key, Pubkey::default(), RocketJoeError::ZeroAddress);
        }

        self.owner = owner;
        self.rjoe_mint = rjoe_mint;
        self.wsol_mint = wsol_mint;
        self.penalty_collector = penalty_collector;
        self.router = router;
        self.amm_config = amm_config;
        self.rjoe_per_sol = DEFAULT_RJOE_PER_SOL;
        self.phase_one_duration = DEFAULT_PHASE_ONE_DURATION;
        self.phase_one_no_fee_duration = DEFAULT_PHASE_ONE_NO_FEE_DURATION;
        self.phase_two_duration = DEFAULT_PHASE_TWO_DURATION;
        self.num_launch_events = 0;
        self.bump = bump;

        Ok(())
    }

    /// Validate launch event creation parameters
    pub fn validate_launch_event_params(
        &self,
        token_mint: &Pubkey,
        params: &LaunchEventConfig,
        current_time: i64,
    ) -> Result<()> {
        require_keys_neq!(params.issuer, Pubkey::default(), RocketJoeError::ZeroAddress);
        require_keys_neq!(*token_mint, Pubkey::default(), RocketJoeError::ZeroAddress);
        require_keys_neq!(*token_mint, self.wsol_mint, RocketJoeError::TokenIsWsol);

        require!(
            params.auction_start > current_time,
            RocketJoeError::InvalidStartTime
        );

        require!(params.token_amount > 0, RocketJoeError::InvalidAmount);

        require!(
            params.token_incentives_percent <= PRECISION,
            RocketJoeError::IncentivesPercentTooBig
        );

        require!(
            params.max_withdraw_penalty <= MAX_PENALTY,
            RocketJoeError::MaxWithdrawPenaltyTooBig
        );

        require!(
            params.fixed_withdraw_penalty <= MAX_PENALTY,
            RocketJoeError::FixedWithdrawPenaltyTooBig
        );

        require!(
            params.user_timelock >= 0 && params.user_timelock <= MAX_USER_TIMELOCK,
            RocketJoeError::UserTimelockTooLong
        );

        require!(
            params.issuer_timelock > params.user_timelock,
            RocketJoeError::IssuerTimelockTooShort
        );

        Ok(())
    }

    /// Change the duration of phase one or phase two
    pub fn set_phase_duration(&mut self, phase: u8, duration: i64) -> Result<()> {
        match phase {
            1 => {
                require!(
                    duration > self.phase_one_no_fee_duration,
                    RocketJoeError::PhaseOneTooShort
                );
                self.phase_one_duration = duration;
            }
            2 => {
                require!(duration > 0, RocketJoeError::InvalidAmount);
                self.phase_two_duration = duration;
            }
            _ => return err!(RocketJoeError::InvalidPhase),
        }

        Ok(())
    }

    pub fn set_phase_one_no_fee_duration(&mut self, duration: i64) -> Result<()> {
        require!(
            duration >= 0 && duration < self.phase_one_duration,
            RocketJoeError::NoFeeDurationTooLong
        );
        self.phase_one_no_fee_duration = duration;

        Ok(())
    }

    /// rJOE that must be burnt to deposit `lamports`
    pub fn rjoe_needed(rjoe_per_sol: u64, lamports: u64) -> Result<u64> {
        let needed = (lamports as u128)
            .checked_mul(rjoe_per_sol as u128)
            .ok_or(RocketJoeError::MathOverflow)?
            .checked_div(anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL as u128)
            .ok_or(RocketJoeError::DivisionByZero)?;

        u64::try_from(needed).map_err(|_| error!(RocketJoeError::TypeCastFailed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn factory() -> RocketJoeFactory {
        let mut factory = RocketJoeFactory {
            owner: Pubkey::default(),
            rjoe_mint: Pubkey::default(),
            wsol_mint: Pubkey::default(),
            penalty_collector: Pubkey::default(),
            router: Pubkey::default(),
            amm_config: Pubkey::default(),
            rjoe_per_sol: 0,
            phase_one_duration: 0,
            phase_one_no_fee_duration: 0,
            phase_two_duration: 0,
            num_launch_events: 0,
            bump: 0,
            reserved: [0; 8],
        };
        factory
            .initialize_defaults(
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                anchor_spl::token::spl_token::native_mint::ID,
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                255,
            )
            .unwrap();
        factory
    }

    fn valid_params() -> LaunchEventConfig {
        LaunchEventConfig {
            issuer: Pubkey::new_unique(),
            auction_start: NOW + 60,
            token_amount: 1_000_000,
            token_incentives_percent: PRECISION / 20,
            floor_price: PRICE_PRECISION,
            max_withdraw_penalty: PRECISION / 2,
            fixed_withdraw_penalty: PRECISION * 4 / 10,
            max_allocation: 5_000_000_000,
            user_timelock: MAX_USER_TIMELOCK,
            issuer_timelock: 8 * 24 * 60 * 60,
        }
    }

    fn expect_err(params: LaunchEventConfig, token: Pubkey, expected: RocketJoeError) {
        let err = factory()
            .validate_launch_event_params(&token, &params, NOW)
            .unwrap_err();
        assert_eq!(err, expected.into());
    }

    #[test]
    fn test_defaults() {
        let factory = factory();
        assert_eq!(factory.phase_one_duration, DEFAULT_PHASE_ONE_DURATION);
        assert_eq!(factory.phase_one_no_fee_duration, DEFAULT_PHASE_ONE_NO_FEE_DURATION);
        assert_eq!(factory.phase_two_duration, DEFAULT_PHASE_TWO_DURATION);
        assert_eq!(factory.num_launch_events, 0);
    }

    #[test]
    fn test_zero_addresses_rejected_on_init() {
        let mut factory = factory();
        let err = factory
            .initialize_defaults(
                Pubkey::new_unique(),
                Pubkey::default(),
                anchor_spl::token::spl_token::native_mint::ID,
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                255,
            )
            .unwrap_err();
        assert_eq!(err, RocketJoeError::ZeroAddress.into());
    }

    #[test]
    fn test_valid_params() {
        factory()
            .validate_launch_event_params(&Pubkey::new_unique(), &valid_params(), NOW)
            .unwrap();
    }

    #[test]
    fn test_invalid_params() {
        let token = Pubkey::new_unique();

        expect_err(
            LaunchEventConfig { issuer: Pubkey::default(), ..valid_params() },
            token,
            RocketJoeError::ZeroAddress,
        );
        expect_err(valid_params(), Pubkey::default(), RocketJoeError::ZeroAddress);
        expect_err(
            valid_params(),
            anchor_spl::token::spl_token::native_mint::ID,
            RocketJoeError::TokenIsWsol,
        );
        expect_err(
            LaunchEventConfig { auction_start: NOW - 1, ..valid_params() },
            token,
            RocketJoeError::InvalidStartTime,
        );
        expect_err(
            LaunchEventConfig { auction_start: NOW, ..valid_params() },
            token,
            RocketJoeError::InvalidStartTime,
        );
        expect_err(
            LaunchEventConfig { token_incentives_percent: PRECISION + 1, ..valid_params() },
            token,
            RocketJoeError::IncentivesPercentTooBig,
        );
        expect_err(
            LaunchEventConfig { max_withdraw_penalty: MAX_PENALTY + 1, ..valid_params() },
            token,
            RocketJoeError::MaxWithdrawPenaltyTooBig,
        );
        expect_err(
            LaunchEventConfig { fixed_withdraw_penalty: MAX_PENALTY + 1, ..valid_params() },
            token,
            RocketJoeError::FixedWithdrawPenaltyTooBig,
        );
        expect_err(
            LaunchEventConfig { user_timelock: MAX_USER_TIMELOCK + 1, ..valid_params() },
            token,
            RocketJoeError::UserTimelockTooLong,
        );
        expect_err(
            LaunchEventConfig {
                user_timelock: MAX_USER_TIMELOCK,
                issuer_timelock: MAX_USER_TIMELOCK - 1,
                ..valid_params()
            },
            token,
            RocketJoeError::IssuerTimelockTooShort,
        );
        expect_err(
            LaunchEventConfig { issuer_timelock: MAX_USER_TIMELOCK, ..valid_params() },
            token,
            RocketJoeError::IssuerTimelockTooShort,
        );
    }

    #[test]
    fn test_set_phase_duration() {
        let mut factory = factory();
        factory.set_phase_duration(1, 86_401).unwrap();
        assert_eq!(factory.phase_one_duration, 86_401);
        factory.set_phase_duration(2, 5 * 86_400).unwrap();
        assert_eq!(factory.phase_two_duration, 5 * 86_400);

        // No-fee window is one day by default
        assert_eq!(
            factory.set_phase_duration(1, 86_400).unwrap_err(),
            RocketJoeError::PhaseOneTooShort.into()
        );
        assert_eq!(
            factory.set_phase_duration(3, 86_400).unwrap_err(),
            RocketJoeError::InvalidPhase.into()
        );
    }

    #[test]
    fn test_set_no_fee_duration() {
        let mut factory = factory();
        factory.set_phase_one_no_fee_duration(3_600).unwrap();
        assert_eq!(factory.phase_one_no_fee_duration, 3_600);
        assert_eq!(
            factory
                .set_phase_one_no_fee_duration(factory.phase_one_duration)
                .unwrap_err(),
            RocketJoeError::NoFeeDurationTooLong.into()
        );
    }

    #[test]
    fn test_rjoe_needed() {
        let one_sol = anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;
        assert_eq!(
            RocketJoeFactory::rjoe_needed(DEFAULT_RJOE_PER_SOL, one_sol).unwrap(),
            DEFAULT_RJOE_PER_SOL
        );
        assert_eq!(
            RocketJoeFactory::rjoe_needed(DEFAULT_RJOE_PER_SOL, one_sol / 4).unwrap(),
            DEFAULT_RJOE_PER_SOL / 4
        );
        assert_eq!(RocketJoeFactory::rjoe_needed(DEFAULT_RJOE_PER_SOL, 0).unwrap(), 0);
    }
}
