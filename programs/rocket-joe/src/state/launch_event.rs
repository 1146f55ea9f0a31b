use anchor_lang::prelude::*;
use ruint::aliases::U256;

use crate::constants::*;
use crate::errors::RocketJoeError;
use crate::state::{LaunchEventConfig, RocketJoeFactory, UserAllocation};

#[derive(Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq)]
pub enum Phase {
    NotStarted, // Before the auction start
    PhaseOne,   // Deposits and penalised withdrawals
    PhaseTwo,   // Cooldown, fixed penalty withdrawals only
    PhaseThree, // Pool creation and liquidity withdrawals
}

#[account]
pub struct LaunchEvent {
    /// Supplies the auctioned token and receives half of the liquidity
    pub issuer: Pubkey,

    pub token_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub token_vault: Pubkey,
    pub quote_vault: Pubkey,

    // ===== Factory snapshot =====
    pub rjoe_mint: Pubkey,
    pub rjoe_per_sol: u64,
    pub penalty_collector: Pubkey,
    pub router: Pubkey,
    pub amm_config: Pubkey,

    // ===== Time Management =====
    pub auction_start: i64,
    pub phase_one_duration: i64,
    pub phase_one_no_fee_duration: i64,
    pub phase_two_duration: i64,

    /// Seconds after phase three starts before users can withdraw liquidity
    pub user_timelock: i64,

    /// Seconds after phase three starts before the issuer can withdraw liquidity
    pub issuer_timelock: i64,

    // ===== Auction Parameters =====
    pub token_incentives_percent: u64,
    pub floor_price: u128,
    pub max_withdraw_penalty: u64,
    pub fixed_withdraw_penalty: u64,
    pub max_allocation: u64,

    // ===== Accounting =====
    /// Tokens offered for sale
    pub token_reserve: u64,

    /// Tokens held for incentives
    pub token_incentives_balance: u64,

    /// Part of the incentives owed to participants
    pub token_incentives_for_users: u64,

    /// Part of the incentives refunded to the issuer when the floor isn't met
    pub token_incentive_issuer_refund: u64,

    /// WSOL owed to participants: deposits until paired, then what the pool left behind
    pub wsol_reserve: u64,

    /// Deposits at pairing, every participant share is taken out of it
    pub wsol_allocated: u64,

    /// WSOL the pool didn't take, refunded pro rata with the liquidity
    pub wsol_refund: u64,

    /// Tokens sent to the pool
    pub token_allocated: u64,

    /// Liquidity shared between participants and the issuer
    pub lp_supply: u128,

    /// Allocations currently holding a deposit
    pub participants_count: u32,

    // ===== Flags =====
    pub initialized: bool,
    pub stopped: bool,
    pub pair_created: bool,
    pub issuer_has_withdrawn_liquidity: bool,
    pub issuer_has_withdrawn_incentives: bool,

    // ===== AMM handles (set once paired) =====
    pub pool: Option<Pubkey>,
    pub position: Option<Pubkey>,
    pub position_nft_account: Option<Pubkey>,

    pub index: u64,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 7],
}

/// Amounts sent to the pool at pair creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairAllocation {
    pub wsol_amount: u64,
    pub token_amount: u64,
    pub floor_price_met: bool,
    pub token_incentives_for_users: u64,
    pub token_incentive_issuer_refund: u64,
}

/// Read-only snapshot returned by the lens instruction
#[derive(Debug, Clone, AnchorSerialize, AnchorDeserialize, PartialEq, Eq)]
pub struct LaunchEventInfo {
    pub launch_event: Pubkey,
    pub issuer: Pubkey,
    pub token_mint: Pubkey,
    pub phase: Phase,
    pub auction_start: i64,
    pub phase_one_end: i64,
    pub phase_one_no_fee_end: i64,
    pub phase_two_end: i64,
    pub current_penalty: u64,
    pub floor_price: u128,
    pub max_allocation: u64,
    pub rjoe_per_sol: u64,
    pub token_reserve: u64,
    pub token_incentives_balance: u64,
    pub wsol_reserve: u64,
    pub wsol_allocated: u64,
    pub lp_supply: u128,
    pub participants_count: u32,
    pub stopped: bool,
    pub pair_created: bool,
}

/// Per-user view returned by the lens instruction
#[derive(Debug, Clone, AnchorSerialize, AnchorDeserialize, PartialEq, Eq)]
pub struct UserAllocationInfo {
    pub launch_event: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub pair_balance: u128,
    pub wsol_refund: u64,
    pub incentives: u64,
    pub has_withdrawn_pair: bool,
    pub has_withdrawn_incentives: bool,
}

impl LaunchEvent {
    pub const SIZE: usize = 8 + // discriminator
        32 + // issuer
        32 + // token_mint
        32 + // quote_mint
        32 + // token_vault
        32 + // quote_vault
        32 + // rjoe_mint
        8 + // rjoe_per_sol
        32 + // penalty_collector
        32 + // router
        32 + // amm_config
        8 + // auction_start
        8 + // phase_one_duration
        8 + // phase_one_no_fee_duration
        8 + // phase_two_duration
        8 + // user_timelock
        8 + // issuer_timelock
        8 + // token_incentives_percent
        16 + // floor_price
        8 + // max_withdraw_penalty
        8 + // fixed_withdraw_penalty
        8 + // max_allocation
        8 + // token_reserve
        8 + // token_incentives_balance
        8 + // token_incentives_for_users
        8 + // token_incentive_issuer_refund
        8 + // wsol_reserve
        8 + // wsol_allocated
        8 + // wsol_refund
        8 + // token_allocated
        16 + // lp_supply
        4 + // participants_count
        1 + // initialized
        1 + // stopped
        1 + // pair_created
        1 + // issuer_has_withdrawn_liquidity
        1 + // issuer_has_withdrawn_incentives
        33 + // pool (Option<Pubkey>)
        33 + // position (Option<Pubkey>)
        33 + // position_nft_account (Option<Pubkey>)
        8 + // index
        1 + // bump
        8 * 7; // reserved

    /// One-time initialization, snapshots the factory configuration
    pub fn initialize(
        &mut self,
        factory: &RocketJoeFactory,
        token_mint: Pubkey,
        token_vault: Pubkey,
        quote_vault: Pubkey,
        params: &LaunchEventConfig,
        bump: u8,
    ) -> Result<()> {
        require!(!self.initialized, RocketJoeError::AlreadyInitialized);

        self.issuer = params.issuer;
        self.token_mint = token_mint;
        self.quote_mint = factory.wsol_mint;
        self.token_vault = token_vault;
        self.quote_vault = quote_vault;

        self.rjoe_mint = factory.rjoe_mint;
        self.rjoe_per_sol = factory.rjoe_per_sol;
        self.penalty_collector = factory.penalty_collector;
        self.router = factory.router;
        self.amm_config = factory.amm_config;

        self.auction_start = params.auction_start;
        self.phase_one_duration = factory.phase_one_duration;
        self.phase_one_no_fee_duration = factory.phase_one_no_fee_duration;
        self.phase_two_duration = factory.phase_two_duration;
        self.user_timelock = params.user_timelock;
        self.issuer_timelock = params.issuer_timelock;

        self.token_incentives_percent = params.token_incentives_percent;
        self.floor_price = params.floor_price;
        self.max_withdraw_penalty = params.max_withdraw_penalty;
        self.fixed_withdraw_penalty = params.fixed_withdraw_penalty;
        self.max_allocation = params.max_allocation;

        let incentives = mul_div(
            params.token_amount,
            params.token_incentives_percent,
            PRECISION,
        )?;
        self.token_incentives_balance = incentives;
        self.token_incentives_for_users = incentives;
        self.token_incentive_issuer_refund = 0;
        self.token_reserve = params
            .token_amount
            .checked_sub(incentives)
            .ok_or(RocketJoeError::MathOverflow)?;

        self.wsol_reserve = 0;
        self.wsol_allocated = 0;
        self.wsol_refund = 0;
        self.token_allocated = 0;
        self.lp_supply = 0;
        self.participants_count = 0;

        self.stopped = false;
        self.pair_created = false;
        self.issuer_has_withdrawn_liquidity = false;
        self.issuer_has_withdrawn_incentives = false;
        self.pool = None;
        self.position = None;
        self.position_nft_account = None;

        self.index = factory.num_launch_events;
        self.bump = bump;
        self.initialized = true;

        Ok(())
    }

    pub fn phase_one_end(&self) -> i64 {
        self.auction_start + self.phase_one_duration
    }

    pub fn phase_one_no_fee_end(&self) -> i64 {
        self.auction_start + self.phase_one_no_fee_duration
    }

    pub fn phase_two_end(&self) -> i64 {
        self.phase_one_end() + self.phase_two_duration
    }

    /// Current phase, derived from the clock only
    pub fn phase(&self, current_time: i64) -> Phase {
        if current_time < self.auction_start {
            Phase::NotStarted
        } else if current_time < self.phase_one_end() {
            Phase::PhaseOne
        } else if current_time < self.phase_two_end() {
            Phase::PhaseTwo
        } else {
            Phase::PhaseThree
        }
    }

    pub fn require_not_stopped(&self) -> Result<()> {
        require!(!self.stopped, RocketJoeError::Stopped);
        Ok(())
    }

    /// Withdraw penalty at `current_time`, scaled by `PRECISION`
    pub fn get_penalty(&self, current_time: i64) -> u64 {
        let elapsed = current_time.saturating_sub(self.auction_start);

        if elapsed < self.phase_one_no_fee_duration {
            0
        } else if elapsed < self.phase_one_duration {
            let into_fee_window = (elapsed - self.phase_one_no_fee_duration) as u128;
            let fee_window = (self.phase_one_duration - self.phase_one_no_fee_duration) as u128;

            // into_fee_window < fee_window so the result stays below max_withdraw_penalty
            (into_fee_window * self.max_withdraw_penalty as u128 / fee_window) as u64
        } else {
            self.fixed_withdraw_penalty
        }
    }

    /// Check a deposit and record it on both accounts
    pub fn record_deposit(
        &mut self,
        allocation: &mut UserAllocation,
        user: &Pubkey,
        amount: u64,
        current_time: i64,
    ) -> Result<()> {
        self.require_not_stopped()?;
        require!(
            self.phase(current_time) == Phase::PhaseOne,
            RocketJoeError::NotInPhaseOne
        );
        require_keys_neq!(*user, self.issuer, RocketJoeError::IssuerCannotParticipate);
        require!(amount > 0, RocketJoeError::InvalidAmount);

        let new_amount = allocation
            .amount
            .checked_add(amount)
            .ok_or(RocketJoeError::MathOverflow)?;
        require!(
            new_amount <= self.max_allocation,
            RocketJoeError::MaxAllocationExceeded
        );

        if allocation.amount == 0 {
            self.participants_count = self
                .participants_count
                .checked_add(1)
                .ok_or(RocketJoeError::MathOverflow)?;
        }

        allocation.amount = new_amount;
        self.wsol_reserve = self
            .wsol_reserve
            .checked_add(amount)
            .ok_or(RocketJoeError::MathOverflow)?;

        Ok(())
    }

    /// Check a withdrawal and record it, returns the penalty fee
    pub fn record_withdraw(
        &mut self,
        allocation: &mut UserAllocation,
        amount: u64,
        current_time: i64,
    ) -> Result<u64> {
        self.require_not_stopped()?;
        let phase = self.phase(current_time);
        require!(
            phase == Phase::PhaseOne || phase == Phase::PhaseTwo,
            RocketJoeError::UnableToWithdraw
        );
        require!(amount > 0, RocketJoeError::InvalidAmount);
        require!(
            amount <= allocation.amount,
            RocketJoeError::InsufficientAllocation
        );

        let fee = mul_div(amount, self.get_penalty(current_time), PRECISION)?;

        allocation.amount -= amount;
        self.wsol_reserve = self
            .wsol_reserve
            .checked_sub(amount)
            .ok_or(RocketJoeError::MathOverflow)?;
        if allocation.amount == 0 {
            self.remove_participant()?;
        }

        Ok(fee)
    }

    fn remove_participant(&mut self) -> Result<()> {
        self.participants_count = self
            .participants_count
            .checked_sub(1)
            .ok_or(RocketJoeError::MathOverflow)?;

        Ok(())
    }

    /// Stop the event for good, only emergency withdrawals remain.
    /// Once paired the deposits live in the pool and principals exit through
    /// their liquidity, so the event can no longer be stopped.
    pub fn stop(&mut self) -> Result<()> {
        self.require_not_stopped()?;
        require!(!self.pair_created, RocketJoeError::PairAlreadyCreated);
        self.stopped = true;

        Ok(())
    }

    /// Return a participant's whole deposit, without penalty
    pub fn record_user_emergency_withdraw(
        &mut self,
        allocation: &mut UserAllocation,
    ) -> Result<u64> {
        require!(self.stopped, RocketJoeError::NotStopped);
        require!(!self.pair_created, RocketJoeError::PairAlreadyCreated);

        let amount = allocation.amount;
        require!(amount > 0, RocketJoeError::NothingToWithdraw);

        allocation.amount = 0;
        self.wsol_reserve = self
            .wsol_reserve
            .checked_sub(amount)
            .ok_or(RocketJoeError::MathOverflow)?;
        self.remove_participant()?;

        Ok(amount)
    }

    /// Return the issuer's unsold tokens and incentives
    pub fn record_issuer_emergency_withdraw(&mut self) -> Result<u64> {
        require!(self.stopped, RocketJoeError::NotStopped);

        let amount = self
            .token_reserve
            .checked_add(self.token_incentives_balance)
            .ok_or(RocketJoeError::MathOverflow)?;
        require!(amount > 0, RocketJoeError::NothingToWithdraw);

        self.token_reserve = 0;
        self.token_incentives_balance = 0;
        self.token_incentives_for_users = 0;
        self.token_incentive_issuer_refund = 0;

        Ok(amount)
    }

    /// Work out how much of each side goes into the pool
    pub fn compute_pair_allocation(&self) -> Result<PairAllocation> {
        require!(self.wsol_reserve > 0, RocketJoeError::NoWsolBalance);
        require!(self.token_reserve > 0, RocketJoeError::InvalidAmount);

        let price = (self.wsol_reserve as u128)
            .checked_mul(PRICE_PRECISION)
            .ok_or(RocketJoeError::MathOverflow)?
            / self.token_reserve as u128;

        if price >= self.floor_price {
            return Ok(PairAllocation {
                wsol_amount: self.wsol_reserve,
                token_amount: self.token_reserve,
                floor_price_met: true,
                token_incentives_for_users: self.token_incentives_for_users,
                token_incentive_issuer_refund: 0,
            });
        }

        // Floor not met: only sell what the deposits buy at the floor price
        let token_amount = (self.wsol_reserve as u128)
            .checked_mul(PRICE_PRECISION)
            .ok_or(RocketJoeError::MathOverflow)?
            .checked_div(self.floor_price)
            .ok_or(RocketJoeError::DivisionByZero)?;
        let token_amount =
            u64::try_from(token_amount).map_err(|_| error!(RocketJoeError::TypeCastFailed))?;

        let for_users = mul_div(
            self.token_incentives_for_users,
            token_amount,
            self.token_reserve,
        )?;
        let issuer_refund = self
            .token_incentives_balance
            .checked_sub(for_users)
            .ok_or(RocketJoeError::MathOverflow)?;

        Ok(PairAllocation {
            wsol_amount: self.wsol_reserve,
            token_amount,
            floor_price_met: false,
            token_incentives_for_users: for_users,
            token_incentive_issuer_refund: issuer_refund,
        })
    }

    /// Record a successful pool creation. `allocation` holds what the pool
    /// actually took, WSOL it left in the vault stays owed to participants.
    pub fn record_pair_created(
        &mut self,
        allocation: &PairAllocation,
        liquidity: u128,
    ) -> Result<()> {
        require!(!self.pair_created, RocketJoeError::PairAlreadyCreated);

        self.lp_supply = liquidity
            .checked_sub(MINIMUM_LIQUIDITY)
            .ok_or(RocketJoeError::MathOverflow)?;
        let wsol_refund = self
            .wsol_reserve
            .checked_sub(allocation.wsol_amount)
            .ok_or(RocketJoeError::MathOverflow)?;
        self.wsol_allocated = self.wsol_reserve;
        self.wsol_refund = wsol_refund;
        self.wsol_reserve = wsol_refund;
        self.token_allocated = allocation.token_amount;
        self.token_reserve = self
            .token_reserve
            .checked_sub(allocation.token_amount)
            .ok_or(RocketJoeError::MathOverflow)?;
        self.token_incentives_for_users = allocation.token_incentives_for_users;
        self.token_incentive_issuer_refund = allocation.token_incentive_issuer_refund;
        self.pair_created = true;

        Ok(())
    }

    /// Liquidity a participant can still withdraw, `amount * lp_supply / (2 * wsol_allocated)`
    pub fn user_pair_balance(&self, allocation: &UserAllocation) -> Result<u128> {
        if self.wsol_allocated == 0 || allocation.has_withdrawn_pair {
            return Ok(0);
        }

        // lp_supply is a Q64 liquidity value, the product needs more than 128 bits
        let liquidity = U256::from(allocation.amount)
            .checked_mul(U256::from(self.lp_supply))
            .ok_or(RocketJoeError::MathOverflow)?
            .checked_div(U256::from(self.wsol_allocated) * U256::from(2u8))
            .ok_or(RocketJoeError::DivisionByZero)?;

        u128::try_from(liquidity).map_err(|_| error!(RocketJoeError::TypeCastFailed))
    }

    /// Participant's part of the WSOL the pool left behind
    pub fn user_wsol_refund(&self, allocation: &UserAllocation) -> Result<u64> {
        if self.wsol_allocated == 0 || allocation.has_withdrawn_pair {
            return Ok(0);
        }

        mul_div(allocation.amount, self.wsol_refund, self.wsol_allocated)
    }

    /// Liquidity the issuer can still withdraw
    pub fn issuer_pair_balance(&self) -> u128 {
        if self.wsol_allocated == 0 || self.issuer_has_withdrawn_liquidity {
            return 0;
        }

        self.lp_supply / 2
    }

    /// Incentive tokens a participant can still claim
    pub fn user_incentives(&self, allocation: &UserAllocation) -> Result<u64> {
        if self.wsol_allocated == 0 || allocation.has_withdrawn_incentives {
            return Ok(0);
        }

        mul_div(
            allocation.amount,
            self.token_incentives_for_users,
            self.wsol_allocated,
        )
    }

    /// Incentive tokens refunded to the issuer
    pub fn issuer_incentives(&self) -> u64 {
        if !self.pair_created || self.issuer_has_withdrawn_incentives {
            return 0;
        }

        self.token_incentive_issuer_refund
    }

    /// Earliest time a principal may withdraw liquidity
    pub fn liquidity_unlock_time(&self, is_issuer: bool) -> i64 {
        let timelock = if is_issuer {
            self.issuer_timelock
        } else {
            self.user_timelock
        };
        self.phase_two_end() + timelock
    }

    /// Check that liquidity can be withdrawn now, shared by both principals
    pub fn check_liquidity_withdrawal(&self, is_issuer: bool, current_time: i64) -> Result<()> {
        self.require_not_stopped()?;
        require!(
            self.phase(current_time) == Phase::PhaseThree,
            RocketJoeError::NotInPhaseThree
        );
        let timelock_error = if is_issuer {
            RocketJoeError::IssuerTimelockNotElapsed
        } else {
            RocketJoeError::UserTimelockNotElapsed
        };
        require!(
            current_time >= self.liquidity_unlock_time(is_issuer),
            timelock_error
        );
        require!(self.pair_created, RocketJoeError::PairNotCreated);

        Ok(())
    }

    /// Mark the issuer's liquidity as withdrawn, returns the liquidity and the unsold tokens
    pub fn record_issuer_liquidity_withdrawal(&mut self, current_time: i64) -> Result<(u128, u64)> {
        self.check_liquidity_withdrawal(true, current_time)?;
        require!(
            !self.issuer_has_withdrawn_liquidity,
            RocketJoeError::LiquidityAlreadyWithdrawn
        );

        let liquidity = self.issuer_pair_balance();
        let unsold_tokens = self.token_reserve;

        self.issuer_has_withdrawn_liquidity = true;
        self.token_reserve = 0;

        Ok((liquidity, unsold_tokens))
    }

    /// Mark a participant's liquidity as withdrawn, returns the liquidity and
    /// the WSOL refund
    pub fn record_user_liquidity_withdrawal(
        &mut self,
        allocation: &mut UserAllocation,
        current_time: i64,
    ) -> Result<(u128, u64)> {
        self.check_liquidity_withdrawal(false, current_time)?;
        require!(
            !allocation.has_withdrawn_pair,
            RocketJoeError::LiquidityAlreadyWithdrawn
        );

        let liquidity = self.user_pair_balance(allocation)?;
        require!(liquidity > 0, RocketJoeError::NothingToWithdraw);
        let wsol_refund = self.user_wsol_refund(allocation)?;

        allocation.has_withdrawn_pair = true;
        self.wsol_reserve = self
            .wsol_reserve
            .checked_sub(wsol_refund)
            .ok_or(RocketJoeError::MathOverflow)?;

        Ok((liquidity, wsol_refund))
    }

    fn check_incentives_withdrawal(&self, current_time: i64) -> Result<()> {
        self.require_not_stopped()?;
        require!(
            self.phase(current_time) == Phase::PhaseThree,
            RocketJoeError::NotInPhaseThree
        );
        require!(self.pair_created, RocketJoeError::PairNotCreated);

        Ok(())
    }

    pub fn record_issuer_incentives_withdrawal(&mut self, current_time: i64) -> Result<u64> {
        self.check_incentives_withdrawal(current_time)?;
        require!(
            !self.issuer_has_withdrawn_incentives,
            RocketJoeError::IncentivesAlreadyWithdrawn
        );

        let amount = self.issuer_incentives();
        require!(amount > 0, RocketJoeError::NoIncentives);

        self.issuer_has_withdrawn_incentives = true;
        self.token_incentives_balance = self
            .token_incentives_balance
            .checked_sub(amount)
            .ok_or(RocketJoeError::MathOverflow)?;

        Ok(amount)
    }

    pub fn record_user_incentives_withdrawal(
        &mut self,
        allocation: &mut UserAllocation,
        current_time: i64,
    ) -> Result<u64> {
        self.check_incentives_withdrawal(current_time)?;
        require!(
            !allocation.has_withdrawn_incentives,
            RocketJoeError::IncentivesAlreadyWithdrawn
        );

        let amount = self.user_incentives(allocation)?;
        require!(amount > 0, RocketJoeError::NoIncentives);

        allocation.has_withdrawn_incentives = true;
        self.token_incentives_balance = self
            .token_incentives_balance
            .checked_sub(amount)
            .ok_or(RocketJoeError::MathOverflow)?;

        Ok(amount)
    }

    /// Vault balances above what the event accounts for
    pub fn excess_balances(&self, token_vault_amount: u64, quote_vault_amount: u64) -> (u64, u64) {
        let tracked_tokens = self.token_reserve.saturating_add(self.token_incentives_balance);

        (
            token_vault_amount.saturating_sub(tracked_tokens),
            quote_vault_amount.saturating_sub(self.wsol_reserve),
        )
    }

    pub fn info(&self, launch_event: Pubkey, current_time: i64) -> LaunchEventInfo {
        LaunchEventInfo {
            launch_event,
            issuer: self.issuer,
            token_mint: self.token_mint,
            phase: self.phase(current_time),
            auction_start: self.auction_start,
            phase_one_end: self.phase_one_end(),
            phase_one_no_fee_end: self.phase_one_no_fee_end(),
            phase_two_end: self.phase_two_end(),
            current_penalty: self.get_penalty(current_time),
            floor_price: self.floor_price,
            max_allocation: self.max_allocation,
            rjoe_per_sol: self.rjoe_per_sol,
            token_reserve: self.token_reserve,
            token_incentives_balance: self.token_incentives_balance,
            wsol_reserve: self.wsol_reserve,
            wsol_allocated: self.wsol_allocated,
            lp_supply: self.lp_supply,
            participants_count: self.participants_count,
            stopped: self.stopped,
            pair_created: self.pair_created,
        }
    }

    pub fn user_allocation_info(
        &self,
        launch_event: Pubkey,
        allocation: &UserAllocation,
    ) -> Result<UserAllocationInfo> {
        Ok(UserAllocationInfo {
            launch_event,
            user: allocation.user,
            amount: allocation.amount,
            pair_balance: self.user_pair_balance(allocation)?,
            wsol_refund: self.user_wsol_refund(allocation)?,
            incentives: self.user_incentives(allocation)?,
            has_withdrawn_pair: allocation.has_withdrawn_pair,
            has_withdrawn_incentives: allocation.has_withdrawn_incentives,
        })
    }
}

/// a * b / c in u128, checked back into u64
pub fn mul_div(a: u64, b: u64, c: u64) -> Result<u64> {
    let result = (a as u128)
        .checked_mul(b as u128)
        .ok_or(RocketJoeError::MathOverflow)?
        .checked_div(c as u128)
        .ok_or(RocketJoeError::DivisionByZero)?;

    u64::try_from(result).map_err(|_| error!(RocketJoeError::TypeCastFailed))
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_700_000_000;
    const DAY: i64 = 24 * 60 * 60;
    const SOL: u64 = 1_000_000_000;

    fn factory() -> RocketJoeFactory {
        RocketJoeFactory {
            owner: Pubkey::new_unique(),
            rjoe_mint: Pubkey::new_unique(),
            wsol_mint: anchor_spl::token::spl_token::native_mint::ID,
            penalty_collector: Pubkey::new_unique(),
            router: Pubkey::new_unique(),
            amm_config: Pubkey::new_unique(),
            rjoe_per_sol: DEFAULT_RJOE_PER_SOL,
            phase_one_duration: 2 * DAY,
            phase_one_no_fee_duration: DAY,
            phase_two_duration: DAY,
            num_launch_events: 3,
            bump: 255,
            reserved: [0; 8],
        }
    }

    fn params() -> LaunchEventConfig {
        LaunchEventConfig {
            issuer: Pubkey::new_unique(),
            auction_start: START,
            token_amount: 1_050_000,
            // 1/21 rounded up, so the incentives of the amounts used here are exact
            token_incentives_percent: PRECISION / 21 + 1,
            floor_price: PRICE_PRECISION,
            max_withdraw_penalty: PRECISION / 2,
            fixed_withdraw_penalty: PRECISION * 4 / 10,
            max_allocation: 5 * SOL,
            user_timelock: 7 * DAY,
            issuer_timelock: 8 * DAY,
        }
    }

    fn empty_event() -> LaunchEvent {
        LaunchEvent {
            issuer: Pubkey::default(),
            token_mint: Pubkey::default(),
            quote_mint: Pubkey::default(),
            token_vault: Pubkey::default(),
            quote_vault: Pubkey::default(),
            rjoe_mint: Pubkey::default(),
            rjoe_per_sol: 0,
            penalty_collector: Pubkey::default(),
            router: Pubkey::default(),
            amm_config: Pubkey::default(),
            auction_start: 0,
            phase_one_duration: 0,
            phase_one_no_fee_duration: 0,
            phase_two_duration: 0,
            user_timelock: 0,
            issuer_timelock: 0,
            token_incentives_percent: 0,
            floor_price: 0,
            max_withdraw_penalty: 0,
            fixed_withdraw_penalty: 0,
            max_allocation: 0,
            token_reserve: 0,
            token_incentives_balance: 0,
            token_incentives_for_users: 0,
            token_incentive_issuer_refund: 0,
            wsol_reserve: 0,
            wsol_allocated: 0,
            wsol_refund: 0,
            token_allocated: 0,
            lp_supply: 0,
            participants_count: 0,
            initialized: false,
            stopped: false,
            pair_created: false,
            issuer_has_withdrawn_liquidity: false,
            issuer_has_withdrawn_incentives: false,
            pool: None,
            position: None,
            position_nft_account: None,
            index: 0,
            bump: 0,
            reserved: [0; 7],
        }
    }

    fn launch_event_with(params: &LaunchEventConfig) -> LaunchEvent {
        let mut event = empty_event();
        event
            .initialize(
                &factory(),
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                params,
                254,
            )
            .unwrap();
        event
    }

    fn launch_event() -> LaunchEvent {
        launch_event_with(&params())
    }

    fn allocation() -> UserAllocation {
        UserAllocation {
            user: Pubkey::new_unique(),
            launch_event: Pubkey::default(),
            amount: 0,
            has_withdrawn_pair: false,
            has_withdrawn_incentives: false,
            bump: 0,
            reserved: [0; 4],
        }
    }

    #[test]
    fn test_initialize_snapshots_factory() {
        let event = launch_event();
        assert!(event.initialized);
        assert_eq!(event.phase_one_duration, 2 * DAY);
        assert_eq!(event.phase_one_no_fee_duration, DAY);
        assert_eq!(event.phase_two_duration, DAY);
        assert_eq!(event.rjoe_per_sol, DEFAULT_RJOE_PER_SOL);
        assert_eq!(event.index, 3);
        // 1/21 of 1_050_000 is kept for incentives
        assert_eq!(event.token_incentives_balance, 50_000);
        assert_eq!(event.token_incentives_for_users, 50_000);
        assert_eq!(event.token_reserve, 1_000_000);
    }

    #[test]
    fn test_reinitialize_fails() {
        let mut event = launch_event();
        let err = event
            .initialize(
                &factory(),
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                &params(),
                254,
            )
            .unwrap_err();
        assert_eq!(err, RocketJoeError::AlreadyInitialized.into());
    }

    #[test]
    fn test_phases() {
        let event = launch_event();
        assert_eq!(event.phase(START - 1), Phase::NotStarted);
        assert_eq!(event.phase(START), Phase::PhaseOne);
        assert_eq!(event.phase(START + 2 * DAY - 1), Phase::PhaseOne);
        assert_eq!(event.phase(START + 2 * DAY), Phase::PhaseTwo);
        assert_eq!(event.phase(START + 3 * DAY - 1), Phase::PhaseTwo);
        assert_eq!(event.phase(START + 3 * DAY), Phase::PhaseThree);
        assert_eq!(event.phase(START + 300 * DAY), Phase::PhaseThree);
    }

    #[test]
    fn test_penalty_curve() {
        let event = launch_event();
        let max = event.max_withdraw_penalty;

        // No-fee window
        assert_eq!(event.get_penalty(START), 0);
        assert_eq!(event.get_penalty(START + DAY - 1), 0);

        // Linear part starts at zero at the end of the no-fee window
        assert_eq!(event.get_penalty(START + DAY), 0);
        assert_eq!(event.get_penalty(START + DAY + DAY / 2), max / 2);
        assert_eq!(event.get_penalty(START + DAY + DAY / 4), max / 4);

        let before_end = event.get_penalty(START + 2 * DAY - 1);
        assert!(before_end < max);
        assert!(before_end > event.get_penalty(START + 2 * DAY - 2));

        // Phase two
        assert_eq!(event.get_penalty(START + 2 * DAY), event.fixed_withdraw_penalty);
        assert_eq!(
            event.get_penalty(START + 3 * DAY - 1),
            event.fixed_withdraw_penalty
        );
    }

    #[test]
    fn test_penalty_is_monotonic_in_phase_one() {
        let event = launch_event();
        let mut previous = 0;
        for t in (START + DAY..START + 2 * DAY).step_by(3_600) {
            let penalty = event.get_penalty(t);
            assert!(penalty >= previous);
            previous = penalty;
        }
    }

    #[test]
    fn test_deposit() {
        let mut event = launch_event();
        let mut alice = allocation();
        let mut bob = allocation();
        let (alice_key, bob_key) = (alice.user, bob.user);

        let err = event
            .record_deposit(&mut alice, &alice_key, SOL, START - 1)
            .unwrap_err();
        assert_eq!(err, RocketJoeError::NotInPhaseOne.into());

        event.record_deposit(&mut alice, &alice_key, SOL, START).unwrap();
        event.record_deposit(&mut bob, &bob_key, 2 * SOL, START + 10).unwrap();
        event.record_deposit(&mut alice, &alice_key, SOL, START + 20).unwrap();

        assert_eq!(alice.amount, 2 * SOL);
        assert_eq!(bob.amount, 2 * SOL);
        assert_eq!(event.wsol_reserve, alice.amount + bob.amount);
        assert_eq!(event.participants_count, 2);

        let err = event
            .record_deposit(&mut bob, &bob_key, SOL, START + 2 * DAY)
            .unwrap_err();
        assert_eq!(err, RocketJoeError::NotInPhaseOne.into());

        let err = event.record_deposit(&mut bob, &bob_key, 0, START).unwrap_err();
        assert_eq!(err, RocketJoeError::InvalidAmount.into());
    }

    #[test]
    fn test_deposit_above_max_allocation() {
        let mut event = launch_event();
        let mut alice = allocation();
        let user = alice.user;

        let err = event
            .record_deposit(&mut alice, &user, 5 * SOL + 1, START)
            .unwrap_err();
        assert_eq!(err, RocketJoeError::MaxAllocationExceeded.into());
        assert_eq!(alice.amount, 0);
        assert_eq!(event.wsol_reserve, 0);

        event.record_deposit(&mut alice, &user, 4 * SOL, START).unwrap();
        let err = event
            .record_deposit(&mut alice, &user, SOL + 1, START)
            .unwrap_err();
        assert_eq!(err, RocketJoeError::MaxAllocationExceeded.into());
        assert_eq!(alice.amount, 4 * SOL);
        assert_eq!(event.wsol_reserve, 4 * SOL);
    }

    #[test]
    fn test_issuer_cannot_deposit() {
        let mut event = launch_event();
        let mut issuer_allocation = allocation();
        let issuer = event.issuer;

        let err = event
            .record_deposit(&mut issuer_allocation, &issuer, SOL, START)
            .unwrap_err();
        assert_eq!(err, RocketJoeError::IssuerCannotParticipate.into());
    }

    #[test]
    fn test_stopped_event_rejects_deposits_and_withdrawals() {
        let mut event = launch_event();
        let mut alice = allocation();
        let user = alice.user;
        event.record_deposit(&mut alice, &user, SOL, START).unwrap();

        event.stopped = true;
        let err = event.record_deposit(&mut alice, &user, SOL, START).unwrap_err();
        assert_eq!(err, RocketJoeError::Stopped.into());
        let err = event.record_withdraw(&mut alice, SOL, START).unwrap_err();
        assert_eq!(err, RocketJoeError::Stopped.into());
        assert_eq!(alice.amount, SOL);
    }

    #[test]
    fn test_withdraw_fees() {
        let mut event = launch_event();
        let mut alice = allocation();
        let user = alice.user;
        event.record_deposit(&mut alice, &user, 4 * SOL, START).unwrap();

        // Free inside the no-fee window
        assert_eq!(event.record_withdraw(&mut alice, SOL, START + 60).unwrap(), 0);

        // Half of the max penalty (25%) halfway through the fee window
        let fee = event
            .record_withdraw(&mut alice, SOL, START + DAY + DAY / 2)
            .unwrap();
        assert_eq!(fee, SOL / 4);

        // Fixed 40% in phase two
        let fee = event.record_withdraw(&mut alice, SOL, START + 2 * DAY).unwrap();
        assert_eq!(fee, SOL * 4 / 10);

        assert_eq!(alice.amount, SOL);
        assert_eq!(event.wsol_reserve, SOL);

        let err = event
            .record_withdraw(&mut alice, 2 * SOL, START + 2 * DAY)
            .unwrap_err();
        assert_eq!(err, RocketJoeError::InsufficientAllocation.into());

        let err = event.record_withdraw(&mut alice, SOL, START + 3 * DAY).unwrap_err();
        assert_eq!(err, RocketJoeError::UnableToWithdraw.into());
    }

    #[test]
    fn test_pair_allocation_floor_met() {
        let mut event = launch_event();
        let mut alice = allocation();
        let user = alice.user;
        // 1 lamport per token base unit is exactly the floor
        event.record_deposit(&mut alice, &user, 1_000_000, START).unwrap();

        let pair = event.compute_pair_allocation().unwrap();
        assert!(pair.floor_price_met);
        assert_eq!(pair.wsol_amount, 1_000_000);
        assert_eq!(pair.token_amount, 1_000_000);
        assert_eq!(pair.token_incentives_for_users, 50_000);
        assert_eq!(pair.token_incentive_issuer_refund, 0);
    }

    #[test]
    fn test_pair_allocation_floor_not_met() {
        let mut event = launch_event();
        let mut alice = allocation();
        let user = alice.user;
        event.record_deposit(&mut alice, &user, 250_000, START).unwrap();

        let pair = event.compute_pair_allocation().unwrap();
        assert!(!pair.floor_price_met);
        assert_eq!(pair.wsol_amount, 250_000);
        assert_eq!(pair.token_amount, 250_000);
        assert_eq!(pair.token_incentives_for_users, 12_500);
        assert_eq!(pair.token_incentive_issuer_refund, 37_500);

        event.record_pair_created(&pair, 10_000_000).unwrap();
        assert_eq!(event.token_reserve, 750_000);
        assert_eq!(event.wsol_reserve, 0);
        assert_eq!(event.wsol_allocated, 250_000);
        assert_eq!(event.issuer_incentives(), 37_500);
        assert_eq!(event.user_incentives(&alice).unwrap(), 12_500);
    }

    #[test]
    fn test_pair_allocation_without_deposits() {
        let event = launch_event();
        let err = event.compute_pair_allocation().unwrap_err();
        assert_eq!(err, RocketJoeError::NoWsolBalance.into());
    }

    #[test]
    fn test_pair_created_once() {
        let mut event = launch_event();
        let mut alice = allocation();
        let user = alice.user;
        event.record_deposit(&mut alice, &user, SOL, START).unwrap();

        let pair = event.compute_pair_allocation().unwrap();
        event.record_pair_created(&pair, 1_000_000).unwrap();
        let err = event.record_pair_created(&pair, 1_000_000).unwrap_err();
        assert_eq!(err, RocketJoeError::PairAlreadyCreated.into());
    }

    #[test]
    fn test_liquidity_split() {
        let mut event = launch_event();
        let mut alice = allocation();
        let mut bob = allocation();
        let (alice_key, bob_key) = (alice.user, bob.user);
        event.record_deposit(&mut alice, &alice_key, SOL, START).unwrap();
        event.record_deposit(&mut bob, &bob_key, 3 * SOL, START).unwrap();

        let pair = event.compute_pair_allocation().unwrap();
        event
            .record_pair_created(&pair, 8_000_000 + MINIMUM_LIQUIDITY)
            .unwrap();
        assert_eq!(event.lp_supply, 8_000_000);

        let issuer = event.issuer_pair_balance();
        let alice_lp = event.user_pair_balance(&alice).unwrap();
        let bob_lp = event.user_pair_balance(&bob).unwrap();
        assert_eq!(issuer, 4_000_000);
        assert_eq!(alice_lp, 1_000_000);
        assert_eq!(bob_lp, 3_000_000);
        assert_eq!(issuer + alice_lp + bob_lp, event.lp_supply);

        alice.has_withdrawn_pair = true;
        assert_eq!(event.user_pair_balance(&alice).unwrap(), 0);
        event.issuer_has_withdrawn_liquidity = true;
        assert_eq!(event.issuer_pair_balance(), 0);
    }

    #[test]
    fn test_liquidity_withdrawal_checks() {
        let mut event = launch_event();
        let phase_three = START + 3 * DAY;

        let err = event.check_liquidity_withdrawal(false, phase_three).unwrap_err();
        assert_eq!(err, RocketJoeError::UserTimelockNotElapsed.into());

        let err = event
            .check_liquidity_withdrawal(false, phase_three + 7 * DAY)
            .unwrap_err();
        assert_eq!(err, RocketJoeError::PairNotCreated.into());

        event.pair_created = true;
        event.check_liquidity_withdrawal(false, phase_three + 7 * DAY).unwrap();

        let err = event
            .check_liquidity_withdrawal(true, phase_three + 7 * DAY)
            .unwrap_err();
        assert_eq!(err, RocketJoeError::IssuerTimelockNotElapsed.into());
        event.check_liquidity_withdrawal(true, phase_three + 8 * DAY).unwrap();

        let err = event.check_liquidity_withdrawal(false, START + DAY).unwrap_err();
        assert_eq!(err, RocketJoeError::NotInPhaseThree.into());
    }

    #[test]
    fn test_emergency_withdraw() {
        let mut event = launch_event();
        let mut alice = allocation();
        let user = alice.user;
        event.record_deposit(&mut alice, &user, 3 * SOL, START).unwrap();

        let err = event.record_user_emergency_withdraw(&mut alice).unwrap_err();
        assert_eq!(err, RocketJoeError::NotStopped.into());

        event.stop().unwrap();
        assert_eq!(event.stop().unwrap_err(), RocketJoeError::Stopped.into());

        // Full principal, no penalty
        assert_eq!(event.record_user_emergency_withdraw(&mut alice).unwrap(), 3 * SOL);
        assert_eq!(alice.amount, 0);
        assert_eq!(event.wsol_reserve, 0);
        let err = event.record_user_emergency_withdraw(&mut alice).unwrap_err();
        assert_eq!(err, RocketJoeError::NothingToWithdraw.into());

        assert_eq!(event.record_issuer_emergency_withdraw().unwrap(), 1_050_000);
        assert_eq!(event.token_reserve, 0);
        assert_eq!(event.token_incentives_balance, 0);
        let err = event.record_issuer_emergency_withdraw().unwrap_err();
        assert_eq!(err, RocketJoeError::NothingToWithdraw.into());
    }

    #[test]
    fn test_cannot_stop_after_pairing() {
        let mut event = launch_event();
        let mut alice = allocation();
        let user = alice.user;
        event.record_deposit(&mut alice, &user, SOL, START).unwrap();
        let pair = event.compute_pair_allocation().unwrap();
        event.record_pair_created(&pair, 4_000_000 + MINIMUM_LIQUIDITY).unwrap();

        let err = event.stop().unwrap_err();
        assert_eq!(err, RocketJoeError::PairAlreadyCreated.into());
        assert!(!event.stopped);

        // Incentives stay with the participants and the issuer can't take them back
        let err = event.record_issuer_emergency_withdraw().unwrap_err();
        assert_eq!(err, RocketJoeError::NotStopped.into());
        let err = event.record_user_emergency_withdraw(&mut alice).unwrap_err();
        assert_eq!(err, RocketJoeError::NotStopped.into());

        let unlock = START + 3 * DAY + 7 * DAY;
        let (liquidity, _) = event
            .record_user_liquidity_withdrawal(&mut alice, unlock)
            .unwrap();
        assert_eq!(liquidity, 2_000_000);
        assert_eq!(
            event.record_user_incentives_withdrawal(&mut alice, unlock).unwrap(),
            50_000
        );
    }

    #[test]
    fn test_participants_count_tracks_open_deposits() {
        let mut event = launch_event();
        let mut alice = allocation();
        let user = alice.user;

        event.record_deposit(&mut alice, &user, SOL, START).unwrap();
        assert_eq!(event.participants_count, 1);

        event.record_withdraw(&mut alice, SOL / 2, START + 60).unwrap();
        assert_eq!(event.participants_count, 1);
        event.record_withdraw(&mut alice, SOL / 2, START + 60).unwrap();
        assert_eq!(event.participants_count, 0);

        event.record_deposit(&mut alice, &user, SOL, START + 120).unwrap();
        assert_eq!(event.participants_count, 1);

        event.stop().unwrap();
        event.record_user_emergency_withdraw(&mut alice).unwrap();
        assert_eq!(event.participants_count, 0);
    }

    fn paired_event(deposits: &[u64]) -> (LaunchEvent, Vec<UserAllocation>) {
        let mut event = launch_event();
        let mut allocations = vec![];
        for amount in deposits {
            let mut allocation = allocation();
            let user = allocation.user;
            event.record_deposit(&mut allocation, &user, *amount, START).unwrap();
            allocations.push(allocation);
        }
        let pair = event.compute_pair_allocation().unwrap();
        event.record_pair_created(&pair, 4_000_000 + MINIMUM_LIQUIDITY).unwrap();
        (event, allocations)
    }

    #[test]
    fn test_withdraw_liquidity() {
        let (mut event, mut allocations) = paired_event(&[SOL, SOL]);
        let unlock = START + 3 * DAY + 8 * DAY;

        let (liquidity, wsol_refund) = event
            .record_user_liquidity_withdrawal(&mut allocations[0], unlock)
            .unwrap();
        assert_eq!(liquidity, 1_000_000);
        assert_eq!(wsol_refund, 0);
        let err = event
            .record_user_liquidity_withdrawal(&mut allocations[0], unlock)
            .unwrap_err();
        assert_eq!(err, RocketJoeError::LiquidityAlreadyWithdrawn.into());

        let (liquidity, unsold) = event.record_issuer_liquidity_withdrawal(unlock).unwrap();
        assert_eq!(liquidity, 2_000_000);
        assert_eq!(unsold, 0);
        let err = event.record_issuer_liquidity_withdrawal(unlock).unwrap_err();
        assert_eq!(err, RocketJoeError::LiquidityAlreadyWithdrawn.into());

        let mut outsider = allocation();
        let err = event
            .record_user_liquidity_withdrawal(&mut outsider, unlock)
            .unwrap_err();
        assert_eq!(err, RocketJoeError::NothingToWithdraw.into());
    }

    #[test]
    fn test_issuer_gets_unsold_tokens() {
        let mut event = launch_event();
        let mut alice = allocation();
        let user = alice.user;
        event.record_deposit(&mut alice, &user, 400_000, START).unwrap();
        let pair = event.compute_pair_allocation().unwrap();
        event.record_pair_created(&pair, 1_000_000).unwrap();

        let (_, unsold) = event
            .record_issuer_liquidity_withdrawal(START + 11 * DAY)
            .unwrap();
        assert_eq!(unsold, 600_000);
        assert_eq!(event.token_reserve, 0);
    }

    #[test]
    fn test_withdraw_incentives() {
        let (mut event, mut allocations) = paired_event(&[SOL, 3 * SOL]);
        let now = START + 3 * DAY;

        let err = event
            .record_user_incentives_withdrawal(&mut allocations[0], START + 2 * DAY)
            .unwrap_err();
        assert_eq!(err, RocketJoeError::NotInPhaseThree.into());

        let alice = event
            .record_user_incentives_withdrawal(&mut allocations[0], now)
            .unwrap();
        let bob = event
            .record_user_incentives_withdrawal(&mut allocations[1], now)
            .unwrap();
        assert_eq!(alice, 12_500);
        assert_eq!(bob, 37_500);
        assert_eq!(event.token_incentives_balance, 0);

        let err = event
            .record_user_incentives_withdrawal(&mut allocations[0], now)
            .unwrap_err();
        assert_eq!(err, RocketJoeError::IncentivesAlreadyWithdrawn.into());

        // Floor was met, nothing goes back to the issuer
        let err = event.record_issuer_incentives_withdrawal(now).unwrap_err();
        assert_eq!(err, RocketJoeError::NoIncentives.into());
    }

    #[test]
    fn test_issuer_incentives_refund() {
        let mut event = launch_event();
        let mut alice = allocation();
        let user = alice.user;
        event.record_deposit(&mut alice, &user, 250_000, START).unwrap();
        let pair = event.compute_pair_allocation().unwrap();
        event.record_pair_created(&pair, 1_000_000).unwrap();
        let now = START + 3 * DAY;

        assert_eq!(event.record_issuer_incentives_withdrawal(now).unwrap(), 37_500);
        assert_eq!(event.record_user_incentives_withdrawal(&mut alice, now).unwrap(), 12_500);
        assert_eq!(event.token_incentives_balance, 0);
        let err = event.record_issuer_incentives_withdrawal(now).unwrap_err();
        assert_eq!(err, RocketJoeError::IncentivesAlreadyWithdrawn.into());
    }

    #[test]
    fn test_excess_balances() {
        let mut event = launch_event();
        let mut alice = allocation();
        let user = alice.user;
        event.record_deposit(&mut alice, &user, SOL, START).unwrap();

        assert_eq!(event.excess_balances(1_050_000, SOL), (0, 0));
        assert_eq!(event.excess_balances(1_050_007, SOL + 5), (7, 5));
    }

    #[test]
    fn test_wsol_left_by_the_pool_is_refunded() {
        let mut event = launch_event();
        let mut alice = allocation();
        let mut bob = allocation();
        let (alice_key, bob_key) = (alice.user, bob.user);
        event.record_deposit(&mut alice, &alice_key, 100_000, START).unwrap();
        event.record_deposit(&mut bob, &bob_key, 300_000, START).unwrap();

        // The pool rounds and takes 7 lamports less than offered
        let mut pair = event.compute_pair_allocation().unwrap();
        pair.wsol_amount -= 7;
        event.record_pair_created(&pair, 8_000_000 + MINIMUM_LIQUIDITY).unwrap();
        assert_eq!(event.wsol_allocated, 400_000);
        assert_eq!(event.wsol_refund, 7);
        assert_eq!(event.wsol_reserve, 7);

        // Tokens left: unsold reserve plus incentives
        let token_vault = event.token_reserve + event.token_incentives_balance;
        assert_eq!(event.excess_balances(token_vault, 7), (0, 0));
        assert_eq!(event.excess_balances(token_vault, 10), (0, 3));

        let unlock = START + 3 * DAY + 7 * DAY;
        let (alice_lp, alice_wsol) = event
            .record_user_liquidity_withdrawal(&mut alice, unlock)
            .unwrap();
        let (bob_lp, bob_wsol) = event
            .record_user_liquidity_withdrawal(&mut bob, unlock)
            .unwrap();
        assert_eq!((alice_lp, alice_wsol), (1_000_000, 1));
        assert_eq!((bob_lp, bob_wsol), (3_000_000, 5));

        // Rounding dust is all that is left for skim
        assert_eq!(event.wsol_reserve, 1);
        assert_eq!(event.excess_balances(token_vault, 1), (0, 0));
    }

    const MIN_SQRT_PRICE: u128 = 4_295_048_016;
    const MAX_SQRT_PRICE: u128 = 79_226_673_521_066_979_257_578_248_091;

    #[test]
    fn test_liquidity_shares_at_pool_magnitudes() {
        use crate::utils::{get_initial_sqrt_price, get_liquidity_for_adding_liquidity};

        // 9_500 tokens with 9 decimals on sale against 100 SOL
        let mut event = launch_event_with(&LaunchEventConfig {
            token_amount: 9_975 * SOL,
            floor_price: PRICE_PRECISION / 100,
            max_allocation: 100 * SOL,
            ..params()
        });
        assert_eq!(event.token_reserve, 9_500 * SOL);
        let mut alice = allocation();
        let user = alice.user;
        event.record_deposit(&mut alice, &user, 100 * SOL, START).unwrap();

        let pair = event.compute_pair_allocation().unwrap();
        assert!(pair.floor_price_met);
        let sqrt_price = get_initial_sqrt_price(
            pair.token_amount,
            pair.wsol_amount,
            MIN_SQRT_PRICE,
            MAX_SQRT_PRICE,
        )
        .unwrap();
        let liquidity = get_liquidity_for_adding_liquidity(
            pair.token_amount,
            pair.wsol_amount,
            sqrt_price,
            MIN_SQRT_PRICE,
            MAX_SQRT_PRICE,
        )
        .unwrap();
        event.record_pair_created(&pair, liquidity).unwrap();

        // amount * lp_supply does not fit in 128 bits
        assert!(event.lp_supply > u64::MAX as u128);
        assert!((100 * SOL as u128).checked_mul(event.lp_supply).is_none());

        let user_lp = event.user_pair_balance(&alice).unwrap();
        assert_eq!(user_lp, event.lp_supply / 2);
        assert_eq!(user_lp, event.issuer_pair_balance());

        let (withdrawn, _) = event
            .record_user_liquidity_withdrawal(&mut alice, START + 10 * DAY)
            .unwrap();
        assert_eq!(withdrawn, user_lp);
    }

    #[test]
    fn test_uneven_shares_under_floor_add_up() {
        let mut event = launch_event();
        let deposits = [100_003, 200_011, 333_337];
        let mut allocations = vec![];
        for amount in deposits {
            let mut allocation = allocation();
            let user = allocation.user;
            event.record_deposit(&mut allocation, &user, amount, START).unwrap();
            allocations.push(allocation);
        }

        let pair = event.compute_pair_allocation().unwrap();
        assert!(!pair.floor_price_met);
        assert_eq!(pair.token_amount, 633_351);
        event
            .record_pair_created(&pair, 17_979_662_082_206_557_487_110_260_168_746)
            .unwrap();
        assert_eq!(event.lp_supply, 17_979_662_082_206_557_487_110_260_167_746);

        let shares: Vec<u128> = allocations
            .iter()
            .map(|allocation| event.user_pair_balance(allocation).unwrap())
            .collect();
        assert_eq!(
            shares,
            vec![
                1_419_449_994_716_122_946_346_881_387_694,
                2_838_970_959_802_870_580_100_457_918_603,
                4_731_410_086_584_285_217_107_790_777_575,
            ]
        );
        let issuer = event.issuer_pair_balance();
        assert_eq!(issuer, 8_989_831_041_103_278_743_555_130_083_873);

        // Each share floors once, at most one unit per principal is left in the pool
        let total = shares.iter().sum::<u128>() + issuer;
        assert_eq!(total, 17_979_662_082_206_557_487_110_260_167_745);
        assert!(total <= event.lp_supply);
        assert!(event.lp_supply - total <= deposits.len() as u128 + 1);

        // Incentives split the same way, the rest goes back to the issuer
        let incentives: Vec<u64> = allocations
            .iter()
            .map(|allocation| event.user_incentives(allocation).unwrap())
            .collect();
        assert_eq!(incentives, vec![5_000, 10_000, 16_666]);
        assert_eq!(event.token_incentives_for_users, 31_667);
        assert_eq!(event.issuer_incentives(), 18_333);
        assert!(
            incentives.iter().sum::<u64>() + event.issuer_incentives()
                <= event.token_incentives_balance
        );
    }

    #[test]
    fn test_user_allocation_info() {
        let (event, allocations) = paired_event(&[SOL, 3 * SOL]);
        let info = event
            .user_allocation_info(Pubkey::default(), &allocations[1])
            .unwrap();
        assert_eq!(info.user, allocations[1].user);
        assert_eq!(info.amount, 3 * SOL);
        assert_eq!(info.pair_balance, 1_500_000);
        assert_eq!(info.wsol_refund, 0);
        assert_eq!(info.incentives, 37_500);
        assert!(!info.has_withdrawn_pair);

        let mut claimed = allocations[1].clone();
        claimed.has_withdrawn_pair = true;
        claimed.has_withdrawn_incentives = true;
        let info = event.user_allocation_info(Pubkey::default(), &claimed).unwrap();
        assert_eq!(info.pair_balance, 0);
        assert_eq!(info.incentives, 0);
    }

    #[test]
    fn test_zero_incentives() {
        let event = launch_event_with(&LaunchEventConfig {
            token_incentives_percent: 0,
            ..params()
        });
        assert_eq!(event.token_incentives_balance, 0);
        assert_eq!(event.token_reserve, 1_050_000);
    }

    #[test]
    fn test_info() {
        let event = launch_event();
        let info = event.info(Pubkey::default(), START + DAY + DAY / 2);
        assert_eq!(info.phase, Phase::PhaseOne);
        assert_eq!(info.current_penalty, event.max_withdraw_penalty / 2);
        assert_eq!(info.phase_two_end, START + 3 * DAY);
        assert!(!info.pair_created);
    }
}
