use anchor_lang::prelude::*;
use anchor_spl::token::Token;
use crate::constants::*;
use crate::state::*;

/// Кандидаты на закрытие передаются через remaining_accounts
#[derive(Accounts)]
pub struct CleanAndDistribute<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, GlobalConfig>,

    #[account(mut)]
    pub user: Signer<'info>,

    /// Реферальные данные вызывающего; отсутствие означает,
    /// что пользователь не зарегистрирован
    #[account(
        mut,
        seeds = [REFERRAL_SEED, user.key().as_ref()],
        bump
    )]
    pub referral_state: Option<Account<'info, ReferralState>>,

    /// CHECK: Сверяется с referral_state.referrer в инструкции
    #[account(mut)]
    pub referrer_wallet: Option<AccountInfo<'info>>,

    /// CHECK: Сверяется с referrer_state.referrer в инструкции
    #[account(mut)]
    pub tier2_referrer_wallet: Option<AccountInfo<'info>>,

    /// Реферальные данные реферрера первого уровня;
    /// нужны для проверки кошелька второго уровня
    pub referrer_state: Option<Account<'info, ReferralState>>,

    /// CHECK: Адрес сверяется с config.admin
    #[account(mut, address = config.admin)]
    pub treasury: AccountInfo<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
