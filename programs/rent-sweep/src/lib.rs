use anchor_lang::prelude::*;

declare_id!("CjjskajkSeYgfQxx88wcaLvPSe3RmGgbpzkHpnQevyB6");

pub mod constants;
pub mod errors;
pub mod state;
pub mod contexts;
pub mod instructions;

use contexts::*;

#[program]
pub mod rent_sweep {
    use super::*;

    /// Создание глобальной конфигурации со ставками по умолчанию
    pub fn initialize(ctx: Context<Initialize>, admin: Option<Pubkey>) -> Result<()> {
        instructions::config::initialize(ctx, admin)
    }

    /// Обновление ставок и смена админа
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        platform_fee_bps: u16,
        tier1_share_bps: u16,
        tier2_share_bps: u16,
        new_admin: Option<Pubkey>,
    ) -> Result<()> {
        instructions::config::update_config(
            ctx,
            platform_fee_bps,
            tier1_share_bps,
            tier2_share_bps,
            new_admin,
        )
    }

    /// Регистрация пользователя с привязкой к реферреру
    pub fn initialize_referral(ctx: Context<InitializeReferral>, referrer: Pubkey) -> Result<()> {
        instructions::enroll::initialize_referral(ctx, referrer)
    }

    /// Регистрация пользователя вместе с реферальным кодом
    pub fn register_partner(
        ctx: Context<RegisterPartner>,
        code: String,
        referrer: Option<Pubkey>,
    ) -> Result<()> {
        instructions::enroll::register_partner(ctx, code, referrer)
    }

    /// Регистрация реферального кода зарегистрированным пользователем
    pub fn register_referral_code(ctx: Context<RegisterReferralCode>, code: String) -> Result<()> {
        instructions::code::register_referral_code(ctx, code)
    }

    /// Закрытие пустых токен-аккаунтов и распределение возвращенного рента
    pub fn clean_and_distribute<'info>(
        ctx: Context<'_, '_, '_, 'info, CleanAndDistribute<'info>>,
    ) -> Result<()> {
        instructions::clean::clean_and_distribute(ctx)
    }
}
