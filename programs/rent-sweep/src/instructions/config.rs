use anchor_lang::prelude::*;
use crate::constants::*;
use crate::contexts::{Initialize, UpdateConfig};
use crate::errors::CleanupError;
use crate::instructions::utils::{validate_admin, validate_rates};

/// Создание глобальной конфигурации со ставками по умолчанию
pub fn initialize(ctx: Context<Initialize>, admin: Option<Pubkey>) -> Result<()> {
    let payer = ctx.accounts.admin.key();
    let config = &mut ctx.accounts.config;

    // Повторная инициализация запрещена
    require!(
        config.admin == Pubkey::default(),
        CleanupError::AlreadyInitialized
    );

    let new_admin = admin.unwrap_or(payer);
    validate_admin(&new_admin)?;

    config.admin = new_admin;
    config.platform_fee_bps = DEFAULT_PLATFORM_FEE_BPS;
    config.tier1_share_bps = DEFAULT_TIER1_SHARE_BPS;
    config.tier2_share_bps = DEFAULT_TIER2_SHARE_BPS;
    config.bump = ctx.bumps.config;

    msg!("Конфигурация создана, админ: {}", config.admin);
    Ok(())
}

/// Обновление ставок и, при необходимости, смена админа.
/// Все проверки выполняются до первой записи, чтобы неудачная
/// валидация не оставила конфигурацию в частично обновленном виде.
pub fn update_config(
    ctx: Context<UpdateConfig>,
    platform_fee_bps: u16,
    tier1_share_bps: u16,
    tier2_share_bps: u16,
    new_admin: Option<Pubkey>,
) -> Result<()> {
    validate_rates(platform_fee_bps, tier1_share_bps, tier2_share_bps)?;
    if let Some(admin) = new_admin.as_ref() {
        validate_admin(admin)?;
    }

    let config = &mut ctx.accounts.config;
    config.platform_fee_bps = platform_fee_bps;
    config.tier1_share_bps = tier1_share_bps;
    config.tier2_share_bps = tier2_share_bps;

    if let Some(admin) = new_admin {
        config.admin = admin;
    }

    msg!(
        "Конфигурация обновлена: платформа {} bps, уровень 1 {} bps, уровень 2 {} bps",
        platform_fee_bps,
        tier1_share_bps,
        tier2_share_bps
    );
    Ok(())
}
