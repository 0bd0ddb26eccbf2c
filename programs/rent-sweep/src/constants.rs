/// Константы для программы очистки аккаунтов и реферальных выплат

/// Семена для PDA-аккаунтов
pub const CONFIG_SEED: &[u8] = b"config_v1";
pub const REFERRAL_SEED: &[u8] = b"referral";
pub const CODE_SEED: &[u8] = b"code";

// Ставки по умолчанию в базисных пунктах (100 bps = 1%)
pub const DEFAULT_PLATFORM_FEE_BPS: u16 = 2000; // 20%
pub const DEFAULT_TIER1_SHARE_BPS: u16 = 5000; // 50%
pub const DEFAULT_TIER2_SHARE_BPS: u16 = 2000; // 20%

// Максимальное значение ставки (10000 bps = 100%)
pub const MAX_BPS: u16 = 10_000;

// Ограничения длины реферального кода в байтах
pub const MIN_CODE_LENGTH: usize = 1;
pub const MAX_CODE_LENGTH: usize = 10;

// Фиксированная плата за регистрацию кода (0.001 SOL)
pub const CODE_REGISTRATION_FEE: u64 = 1_000_000;
