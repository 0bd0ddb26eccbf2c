use anchor_lang::prelude::*;

/// Глобальная конфигурация программы
#[account]
pub struct GlobalConfig {
    /// Администратор и казна платформы
    pub admin: Pubkey,
    /// Комиссия платформы в базисных пунктах
    pub platform_fee_bps: u16,
    /// Доля реферрера первого уровня в базисных пунктах
    pub tier1_share_bps: u16,
    /// Доля реферрера второго уровня в базисных пунктах
    pub tier2_share_bps: u16,
    pub bump: u8,
}

impl GlobalConfig {
    pub const SPACE: usize = 32 + 2 + 2 + 2 + 1;
}

/// Реферальные данные одного пользователя.
/// Поле referrer после создания не меняется: привязка возможна только
/// к уже зарегистрированному реферреру, поэтому граф остается лесом.
#[account]
pub struct ReferralState {
    pub owner: Pubkey,
    pub referrer: Pubkey,
    pub registration_time: i64,
    /// Суммарно возвращено лампортов при очистке аккаунтов
    pub total_reclaimed: u64,
    pub bump: u8,
}

impl ReferralState {
    pub const SPACE: usize = 32 + 32 + 8 + 8 + 1;
}

/// Привязка реферального кода к владельцу.
/// Уникальность кода обеспечивается адресом PDA.
#[account]
pub struct ReferralCodeMapping {
    pub code: String,
    pub owner: Pubkey,
    pub bump: u8,
}

impl ReferralCodeMapping {
    // 4 байта префикса строки + максимум 10 байт кода
    pub const SPACE: usize = 4 + 10 + 32 + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_config_space_matches_layout() {
        let config = GlobalConfig {
            admin: Pubkey::new_unique(),
            platform_fee_bps: 2000,
            tier1_share_bps: 5000,
            tier2_share_bps: 2000,
            bump: 255,
        };

        assert_eq!(config.try_to_vec().unwrap().len(), GlobalConfig::SPACE);
    }

    #[test]
    fn referral_state_space_matches_layout() {
        let state = ReferralState {
            owner: Pubkey::new_unique(),
            referrer: Pubkey::new_unique(),
            registration_time: 0,
            total_reclaimed: 0,
            bump: 255,
        };

        assert_eq!(state.try_to_vec().unwrap().len(), ReferralState::SPACE);
    }

    #[test]
    fn code_mapping_space_fits_longest_code() {
        let mapping = ReferralCodeMapping {
            code: "abcde12345".to_string(),
            owner: Pubkey::new_unique(),
            bump: 255,
        };

        assert_eq!(mapping.try_to_vec().unwrap().len(), ReferralCodeMapping::SPACE);
    }
}
