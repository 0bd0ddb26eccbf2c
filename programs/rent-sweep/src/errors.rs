use anchor_lang::prelude::*;

#[error_code]
pub enum CleanupError {
    #[msg("Конфигурация уже инициализирована")]
    AlreadyInitialized,

    #[msg("Несанкционированный доступ")]
    Unauthorized,

    #[msg("Неверный параметр")]
    InvalidParameter,

    #[msg("Пользователь уже зарегистрирован")]
    AlreadyEnrolled,

    #[msg("Нельзя указать себя в качестве реферрера")]
    SelfReferral,

    #[msg("Указанный реферрер не зарегистрирован")]
    ReferrerNotEnrolled,

    #[msg("Пользователь не зарегистрирован")]
    NotEnrolled,

    #[msg("Реферальный код уже занят")]
    CodeTaken,

    #[msg("Длина реферального кода должна быть от 1 до 10 байт")]
    InvalidCodeLength,

    #[msg("Кошелек реферрера не соответствует данным регистрации")]
    ReferrerMismatch,

    #[msg("Кошелек реферрера второго уровня не соответствует данным регистрации")]
    Tier2Mismatch,

    #[msg("Аккаунт не подходит для закрытия")]
    AccountIneligible,

    #[msg("Арифметическая ошибка")]
    ArithmeticError,
}
