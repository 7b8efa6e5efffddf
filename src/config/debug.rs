//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every denied permission check with the failing condition.
    pub log_permission_denials: bool,

    /// Log per-panel geometry when a layout is initialised.
    pub log_layout: bool,

    /// Log registration outcomes and rank resolution.
    pub log_referral: bool,

    pub log_storage: bool,
}

pub const DF: LogFlags = LogFlags {
    log_storage: true,
    log_referral: true,

    log_permission_denials: false,
    log_layout: false,
};
