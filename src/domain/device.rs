use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

/// Coarse screen-size category supplied by the responsive host.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeviceClass {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}
