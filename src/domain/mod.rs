pub mod config_data;
pub mod error;
pub mod kubeadm;

pub use config_data::{AutoDerivedConfigData, ConfigData};
pub use error::AppError;
pub use error::TemplateCause;
pub use kubeadm::{DEFAULT_CONFIG_TEMPLATE, MAX_NESTING_DEPTH, NestingTooDeep, config};
