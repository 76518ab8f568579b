mod load_config_data;

pub use load_config_data::{ConfigDataFile, DataFormat, load_config_data_file, parse_config_data};
