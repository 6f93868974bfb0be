use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the multiplied upload counter is written back into the query string.
///
/// `float` keeps the product as a floating point literal (`1000 * 3.0` becomes
/// `3000.0`), `integer` drops the fractional part (`3000`).
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum UploadFormat {
    #[default]
    float,
    integer,
}
