pub mod enums;
pub mod symptom;

pub use enums::*;
pub use symptom::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid {field} value: {value}")]
    InvalidLabel { field: String, value: String },

    #[error("Query is empty")]
    EmptyQuery,
}
