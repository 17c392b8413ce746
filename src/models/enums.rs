use serde::{Deserialize, Serialize};

use super::InputError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Labels are the form options shown to the user; parsing ignores case.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = InputError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($s) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(InputError::InvalidLabel {
                    field: stringify!($name).into(),
                    value: s.into(),
                })
            }
        }
    };
}

str_enum!(Bloating {
    None => "None",
    Mild => "Mild",
    Severe => "Severe",
});

str_enum!(AbdominalPain {
    None => "None",
    Mild => "Mild",
    Severe => "Severe",
});

str_enum!(Diarrhea {
    None => "None",
    Occasional => "Occasional",
    Frequent => "Frequent",
});

str_enum!(Tier {
    Healthy => "Healthy",
    Moderate => "Moderate",
    Unhealthy => "Unhealthy",
});
