//! Enumerated product tags used as filter-match keys.
//!
//! Every tag has a stable slug (the value used in URLs and catalog files) and a
//! display label for the sidebar. `ALL` lists the variants in sidebar order.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use supplestore_core::DomainError;

macro_rules! taxonomy {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $($variant:ident => ($slug:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $slug)]
                $variant,
            )+
        }

        impl $name {
            /// All values, in sidebar order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Slug used in URLs and catalog files.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $slug,)+
                }
            }

            /// Human-readable sidebar label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($slug => Ok($name::$variant),)+
                    other => Err(DomainError::validation(format!(
                        "unknown {}: {other}",
                        $what
                    ))),
                }
            }
        }
    };
}

taxonomy! {
    /// Product category (sidebar "Categorías").
    Category, "category" {
        Proteinas => ("proteinas", "Proteínas"),
        PreEntreno => ("pre-entreno", "Pre-entreno"),
        PostEntreno => ("post-entreno", "Post-entreno"),
        Vitaminas => ("vitaminas", "Vitaminas"),
        Aminoacidos => ("aminoacidos", "Aminoácidos"),
        Quemadores => ("quemadores", "Quemadores"),
        Creatinas => ("creatinas", "Creatinas"),
    }
}

taxonomy! {
    /// Training goal a product supports (sidebar "Objetivo").
    Goal, "goal" {
        Muscle => ("muscle", "Ganar músculo"),
        WeightLoss => ("weight_loss", "Perder peso"),
        Energy => ("energy", "Energía"),
        Performance => ("performance", "Rendimiento"),
        Recovery => ("recovery", "Recuperación"),
        Health => ("health", "Salud"),
    }
}

taxonomy! {
    /// Physical activity a product targets (sidebar "Actividad").
    Activity, "activity" {
        Gym => ("gym", "Gimnasio"),
        Crossfit => ("crossfit", "CrossFit"),
        Running => ("running", "Running"),
        Cycling => ("cycling", "Ciclismo"),
        Swimming => ("swimming", "Natación"),
        TeamSports => ("team_sports", "Deportes de equipo"),
    }
}
