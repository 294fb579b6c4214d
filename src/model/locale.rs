use clap::ValueEnum;

/// Language of the display tokens written into exported rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn unknown_name(self) -> &'static str {
        match self {
            Locale::En => "Unknown",
            Locale::Fr => "Nom inconnu",
        }
    }

    pub fn yes_no(self, value: bool) -> &'static str {
        match (self, value) {
            (Locale::En, true) => "Yes",
            (Locale::En, false) => "No",
            (Locale::Fr, true) => "Oui",
            (Locale::Fr, false) => "Non",
        }
    }

    /// Ratio token for players without a single loss.
    pub fn infinite(self) -> &'static str {
        match self {
            Locale::En => "infinite",
            Locale::Fr => "Infini",
        }
    }
}
