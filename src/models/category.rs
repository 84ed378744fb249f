/// The closed set of spending categories a transaction can fall into.
/// Defined once; never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Cab,
    Restaurants,
    Shopping,
    Entertainment,
    Rent,
    Utilities,
    Fuel,
    Penalties,
    Atm,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cab => "Cab",
            Self::Restaurants => "Restaurants",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Fuel => "Fuel",
            Self::Penalties => "Penalties",
            Self::Atm => "ATM",
            Self::Other => "Other",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Cab,
            Self::Restaurants,
            Self::Shopping,
            Self::Entertainment,
            Self::Rent,
            Self::Utilities,
            Self::Fuel,
            Self::Penalties,
            Self::Atm,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
