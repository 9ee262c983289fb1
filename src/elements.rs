use std::{
    collections::{BTreeSet, HashSet},
    fs, io,
    path::Path,
};

use thiserror::Error;

/// Symbols of the 118 named elements, in order of atomic number.
pub const PERIODIC_TABLE: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Read-only membership test for element symbols.
pub trait ElementLookup {
    fn has(&self, symbol: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSet {
    symbols: BTreeSet<String>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read element table: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse element table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid element symbol {0:?}")]
    InvalidSymbol(String),
}

impl Default for ElementSet {
    fn default() -> Self {
        Self::periodic_table()
    }
}

impl ElementSet {
    pub fn periodic_table() -> Self {
        Self {
            symbols: PERIODIC_TABLE.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn from_symbols<I>(symbols: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let symbols = symbols
            .into_iter()
            .map(Into::into)
            .map(|symbol: String| {
                if symbol.is_empty() || symbol.contains(char::is_whitespace) {
                    Err(Error::InvalidSymbol(symbol))
                } else {
                    Ok(symbol)
                }
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { symbols })
    }

    /// Parses a JSON array of symbols, e.g. `["H", "He", "Li"]`.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let symbols: Vec<String> = serde_json::from_str(json)?;
        Self::from_symbols(symbols)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl ElementLookup for ElementSet {
    fn has(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }
}

impl ElementLookup for HashSet<String> {
    fn has(&self, symbol: &str) -> bool {
        self.contains(symbol)
    }
}

impl ElementLookup for BTreeSet<String> {
    fn has(&self, symbol: &str) -> bool {
        self.contains(symbol)
    }
}

impl ElementLookup for HashSet<&str> {
    fn has(&self, symbol: &str) -> bool {
        self.contains(symbol)
    }
}

impl ElementLookup for BTreeSet<&str> {
    fn has(&self, symbol: &str) -> bool {
        self.contains(symbol)
    }
}

impl ElementLookup for [&str] {
    fn has(&self, symbol: &str) -> bool {
        self.iter().any(|&s| s == symbol)
    }
}

impl<T: ElementLookup + ?Sized> ElementLookup for &T {
    fn has(&self, symbol: &str) -> bool {
        (**self).has(symbol)
    }
}
