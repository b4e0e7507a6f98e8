//! src/error.rs
//!
//! Definieert het centrale fouttype van de crate. Alle fouten worden naar de
//! aanroeper doorgegeven; de engine en de populatie vangen zelf niets af.
//! Een mislukte zet betekent een mogelijk corrupte zoektoestand, dus elke
//! fout laat de volledige solve-aanroep falen.

use std::fmt;
use std::io;

/// Alle foutsoorten die de solver naar buiten kan geven.
#[derive(Debug)]
pub enum Error {
    /// Ongeldige parameter: onbekende strategie- of crossovernaam, budget
    /// groter dan het aantal knopen, beta buiten [0,1], lege componentenset.
    InvalidArgument(String),

    /// Een instantiebestand kon niet worden geparset.
    Parse(String),

    /// Een knoop-id valt buiten het geldige bereik [0, n).
    OutOfBounds { node: usize, num_nodes: usize },

    /// Schending van een engine-contract, zoals het verwijderen van een al
    /// verwijderde knoop of het terugplaatsen van een aanwezige knoop.
    ContractViolation(String),

    /// Onderliggende I/O-fout bij het lezen van een instantiebestand.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Error::Parse(message) => write!(f, "parse error: {message}"),
            Error::OutOfBounds { node, num_nodes } => {
                write!(f, "node {node} out of range [0, {num_nodes})")
            }
            Error::ContractViolation(message) => write!(f, "contract violation: {message}"),
            Error::Io(source) => source.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(source) => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::Io(value)
    }
}

/// Crate-breed resultaattype.
pub type Result<T> = std::result::Result<T, Error>;
