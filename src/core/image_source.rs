//! Handle auf das vom Nutzer gewählte Referenzbild.

use anyhow::{bail, Result};
use std::fmt;
use std::path::Path;

/// Opaker Verweis auf das Referenzbild (URI oder Dateipfad).
///
/// Der Core dekodiert das Bild nie, er reicht nur den Verweis an den
/// Bild-Renderer weiter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageSource {
    uri: String,
}

impl ImageSource {
    /// Erstellt ein Handle; leere Verweise werden abgelehnt.
    pub fn new(uri: impl Into<String>) -> Result<Self> {
        let uri = uri.into();
        if uri.trim().is_empty() {
            bail!("Kein Referenzbild gewählt: leerer Bildverweis");
        }
        Ok(Self { uri })
    }

    /// Erstellt ein Handle aus einem lokalen Dateipfad.
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::new(path.to_string_lossy().into_owned())
    }

    /// Der rohe Verweis (URI oder Pfad).
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Dateiname für Anzeige-Zwecke (letztes Pfadsegment).
    pub fn display_name(&self) -> &str {
        self.uri
            .rsplit(['/', '\\'])
            .find(|segment| !segment.is_empty())
            .unwrap_or(self.uri.as_str())
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}
