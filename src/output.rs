use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Mesure complète du capteur, horodatée en nanosecondes depuis l'epoch
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MagData {
    pub temp: i8,
    pub x: i16,
    pub y: i16,
    pub z: i16,
    pub timestamp_ns: u64,
}

impl MagData {
    /// Format texte simple: quatre lignes, une par grandeur
    pub fn format_plain(&self) -> String {
        format!(
            "temp {} c {}\nmagnetism-x {} microtesla {}\nmagnetism-y {} microtesla {}\nmagnetism-z {} microtesla {}",
            self.temp, self.timestamp_ns,
            self.x, self.timestamp_ns,
            self.y, self.timestamp_ns,
            self.z, self.timestamp_ns,
        )
    }

    /// Format "line protocol" InfluxDB: une seule ligne sous le nom de
    /// mesure donné
    pub fn format_line_protocol(&self, nom: &str) -> String {
        format!(
            "{} temp={},magnetism-x={},magnetism-y={},magnetism-z={} {}",
            nom, self.temp, self.x, self.y, self.z, self.timestamp_ns,
        )
    }
}

/// Horodatage courant en nanosecondes depuis l'epoch
pub fn timestamp_ns() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesure() -> MagData {
        MagData {
            temp: -20,
            x: 4660,
            y: -256,
            z: 1,
            timestamp_ns: 1471197904952378112,
        }
    }

    #[test]
    fn format_plain_emet_quatre_lignes() {
        assert_eq!(
            mesure().format_plain(),
            "temp -20 c 1471197904952378112\n\
             magnetism-x 4660 microtesla 1471197904952378112\n\
             magnetism-y -256 microtesla 1471197904952378112\n\
             magnetism-z 1 microtesla 1471197904952378112"
        );
    }

    #[test]
    fn format_line_protocol_emet_une_seule_ligne() {
        assert_eq!(
            mesure().format_line_protocol("mag3110"),
            "mag3110 temp=-20,magnetism-x=4660,magnetism-y=-256,magnetism-z=1 1471197904952378112"
        );
    }

    #[test]
    fn timestamp_ns_est_croissant() {
        let avant = timestamp_ns();
        let apres = timestamp_ns();
        assert!(avant > 0);
        assert!(apres >= avant);
    }
}
