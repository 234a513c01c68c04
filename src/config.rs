use std::time::Duration;

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Configuration immuable du lecteur, construite une seule fois depuis la
/// ligne de commande puis passée explicitement à la boucle de scrutation
#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub(crate) device: String,
    pub(crate) address: u8,
    pub(crate) data_rate: u8,
    pub(crate) oversampling: u8,
    pub(crate) interval_ms: u64,
    pub(crate) line_protocol: Option<String>,
}

impl Config {
    /// Valide les arguments et fige la configuration. Les plages sont
    /// rejetées ici, avant le moindre transfert sur le bus: la couche
    /// protocole ne vérifie rien.
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        if cli.data_rate > 7 {
            bail!("le data rate doit être inférieur à 8");
        }

        if cli.oversampling > 3 {
            bail!("le ratio de sur-échantillonnage doit être inférieur à 4");
        }

        Ok(Config {
            device: cli.device.clone(),
            address: parse_address(&cli.address)?,
            data_rate: cli.data_rate,
            oversampling: cli.oversampling,
            interval_ms: cli.interval,
            line_protocol: cli.line_protocol.clone(),
        })
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Adresse 7 bits du capteur, décimale ou préfixée 0x
fn parse_address(texte: &str) -> anyhow::Result<u8> {
    let texte = texte.trim();

    let valeur = match texte.strip_prefix("0x").or_else(|| texte.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => texte.parse::<u8>(),
    };

    match valeur {
        Ok(adresse) => Ok(adresse),
        Err(_) => bail!("adresse de capteur invalide: {}", texte),
    }
}
