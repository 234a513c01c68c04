use clap::Parser;

/// Lecteur CLI pour magnétomètre MAG3110 sur bus I2C
#[derive(Debug, Parser, Clone)]
#[command(name = "mag3110-reader", version)]
pub struct Cli {
    /// Chemin du bus I2C (ex: /dev/i2c-1)
    pub device: String,

    /// Adresse du capteur sur le bus, préfixe hexadécimal accepté (ex: 0x0E)
    pub address: String,

    /// Cadence de mesure (data rate), de 0 à 7
    #[arg(short = 'd', long = "data-rate", default_value_t = 7)]
    pub data_rate: u8,

    /// Ratio de sur-échantillonnage, de 0 à 3
    #[arg(short = 'o', long, default_value_t = 0)]
    pub oversampling: u8,

    /// Intervalle entre deux scrutations, en millisecondes
    #[arg(short = 'i', long, default_value_t = 100)]
    pub interval: u64,

    /// Émet au format "line protocol" InfluxDB sous ce nom de mesure
    #[arg(short = 'l', long)]
    pub line_protocol: Option<String>,
}
