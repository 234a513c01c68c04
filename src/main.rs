mod cli;
mod config;
mod i2c;
mod output;
mod sensors;

use std::io::Write;
use std::process::exit;
use std::thread::sleep;

use clap::error::ErrorKind;
use clap::Parser;

use cli::Cli;
use config::Config;
use i2c::Bus;
use output::MagData;
use sensors::mag;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            exit(0);
        }
        Err(e) => {
            let _ = e.print();
            exit(1);
        }
    };

    let config = match Config::new(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    #[cfg(feature = "real-sensors")]
    let mut bus = match i2c::open(&config.device, config.address) {
        Ok(bus) => bus,
        Err(e) => {
            eprintln!("[I2C] {}", e);
            exit(2);
        }
    };

    #[cfg(all(feature = "fake-sensors", not(feature = "real-sensors")))]
    let mut bus = {
        eprintln!("[MAG] Capteur simulé actif ({}).", config.device);
        mag::fake::FakeMag::new()
    };

    if !mag::check_device(&mut bus) {
        eprintln!("[MAG] Le périphérique n'est pas un MAG3110.");
        exit(3);
    }

    if !mag::configure(&mut bus, config.data_rate, config.oversampling) {
        eprintln!("[MAG] Échec de l'écriture de configuration.");
        exit(4);
    }

    run(&mut bus, &config);
}

/// Boucle de scrutation: émet une mesure complète à chaque cycle du capteur,
/// sinon dort l'intervalle configuré avant de réessayer
fn run(bus: &mut impl Bus, config: &Config) -> ! {
    let stdout = std::io::stdout();

    loop {
        match poll_once(bus) {
            Some(data) => emit(&mut stdout.lock(), &data, config),
            None => sleep(config.interval()),
        }
    }
}

/// Une scrutation: renvoie la mesure horodatée si le capteur annonce ses
/// trois axes prêts, None sinon
fn poll_once(bus: &mut impl Bus) -> Option<MagData> {
    let status = mag::status(bus);
    if !mag::status_ready(status) {
        return None;
    }

    let temp = mag::temperature(bus);

    let (x, y, z) = match mag::magnitude(bus) {
        Ok(axes) => axes,
        Err(e) => {
            // Panne en régime établi: la mesure est sautée, la boucle continue
            eprintln!("[MAG] Lecture de magnitude échouée: {}", e);
            return None;
        }
    };

    Some(MagData {
        temp,
        x,
        y,
        z,
        timestamp_ns: output::timestamp_ns(),
    })
}

fn emit(sortie: &mut impl Write, data: &MagData, config: &Config) {
    let texte = match &config.line_protocol {
        Some(nom) => data.format_line_protocol(nom),
        None => data.format_plain(),
    };

    let _ = writeln!(sortie, "{}", texte);
    let _ = sortie.flush();
}
