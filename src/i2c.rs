use thiserror::Error;

#[cfg(feature = "real-sensors")]
use rppal::i2c::I2c;

/// Erreurs de la session bus et des transferts registre
#[derive(Debug, Error)]
pub enum BusError {
    /// Le noeud du bus n'a pas pu être ouvert
    #[error("ouverture du bus impossible: {0}")]
    OpenFailure(String),

    /// L'adresse du capteur n'a pas pu être sélectionnée sur le bus
    #[error("sélection de l'adresse {0:#04x} impossible: {1}")]
    AddressBindFailure(u8, String),

    /// Un transfert adressé n'a pas déplacé le nombre d'octets attendu
    #[error("transfert I2C incomplet")]
    IoFailure,
}

/// Primitives registre d'une session bus ouverte sur un capteur.
///
/// Une seule opération à la fois par session: l'écriture d'adresse puis la
/// lecture de données ne sont pas atomiques côté logiciel et ne doivent
/// jamais être entrelacées avec une autre opération sur la même session.
pub trait Bus {
    /// Lecture adressée: écrit l'adresse du registre (1 octet) puis lit
    /// `buffer.len()` octets depuis le canal
    fn lecture_registre(&mut self, addr: u8, buffer: &mut [u8]) -> Result<(), BusError>;

    /// Écrit un octet sur le registre donné, en un seul transfert de
    /// 2 octets (adresse + valeur)
    fn ecriture_registre(&mut self, addr: u8, data: u8) -> Result<(), BusError>;
}

#[cfg(feature = "real-sensors")]
impl Bus for I2c {
    fn lecture_registre(&mut self, addr: u8, buffer: &mut [u8]) -> Result<(), BusError> {
        // write_read combine l'écriture d'adresse et la lecture en une seule
        // transaction: soit tout passe, soit l'opération entière échoue
        self.write_read(&[addr], buffer)
            .map_err(|_| BusError::IoFailure)
    }

    fn ecriture_registre(&mut self, addr: u8, data: u8) -> Result<(), BusError> {
        let payload = [addr, data];
        //println!("[I2C] WRITE: {:#04x} <= {:08b}", addr, data);
        match self.write(&payload) {
            Ok(n) if n == payload.len() => Ok(()),
            _ => Err(BusError::IoFailure),
        }
    }
}

/// Ouvre le bus nommé et sélectionne l'adresse du capteur.
///
/// Pas de nouvelle tentative: un seul essai, l'échec est propagé tel quel.
/// rppal désigne les bus par numéro, le numéro final du chemin est donc
/// extrait (/dev/i2c-1 -> bus 1), un numéro nu est aussi accepté. Le
/// descripteur est fermé à la libération du handle; si la sélection
/// d'adresse échoue, le handle est libéré ici même avant de retourner.
#[cfg(feature = "real-sensors")]
pub fn open(path: &str, address: u8) -> Result<I2c, BusError> {
    let bus = numero_bus(path)
        .ok_or_else(|| BusError::OpenFailure(format!("chemin invalide: {}", path)))?;

    let mut i2c = I2c::with_bus(bus).map_err(|e| BusError::OpenFailure(e.to_string()))?;

    i2c.set_slave_address(address as u16)
        .map_err(|e| BusError::AddressBindFailure(address, e.to_string()))?;

    Ok(i2c)
}

/// Numéro de bus depuis un chemin de périphérique (suffixe en chiffres)
#[cfg(feature = "real-sensors")]
fn numero_bus(path: &str) -> Option<u8> {
    let suffixe: String = path
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let suffixe: String = suffixe.chars().rev().collect();
    suffixe.parse().ok()
}

/// Bus simulé piloté par les tests: registres pré-chargés, séquences de
/// valeurs par registre, pannes injectables, journal des transferts.
#[cfg(test)]
pub(crate) mod mock {
    use super::{Bus, BusError};
    use std::collections::{HashMap, HashSet, VecDeque};

    #[derive(Default)]
    pub(crate) struct MockBus {
        registres: HashMap<u8, u8>,
        sequences: HashMap<u8, VecDeque<u8>>,
        pannes_lecture: HashSet<u8>,
        panne_ecriture: bool,
        /// Adresses lues, dans l'ordre d'émission sur le bus
        pub(crate) lectures: Vec<u8>,
        /// Écritures (registre, valeur), dans l'ordre d'émission
        pub(crate) ecritures: Vec<(u8, u8)>,
    }

    impl MockBus {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// Valeur fixe renvoyée à chaque lecture du registre
        pub(crate) fn avec_registre(mut self, addr: u8, valeur: u8) -> Self {
            self.registres.insert(addr, valeur);
            self
        }

        /// Valeurs renvoyées une par une aux lectures successives du registre,
        /// puis retour à la valeur fixe (ou 0) une fois la séquence épuisée
        pub(crate) fn avec_sequence(mut self, addr: u8, valeurs: &[u8]) -> Self {
            self.sequences.insert(addr, valeurs.iter().copied().collect());
            self
        }

        /// Toute lecture de ce registre échoue en IoFailure
        pub(crate) fn avec_panne_lecture(mut self, addr: u8) -> Self {
            self.pannes_lecture.insert(addr);
            self
        }

        /// Toute écriture échoue en IoFailure
        pub(crate) fn avec_panne_ecriture(mut self) -> Self {
            self.panne_ecriture = true;
            self
        }
    }

    impl Bus for MockBus {
        fn lecture_registre(&mut self, addr: u8, buffer: &mut [u8]) -> Result<(), BusError> {
            self.lectures.push(addr);

            if self.pannes_lecture.contains(&addr) {
                return Err(BusError::IoFailure);
            }

            for (i, octet) in buffer.iter_mut().enumerate() {
                let registre = addr.wrapping_add(i as u8);
                let en_sequence = self
                    .sequences
                    .get_mut(&registre)
                    .and_then(|file| file.pop_front());
                *octet = match en_sequence {
                    Some(valeur) => valeur,
                    None => self.registres.get(&registre).copied().unwrap_or(0),
                };
            }

            Ok(())
        }

        fn ecriture_registre(&mut self, addr: u8, data: u8) -> Result<(), BusError> {
            if self.panne_ecriture {
                return Err(BusError::IoFailure);
            }

            self.ecritures.push((addr, data));
            Ok(())
        }
    }
}

#[cfg(all(test, feature = "real-sensors"))]
mod tests {
    use super::numero_bus;

    #[test]
    fn numero_bus_depuis_chemin() {
        assert_eq!(numero_bus("/dev/i2c-1"), Some(1));
        assert_eq!(numero_bus("/dev/i2c-10"), Some(10));
        assert_eq!(numero_bus("3"), Some(3));
        assert_eq!(numero_bus("/dev/i2c-"), None);
        assert_eq!(numero_bus(""), None);
    }
}
