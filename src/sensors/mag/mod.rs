use crate::i2c::{Bus, BusError};

pub(crate) mod registry;

#[cfg(feature = "fake-sensors")]
pub(crate) mod fake;

/// Valeur sentinelle renvoyée quand la lecture de température échoue.
/// Le capteur mesure de -40 à +125 °C, -127 ne peut donc pas se produire
/// physiquement, mais reste une valeur possible d'un octet signé: c'est
/// par convention que l'appelant doit la traiter comme une panne.
pub const TEMP_ERREUR: i8 = -127;

/// Vérifie que le périphérique est bien un MAG3110 via le registre WHO_AM_I.
/// Renvoie false autant sur un identifiant différent que sur une panne de
/// lecture: les deux cas sont indiscernables pour l'appelant.
pub fn check_device(bus: &mut impl Bus) -> bool {
    let mut id = [0u8; 1];
    if bus.lecture_registre(registry::MAG3110_WHO_AM_I, &mut id).is_err() {
        return false;
    }
    id[0] == registry::MAG3110_ID
}

/// Configure la cadence de mesure et le sur-échantillonnage, puis active la
/// mesure continue, le tout en une seule écriture sur CTRL_REG1.
///
/// Voir la table 32 du datasheet (ex: 1.2 Hz est DR 7, OSR 0). Les valeurs
/// hors plage (data_rate > 7, oversampling > 3) ne sont pas rejetées ici:
/// le tassement des bits produit alors un motif défini mais sans intérêt,
/// la validation est à la charge de l'appelant.
pub fn configure(bus: &mut impl Bus, data_rate: u8, oversampling: u8) -> bool {
    let mode = (data_rate << registry::MAG3110_CTRL_DR_BIT)
        | (oversampling << registry::MAG3110_CTRL_OSR_BIT)
        | (1 << registry::MAG3110_CTRL_ACTIVE_BIT);

    bus.ecriture_registre(registry::MAG3110_CTRL_REG1, mode).is_ok()
}

/// Statut "data ready" du capteur. Sur panne de lecture, renvoie 0 plutôt
/// que de propager l'erreur: tous les bits passent à "pas prêt" et la
/// boucle de scrutation réessaiera au cycle suivant.
pub fn status(bus: &mut impl Bus) -> u8 {
    let mut valeur = [0u8; 1];
    match bus.lecture_registre(registry::MAG3110_DR_STATUS, &mut valeur) {
        Ok(()) => valeur[0],
        Err(_) => 0,
    }
}

/// Teste le drapeau ZYXDR du statut: les trois axes sont prêts à être lus
pub fn status_ready(status: u8) -> bool {
    status & (1 << registry::MAG3110_STATUS_ZYXDR_BIT) > 0
}

/// Température du capteur en °C (plage -40 à +125), ou [`TEMP_ERREUR`]
/// sur panne de lecture
pub fn temperature(bus: &mut impl Bus) -> i8 {
    let mut valeur = [0u8; 1];
    match bus.lecture_registre(registry::MAG3110_DIE_TEMP, &mut valeur) {
        Ok(()) => valeur[0] as i8,
        Err(_) => TEMP_ERREUR,
    }
}

/// Lit un axe en deux lectures adressées de 1 octet, registre LSB puis
/// registre MSB. L'ordre de lecture et la combinaison MSB<<8|LSB sont
/// imposés par le capteur: toute permutation change le signe et la
/// magnitude de la valeur.
fn axe(bus: &mut impl Bus, lsb: u8, msb: u8) -> Result<i16, BusError> {
    let mut bas = [0u8; 1];
    bus.lecture_registre(lsb, &mut bas)?;

    let mut haut = [0u8; 1];
    bus.lecture_registre(msb, &mut haut)?;

    Ok((((haut[0] as u16) << 8) | bas[0] as u16) as i16)
}

/// Magnitude du champ magnétique en micro-Tesla sur les trois axes.
/// La première lecture en panne interrompt la séquence: aucune valeur
/// d'axe n'est renvoyée, même pour les axes déjà lus.
pub fn magnitude(bus: &mut impl Bus) -> Result<(i16, i16, i16), BusError> {
    let x = axe(bus, registry::MAG3110_OUT_X_LSB, registry::MAG3110_OUT_X_MSB)?;
    let y = axe(bus, registry::MAG3110_OUT_Y_LSB, registry::MAG3110_OUT_Y_MSB)?;
    let z = axe(bus, registry::MAG3110_OUT_Z_LSB, registry::MAG3110_OUT_Z_MSB)?;

    Ok((x, y, z))
}
