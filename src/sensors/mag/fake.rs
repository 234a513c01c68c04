use rand::Rng;

use super::registry;
use crate::i2c::{Bus, BusError};

/// MAG3110 simulé pour tourner sans matériel: répond à l'identification,
/// annonce une mesure prête une scrutation sur deux et produit des valeurs
/// aléatoires sur les registres de mesure.
pub(crate) struct FakeMag {
    scrutations: u32,
}

impl FakeMag {
    pub(crate) fn new() -> Self {
        Self { scrutations: 0 }
    }
}

impl Bus for FakeMag {
    fn lecture_registre(&mut self, addr: u8, buffer: &mut [u8]) -> Result<(), BusError> {
        let mut rng = rand::thread_rng();

        for (i, octet) in buffer.iter_mut().enumerate() {
            *octet = match addr.wrapping_add(i as u8) {
                registry::MAG3110_WHO_AM_I => registry::MAG3110_ID,
                registry::MAG3110_DR_STATUS => {
                    self.scrutations += 1;
                    if self.scrutations % 2 == 0 {
                        1 << registry::MAG3110_STATUS_ZYXDR_BIT
                    } else {
                        0
                    }
                }
                registry::MAG3110_DIE_TEMP => rng.gen_range(15u8..35),
                _ => rng.gen(),
            };
        }

        Ok(())
    }

    fn ecriture_registre(&mut self, _addr: u8, _data: u8) -> Result<(), BusError> {
        Ok(())
    }
}
