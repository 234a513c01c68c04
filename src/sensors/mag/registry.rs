#![allow(unused)]

// MAG3110 (NXP), datasheet: https://www.nxp.com/files/sensors/doc/data_sheet/MAG3110.pdf
pub const MAG3110_ID: u8 = 0xC4;

pub const MAG3110_DR_STATUS: u8 = 0x00; // Statut "data ready" par axe
pub const MAG3110_OUT_X_MSB: u8 = 0x01; // Bits [15:8] de la mesure X
pub const MAG3110_OUT_X_LSB: u8 = 0x02; // Bits [7:0] de la mesure X
pub const MAG3110_OUT_Y_MSB: u8 = 0x03; // Bits [15:8] de la mesure Y
pub const MAG3110_OUT_Y_LSB: u8 = 0x04; // Bits [7:0] de la mesure Y
pub const MAG3110_OUT_Z_MSB: u8 = 0x05; // Bits [15:8] de la mesure Z
pub const MAG3110_OUT_Z_LSB: u8 = 0x06; // Bits [7:0] de la mesure Z
pub const MAG3110_WHO_AM_I: u8 = 0x07; // Identifiant du capteur
pub const MAG3110_SYSMOD: u8 = 0x08; // Mode système courant
pub const MAG3110_OFF_X_MSB: u8 = 0x09; // Bits [14:7] de l'offset X utilisateur
pub const MAG3110_OFF_X_LSB: u8 = 0x0A; // Bits [6:0] de l'offset X utilisateur
pub const MAG3110_OFF_Y_MSB: u8 = 0x0B; // Bits [14:7] de l'offset Y utilisateur
pub const MAG3110_OFF_Y_LSB: u8 = 0x0C; // Bits [6:0] de l'offset Y utilisateur
pub const MAG3110_OFF_Z_MSB: u8 = 0x0D; // Bits [14:7] de l'offset Z utilisateur
pub const MAG3110_OFF_Z_LSB: u8 = 0x0E; // Bits [6:0] de l'offset Z utilisateur
pub const MAG3110_DIE_TEMP: u8 = 0x0F; // Température, signée 8 bits, en °C
pub const MAG3110_CTRL_REG1: u8 = 0x10; // Modes d'opération
pub const MAG3110_CTRL_REG2: u8 = 0x11; // Modes d'opération

pub const MAG3110_STATUS_ZYXDR_BIT: u8 = 3;

pub const MAG3110_CTRL_DR_BIT: u8 = 5;
pub const MAG3110_CTRL_OSR_BIT: u8 = 3;
pub const MAG3110_CTRL_ACTIVE_BIT: u8 = 0;
