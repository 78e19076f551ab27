//! Firmware identification

use core::fmt::{self, Display, Formatter};
use arrayvec::ArrayVec;
use uefi::table::{Boot, SystemTable};

use crate::util::ucs2::until_nul;

/// Maximum number of vendor name characters kept
pub const VENDOR_LEN: usize = 64;

/// Identifies the firmware an application runs on. Owns its data so that it
/// can be kept around while the system table is borrowed mutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmwareInfo {
    vendor: ArrayVec<u16, VENDOR_LEN>,
    /// Vendor-specific firmware revision
    pub revision: u32,
    /// Implemented UEFI specification version: `(major, minor)`
    pub uefi_revision: (u16, u16),
}

impl FirmwareInfo {
    pub fn read(system_table: &SystemTable<Boot>) -> FirmwareInfo {
        let vendor = system_table.firmware_vendor().to_u16_slice_with_nul();
        let vendor = until_nul(vendor).unwrap_or(vendor);
        let revision = system_table.uefi_revision();

        FirmwareInfo {
            vendor: vendor.iter().copied().take(VENDOR_LEN).collect(),
            revision: system_table.firmware_revision(),
            uefi_revision: (revision.major(), revision.minor()),
        }
    }

    /// Vendor name without a sentinel, truncated to [`VENDOR_LEN`] characters
    pub fn vendor(&self) -> &[u16] {
        &self.vendor
    }
}

impl Display for FirmwareInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in char::decode_utf16(self.vendor.iter().copied()) {
            fmt::Write::write_char(f, c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        let (major, minor) = self.uefi_revision;
        write!(f, " rev. {:#010x}, UEFI {major}.{minor}", self.revision)
    }
}
