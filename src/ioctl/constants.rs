//! lin_tape driver ABI constants.

/// ioctl magic shared by the lin_tape tape and changer nodes.
pub const LIN_TAPE_IOC_MAGIC: u8 = b'z';

/// Width of the volume tag (barcode) field in an element status record.
pub const BARCODE_LEN: usize = 36;

/// Field widths of the inquiry page.
pub const VEND_ID_LEN: usize = 8;
pub const PROD_ID_LEN: usize = 16;
pub const REV_LEN: usize = 4;

/// Width of the volume id field in the drive parameter page.
pub const VOLID_LEN: usize = 16;
