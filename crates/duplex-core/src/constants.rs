//! Public constants of the construction.

/// Initialization vector placed in state word 0 before initialization.
pub const IV: u64 = 0x8040_0c06_0000_0000;

/// Round constants, indexed by `12 - rounds + step`.
pub const ROUND_CONSTANTS: [u64; 16] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b, 0x3c, 0x2d, 0x1e, 0x0f,
];

/// XORed into state word 4 once associated data has been absorbed.
pub const AD_DOMAIN_SEPARATOR: u64 = 1;

/// Right-rotation amounts of the diffusion layer, one pair per state word.
pub const ROTATIONS: [(u32, u32); 5] = [(19, 28), (61, 39), (1, 6), (10, 17), (7, 41)];
