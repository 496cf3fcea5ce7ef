// libnfca/src/protocol/parity.rs

//! Odd parity as used on the ISO14443-A air interface: every transmitted
//! byte is followed by one parity bit chosen so the nine bits contain an odd
//! number of ones.

const fn build_odd_parity_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = ((i as u8).count_ones() % 2 == 0) as u8;
        i += 1;
    }
    table
}

/// Odd parity bit for every byte value, evaluated at compile time.
pub const ODD_PARITY: [u8; 256] = build_odd_parity_table();

/// Odd parity bit (0 or 1) for a single byte.
pub fn odd_parity(byte: u8) -> u8 {
    ODD_PARITY[byte as usize]
}

/// Write the odd parity bit of each byte of `data` into the matching slot of
/// `out`.
///
/// # Panics
///
/// Panics if `out` is shorter than `data`.
pub fn parity_bits(data: &[u8], out: &mut [u8]) {
    assert!(
        out.len() >= data.len(),
        "parity buffer too small: {} < {}",
        out.len(),
        data.len()
    );
    for (p, &b) in out.iter_mut().zip(data) {
        *p = odd_parity(b);
    }
}

/// Allocate and return the odd parity bits for `data`.
pub fn parity_vec(data: &[u8]) -> Vec<u8> {
    data.iter().map(|&b| odd_parity(b)).collect()
}

/// Indices of the whole bytes within the first `bits` bits of `data` whose
/// supplied parity bit disagrees with the computed odd parity.
///
/// A trailing partial byte carries no parity bit and is never reported.
///
/// # Panics
///
/// Panics if `bits` does not fit in `data`, or if `parity` has fewer entries
/// than there are whole bytes.
pub fn parity_mismatches(data: &[u8], bits: usize, parity: &[u8]) -> Vec<usize> {
    assert!(
        bits <= data.len() * 8,
        "bit count exceeds buffer: {} bits in {} bytes",
        bits,
        data.len()
    );
    let whole = bits / 8;
    assert!(
        parity.len() >= whole,
        "parity buffer too small: {} < {}",
        parity.len(),
        whole
    );
    data[..whole]
        .iter()
        .zip(&parity[..whole])
        .enumerate()
        .filter(|(_, (b, p))| odd_parity(**b) != **p)
        .map(|(i, _)| i)
        .collect()
}
