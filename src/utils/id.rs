const HEX_ALPHABET: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

/// Generates a ledger transaction id such as `0x3fa9c01be2d47a65`
///
/// Sixteen random hex digits from `nanoid`, prefixed with `0x`.
///
/// # Examples
/// ```
/// use algorhythm_client::utils::id::ledger_tx_id;
/// let id = ledger_tx_id();
/// assert!(id.starts_with("0x"));
/// assert_eq!(id.len(), 18);
/// ```
pub fn ledger_tx_id() -> String {
    format!("0x{}", nanoid::nanoid!(16, &HEX_ALPHABET))
}
