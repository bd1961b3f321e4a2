use rand::{rng, Rng};

/// The 62-symbol, case-sensitive code alphabet
pub const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u64 = 62;

/// Converts a number to base62 representation (0-9, A-Z, a-z)
pub fn encode_base62(mut num: u64) -> String {
    if num == 0 {
        return "0".to_string();
    }

    let mut result = Vec::new();

    while num > 0 {
        result.push(ALPHABET[(num % BASE) as usize]);
        num /= BASE;
    }

    // Reverse and convert to string
    result.reverse();
    String::from_utf8(result).expect("alphabet is ASCII")
}

/// Generates a random base62 character
pub fn random_base62_char() -> char {
    let idx = rng().random_range(0..ALPHABET.len());
    ALPHABET[idx] as char
}

/// True when every character of `s` belongs to the code alphabet
pub fn is_base62(s: &str) -> bool {
    s.bytes().all(|b| ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_base62() {
        assert_eq!(encode_base62(0), "0");
        assert_eq!(encode_base62(61), "z");
        assert_eq!(encode_base62(62), "10");
        assert_eq!(encode_base62(62 * 62), "100");
    }

    #[test]
    fn test_random_char_in_alphabet() {
        for _ in 0..100 {
            assert!(ALPHABET.contains(&(random_base62_char() as u8)));
        }
    }

    #[test]
    fn test_is_base62() {
        assert!(is_base62("Xk9pQ2"));
        assert!(!is_base62("Xk9-Q2"));
        assert!(!is_base62("Xk9 Q2"));
    }
}
