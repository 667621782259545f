use rand::Rng;

/// Prefix for Farewell Cover record ids.
pub const FAREWELL_COVER_PREFIX: &str = "SFC-";
/// Prefix for Healthy Elders Club record ids.
pub const HEALTHY_ELDERS_PREFIX: &str = "HEC-";

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ID_SUFFIX_LEN: usize = 6;

/// Generates a human-readable record id: the product prefix followed by six
/// random characters from A-Z0-9. Uniqueness is the caller's responsibility
/// (regenerate until the store reports no collision).
pub fn generate_record_id(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..ID_ALPHABET.len());
            ID_ALPHABET[idx] as char
        })
        .collect();

    format!("{}{}", prefix, suffix)
}

/// Referral codes are the first two letters of each name around a random
/// four-digit number, e.g. "AD4821LO".
pub fn generate_referral_code(first_name: &str, last_name: &str) -> anyhow::Result<String> {
    if first_name.chars().count() < 2 || last_name.chars().count() < 2 {
        anyhow::bail!("first and last name must each have at least two characters");
    }

    let prefix: String = first_name.chars().take(2).collect::<String>().to_uppercase();
    let suffix: String = last_name.chars().take(2).collect::<String>().to_uppercase();
    let number = rand::thread_rng().gen_range(1000..10000);

    Ok(format!("{}{}{}", prefix, number, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_keeps_prefix_and_length() {
        let id = generate_record_id(FAREWELL_COVER_PREFIX);
        assert!(id.starts_with("SFC-"));
        assert_eq!(id.len(), "SFC-".len() + 6);
        assert!(
            id["SFC-".len()..]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn referral_code_shape() {
        let code = generate_referral_code("Ada", "Lovelace").unwrap();
        assert_eq!(code.len(), 8);
        assert!(code.starts_with("AD"));
        assert!(code.ends_with("LO"));
        assert!(code[2..6].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn referral_code_rejects_short_names() {
        assert!(generate_referral_code("A", "Lovelace").is_err());
        assert!(generate_referral_code("Ada", "L").is_err());
    }
}
