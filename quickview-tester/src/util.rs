use anyhow::{Result, bail};

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse seed tokens: decimal or `0x`-prefixed hex.
pub fn parse_seeds(tokens: &[String]) -> Result<Vec<u64>> {
    let mut seeds = Vec::with_capacity(tokens.len());
    for token in tokens {
        let parsed = token.strip_prefix("0x").map_or_else(
            || token.parse::<u64>().ok(),
            |hex| u64::from_str_radix(hex, 16).ok(),
        );
        match parsed {
            Some(seed) => seeds.push(seed),
            None => bail!("invalid seed `{token}`"),
        }
    }
    if seeds.is_empty() {
        bail!("at least one seed is required");
    }
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        assert_eq!(split_csv(" alpha, ,beta,  gamma "), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn seeds_accept_decimal_and_hex() {
        let tokens = split_csv("1337, 0xff");
        assert_eq!(parse_seeds(&tokens).expect("valid"), vec![1337, 255]);
        assert!(parse_seeds(&split_csv("nope")).is_err());
        assert!(parse_seeds(&[]).is_err());
    }
}
